//! User storage abstractions.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use userhub_core::{DomainError, DomainResult, User, UserId};

/// Storage boundary consulted by the protected handlers.
///
/// Reads and mutations happen only after authorization succeeds; any failure
/// surfaces as a [`DomainError`] value for the HTTP layer to map.
pub trait UserStore: Send + Sync {
    /// List users, optionally filtered by a case-insensitive search term
    /// matched against name and email.
    fn list(&self, search: Option<&str>) -> Vec<User>;

    fn get(&self, id: UserId) -> Option<User>;

    /// Create a user; fails with a conflict when the email is taken.
    fn create(&self, name: &str, email: &str) -> DomainResult<User>;

    fn update(&self, id: UserId, name: &str, email: &str) -> DomainResult<User>;

    fn delete(&self, id: UserId) -> DomainResult<()>;
}

impl<S> UserStore for Arc<S>
where
    S: UserStore + ?Sized,
{
    fn list(&self, search: Option<&str>) -> Vec<User> {
        (**self).list(search)
    }

    fn get(&self, id: UserId) -> Option<User> {
        (**self).get(id)
    }

    fn create(&self, name: &str, email: &str) -> DomainResult<User> {
        (**self).create(name, email)
    }

    fn update(&self, id: UserId, name: &str, email: &str) -> DomainResult<User> {
        (**self).update(id, name, email)
    }

    fn delete(&self, id: UserId) -> DomainResult<()> {
        (**self).delete(id)
    }
}

struct Inner {
    users: BTreeMap<UserId, User>,
    next_id: u64,
}

/// In-memory store for dev/tests.
pub struct InMemoryUserStore {
    inner: RwLock<Inner>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                users: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Store pre-populated with the canonical demo records.
    pub fn seeded() -> Self {
        let store = Self::new();
        store
            .create("Alice", "alice@example.com")
            .expect("seed record is valid");
        store
            .create("Bob", "bob@example.com")
            .expect("seed record is valid");
        store
    }
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UserStore for InMemoryUserStore {
    fn list(&self, search: Option<&str>) -> Vec<User> {
        let inner = self.inner.read().expect("user store lock poisoned");

        let mut users: Vec<User> = inner.users.values().cloned().collect();
        if let Some(term) = search.map(str::trim).filter(|t| !t.is_empty()) {
            let term = term.to_lowercase();
            users.retain(|u| {
                u.name.to_lowercase().contains(&term) || u.email.to_lowercase().contains(&term)
            });
        }
        users
    }

    fn get(&self, id: UserId) -> Option<User> {
        let inner = self.inner.read().expect("user store lock poisoned");
        inner.users.get(&id).cloned()
    }

    fn create(&self, name: &str, email: &str) -> DomainResult<User> {
        let mut inner = self.inner.write().expect("user store lock poisoned");

        let user = User::new(UserId::new(inner.next_id), name, email)?;
        if inner.users.values().any(|u| u.email == user.email) {
            return Err(DomainError::conflict("a user with this email already exists"));
        }

        inner.next_id += 1;
        inner.users.insert(user.id, user.clone());
        Ok(user)
    }

    fn update(&self, id: UserId, name: &str, email: &str) -> DomainResult<User> {
        let mut inner = self.inner.write().expect("user store lock poisoned");

        if !inner.users.contains_key(&id) {
            return Err(DomainError::not_found());
        }

        let user = User::new(id, name, email)?;
        inner.users.insert(id, user.clone());
        Ok(user)
    }

    fn delete(&self, id: UserId) -> DomainResult<()> {
        let mut inner = self.inner.write().expect("user store lock poisoned");

        match inner.users.remove(&id) {
            Some(_) => Ok(()),
            None => Err(DomainError::not_found()),
        }
    }
}
