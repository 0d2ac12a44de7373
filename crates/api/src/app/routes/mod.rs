//! HTTP routes and the registration-time protection table.

use axum::routing::MethodRouter;

pub mod session;
pub mod system;
pub mod users;

/// Whether a route requires a bearer token.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Access {
    Public,
    Protected,
}

/// One route registration: path, protection level, handlers.
pub struct Route {
    pub path: &'static str,
    pub access: Access,
    pub handlers: MethodRouter,
}

impl Route {
    pub fn new(path: &'static str, access: Access, handlers: MethodRouter) -> Self {
        Self {
            path,
            access,
            handlers,
        }
    }
}

/// The full route table, consulted once by the composer.
///
/// Protection is a static per-route attribute; nothing decides it at request
/// time.
pub fn route_table() -> Vec<Route> {
    use axum::routing::get;
    use axum::routing::post;

    vec![
        Route::new("/login", Access::Public, post(session::login)),
        Route::new("/health", Access::Public, get(system::health)),
        Route::new(
            "/api/users",
            Access::Protected,
            get(users::list_users).post(users::create_user),
        ),
        Route::new(
            "/api/users/:id",
            Access::Protected,
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        ),
    ]
}
