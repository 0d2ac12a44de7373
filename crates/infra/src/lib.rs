//! `userhub-infra` — infrastructure adapters.
//!
//! Storage lives behind the [`UserStore`] trait so the HTTP layer stays free
//! of hidden global state; the composition root owns the concrete store and
//! passes it in explicitly.

pub mod store;

pub use store::{InMemoryUserStore, UserStore};
