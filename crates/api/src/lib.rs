//! `userhub-api` — HTTP surface for the user management service.
//!
//! The request pipeline runs, outer to inner: access logging → error
//! containment → bearer-token guard (protected routes only) → handler.
//! Protection is a per-route attribute decided at registration time; see
//! [`app::routes::route_table`].

pub mod app;
pub mod context;
pub mod middleware;
