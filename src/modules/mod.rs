//! Placeholder views served behind the access gate.
//!
//! The real dashboard is rendered elsewhere; these views exist so every
//! gated path resolves to something and reads the verified session.
//!
//! - [`auth`]: login, register and logout
//! - [`dashboard`]: admin home, donor home and donor profile
//! - [`system`]: landing, unauthorized, health and not-found
//!
//! Each module has a `controller.rs` with the handlers and a `router.rs`
//! that mounts them at the paths configured in [`hemogate_config::AccessConfig`].

pub mod auth;
pub mod dashboard;
pub mod system;
