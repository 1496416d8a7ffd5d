//! # Hemogate Access
//!
//! Request-time access control for the blood-donation dashboard.
//!
//! - [`routes`]: [`RouteClassifier`] labels a path with a [`RouteClass`]
//! - [`decision`]: [`AccessPolicy`] turns class + verification into an [`AccessDecision`]
//! - [`gate`]: [`AccessGate`] runs the whole pipeline for one request
//!
//! # Flow
//!
//! ```text
//! path ──► classify ──► Public? ──yes──► Allow
//!                          │ no
//!                          ▼
//!          cookie ──► verify ──► decide ──► Allow | Redirect(target, reason)
//! ```
//!
//! Everything here is synchronous and free of I/O; a gate can be evaluated
//! concurrently from any number of requests.
//!
//! # Example
//!
//! ```ignore
//! use hemogate_access::AccessGate;
//! use hemogate_config::{AccessConfig, JwtConfig};
//!
//! let gate = AccessGate::new(&AccessConfig::from_env(), &JwtConfig::from_env());
//! let decision = gate.evaluate("/dashboard/admin", None);
//! assert_eq!(decision.target(), Some("/login?redirect=/dashboard/admin"));
//! ```

pub mod decision;
pub mod gate;
pub mod routes;

pub use decision::{AccessDecision, AccessPolicy, RedirectReason, encode_return_to};
pub use gate::{AccessGate, Evaluation};
pub use hemogate_config::RoleMismatchPolicy;
pub use routes::{RouteClass, RouteClassifier, normalize_path};
