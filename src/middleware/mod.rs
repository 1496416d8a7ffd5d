//! Middleware and extractors for request processing.
//!
//! # Modules
//!
//! - [`gate`]: the access gate run in front of every route
//! - [`session`]: extractors for the session verified by the gate
//!
//! # Request Flow
//!
//! 1. Browser sends a request, with the `token` cookie once signed in
//! 2. [`gate::access_gate`] classifies the path and, for protected classes,
//!    verifies the cookie
//! 3. On allow, the verified claims are stored as an [`session::AuthSession`]
//!    request extension and the view runs
//! 4. Otherwise the browser receives a `307` redirect and the view never runs
//!
//! # Example
//!
//! ```ignore
//! use crate::middleware::session::DonorSession;
//!
//! async fn profile(DonorSession(session): DonorSession) -> impl IntoResponse {
//!     format!("donor {}", session.subject_id())
//! }
//! ```

pub mod gate;
pub mod session;
