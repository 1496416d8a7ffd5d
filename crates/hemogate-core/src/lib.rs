//! # Hemogate Core
//!
//! Shared error type for the hemogate HTTP surface.
//!
//! - [`errors`]: [`AppError`], an HTTP-aware error with JSON response conversion
//!
//! # Example
//!
//! ```ignore
//! use hemogate_core::AppError;
//!
//! let error = AppError::unauthorized("Missing verified session");
//! ```

pub mod errors;

pub use errors::AppError;
