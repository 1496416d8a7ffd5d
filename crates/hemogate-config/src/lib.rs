//! # Hemogate Config
//!
//! Configuration types for hemogate, loaded from environment variables:
//!
//! - [`jwt`]: shared signing secret and token timing
//! - [`access`]: session cookie name, route prefixes and role mismatch policy
//! - [`server`]: listen addresses
//!
//! # Example
//!
//! ```ignore
//! use hemogate_config::{AccessConfig, JwtConfig, ServerConfig};
//!
//! let jwt_config = JwtConfig::from_env();
//! let access_config = AccessConfig::from_env();
//! let server_config = ServerConfig::from_env();
//! ```

pub mod access;
pub mod jwt;
pub mod server;

pub use access::{AccessConfig, RoleMismatchPolicy};
pub use jwt::JwtConfig;
pub use server::ServerConfig;
