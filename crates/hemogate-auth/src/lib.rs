//! # Hemogate Auth
//!
//! Session credential types and verification for hemogate.
//!
//! - [`claims`]: the closed [`Role`] set and verified [`Claims`]
//! - [`jwt`]: [`TokenVerifier`] and development token issuing
//!
//! Credentials are HS256 JWTs signed by the external login service with a
//! secret shared through `JWT_SECRET`. The payload carries at least a
//! `role` (`"ADMIN"` or `"DONOR"`), a subject (`id` or `sub`) and `exp`.
//!
//! # Example
//!
//! ```ignore
//! use hemogate_auth::{Role, TokenVerifier, create_access_token};
//! use hemogate_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//! let token = create_access_token("donor-42", Role::Donor, &config)?;
//!
//! let verifier = TokenVerifier::new(&config);
//! let claims = verifier.verify(Some(&token))?;
//! assert_eq!(claims.role, Role::Donor);
//! ```

pub mod claims;
pub mod jwt;

pub use claims::{Claims, Role};
pub use jwt::{TokenVerifier, VerificationError, create_access_token, create_token_with_ttl};
