//! # Hemogate
//!
//! Route access gate for the blood-donation dashboard.
//!
//! Every incoming request is classified by path, the session cookie is
//! verified as an HS256 JWT and the request is either let through or
//! redirected. Donors reach the donor area and their profile, administrators
//! reach the admin area, and anonymous visitors are sent to the login page
//! with the original location preserved.
//!
//! ## Architecture
//!
//! ```text
//! crates/
//! ├── hemogate-core/     # AppError
//! ├── hemogate-config/   # JwtConfig, AccessConfig, ServerConfig
//! ├── hemogate-auth/     # Role, Claims, TokenVerifier
//! └── hemogate-access/   # RouteClassifier, AccessPolicy, AccessGate
//! src/
//! ├── cli/               # token issuing and dry-run checks
//! ├── middleware/        # gate middleware and session extractors
//! ├── modules/           # placeholder views (auth, dashboard, system)
//! └── utils/             # HTML helpers
//! ```
//!
//! ## Decision table
//!
//! | Class | No credential | Invalid credential | Wrong role | Right role |
//! |---|---|---|---|---|
//! | auth page | Allow | Allow | home of role | home of role |
//! | admin area | login | login | configured | Allow |
//! | user area | login | login | configured | Allow |
//! | profile | login | login | configured | Allow |
//! | public | Allow | Allow | Allow | Allow |
//!
//! "login" carries `?redirect=<original path>`; "configured" follows
//! [`hemogate_config::RoleMismatchPolicy`].

pub mod cli;
pub mod logging;
pub mod metrics;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod utils;

pub use hemogate_access as access;
pub use hemogate_auth as auth;
pub use hemogate_config as config;
