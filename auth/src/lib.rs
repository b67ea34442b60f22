//! Authentication primitives for the scheduling service.
//!
//! - Password hashing (Argon2id, fixed cost)
//! - Access token issuance and verification (HS256 JWT, fixed lifetime)
//! - The closed role set and role-membership checks
//!
//! Nothing here performs I/O; every operation is safe to call concurrently.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash).unwrap());
//! assert!(!hasher.verify("not_my_password", &hash).unwrap());
//! ```
//!
//! ## Access Tokens
//! ```
//! use auth::{Role, TokenService};
//! use chrono::Duration;
//!
//! let tokens = TokenService::new(b"secret_key_at_least_32_bytes_long!", Duration::hours(24));
//! let token = tokens.issue("42", Role::Faculty).unwrap();
//! let verified = tokens.verify(&token).unwrap();
//! assert_eq!(verified.subject, "42");
//! assert_eq!(verified.role, Role::Faculty);
//! ```
//!
//! ## Role Gating
//! ```
//! use auth::{AllowedRoles, Role};
//!
//! let admins = AllowedRoles::from(Role::Admin);
//! assert!(admins.permits("admin".parse().unwrap()));
//! assert!(!admins.permits(Role::Faculty));
//! ```

pub mod jwt;
pub mod password;
pub mod role;

pub use jwt::Claims;
pub use jwt::TokenError;
pub use jwt::TokenService;
pub use jwt::VerifiedToken;
pub use jwt::DEFAULT_TOKEN_LIFETIME_HOURS;
pub use jwt::MAX_TOKEN_LIFETIME_HOURS;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use role::AllowedRoles;
pub use role::Role;
pub use role::RoleError;
