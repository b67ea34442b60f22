pub mod claims;
pub mod errors;
pub mod handler;
pub mod service;

pub use claims::Claims;
pub use errors::TokenError;
pub use handler::JwtHandler;
pub use service::TokenService;
pub use service::VerifiedToken;
pub use service::DEFAULT_TOKEN_LIFETIME_HOURS;
pub use service::MAX_TOKEN_LIFETIME_HOURS;
