use std::fmt;
use std::str::FromStr;

use auth::Role;
use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::user::errors::EmailError;
use crate::user::errors::UserIdError;
use crate::user::errors::ValidationError;

/// Registered user as held by the store.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub college_id: String,
    pub name: String,
    pub email: EmailAddress,
    pub phone: String,
    pub password_hash: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

/// User record ready to be inserted; the store assigns its identifier.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub college_id: String,
    pub name: String,
    pub email: EmailAddress,
    pub phone: String,
    pub password_hash: String,
    pub role: Role,
}

/// User unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Generate a new random user ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a user ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, UserIdError> {
        Uuid::parse_str(s)
            .map(UserId)
            .map_err(|e| UserIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type
///
/// Validates email format using RFC 5322 compliant parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Raw signup fields as submitted; any of them may be absent.
#[derive(Clone, Default)]
pub struct SignupForm {
    pub college_id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
}

/// Validated signup request.
pub struct SignupCommand {
    pub college_id: String,
    pub name: String,
    pub email: EmailAddress,
    pub phone: String,
    pub password: String,
    pub role: Role,
}

impl TryFrom<SignupForm> for SignupCommand {
    type Error = ValidationError;

    /// Every missing field is reported at once, before format checks.
    fn try_from(form: SignupForm) -> Result<Self, Self::Error> {
        let mut missing = Vec::new();
        let college_id = required(form.college_id, "college_id", &mut missing);
        let name = required(form.name, "name", &mut missing);
        let email = required(form.email, "email", &mut missing);
        let phone = required(form.phone, "phone", &mut missing);
        let password = required(form.password, "password", &mut missing);
        let role = required(form.role, "role", &mut missing);

        match (college_id, name, email, phone, password, role) {
            (Some(college_id), Some(name), Some(email), Some(phone), Some(password), Some(role)) => {
                Ok(Self {
                    college_id: college_id.trim().to_string(),
                    name: name.trim().to_string(),
                    email: EmailAddress::new(email.trim().to_string())?,
                    phone: phone.trim().to_string(),
                    password,
                    role: role.parse()?,
                })
            }
            _ => Err(ValidationError::MissingFields(missing)),
        }
    }
}

impl fmt::Debug for SignupCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupCommand")
            .field("college_id", &self.college_id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("phone", &self.phone)
            .field("password", &"<redacted>")
            .field("role", &self.role)
            .finish()
    }
}

/// Login credentials; exist for the duration of a single login call.
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    /// # Errors
    /// * `MissingFields` - Email or password absent or blank
    pub fn new(email: Option<String>, password: Option<String>) -> Result<Self, ValidationError> {
        let mut missing = Vec::new();
        let email = required(email, "email", &mut missing);
        let password = required(password, "password", &mut missing);

        match (email, password) {
            (Some(email), Some(password)) => Ok(Self {
                email: email.trim().to_string(),
                password,
            }),
            _ => Err(ValidationError::MissingFields(missing)),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub token: String,
    pub user: User,
}

fn required(
    value: Option<String>,
    field: &'static str,
    missing: &mut Vec<&'static str>,
) -> Option<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Some(v),
        _ => {
            missing.push(field);
            None
        }
    }
}
