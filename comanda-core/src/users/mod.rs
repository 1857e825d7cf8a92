//! User registration and listing

mod form;
mod password;
mod registry;

pub use form::{FieldError, FormErrors, FormField, ValidRegistration, validate_registration};
pub use password::{PasswordStrength, generate_password, password_strength};
pub use registry::UserRegistry;
