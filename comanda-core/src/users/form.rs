//! Registration form validation
//!
//! Every field is checked in one pass. Errors come back in form order so
//! the UI can focus the first invalid field and show each message inline.

use std::fmt;

use serde::Serialize;
use shared::error::{AppError, ErrorCode};
use shared::intent::RegistrationForm;
use shared::models::UserProfile;
use validator::{Validate, ValidationErrors};

use super::password::{PasswordStrength, password_strength};
use crate::utils::validation::{
    MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_PASSWORD_LEN, MAX_PHONE_LEN, MIN_NAME_LEN, MIN_PASSWORD_LEN,
    MIN_PHONE_LEN,
};

/// Form fields, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Name,
    Email,
    Phone,
    Profile,
    Password,
    PasswordConfirmation,
}

impl FormField {
    pub const ORDER: [FormField; 6] = [
        FormField::Name,
        FormField::Email,
        FormField::Phone,
        FormField::Profile,
        FormField::Password,
        FormField::PasswordConfirmation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Profile => "profile",
            Self::Password => "password",
            Self::PasswordConfirmation => "password_confirmation",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: FormField,
    /// `ValidationFailed` unless a more specific code applies
    pub code: ErrorCode,
    pub message: String,
}

/// All field errors of one submission, at most one per field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormErrors {
    pub errors: Vec<FieldError>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Field that should receive focus
    pub fn first_invalid(&self) -> Option<FormField> {
        self.errors.first().map(|e| e.field)
    }

    pub fn message_for(&self, field: FormField) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// Add an error unless the field already has one; keeps form order
    pub fn push(&mut self, field: FormField, message: impl Into<String>) {
        self.push_with_code(field, ErrorCode::ValidationFailed, message);
    }

    pub fn push_with_code(
        &mut self,
        field: FormField,
        code: ErrorCode,
        message: impl Into<String>,
    ) {
        if self.message_for(field).is_some() {
            return;
        }
        self.errors.push(FieldError {
            field,
            code,
            message: message.into(),
        });
        self.errors.sort_by_key(|e| e.field as u8);
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.errors.first() {
            Some(first) => write!(
                f,
                "{} invalid field(s), first {}: {}",
                self.errors.len(),
                first.field,
                first.message
            ),
            None => f.write_str("form is valid"),
        }
    }
}

impl std::error::Error for FormErrors {}

impl From<FormErrors> for AppError {
    fn from(errors: FormErrors) -> Self {
        // The focused field decides the code
        let code = errors
            .errors
            .first()
            .map_or(ErrorCode::ValidationFailed, |e| e.code);
        let focus = errors.first_invalid().map(|f| f.as_str().to_string());
        let mut app = AppError::with_message(code, errors.to_string());
        for error in &errors.errors {
            app = app.with_detail(error.field.as_str(), error.message.clone());
        }
        if let Some(focus) = focus {
            app = app.with_detail("focus", focus);
        }
        app
    }
}

/// Field rules the `validator` derive can express
#[derive(Debug, Validate)]
struct RegistrationRules {
    #[validate(email(message = "Enter a valid e-mail address"))]
    email: String,
    password: String,
    #[validate(must_match(other = "password", message = "Passwords do not match"))]
    password_confirmation: String,
}

/// A submission that passed every check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidRegistration {
    pub name: String,
    /// Trimmed and lower-cased
    pub email: String,
    pub phone: Option<String>,
    pub profile: UserProfile,
    pub password_strength: PasswordStrength,
}

/// Validate a registration form.
///
/// `email_taken` reports whether an address (already normalized) belongs to
/// an existing user.
pub fn validate_registration(
    form: &RegistrationForm,
    email_taken: impl Fn(&str) -> bool,
) -> Result<ValidRegistration, FormErrors> {
    let mut errors = FormErrors::default();

    let name = form.name.trim();
    let email = form.email.trim().to_lowercase();
    let phone = form.phone.trim();

    // Required fields first so the message says "required" rather than "too short"
    if name.is_empty() {
        errors.push(FormField::Name, "Name is required");
    }
    if email.is_empty() {
        errors.push(FormField::Email, "E-mail is required");
    }
    if form.profile.trim().is_empty() {
        errors.push(FormField::Profile, "Select a profile");
    }
    if form.password.is_empty() {
        errors.push(FormField::Password, "Password is required");
    }
    if form.password_confirmation.is_empty() {
        errors.push(FormField::PasswordConfirmation, "Confirm the password");
    }

    let name_len = name.chars().count();
    if !(MIN_NAME_LEN..=MAX_NAME_LEN).contains(&name_len) {
        errors.push(
            FormField::Name,
            format!("Name must have between {MIN_NAME_LEN} and {MAX_NAME_LEN} characters"),
        );
    }
    let password_len = form.password.chars().count();
    if !(MIN_PASSWORD_LEN..=MAX_PASSWORD_LEN).contains(&password_len) {
        errors.push(
            FormField::Password,
            format!(
                "Password must have between {MIN_PASSWORD_LEN} and {MAX_PASSWORD_LEN} characters"
            ),
        );
    }

    let rules = RegistrationRules {
        email: email.clone(),
        password: form.password.clone(),
        password_confirmation: form.password_confirmation.clone(),
    };
    if let Err(failed) = rules.validate() {
        collect_rule_errors(&failed, &mut errors);
    }

    if email.chars().count() > MAX_EMAIL_LEN {
        errors.push(
            FormField::Email,
            format!("E-mail must have at most {MAX_EMAIL_LEN} characters"),
        );
    }
    if !email.is_empty() && email_taken(&email) {
        errors.push_with_code(
            FormField::Email,
            ErrorCode::UserEmailExists,
            "E-mail already registered",
        );
    }

    if !phone.is_empty()
        && let Err(message) = check_phone(phone)
    {
        errors.push(FormField::Phone, message);
    }

    let profile = form.profile.parse::<UserProfile>();
    if profile.is_err() {
        errors.push(FormField::Profile, "Unknown profile");
    }

    match profile {
        Ok(profile) if errors.is_empty() => Ok(ValidRegistration {
            name: name.to_string(),
            email,
            phone: (!phone.is_empty()).then(|| phone.to_string()),
            profile,
            password_strength: password_strength(&form.password),
        }),
        _ => Err(errors),
    }
}

fn collect_rule_errors(failed: &ValidationErrors, errors: &mut FormErrors) {
    for (key, list) in failed.field_errors() {
        let field = match key.as_ref() {
            "email" => FormField::Email,
            "password_confirmation" => FormField::PasswordConfirmation,
            _ => continue,
        };
        if let Some(first) = list.first() {
            let message = first
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("Invalid {field}"));
            errors.push(field, message);
        }
    }
}

/// Digits plus `+ ( ) -` and spaces, 8 to 20 characters
fn check_phone(phone: &str) -> Result<(), String> {
    let allowed = |c: char| c.is_ascii_digit() || matches!(c, '+' | '(' | ')' | '-' | ' ');
    if !phone.chars().all(allowed) {
        return Err("Phone may only contain digits, spaces and + ( ) -".to_string());
    }
    let len = phone.chars().count();
    if !(MIN_PHONE_LEN..=MAX_PHONE_LEN).contains(&len) {
        return Err(format!(
            "Phone must have between {MIN_PHONE_LEN} and {MAX_PHONE_LEN} characters"
        ));
    }
    Ok(())
}
