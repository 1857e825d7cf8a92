//! In-memory user registry

use shared::intent::RegistrationForm;
use shared::models::{User, UserStatus};
use shared::util::snowflake_id;

use super::form::{FormErrors, validate_registration};

#[derive(Debug, Clone, Default)]
pub struct UserRegistry {
    users: Vec<User>,
}

impl UserRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an existing user as-is. Returns false when the id or e-mail is taken.
    pub fn insert(&mut self, user: User) -> bool {
        if self.get(user.id).is_some() || self.email_taken(&user.email) {
            return false;
        }
        self.users.push(user);
        true
    }

    /// Validate `form` and add the user. New users start active.
    pub fn register(&mut self, form: &RegistrationForm, now: i64) -> Result<&User, FormErrors> {
        let valid = validate_registration(form, |email| self.email_taken(email))?;

        let id = self.unused_id();
        self.users.push(User {
            id,
            name: valid.name,
            email: valid.email,
            phone: valid.phone,
            profile: valid.profile,
            status: UserStatus::Active,
            created_at: now,
        });
        tracing::debug!(strength = valid.password_strength.as_str(), "User registered");

        Ok(&self.users[self.users.len() - 1])
    }

    /// Snowflake ids only differ by 12 random bits within one millisecond
    fn unused_id(&self) -> i64 {
        loop {
            let id = snowflake_id();
            if self.get(id).is_none() {
                return id;
            }
        }
    }

    pub fn email_taken(&self, email: &str) -> bool {
        self.users.iter().any(|u| u.email.eq_ignore_ascii_case(email))
    }

    pub fn get(&self, id: i64) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Flip Active/Inactive
    pub fn toggle_status(&mut self, id: i64) -> Option<&User> {
        let user = self.users.iter_mut().find(|u| u.id == id)?;
        user.status = user.status.toggled();
        Some(&*user)
    }

    pub fn remove(&mut self, id: i64) -> Option<User> {
        let index = self.users.iter().position(|u| u.id == id)?;
        Some(self.users.remove(index))
    }

    /// Users in registration order
    pub fn list(&self) -> &[User] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
