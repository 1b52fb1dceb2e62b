//! Account form checks performed before anything is dispatched.

use thiserror::Error;

/// Minimum secret length accepted at registration.
pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("All fields are required")]
    MissingFields,

    #[error("Password must be at least 6 characters")]
    PasswordTooShort,

    #[error("Passwords do not match")]
    PasswordMismatch,
}

#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Validated registration input handed to the identity handler.
#[derive(Debug, Clone)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl RegistrationForm {
    pub fn validate(self) -> Result<RegisterRequest, FormError> {
        if [&self.name, &self.email, &self.password, &self.confirm_password]
            .iter()
            .any(|field| field.is_empty())
        {
            return Err(FormError::MissingFields);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(FormError::PasswordTooShort);
        }
        if self.password != self.confirm_password {
            return Err(FormError::PasswordMismatch);
        }
        Ok(RegisterRequest {
            name: self.name,
            email: self.email,
            password: self.password,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(self) -> Result<LoginRequest, FormError> {
        if self.email.is_empty() || self.password.is_empty() {
            return Err(FormError::MissingFields);
        }
        Ok(LoginRequest {
            email: self.email,
            password: self.password,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(password: &str, confirm: &str) -> RegistrationForm {
        RegistrationForm {
            name: "Anna".into(),
            email: "a@x.com".into(),
            password: password.into(),
            confirm_password: confirm.into(),
        }
    }

    #[test]
    fn valid_registration_passes() {
        let request = form("secret1", "secret1").validate().unwrap();
        assert_eq!(request.email, "a@x.com");
    }

    #[test]
    fn registration_checks_in_order() {
        assert_eq!(form("", "").validate().unwrap_err(), FormError::MissingFields);
        assert_eq!(form("abc", "abc").validate().unwrap_err(), FormError::PasswordTooShort);
        assert_eq!(
            form("secret1", "secret2").validate().unwrap_err(),
            FormError::PasswordMismatch
        );
    }

    #[test]
    fn login_requires_both_fields() {
        let missing = LoginForm {
            email: "a@x.com".into(),
            password: String::new(),
        };
        assert_eq!(missing.validate().unwrap_err(), FormError::MissingFields);
    }
}
