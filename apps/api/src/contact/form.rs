use serde::{Deserialize, Serialize};

use super::ContactError;

/// The four user-entered fields. All are required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Partial edit; `None` leaves a field untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FormPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

impl ContactForm {
    pub fn apply(&mut self, patch: FormPatch) {
        if let Some(v) = patch.name {
            self.name = v;
        }
        if let Some(v) = patch.email {
            self.email = v;
        }
        if let Some(v) = patch.subject {
            self.subject = v;
        }
        if let Some(v) = patch.message {
            self.message = v;
        }
    }

    /// Required-field check plus the `local@domain` shape an email input enforces.
    /// Reports the first failing field.
    pub fn validate(&self) -> Result<(), ContactError> {
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
        ] {
            if value.trim().is_empty() {
                return Err(ContactError::Validation(format!("{field} is required")));
            }
        }
        if !looks_like_email(self.email.trim()) {
            return Err(ContactError::Validation(format!(
                "'{}' is not a valid email address",
                self.email
            )));
        }
        Ok(())
    }
}

fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !value.chars().any(char::is_whitespace)
        }
        None => false,
    }
}
