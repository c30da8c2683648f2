use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub const EMAIL_MAX_LEN: usize = 255;
pub const NAME_MAX_LEN: usize = 255;

/// Validation result for email addresses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailValidation {
    Valid,
    Empty,
    TooLong,
    MissingAtSign,
}

impl EmailValidation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            Self::Valid => None,
            Self::Empty => Some("Email is required."),
            Self::TooLong => Some("Email must be at most 255 characters."),
            Self::MissingAtSign => Some("Please enter a valid email address."),
        }
    }
}

/// Validate an email address.
///
/// Shape checks only; the backend has the final say.
pub fn validate_email(email: &str) -> EmailValidation {
    if email.trim().is_empty() {
        return EmailValidation::Empty;
    }
    if email.len() > EMAIL_MAX_LEN {
        return EmailValidation::TooLong;
    }
    if !email.contains('@') {
        return EmailValidation::MissingAtSign;
    }
    EmailValidation::Valid
}

/// Login submission. Ambient navigational query parameters ride along
/// flattened, so tracking and deep-link context reaches the backend
/// unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email_or_username: String,
    pub password: String,
    #[serde(flatten)]
    pub query_params: HashMap<String, String>,
}

/// Account-creation submission. `honor_code` mirrors `terms_of_service`;
/// the backend contract tracks both.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub terms_of_service: bool,
    pub honor_code: bool,
    #[serde(flatten)]
    pub query_params: HashMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_validation_rejects_bad_shapes() {
        assert_eq!(validate_email(""), EmailValidation::Empty);
        assert_eq!(validate_email("   "), EmailValidation::Empty);
        assert_eq!(
            validate_email("no-at-sign.example.com"),
            EmailValidation::MissingAtSign
        );
        let long = format!("{}@x.com", "a".repeat(EMAIL_MAX_LEN));
        assert_eq!(validate_email(&long), EmailValidation::TooLong);
        assert!(validate_email("kebede@example.com").is_valid());
    }

    #[test]
    fn login_request_flattens_query_params() {
        let request = LoginRequest {
            email_or_username: "kebede_p".into(),
            password: "hunter2".into(),
            query_params: HashMap::from([(
                "next".to_string(),
                "/courses".to_string(),
            )]),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["email_or_username"], "kebede_p");
        assert_eq!(value["next"], "/courses");
        assert!(value.get("query_params").is_none());
    }
}
