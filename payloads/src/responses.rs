use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Outcome of an accepted auth submission.
///
/// `redirect_url` is the backend's post-auth destination. When absent, the
/// frontend picks a local default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthOutcome {
    pub success: bool,
    #[serde(default)]
    pub redirect_url: Option<String>,
}

/// Machine-readable failure categories from the auth backend.
///
/// The frontend renders these through its failure-message component; codes
/// the client doesn't know about fold into `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuthErrorCode {
    InvalidCredentials,
    AccountDisabled,
    TooManyAttempts,
    ValidationFailed,
    InternalError,
    #[serde(other)]
    Unknown,
}

impl AuthErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "invalid-credentials",
            Self::AccountDisabled => "account-disabled",
            Self::TooManyAttempts => "too-many-attempts",
            Self::ValidationFailed => "validation-failed",
            Self::InternalError => "internal-error",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for AuthErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured rejection payload from the auth backend.
///
/// `field_errors` maps form field names to messages; `context` carries
/// code-specific details (retry windows, support links) for the failure
/// message component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthFailure {
    pub error_code: AuthErrorCode,
    #[serde(default)]
    pub context: HashMap<String, String>,
    #[serde(default)]
    pub field_errors: HashMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_payload_parses_with_field_errors() {
        let body = r#"{
            "error_code": "validation-failed",
            "field_errors": {"email": "This email is already registered."}
        }"#;

        let failure: AuthFailure = serde_json::from_str(body).unwrap();
        assert_eq!(failure.error_code, AuthErrorCode::ValidationFailed);
        assert!(failure.context.is_empty());
        assert_eq!(
            failure.field_errors.get("email").map(String::as_str),
            Some("This email is already registered.")
        );
    }

    #[test]
    fn unknown_error_codes_fold_into_unknown() {
        let body = r#"{"error_code": "brand-new-code"}"#;
        let failure: AuthFailure = serde_json::from_str(body).unwrap();
        assert_eq!(failure.error_code, AuthErrorCode::Unknown);
    }

    #[test]
    fn outcome_tolerates_missing_redirect() {
        let outcome: AuthOutcome =
            serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(outcome.success);
        assert_eq!(outcome.redirect_url, None);
    }
}
