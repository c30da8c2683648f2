use std::collections::HashMap;

use payloads::responses::{AuthErrorCode, AuthFailure, AuthOutcome};
use yewdux::prelude::*;

/// Submission lifecycle reported by the auth backend boundary. Pages only
/// observe this; every transition happens in [`crate::auth`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Default,
    Pending,
    Complete,
    Failure,
}

/// Shared shape of the login and registration store slices.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct AuthFlow {
    pub submit_state: SubmitState,
    pub error_code: Option<AuthErrorCode>,
    pub error_context: HashMap<String, String>,
    pub field_errors: HashMap<String, String>,
    pub result: Option<AuthOutcome>,
}

impl AuthFlow {
    /// Enter the pending state, dropping stale errors and results.
    pub fn start_submit(&mut self) {
        self.submit_state = SubmitState::Pending;
        self.error_code = None;
        self.error_context.clear();
        self.field_errors.clear();
        self.result = None;
    }

    pub fn complete(&mut self, outcome: AuthOutcome) {
        self.submit_state = SubmitState::Complete;
        self.result = Some(outcome);
    }

    /// Record a structured backend rejection. Field errors are filtered
    /// against `known_fields`: the error map never holds keys the form
    /// doesn't render.
    pub fn fail(&mut self, failure: AuthFailure, known_fields: &[&str]) {
        self.submit_state = SubmitState::Failure;
        self.error_code = Some(failure.error_code);
        self.error_context = failure.context;
        self.merge_field_errors(failure.field_errors, known_fields);
    }

    /// Record a transport-level failure with a displayable message.
    pub fn fail_with_message(&mut self, code: AuthErrorCode, message: String) {
        self.submit_state = SubmitState::Failure;
        self.error_code = Some(code);
        self.error_context =
            HashMap::from([("message".to_string(), message)]);
    }

    pub fn merge_field_errors(
        &mut self,
        errors: HashMap<String, String>,
        known_fields: &[&str],
    ) {
        for (field, message) in errors {
            if known_fields.contains(&field.as_str()) {
                self.field_errors.insert(field, message);
            }
        }
    }

    /// Drop the error for a single field, typically because the user edited
    /// it.
    pub fn clear_field_error(&mut self, field: &str) {
        self.field_errors.remove(field);
    }

    pub fn is_pending(&self) -> bool {
        self.submit_state == SubmitState::Pending
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Store slice observed by the login screen.
#[derive(Default, Clone, PartialEq, Store)]
pub struct LoginState {
    pub flow: AuthFlow,
}

/// Store slice observed by the account-creation screen.
#[derive(Default, Clone, PartialEq, Store)]
pub struct RegistrationState {
    pub flow: AuthFlow,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failure_with_fields(fields: &[(&str, &str)]) -> AuthFailure {
        AuthFailure {
            error_code: AuthErrorCode::ValidationFailed,
            context: HashMap::new(),
            field_errors: fields
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    #[test]
    fn start_submit_clears_previous_failure() {
        let mut flow = AuthFlow::default();
        flow.fail(
            failure_with_fields(&[("email", "Already registered.")]),
            &["email"],
        );
        assert_eq!(flow.submit_state, SubmitState::Failure);

        flow.start_submit();
        assert_eq!(flow.submit_state, SubmitState::Pending);
        assert!(flow.is_pending());
        assert_eq!(flow.error_code, None);
        assert!(flow.field_errors.is_empty());
        assert_eq!(flow.result, None);
    }

    #[test]
    fn fail_filters_unknown_fields() {
        let mut flow = AuthFlow::default();
        flow.fail(
            failure_with_fields(&[
                ("email", "Already registered."),
                ("shoe_size", "Too big."),
            ]),
            &["name", "username", "email", "password"],
        );

        assert_eq!(flow.field_errors.len(), 1);
        assert!(flow.field_errors.contains_key("email"));
    }

    #[test]
    fn clear_field_error_leaves_other_fields_untouched() {
        let mut flow = AuthFlow::default();
        flow.fail(
            failure_with_fields(&[
                ("email", "Already registered."),
                ("username", "Taken."),
            ]),
            &["email", "username"],
        );

        flow.clear_field_error("email");
        assert!(!flow.field_errors.contains_key("email"));
        assert_eq!(
            flow.field_errors.get("username").map(String::as_str),
            Some("Taken.")
        );
    }

    #[test]
    fn complete_records_the_outcome() {
        let mut flow = AuthFlow::default();
        flow.start_submit();
        flow.complete(AuthOutcome {
            success: true,
            redirect_url: Some("/next".to_string()),
        });

        assert_eq!(flow.submit_state, SubmitState::Complete);
        assert_eq!(
            flow.result.as_ref().and_then(|r| r.redirect_url.as_deref()),
            Some("/next")
        );
    }
}
