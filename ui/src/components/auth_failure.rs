use std::collections::HashMap;

use payloads::responses::AuthErrorCode;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AuthFailureMessageProps {
    pub error_code: AuthErrorCode,
    #[prop_or_default]
    pub context: HashMap<String, String>,
}

/// Failure banner for a backend error code. Pages pass the code and context
/// through untouched; interpreting them happens only here.
#[function_component]
pub fn AuthFailureMessage(props: &AuthFailureMessageProps) -> Html {
    let message = match props.error_code {
        AuthErrorCode::InvalidCredentials => {
            "The username, email, or password you entered is incorrect. \
             Please try again."
                .to_string()
        }
        AuthErrorCode::AccountDisabled => {
            "This account has been disabled. Contact support to restore \
             access."
                .to_string()
        }
        AuthErrorCode::TooManyAttempts => {
            match props.context.get("retry_after_seconds") {
                Some(seconds) => format!(
                    "Too many failed attempts. Try again in {seconds} \
                     seconds."
                ),
                None => "Too many failed attempts. Please wait a moment \
                         and try again."
                    .to_string(),
            }
        }
        AuthErrorCode::ValidationFailed => {
            "Please correct the highlighted fields and resubmit.".to_string()
        }
        AuthErrorCode::InternalError | AuthErrorCode::Unknown => props
            .context
            .get("message")
            .cloned()
            .unwrap_or_else(|| {
                "Something went wrong on our end. Please try again."
                    .to_string()
            }),
    };

    html! {
        <div class="p-4 rounded-md bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800">
            <p class="text-sm text-red-700 dark:text-red-400">{message}</p>
        </div>
    }
}
