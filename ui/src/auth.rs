//! Dispatch boundary for the account screens.
//!
//! Pages hand a prepared request to one of these functions and then only
//! observe their store slice; the network call and every slice transition
//! happen here.

use payloads::{ClientError, requests, responses::AuthErrorCode};
use yewdux::prelude::*;

use crate::forms;
use crate::get_api_client;
use crate::state::{LoginState, RegistrationState};

/// Fire a login submission. Fire-and-forget: progress and outcome are
/// reported through [`LoginState`].
pub fn dispatch_login(
    dispatch: Dispatch<LoginState>,
    request: requests::LoginRequest,
) {
    dispatch.reduce_mut(|state| state.flow.start_submit());

    yew::platform::spawn_local(async move {
        let api_client = get_api_client();
        match api_client.login(&request).await {
            Ok(outcome) => {
                tracing::debug!(success = outcome.success, "login accepted");
                dispatch.reduce_mut(|state| state.flow.complete(outcome));
            }
            Err(ClientError::Rejected(failure)) => {
                tracing::debug!(code = %failure.error_code, "login rejected");
                dispatch.reduce_mut(|state| {
                    state.flow.fail(failure, forms::login::FIELDS);
                });
            }
            Err(error) => {
                tracing::warn!(%error, "login request failed");
                dispatch.reduce_mut(|state| {
                    state.flow.fail_with_message(
                        AuthErrorCode::InternalError,
                        error.to_string(),
                    );
                });
            }
        }
    });
}

/// Fire an account-creation submission, reported through
/// [`RegistrationState`].
pub fn dispatch_registration(
    dispatch: Dispatch<RegistrationState>,
    request: requests::RegisterRequest,
) {
    dispatch.reduce_mut(|state| state.flow.start_submit());

    yew::platform::spawn_local(async move {
        let api_client = get_api_client();
        match api_client.register(&request).await {
            Ok(outcome) => {
                tracing::debug!(
                    success = outcome.success,
                    "registration accepted"
                );
                dispatch.reduce_mut(|state| state.flow.complete(outcome));
            }
            Err(ClientError::Rejected(failure)) => {
                tracing::debug!(
                    code = %failure.error_code,
                    "registration rejected"
                );
                dispatch.reduce_mut(|state| {
                    state.flow.fail(failure, forms::register::FIELDS);
                });
            }
            Err(error) => {
                tracing::warn!(%error, "registration request failed");
                dispatch.reduce_mut(|state| {
                    state.flow.fail_with_message(
                        AuthErrorCode::InternalError,
                        error.to_string(),
                    );
                });
            }
        }
    });
}
