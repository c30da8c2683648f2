use reqwest::StatusCode;
use serde::Serialize;

use crate::{requests, responses};

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// An API client for interfacing with the auth backend.
pub struct APIClient {
    pub address: String,
    pub inner_client: reqwest::Client,
}

/// Helper methods for http actions
impl APIClient {
    fn format_url(&self, path: &str) -> String {
        format!("{}/api/{path}", &self.address)
    }

    async fn post(&self, path: &str, body: &impl Serialize) -> ReqwestResult {
        let request = self.inner_client.post(self.format_url(path)).json(body);

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }
}

/// Methods on the backend API
impl APIClient {
    /// Submit login credentials. The backend sets the session cookie and
    /// answers with the post-login destination.
    pub async fn login(
        &self,
        details: &requests::LoginRequest,
    ) -> Result<responses::AuthOutcome, ClientError> {
        let response = self.post("login", details).await?;
        ok_auth(response).await
    }

    /// Submit an account-creation request.
    pub async fn register(
        &self,
        details: &requests::RegisterRequest,
    ) -> Result<responses::AuthOutcome, ClientError> {
        let response = self.post("registration", details).await?;
        ok_auth(response).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The backend rejected the submission with a structured failure payload.
    #[error("{}", .0.error_code)]
    Rejected(responses::AuthFailure),
    /// An unhandled API error to display, containing response text.
    #[error("{1}")]
    APIError(StatusCode, String),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
}

/// Deserialize a successful submission into an [`responses::AuthOutcome`],
/// or map the failure body onto an appropriate error.
pub async fn ok_auth(
    response: reqwest::Response,
) -> Result<responses::AuthOutcome, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json::<responses::AuthOutcome>().await?);
    }
    let body = response.text().await?;
    match serde_json::from_str::<responses::AuthFailure>(&body) {
        Ok(failure) => Err(ClientError::Rejected(failure)),
        Err(_) => Err(ClientError::APIError(status, body)),
    }
}
