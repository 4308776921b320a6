use contracts::shared::api_error::ApiError;
use contracts::system::auth::{LoginRequest, LoginResponse, LOGIN_PATH};
use gloo_net::http::Request;

use crate::shared::api_utils::AppConfig;

/// Login with username and password
///
/// The only call made without a bearer token.
pub async fn login(
    config: &AppConfig,
    username: String,
    password: String,
) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest { username, password };

    let response = Request::post(&config.api_url(LOGIN_PATH))
        .json(&request)
        .map_err(|e| ApiError::Network(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| ApiError::Network(format!("Failed to send request: {}", e)))?;

    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    if !response.ok() {
        log::warn!("login rejected: {} {}", status, body);
        // 401 here means bad credentials, not an expired session
        return Err(ApiError::Status { status, body });
    }

    let login: LoginResponse = serde_json::from_str(&body)?;
    if login.token.trim().is_empty() {
        return Err(ApiError::Empty);
    }
    Ok(login)
}
