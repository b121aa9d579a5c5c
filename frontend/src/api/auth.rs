use reqwest::Method;

use super::{
    client::{take_field, ApiClient},
    types::{ApiError, ChangePasswordRequest, LoginRequest, LoginResponse, SessionUser},
};
use crate::utils::storage as storage_utils;

impl ApiClient {
    /// `POST /auth/login`. Persists the token and user unless the account is blocked.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let body = self.send_json(Method::POST, "/auth/login", request).await?;
        let response: LoginResponse = serde_json::from_value(body)
            .map_err(|e| ApiError::unknown(format!("Failed to parse login response: {}", e)))?;

        if response.user.is_blocked {
            log::warn!("Login refused for blocked account {}", response.user.email);
            return Err(ApiError::unauthorized(
                "Your account is blocked. Contact admin.",
            ));
        }

        storage_utils::persist_session(self.store().as_ref(), &response.token, &response.user)
            .map_err(ApiError::unknown)?;
        log::info!("Logged in as {} ({})", response.user.email, response.user.role.as_str());
        Ok(response)
    }

    /// `GET /auth/verify` with the stored token.
    pub async fn verify(&self) -> Result<SessionUser, ApiError> {
        if storage_utils::stored_token(self.store().as_ref()).is_none() {
            return Err(ApiError::unauthorized("No token"));
        }
        let mut body = self.get_json("/auth/verify").await?;
        take_field(&mut body, "user")
    }

    pub async fn change_password(&self, request: &ChangePasswordRequest) -> Result<(), ApiError> {
        self.send_json(Method::PUT, "/setting/change-password", request)
            .await
            .map(|_| ())
    }

    /// Local only; the API keeps no server-side session to revoke.
    pub fn clear_session(&self) {
        storage_utils::clear_session(self.store().as_ref());
    }
}
