use super::{
    client::ApiClient,
    types::{ApiError, LoginRequest, LoginResponse, UserResponse},
};

impl ApiClient {
    pub async fn login(&self, mut request: LoginRequest) -> Result<LoginResponse, ApiError> {
        if request.device_label.is_none() {
            request.device_label = Some(Self::ensure_device_label()?);
        }
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .post(format!("{}/auth/login", base_url))
            .json(&request)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        if response.status().is_success() {
            let login_response: LoginResponse = response
                .json()
                .await
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))?;
            Self::persist_token(&login_response.token)?;
            Ok(login_response)
        } else {
            Err(Self::error_body(response).await)
        }
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let headers = self.auth_headers();

        // The local session is gone either way.
        Self::clear_session();

        let Ok(headers) = headers else {
            return Ok(());
        };
        let response = self
            .http_client()
            .post(format!("{}/auth/logout", base_url))
            .headers(headers)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::error_body(response).await)
        }
    }

    pub async fn get_me(&self) -> Result<UserResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let headers = self.auth_headers()?;
        let response = self
            .http_client()
            .get(format!("{}/auth/me", base_url))
            .headers(headers)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        let status = response.status();
        Self::handle_unauthorized_status(status);
        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
        } else {
            Err(Self::error_body(response).await)
        }
    }
}
