use super::{
    client::ApiClient,
    types::{ApiError, CreateLeaveRequest, LeaveRequestResponse, UpdateLeaveStatusRequest},
};

impl ApiClient {
    pub async fn create_leave(
        &self,
        request: CreateLeaveRequest,
    ) -> Result<LeaveRequestResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let headers = self.auth_headers()?;
        let response = self
            .http_client()
            .post(format!("{}/leaves", base_url))
            .headers(headers)
            .json(&request)
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

    pub async fn get_my_leaves(&self) -> Result<Vec<LeaveRequestResponse>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let headers = self.auth_headers()?;
        let response = self
            .http_client()
            .get(format!("{}/leaves/me", base_url))
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

    pub async fn get_pending_leaves(&self) -> Result<Vec<LeaveRequestResponse>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let headers = self.auth_headers()?;
        let response = self
            .http_client()
            .get(format!("{}/leaves?status=pending", base_url))
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

    pub async fn update_leave_status(
        &self,
        leave_id: i64,
        status_value: &str,
    ) -> Result<LeaveRequestResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let headers = self.auth_headers()?;
        let response = self
            .http_client()
            .put(format!("{}/leaves/{}/status", base_url, leave_id))
            .headers(headers)
            .json(&UpdateLeaveStatusRequest {
                status: status_value.to_string(),
            })
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
