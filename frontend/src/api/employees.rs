use super::{
    client::ApiClient,
    types::{ApiError, CreateEmployeeRequest, EmployeeResponse},
};

impl ApiClient {
    pub async fn create_employee(
        &self,
        request: CreateEmployeeRequest,
    ) -> Result<EmployeeResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let headers = self.auth_headers()?;
        let response = self
            .http_client()
            .post(format!("{}/employees", base_url))
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
}
