use reqwest::StatusCode;
use serde_json::json;

use super::{
    client::ApiClient,
    types::{ApiError, AttendanceResponse},
};

impl ApiClient {
    pub async fn check_in(&self) -> Result<AttendanceResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let headers = self.auth_headers()?;
        let response = self
            .http_client()
            .post(format!("{}/attendances/check-in", base_url))
            .headers(headers)
            .json(&json!({}))
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

    // Check-out closes an existing record by id, matching the attendance
    // service contract.
    pub async fn check_out(&self, attendance_id: i64) -> Result<AttendanceResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let headers = self.auth_headers()?;
        let response = self
            .http_client()
            .put(format!(
                "{}/attendances/{}/check-out",
                base_url, attendance_id
            ))
            .headers(headers)
            .json(&json!({}))
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

    pub async fn get_today_attendance(&self) -> Result<Option<AttendanceResponse>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let headers = self.auth_headers()?;
        let response = self
            .http_client()
            .get(format!("{}/attendances/today", base_url))
            .headers(headers)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        let status = response.status();
        // No record yet today is a normal state, not an error.
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Self::handle_unauthorized_status(status);
        if status.is_success() {
            response
                .json()
                .await
                .map(Some)
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
        } else {
            Err(Self::error_body(response).await)
        }
    }

    pub async fn get_my_attendance(&self) -> Result<Vec<AttendanceResponse>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let headers = self.auth_headers()?;
        let response = self
            .http_client()
            .get(format!("{}/attendances/me", base_url))
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
