use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::utils::storage::StorageError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_label: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserResponse,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserResponse {
    pub id: String,
    pub employee_id: String,
    pub name: String,
    pub email: String,
    pub role: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AttendanceResponse {
    pub id: i64,
    pub employee_id: String,
    pub date: NaiveDate,
    pub check_in_time: DateTime<Utc>,
    #[serde(default)]
    pub check_out_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLeaveRequest {
    pub leave_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LeaveRequestResponse {
    pub id: i64,
    pub employee_id: String,
    pub leave_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateLeaveStatusRequest {
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEmployeeRequest {
    pub employee_id: String,
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeResponse {
    pub id: String,
    pub employee_id: String,
    pub name: String,
    pub email: String,
    pub role: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

use leptos::*;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl From<StorageError> for ApiError {
    fn from(error: StorageError) -> Self {
        ApiError::request_failed(error.to_string())
    }
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "VALIDATION_ERROR".to_string(),
            details: None,
        }
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNKNOWN".to_string(),
            details: None,
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REQUEST_FAILED".to_string(),
            details: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialize_create_leave_request_snake_case_fields() {
        let req = CreateLeaveRequest {
            leave_type: "annual".into(),
            start_date: NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 1, 3).unwrap(),
            reason: "family trip".into(),
        };
        let v = serde_json::to_value(&req).unwrap();
        assert_eq!(v["leave_type"], serde_json::json!("annual"));
        assert_eq!(v["start_date"], serde_json::json!("2025-01-02"));
        assert_eq!(v["end_date"], serde_json::json!("2025-01-03"));
        assert_eq!(v["reason"], serde_json::json!("family trip"));
    }

    #[test]
    fn serialize_login_request_omits_missing_device_label() {
        let req = LoginRequest {
            email: "alice@example.com".into(),
            password: "secret".into(),
            device_label: None,
        };
        let v = serde_json::to_value(&req).unwrap();
        assert!(v.get("device_label").is_none());
    }

    #[test]
    fn deserialize_login_response() {
        let raw = r#"{
            "token": "tok-1",
            "user": {
                "id": "u1",
                "employee_id": "E0001",
                "name": "Bob",
                "email": "bob@example.com",
                "role": "admin"
            }
        }"#;
        let lr: LoginResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(lr.token, "tok-1");
        assert_eq!(lr.user.role, "admin");
        assert_eq!(lr.user.employee_id, "E0001");
    }

    #[test]
    fn deserialize_attendance_without_check_out() {
        let raw = r#"{
            "id": 7,
            "employee_id": "E0001",
            "date": "2025-01-02",
            "check_in_time": "2025-01-02T09:00:00Z"
        }"#;
        let record: AttendanceResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(record.id, 7);
        assert!(record.check_out_time.is_none());
    }

    #[test]
    fn api_error_helpers_set_expected_codes() {
        let validation = ApiError::validation("invalid payload");
        assert_eq!(validation.code, "VALIDATION_ERROR");
        assert_eq!(validation.error, "invalid payload");
        assert!(validation.details.is_none());

        let unknown = ApiError::unknown("something failed");
        assert_eq!(unknown.code, "UNKNOWN");

        let request_failed = ApiError::request_failed("network error");
        assert_eq!(request_failed.code, "REQUEST_FAILED");
    }

    #[test]
    fn api_error_display_and_string_conversion_match_error_text() {
        let error = ApiError::unknown("boom");
        assert_eq!(format!("{}", error), "boom");

        let raw: String = ApiError::validation("bad input").into();
        assert_eq!(raw, "bad input");
    }

    #[test]
    fn storage_error_converts_to_request_failed() {
        let error: ApiError = crate::utils::storage::StorageError::Unavailable.into();
        assert_eq!(error.code, "REQUEST_FAILED");
        assert!(error.error.contains("storage"));
    }
}
