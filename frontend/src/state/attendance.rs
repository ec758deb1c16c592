use crate::api::{ApiClient, ApiError, AttendanceResponse};
use leptos::*;

#[derive(Debug, Clone, Default)]
pub struct AttendanceState {
    pub today: Option<AttendanceResponse>,
    pub history: Vec<AttendanceResponse>,
    pub loading: bool,
}

pub fn use_attendance() -> (ReadSignal<AttendanceState>, WriteSignal<AttendanceState>) {
    let (attendance_state, set_attendance_state) = create_signal(AttendanceState::default());
    (attendance_state, set_attendance_state)
}

pub fn can_check_in(today: Option<&AttendanceResponse>) -> bool {
    today.is_none()
}

pub fn can_check_out(today: Option<&AttendanceResponse>) -> bool {
    today.map(|record| record.check_out_time.is_none()).unwrap_or(false)
}

pub fn today_status_line(today: Option<&AttendanceResponse>) -> &'static str {
    match today {
        None => "Not checked in yet",
        Some(record) if record.check_out_time.is_none() => "Checked in",
        Some(_) => "Checked out",
    }
}

pub async fn load_today(
    set_attendance_state: WriteSignal<AttendanceState>,
    api: &ApiClient,
) -> Result<(), ApiError> {
    set_attendance_state.update(|state| state.loading = true);
    match api.get_today_attendance().await {
        Ok(today) => {
            set_attendance_state.update(|state| {
                state.today = today;
                state.loading = false;
            });
            Ok(())
        }
        Err(error) => {
            set_attendance_state.update(|state| state.loading = false);
            Err(error)
        }
    }
}

pub async fn check_in(
    set_attendance_state: WriteSignal<AttendanceState>,
    api: &ApiClient,
) -> Result<(), ApiError> {
    set_attendance_state.update(|state| state.loading = true);
    match api.check_in().await {
        Ok(record) => {
            set_attendance_state.update(|state| {
                state.today = Some(record);
                state.loading = false;
            });
            Ok(())
        }
        Err(error) => {
            set_attendance_state.update(|state| state.loading = false);
            Err(error)
        }
    }
}

pub async fn check_out(
    set_attendance_state: WriteSignal<AttendanceState>,
    api: &ApiClient,
    attendance_id: i64,
) -> Result<(), ApiError> {
    set_attendance_state.update(|state| state.loading = true);
    match api.check_out(attendance_id).await {
        Ok(record) => {
            set_attendance_state.update(|state| {
                state.today = Some(record);
                state.loading = false;
            });
            Ok(())
        }
        Err(error) => {
            set_attendance_state.update(|state| state.loading = false);
            Err(error)
        }
    }
}

pub async fn load_history(
    set_attendance_state: WriteSignal<AttendanceState>,
    api: &ApiClient,
) -> Result<(), ApiError> {
    set_attendance_state.update(|state| state.loading = true);
    match api.get_my_attendance().await {
        Ok(history) => {
            set_attendance_state.update(|state| {
                state.history = history;
                state.loading = false;
            });
            Ok(())
        }
        Err(error) => {
            set_attendance_state.update(|state| state.loading = false);
            Err(error)
        }
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn check_in_then_out_updates_today_record() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/attendances/check-in");
            then.status(201).json_body(serde_json::json!({
                "id": 5,
                "employee_id": "E0001",
                "date": "2025-01-06",
                "check_in_time": "2025-01-06T09:00:00Z",
                "check_out_time": null
            }));
        });
        server.mock(|when, then| {
            when.method(PUT).path("/attendances/5/check-out");
            then.status(200).json_body(serde_json::json!({
                "id": 5,
                "employee_id": "E0001",
                "date": "2025-01-06",
                "check_in_time": "2025-01-06T09:00:00Z",
                "check_out_time": "2025-01-06T17:30:00Z"
            }));
        });

        let runtime = leptos::create_runtime();
        ApiClient::persist_token("tok-att").unwrap();
        let api = ApiClient::new_with_base_url(server.url(""));
        let (state, set_state) = create_signal(AttendanceState::default());

        check_in(set_state, &api).await.unwrap();
        assert!(can_check_out(state.get().today.as_ref()));

        let id = state.get().today.as_ref().unwrap().id;
        check_out(set_state, &api, id).await.unwrap();
        assert!(!can_check_out(state.get().today.as_ref()));
        assert!(!state.get().loading);
        runtime.dispose();
    }
}
