use crate::api::{ApiClient, ApiError, CreateLeaveRequest, LeaveRequestResponse};
use leptos::*;

pub const STATUS_APPROVED: &str = "approved";
pub const STATUS_DENIED: &str = "denied";

#[derive(Debug, Clone, Default)]
pub struct LeavesState {
    pub mine: Vec<LeaveRequestResponse>,
    pub pending: Vec<LeaveRequestResponse>,
    pub loading: bool,
}

pub fn use_leaves() -> (ReadSignal<LeavesState>, WriteSignal<LeavesState>) {
    let (leaves_state, set_leaves_state) = create_signal(LeavesState::default());
    (leaves_state, set_leaves_state)
}

pub async fn submit_leave(
    set_leaves_state: WriteSignal<LeavesState>,
    api: &ApiClient,
    request: CreateLeaveRequest,
) -> Result<(), ApiError> {
    set_leaves_state.update(|state| state.loading = true);
    match api.create_leave(request).await {
        Ok(created) => {
            set_leaves_state.update(|state| {
                state.mine.insert(0, created);
                state.loading = false;
            });
            Ok(())
        }
        Err(error) => {
            set_leaves_state.update(|state| state.loading = false);
            Err(error)
        }
    }
}

pub async fn load_my_leaves(
    set_leaves_state: WriteSignal<LeavesState>,
    api: &ApiClient,
) -> Result<(), ApiError> {
    set_leaves_state.update(|state| state.loading = true);
    match api.get_my_leaves().await {
        Ok(mine) => {
            set_leaves_state.update(|state| {
                state.mine = mine;
                state.loading = false;
            });
            Ok(())
        }
        Err(error) => {
            set_leaves_state.update(|state| state.loading = false);
            Err(error)
        }
    }
}

pub async fn load_pending_leaves(
    set_leaves_state: WriteSignal<LeavesState>,
    api: &ApiClient,
) -> Result<(), ApiError> {
    set_leaves_state.update(|state| state.loading = true);
    match api.get_pending_leaves().await {
        Ok(pending) => {
            set_leaves_state.update(|state| {
                state.pending = pending;
                state.loading = false;
            });
            Ok(())
        }
        Err(error) => {
            set_leaves_state.update(|state| state.loading = false);
            Err(error)
        }
    }
}

// Approve or deny, then drop the request from the pending list.
pub async fn decide_leave(
    set_leaves_state: WriteSignal<LeavesState>,
    api: &ApiClient,
    leave_id: i64,
    status_value: &str,
) -> Result<(), ApiError> {
    set_leaves_state.update(|state| state.loading = true);
    match api.update_leave_status(leave_id, status_value).await {
        Ok(decided) => {
            set_leaves_state.update(|state| {
                state.pending.retain(|leave| leave.id != decided.id);
                state.loading = false;
            });
            Ok(())
        }
        Err(error) => {
            set_leaves_state.update(|state| state.loading = false);
            Err(error)
        }
    }
}
