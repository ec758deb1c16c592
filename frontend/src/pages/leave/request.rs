use chrono::NaiveDate;
use leptos::*;

use crate::{
    api::{ApiClient, ApiError, CreateLeaveRequest},
    components::{
        error::InlineErrorMessage,
        layout::{Layout, SuccessMessage},
    },
    state::leaves::{submit_leave, use_leaves},
};

pub const LEAVE_TYPES: &[(&str, &str)] = &[
    ("annual", "Annual leave"),
    ("sick", "Sick leave"),
    ("personal", "Personal leave"),
];

fn validate_leave_form(
    leave_type: &str,
    start: &str,
    end: &str,
    reason: &str,
) -> Result<CreateLeaveRequest, String> {
    if !LEAVE_TYPES.iter().any(|(value, _)| *value == leave_type) {
        return Err("Select a leave type.".to_string());
    }
    let start_date = NaiveDate::parse_from_str(start, "%Y-%m-%d")
        .map_err(|_| "Start date must be in YYYY-MM-DD format.".to_string())?;
    let end_date = NaiveDate::parse_from_str(end, "%Y-%m-%d")
        .map_err(|_| "End date must be in YYYY-MM-DD format.".to_string())?;
    if end_date < start_date {
        return Err("End date must not be before the start date.".to_string());
    }
    let reason = reason.trim();
    if reason.is_empty() {
        return Err("Enter a reason for the leave.".to_string());
    }
    Ok(CreateLeaveRequest {
        leave_type: leave_type.to_string(),
        start_date,
        end_date,
        reason: reason.to_string(),
    })
}

#[component]
pub fn LeaveRequestPage() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let (_state, set_state) = use_leaves();
    let leave_type = create_rw_signal(String::from("annual"));
    let start_input = create_rw_signal(String::new());
    let end_input = create_rw_signal(String::new());
    let reason_input = create_rw_signal(String::new());
    let message = create_rw_signal(None::<ApiError>);
    let success = create_rw_signal(None::<String>);
    let pending = create_rw_signal(false);

    let on_submit = move |_| {
        if pending.get_untracked() {
            return;
        }
        message.set(None);
        success.set(None);
        let request = match validate_leave_form(
            &leave_type.get_untracked(),
            &start_input.get_untracked(),
            &end_input.get_untracked(),
            &reason_input.get_untracked(),
        ) {
            Ok(request) => request,
            Err(text) => {
                message.set(Some(ApiError::validation(text)));
                return;
            }
        };
        pending.set(true);
        let api = api.clone();
        spawn_local(async move {
            match submit_leave(set_state, &api, request).await {
                Ok(_) => {
                    success.set(Some("Leave request submitted for approval.".into()));
                    start_input.set(String::new());
                    end_input.set(String::new());
                    reason_input.set(String::new());
                }
                Err(err) => message.set(Some(err)),
            }
            pending.set(false);
        });
    };

    view! {
        <Layout>
            <div class="space-y-6 max-w-xl">
                <div>
                    <h1 class="text-2xl font-bold">"Request Leave"</h1>
                    <p class="mt-1 text-sm text-gray-600 dark:text-gray-400">
                        "Submitted requests wait for an administrator's decision."
                    </p>
                </div>

                <div class="rounded-lg border border-gray-200 dark:border-gray-800 p-4 space-y-4">
                    <div>
                        <label class="block text-sm font-medium text-gray-700 dark:text-gray-300">"Leave type"</label>
                        <select
                            class="mt-1 block w-full border border-gray-300 dark:border-gray-700 rounded-md px-3 py-2 bg-transparent"
                            on:change=move |ev| leave_type.set(event_target_value(&ev))
                        >
                            {LEAVE_TYPES
                                .iter()
                                .map(|(value, label)| {
                                    view! {
                                        <option value=*value selected=move || leave_type.get() == *value>
                                            {*label}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </div>
                    <div class="flex space-x-3">
                        <div class="flex-1">
                            <label class="block text-sm font-medium text-gray-700 dark:text-gray-300">"Start date"</label>
                            <input
                                type="date"
                                class="mt-1 block w-full border border-gray-300 dark:border-gray-700 rounded-md px-3 py-2 bg-transparent"
                                prop:value={move || start_input.get()}
                                on:input=move |ev| start_input.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="flex-1">
                            <label class="block text-sm font-medium text-gray-700 dark:text-gray-300">"End date"</label>
                            <input
                                type="date"
                                class="mt-1 block w-full border border-gray-300 dark:border-gray-700 rounded-md px-3 py-2 bg-transparent"
                                prop:value={move || end_input.get()}
                                on:input=move |ev| end_input.set(event_target_value(&ev))
                            />
                        </div>
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-gray-700 dark:text-gray-300">"Reason"</label>
                        <textarea
                            class="mt-1 block w-full border border-gray-300 dark:border-gray-700 rounded-md px-3 py-2 bg-transparent"
                            rows="3"
                            prop:value={move || reason_input.get()}
                            on:input=move |ev| reason_input.set(event_target_value(&ev))
                        ></textarea>
                    </div>
                    <button
                        class="w-full px-4 py-2 bg-blue-600 text-white font-semibold rounded-md hover:bg-blue-700 disabled:opacity-50"
                        disabled={move || pending.get()}
                        on:click=on_submit
                    >
                        <i class="fas fa-calendar mr-2"></i>
                        {move || if pending.get() { "Submitting..." } else { "Submit request" }}
                    </button>
                </div>

                <InlineErrorMessage error={message.into()} />
                <Show when=move || success.get().is_some()>
                    <SuccessMessage message={success.get().unwrap_or_default()} />
                </Show>
            </div>
        </Layout>
    }
}
