use leptos::*;
use log::error;

use crate::{
    api::{ApiClient, ApiError},
    components::{
        common::{Button, ButtonVariant},
        error::InlineErrorMessage,
        layout::{Layout, LoadingSpinner},
    },
    pages::leave::status_label::StatusLabel,
    state::leaves::{
        decide_leave, load_pending_leaves, use_leaves, STATUS_APPROVED, STATUS_DENIED,
    },
    utils::time::format_date,
};

#[component]
pub fn ApproveLeavePage() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let (state, set_state) = use_leaves();
    let message = create_rw_signal(None::<ApiError>);

    {
        let api = api.clone();
        create_effect(move |_| {
            let api = api.clone();
            spawn_local(async move {
                if let Err(err) = load_pending_leaves(set_state, &api).await {
                    error!("failed to load pending leave requests: {}", err);
                }
            });
        });
    }

    let decide = {
        let api = api.clone();
        move |leave_id: i64, status_value: &'static str| {
            message.set(None);
            let api = api.clone();
            spawn_local(async move {
                if let Err(err) = decide_leave(set_state, &api, leave_id, status_value).await {
                    message.set(Some(err));
                }
            });
        }
    };

    view! {
        <Layout>
            <div class="space-y-6">
                <div>
                    <h1 class="text-2xl font-bold">"Approve Leave"</h1>
                    <p class="mt-1 text-sm text-gray-600 dark:text-gray-400">
                        "Pending requests from all employees."
                    </p>
                </div>

                <InlineErrorMessage error={message.into()} />

                <Show when=move || state.get().loading>
                    <LoadingSpinner/>
                </Show>

                <Show when=move || !state.get().loading && state.get().pending.is_empty()>
                    <p class="text-sm text-gray-500">
                        "Nothing waiting for a decision."
                    </p>
                </Show>

                <Show when=move || !state.get().pending.is_empty()>
                    <ul class="space-y-3">
                        <For
                            each=move || state.get().pending.clone()
                            key=|leave| leave.id
                            children={
                                let decide = decide.clone();
                                move |leave| {
                                    let approve = {
                                        let decide = decide.clone();
                                        let id = leave.id;
                                        move |_| decide(id, STATUS_APPROVED)
                                    };
                                    let deny = {
                                        let decide = decide.clone();
                                        let id = leave.id;
                                        move |_| decide(id, STATUS_DENIED)
                                    };
                                    view! {
                                        <li class="rounded-lg border border-gray-200 dark:border-gray-800 p-4">
                                            <div class="flex items-center justify-between gap-4">
                                                <div>
                                                    <p class="text-sm font-semibold">
                                                        {leave.employee_id.clone()}
                                                        " · "
                                                        {leave.leave_type.clone()}
                                                        " · "
                                                        {format_date(&leave.start_date)}
                                                        " to "
                                                        {format_date(&leave.end_date)}
                                                    </p>
                                                    <p class="mt-1 text-sm text-gray-600 dark:text-gray-400">
                                                        {leave.reason.clone()}
                                                    </p>
                                                </div>
                                                <div class="flex items-center space-x-2">
                                                    <StatusLabel status={leave.status.clone()}/>
                                                    <Button
                                                        variant=ButtonVariant::Primary
                                                        on_click=Callback::new(approve)
                                                    >
                                                        <i class="fas fa-check mr-1"></i>
                                                        "Approve"
                                                    </Button>
                                                    <Button
                                                        variant=ButtonVariant::Danger
                                                        on_click=Callback::new(deny)
                                                    >
                                                        "Deny"
                                                    </Button>
                                                </div>
                                            </div>
                                        </li>
                                    }
                                }
                            }
                        />
                    </ul>
                </Show>
            </div>
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{admin_user, provide_auth};
    use crate::test_support::ssr::render_at_path;

    #[test]
    fn approve_leave_page_renders_heading_and_empty_state() {
        let html = render_at_path("/dashboard/approve-leave", move || {
            provide_auth(Some(admin_user()));
            view! { <ApproveLeavePage /> }
        });
        assert!(html.contains("Approve Leave"));
        assert!(html.contains("Nothing waiting for a decision."));
    }
}
