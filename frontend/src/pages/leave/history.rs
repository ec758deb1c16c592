use leptos::*;
use log::error;

use crate::{
    api::ApiClient,
    components::layout::{Layout, LoadingSpinner},
    pages::leave::status_label::StatusLabel,
    state::leaves::{load_my_leaves, use_leaves},
    utils::time::format_date,
};

#[component]
pub fn LeaveHistoryPage() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let (state, set_state) = use_leaves();

    create_effect(move |_| {
        let api = api.clone();
        spawn_local(async move {
            if let Err(err) = load_my_leaves(set_state, &api).await {
                error!("failed to load leave history: {}", err);
            }
        });
    });

    view! {
        <Layout>
            <div class="space-y-6">
                <div>
                    <h1 class="text-2xl font-bold">"Leave History"</h1>
                    <p class="mt-1 text-sm text-gray-600 dark:text-gray-400">
                        "Your leave requests and their outcomes."
                    </p>
                </div>

                <Show when=move || state.get().loading>
                    <LoadingSpinner/>
                </Show>

                <Show when=move || !state.get().loading && state.get().mine.is_empty()>
                    <p class="text-sm text-gray-500">
                        "You have not requested any leave yet."
                    </p>
                </Show>

                <Show when=move || !state.get().mine.is_empty()>
                    <ul class="space-y-3">
                        <For
                            each=move || state.get().mine.clone()
                            key=|leave| leave.id
                            children=move |leave| {
                                view! {
                                    <li class="rounded-lg border border-gray-200 dark:border-gray-800 p-4">
                                        <div class="flex items-center justify-between">
                                            <div>
                                                <p class="text-sm font-semibold">
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
                                            <StatusLabel status={leave.status.clone()}/>
                                        </div>
                                    </li>
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
    use crate::test_support::helpers::{provide_auth, regular_user};
    use crate::test_support::ssr::render_at_path;

    #[test]
    fn leave_history_page_renders_heading() {
        let html = render_at_path("/leave-request/history", move || {
            provide_auth(Some(regular_user()));
            view! { <LeaveHistoryPage /> }
        });
        assert!(html.contains("Leave History"));
    }
}
