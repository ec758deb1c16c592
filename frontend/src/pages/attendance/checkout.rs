use leptos::*;
use log::error;

use crate::{
    api::{ApiClient, ApiError},
    components::{
        error::InlineErrorMessage,
        layout::{Layout, SuccessMessage},
    },
    pages::attendance::clock::Clock,
    state::attendance::{can_check_out, check_out, load_today, today_status_line, use_attendance},
    utils::time::format_time_hm,
};

#[component]
pub fn CheckOutPage() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let (state, set_state) = use_attendance();
    let message = create_rw_signal(None::<ApiError>);
    let success = create_rw_signal(None::<String>);
    let pending = create_rw_signal(false);

    {
        let api = api.clone();
        create_effect(move |_| {
            let api = api.clone();
            spawn_local(async move {
                if let Err(err) = load_today(set_state, &api).await {
                    error!("failed to load today's attendance: {}", err);
                }
            });
        });
    }

    let on_check_out = {
        let api = api.clone();
        move |_| {
            if pending.get_untracked() {
                return;
            }
            // Closing needs the open record's id.
            let Some(id) = state.get_untracked().today.as_ref().map(|record| record.id) else {
                return;
            };
            pending.set(true);
            message.set(None);
            success.set(None);
            let api = api.clone();
            spawn_local(async move {
                match check_out(set_state, &api, id).await {
                    Ok(_) => success.set(Some("Checked out. See you tomorrow.".into())),
                    Err(err) => message.set(Some(err)),
                }
                pending.set(false);
            });
        }
    };

    view! {
        <Layout>
            <div class="space-y-6 max-w-xl">
                <div>
                    <h1 class="text-2xl font-bold">"Check Out"</h1>
                    <p class="mt-1 text-sm text-gray-600 dark:text-gray-400">
                        "Close today's attendance record."
                    </p>
                </div>

                <Clock/>

                <div class="rounded-lg border border-gray-200 dark:border-gray-800 p-4 space-y-4">
                    <p class="text-sm text-gray-600 dark:text-gray-400">
                        "Status: "
                        <span class="font-semibold text-gray-900 dark:text-gray-100">
                            {move || today_status_line(state.get().today.as_ref())}
                        </span>
                    </p>
                    {move || {
                        state
                            .get()
                            .today
                            .as_ref()
                            .map(|record| {
                                let since = format_time_hm(&record.check_in_time);
                                view! {
                                    <p class="text-sm text-gray-600 dark:text-gray-400">
                                        "Checked in at " {since}
                                    </p>
                                }
                                .into_view()
                            })
                            .unwrap_or_else(|| ().into_view())
                    }}
                    <button
                        class="w-full px-4 py-3 bg-blue-600 text-white font-semibold rounded-md hover:bg-blue-700 disabled:opacity-50"
                        disabled={move || !can_check_out(state.get().today.as_ref()) || pending.get()}
                        on:click=on_check_out
                    >
                        <i class="fas fa-sign-out-alt mr-2"></i>
                        {move || if pending.get() { "Checking out..." } else { "Check Out" }}
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

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{provide_auth, regular_user};
    use crate::test_support::ssr::render_at_path;

    #[test]
    fn check_out_page_renders_disabled_action_without_open_record() {
        let html = render_at_path("/attendance/checkout", move || {
            provide_auth(Some(regular_user()));
            view! { <CheckOutPage /> }
        });
        assert!(html.contains("Check Out"));
        assert!(html.contains("Not checked in yet"));
    }
}
