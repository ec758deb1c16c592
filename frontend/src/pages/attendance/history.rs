use leptos::*;
use log::error;

use crate::{
    api::ApiClient,
    components::layout::{Layout, LoadingSpinner},
    state::attendance::{load_history, use_attendance},
    utils::time::{format_date, format_time_hm, worked_duration_label},
};

#[component]
pub fn AttendanceHistoryPage() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let (state, set_state) = use_attendance();

    create_effect(move |_| {
        let api = api.clone();
        spawn_local(async move {
            if let Err(err) = load_history(set_state, &api).await {
                error!("failed to load attendance history: {}", err);
            }
        });
    });

    view! {
        <Layout>
            <div class="space-y-6">
                <div>
                    <h1 class="text-2xl font-bold">"Attendance History"</h1>
                    <p class="mt-1 text-sm text-gray-600 dark:text-gray-400">
                        "Your past check-ins and check-outs."
                    </p>
                </div>

                <Show when=move || state.get().loading>
                    <LoadingSpinner/>
                </Show>

                <Show when=move || !state.get().loading && state.get().history.is_empty()>
                    <p class="text-sm text-gray-500">
                        "No attendance records yet."
                    </p>
                </Show>

                <Show when=move || !state.get().history.is_empty()>
                    <div class="overflow-hidden rounded-lg border border-gray-200 dark:border-gray-800">
                        <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-800">
                            <thead class="bg-gray-50 dark:bg-gray-900">
                                <tr>
                                    <th class="px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase">"Date"</th>
                                    <th class="px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase">"Check In"</th>
                                    <th class="px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase">"Check Out"</th>
                                    <th class="px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase">"Worked"</th>
                                </tr>
                            </thead>
                            <tbody class="divide-y divide-gray-200 dark:divide-gray-800">
                                <For
                                    each=move || state.get().history.clone()
                                    key=|record| record.id
                                    children=move |record| {
                                        let check_out = record
                                            .check_out_time
                                            .as_ref()
                                            .map(format_time_hm)
                                            .unwrap_or_else(|| "—".to_string());
                                        let worked = worked_duration_label(
                                            &record.check_in_time,
                                            record.check_out_time.as_ref(),
                                        );
                                        view! {
                                            <tr>
                                                <td class="px-4 py-3 text-sm">{format_date(&record.date)}</td>
                                                <td class="px-4 py-3 text-sm">{format_time_hm(&record.check_in_time)}</td>
                                                <td class="px-4 py-3 text-sm">{check_out}</td>
                                                <td class="px-4 py-3 text-sm">{worked}</td>
                                            </tr>
                                        }
                                    }
                                />
                            </tbody>
                        </table>
                    </div>
                </Show>
            </div>
        </Layout>
    }
}
