use crate::api::ApiError;
use leptos::*;

#[component]
pub fn InlineErrorMessage(error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div class="bg-red-50 border border-red-200 text-red-700 px-4 py-3 rounded space-y-1 my-2 dark:bg-red-950 dark:border-red-900 dark:text-red-300">
                <div class="font-bold">{move || error.get().map(|e| e.error).unwrap_or_default()}</div>
                {move || error.get().map(|e| {
                    let code = &e.code;
                    if code == "VALIDATION_ERROR" {
                        if let Some(details) = e.details.as_ref() {
                            if let Some(errors) = details.get("errors").and_then(|v| v.as_array()) {
                                return view! {
                                    <ul class="list-disc list-inside text-sm">
                                        {errors.iter().map(|err| {
                                            view! { <li>{err.as_str().unwrap_or_default().to_string()}</li> }
                                        }).collect_view()}
                                    </ul>
                                }.into_view();
                            }
                        }
                    }
                    if code != "UNKNOWN" && !code.is_empty() {
                        view! { <div class="text-xs opacity-75">{"Code: "}{code.clone()}</div> }.into_view()
                    } else {
                        ().into_view()
                    }
                }).unwrap_or_else(|| ().into_view())}
            </div>
        </Show>
    }
}
