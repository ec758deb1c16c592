use leptos::*;

#[component]
pub fn Clock() -> impl IntoView {
    let (now, set_now) = create_signal(chrono::Local::now());

    // Keep the interval alive for the lifetime of the component; it only
    // exists in the browser.
    #[cfg(target_arch = "wasm32")]
    let _interval = store_value(gloo_timers::callback::Interval::new(1000, move || {
        set_now.set(chrono::Local::now());
    }));
    #[cfg(not(target_arch = "wasm32"))]
    let _ = set_now;

    let date_str = move || now.get().format("%A, %Y-%m-%d").to_string();
    let time_str = move || now.get().format("%H:%M:%S").to_string();

    view! {
        <div class="bg-gradient-to-br from-blue-600 to-blue-700 text-white shadow-lg rounded-lg overflow-hidden">
            <div class="flex flex-col items-center justify-center py-4 space-y-2">
                <div class="text-lg font-medium opacity-90">{date_str}</div>
                <div class="text-4xl font-bold tracking-wider font-mono">{time_str}</div>
            </div>
        </div>
    }
}
