use leptos::*;

use crate::{
    api::{ApiError, LoginRequest},
    components::{
        common::{Button, ButtonVariant},
        error::InlineErrorMessage,
    },
    state::auth,
};

fn form_ready(email: &str, password: &str) -> bool {
    !email.trim().is_empty() && !password.is_empty()
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let error = create_rw_signal(None::<ApiError>);
    let login_action = auth::use_login_action();
    let pending = login_action.pending();

    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(_) => {
                    error.set(None);
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/attendance/checkin");
                    }
                }
                Err(err) => error.set(Some(err)),
            }
        }
    });

    let on_submit = move |_| {
        if pending.get_untracked() {
            return;
        }
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        if !form_ready(&email_value, &password_value) {
            error.set(Some(ApiError::validation("Enter your email and password.")));
            return;
        }
        login_action.dispatch(LoginRequest {
            email: email_value,
            password: password_value,
            device_label: None,
        });
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50 dark:bg-gray-950 px-4">
            <div class="max-w-md w-full space-y-6 bg-white dark:bg-gray-900 p-8 rounded-lg shadow">
                <div>
                    <h1 class="text-2xl font-bold text-gray-900 dark:text-gray-100">"Sign in"</h1>
                    <p class="mt-1 text-sm text-gray-600 dark:text-gray-400">
                        "Use the account your administrator created for you."
                    </p>
                </div>

                <InlineErrorMessage error={error.into()} />

                <div class="space-y-4">
                    <div>
                        <label class="block text-sm font-medium text-gray-700 dark:text-gray-300">"Email"</label>
                        <input
                            type="email"
                            class="mt-1 block w-full border border-gray-300 dark:border-gray-700 rounded-md px-3 py-2 bg-transparent"
                            prop:value={move || email.get()}
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-gray-700 dark:text-gray-300">"Password"</label>
                        <input
                            type="password"
                            class="mt-1 block w-full border border-gray-300 dark:border-gray-700 rounded-md px-3 py-2 bg-transparent"
                            prop:value={move || password.get()}
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                    </div>
                    <Button
                        variant=ButtonVariant::Primary
                        class="w-full"
                        loading=Signal::derive(move || pending.get())
                        on_click=Callback::new(on_submit)
                    >
                        {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                    </Button>
                </div>
            </div>
        </div>
    }
}
