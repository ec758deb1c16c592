use crate::{
    components::{
        common::{Button, ButtonVariant},
        fonts::FontSelect,
        sidebar::SideBar,
        theme::ThemeToggle,
    },
    state::auth::{self, use_auth},
};
use leptos::*;

#[component]
pub fn Header() -> impl IntoView {
    let (auth, _set_auth) = use_auth();
    let user_name = move || {
        auth.get()
            .user
            .as_ref()
            .map(|user| user.name.clone())
            .unwrap_or_default()
    };
    let logout_action = auth::use_logout_action();
    let logout_pending = logout_action.pending();
    create_effect(move |_| {
        if logout_action.value().get().is_some() {
            if let Some(win) = web_sys::window() {
                let _ = win.location().set_href("/login");
            }
        }
    });
    let on_logout = move |_| {
        if logout_pending.get_untracked() {
            return;
        }
        logout_action.dispatch(());
    };

    view! {
        <header class="bg-white dark:bg-gray-900 shadow-sm border-b border-gray-200 dark:border-gray-800">
            <div class="px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <h1 class="text-xl font-semibold text-gray-900 dark:text-gray-100">
                        "StaffHub"
                    </h1>
                    <div class="flex items-center space-x-4">
                        <FontSelect/>
                        <ThemeToggle/>
                        <Show when=move || auth.get().is_authenticated>
                            <span class="text-sm text-gray-600 dark:text-gray-300">
                                {user_name}
                            </span>
                            <Button
                                variant=ButtonVariant::Ghost
                                disabled=Signal::derive(move || logout_pending.get())
                                on_click=Callback::new(on_logout)
                            >
                                "Log out"
                            </Button>
                        </Show>
                    </div>
                </div>
            </div>
        </header>
    }
}

// Business pages render inside the shell: header on top, sidebar to the
// left, page content filling the rest.
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col bg-white text-gray-900 dark:bg-gray-950 dark:text-gray-100">
            <Header/>
            <SideBar>
                <main class="flex-1 p-6">
                    {children()}
                </main>
            </SideBar>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-blue-600"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(message: String) -> impl IntoView {
    view! {
        <div class="bg-red-50 border border-red-200 text-red-700 px-4 py-3 rounded mb-4 dark:bg-red-950 dark:border-red-900 dark:text-red-300">
            <div class="flex">
                <div class="flex-shrink-0">
                    <i class="fas fa-exclamation-circle"></i>
                </div>
                <div class="ml-3">
                    <p class="text-sm">{message}</p>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn SuccessMessage(message: String) -> impl IntoView {
    view! {
        <div class="bg-green-50 border border-green-200 text-green-700 px-4 py-3 rounded mb-4 dark:bg-green-950 dark:border-green-900 dark:text-green-300">
            <div class="flex">
                <div class="flex-shrink-0">
                    <i class="fas fa-check-circle"></i>
                </div>
                <div class="ml-3">
                    <p class="text-sm">{message}</p>
                </div>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{admin_user, provide_auth, regular_user};
    use crate::test_support::ssr::{render_at_path, render_to_string};

    #[test]
    fn header_shows_user_name_and_logout_when_signed_in() {
        let html = render_to_string(move || {
            provide_auth(Some(regular_user()));
            view! { <Header /> }
        });
        assert!(html.contains("StaffHub"));
        assert!(html.contains("Regular User"));
        assert!(html.contains("Log out"));
    }

    #[test]
    fn header_hides_logout_when_signed_out() {
        let html = render_to_string(move || {
            provide_auth(None);
            view! { <Header /> }
        });
        assert!(!html.contains("Log out"));
    }

    #[test]
    fn layout_renders_children_inside_shell() {
        let html = render_at_path("/attendance/checkin", move || {
            provide_auth(Some(admin_user()));
            view! { <Layout><div>"child"</div></Layout> }
        });
        assert!(html.contains("child"));
        assert!(html.contains("CHECK-IN CHECK-OUT"));
    }

    #[test]
    fn renders_feedback_components() {
        let html = render_to_string(move || {
            view! {
                <div>
                    <LoadingSpinner />
                    <ErrorMessage message="error".into() />
                    <SuccessMessage message="ok".into() />
                </div>
            }
        });
        assert!(html.contains("error"));
        assert!(html.contains("ok"));
    }
}
