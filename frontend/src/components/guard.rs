use crate::{
    components::{layout::LoadingSpinner, sidebar::is_admin_session},
    state::auth::use_auth,
};
use leptos::*;

#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let is_authenticated = create_memo(move |_| auth.get().is_authenticated);
    let is_loading = create_memo(move |_| auth.get().loading);
    create_effect(move |_| {
        let state = auth.get();
        if state.loading || state.is_authenticated {
            return;
        }
        if let Some(win) = web_sys::window() {
            let _ = win.location().set_href("/login");
        }
    });
    view! {
        <Show
            when=move || should_render_children(is_authenticated.get(), is_loading.get())
            fallback=move || {
                if is_loading.get() {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

fn should_render_children(is_authenticated: bool, is_loading: bool) -> bool {
    is_authenticated && !is_loading
}

#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let is_authenticated = create_memo(move |_| auth.get().is_authenticated);
    let is_loading = create_memo(move |_| auth.get().loading);
    let is_admin = create_memo(move |_| is_admin_session(auth.get().user.as_ref()));
    create_effect(move |_| {
        let state = auth.get();
        if state.loading {
            return;
        }
        let target = if !state.is_authenticated {
            "/login"
        } else if !is_admin_session(state.user.as_ref()) {
            "/attendance/checkin"
        } else {
            return;
        };
        if let Some(win) = web_sys::window() {
            let _ = win.location().set_href(target);
        }
    });
    view! {
        <Show
            when=move || {
                should_render_admin_children(is_authenticated.get(), is_loading.get(), is_admin.get())
            }
            fallback=move || {
                if is_loading.get() {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

fn should_render_admin_children(is_authenticated: bool, is_loading: bool, is_admin: bool) -> bool {
    is_authenticated && is_admin && !is_loading
}
