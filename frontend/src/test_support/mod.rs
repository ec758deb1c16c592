#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::UserResponse;
    use crate::state::auth::AuthState;
    use leptos::*;

    pub fn admin_user() -> UserResponse {
        UserResponse {
            id: "u-admin".into(),
            employee_id: "E9000".into(),
            name: "Admin User".into(),
            email: "admin@example.com".into(),
            role: "admin".into(),
        }
    }

    pub fn regular_user() -> UserResponse {
        UserResponse {
            id: "u-regular".into(),
            employee_id: "E0001".into(),
            name: "Regular User".into(),
            email: "member@example.com".into(),
            role: "employee".into(),
        }
    }

    pub fn provide_auth(
        user: Option<UserResponse>,
    ) -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
        let is_authenticated = user.is_some();
        provide_auth_state(user, is_authenticated, false)
    }

    pub fn provide_auth_state(
        user: Option<UserResponse>,
        is_authenticated: bool,
        loading: bool,
    ) -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
        let (auth, set_auth) = create_signal(AuthState {
            user,
            is_authenticated,
            loading,
        });
        provide_context((auth, set_auth));
        (auth, set_auth)
    }
}
