use crate::api::{ApiClient, ApiError, LoginRequest, UserResponse};
use leptos::*;

type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub user: Option<UserResponse>,
    pub is_authenticated: bool,
    pub loading: bool,
}

fn create_auth_context() -> AuthContext {
    let (auth_state, set_auth_state) = create_signal(AuthState::default());
    set_auth_state.update(|state| state.loading = true);

    let api_client = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let set_auth_for_check = set_auth_state;
    spawn_local(async move {
        // A failed session fetch is just the logged-out state.
        match api_client.get_me().await {
            Ok(user) => set_auth_for_check.update(|state| {
                state.user = Some(user);
                state.is_authenticated = true;
                state.loading = false;
            }),
            Err(_) => set_auth_for_check.update(|state| {
                state.user = None;
                state.is_authenticated = false;
                state.loading = false;
            }),
        }
    });

    (auth_state, set_auth_state)
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let ctx = create_auth_context();
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

pub async fn login_request(
    request: LoginRequest,
    api: &ApiClient,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    set_auth_state.update(|state| state.loading = true);

    match api.login(request).await {
        Ok(response) => {
            set_auth_state.update(|state| {
                state.user = Some(response.user);
                state.is_authenticated = true;
                state.loading = false;
            });
            Ok(())
        }
        Err(error) => {
            set_auth_state.update(|state| state.loading = false);
            Err(error)
        }
    }
}

pub async fn logout(
    api: &ApiClient,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    let result = api.logout().await;

    set_auth_state.update(|state| {
        state.user = None;
        state.is_authenticated = false;
        state.loading = false;
    });

    result
}

pub fn use_login_action() -> Action<LoginRequest, Result<(), ApiError>> {
    let (_auth, set_auth) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);

    create_action(move |request: &LoginRequest| {
        let payload = request.clone();
        let api = api.clone();
        async move { login_request(payload, &api, set_auth).await }
    })
}

pub fn use_logout_action() -> Action<(), Result<(), ApiError>> {
    let (_auth, set_auth) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);

    create_action(move |_: &()| {
        let api = api.clone();
        async move { logout(&api, set_auth).await }
    })
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn login_and_logout_update_auth_state() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/auth/login");
            then.status(200).json_body(serde_json::json!({
                "token": "tok-state",
                "user": {
                    "id": "u1",
                    "employee_id": "E0001",
                    "name": "Alice Example",
                    "email": "alice@example.com",
                    "role": "admin"
                }
            }));
        });
        server.mock(|when, then| {
            when.method(POST).path("/auth/logout");
            then.status(200).json_body(serde_json::json!({ "message": "bye" }));
        });

        let runtime = create_runtime();
        let (state, set_state) = create_signal(AuthState::default());
        let api = ApiClient::new_with_base_url(server.url(""));

        login_request(
            LoginRequest {
                email: "alice@example.com".into(),
                password: "secret".into(),
                device_label: Some("test-device".into()),
            },
            &api,
            set_state,
        )
        .await
        .unwrap();

        let snapshot = state.get();
        assert!(snapshot.is_authenticated);
        assert_eq!(snapshot.user.as_ref().map(|u| u.role.as_str()), Some("admin"));

        logout(&api, set_state).await.unwrap();
        let snapshot = state.get();
        assert!(!snapshot.is_authenticated);
        assert!(snapshot.user.is_none());
        runtime.dispose();
    }

    #[tokio::test]
    async fn failed_login_keeps_logged_out_state() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/auth/login");
            then.status(401)
                .json_body(serde_json::json!({ "error": "Invalid credentials", "code": "INVALID_CREDENTIALS" }));
        });

        let runtime = create_runtime();
        let (state, set_state) = create_signal(AuthState::default());
        let api = ApiClient::new_with_base_url(server.url(""));

        let error = login_request(
            LoginRequest {
                email: "alice@example.com".into(),
                password: "wrong".into(),
                device_label: Some("test-device".into()),
            },
            &api,
            set_state,
        )
        .await
        .unwrap_err();

        assert_eq!(error.code, "INVALID_CREDENTIALS");
        let snapshot = state.get();
        assert!(!snapshot.is_authenticated);
        assert!(!snapshot.loading);
        runtime.dispose();
    }
}
