use reqwest::{header::HeaderMap, Client, Response, StatusCode};
use uuid::Uuid;

use crate::{api::types::ApiError, config, utils::storage};

pub(crate) const ACCESS_TOKEN_KEY: &str = "access_token";
pub(crate) const DEVICE_LABEL_KEY: &str = "device_label";

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(crate) fn auth_headers(&self) -> Result<HeaderMap, ApiError> {
        let token = storage::get_item(ACCESS_TOKEN_KEY)?
            .ok_or_else(|| ApiError::request_failed("Not signed in"))?;

        let mut headers = HeaderMap::new();
        headers.insert(
            reqwest::header::AUTHORIZATION,
            format!("Bearer {}", token)
                .parse()
                .map_err(|_| ApiError::request_failed("Invalid token format"))?,
        );
        Ok(headers)
    }

    pub(crate) fn persist_token(token: &str) -> Result<(), ApiError> {
        storage::set_item(ACCESS_TOKEN_KEY, token)?;
        Ok(())
    }

    // A stable per-browser label the auth service records against the session.
    pub(crate) fn ensure_device_label() -> Result<String, ApiError> {
        if let Some(existing) = storage::get_item(DEVICE_LABEL_KEY)? {
            return Ok(existing);
        }
        let label = Uuid::new_v4().to_string();
        storage::set_item(DEVICE_LABEL_KEY, &label)?;
        Ok(label)
    }

    pub(crate) fn clear_session() {
        let _ = storage::remove_item(ACCESS_TOKEN_KEY);
    }

    pub(crate) fn handle_unauthorized_status(status: StatusCode) {
        if status == StatusCode::UNAUTHORIZED {
            Self::clear_session();
            Self::redirect_to_login_if_needed();
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn redirect_to_login_if_needed() {
        if let Some(window) = web_sys::window() {
            let on_login_page = window
                .location()
                .pathname()
                .map(|path| path == "/login")
                .unwrap_or(false);
            if !on_login_page {
                let _ = window.location().set_href("/login");
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn redirect_to_login_if_needed() {}

    pub(crate) async fn error_body(response: Response) -> ApiError {
        let status = response.status();
        match response.json::<ApiError>().await {
            Ok(error) => error,
            Err(_) => ApiError::unknown(format!("Request failed with status {}", status)),
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
