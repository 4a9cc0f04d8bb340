use reqwest::{header, Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::{api::types::ApiError, config};

#[cfg(target_arch = "wasm32")]
use crate::utils::storage as storage_utils;

pub const ACCESS_TOKEN_KEY: &str = "access_token";

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
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

    pub(crate) async fn resolved_base_url(&self) -> String {
        let base = match &self.base_url {
            Some(base) => base.clone(),
            None => config::await_api_base_url().await,
        };
        base.trim_end_matches('/').to_string()
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    #[cfg(target_arch = "wasm32")]
    fn stored_access_token() -> Option<String> {
        match storage_utils::read_item(ACCESS_TOKEN_KEY) {
            Ok(token) => token,
            Err(err) => {
                log::debug!("No access token available: {}", err);
                None
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn stored_access_token() -> Option<String> {
        None
    }

    #[cfg(target_arch = "wasm32")]
    fn clear_stored_access_token() {
        if let Err(err) = storage_utils::remove_item(ACCESS_TOKEN_KEY) {
            log::warn!("{}", err);
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn clear_stored_access_token() {}

    pub(crate) fn handle_unauthorized_status(status: StatusCode) {
        if status == StatusCode::UNAUTHORIZED {
            log::warn!("API rejected the stored access token; clearing it");
            Self::clear_stored_access_token();
        }
    }

    /// Builds a request, attaches the bearer token when one is stored, and sends it.
    pub(crate) async fn send_authorized<F>(&self, build: F) -> Result<Response, ApiError>
    where
        F: FnOnce() -> RequestBuilder,
    {
        let mut request = build();
        if let Some(token) = Self::stored_access_token() {
            request = request.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let response = self.execute(request).await?;
        Self::handle_unauthorized_status(response.status());
        Ok(response)
    }

    #[cfg(not(all(test, not(target_arch = "wasm32"))))]
    async fn execute(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        request
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))
    }

    #[cfg(all(test, not(target_arch = "wasm32")))]
    async fn execute(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let request = request
            .build()
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;
        match test_hooks::find_mock(request.url().as_str()) {
            Some(responder) => responder
                .respond(&request)
                .map(test_hooks::MockResponse::into_response),
            None => self
                .client
                .execute(request)
                .await
                .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e))),
        }
    }

    pub(crate) async fn map_json_response<T>(&self, response: Response) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        if response.status().is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
        } else {
            Err(Self::map_error_response(response).await)
        }
    }

    /// Success is decided by status alone; the body is ignored.
    pub(crate) async fn map_empty_response(&self, response: Response) -> Result<(), ApiError> {
        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::map_error_response(response).await)
        }
    }

    async fn map_error_response(response: Response) -> ApiError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        serde_json::from_str::<ApiError>(&body).unwrap_or_else(|_| {
            if status == StatusCode::UNAUTHORIZED {
                ApiError::unauthorized("Authentication required")
            } else {
                ApiError::request_failed(format!(
                    "Request failed with status {}",
                    status.as_u16()
                ))
            }
        })
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub use test_hooks::{register_mock, MockResponse, TestResponder};

#[cfg(all(test, not(target_arch = "wasm32")))]
mod test_hooks {
    use super::*;
    use serde_json::Value;
    use std::sync::{Arc, Mutex, OnceLock};

    pub trait TestResponder: Send + Sync {
        fn respond(&self, request: &reqwest::Request) -> Result<MockResponse, ApiError>;
    }

    #[derive(Clone, Debug)]
    pub struct MockResponse {
        status: u16,
        body: Option<Value>,
    }

    impl MockResponse {
        pub fn json(status: u16, body: Value) -> Self {
            Self {
                status,
                body: Some(body),
            }
        }

        pub fn empty(status: u16) -> Self {
            Self { status, body: None }
        }

        pub(super) fn into_response(self) -> Response {
            let mut builder = http::Response::builder().status(self.status);
            if self.body.is_some() {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
            }
            let body = self.body.map(|b| b.to_string()).unwrap_or_default();
            Response::from(builder.body(body).expect("mock response"))
        }
    }

    type Registry = Mutex<Vec<(String, Arc<dyn TestResponder>)>>;

    fn registry() -> &'static Registry {
        static MOCKS: OnceLock<Registry> = OnceLock::new();
        MOCKS.get_or_init(|| Mutex::new(Vec::new()))
    }

    pub fn register_mock(base_url: String, responder: Arc<dyn TestResponder>) {
        let mut mocks = registry().lock().expect("mock registry");
        mocks.retain(|(base, _)| base != &base_url);
        mocks.push((base_url, responder));
    }

    pub(super) fn find_mock(url: &str) -> Option<Arc<dyn TestResponder>> {
        let mocks = registry().lock().ok()?;
        mocks
            .iter()
            .filter(|(base, _)| {
                url.strip_prefix(base.as_str())
                    .map(|rest| rest.is_empty() || rest.starts_with('/') || rest.starts_with('?'))
                    .unwrap_or(false)
            })
            .max_by_key(|(base, _)| base.len())
            .map(|(_, responder)| responder.clone())
    }
}
