use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::{Client, Method, RequestBuilder};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::rc::Rc;

use crate::{
    api::types::ApiError,
    config,
    utils::storage::{self as storage_utils, BrowserStore, KeyValueStore},
};

const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

pub fn encode_segment(id: &str) -> String {
    utf8_percent_encode(id, PATH_SEGMENT).to_string()
}

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    store: Rc<dyn KeyValueStore>,
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
            store: Rc::new(BrowserStore),
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: Some(config::normalize_base_url(&base_url.into())),
            ..Self::new()
        }
    }

    pub fn with_store(mut self, store: Rc<dyn KeyValueStore>) -> Self {
        self.store = store;
        self
    }

    pub fn store(&self) -> Rc<dyn KeyValueStore> {
        Rc::clone(&self.store)
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    /// Base URL without waiting on runtime config; used for asset links in views.
    pub fn base_url_snapshot(&self) -> String {
        self.base_url
            .clone()
            .unwrap_or_else(config::cached_api_base_url)
    }

    pub fn asset_url(&self, file_name: &str) -> String {
        config::asset_url(&self.base_url_snapshot(), file_name)
    }

    pub(crate) async fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.resolved_base_url().await, path);
        let builder = self.client.request(method, url);
        match storage_utils::stored_token(self.store.as_ref()) {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    pub(crate) async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        let builder = self.request(Method::GET, path).await;
        self.execute(builder).await
    }

    pub(crate) async fn send_json<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<Value, ApiError> {
        let builder = self.request(method, path).await.json(body);
        self.execute(builder).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<Value, ApiError> {
        let builder = self.request(Method::DELETE, path).await;
        self.execute(builder).await
    }

    pub(crate) async fn execute(&self, builder: RequestBuilder) -> Result<Value, ApiError> {
        let request = builder
            .build()
            .map_err(|e| ApiError::request_failed(format!("Invalid request: {}", e)))?;
        let label = format!("{} {}", request.method(), request.url().path());
        let (status, body) = self.dispatch(request).await?;
        self.handle_response(&label, status, &body)
    }

    #[cfg(not(all(test, not(target_arch = "wasm32"))))]
    async fn dispatch(&self, request: reqwest::Request) -> Result<(u16, String), ApiError> {
        let label = format!("{} {}", request.method(), request.url().path());
        let response = self.client.execute(request).await.map_err(|e| {
            log::error!("{} failed: {}", label, e);
            ApiError::request_failed(format!("Request failed: {}", e))
        })?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::request_failed(format!("Failed to read response: {}", e)))?;
        Ok((status, body))
    }

    #[cfg(all(test, not(target_arch = "wasm32")))]
    async fn dispatch(&self, request: reqwest::Request) -> Result<(u16, String), ApiError> {
        let response = respond_from_mock(&request)?;
        Ok((response.status, response.body))
    }

    fn handle_response(&self, label: &str, status: u16, body: &str) -> Result<Value, ApiError> {
        let value = parse_body(body);
        if status == 401 {
            log::warn!("{} returned 401, clearing stored session", label);
            storage_utils::clear_session(self.store.as_ref());
            return Err(ApiError::from_body(status, &value));
        }
        if !(200..300).contains(&status) {
            let error = ApiError::from_body(status, &value);
            log::error!("{} failed with {}: {}", label, status, error);
            return Err(error);
        }
        if value.get("success").and_then(Value::as_bool) == Some(false) {
            let error = ApiError::request_failed(
                body_message(&value).unwrap_or_else(|| "Request was not successful".into()),
            );
            log::error!("{} reported failure: {}", label, error);
            return Err(error);
        }
        Ok(value)
    }
}

fn parse_body(body: &str) -> Value {
    if body.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string()))
}

pub(crate) fn body_message(body: &Value) -> Option<String> {
    ["error", "message"]
        .iter()
        .find_map(|key| {
            body.get(*key)
                .and_then(Value::as_str)
                .filter(|msg| !msg.trim().is_empty())
        })
        .map(str::to_string)
}

/// Deserializes a required payload key out of a success envelope.
pub(crate) fn take_field<T: DeserializeOwned>(body: &mut Value, key: &str) -> Result<T, ApiError> {
    let value = body
        .get_mut(key)
        .map(Value::take)
        .filter(|v| !v.is_null())
        .ok_or_else(|| ApiError::unknown(format!("Response is missing `{}`", key)))?;
    serde_json::from_value(value)
        .map_err(|e| ApiError::unknown(format!("Failed to parse `{}`: {}", key, e)))
}

/// Like [`take_field`] but a missing or null collection reads as empty.
pub(crate) fn take_list<T: DeserializeOwned>(body: &mut Value, key: &str) -> Result<Vec<T>, ApiError> {
    match body.get(key) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(_) => take_field(body, key),
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub use mock_registry::{register_mock, respond_from_mock, MockResponse, TestResponder};

#[cfg(all(test, not(target_arch = "wasm32")))]
mod mock_registry {
    use super::ApiError;
    use std::{cell::RefCell, sync::Arc};

    #[derive(Debug, Clone)]
    pub struct MockResponse {
        pub status: u16,
        pub body: String,
    }

    impl MockResponse {
        pub fn json(status: u16, body: serde_json::Value) -> Self {
            Self {
                status,
                body: body.to_string(),
            }
        }
    }

    pub trait TestResponder {
        fn respond(&self, request: &reqwest::Request) -> Result<MockResponse, ApiError>;
    }

    thread_local! {
        static MOCKS: RefCell<Vec<(String, Arc<dyn TestResponder>)>> = RefCell::new(Vec::new());
    }

    pub fn register_mock(base_url: String, responder: Arc<dyn TestResponder>) {
        MOCKS.with(|mocks| {
            let mut mocks = mocks.borrow_mut();
            mocks.retain(|(base, _)| base != &base_url);
            mocks.push((base_url, responder));
        });
    }

    pub fn respond_from_mock(request: &reqwest::Request) -> Result<MockResponse, ApiError> {
        let url = request.url().as_str().to_string();
        let responder = MOCKS.with(|mocks| {
            mocks
                .borrow()
                .iter()
                .rev()
                .find(|(base, _)| url.starts_with(base.as_str()))
                .map(|(_, responder)| Arc::clone(responder))
        });
        match responder {
            Some(responder) => responder.respond(request),
            None => Err(ApiError::request_failed(format!("No mock registered for {}", url))),
        }
    }
}
