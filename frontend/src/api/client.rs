use std::rc::Rc;

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::{
    envelope,
    types::{ApiError, Page, GENERIC_ERROR_MESSAGE},
};
use crate::{
    config,
    utils::{
        navigation,
        storage::{LocalTokenStore, TokenStore},
    },
};

/// REST client for the reservation API.
///
/// Cloning is cheap and clones share the token store.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    tokens: Rc<dyn TokenStore>,
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
            tokens: Rc::new(LocalTokenStore),
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into().trim_end_matches('/').to_string()),
            tokens: Rc::new(LocalTokenStore),
        }
    }

    pub fn with_token_store(mut self, tokens: Rc<dyn TokenStore>) -> Self {
        self.tokens = tokens;
        self
    }

    pub fn token_store(&self) -> Rc<dyn TokenStore> {
        Rc::clone(&self.tokens)
    }

    pub fn has_token(&self) -> bool {
        self.tokens.load().is_some()
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(crate) async fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.resolved_base_url().await, path)
    }

    /// Sends the request built by `build`, attaching the bearer token and the
    /// configured timeout. Transport failures become connection or timeout
    /// errors; HTTP error statuses are left to the `map_*` helpers.
    pub(crate) async fn send<F>(&self, build: F) -> Result<Response, ApiError>
    where
        F: FnOnce(&Client) -> RequestBuilder,
    {
        self.send_inner(build, true).await
    }

    /// Like `send`, but a rejected token is only cleared, never followed by a
    /// redirect. Used by the session probe on page load.
    pub(crate) async fn send_probe<F>(&self, build: F) -> Result<Response, ApiError>
    where
        F: FnOnce(&Client) -> RequestBuilder,
    {
        self.send_inner(build, false).await
    }

    async fn send_inner<F>(&self, build: F, redirect_on_401: bool) -> Result<Response, ApiError>
    where
        F: FnOnce(&Client) -> RequestBuilder,
    {
        let mut builder = build(&self.client);
        let token = self.tokens.load();
        if let Some(token) = &token {
            builder = builder.bearer_auth(token);
        }
        let timeout_ms = config::current().request_timeout_ms;
        let response = execute(&self.client, builder, timeout_ms).await?;
        log::debug!("{} {}", response.status().as_u16(), response.url());
        if response.status() == StatusCode::UNAUTHORIZED && token.is_some() {
            self.handle_unauthorized(redirect_on_401);
        }
        Ok(response)
    }

    /// A 401 on an authenticated call means the stored token is no longer
    /// valid.
    fn handle_unauthorized(&self, redirect: bool) {
        log::warn!("session rejected by the API, clearing token");
        self.tokens.clear();
        if redirect && !navigation::is_on_login_page() {
            let here = navigation::current_location().unwrap_or_else(|| "/".into());
            navigation::redirect_to(&navigation::login_url(&here));
        }
    }

    pub(crate) async fn map_json_response<T: DeserializeOwned>(
        &self,
        response: Response,
    ) -> Result<T, ApiError> {
        envelope::decode_entity(read_body(response).await?)
    }

    pub(crate) async fn map_page_response<T: DeserializeOwned>(
        &self,
        response: Response,
    ) -> Result<Page<T>, ApiError> {
        envelope::normalize_page(read_body(response).await?)
    }

    pub(crate) async fn map_list_response<T: DeserializeOwned>(
        &self,
        response: Response,
    ) -> Result<Vec<T>, ApiError> {
        envelope::normalize_list(read_body(response).await?)
    }

    /// For calls whose payload is irrelevant: only failures matter.
    pub(crate) async fn map_empty_response(&self, response: Response) -> Result<(), ApiError> {
        envelope::unwrap_data(read_body(response).await?).map(|_| ())
    }
}

/// Reads the body as JSON and converts HTTP error statuses into `ApiError`.
/// An empty body is `null`; a body that is not JSON is a connection failure.
async fn read_body(response: Response) -> Result<Value, ApiError> {
    let status = response.status();
    let text = response.text().await.map_err(|err| {
        log::error!("failed to read response body: {}", err);
        ApiError::connection()
    })?;
    let body = if text.trim().is_empty() {
        Value::Null
    } else {
        match serde_json::from_str::<Value>(&text) {
            Ok(body) => body,
            Err(err) => {
                log::error!("response is not JSON ({}): {}", status, err);
                return Err(ApiError::connection());
            }
        }
    };
    if status.is_success() {
        return Ok(body);
    }
    Err(error_from_status(status, &body))
}

pub(crate) fn error_from_status(status: StatusCode, body: &Value) -> ApiError {
    let message = envelope::message_from_body(body);
    let mut error = match status {
        StatusCode::UNAUTHORIZED => match message {
            Some(message) => ApiError {
                code: "UNAUTHORIZED".into(),
                ..ApiError::request_failed(message)
            },
            None => ApiError::unauthorized(),
        },
        StatusCode::NOT_FOUND => {
            ApiError::not_found(message.unwrap_or_else(|| "Recurso no encontrado.".into()))
        }
        StatusCode::UNPROCESSABLE_ENTITY | StatusCode::BAD_REQUEST | StatusCode::CONFLICT => {
            ApiError::validation(message.unwrap_or_else(|| GENERIC_ERROR_MESSAGE.into()))
        }
        _ => ApiError::request_failed(message.unwrap_or_else(|| GENERIC_ERROR_MESSAGE.into())),
    };
    error.details = body.get("errors").cloned();
    log::error!("API error {}: {}", status.as_u16(), error.error);
    error
}

fn transport_error(err: reqwest::Error) -> ApiError {
    log::error!("request failed: {}", err);
    if err.is_timeout() {
        ApiError::timeout()
    } else {
        ApiError::connection()
    }
}

#[cfg(target_arch = "wasm32")]
async fn execute(
    client: &Client,
    builder: RequestBuilder,
    timeout_ms: u32,
) -> Result<Response, ApiError> {
    use futures::future::{select, Either};
    use gloo_timers::future::TimeoutFuture;

    let request = builder.build().map_err(transport_error)?;
    let call = Box::pin(client.execute(request));
    let timer = Box::pin(TimeoutFuture::new(timeout_ms));
    match select(call, timer).await {
        Either::Left((result, _)) => result.map_err(transport_error),
        Either::Right(_) => {
            log::error!("request timed out after {} ms", timeout_ms);
            Err(ApiError::timeout())
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
async fn execute(
    client: &Client,
    builder: RequestBuilder,
    timeout_ms: u32,
) -> Result<Response, ApiError> {
    let request = builder
        .timeout(std::time::Duration::from_millis(u64::from(timeout_ms)))
        .build()
        .map_err(transport_error)?;
    dispatch(client, request).await
}

#[cfg(all(not(target_arch = "wasm32"), not(test)))]
async fn dispatch(client: &Client, request: reqwest::Request) -> Result<Response, ApiError> {
    client.execute(request).await.map_err(transport_error)
}

#[cfg(all(test, not(target_arch = "wasm32")))]
async fn dispatch(client: &Client, request: reqwest::Request) -> Result<Response, ApiError> {
    match find_mock(request.url().as_str()) {
        Some(responder) => mock_execute(responder, request).await,
        None => client.execute(request).await.map_err(transport_error),
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub(crate) use mock_registry::{register_mock, MockResponse, TestResponder};

#[cfg(all(test, not(target_arch = "wasm32")))]
use mock_registry::{find_mock, mock_execute};
