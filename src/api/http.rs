//! Fetch-based RemoteStore
//!
//! Talks JSON to the todo resource through `window.fetch`.

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use super::{ApiResult, NetworkFailure, RemoteStore};
use crate::models::{Task, TaskId, TaskPayload};

#[derive(Debug, Clone, PartialEq)]
pub struct HttpRemoteStore {
    base_url: String,
}

impl HttpRemoteStore {
    /// `base_url` is the collection URL and must end with `/`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    pub fn collection_url(&self) -> &str {
        &self.base_url
    }

    pub fn task_url(&self, id: &TaskId) -> String {
        match id {
            TaskId::Int(n) => format!("{}{}/", self.base_url, n),
            TaskId::Text(s) => format!("{}{}/", self.base_url, utf8_percent_encode(s, NON_ALPHANUMERIC)),
        }
    }

    async fn send(&self, method: &str, url: &str, body: Option<String>) -> ApiResult<Response> {
        let opts = RequestInit::new();
        opts.set_method(method);
        opts.set_mode(RequestMode::Cors);
        let has_body = body.is_some();
        if let Some(body) = body {
            opts.set_body(&JsValue::from_str(&body));
        }

        let request = Request::new_with_str_and_init(url, &opts).map_err(transport)?;
        let headers = request.headers();
        for (name, value) in request_headers(has_body) {
            headers.set(name, value).map_err(transport)?;
        }

        let window = web_sys::window()
            .ok_or_else(|| NetworkFailure::Transport("no window".to_string()))?;
        let value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(transport)?;
        let response: Response = value.dyn_into().map_err(transport)?;

        log::debug!("{} {} -> {}", method, url, response.status());
        check_status(response.status())?;
        Ok(response)
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        method: &str,
        url: &str,
        body: Option<String>,
    ) -> ApiResult<T> {
        let response = self.send(method, url, body).await?;
        let text = JsFuture::from(response.text().map_err(transport)?)
            .await
            .map_err(transport)?
            .as_string()
            .ok_or_else(|| NetworkFailure::Decode("response body is not text".to_string()))?;
        decode(&text)
    }
}

#[async_trait(?Send)]
impl RemoteStore for HttpRemoteStore {
    async fn list(&self) -> ApiResult<Vec<Task>> {
        self.send_json("GET", self.collection_url(), None).await
    }

    async fn create(&self, payload: &TaskPayload) -> ApiResult<Task> {
        let body = encode(payload)?;
        self.send_json("POST", self.collection_url(), Some(body)).await
    }

    async fn update(&self, id: &TaskId, payload: &TaskPayload) -> ApiResult<Task> {
        let body = encode(payload)?;
        self.send_json("PUT", &self.task_url(id), Some(body)).await
    }

    async fn delete(&self, id: &TaskId) -> ApiResult<()> {
        self.send("DELETE", &self.task_url(id), None).await?;
        Ok(())
    }
}

/// Bodiless requests skip `Content-Type` so plain reads stay simple CORS requests
fn request_headers(has_body: bool) -> Vec<(&'static str, &'static str)> {
    let mut headers = vec![("Accept", "application/json")];
    if has_body {
        headers.push(("Content-Type", "application/json"));
    }
    headers
}

fn check_status(status: u16) -> ApiResult<()> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(NetworkFailure::Status(status))
    }
}

fn encode<T: Serialize>(value: &T) -> ApiResult<String> {
    serde_json::to_string(value).map_err(|e| NetworkFailure::Encode(e.to_string()))
}

fn decode<T: DeserializeOwned>(text: &str) -> ApiResult<T> {
    serde_json::from_str(text).map_err(|e| NetworkFailure::Decode(e.to_string()))
}

/// Best-effort message from a rejected JS promise
fn transport(err: JsValue) -> NetworkFailure {
    let message = err
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{:?}", err));
    NetworkFailure::Transport(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_urls() {
        let store = HttpRemoteStore::new("http://127.0.0.1:8000/api/todos/");
        assert_eq!(store.collection_url(), "http://127.0.0.1:8000/api/todos/");
        assert_eq!(store.task_url(&TaskId::Int(42)), "http://127.0.0.1:8000/api/todos/42/");
        assert_eq!(
            store.task_url(&TaskId::Text("a b/c".into())),
            "http://127.0.0.1:8000/api/todos/a%20b%2Fc/"
        );
    }

    #[test]
    fn test_decode_collection_in_server_order() {
        let tasks: Vec<Task> = decode(
            r#"[{"id":2,"title":"b","completed":true},{"id":1,"title":"a","completed":false}]"#,
        )
        .unwrap();
        let ids: Vec<_> = tasks.iter().map(|t| t.id.clone()).collect();
        assert_eq!(ids, vec![TaskId::Int(2), TaskId::Int(1)]);
    }

    #[test]
    fn test_decode_failure_is_network_failure() {
        let result: ApiResult<Task> = decode("<html>502</html>");
        assert!(matches!(result, Err(NetworkFailure::Decode(_))));
    }

    #[test]
    fn test_non_success_status_is_network_failure() {
        assert_eq!(check_status(200), Ok(()));
        assert_eq!(check_status(201), Ok(()));
        assert_eq!(check_status(204), Ok(()));
        assert_eq!(check_status(404), Err(NetworkFailure::Status(404)));
        assert_eq!(check_status(500), Err(NetworkFailure::Status(500)));
        assert_eq!(check_status(302), Err(NetworkFailure::Status(302)));
    }

    #[test]
    fn test_content_type_only_with_body() {
        assert_eq!(request_headers(false), vec![("Accept", "application/json")]);
        assert_eq!(
            request_headers(true),
            vec![("Accept", "application/json"), ("Content-Type", "application/json")]
        );
    }

    #[test]
    fn test_encode_create_body() {
        let body = encode(&TaskPayload::new_pending("Buy milk")).unwrap();
        assert_eq!(body, r#"{"title":"Buy milk","completed":false}"#);
    }
}
