//! JSON-over-HTTP calls used by the analyzers.
//!
//! The whole reply is read before returning, so callers look at one
//! [`Reply`] value: status plus body bytes.

use std::time::Duration;

use log::debug;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, thiserror::Error)]
pub enum HttpError {
    #[error("Could not encode request body: {0}")]
    Body(String),
    #[error("Request to {url} failed: {message}")]
    Transport { url: String, message: String },
}

/// A buffered reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub body: Vec<u8>,
}

impl Reply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

/// Wraps a pooled `reqwest::Client`. Clones share the pool.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: reqwest::Client,
    timeout: Duration,
}

impl Default for HttpClient {
    fn default() -> Self {
        Self {
            inner: reqwest::Client::new(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl HttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// POSTs `body` as JSON with the extra `headers` and buffers the reply.
    ///
    /// Non-2xx statuses are returned as a [`Reply`], not as an error.
    pub async fn post_json<B: Serialize + ?Sized>(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        body: &B,
    ) -> Result<Reply, HttpError> {
        let payload = serde_json::to_vec(body).map_err(|e| HttpError::Body(e.to_string()))?;
        let transport = |e: reqwest::Error| HttpError::Transport {
            url: url.to_owned(),
            message: e.to_string(),
        };

        let request = headers.iter().fold(
            self.inner
                .post(url)
                .timeout(self.timeout)
                .header(reqwest::header::CONTENT_TYPE, "application/json"),
            |request, (name, value)| request.header(*name, *value),
        );

        let response = request.body(payload).send().await.map_err(transport)?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(transport)?.to_vec();
        debug!("POST {url} -> {status} ({} bytes)", body.len());

        Ok(Reply { status, body })
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[test]
    fn reply_helpers() {
        let reply = Reply {
            status: 204,
            body: br#"{"ok":true}"#.to_vec(),
        };

        assert!(reply.is_success());
        assert_eq!(reply.body_text(), r#"{"ok":true}"#);
        assert_eq!(
            reply.decode::<serde_json::Value>().ok(),
            Some(serde_json::json!({"ok": true}))
        );
        assert!(
            !Reply {
                status: 404,
                body: Vec::new()
            }
            .is_success()
        );
    }

    #[tokio::test]
    async fn post_json_sends_body_and_headers() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/echo"))
            .and(header("x-goog-api-key", "k"))
            .and(header("content-type", "application/json"))
            .and(body_json(serde_json::json!({"a": 1})))
            .respond_with(ResponseTemplate::new(200).set_body_string("done"))
            .expect(1)
            .mount(&server)
            .await;

        let reply = HttpClient::new()
            .post_json(
                &format!("{}/echo", server.uri()),
                &[("x-goog-api-key", "k")],
                &serde_json::json!({"a": 1}),
            )
            .await
            .expect("request succeeds");

        assert_eq!(reply.status, 200);
        assert_eq!(reply.body_text(), "done");
    }

    #[tokio::test]
    async fn error_statuses_are_replies() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("busy"))
            .mount(&server)
            .await;

        let reply = HttpClient::new()
            .post_json(&server.uri(), &[], &serde_json::json!({}))
            .await
            .expect("transport succeeds");

        assert!(!reply.is_success());
        assert_eq!(reply.body_text(), "busy");
    }

    #[tokio::test]
    async fn unreachable_host_is_a_transport_error() {
        let result = HttpClient::new()
            .post_json("http://127.0.0.1:9/unreachable", &[], &serde_json::json!({}))
            .await;

        assert!(matches!(result, Err(HttpError::Transport { .. })));
    }
}
