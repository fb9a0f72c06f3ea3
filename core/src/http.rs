//! Default HTTP transport backed by reqwest.
//!
//! # Design
//! `ReqwestTransport` maps a `RequestDescriptor` onto a reqwest request:
//!
//! - `method` is matched case-insensitively.
//! - `parames` must be an object; scalars are stringified and arrays become
//!   repeated keys.
//! - Scalar headers are sent; nested header groups are skipped.
//! - `data` is sent as JSON, except string data which is sent verbatim.
//! - The `timeout` option is read in milliseconds, `0` meaning none.
//!
//! Non-2xx responses are reported as `TransportError::Status`, with the full
//! response attached.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::transport::Transport;
use crate::types::{Headers, RequestDescriptor};

/// An HTTP response described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    /// First header with this name, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("invalid HTTP method: '{0}'")]
    InvalidMethod(String),

    #[error("invalid header '{0}'")]
    InvalidHeader(String),

    #[error("request failed with status {status}")]
    Status { status: u16, response: HttpResponse },
}

#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    type Response = HttpResponse;
    type Error = TransportError;

    async fn execute(&self, request: RequestDescriptor) -> Result<HttpResponse, TransportError> {
        let method = Method::from_bytes(request.method.to_ascii_uppercase().as_bytes())
            .map_err(|_| TransportError::InvalidMethod(request.method.clone()))?;

        let mut builder = self
            .client
            .request(method, &request.url)
            .headers(header_map(&request.headers)?);

        if let Some(params) = &request.params {
            builder = builder.query(&query_pairs(params));
        }
        match request.data {
            Some(Value::String(text)) => builder = builder.body(text),
            Some(data) => builder = builder.json(&data),
            None => {}
        }
        if let Some(ms) = request.extra.get("timeout").and_then(Value::as_u64) {
            if ms > 0 {
                builder = builder.timeout(Duration::from_millis(ms));
            }
        }

        let response = builder.send().await?;
        let status = response.status();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|value| (name.as_str().to_string(), value.to_string()))
            })
            .collect();
        let body = response.text().await?;
        let response = HttpResponse {
            status: status.as_u16(),
            headers,
            body,
        };

        if !status.is_success() {
            return Err(TransportError::Status {
                status: response.status,
                response,
            });
        }
        Ok(response)
    }
}

fn header_map(headers: &Headers) -> Result<HeaderMap, TransportError> {
    let mut map = HeaderMap::new();
    for (name, value) in headers {
        let Some(value) = scalar_to_string(value) else {
            debug!(header = %name, "skipping non-scalar header");
            continue;
        };
        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| TransportError::InvalidHeader(name.clone()))?;
        let header_value =
            HeaderValue::from_str(&value).map_err(|_| TransportError::InvalidHeader(name.clone()))?;
        map.insert(header_name, header_value);
    }
    Ok(map)
}

fn query_pairs(params: &Value) -> Vec<(String, String)> {
    let Value::Object(params) = params else {
        debug!("ignoring non-object query parameters");
        return Vec::new();
    };
    let mut pairs = Vec::new();
    for (key, value) in params {
        match value {
            Value::Array(items) => {
                pairs.extend(
                    items
                        .iter()
                        .filter_map(scalar_to_string)
                        .map(|item| (key.clone(), item)),
                );
            }
            Value::Object(_) => pairs.push((key.clone(), value.to_string())),
            _ => {
                if let Some(value) = scalar_to_string(value) {
                    pairs.push((key.clone(), value));
                }
            }
        }
    }
    pairs
}

/// Strings unquoted, numbers and booleans via `Display`; everything else is
/// not a scalar.
fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
