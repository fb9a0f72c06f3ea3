//! Request configuration types.
//!
//! # Design
//! `RequestConfig` is the merge schema: every field is optional so a partial
//! config (a base profile, a verb's implicit method, a caller's options) can
//! be layered onto another with `merge`. `RequestDescriptor` is what comes
//! out of the builder once the url and method are known and normalized.
//!
//! Query parameters are serialized under the key `parames`, which is what
//! hosts consuming the descriptor as JSON expect.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::merge::{deep_merge_map, merge_option};

/// Request headers. Values are usually strings, but nested groups are
/// allowed and merge recursively.
pub type Headers = Map<String, Value>;

/// A partial request configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,

    #[serde(default, rename = "parames", skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,

    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub headers: Headers,

    /// Free-form transport options (`timeout`, `withCredentials`, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RequestConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn with_params(mut self, params: Value) -> Self {
        self.params = Some(params);
        self
    }

    pub fn with_headers(mut self, headers: Headers) -> Self {
        self.headers = headers;
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Deep-merge `source` over `self`.
    ///
    /// Fields absent from `source` are left alone. `url` and `method` are
    /// plain overwrites; every JSON-valued field follows
    /// [`deep_merge`](crate::merge::deep_merge).
    pub fn merge(&mut self, source: RequestConfig) -> &mut Self {
        let RequestConfig {
            url,
            method,
            data,
            params,
            headers,
            extra,
        } = source;

        if url.is_some() {
            self.url = url;
        }
        if method.is_some() {
            self.method = method;
        }
        merge_option(&mut self.data, data);
        merge_option(&mut self.params, params);
        deep_merge_map(&mut self.headers, headers);
        deep_merge_map(&mut self.extra, extra);
        self
    }
}

/// A fully merged and normalized request, ready for a [`Transport`].
///
/// [`Transport`]: crate::transport::Transport
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestDescriptor {
    pub url: String,

    /// Always lower-case.
    pub method: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,

    #[serde(default, rename = "parames", skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,

    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub headers: Headers,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Per-call parameters for the verb methods of [`FetchFactory`].
///
/// `options` is merged last and overrides everything before it, including
/// the path, the method and the headers.
///
/// [`FetchFactory`]: crate::client::FetchFactory
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestParams {
    pub path: String,
    pub body: Option<Value>,
    pub headers: Option<Headers>,
    pub options: Option<RequestConfig>,
}

impl RequestParams {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Serialize `body` to JSON and use it as the payload.
    pub fn json_body<T: Serialize>(self, body: &T) -> Result<Self, serde_json::Error> {
        Ok(self.body(serde_json::to_value(body)?))
    }

    pub fn headers(mut self, headers: Headers) -> Self {
        self.headers = Some(headers);
        self
    }

    /// Add a single header, keeping any already set on this call.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.headers
            .get_or_insert_with(Headers::new)
            .insert(name.into(), value.into());
        self
    }

    pub fn options(mut self, options: RequestConfig) -> Self {
        self.options = Some(options);
        self
    }
}
