//! Base-profile request factory.
//!
//! # Design
//! `FetchFactory` holds a base url, a base `RequestConfig` and a standalone
//! copy of the base headers. Each verb call clones the base config, layers
//! the call's fields over it with a deep merge, normalizes the result and
//! hands it to the transport. The base profile is only changed through the
//! setters, never by a request.
//!
//! Merge order, identical for every verb:
//!
//! 1. clone of the base config
//! 2. method (fixed by the verb, or the caller's for `fetch`)
//! 3. url (the call path)
//! 4. data (the call body)
//! 5. headers
//! 6. options, which may override any of the above
//!
//! Normalization then prefixes the url with the base url, lower-cases the
//! method, and for `get` moves `data` into `parames`.

use tracing::{debug, error, warn};

use crate::error::{BuildError, FetchError};
use crate::outcome::Outcome;
use crate::profile::BaseProfile;
use crate::transport::Transport;
use crate::types::{Headers, RequestConfig, RequestDescriptor, RequestParams};

/// Boxed result of a verb call on a `FetchFactory<T>`.
pub type FetchOutcome<T> =
    Outcome<<T as Transport>::Response, FetchError<<T as Transport>::Error>>;

#[derive(Debug, Clone)]
pub struct FetchFactory<T> {
    base_url: String,
    base_config: RequestConfig,
    base_headers: Headers,
    transport: T,
}

impl<T> FetchFactory<T> {
    pub fn new(profile: BaseProfile, transport: T) -> Self {
        let (base_url, base_config) = profile.into_parts();
        let base_headers = base_config.headers.clone();
        Self {
            base_url,
            base_config,
            base_headers,
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn set_base_url(&mut self, url: impl Into<String>) {
        self.base_url = url.into();
        debug!(base_url = %self.base_url, "base url replaced");
    }

    pub fn base_config(&self) -> &RequestConfig {
        &self.base_config
    }

    /// Replace the whole base config. Nothing is merged; the standalone
    /// header store follows the new config's headers.
    pub fn set_base_config(&mut self, config: RequestConfig) {
        self.base_headers = config.headers.clone();
        self.base_config = config;
        debug!("base config replaced");
    }

    /// The base headers as requests see them. For a split profile this is
    /// `config.headers` with `header` merged over it, not `header` alone.
    pub fn base_header(&self) -> &Headers {
        &self.base_headers
    }

    /// Replace the base headers, both the standalone store and the copy
    /// embedded in the base config.
    pub fn set_base_headers(&mut self, headers: Headers) {
        self.base_config.headers = headers.clone();
        self.base_headers = headers;
        debug!(count = self.base_headers.len(), "base headers replaced");
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Merge `params` over the base config and normalize the result.
    ///
    /// `method` is `None` only for `fetch` callers relying on the base
    /// config (or their options) to supply one.
    pub fn build_config(
        &self,
        method: Option<&str>,
        params: RequestParams,
    ) -> Result<RequestDescriptor, BuildError> {
        let RequestParams {
            path,
            body,
            headers,
            options,
        } = params;

        let mut config = self.base_config.clone();
        if let Some(method) = method {
            config.merge(RequestConfig::new().with_method(method));
        }
        config.merge(RequestConfig::new().with_url(path));
        config.merge(RequestConfig {
            data: body,
            ..RequestConfig::default()
        });
        if let Some(headers) = headers {
            config.merge(RequestConfig::new().with_headers(headers));
        }
        if let Some(options) = options {
            config.merge(options);
        }

        self.normalize(config)
    }

    fn normalize(&self, config: RequestConfig) -> Result<RequestDescriptor, BuildError> {
        let RequestConfig {
            url,
            method,
            mut data,
            mut params,
            headers,
            extra,
        } = config;

        let url = format!("{}{}", self.base_url, url.unwrap_or_default());
        let method = method
            .ok_or_else(|| BuildError::MissingMethod { url: url.clone() })?
            .to_lowercase();

        // GET never carries a body.
        if method == "get" {
            if let Some(data) = data.take() {
                params = Some(data);
            }
        }

        Ok(RequestDescriptor {
            url,
            method,
            data,
            params,
            headers,
            extra,
        })
    }
}

impl<T: Transport> FetchFactory<T> {
    /// Issue a request whose method comes from the caller, falling back to
    /// the base config's method when `method` is `None`.
    pub async fn fetch(&self, method: Option<&str>, params: RequestParams) -> FetchOutcome<T> {
        self.dispatch(method, params).await
    }

    pub async fn get(&self, params: RequestParams) -> FetchOutcome<T> {
        self.dispatch(Some("get"), params).await
    }

    pub async fn post(&self, params: RequestParams) -> FetchOutcome<T> {
        self.dispatch(Some("post"), params).await
    }

    pub async fn put(&self, params: RequestParams) -> FetchOutcome<T> {
        self.dispatch(Some("put"), params).await
    }

    pub async fn delete(&self, params: RequestParams) -> FetchOutcome<T> {
        self.dispatch(Some("delete"), params).await
    }

    async fn dispatch(&self, method: Option<&str>, params: RequestParams) -> FetchOutcome<T> {
        let request = match self.build_config(method, params) {
            Ok(request) => request,
            Err(err) => {
                error!("[fetch factory] {err}");
                return Outcome::Error(FetchError::Build(err));
            }
        };
        debug!(method = %request.method, url = %request.url, ?request, "dispatching request");

        match self.transport.execute(request).await {
            Ok(response) => Outcome::Data(response),
            Err(err) => {
                warn!("[fetch factory] transport rejected request");
                Outcome::Error(FetchError::Transport(err))
            }
        }
    }
}
