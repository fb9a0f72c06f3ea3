//! Base profile: the url prefix and default config a factory is built with.
//!
//! Two shapes are accepted, both as Rust values and as JSON:
//!
//! ```json
//! { "baseUrl": "https://api.test", "config": { "method": "get" }, "header": { "x-app": "demo" } }
//! { "baseUrl": "https://api.test", "baseConfig": { "method": "get", "headers": { "x-app": "demo" } } }
//! ```
//!
//! `baseUrl` is required in both, and unknown top-level keys are rejected.

use serde::{Deserialize, Serialize};

use crate::error::ProfileError;
use crate::merge::deep_merge_map;
use crate::types::{Headers, RequestConfig};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BaseProfile {
    Unified(UnifiedProfile),
    Split(SplitProfile),
}

/// Headers, if any, live inside the config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UnifiedProfile {
    #[serde(rename = "baseUrl")]
    pub base_url: String,
    #[serde(rename = "baseConfig")]
    pub base_config: RequestConfig,
}

/// Config and headers supplied separately.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SplitProfile {
    #[serde(rename = "baseUrl")]
    pub base_url: String,
    #[serde(default)]
    pub config: RequestConfig,
    #[serde(default)]
    pub header: Headers,
}

impl BaseProfile {
    pub fn split(base_url: impl Into<String>, config: RequestConfig, header: Headers) -> Self {
        BaseProfile::Split(SplitProfile {
            base_url: base_url.into(),
            config,
            header,
        })
    }

    pub fn unified(base_url: impl Into<String>, base_config: RequestConfig) -> Self {
        BaseProfile::Unified(UnifiedProfile {
            base_url: base_url.into(),
            base_config,
        })
    }

    pub fn from_json_str(raw: &str) -> Result<Self, ProfileError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn base_url(&self) -> &str {
        match self {
            BaseProfile::Split(profile) => &profile.base_url,
            BaseProfile::Unified(profile) => &profile.base_url,
        }
    }

    /// Flatten either shape into `(base_url, config)`.
    ///
    /// For the split shape the standalone headers are merged over
    /// `config.headers`, so the config carries every base header.
    pub(crate) fn into_parts(self) -> (String, RequestConfig) {
        match self {
            BaseProfile::Split(SplitProfile {
                base_url,
                mut config,
                header,
            }) => {
                deep_merge_map(&mut config.headers, header);
                (base_url, config)
            }
            BaseProfile::Unified(UnifiedProfile {
                base_url,
                base_config,
            }) => (base_url, base_config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_split_form() {
        let profile = BaseProfile::from_json_str(
            r#"{"baseUrl":"https://api.test","config":{"method":"GET"},"header":{"x-app":"demo"}}"#,
        )
        .unwrap();
        assert!(matches!(profile, BaseProfile::Split(_)));
        assert_eq!(profile.base_url(), "https://api.test");

        let (url, config) = profile.into_parts();
        assert_eq!(url, "https://api.test");
        assert_eq!(config.method.as_deref(), Some("GET"));
        assert_eq!(config.headers["x-app"], "demo");
    }

    #[test]
    fn split_form_needs_only_base_url() {
        let profile = BaseProfile::from_json_str(r#"{"baseUrl":"https://api.test"}"#).unwrap();
        assert!(matches!(profile, BaseProfile::Split(_)));
    }

    #[test]
    fn parses_unified_form() {
        let profile = BaseProfile::from_json_str(
            r#"{"baseUrl":"https://api.test","baseConfig":{"method":"post","headers":{"a":"1"},"timeout":30}}"#,
        )
        .unwrap();
        assert!(matches!(profile, BaseProfile::Unified(_)));

        let (_, config) = profile.into_parts();
        assert_eq!(config.method.as_deref(), Some("post"));
        assert_eq!(config.headers["a"], "1");
        assert_eq!(config.extra["timeout"], 30);
    }

    #[test]
    fn split_header_overrides_config_headers() {
        let config = RequestConfig::new().with_header("a", "config").with_header("b", "config");
        let mut header = Headers::new();
        header.insert("a".to_string(), "header".into());

        let (_, config) = BaseProfile::split("", config, header).into_parts();
        assert_eq!(config.headers["a"], "header");
        assert_eq!(config.headers["b"], "config");
    }

    #[test]
    fn rejects_misspelled_keys() {
        assert!(BaseProfile::from_json_str(r#"{"baseURL":"https://api.test","baseconfig":{}}"#).is_err());
        assert!(BaseProfile::from_json_str(r#"{"baseUrl":"https://api.test","baseconfig":{}}"#).is_err());
        assert!(BaseProfile::from_json_str(r#"{"baseUrl":"https://api.test","headers":{}}"#).is_err());
        assert!(BaseProfile::from_json_str("{}").is_err());
    }

    #[test]
    fn rejects_non_object_profile() {
        assert!(BaseProfile::from_json_str("[1, 2]").is_err());
    }
}
