//! Error types for the fetch factory.
//!
//! # Design
//! Building a request and executing it fail for different reasons, so they
//! get separate variants of `FetchError`. The transport's own error type is
//! carried as-is in `Transport` so callers can match on it without
//! downcasting.

use thiserror::Error;

/// Failure while turning a base profile and call parameters into a
/// `RequestDescriptor`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// Neither the base config, the call, nor its options named a method.
    #[error("request method is missing for url '{url}'")]
    MissingMethod { url: String },
}

/// Error half of a boxed verb outcome.
#[derive(Debug, Error)]
pub enum FetchError<E> {
    #[error("failed to build request: {0}")]
    Build(#[from] BuildError),

    #[error("transport error: {0}")]
    Transport(E),
}

impl<E> FetchError<E> {
    pub fn is_build(&self) -> bool {
        matches!(self, FetchError::Build(_))
    }

    /// The transport's error, if the request got that far.
    pub fn transport(&self) -> Option<&E> {
        match self {
            FetchError::Transport(err) => Some(err),
            FetchError::Build(_) => None,
        }
    }
}

/// A base profile could not be loaded.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("invalid base profile: {0}")]
    Parse(#[from] serde_json::Error),
}
