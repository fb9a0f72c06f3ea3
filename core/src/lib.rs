//! Request factory that layers per-call parameters over a base profile.
//!
//! # Overview
//! A `FetchFactory` is created once with a base url and a base request
//! config. Its verb methods (`fetch`, `get`, `post`, `put`, `delete`) take
//! only what varies per call, deep-merge it over the base config, normalize
//! the result into a `RequestDescriptor` and hand that to a `Transport`.
//!
//! # Design
//! - The factory performs no I/O; the transport does. `ReqwestTransport`
//!   (feature `reqwest`, on by default) is provided, and any other executor
//!   can implement `Transport`.
//! - Every verb returns an `Outcome`, either `Data` or `Error`. Build
//!   failures and transport failures both land in `Error`; nothing panics
//!   and nothing is dropped.
//! - Logging goes through `tracing`; installing a subscriber is up to the
//!   binary.

pub mod client;
pub mod error;
#[cfg(feature = "reqwest")]
pub mod http;
pub mod merge;
pub mod outcome;
pub mod profile;
pub mod transport;
pub mod types;

pub use client::{FetchFactory, FetchOutcome};
pub use error::{BuildError, FetchError, ProfileError};
#[cfg(feature = "reqwest")]
pub use http::{HttpResponse, ReqwestTransport, TransportError};
pub use merge::{deep_merge, deep_merge_map};
pub use outcome::Outcome;
pub use profile::{BaseProfile, SplitProfile, UnifiedProfile};
pub use transport::Transport;
pub use types::{Headers, RequestConfig, RequestDescriptor, RequestParams};
