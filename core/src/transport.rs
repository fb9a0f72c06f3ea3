//! The seam between request building and request execution.
//!
//! # Design
//! The factory never performs I/O itself. It hands each finished
//! `RequestDescriptor` to a `Transport` and boxes whatever comes back.
//! Response and error types belong to the transport; the factory treats both
//! as opaque.

use std::sync::Arc;

use async_trait::async_trait;

use crate::types::RequestDescriptor;

#[async_trait]
pub trait Transport: Send + Sync {
    type Response: Send;
    type Error: Send;

    async fn execute(&self, request: RequestDescriptor) -> Result<Self::Response, Self::Error>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    type Response = T::Response;
    type Error = T::Error;

    async fn execute(&self, request: RequestDescriptor) -> Result<Self::Response, Self::Error> {
        (**self).execute(request).await
    }
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for &T {
    type Response = T::Response;
    type Error = T::Error;

    async fn execute(&self, request: RequestDescriptor) -> Result<Self::Response, Self::Error> {
        (**self).execute(request).await
    }
}
