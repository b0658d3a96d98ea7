//! Remote Store Client
//!
//! Access to the REST resource that owns canonical task state.

mod http;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Task, TaskId, TaskPayload};

pub use http::HttpRemoteStore;

/// Any failed round-trip. Callers treat every variant the same way.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NetworkFailure {
    #[error("request could not be sent: {0}")]
    Transport(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("request body could not be encoded: {0}")]
    Encode(String),
    #[error("response could not be decoded: {0}")]
    Decode(String),
}

pub type ApiResult<T> = Result<T, NetworkFailure>;

/// CRUD contract of the remote todo resource.
///
/// Futures are not `Send`: everything runs on the browser's event loop.
#[async_trait(?Send)]
pub trait RemoteStore {
    /// `GET /` - the whole collection in server order
    async fn list(&self) -> ApiResult<Vec<Task>>;

    /// `POST /` - returns the created record with its assigned id
    async fn create(&self, payload: &TaskPayload) -> ApiResult<Task>;

    /// `PUT /{id}/` - full replacement, returns the canonical record
    async fn update(&self, id: &TaskId, payload: &TaskPayload) -> ApiResult<Task>;

    /// `DELETE /{id}/`
    async fn delete(&self, id: &TaskId) -> ApiResult<()>;
}
