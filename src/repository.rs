//! Repository Layer
//!
//! Seam between the presentation controller and the transport. The trait
//! is what controller tests fake; the remote implementation delegates 1:1
//! to the API client.

use async_trait::async_trait;

use crate::api::{ApiError, TodoApi};
use crate::models::TodoList;

/// Data access contract for todo pages
///
/// `?Send` because wasm futures are not `Send`.
#[async_trait(?Send)]
pub trait TodoRepository {
    /// Fetch the current page of todos
    async fn list(&self) -> Result<TodoList, ApiError>;
}

/// Repository backed by the remote API
///
/// No caching, no offline fallback; results and errors pass through
/// unchanged.
#[derive(Debug, Clone)]
pub struct RemoteTodoRepository {
    api: TodoApi,
}

impl RemoteTodoRepository {
    pub fn new(api: TodoApi) -> Self {
        Self { api }
    }
}

#[async_trait(?Send)]
impl TodoRepository for RemoteTodoRepository {
    async fn list(&self) -> Result<TodoList, ApiError> {
        self.api.list().await
    }
}
