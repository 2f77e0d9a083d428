//! Frontend Models
//!
//! Data structures matching the remote todos endpoint.

use serde::{Deserialize, Serialize};

/// One page of todos exactly as the server reports it
///
/// Replaced wholesale on every successful fetch; never merged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoList {
    pub todos: Vec<TodoItem>,
    pub total: u32,
    pub skip: u32,
    pub limit: u32,
}

/// A single task record within a page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    pub id: u32,
    /// Task description shown on the card
    pub todo: String,
    pub completed: bool,
    /// Owner reference; not validated against anything
    pub user_id: u32,
}
