//! Presentation Controller
//!
//! Owns the published todo page and the single refresh operation. The
//! view subscribes to the published snapshot and re-renders when a new
//! one lands; a failed refresh never touches the snapshot.

use leptos::prelude::*;

use crate::api::ApiError;
use crate::models::TodoList;
use crate::repository::TodoRepository;

/// Why a refresh produced no new snapshot
#[derive(Debug, thiserror::Error)]
pub enum RefreshError {
    /// A previous refresh has not resolved yet
    #[error("a refresh is already in flight")]
    InFlight,

    /// The repository failed; the published snapshot is unchanged
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Publishes the most recently fetched page to the view layer.
///
/// `None` until the first successful fetch, then always the last
/// successful page.
#[derive(Clone)]
pub struct TodoController<R> {
    repository: R,
    todos: ArcRwSignal<Option<TodoList>>,
    in_flight: ArcRwSignal<bool>,
}

impl<R: TodoRepository> TodoController<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            todos: ArcRwSignal::new(None),
            in_flight: ArcRwSignal::new(false),
        }
    }

    /// Read handle the view subscribes to
    pub fn todos(&self) -> ArcReadSignal<Option<TodoList>> {
        self.todos.read_only()
    }

    /// Re-fetch the page and publish it.
    ///
    /// Overlapping calls are rejected instead of raced: whoever holds the
    /// in-flight slot wins, the later caller gets `InFlight` and the
    /// snapshot stays as it was. Errors are returned, not logged; the
    /// caller decides what to do with them.
    pub async fn refresh(&self) -> Result<(), RefreshError> {
        if self.in_flight.get_untracked() {
            return Err(RefreshError::InFlight);
        }
        self.in_flight.set(true);
        let fetched = self.repository.list().await;
        self.in_flight.set(false);

        match fetched {
            Ok(page) => {
                self.todos.set(Some(page));
                Ok(())
            }
            Err(err) => Err(RefreshError::Api(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TodoItem;
    use async_trait::async_trait;
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::time::Duration;

    fn page(ids: &[u32]) -> TodoList {
        TodoList {
            todos: ids
                .iter()
                .map(|&id| TodoItem {
                    id,
                    todo: format!("todo {}", id),
                    completed: false,
                    user_id: 1,
                })
                .collect(),
            total: ids.len() as u32,
            skip: 0,
            limit: ids.len() as u32,
        }
    }

    fn server_error() -> ApiError {
        ApiError::Status(reqwest::StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Repository that replays a scripted sequence of responses
    struct ScriptedRepository {
        responses: RefCell<VecDeque<Result<TodoList, ApiError>>>,
    }

    impl ScriptedRepository {
        fn new(responses: Vec<Result<TodoList, ApiError>>) -> Self {
            Self {
                responses: RefCell::new(responses.into()),
            }
        }
    }

    #[async_trait(?Send)]
    impl TodoRepository for ScriptedRepository {
        async fn list(&self) -> Result<TodoList, ApiError> {
            self.responses
                .borrow_mut()
                .pop_front()
                .expect("no scripted response left")
        }
    }

    /// Repository that resolves only after a short delay
    struct SlowRepository;

    #[async_trait(?Send)]
    impl TodoRepository for SlowRepository {
        async fn list(&self) -> Result<TodoList, ApiError> {
            tokio::time::sleep(Duration::from_millis(20)).await;
            Ok(page(&[1]))
        }
    }

    #[tokio::test]
    async fn test_refresh_publishes_fetched_page() {
        let controller = TodoController::new(ScriptedRepository::new(vec![Ok(page(&[1, 2]))]));
        assert_eq!(controller.todos().get_untracked(), None);

        controller.refresh().await.expect("refresh failed");

        let published = controller.todos().get_untracked().expect("nothing published");
        assert_eq!(published.todos.len(), 2);
        assert_eq!(published.todos[0].todo, "todo 1");
    }

    #[tokio::test]
    async fn test_failed_refresh_keeps_empty_state() {
        let controller = TodoController::new(ScriptedRepository::new(vec![Err(server_error())]));

        let result = controller.refresh().await;

        assert!(matches!(result, Err(RefreshError::Api(ApiError::Status(_)))));
        assert_eq!(controller.todos().get_untracked(), None);
    }

    #[tokio::test]
    async fn test_failed_refresh_keeps_loaded_state() {
        let controller = TodoController::new(ScriptedRepository::new(vec![
            Ok(page(&[7])),
            Err(server_error()),
        ]));
        controller.refresh().await.expect("first refresh failed");
        let before = controller.todos().get_untracked();

        let result = controller.refresh().await;

        assert!(result.is_err());
        assert_eq!(controller.todos().get_untracked(), before);
    }

    #[tokio::test]
    async fn test_second_fetch_replaces_first() {
        let controller = TodoController::new(ScriptedRepository::new(vec![
            Ok(page(&[1, 2, 3])),
            Ok(page(&[4])),
        ]));

        controller.refresh().await.expect("first refresh failed");
        controller.refresh().await.expect("second refresh failed");

        let published = controller.todos().get_untracked().expect("nothing published");
        assert_eq!(published.todos.len(), 1);
        assert_eq!(published.todos[0].id, 4);
    }

    #[tokio::test]
    async fn test_refresh_recovers_after_failure() {
        let controller = TodoController::new(ScriptedRepository::new(vec![
            Err(server_error()),
            Ok(page(&[2])),
        ]));

        assert!(controller.refresh().await.is_err());
        controller.refresh().await.expect("retry failed");

        assert!(controller.todos().get_untracked().is_some());
    }

    #[tokio::test]
    async fn test_refresh_rejected_while_in_flight() {
        let controller = TodoController::new(SlowRepository);

        let (first, second) = tokio::join!(controller.refresh(), controller.refresh());

        assert!(first.is_ok());
        assert!(matches!(second, Err(RefreshError::InFlight)));
        assert!(controller.todos().get_untracked().is_some());
    }
}
