use serde::Deserialize;

use crate::error::StoreError;
use crate::filter::{total_pages, FilterCriteria};
use crate::model::{Category, CategoryPayload, DashboardStats, Task, TaskPayload};

/// Canonical listing result. `total_pages` is `None` when the store returned
/// a bare array (listing not paginated); downstream treats that as one page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListResult {
    pub tasks: Vec<Task>,
    pub total_pages: Option<u64>,
}

impl ListResult {
    pub fn empty() -> Self {
        Self::default()
    }
}

/// The remote task-store boundary. One implementation talks HTTP; tests
/// substitute a scripted mock.
pub trait TaskStore {
    fn list_tasks(&self, criteria: &FilterCriteria, page: u64) -> Result<ListResult, StoreError>;
    fn create_task(&self, payload: &TaskPayload) -> Result<Task, StoreError>;
    fn update_task(&self, id: i64, payload: &TaskPayload) -> Result<Task, StoreError>;
    fn delete_task(&self, id: i64) -> Result<(), StoreError>;

    fn list_categories(&self) -> Result<Vec<Category>, StoreError>;
    fn create_category(&self, payload: &CategoryPayload) -> Result<Category, StoreError>;
    fn update_category(&self, id: i64, payload: &CategoryPayload)
        -> Result<Category, StoreError>;
    fn delete_category(&self, id: i64) -> Result<(), StoreError>;

    fn dashboard(&self) -> Result<DashboardStats, StoreError>;
}

/// The advice collaborator: best effort, the caller tolerates failure and
/// empty text.
pub trait AdviceSource {
    /// Returns the suggested description text, or `None` when the collaborator
    /// answered without any.
    fn advice(&self, title: &str, category: &str) -> Result<Option<String>, StoreError>;
}

/// The two body shapes the store is known to return for a task listing.
#[derive(Deserialize)]
#[serde(untagged)]
enum ListBody {
    Paginated { results: Vec<Task>, count: u64 },
    Plain(Vec<Task>),
}

/// Normalize a raw listing body into a `ListResult`.
///
/// Anything that is neither a `{results, count}` object nor a bare task array
/// is a protocol error: logged, degraded to an empty listing, never a crash.
pub fn decode_list_body(body: serde_json::Value) -> ListResult {
    match serde_json::from_value::<ListBody>(body) {
        Ok(ListBody::Paginated { results, count }) => ListResult {
            tasks: results,
            total_pages: Some(total_pages(count)),
        },
        Ok(ListBody::Plain(tasks)) => ListResult {
            tasks,
            total_pages: None,
        },
        Err(e) => {
            tracing::warn!(error = %e, "unexpected task list response shape, treating as empty");
            ListResult::empty()
        }
    }
}
