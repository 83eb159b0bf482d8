use chrono::NaiveDate;
use thiserror::Error;

use crate::categories::CategoryStore;
use crate::error::StoreError;
use crate::model::{Priority, Task, TaskPayload, TaskStatus};
use crate::store::{AdviceSource, TaskStore};

/// Label used when a draft's category cannot be resolved to a name.
const GENERAL_CATEGORY: &str = "General";

/// Description used when the advice collaborator answers with no text.
const FALLBACK_ADVICE: &str = "Keep pushing forward!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(i64),
}

/// Problems with the draft itself, caught before anything is sent.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DraftError {
    #[error("title must not be empty")]
    EmptyTitle,
    #[error("due date '{0}' is not a valid YYYY-MM-DD date")]
    BadDueDate(String),
    #[error("category '{0}' is not a valid category id")]
    BadCategory(String),
}

#[derive(Debug, Error)]
pub enum FormError {
    #[error(transparent)]
    Draft(#[from] DraftError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestOutcome {
    /// The description was replaced with suggested text.
    Applied,
    /// No title yet, so no call was made; the caller should tell the user.
    EmptyTitle,
    /// The collaborator failed; the description was left untouched.
    Failed,
}

/// Result of consuming a form. On rejection the unchanged form comes back so
/// the session stays open and the user can retry.
#[derive(Debug)]
pub enum SubmitResult {
    Saved(Task),
    Rejected { form: TaskForm, error: FormError },
}

/// Draft state for one create/edit session.
///
/// Every controlled field always holds a defined value: `category` and
/// `due_date` are kept as strings where the empty string means "unset", and
/// are normalized to explicit nulls only when the payload is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskForm {
    mode: FormMode,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub priority: Priority,
    pub due_date: String,
    pub category: String,
}

impl TaskForm {
    pub fn new() -> Self {
        Self {
            mode: FormMode::Create,
            title: String::new(),
            description: String::new(),
            status: TaskStatus::Todo,
            priority: Priority::Medium,
            due_date: String::new(),
            category: String::new(),
        }
    }

    /// Start an edit session from an existing task. The due date is truncated
    /// to its date part (some store versions return a full datetime) and a
    /// missing category becomes the empty string.
    pub fn edit(task: &Task) -> Self {
        let due_date = task
            .due_date
            .as_deref()
            .and_then(|d| d.split('T').next())
            .unwrap_or_default()
            .to_string();
        Self {
            mode: FormMode::Edit(task.id),
            title: task.title.clone(),
            description: task.description.clone(),
            status: task.status,
            priority: task.priority,
            due_date,
            category: task.category.map(|id| id.to_string()).unwrap_or_default(),
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    /// Ask the advice collaborator for a description based on the title and
    /// category name. Best effort: a failure only reaches the log and leaves
    /// the draft as it was.
    pub fn suggest_description(
        &mut self,
        categories: &CategoryStore,
        advice: &impl AdviceSource,
    ) -> SuggestOutcome {
        if self.title.trim().is_empty() {
            return SuggestOutcome::EmptyTitle;
        }

        let category_name = self
            .category
            .parse::<i64>()
            .ok()
            .and_then(|id| categories.name_of(id))
            .unwrap_or(GENERAL_CATEGORY)
            .to_string();

        match advice.advice(&self.title, &category_name) {
            Ok(Some(text)) if !text.trim().is_empty() => {
                self.description = text;
                SuggestOutcome::Applied
            }
            Ok(_) => {
                self.description = FALLBACK_ADVICE.to_string();
                SuggestOutcome::Applied
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to fetch description suggestion");
                SuggestOutcome::Failed
            }
        }
    }

    /// Build the outgoing payload. Empty category and due date normalize to
    /// explicit nulls; non-empty values must parse and pass through unchanged.
    pub fn payload(&self) -> Result<TaskPayload, DraftError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(DraftError::EmptyTitle);
        }

        let due_date = match self.due_date.trim() {
            "" => None,
            raw => Some(
                NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                    .map_err(|_| DraftError::BadDueDate(raw.to_string()))?,
            ),
        };

        let category = match self.category.trim() {
            "" => None,
            raw => Some(
                raw.parse::<i64>()
                    .map_err(|_| DraftError::BadCategory(raw.to_string()))?,
            ),
        };

        Ok(TaskPayload {
            title: title.to_string(),
            description: self.description.clone(),
            status: self.status,
            priority: self.priority,
            due_date,
            category,
        })
    }

    /// Submit the draft, consuming the session. Create vs update follows the
    /// session mode. On failure the unchanged form is handed back; on success
    /// the session is over and the caller reloads the listing.
    pub fn submit(self, store: &impl TaskStore) -> SubmitResult {
        let payload = match self.payload() {
            Ok(payload) => payload,
            Err(e) => {
                return SubmitResult::Rejected {
                    form: self,
                    error: e.into(),
                }
            }
        };

        let result = match self.mode {
            FormMode::Create => store.create_task(&payload),
            FormMode::Edit(id) => store.update_task(id, &payload),
        };

        match result {
            Ok(task) => SubmitResult::Saved(task),
            Err(e) => SubmitResult::Rejected {
                form: self,
                error: e.into(),
            },
        }
    }
}

impl Default for TaskForm {
    fn default() -> Self {
        Self::new()
    }
}
