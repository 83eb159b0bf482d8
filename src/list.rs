use crate::error::StoreError;
use crate::filter::{FilterCriteria, SortKey};
use crate::model::{Priority, Task, TaskPayload, TaskStatus};
use crate::store::{ListResult, TaskStore};

/// Observable listing phase. `Error` means the last reload failed and the
/// displayed set was cleared; the failure itself only reaches the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListPhase {
    Loading,
    Ready,
    Error,
}

/// Snapshot of the criteria a reload was issued with, tagged with a sequence
/// number so late responses from superseded reloads can be recognized.
#[derive(Debug, Clone)]
pub struct ReloadTicket {
    seq: u64,
    pub criteria: FilterCriteria,
    pub page: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReloadOutcome {
    /// The response was applied to the displayed state.
    Applied,
    /// Applied, but the current page fell beyond the new total; the page was
    /// clamped and the listing must be fetched once more.
    PageClamped(u64),
    /// The ticket was not the latest issued; the response was discarded.
    Stale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Cancelled,
}

/// Keeps the displayed task set consistent with the chosen filter and page.
///
/// Reloads are split into `begin_reload` / `finish_reload` so a driver may
/// run the store call wherever it likes (inline, worker thread) while the
/// controller still discards responses that a newer reload has superseded.
pub struct TaskListController {
    criteria: FilterCriteria,
    page: u64,
    phase: ListPhase,
    tasks: Vec<Task>,
    total_pages: u64,
    latest_seq: u64,
}

impl Default for TaskListController {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskListController {
    pub fn new() -> Self {
        Self {
            criteria: FilterCriteria::default(),
            page: 1,
            phase: ListPhase::Loading,
            tasks: Vec::new(),
            total_pages: 1,
            latest_seq: 0,
        }
    }

    pub fn with_criteria(criteria: FilterCriteria, page: u64) -> Self {
        let mut controller = Self::new();
        controller.criteria = criteria;
        controller.page = page.max(1);
        controller
    }

    pub fn phase(&self) -> ListPhase {
        self.phase
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn total_pages(&self) -> u64 {
        self.total_pages
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    // Filter changes take effect on the next reload. The page is deliberately
    // left alone here; an out-of-range page is clamped after the reload
    // reports the new total.
    pub fn set_status(&mut self, status: Option<TaskStatus>) {
        self.criteria.status = status;
    }

    pub fn set_priority(&mut self, priority: Option<Priority>) {
        self.criteria.priority = priority;
    }

    pub fn set_category(&mut self, category: Option<i64>) {
        self.criteria.category = category;
    }

    pub fn set_search(&mut self, search: &str) {
        self.criteria.set_search(search);
    }

    pub fn set_ordering(&mut self, ordering: Option<SortKey>) {
        self.criteria.ordering = ordering;
    }

    pub fn set_page(&mut self, page: u64) {
        self.page = page.max(1);
    }

    /// Start a reload: enter `Loading` and snapshot the request state. Any
    /// ticket issued earlier is superseded from this point on.
    pub fn begin_reload(&mut self) -> ReloadTicket {
        self.latest_seq += 1;
        self.phase = ListPhase::Loading;
        ReloadTicket {
            seq: self.latest_seq,
            criteria: self.criteria.clone(),
            page: self.page,
        }
    }

    /// Apply a reload response. Responses for superseded tickets are dropped
    /// so a slow older request can never clobber a newer one.
    pub fn finish_reload(
        &mut self,
        ticket: ReloadTicket,
        result: Result<ListResult, StoreError>,
    ) -> ReloadOutcome {
        if ticket.seq != self.latest_seq {
            tracing::debug!(
                seq = ticket.seq,
                latest = self.latest_seq,
                "discarding stale list response"
            );
            return ReloadOutcome::Stale;
        }

        match result {
            Ok(list) => {
                self.tasks = list.tasks;
                self.total_pages = list.total_pages.unwrap_or(1);
                self.phase = ListPhase::Ready;
                if self.page > self.total_pages {
                    self.page = self.total_pages;
                    ReloadOutcome::PageClamped(self.page)
                } else {
                    ReloadOutcome::Applied
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to load tasks");
                self.tasks.clear();
                self.phase = ListPhase::Error;
                ReloadOutcome::Applied
            }
        }
    }

    /// Reload inline against the store, re-fetching once if the current page
    /// turned out to be beyond the new total.
    pub fn refresh(&mut self, store: &impl TaskStore) {
        for _ in 0..2 {
            let ticket = self.begin_reload();
            let result = store.list_tasks(&ticket.criteria, ticket.page);
            match self.finish_reload(ticket, result) {
                ReloadOutcome::PageClamped(_) => continue,
                _ => break,
            }
        }
    }

    /// Create a task, then reconcile by reloading with the current
    /// filter/page state. The displayed set is never patched locally.
    pub fn create(
        &mut self,
        store: &impl TaskStore,
        payload: &TaskPayload,
    ) -> Result<Task, StoreError> {
        let task = store.create_task(payload)?;
        self.refresh(store);
        Ok(task)
    }

    pub fn update(
        &mut self,
        store: &impl TaskStore,
        id: i64,
        payload: &TaskPayload,
    ) -> Result<Task, StoreError> {
        let task = store.update_task(id, payload)?;
        self.refresh(store);
        Ok(task)
    }

    /// Delete a task behind an explicit confirmation gate. Declining issues
    /// no store call and leaves the displayed state untouched.
    pub fn delete(
        &mut self,
        store: &impl TaskStore,
        id: i64,
        confirm: impl FnOnce() -> bool,
    ) -> Result<DeleteOutcome, StoreError> {
        if !confirm() {
            return Ok(DeleteOutcome::Cancelled);
        }
        store.delete_task(id)?;
        self.refresh(store);
        Ok(DeleteOutcome::Deleted)
    }
}
