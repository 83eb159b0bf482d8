#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use taskboard::error::StoreError;
use taskboard::filter::FilterCriteria;
use taskboard::model::{
    Category, CategoryPayload, DashboardStats, Priority, Task, TaskPayload, TaskStatus,
};
use taskboard::store::{AdviceSource, ListResult, TaskStore};

/// Build a minimal task fixture.
pub fn task(id: i64, title: &str) -> Task {
    Task {
        id,
        title: title.to_string(),
        description: String::new(),
        status: TaskStatus::Todo,
        priority: Priority::Medium,
        due_date: None,
        category: None,
        category_details: None,
    }
}

/// Build a paginated listing result.
pub fn page(tasks: Vec<Task>, total_pages: u64) -> ListResult {
    ListResult {
        tasks,
        total_pages: Some(total_pages),
    }
}

pub fn transport_error() -> StoreError {
    StoreError::Transport("connection refused".to_string())
}

/// Scripted in-memory stand-in for the remote store. Listing responses are
/// consumed front to back; when the script runs out, an empty single page is
/// returned. Mutations are recorded, and fail wholesale when `fail_mutations`
/// is set.
#[derive(Default)]
pub struct MockStore {
    pub list_responses: RefCell<VecDeque<Result<ListResult, StoreError>>>,
    pub list_calls: RefCell<Vec<(FilterCriteria, u64)>>,
    pub created: RefCell<Vec<TaskPayload>>,
    pub updated: RefCell<Vec<(i64, TaskPayload)>>,
    pub deleted: RefCell<Vec<i64>>,
    pub categories: Vec<Category>,
    pub fail_categories: bool,
    pub fail_mutations: Cell<bool>,
}

impl MockStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_categories(categories: Vec<Category>) -> Self {
        Self {
            categories,
            ..Self::default()
        }
    }

    pub fn push_list(&self, response: Result<ListResult, StoreError>) {
        self.list_responses.borrow_mut().push_back(response);
    }
}

impl TaskStore for MockStore {
    fn list_tasks(&self, criteria: &FilterCriteria, page: u64) -> Result<ListResult, StoreError> {
        self.list_calls.borrow_mut().push((criteria.clone(), page));
        self.list_responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| {
                Ok(ListResult {
                    tasks: Vec::new(),
                    total_pages: Some(1),
                })
            })
    }

    fn create_task(&self, payload: &TaskPayload) -> Result<Task, StoreError> {
        if self.fail_mutations.get() {
            return Err(transport_error());
        }
        self.created.borrow_mut().push(payload.clone());
        let mut created = task(101, &payload.title);
        created.status = payload.status;
        created.priority = payload.priority;
        Ok(created)
    }

    fn update_task(&self, id: i64, payload: &TaskPayload) -> Result<Task, StoreError> {
        if self.fail_mutations.get() {
            return Err(transport_error());
        }
        self.updated.borrow_mut().push((id, payload.clone()));
        let mut updated = task(id, &payload.title);
        updated.status = payload.status;
        updated.priority = payload.priority;
        Ok(updated)
    }

    fn delete_task(&self, id: i64) -> Result<(), StoreError> {
        if self.fail_mutations.get() {
            return Err(transport_error());
        }
        self.deleted.borrow_mut().push(id);
        Ok(())
    }

    fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        if self.fail_categories {
            return Err(transport_error());
        }
        Ok(self.categories.clone())
    }

    fn create_category(&self, payload: &CategoryPayload) -> Result<Category, StoreError> {
        Ok(Category {
            id: 1,
            name: payload.name.clone(),
        })
    }

    fn update_category(&self, id: i64, payload: &CategoryPayload) -> Result<Category, StoreError> {
        Ok(Category {
            id,
            name: payload.name.clone(),
        })
    }

    fn delete_category(&self, _id: i64) -> Result<(), StoreError> {
        Ok(())
    }

    fn dashboard(&self) -> Result<DashboardStats, StoreError> {
        Ok(DashboardStats::default())
    }
}

/// Scripted advice collaborator; records what it was asked.
#[derive(Default)]
pub struct MockAdvice {
    pub reply: RefCell<Option<Result<Option<String>, StoreError>>>,
    pub calls: RefCell<Vec<(String, String)>>,
}

impl MockAdvice {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: RefCell::new(Some(Ok(Some(text.to_string())))),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn empty() -> Self {
        Self {
            reply: RefCell::new(Some(Ok(None))),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: RefCell::new(Some(Err(transport_error()))),
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl AdviceSource for MockAdvice {
    fn advice(&self, title: &str, category: &str) -> Result<Option<String>, StoreError> {
        self.calls
            .borrow_mut()
            .push((title.to_string(), category.to_string()));
        self.reply.borrow_mut().take().unwrap_or(Ok(None))
    }
}
