use crate::model::{Priority, TaskStatus};

/// Items per page, fixed by the store's paginator.
pub const PAGE_SIZE: u64 = 3;

/// Total page count for a reported match count. An empty listing is still one
/// (empty) page, not an error.
pub fn total_pages(count: u64) -> u64 {
    std::cmp::max(1, count.div_ceil(PAGE_SIZE))
}

/// Sort keys the store understands. Passed through verbatim; the client never
/// re-sorts on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    CreatedNewest,
    CreatedOldest,
    PriorityHighFirst,
    PriorityLowFirst,
    DueEarliest,
    DueLatest,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::CreatedNewest => "-created_at",
            SortKey::CreatedOldest => "created_at",
            SortKey::PriorityHighFirst => "-priority",
            SortKey::PriorityLowFirst => "priority",
            SortKey::DueEarliest => "due_date",
            SortKey::DueLatest => "-due_date",
        }
    }
}

impl std::str::FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "-created_at" => Ok(SortKey::CreatedNewest),
            "created_at" => Ok(SortKey::CreatedOldest),
            "-priority" => Ok(SortKey::PriorityHighFirst),
            "priority" => Ok(SortKey::PriorityLowFirst),
            "due_date" => Ok(SortKey::DueEarliest),
            "-due_date" => Ok(SortKey::DueLatest),
            other => Err(format!("unknown sort key '{}'", other)),
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current listing constraints. An unset field means "no constraint" and is
/// omitted from the request entirely; empty-string input is normalized to
/// unset at the setters, never sent as an empty constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub status: Option<TaskStatus>,
    pub priority: Option<Priority>,
    pub category: Option<i64>,
    pub search: Option<String>,
    pub ordering: Option<SortKey>,
}

impl FilterCriteria {
    /// Set the free-text search; whitespace-only input clears it.
    pub fn set_search(&mut self, search: &str) {
        let trimmed = search.trim();
        self.search = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
    }

    /// Serialize to request query pairs. Unset fields are skipped; the page
    /// number is always included.
    pub fn to_query(&self, page: u64) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("page", page.to_string())];
        if let Some(status) = self.status {
            pairs.push(("status", status.to_string()));
        }
        if let Some(priority) = self.priority {
            pairs.push(("priority", priority.to_string()));
        }
        if let Some(category) = self.category {
            pairs.push(("category", category.to_string()));
        }
        if let Some(ref search) = self.search {
            pairs.push(("search", search.clone()));
        }
        if let Some(ordering) = self.ordering {
            pairs.push(("ordering", ordering.as_str().to_string()));
        }
        pairs
    }
}
