//! Todo input types

use chrono::{DateTime, Utc};

use rental_types::{Error, Todo};

/// Validated input for a new todo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    pub title: String,
    pub description: Option<String>,
}

impl NewTodo {
    /// Title is required; both fields are trimmed and a blank description is dropped
    pub fn new(title: &str, description: Option<&str>) -> Result<Self, Error> {
        let title = title.trim();
        if title.is_empty() {
            return Err(Error::MissingField("Title"));
        }
        Ok(Self {
            title: title.to_string(),
            description: normalize_description(description),
        })
    }
}

/// Partial update; `None` leaves a field untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoPatch {
    pub title: Option<String>,
    /// `Some("")` clears the description
    pub description: Option<String>,
    pub completed: Option<bool>,
}

impl TodoPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.completed.is_none()
    }

    pub fn apply(&self, todo: &mut Todo, now: DateTime<Utc>) -> Result<(), Error> {
        if let Some(ref title) = self.title {
            let title = title.trim();
            if title.is_empty() {
                return Err(Error::MissingField("Title"));
            }
            todo.title = title.to_string();
        }
        if let Some(ref description) = self.description {
            todo.description = normalize_description(Some(description));
        }
        if let Some(completed) = self.completed {
            todo.completed = completed;
        }
        todo.updated_at = now;
        Ok(())
    }
}

/// List filter for todos
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoQuery {
    pub completed: Option<bool>,
    /// Case-insensitive substring over title and description
    pub search: Option<String>,
}

impl TodoQuery {
    pub fn matches(&self, todo: &Todo) -> bool {
        if let Some(completed) = self.completed {
            if todo.completed != completed {
                return false;
            }
        }
        match self.search.as_deref().filter(|s| !s.is_empty()) {
            Some(search) => todo.matches_search(&search.to_lowercase()),
            None => true,
        }
    }
}

fn normalize_description(description: Option<&str>) -> Option<String> {
    description
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(str::to_string)
}
