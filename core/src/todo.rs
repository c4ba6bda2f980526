//! A single task with a title and a done flag.

use crate::error::Result;
use crate::id::{self, TodoId};
use crate::title::validate_title;

/// A single task.
///
/// The title is fixed at construction; only the done flag changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    id: TodoId,
    title: String,
    done: bool,
}

impl Todo {
    /// Create a not-done todo with a freshly minted id.
    pub fn new(title: impl Into<String>) -> Result<Self> {
        let title = title.into();
        validate_title(&title)?;
        Ok(Self {
            id: id::next_id(),
            title,
            done: false,
        })
    }

    /// Rebuild a todo from persisted fields, keeping its stored id.
    pub(crate) fn restore(id: TodoId, title: String, done: bool) -> Result<Self> {
        validate_title(&title)?;
        id::observe(id)?;
        Ok(Self { id, title, done })
    }

    pub fn id(&self) -> TodoId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn mark_done(&mut self) {
        self.done = true;
    }

    pub fn mark_undone(&mut self) {
        self.done = false;
    }

    pub fn is_done(&self) -> bool {
        self.done
    }
}
