//! Per-session collection of todo lists and the rehydration boundary.
//!
//! # Overview
//! A `Session` is the live, behavior-bearing view of one user's lists. It is
//! built fresh from plain records at the start of every request and
//! collapsed back to records at the end; nothing else crosses the store
//! boundary.
//!
//! # Invariants
//! - List ids are unique within the session.
//! - Storage order is preserved through a rehydrate / `to_records` round trip.
//! - Persisted ids are kept as-is; only new entities get minted ids.

use serde_json::Value;
use tracing::debug;

use crate::error::{Result, TodoError};
use crate::id::{ListId, TodoId};
use crate::record::TodoListRecord;
use crate::sort::sort_todo_lists;
use crate::todo::Todo;
use crate::todo_list::TodoList;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    lists: Vec<TodoList>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild live lists from their stored records.
    ///
    /// # Errors
    /// Returns `TodoError::Integrity` when a record carries an invalid title
    /// or a duplicated list or todo id.
    pub fn rehydrate(records: Vec<TodoListRecord>) -> Result<Self> {
        let mut lists: Vec<TodoList> = Vec::with_capacity(records.len());
        for record in records {
            if lists.iter().any(|l| l.id() == record.id) {
                return Err(TodoError::Integrity(format!(
                    "duplicate list id {}",
                    record.id
                )));
            }
            let todos = record
                .todos
                .into_iter()
                .map(|t| Todo::restore(t.id, t.title, t.done))
                .collect::<Result<Vec<_>>>()
                .map_err(into_integrity)?;
            let list = TodoList::restore(record.id, record.title, todos).map_err(into_integrity)?;
            lists.push(list);
        }
        debug!(lists = lists.len(), "rehydrated session");
        Ok(Self { lists })
    }

    /// Rehydrate from whatever the store holds. `None` and JSON `null` both
    /// mean the session has no lists yet.
    pub fn from_json(value: Option<Value>) -> Result<Self> {
        match value {
            None | Some(Value::Null) => Ok(Self::new()),
            Some(value) => {
                let records: Vec<TodoListRecord> = serde_json::from_value(value)?;
                Self::rehydrate(records)
            }
        }
    }

    /// Collapse back to plain records, in storage order.
    pub fn to_records(&self) -> Vec<TodoListRecord> {
        self.lists.iter().map(TodoListRecord::from).collect()
    }

    pub fn to_json(&self) -> Result<Value> {
        let value = serde_json::to_value(self.to_records())?;
        debug!(lists = self.lists.len(), "dehydrated session");
        Ok(value)
    }

    /// Lists in storage order.
    pub fn lists(&self) -> &[TodoList] {
        &self.lists
    }

    /// Lists in display order.
    pub fn sorted_lists(&self) -> Vec<&TodoList> {
        sort_todo_lists(&self.lists)
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    pub fn push(&mut self, list: TodoList) {
        self.lists.push(list);
    }

    pub fn remove_list(&mut self, list_id: ListId) -> Option<TodoList> {
        let index = self.lists.iter().position(|l| l.id() == list_id)?;
        Some(self.lists.remove(index))
    }

    /// Exact, case-sensitive title match against every list.
    pub fn has_list_titled(&self, title: &str) -> bool {
        self.lists.iter().any(|l| l.title() == title)
    }

    pub fn find_list_by_id(&self, list_id: ListId) -> Option<&TodoList> {
        self.lists.iter().find(|l| l.id() == list_id)
    }

    pub fn find_list_by_id_mut(&mut self, list_id: ListId) -> Option<&mut TodoList> {
        self.lists.iter_mut().find(|l| l.id() == list_id)
    }

    pub fn find_todo_by_id(&self, list_id: ListId, todo_id: TodoId) -> Option<&Todo> {
        self.find_list_by_id(list_id)?.find_by_id(todo_id)
    }

    pub fn find_todo_by_id_mut(&mut self, list_id: ListId, todo_id: TodoId) -> Option<&mut Todo> {
        self.find_list_by_id_mut(list_id)?.find_by_id_mut(todo_id)
    }
}

fn into_integrity(e: TodoError) -> TodoError {
    match e {
        TodoError::Integrity(_) => e,
        other => TodoError::Integrity(other.to_string()),
    }
}
