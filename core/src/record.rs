//! Plain-data session records.
//!
//! # Design
//! These are the only shapes handed to the session store. They carry no
//! behavior; `Session::rehydrate` turns them into live entities and
//! `Session::to_records` collapses the entities back. Entities never reach
//! the store directly.

use serde::{Deserialize, Serialize};

use crate::id::{ListId, TodoId};
use crate::todo::Todo;
use crate::todo_list::TodoList;

/// Stored form of a single todo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoRecord {
    pub id: TodoId,
    pub title: String,
    pub done: bool,
}

/// Stored form of a list. A missing `todos` field reads as an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoListRecord {
    pub id: ListId,
    pub title: String,
    #[serde(default)]
    pub todos: Vec<TodoRecord>,
}

impl From<&Todo> for TodoRecord {
    fn from(todo: &Todo) -> Self {
        Self {
            id: todo.id(),
            title: todo.title().to_string(),
            done: todo.is_done(),
        }
    }
}

impl From<&TodoList> for TodoListRecord {
    fn from(list: &TodoList) -> Self {
        Self {
            id: list.id(),
            title: list.title().to_string(),
            todos: list.todos().iter().map(TodoRecord::from).collect(),
        }
    }
}
