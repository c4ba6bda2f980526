//! In-memory domain model for session-scoped todo lists.
//!
//! # Overview
//! Defines `Todo` and `TodoList`, the two-bucket display sort, and the
//! `Session` aggregate that rebuilds live entities from plain session
//! records on every request and collapses them back afterwards.
//!
//! # Design
//! - Entities validate titles at every construction and mutation boundary.
//! - The store only ever sees `TodoListRecord` / `TodoRecord` values, never
//!   the entities themselves.
//! - Lookups match by id with a linear scan; entities are recreated each
//!   request, so there is no reference identity to lean on.
//! - No I/O and no async runtime; the HTTP layer lives in `todo-server`.

pub mod error;
pub mod id;
pub mod record;
pub mod session;
pub mod sort;
pub mod title;
pub mod todo;
pub mod todo_list;

pub use error::{Result, TodoError};
pub use id::{ListId, TodoId, MAX_ID};
pub use record::{TodoListRecord, TodoRecord};
pub use session::Session;
pub use sort::{sort_by_status, sort_todo_lists, sort_todos, Sortable};
pub use title::{validate_title, MAX_TITLE_CHARS};
pub use todo::Todo;
pub use todo_list::TodoList;
