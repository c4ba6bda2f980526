//! An ordered, titled collection of todos.
//!
//! # Invariants
//! - Storage order is insertion order; display order comes from `sort` and is
//!   never written back here.
//! - Todo ids are unique within one list.
//! - A list is done iff it is non-empty and every todo in it is done.

use crate::error::{Result, TodoError};
use crate::id::{self, ListId, TodoId};
use crate::title::validate_title;
use crate::todo::Todo;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoList {
    id: ListId,
    title: String,
    todos: Vec<Todo>,
}

impl TodoList {
    /// Create an empty list with a freshly minted id.
    pub fn new(title: impl Into<String>) -> Result<Self> {
        let title = title.into();
        validate_title(&title)?;
        Ok(Self {
            id: id::next_id(),
            title,
            todos: Vec::new(),
        })
    }

    /// Rebuild a list from persisted fields, keeping its stored id and the
    /// given todo order.
    pub(crate) fn restore(id: ListId, title: String, todos: Vec<Todo>) -> Result<Self> {
        validate_title(&title)?;
        for (i, todo) in todos.iter().enumerate() {
            if todos[..i].iter().any(|t| t.id() == todo.id()) {
                return Err(TodoError::Integrity(format!(
                    "duplicate todo id {} in list {id}",
                    todo.id()
                )));
            }
        }
        id::observe(id)?;
        Ok(Self { id, title, todos })
    }

    pub fn id(&self) -> ListId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Replace the title. Uniqueness among sibling lists is not checked here.
    pub fn set_title(&mut self, title: impl Into<String>) -> Result<()> {
        let title = title.into();
        validate_title(&title)?;
        self.title = title;
        Ok(())
    }

    /// Todos in storage (insertion) order.
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Append a todo to the end of the list.
    pub fn add(&mut self, todo: Todo) {
        self.todos.push(todo);
    }

    /// Remove and return the todo at `index`, shifting the rest down.
    pub fn remove_at(&mut self, index: usize) -> Result<Todo> {
        if index >= self.todos.len() {
            return Err(TodoError::IndexOutOfRange {
                index,
                len: self.todos.len(),
            });
        }
        Ok(self.todos.remove(index))
    }

    /// Position of `todo` in this list, matched by id rather than by value.
    pub fn find_index_of(&self, todo: &Todo) -> Option<usize> {
        self.todos.iter().position(|t| t.id() == todo.id())
    }

    pub fn find_by_id(&self, todo_id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id() == todo_id)
    }

    pub fn find_by_id_mut(&mut self, todo_id: TodoId) -> Option<&mut Todo> {
        self.todos.iter_mut().find(|t| t.id() == todo_id)
    }

    /// Remove the todo with `todo_id`, if present, keeping the order of the rest.
    pub fn remove_by_id(&mut self, todo_id: TodoId) -> Option<Todo> {
        let index = self.find_index_of(self.find_by_id(todo_id)?)?;
        Some(self.todos.remove(index))
    }

    pub fn mark_all_done(&mut self) {
        self.todos.iter_mut().for_each(Todo::mark_done);
    }

    pub fn done_count(&self) -> usize {
        self.todos.iter().filter(|t| t.is_done()).count()
    }

    pub fn remaining_count(&self) -> usize {
        self.todos.len() - self.done_count()
    }

    /// An empty list is never done.
    pub fn is_done(&self) -> bool {
        !self.todos.is_empty() && self.todos.iter().all(Todo::is_done)
    }
}
