//! Title validation applied to user input before it reaches the entities.
//!
//! Input is trimmed first. Every failing rule contributes a message, so a
//! request can report several problems at once.

use todo_core::{Session, MAX_TITLE_CHARS};

use crate::error::AppError;

const LIST_TITLE_REQUIRED: &str = "The list title is required.";
const LIST_TITLE_LENGTH: &str = "List title must be between 1 and 100 characters";
const LIST_TITLE_UNIQUE: &str = "List title must be unique";
const TODO_TITLE_REQUIRED: &str = "The todo title is required.";
const TODO_TITLE_LENGTH: &str = "Todo title must be between 1 and 100 characters";

/// Trim and check a list title, including uniqueness against every list in
/// `session` (exact, case-sensitive match).
pub fn list_title(raw: &str, session: &Session) -> Result<String, AppError> {
    let title = raw.trim();
    let mut errors = length_errors(title, LIST_TITLE_REQUIRED, LIST_TITLE_LENGTH);
    if session.has_list_titled(title) {
        errors.push(LIST_TITLE_UNIQUE.to_string());
    }
    finish(title, errors)
}

/// Trim and check a todo title.
pub fn todo_title(raw: &str) -> Result<String, AppError> {
    let title = raw.trim();
    let errors = length_errors(title, TODO_TITLE_REQUIRED, TODO_TITLE_LENGTH);
    finish(title, errors)
}

fn length_errors(title: &str, required: &str, length: &str) -> Vec<String> {
    let len = title.chars().count();
    let mut errors = Vec::new();
    if len == 0 {
        errors.push(required.to_string());
    }
    if len > MAX_TITLE_CHARS {
        errors.push(length.to_string());
    }
    errors
}

fn finish(title: &str, errors: Vec<String>) -> Result<String, AppError> {
    if errors.is_empty() {
        Ok(title.to_string())
    } else {
        Err(AppError::Validation(errors))
    }
}
