//! Title rules shared by todos and lists.

use crate::error::{Result, TodoError};

/// Longest title accepted for a todo or a list, in characters.
pub const MAX_TITLE_CHARS: usize = 100;

/// Check a title against the 1..=`MAX_TITLE_CHARS` rule.
///
/// Length is counted in Unicode scalar values. No trimming happens here;
/// callers trim user input before it reaches the entities.
pub fn validate_title(title: &str) -> Result<()> {
    let len = title.chars().count();
    if len == 0 || len > MAX_TITLE_CHARS {
        return Err(TodoError::InvalidTitle {
            len,
            max: MAX_TITLE_CHARS,
        });
    }
    Ok(())
}
