//! Process-wide id minting for todos and lists.
//!
//! # Design
//! A single atomic counter hands out ids to both entity kinds. Persisted ids
//! stay authoritative: rehydration reports every id it sees through
//! [`observe`], which raises the counter past it so freshly minted ids never
//! collide with ids already stored in a session after a restart.
//!
//! Stored ids are capped at [`MAX_ID`], the largest integer a JSON number
//! round-trips exactly in every consumer. The counter therefore always has
//! headroom and never saturates or wraps.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::{Result, TodoError};

/// Identifier of a `Todo`, unique within its owning list.
pub type TodoId = u64;

/// Identifier of a `TodoList`, unique within its session.
pub type ListId = u64;

/// Largest id accepted from storage (2^53 - 1).
pub const MAX_ID: u64 = (1 << 53) - 1;

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Mint a fresh id, strictly greater than every id minted or observed before.
pub fn next_id() -> u64 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

/// Record that `id` is in use so later calls to [`next_id`] skip past it.
///
/// # Errors
/// Returns `TodoError::Integrity` when `id` is above [`MAX_ID`].
pub fn observe(id: u64) -> Result<()> {
    if id > MAX_ID {
        return Err(TodoError::Integrity(format!(
            "stored id {id} exceeds maximum {MAX_ID}"
        )));
    }
    NEXT_ID.fetch_max(id + 1, Ordering::Relaxed);
    Ok(())
}
