//! Crate-wide error taxonomy.
//!
//! Every fallible operation returns [`DbfResult`]. Defined "no effect"
//! outcomes (updating a soft-deleted record, losing a lock race) are
//! `Ok(false)`, never errors; structural read failures abort immediately
//! with [`DbfError::Format`].

use std::io;
use thiserror::Error;

/// Result type for all DBF operations
pub type DbfResult<T> = Result<T, DbfError>;

/// Errors surfaced by the codec, record engine, builder, lock, and cursor
#[derive(Debug, Error)]
pub enum DbfError {
    /// Header or field descriptor truncated or malformed
    #[error("malformed DBF structure: {0}")]
    Format(String),

    /// Record index outside `[0, record_count)`
    #[error("record index {index} out of range (record count {count})")]
    IndexOutOfRange { index: u32, count: u32 },

    /// Field name absent from the schema
    #[error("field not found: {0}")]
    FieldNotFound(String),

    /// Underlying open/read/write failure
    #[error("I/O failure: {0}")]
    Io(#[from] io::Error),

    /// Exclusive lock sentinel already present
    #[error("lock conflict: {0}")]
    LockConflict(String),

    /// Cursor used after `close()`
    #[error("cursor not initialized or already closed")]
    CursorNotInitialized,

    /// Mutation attempted on a table loaded fully into memory
    #[error("table opened in bulk mode is read-only")]
    ReadOnly,
}

impl DbfError {
    /// Short stable kind tag, used as the `error` field in log events
    pub fn kind(&self) -> &'static str {
        match self {
            DbfError::Format(_) => "FORMAT",
            DbfError::IndexOutOfRange { .. } => "INDEX",
            DbfError::FieldNotFound(_) => "NOT_FOUND",
            DbfError::Io(_) => "IO",
            DbfError::LockConflict(_) => "LOCK_CONFLICT",
            DbfError::CursorNotInitialized => "NOT_INITIALIZED",
            DbfError::ReadOnly => "READ_ONLY",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_tags_are_stable() {
        assert_eq!(DbfError::Format("x".into()).kind(), "FORMAT");
        assert_eq!(
            DbfError::IndexOutOfRange { index: 9, count: 3 }.kind(),
            "INDEX"
        );
        assert_eq!(DbfError::FieldNotFound("AGE".into()).kind(), "NOT_FOUND");
        assert_eq!(DbfError::CursorNotInitialized.kind(), "NOT_INITIALIZED");
        assert_eq!(DbfError::ReadOnly.kind(), "READ_ONLY");
    }

    #[test]
    fn test_index_error_message_carries_bounds() {
        let err = DbfError::IndexOutOfRange { index: 5, count: 2 };
        let msg = err.to_string();
        assert!(msg.contains('5'));
        assert!(msg.contains('2'));
    }

    #[test]
    fn test_io_error_converts() {
        fn fails() -> DbfResult<()> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))?;
            Ok(())
        }
        let err = fails().unwrap_err();
        assert_eq!(err.kind(), "IO");
        assert!(err.to_string().contains("denied"));
    }
}
