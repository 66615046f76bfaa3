//! Table aggregate and record engine
//!
//! A [`DbfTable`] owns a parsed header, the ordered field schema, and the
//! table's raw byte storage: an exclusive file handle in streaming mode or
//! a fully-loaded buffer in bulk mode, never both. All record operations
//! are byte-offset arithmetic over that storage:
//!
//! - record `i` lives at `header_length + i * record_length`
//! - byte 0 of a record is the deletion flag (`0x20` active, `0x2A`
//!   soft-deleted)
//! - field `f` of a record lives at its descriptor's cumulative offset
//!
//! Mutations stage the full record in memory and issue a single positioned
//! write, then stamp the header's record count and last-update date.

mod engine;
mod schema;

pub(crate) use engine::{decode_record, validate_record_length};
pub use engine::{DbfRecord, DbfTable, DeletedFilter};
pub use schema::TableSchema;
