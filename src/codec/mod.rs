//! Binary codec for the DBF on-disk format
//!
//! The file layout is: a 32-byte header, one 32-byte descriptor per field,
//! a one-byte `0x0D` descriptor terminator, a flat array of fixed-width
//! records, and a `0x1A` end-of-file marker (with an optional trailing
//! `0x00`).
//!
//! # Invariants Enforced
//!
//! - `header_length = 32 + 32 * field_count + 1`
//! - `record_length = 1 + sum(field lengths)` (the 1 is the deletion flag)
//! - A record's byte offset is `header_length + index * record_length`
//!
//! All multi-byte header fields are little-endian.

mod field;
mod header;
mod source;
mod value;

pub use field::{parse_descriptors, FieldDescriptor, FieldType};
pub use header::Header;
pub use source::{ByteSource, FileSource, MemorySource};
pub use value::{decode_value, encode_value, FieldValue};

/// Size of the file header in bytes
pub const HEADER_SIZE: usize = 32;

/// Size of one field descriptor in bytes
pub const FIELD_DESCRIPTOR_SIZE: usize = 32;

/// Maximum field name length on disk (NUL-padded)
pub const FIELD_NAME_SIZE: usize = 11;

/// Terminator byte closing the field descriptor block
pub const FIELD_TERMINATOR: u8 = 0x0D;

/// End-of-file marker byte
pub const EOF_MARKER: u8 = 0x1A;

/// Deletion flag value for an active record
pub const FLAG_ACTIVE: u8 = 0x20;

/// Deletion flag value for a soft-deleted record
pub const FLAG_DELETED: u8 = 0x2A;

/// Byte offset of the last-update date (year/month/day) within the header
pub const LAST_UPDATE_OFFSET: u64 = 1;

/// Byte offset of the record count within the header
pub const RECORD_COUNT_OFFSET: u64 = 4;
