//! dbfkit - a DBF (dBASE III) table file codec and mutation engine
//!
//! Reads and writes the classic xBase on-disk layout: a 32-byte header,
//! 32-byte field descriptors terminated by `0x0D`, fixed-width records
//! prefixed with a one-byte deletion flag, and a trailing `0x1A` EOF
//! marker. On top of the codec sit a record engine with soft deletes, a
//! forward-only cursor, advisory file locks, and structural diagnostics.

pub mod builder;
pub mod codec;
pub mod cursor;
pub mod errors;
pub mod integrity;
pub mod lock;
pub mod observability;
pub mod table;

pub use errors::{DbfError, DbfResult};
