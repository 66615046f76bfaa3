//! Observability subsystem for dbfkit
//!
//! Codec decisions worth surfacing (type normalization, lock outcomes,
//! size mismatches) are emitted as structured JSON lines.
//!
//! # Principles
//!
//! 1. Observability is read-only, no side effects on the codec
//! 2. One log line = one event
//! 3. Synchronous, no buffering, no background threads
//! 4. Deterministic key ordering
//!
//! # Usage
//!
//! ```ignore
//! use dbfkit::observability::Logger;
//!
//! Logger::info("DBF_RECORD_APPENDED", &[("path", "kunden.dbf"), ("record_count", "42")]);
//! ```

mod logger;

pub use logger::{Logger, Severity};
