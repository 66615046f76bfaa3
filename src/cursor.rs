//! Forward-only record cursor
//!
//! A [`RecordCursor`] is an explicit handle over its own read-only file
//! descriptor, so any number of cursors can scan the same table at once.
//! `next()` walks records in file order; under [`DeletedFilter::Exclude`]
//! it silently advances past soft-deleted records instead of returning
//! them.

use std::path::{Path, PathBuf};

use crate::codec::{parse_descriptors, ByteSource, FileSource, Header};
use crate::errors::{DbfError, DbfResult};
use crate::observability::Logger;
use crate::table::{decode_record, validate_record_length, DbfRecord, DeletedFilter, TableSchema};

struct CursorState {
    source: FileSource,
    header: Header,
    schema: TableSchema,
    index: u32,
    filter: DeletedFilter,
}

/// A positioned scan over one table. Closed cursors reject every operation
/// with [`DbfError::CursorNotInitialized`].
pub struct RecordCursor {
    path: PathBuf,
    state: Option<CursorState>,
}

impl RecordCursor {
    /// Opens a cursor positioned before the first record.
    pub fn open(path: &Path) -> DbfResult<Self> {
        let mut source = FileSource::open_read_only(path)?;
        let header = Header::read_from(&mut source)?;
        let fields = parse_descriptors(&mut source, &header)?;
        let schema = TableSchema::new(fields);
        validate_record_length(&header, &schema)?;
        Logger::info(
            "DBF_CURSOR_OPENED",
            &[
                ("path", &path.display().to_string()),
                ("record_count", &header.record_count.to_string()),
            ],
        );
        Ok(Self {
            path: path.to_path_buf(),
            state: Some(CursorState {
                source,
                header,
                schema,
                index: 0,
                filter: DeletedFilter::default(),
            }),
        })
    }

    fn state_mut(&mut self) -> DbfResult<&mut CursorState> {
        self.state.as_mut().ok_or(DbfError::CursorNotInitialized)
    }

    fn state_ref(&self) -> DbfResult<&CursorState> {
        self.state.as_ref().ok_or(DbfError::CursorNotInitialized)
    }

    /// Returns the next visible record, or `Ok(None)` once the cursor has
    /// walked past the last record.
    pub fn next(&mut self) -> DbfResult<Option<DbfRecord>> {
        let state = self.state_mut()?;
        let record_length = state.header.record_length as usize;

        while state.index < state.header.record_count {
            let offset = state.header.record_offset(state.index);
            let mut buf = vec![0u8; record_length];
            state.source.read_exact_at(offset, &mut buf)?;
            state.index += 1;

            if let Some(record) = decode_record(&buf, &state.schema, state.filter) {
                return Ok(Some(record));
            }
            // Soft-deleted under Exclude; keep walking
        }
        Ok(None)
    }

    /// Repositions before the first record.
    pub fn seek_top(&mut self) -> DbfResult<()> {
        self.state_mut()?.index = 0;
        Ok(())
    }

    /// Repositions before the record at the given 1-based number.
    /// `Ok(false)` without moving when the number is out of range.
    pub fn seek_to_record(&mut self, number: u32) -> DbfResult<bool> {
        let state = self.state_mut()?;
        if number == 0 || number > state.header.record_count {
            return Ok(false);
        }
        state.index = number - 1;
        Ok(true)
    }

    /// Records the table held when the cursor was opened.
    pub fn record_count(&self) -> DbfResult<u32> {
        Ok(self.state_ref()?.header.record_count)
    }

    /// 0-based index of the record `next()` will read.
    pub fn position(&self) -> DbfResult<u32> {
        Ok(self.state_ref()?.index)
    }

    /// Changes deleted-record visibility for subsequent `next()` calls.
    pub fn set_deleted_filter(&mut self, filter: DeletedFilter) -> DbfResult<()> {
        self.state_mut()?.filter = filter;
        Ok(())
    }

    /// Releases the file handle. Any later call on this cursor fails.
    pub fn close(&mut self) -> DbfResult<()> {
        if self.state.take().is_none() {
            return Err(DbfError::CursorNotInitialized);
        }
        Logger::info(
            "DBF_CURSOR_CLOSED",
            &[("path", &self.path.display().to_string())],
        );
        Ok(())
    }
}
