//! Integrity and diagnostics
//!
//! Structural comparison of two table files and a gap scan over a numeric
//! key column. Both are read-only and report through `Serialize`-able
//! structs so callers can log or ship them as JSON.

use std::collections::BTreeSet;
use std::path::Path;

use serde::Serialize;

use crate::codec::{parse_descriptors, ByteSource, FieldDescriptor, FileSource, Header};
use crate::errors::{DbfError, DbfResult};
use crate::observability::Logger;
use crate::table::DbfTable;

/// Structural summary of one table file: everything but record content.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableSummary {
    pub path: String,
    pub header: Header,
    pub fields: Vec<FieldDescriptor>,
    /// The last two bytes of the file (EOF marker area); shorter files
    /// carry what they have
    pub trailer: Vec<u8>,
}

/// Comparison report for two table files. Record content is not compared.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileComparison {
    pub left: TableSummary,
    pub right: TableSummary,
    pub headers_match: bool,
    pub fields_match: bool,
    pub trailers_match: bool,
}

impl FileComparison {
    /// True when every structural aspect matches.
    pub fn structurally_equal(&self) -> bool {
        self.headers_match && self.fields_match && self.trailers_match
    }
}

fn summarize(path: &Path) -> DbfResult<TableSummary> {
    let mut source = FileSource::open_read_only(path)?;
    let header = Header::read_from(&mut source)?;
    let fields = parse_descriptors(&mut source, &header)?;

    let len = source.len();
    let tail_len = len.min(2);
    let mut trailer = vec![0u8; tail_len as usize];
    source.read_exact_at(len - tail_len, &mut trailer)?;

    Ok(TableSummary {
        path: path.display().to_string(),
        header,
        fields,
        trailer,
    })
}

/// Compares the structure of two table files: headers, field descriptor
/// lists, and the trailing two bytes.
pub fn compare_files(left: &Path, right: &Path) -> DbfResult<FileComparison> {
    let left = summarize(left)?;
    let right = summarize(right)?;

    let comparison = FileComparison {
        headers_match: left.header == right.header,
        fields_match: left.fields == right.fields,
        trailers_match: left.trailer == right.trailer,
        left,
        right,
    };

    if !comparison.structurally_equal() {
        Logger::warn(
            "DBF_COMPARE_MISMATCH",
            &[
                ("left", &comparison.left.path),
                ("right", &comparison.right.path),
                ("headers_match", &comparison.headers_match.to_string()),
                ("fields_match", &comparison.fields_match.to_string()),
                ("trailers_match", &comparison.trailers_match.to_string()),
            ],
        );
    }
    Ok(comparison)
}

/// Result of a gap scan over a numeric key column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingNumberReport {
    /// Values absent from the scanned range, ascending
    pub missing: Vec<i64>,
    /// The scanned `(start, end)` range; `None` when no values were
    /// observed and no explicit bounds were given
    pub range: Option<(i64, i64)>,
}

/// Scans all non-deleted records and reports the integers missing from the
/// given field's value range.
///
/// Numeric fields contribute their integer value; character fields
/// contribute when their trimmed content parses as a number. Blank slots
/// never contribute (a blank numeric slot is an absent value, not a zero).
/// `start`/`end` default to the observed minimum and maximum.
pub fn find_missing_numbers(
    path: &Path,
    field_name: &str,
    start: Option<i64>,
    end: Option<i64>,
) -> DbfResult<MissingNumberReport> {
    let mut table = DbfTable::open_bulk(path)?;
    let field = table
        .schema()
        .field(field_name)
        .cloned()
        .ok_or_else(|| DbfError::FieldNotFound(field_name.to_uppercase()))?;

    let mut observed = BTreeSet::new();
    for index in 0..table.record_count() {
        let raw = match table.read_raw_record_at(index)? {
            Some(raw) => raw,
            None => continue, // soft-deleted
        };
        let slot = &raw[field.offset as usize..field.offset as usize + field.length as usize];
        let text = String::from_utf8_lossy(slot);
        let trimmed = text.trim_matches(|c: char| c.is_ascii_whitespace() || c == '\0');
        if trimmed.is_empty() {
            continue;
        }
        if let Ok(n) = trimmed.parse::<i64>() {
            observed.insert(n);
        } else if let Ok(f) = trimmed.parse::<f64>() {
            observed.insert(f as i64);
        }
    }

    let start = start.or_else(|| observed.iter().next().copied());
    let end = end.or_else(|| observed.iter().next_back().copied());
    let (start, end) = match (start, end) {
        (Some(s), Some(e)) => (s, e),
        _ => {
            return Ok(MissingNumberReport {
                missing: Vec::new(),
                range: None,
            })
        }
    };

    let missing: Vec<i64> = (start..=end).filter(|n| !observed.contains(n)).collect();
    Logger::info(
        "DBF_GAP_SCAN",
        &[
            ("path", &path.display().to_string()),
            ("field", &field.name),
            ("observed", &observed.len().to_string()),
            ("missing", &missing.len().to_string()),
        ],
    );
    Ok(MissingNumberReport {
        missing,
        range: Some((start, end)),
    })
}
