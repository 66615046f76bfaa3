//! Table creation and finalization
//!
//! Creating a table writes the complete empty file in one shot: header,
//! field descriptors, `0x0D` terminator, and the `0x1A 0x00` trailer.
//! [`finalize`] repairs a missing trailer on an existing file;
//! [`check_file_size_consistency`] verifies the size arithmetic without
//! touching the file.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use chrono::Local;
use serde::Serialize;

use crate::codec::{
    ByteSource, FieldDescriptor, FieldType, FileSource, Header, EOF_MARKER,
    FIELD_DESCRIPTOR_SIZE, FIELD_TERMINATOR, HEADER_SIZE,
};
use crate::errors::{DbfError, DbfResult};
use crate::observability::Logger;

/// Declarative description of one column for table creation.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub name: String,
    pub field_type: FieldType,
    pub length: u8,
    pub decimals: u8,
}

impl FieldSpec {
    pub fn new(name: &str, field_type: FieldType, length: u8, decimals: u8) -> Self {
        Self {
            name: name.to_uppercase(),
            field_type,
            length,
            decimals,
        }
    }
}

/// Creates a new empty table at `path`, truncating any existing file.
///
/// Header invariants written: `header_length = 32 + 32 * fields + 1`,
/// `record_length = 1 + sum(field lengths)`, record count zero, last-update
/// stamped with today's date.
pub fn create_table(path: &Path, fields: &[FieldSpec]) -> DbfResult<()> {
    if fields.is_empty() {
        return Err(DbfError::Format("a table needs at least one field".into()));
    }

    let record_length: u16 = 1 + fields.iter().map(|f| f.length as u16).sum::<u16>();
    let header_length = (HEADER_SIZE + fields.len() * FIELD_DESCRIPTOR_SIZE + 1) as u16;

    let mut header = Header {
        file_type: 0x03,
        year: 0,
        month: 0,
        day: 0,
        record_count: 0,
        header_length,
        record_length,
    };
    header.set_last_update(Local::now().date_naive());

    let mut image = Vec::with_capacity(header_length as usize + 2);
    image.extend_from_slice(&header.serialize());
    let mut offset: u16 = 1;
    for spec in fields {
        let descriptor = FieldDescriptor {
            name: spec.name.clone(),
            field_type: spec.field_type,
            length: spec.length,
            decimals: spec.decimals,
            offset,
        };
        image.extend_from_slice(&descriptor.serialize());
        offset = offset.saturating_add(spec.length as u16);
    }
    image.push(FIELD_TERMINATOR);
    image.push(EOF_MARKER);
    image.push(0x00);

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;
    file.write_all(&image)?;
    file.sync_all()?;

    Logger::info(
        "DBF_TABLE_CREATED",
        &[
            ("path", &path.display().to_string()),
            ("fields", &fields.len().to_string()),
            ("record_length", &record_length.to_string()),
        ],
    );
    Ok(())
}

/// Ensures a table ends with the `0x1A 0x00` trailer.
///
/// Appends the pair only when the last two bytes are not already exactly
/// that pair, so repeated runs leave the file unchanged. Returns whether
/// the trailer was appended.
pub fn finalize(path: &Path) -> DbfResult<bool> {
    let mut source = FileSource::open(path)?;
    let len = source.len();

    if len >= 2 {
        let mut tail = [0u8; 2];
        source.read_exact_at(len - 2, &mut tail)?;
        if tail == [EOF_MARKER, 0x00] {
            Logger::info(
                "DBF_TABLE_FINALIZED",
                &[("path", &path.display().to_string()), ("appended", "false")],
            );
            return Ok(false);
        }
    }

    source.write_all_at(len, &[EOF_MARKER, 0x00])?;
    source.sync_all()?;
    Logger::info(
        "DBF_TABLE_FINALIZED",
        &[("path", &path.display().to_string()), ("appended", "true")],
    );
    Ok(true)
}

/// Outcome of a file size consistency check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SizeCheck {
    /// Size the header arithmetic predicts, trailing EOF marker included
    pub expected: u64,
    /// Size the filesystem reports
    pub actual: u64,
    pub consistent: bool,
}

/// Checks that a table's size matches its header arithmetic.
///
/// Expected size is `header_length + record_length * record_count + 1` for
/// the EOF marker; one extra NUL byte after the marker is also accepted
/// since the creation path writes one.
pub fn check_file_size_consistency(path: &Path) -> DbfResult<SizeCheck> {
    let mut source = FileSource::open_read_only(path)?;
    let header = Header::read_from(&mut source)?;

    let expected = header.header_length as u64
        + header.record_length as u64 * header.record_count as u64
        + 1;
    let actual = source.len();
    let consistent = actual == expected || actual == expected + 1;

    if !consistent {
        Logger::warn(
            "DBF_FILE_SIZE_MISMATCH",
            &[
                ("path", &path.display().to_string()),
                ("expected", &expected.to_string()),
                ("actual", &actual.to_string()),
            ],
        );
    }

    Ok(SizeCheck {
        expected,
        actual,
        consistent,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::DbfTable;
    use std::collections::HashMap;
    use std::fs;
    use tempfile::TempDir;

    fn specs() -> Vec<FieldSpec> {
        vec![
            FieldSpec::new("NAME", FieldType::Character, 10, 0),
            FieldSpec::new("AGE", FieldType::Numeric, 3, 0),
        ]
    }

    #[test]
    fn test_create_writes_header_invariants() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("t.dbf");
        create_table(&path, &specs()).unwrap();

        let table = DbfTable::open(&path).unwrap();
        assert_eq!(table.header().file_type, 0x03);
        assert_eq!(table.header().record_count, 0);
        assert_eq!(table.header().header_length, 32 + 32 * 2 + 1);
        assert_eq!(table.header().record_length, 1 + 10 + 3);
        assert_eq!(table.field_count(), 2);
        assert_eq!(table.schema().field("AGE").unwrap().offset, 11);
    }

    #[test]
    fn test_create_writes_terminator_and_trailer() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("t.dbf");
        create_table(&path, &specs()).unwrap();

        let bytes = fs::read(&path).unwrap();
        assert_eq!(bytes.len(), 97 + 2);
        assert_eq!(bytes[96], 0x0D);
        assert_eq!(bytes[97], 0x1A);
        assert_eq!(bytes[98], 0x00);
    }

    #[test]
    fn test_create_rejects_empty_schema() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("t.dbf");
        assert!(matches!(
            create_table(&path, &[]),
            Err(DbfError::Format(_))
        ));
    }

    #[test]
    fn test_field_spec_uppercases_name() {
        let spec = FieldSpec::new("name", FieldType::Character, 10, 0);
        assert_eq!(spec.name, "NAME");
    }

    #[test]
    fn test_size_consistent_after_create_and_appends() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("t.dbf");
        create_table(&path, &specs()).unwrap();
        assert!(check_file_size_consistency(&path).unwrap().consistent);

        let mut table = DbfTable::open(&path).unwrap();
        for _ in 0..3 {
            table.append_record(&HashMap::new()).unwrap();
        }
        drop(table);
        assert!(check_file_size_consistency(&path).unwrap().consistent);
    }

    #[test]
    fn test_size_mismatch_detected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("t.dbf");
        create_table(&path, &specs()).unwrap();

        let mut bytes = fs::read(&path).unwrap();
        bytes.extend_from_slice(&[0u8; 40]); // stray tail
        fs::write(&path, &bytes).unwrap();

        let check = check_file_size_consistency(&path).unwrap();
        assert!(!check.consistent);
        assert_eq!(check.actual, check.expected + 41);
    }

    #[test]
    fn test_finalize_restores_missing_trailer() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("t.dbf");
        create_table(&path, &specs()).unwrap();

        // Strip the trailer
        let bytes = fs::read(&path).unwrap();
        fs::write(&path, &bytes[..bytes.len() - 2]).unwrap();

        assert!(finalize(&path).unwrap());
        let restored = fs::read(&path).unwrap();
        assert_eq!(&restored[restored.len() - 2..], &[0x1A, 0x00]);
        assert!(check_file_size_consistency(&path).unwrap().consistent);
    }

    #[test]
    fn test_finalize_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("t.dbf");
        create_table(&path, &specs()).unwrap();
        let mut table = DbfTable::open(&path).unwrap();
        table.append_record(&HashMap::new()).unwrap();
        drop(table);

        // Appends already maintain the trailer, so nothing to add
        assert!(!finalize(&path).unwrap());
        let first = fs::read(&path).unwrap();
        assert!(!finalize(&path).unwrap());
        let second = fs::read(&path).unwrap();
        assert_eq!(first, second);
    }
}
