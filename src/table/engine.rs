//! Record engine: byte-offset record operations over a table's storage.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use chrono::Local;
use serde::Serialize;

use crate::codec::{
    decode_value, encode_value, parse_descriptors, ByteSource, FieldValue, FileSource, Header,
    MemorySource, EOF_MARKER, FLAG_ACTIVE, FLAG_DELETED, LAST_UPDATE_OFFSET, RECORD_COUNT_OFFSET,
};
use crate::errors::{DbfError, DbfResult};
use crate::observability::Logger;
use crate::table::TableSchema;

/// Visibility of soft-deleted records on the read path.
///
/// Per-table configuration, never ambient state. `Exclude` matches the
/// xBase `SET DELETED ON` default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeletedFilter {
    /// Soft-deleted records read as `None` (default)
    #[default]
    Exclude,
    /// Soft-deleted records are returned, tagged with the `deleted` marker
    Include,
}

/// A decoded record: field values keyed by uppercased field name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DbfRecord {
    /// True when the record's deletion flag is set and the filter
    /// surfaces deleted records
    pub deleted: bool,
    /// Decoded field values in field-name order
    pub values: BTreeMap<String, FieldValue>,
}

impl DbfRecord {
    /// Looks up a value by field name, case-insensitively.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(&name.to_uppercase())
    }
}

/// Decodes a raw record buffer against a schema.
///
/// Returns `None` when the record is soft-deleted and the filter excludes
/// it. Shared between the table engine and the cursor.
pub(crate) fn decode_record(
    buf: &[u8],
    schema: &TableSchema,
    filter: DeletedFilter,
) -> Option<DbfRecord> {
    let deleted = buf[0] == FLAG_DELETED;
    if deleted && filter == DeletedFilter::Exclude {
        return None;
    }

    let mut values = BTreeMap::new();
    for field in schema.fields() {
        let start = field.offset as usize;
        let end = start + field.length as usize;
        values.insert(
            field.name.to_uppercase(),
            decode_value(&buf[start..end], field.field_type),
        );
    }

    Some(DbfRecord { deleted, values })
}

/// Rejects headers whose record length cannot hold the deletion flag plus
/// every field the descriptors declare. Reading records through such a
/// header would index past the record buffer.
pub(crate) fn validate_record_length(header: &Header, schema: &TableSchema) -> DbfResult<()> {
    if header.record_length < schema.record_length() {
        return Err(DbfError::Format(format!(
            "header record length {} cannot hold the {} bytes the field descriptors require",
            header.record_length,
            schema.record_length()
        )));
    }
    Ok(())
}

/// Raw byte storage behind a table: exclusive file handle or loaded buffer.
enum Storage {
    File(FileSource),
    Memory(MemorySource),
}

/// An open DBF table.
///
/// Header and schema are parsed once at open and stay immutable, except for
/// the header's record count and last-update date which every mutating
/// operation rewrites in place.
pub struct DbfTable {
    path: PathBuf,
    header: Header,
    schema: TableSchema,
    storage: Storage,
    deleted_filter: DeletedFilter,
}

impl DbfTable {
    /// Opens a table in streaming mode: an exclusively owned read/write
    /// file handle. This is the mode every mutation requires.
    pub fn open(path: &Path) -> DbfResult<Self> {
        let mut source = FileSource::open(path)?;
        let header = Header::read_from(&mut source)?;
        let fields = parse_descriptors(&mut source, &header)?;
        let schema = TableSchema::new(fields);
        validate_record_length(&header, &schema)?;
        Logger::info(
            "DBF_TABLE_OPENED",
            &[
                ("mode", "streaming"),
                ("path", &path.display().to_string()),
                ("record_count", &header.record_count.to_string()),
            ],
        );
        Ok(Self {
            path: path.to_path_buf(),
            header,
            schema,
            storage: Storage::File(source),
            deleted_filter: DeletedFilter::default(),
        })
    }

    /// Opens a table in bulk mode: the whole file loaded into memory.
    /// Read-only; mutations fail with [`DbfError::ReadOnly`].
    pub fn open_bulk(path: &Path) -> DbfResult<Self> {
        let mut source = MemorySource::load(path)?;
        let header = Header::read_from(&mut source)?;
        let fields = parse_descriptors(&mut source, &header)?;
        let schema = TableSchema::new(fields);
        validate_record_length(&header, &schema)?;
        Logger::info(
            "DBF_TABLE_OPENED",
            &[
                ("mode", "bulk"),
                ("path", &path.display().to_string()),
                ("record_count", &header.record_count.to_string()),
            ],
        );
        Ok(Self {
            path: path.to_path_buf(),
            header,
            schema,
            storage: Storage::Memory(source),
            deleted_filter: DeletedFilter::default(),
        })
    }

    /// Path this table was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The parsed header.
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// The parsed field schema.
    pub fn schema(&self) -> &TableSchema {
        &self.schema
    }

    /// Records the header claims the file holds.
    pub fn record_count(&self) -> u32 {
        self.header.record_count
    }

    /// Number of fields.
    pub fn field_count(&self) -> usize {
        self.schema.field_count()
    }

    /// Last update date from the header, rendered `YYYY-MM-DD`.
    pub fn last_update(&self) -> String {
        self.header.last_update_string()
    }

    /// Current deleted-record visibility.
    pub fn deleted_filter(&self) -> DeletedFilter {
        self.deleted_filter
    }

    /// Changes deleted-record visibility for subsequent reads.
    pub fn set_deleted_filter(&mut self, filter: DeletedFilter) {
        self.deleted_filter = filter;
    }

    fn check_index(&self, index: u32) -> DbfResult<()> {
        if index >= self.header.record_count {
            return Err(DbfError::IndexOutOfRange {
                index,
                count: self.header.record_count,
            });
        }
        Ok(())
    }

    fn read_raw(&mut self, offset: u64, buf: &mut [u8]) -> DbfResult<()> {
        match &mut self.storage {
            Storage::File(f) => f.read_exact_at(offset, buf)?,
            Storage::Memory(m) => m.read_exact_at(offset, buf)?,
        }
        Ok(())
    }

    fn file_mut(&mut self) -> DbfResult<&mut FileSource> {
        match &mut self.storage {
            Storage::File(f) => Ok(f),
            Storage::Memory(_) => Err(DbfError::ReadOnly),
        }
    }

    /// Reads the raw bytes of the record at `index`.
    ///
    /// `Ok(None)` when the record is soft-deleted and the filter excludes
    /// it; [`DbfError::IndexOutOfRange`] outside `[0, record_count)`.
    pub fn read_raw_record_at(&mut self, index: u32) -> DbfResult<Option<Vec<u8>>> {
        self.check_index(index)?;
        let offset = self.header.record_offset(index);
        let mut buf = vec![0u8; self.header.record_length as usize];
        self.read_raw(offset, &mut buf)?;
        if buf[0] == FLAG_DELETED && self.deleted_filter == DeletedFilter::Exclude {
            return Ok(None);
        }
        Ok(Some(buf))
    }

    /// Reads and decodes the record at `index`.
    pub fn read_record_at(&mut self, index: u32) -> DbfResult<Option<DbfRecord>> {
        let raw = match self.read_raw_record_at(index)? {
            Some(raw) => raw,
            None => return Ok(None),
        };
        Ok(decode_record(&raw, &self.schema, self.deleted_filter))
    }

    /// Encodes caller values into a full record buffer. Keys are uppercased
    /// before lookup; fields without a value encode the empty string per
    /// their type's padding rule. The deletion flag is pushed as one
    /// explicit `0x20` byte, never absorbed into field padding.
    fn encode_record(&self, values: &HashMap<String, String>) -> Vec<u8> {
        let normalized: HashMap<String, &str> = values
            .iter()
            .map(|(k, v)| (k.to_uppercase(), v.as_str()))
            .collect();

        let mut buf = Vec::with_capacity(self.header.record_length as usize);
        buf.push(FLAG_ACTIVE);
        for field in self.schema.fields() {
            let value = normalized
                .get(&field.name.to_uppercase())
                .copied()
                .unwrap_or("");
            buf.extend_from_slice(&encode_value(value, field.length, field.field_type));
        }
        buf
    }

    /// Appends a record built from the given field values.
    ///
    /// The record bytes and the rewritten `0x1A 0x00` trailer are synced
    /// before the header's count and date are updated, so a crash
    /// mid-append leaves an uncounted orphan record rather than a counted
    /// hole.
    pub fn append_record(&mut self, values: &HashMap<String, String>) -> DbfResult<()> {
        let record = self.encode_record(values);
        let offset = self.header.record_offset(self.header.record_count);
        let record_length = self.header.record_length as u64;

        let file = self.file_mut()?;
        file.write_all_at(offset, &record)?;
        file.write_all_at(offset + record_length, &[EOF_MARKER, 0x00])?;
        file.sync_all()?;

        self.header.record_count += 1;
        self.stamp_count_and_date()?;

        Logger::info(
            "DBF_RECORD_APPENDED",
            &[
                ("path", &self.path.display().to_string()),
                ("record_count", &self.header.record_count.to_string()),
            ],
        );
        Ok(())
    }

    /// Appends a blank record with type-specific defaults: spaces for
    /// character, memo and date fields, all `'0'` for numerics, `'F'` for
    /// logicals. These are exactly the paddings the empty string encodes
    /// to, so the append path is shared.
    pub fn append_blank(&mut self) -> DbfResult<()> {
        self.append_record(&HashMap::new())
    }

    /// Rewrites the record at `index` with the given values.
    ///
    /// `Ok(false)` without touching the file when the record is
    /// soft-deleted. Fields absent from `values` keep their existing
    /// encoded bytes verbatim; the full record is staged and written in a
    /// single positioned write.
    pub fn update_record(
        &mut self,
        index: u32,
        values: &HashMap<String, String>,
    ) -> DbfResult<bool> {
        self.check_index(index)?;
        let offset = self.header.record_offset(index);
        let mut existing = vec![0u8; self.header.record_length as usize];
        self.read_raw(offset, &mut existing)?;
        if existing[0] == FLAG_DELETED {
            return Ok(false);
        }

        let normalized: HashMap<String, &str> = values
            .iter()
            .map(|(k, v)| (k.to_uppercase(), v.as_str()))
            .collect();

        let mut staged = Vec::with_capacity(existing.len());
        // Carry the stored flag byte through unchanged, even nonstandard ones
        staged.push(existing[0]);
        for field in self.schema.fields() {
            let start = field.offset as usize;
            let end = start + field.length as usize;
            match normalized.get(&field.name.to_uppercase()) {
                Some(value) => {
                    staged.extend_from_slice(&encode_value(value, field.length, field.field_type));
                }
                None => staged.extend_from_slice(&existing[start..end]),
            }
        }

        let file = self.file_mut()?;
        file.write_all_at(offset, &staged)?;
        self.stamp_date()?;
        Ok(true)
    }

    /// Replaces a single field's byte range within the record at `index`.
    ///
    /// [`DbfError::FieldNotFound`] when the uppercased name is absent from
    /// the schema; `Ok(false)` when the record is soft-deleted.
    pub fn update_field(&mut self, index: u32, field_name: &str, value: &str) -> DbfResult<bool> {
        self.check_index(index)?;
        let field = self
            .schema
            .field(field_name)
            .cloned()
            .ok_or_else(|| DbfError::FieldNotFound(field_name.to_uppercase()))?;

        let offset = self.header.record_offset(index);
        let mut record = vec![0u8; self.header.record_length as usize];
        self.read_raw(offset, &mut record)?;
        if record[0] == FLAG_DELETED {
            return Ok(false);
        }

        let start = field.offset as usize;
        record[start..start + field.length as usize]
            .copy_from_slice(&encode_value(value, field.length, field.field_type));

        let file = self.file_mut()?;
        file.write_all_at(offset, &record)?;
        self.stamp_date()?;
        Ok(true)
    }

    /// Soft-deletes the record at `index` by writing `0x2A` over its
    /// deletion flag. `Ok(false)` when already deleted.
    pub fn delete_record(&mut self, index: u32) -> DbfResult<bool> {
        self.check_index(index)?;
        let offset = self.header.record_offset(index);
        let mut flag = [0u8; 1];
        self.read_raw(offset, &mut flag)?;
        if flag[0] == FLAG_DELETED {
            return Ok(false);
        }

        let file = self.file_mut()?;
        file.write_all_at(offset, &[FLAG_DELETED])?;
        self.stamp_date()?;
        Ok(true)
    }

    /// Stamps the header's last-update date with the current local date
    /// and syncs.
    fn stamp_date(&mut self) -> DbfResult<()> {
        self.header.set_last_update(Local::now().date_naive());
        let (year, month, day) = (self.header.year, self.header.month, self.header.day);
        let file = self.file_mut()?;
        file.write_all_at(LAST_UPDATE_OFFSET, &[year, month, day])?;
        file.sync_all()?;
        Ok(())
    }

    /// Writes the in-memory record count back to the header, then stamps
    /// the date.
    fn stamp_count_and_date(&mut self) -> DbfResult<()> {
        let count = self.header.record_count;
        let file = self.file_mut()?;
        file.write_all_at(RECORD_COUNT_OFFSET, &count.to_le_bytes())?;
        self.stamp_date()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{create_table, FieldSpec};
    use crate::codec::FieldType;
    use std::fs;
    use tempfile::TempDir;

    fn sample_specs() -> Vec<FieldSpec> {
        vec![
            FieldSpec::new("NAME", FieldType::Character, 10, 0),
            FieldSpec::new("AGE", FieldType::Numeric, 3, 0),
            FieldSpec::new("ACTIVE", FieldType::Logical, 1, 0),
        ]
    }

    fn values(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn sample_table(dir: &TempDir) -> DbfTable {
        let path = dir.path().join("people.dbf");
        create_table(&path, &sample_specs()).unwrap();
        DbfTable::open(&path).unwrap()
    }

    #[test]
    fn test_append_and_read_back() {
        let dir = TempDir::new().unwrap();
        let mut table = sample_table(&dir);

        table
            .append_record(&values(&[("NAME", "Bob"), ("AGE", "7"), ("ACTIVE", "T")]))
            .unwrap();

        assert_eq!(table.record_count(), 1);
        let record = table.read_record_at(0).unwrap().unwrap();
        assert_eq!(
            record.get("NAME"),
            Some(&FieldValue::Character("Bob".to_string()))
        );
        assert_eq!(record.get("AGE"), Some(&FieldValue::Numeric(7.0)));
        assert_eq!(record.get("ACTIVE"), Some(&FieldValue::Logical(true)));
        assert!(!record.deleted);
    }

    #[test]
    fn test_append_normalizes_key_case_and_defaults_missing_fields() {
        let dir = TempDir::new().unwrap();
        let mut table = sample_table(&dir);

        table.append_record(&values(&[("name", "Ada")])).unwrap();

        let record = table.read_record_at(0).unwrap().unwrap();
        assert_eq!(
            record.get("NAME"),
            Some(&FieldValue::Character("Ada".to_string()))
        );
        assert_eq!(record.get("AGE"), Some(&FieldValue::Numeric(0.0)));
        assert_eq!(record.get("ACTIVE"), Some(&FieldValue::Logical(false)));
    }

    #[test]
    fn test_append_writes_explicit_active_flag_byte() {
        let dir = TempDir::new().unwrap();
        let mut table = sample_table(&dir);
        table.append_record(&values(&[("NAME", "Bob")])).unwrap();

        let bytes = fs::read(table.path()).unwrap();
        let offset = table.header().record_offset(0) as usize;
        assert_eq!(bytes[offset], 0x20);
        // First field byte is data, not flag spill
        assert_eq!(bytes[offset + 1], b'B');
    }

    #[test]
    fn test_append_updates_header_count_on_disk() {
        let dir = TempDir::new().unwrap();
        let path = {
            let mut table = sample_table(&dir);
            table.append_blank().unwrap();
            table.append_blank().unwrap();
            table.path().to_path_buf()
        };

        let reopened = DbfTable::open(&path).unwrap();
        assert_eq!(reopened.record_count(), 2);
    }

    #[test]
    fn test_append_does_not_disturb_previous_records() {
        let dir = TempDir::new().unwrap();
        let mut table = sample_table(&dir);
        table.append_record(&values(&[("NAME", "first")])).unwrap();

        let before = {
            let bytes = fs::read(table.path()).unwrap();
            let start = table.header().record_offset(0) as usize;
            bytes[start..start + table.header().record_length as usize].to_vec()
        };

        table.append_record(&values(&[("NAME", "second")])).unwrap();

        let after = {
            let bytes = fs::read(table.path()).unwrap();
            let start = table.header().record_offset(0) as usize;
            bytes[start..start + table.header().record_length as usize].to_vec()
        };
        assert_eq!(before, after);
    }

    #[test]
    fn test_read_out_of_range_is_index_error() {
        let dir = TempDir::new().unwrap();
        let mut table = sample_table(&dir);
        let err = table.read_record_at(0).unwrap_err();
        assert!(matches!(err, DbfError::IndexOutOfRange { index: 0, count: 0 }));
    }

    #[test]
    fn test_deleted_filter_exclude_and_include() {
        let dir = TempDir::new().unwrap();
        let mut table = sample_table(&dir);
        table.append_record(&values(&[("NAME", "gone")])).unwrap();
        assert!(table.delete_record(0).unwrap());

        // Default filter hides the record
        assert!(table.read_record_at(0).unwrap().is_none());

        // Include surfaces it with the deleted marker
        table.set_deleted_filter(DeletedFilter::Include);
        let record = table.read_record_at(0).unwrap().unwrap();
        assert!(record.deleted);
        assert_eq!(
            record.get("NAME"),
            Some(&FieldValue::Character("gone".to_string()))
        );
    }

    #[test]
    fn test_delete_twice_is_noop() {
        let dir = TempDir::new().unwrap();
        let mut table = sample_table(&dir);
        table.append_blank().unwrap();

        assert!(table.delete_record(0).unwrap());
        assert!(!table.delete_record(0).unwrap());
    }

    #[test]
    fn test_update_record_partial_keeps_other_fields() {
        let dir = TempDir::new().unwrap();
        let mut table = sample_table(&dir);
        table
            .append_record(&values(&[("NAME", "Bob"), ("AGE", "7"), ("ACTIVE", "T")]))
            .unwrap();

        assert!(table.update_record(0, &values(&[("AGE", "8")])).unwrap());

        let record = table.read_record_at(0).unwrap().unwrap();
        assert_eq!(record.get("AGE"), Some(&FieldValue::Numeric(8.0)));
        assert_eq!(
            record.get("NAME"),
            Some(&FieldValue::Character("Bob".to_string()))
        );
        assert_eq!(record.get("ACTIVE"), Some(&FieldValue::Logical(true)));
    }

    #[test]
    fn test_update_deleted_record_is_refused_and_leaves_bytes() {
        let dir = TempDir::new().unwrap();
        let mut table = sample_table(&dir);
        table.append_record(&values(&[("NAME", "Bob")])).unwrap();
        table.delete_record(0).unwrap();

        let before = fs::read(table.path()).unwrap();
        assert!(!table.update_record(0, &values(&[("NAME", "Eve")])).unwrap());
        assert!(!table.update_field(0, "NAME", "Eve").unwrap());
        let after = fs::read(table.path()).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_update_field_replaces_only_its_byte_range() {
        let dir = TempDir::new().unwrap();
        let mut table = sample_table(&dir);
        table
            .append_record(&values(&[("NAME", "Bob"), ("AGE", "7")]))
            .unwrap();

        assert!(table.update_field(0, "age", "42").unwrap());

        let record = table.read_record_at(0).unwrap().unwrap();
        assert_eq!(record.get("AGE"), Some(&FieldValue::Numeric(42.0)));
        assert_eq!(
            record.get("NAME"),
            Some(&FieldValue::Character("Bob".to_string()))
        );
    }

    #[test]
    fn test_update_field_unknown_name_is_not_found() {
        let dir = TempDir::new().unwrap();
        let mut table = sample_table(&dir);
        table.append_blank().unwrap();

        let err = table.update_field(0, "NOPE", "x").unwrap_err();
        assert!(matches!(err, DbfError::FieldNotFound(name) if name == "NOPE"));
    }

    #[test]
    fn test_update_out_of_range_is_index_error() {
        let dir = TempDir::new().unwrap();
        let mut table = sample_table(&dir);
        let err = table.update_record(3, &HashMap::new()).unwrap_err();
        assert!(matches!(err, DbfError::IndexOutOfRange { index: 3, .. }));
    }

    #[test]
    fn test_bulk_mode_reads_but_refuses_writes() {
        let dir = TempDir::new().unwrap();
        let path = {
            let mut table = sample_table(&dir);
            table.append_record(&values(&[("NAME", "Bob")])).unwrap();
            table.path().to_path_buf()
        };

        let mut bulk = DbfTable::open_bulk(&path).unwrap();
        let record = bulk.read_record_at(0).unwrap().unwrap();
        assert_eq!(
            record.get("NAME"),
            Some(&FieldValue::Character("Bob".to_string()))
        );

        assert!(matches!(bulk.append_blank(), Err(DbfError::ReadOnly)));
        assert!(matches!(
            bulk.update_field(0, "NAME", "Eve"),
            Err(DbfError::ReadOnly)
        ));
    }

    #[test]
    fn test_mutations_stamp_last_update_date() {
        let dir = TempDir::new().unwrap();
        let mut table = sample_table(&dir);
        table.append_blank().unwrap();

        let today = Local::now().date_naive();
        assert_eq!(table.header().last_update_date(), Some(today));

        let reopened = DbfTable::open(table.path()).unwrap();
        assert_eq!(reopened.header().last_update_date(), Some(today));
    }

    #[test]
    fn test_open_rejects_undersized_record_length() {
        let dir = TempDir::new().unwrap();
        let path = {
            let mut table = sample_table(&dir);
            table.append_record(&values(&[("NAME", "Bob")])).unwrap();
            table.path().to_path_buf()
        };

        // Record length smaller than the descriptor sum, then zero
        for bad in [5u16, 0] {
            let mut bytes = fs::read(&path).unwrap();
            bytes[10..12].copy_from_slice(&bad.to_le_bytes());
            fs::write(&path, &bytes).unwrap();

            assert!(matches!(DbfTable::open(&path), Err(DbfError::Format(_))));
            assert!(matches!(
                DbfTable::open_bulk(&path),
                Err(DbfError::Format(_))
            ));
        }
    }

    #[test]
    fn test_update_preserves_nonstandard_flag_byte() {
        let dir = TempDir::new().unwrap();
        let path = {
            let mut table = sample_table(&dir);
            table.append_record(&values(&[("NAME", "Bob")])).unwrap();
            table.path().to_path_buf()
        };

        let offset = {
            let mut bytes = fs::read(&path).unwrap();
            let table = DbfTable::open_bulk(&path).unwrap();
            let offset = table.header().record_offset(0) as usize;
            bytes[offset] = b'!';
            fs::write(&path, &bytes).unwrap();
            offset
        };

        let mut table = DbfTable::open(&path).unwrap();
        assert!(table.update_record(0, &values(&[("NAME", "Eve")])).unwrap());

        let bytes = fs::read(&path).unwrap();
        assert_eq!(bytes[offset], b'!');
        let record = table.read_record_at(0).unwrap().unwrap();
        assert_eq!(
            record.get("NAME"),
            Some(&FieldValue::Character("Eve".to_string()))
        );
    }

    #[test]
    fn test_append_blank_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("defaults.dbf");
        create_table(
            &path,
            &[
                FieldSpec::new("TXT", FieldType::Character, 4, 0),
                FieldSpec::new("NUM", FieldType::Numeric, 3, 0),
                FieldSpec::new("FLAG", FieldType::Logical, 1, 0),
                FieldSpec::new("WHEN", FieldType::Date, 8, 0),
            ],
        )
        .unwrap();
        let mut table = DbfTable::open(&path).unwrap();
        table.append_blank().unwrap();

        let bytes = fs::read(&path).unwrap();
        let start = table.header().record_offset(0) as usize;
        let record = &bytes[start..start + table.header().record_length as usize];
        assert_eq!(record, b" \x20\x20\x20\x20000F        ".as_slice());
    }
}
