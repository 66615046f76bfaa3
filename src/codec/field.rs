//! Field descriptor codec
//!
//! Descriptor layout (32 bytes):
//!
//! ```text
//! name[11] (NUL-padded) | type[1] | reserved[4] | length[1] | decimals[1] | reserved[14]
//! ```
//!
//! The descriptor block starts at byte 32 and ends at `header_length`, at a
//! `0x0D`/`0x1A` terminator byte, or at an all-empty descriptor, whichever
//! comes first. Legacy files produced by other writers use all three
//! conventions.

use serde::Serialize;

use super::{ByteSource, EOF_MARKER, FIELD_DESCRIPTOR_SIZE, FIELD_NAME_SIZE, FIELD_TERMINATOR};
use crate::errors::{DbfError, DbfResult};
use crate::observability::Logger;

/// DBF column type.
///
/// `F` (float) is normalized to [`FieldType::Numeric`] at parse time; types
/// outside the classic C/N/D/L/M set are accepted and carried as
/// [`FieldType::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FieldType {
    Character,
    Numeric,
    Date,
    Logical,
    Memo,
    Other(char),
}

impl FieldType {
    /// Maps a type code to a field type. `F` maps to `Numeric`.
    pub fn from_code(code: char) -> Self {
        match code.to_ascii_uppercase() {
            'C' => FieldType::Character,
            'N' | 'F' => FieldType::Numeric,
            'D' => FieldType::Date,
            'L' => FieldType::Logical,
            'M' => FieldType::Memo,
            other => FieldType::Other(other),
        }
    }

    /// The on-disk type code.
    pub fn code(&self) -> char {
        match self {
            FieldType::Character => 'C',
            FieldType::Numeric => 'N',
            FieldType::Date => 'D',
            FieldType::Logical => 'L',
            FieldType::Memo => 'M',
            FieldType::Other(c) => *c,
        }
    }
}

/// One column of a table's schema.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldDescriptor {
    /// Column name, at most 11 bytes on disk, trimmed on read
    pub name: String,
    /// Column type
    pub field_type: FieldType,
    /// Fixed width of the column's slot in every record
    pub length: u8,
    /// Decimal places (numeric columns)
    pub decimals: u8,
    /// Byte offset of this column within a record, 1-based because byte 0
    /// is the deletion flag
    pub offset: u16,
}

impl FieldDescriptor {
    /// Parses one 32-byte descriptor chunk. `offset` is the cumulative
    /// record offset of this field.
    fn parse(chunk: &[u8], offset: u16) -> Self {
        let name_bytes = &chunk[..FIELD_NAME_SIZE];
        let name: String = String::from_utf8_lossy(name_bytes)
            .trim_matches('\0')
            .trim()
            .to_string();
        let code = chunk[11] as char;
        let length = chunk[16];
        let decimals = chunk[17];

        if code == 'F' {
            Logger::info(
                "DBF_FIELD_TYPE_NORMALIZED",
                &[("field", &name), ("from", "F"), ("to", "N")],
            );
        } else if !matches!(code, 'C' | 'N' | 'D' | 'L' | 'M') {
            Logger::warn(
                "DBF_FIELD_TYPE_UNEXPECTED",
                &[("field", &name), ("type", &code.to_string())],
            );
        }

        Self {
            name,
            field_type: FieldType::from_code(code),
            length,
            decimals,
            offset,
        }
    }

    /// True for the all-empty descriptor some writers use instead of a
    /// terminator byte.
    fn is_empty(&self) -> bool {
        self.name.is_empty()
            && matches!(self.field_type, FieldType::Other('\0') | FieldType::Other(' '))
            && self.length == 0
    }

    /// Serializes the descriptor to its 32-byte on-disk form. Names longer
    /// than 11 bytes are truncated.
    pub fn serialize(&self) -> [u8; FIELD_DESCRIPTOR_SIZE] {
        let mut buf = [0u8; FIELD_DESCRIPTOR_SIZE];
        let name_bytes = self.name.as_bytes();
        let n = name_bytes.len().min(FIELD_NAME_SIZE);
        buf[..n].copy_from_slice(&name_bytes[..n]);
        buf[11] = self.field_type.code() as u8;
        buf[16] = self.length;
        buf[17] = self.decimals;
        buf
    }
}

/// Reads the field descriptor block starting at byte 32.
///
/// Stops without error at `header_length`, at a terminator byte, or at an
/// all-empty descriptor. A chunk that cannot be read in full is a
/// [`DbfError::Format`] failure. Computes each field's cumulative record
/// offset, starting at 1 after the deletion flag.
pub fn parse_descriptors<S: ByteSource>(
    source: &mut S,
    header: &super::Header,
) -> DbfResult<Vec<FieldDescriptor>> {
    let mut fields = Vec::new();
    let mut pos = super::HEADER_SIZE as u64; // descriptors start after the header
    let mut record_offset: u16 = 1;

    while pos < header.header_length as u64 {
        let mut first = [0u8; 1];
        source.read_exact_at(pos, &mut first).map_err(|e| {
            DbfError::Format(format!("field descriptor block truncated at {}: {}", pos, e))
        })?;
        if first[0] == FIELD_TERMINATOR || first[0] == EOF_MARKER {
            break;
        }

        let mut chunk = [0u8; FIELD_DESCRIPTOR_SIZE];
        source.read_exact_at(pos, &mut chunk).map_err(|e| {
            DbfError::Format(format!("short field descriptor at {}: {}", pos, e))
        })?;

        let field = FieldDescriptor::parse(&chunk, record_offset);
        if field.is_empty() {
            break;
        }
        record_offset = record_offset.saturating_add(field.length as u16);
        fields.push(field);
        pos += FIELD_DESCRIPTOR_SIZE as u64;
    }

    Ok(fields)
}
