//! DBF file header codec
//!
//! Header layout (32 bytes, little-endian multi-byte fields):
//!
//! ```text
//! +--------+------+----------------------------+
//! | Offset | Size | Field                      |
//! +--------+------+----------------------------+
//! | 0      | 1    | file type                  |
//! | 1      | 1    | last update year (- 1900)  |
//! | 2      | 1    | last update month          |
//! | 3      | 1    | last update day            |
//! | 4      | 4    | record count (u32 LE)      |
//! | 8      | 2    | header length (u16 LE)     |
//! | 10     | 2    | record length (u16 LE)     |
//! | 12     | 20   | reserved                   |
//! +--------+------+----------------------------+
//! ```
//!
//! `header_length` counts every byte before the first record: the header
//! itself, all field descriptors, and the `0x0D` terminator.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use super::{ByteSource, HEADER_SIZE};
use crate::errors::{DbfError, DbfResult};

/// Parsed DBF file header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Header {
    /// File type byte (0x03 for plain dBASE III without memo)
    pub file_type: u8,
    /// Last update year as offset from 1900
    pub year: u8,
    /// Last update month (1-12)
    pub month: u8,
    /// Last update day (1-31)
    pub day: u8,
    /// Number of records the header claims the file holds
    pub record_count: u32,
    /// Bytes from file start to the first record
    pub header_length: u16,
    /// Bytes per record, deletion flag included
    pub record_length: u16,
}

impl Header {
    /// Parses a header from the first 32 bytes of a file.
    ///
    /// Fails with [`DbfError::Format`] when fewer than 32 bytes are
    /// available.
    pub fn parse(bytes: &[u8]) -> DbfResult<Self> {
        if bytes.len() < HEADER_SIZE {
            return Err(DbfError::Format(format!(
                "incomplete header: {} bytes, need {}",
                bytes.len(),
                HEADER_SIZE
            )));
        }

        Ok(Self {
            file_type: bytes[0],
            year: bytes[1],
            month: bytes[2],
            day: bytes[3],
            record_count: u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]),
            header_length: u16::from_le_bytes([bytes[8], bytes[9]]),
            record_length: u16::from_le_bytes([bytes[10], bytes[11]]),
        })
    }

    /// Reads and parses the header from the start of a byte source.
    pub fn read_from<S: ByteSource>(source: &mut S) -> DbfResult<Self> {
        let mut buf = [0u8; HEADER_SIZE];
        source.read_exact_at(0, &mut buf).map_err(|e| {
            DbfError::Format(format!("incomplete header: {}", e))
        })?;
        Self::parse(&buf)
    }

    /// Serializes the header back to its 32-byte on-disk form. Reserved
    /// bytes are written as zero.
    pub fn serialize(&self) -> [u8; HEADER_SIZE] {
        let mut buf = [0u8; HEADER_SIZE];
        buf[0] = self.file_type;
        buf[1] = self.year;
        buf[2] = self.month;
        buf[3] = self.day;
        buf[4..8].copy_from_slice(&self.record_count.to_le_bytes());
        buf[8..10].copy_from_slice(&self.header_length.to_le_bytes());
        buf[10..12].copy_from_slice(&self.record_length.to_le_bytes());
        buf
    }

    /// Number of field descriptors implied by `header_length`.
    pub fn field_count(&self) -> u16 {
        if self.header_length <= HEADER_SIZE as u16 {
            return 0;
        }
        (self.header_length - HEADER_SIZE as u16 - 1) / 32
    }

    /// Byte offset of the record at the given 0-based index.
    pub fn record_offset(&self, index: u32) -> u64 {
        self.header_length as u64 + index as u64 * self.record_length as u64
    }

    /// Last update as a calendar date, when the stored bytes form one.
    pub fn last_update_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(1900 + self.year as i32, self.month as u32, self.day as u32)
    }

    /// Last update rendered as `YYYY-MM-DD` regardless of validity.
    pub fn last_update_string(&self) -> String {
        format!(
            "{:04}-{:02}-{:02}",
            1900 + self.year as u16,
            self.month,
            self.day
        )
    }

    /// Stamps the last-update fields with the given date.
    pub fn set_last_update(&mut self, date: NaiveDate) {
        self.year = (date.year() - 1900).clamp(0, 255) as u8;
        self.month = date.month() as u8;
        self.day = date.day() as u8;
    }
}
