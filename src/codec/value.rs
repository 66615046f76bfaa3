//! Per-field value codec
//!
//! Encoding pads a string value into a field's fixed-width slot; decoding
//! trims the slot and converts to a typed value. The two directions are
//! deliberately independent: fixed-width DBF slots cannot represent
//! redundant whitespace, so `decode(encode(v))` normalizes it away.
//!
//! Padding rules per type:
//!
//! | Type   | Rule                                                    |
//! |--------|---------------------------------------------------------|
//! | C      | truncate, left-justify, pad right with spaces           |
//! | N      | truncate, right-justify, pad left with `'0'`            |
//! | L      | `'T'` if non-empty and not `"F"`/`"f"`, else `'F'`      |
//! | D      | strip `-`; 8 digits pass through, anything else blanks  |
//! | M/other| same as C                                               |

use chrono::NaiveDate;
use serde::Serialize;

use super::FieldType;

/// A decoded field value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum FieldValue {
    /// Trimmed character data (also carries memo placeholders and unknown
    /// types)
    Character(String),
    /// Numeric field; blank or unparsable slots decode to `0.0`
    Numeric(f64),
    /// Logical field, true iff the stored byte is `T`/`t`
    Logical(bool),
    /// Date rendered as `YYYY-MM-DD`
    Date(String),
    /// Empty or malformed date slot
    Null,
}

impl FieldValue {
    /// The value as a number, when it is one.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Numeric(n) => Some(*n),
            _ => None,
        }
    }

    /// The value as a string slice, when it carries text.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Character(s) | FieldValue::Date(s) => Some(s),
            _ => None,
        }
    }
}

/// Encodes a string value into exactly `length` bytes for its field slot.
pub fn encode_value(value: &str, length: u8, field_type: FieldType) -> Vec<u8> {
    let length = length as usize;
    match field_type {
        FieldType::Numeric => {
            let mut bytes = value.as_bytes().to_vec();
            bytes.truncate(length);
            let mut out = vec![b'0'; length - bytes.len()];
            out.extend_from_slice(&bytes);
            out
        }
        FieldType::Logical => {
            let flag = if !value.is_empty() && !value.eq_ignore_ascii_case("F") {
                b'T'
            } else {
                b'F'
            };
            let mut out = vec![flag];
            out.resize(length.max(1), b' ');
            out.truncate(length);
            out
        }
        FieldType::Date => {
            let digits: Vec<u8> = value.bytes().filter(|b| *b != b'-').collect();
            if digits.len() == 8 && digits.iter().all(u8::is_ascii_digit) {
                let mut out = digits;
                out.resize(length, b' ');
                out.truncate(length);
                out
            } else {
                vec![b' '; length]
            }
        }
        // Character, Memo and unknown types share the default rule
        _ => {
            let mut out = value.as_bytes().to_vec();
            out.truncate(length);
            out.resize(length, b' ');
            out
        }
    }
}

/// Decodes a fixed-width slot into a typed value. Trims ASCII whitespace
/// and NUL padding first.
pub fn decode_value(raw: &[u8], field_type: FieldType) -> FieldValue {
    let text = String::from_utf8_lossy(raw);
    let trimmed = text.trim_matches(|c: char| c.is_ascii_whitespace() || c == '\0');

    match field_type {
        FieldType::Numeric => FieldValue::Numeric(trimmed.parse::<f64>().unwrap_or(0.0)),
        FieldType::Logical => FieldValue::Logical(trimmed.eq_ignore_ascii_case("T")),
        FieldType::Date => {
            if trimmed.is_empty() {
                return FieldValue::Null;
            }
            match NaiveDate::parse_from_str(trimmed, "%Y%m%d") {
                Ok(date) => FieldValue::Date(date.format("%Y-%m-%d").to_string()),
                Err(_) => FieldValue::Null,
            }
        }
        _ => FieldValue::Character(trimmed.to_string()),
    }
}
