//! Table schema: the ordered field descriptor list plus the positional
//! helpers legacy xBase code leans on (1-based field positions).

use crate::codec::FieldDescriptor;

/// Ordered field descriptors of one table. Immutable after open.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSchema {
    fields: Vec<FieldDescriptor>,
}

impl TableSchema {
    /// Wraps a parsed descriptor list.
    pub fn new(fields: Vec<FieldDescriptor>) -> Self {
        Self { fields }
    }

    /// The descriptors in record order.
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Number of fields.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Looks up a descriptor by name. Names are matched case-insensitively
    /// the way the record engine normalizes caller input.
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        let wanted = name.to_uppercase();
        self.fields
            .iter()
            .find(|f| f.name.to_uppercase() == wanted)
    }

    /// 1-based position of a field by name, or `None` when absent.
    pub fn field_position(&self, name: &str) -> Option<usize> {
        let wanted = name.to_uppercase();
        self.fields
            .iter()
            .position(|f| f.name.to_uppercase() == wanted)
            .map(|i| i + 1)
    }

    /// Name of the field at a 1-based position, or `None` when out of
    /// range.
    pub fn field_name(&self, position: usize) -> Option<&str> {
        if position == 0 {
            return None;
        }
        self.fields.get(position - 1).map(|f| f.name.as_str())
    }

    /// 1-based position of the last field (0 for an empty schema).
    pub fn last_field_position(&self) -> usize {
        self.fields.len()
    }

    /// Record length implied by the schema: one deletion-flag byte plus
    /// every field's width.
    pub fn record_length(&self) -> u16 {
        1 + self
            .fields
            .iter()
            .map(|f| f.length as u16)
            .sum::<u16>()
    }
}
