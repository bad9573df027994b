//! MARC record access
//!
//! The validator only needs a handful of values from each record: two
//! identifiers, a display name and the subfields of the descriptor field.
//! [`FieldAccess`] is that capability. It is implemented for [`Record`] as
//! decoded by [`RecordStream`], and tests can implement it directly.

pub mod reader;

#[cfg(test)]
pub mod tests;

pub use mrrc::Record;
pub use reader::RecordStream;

/// What the decoder puts in place of bytes that are not valid UTF-8
const UNDECODABLE: char = char::REPLACEMENT_CHARACTER;

/// Text with undecodable bytes dropped instead of substituted
///
/// `E015\xFF000` reads as `E015000`, so a damaged coordinate is reported
/// with its real length.
pub fn drop_undecodable(value: &str) -> String {
    value.chars().filter(|c| *c != UNDECODABLE).collect()
}

/// Read access to the fields the batch needs
pub trait FieldAccess {
    /// Value of the first field with `tag`, control or data
    fn field_value(&self, tag: &str) -> Option<String>;

    /// Subfields of the first data field with `tag`
    fn subfields(&self, tag: &str) -> Option<Vec<(char, String)>>;
}

impl FieldAccess for Record {
    fn field_value(&self, tag: &str) -> Option<String> {
        if let Some(value) = self.get_control_field(tag) {
            return Some(drop_undecodable(value));
        }
        // Data-field value is its subfields joined by a space
        self.get_field(tag)
            .map(|field| drop_undecodable(&field.value()))
    }

    fn subfields(&self, tag: &str) -> Option<Vec<(char, String)>> {
        self.get_field(tag).map(|field| {
            field
                .subfields
                .iter()
                .map(|subfield| (subfield.code, drop_undecodable(&subfield.value)))
                .collect()
        })
    }
}
