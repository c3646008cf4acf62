//! Domain error types.
//!
//! These errors represent validation failures on incoming station data.
//! They are distinct from storage errors.

use std::fmt;

/// A field that every station write must carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RequiredField {
    CallSign,
    Code,
    State,
}

impl RequiredField {
    /// The field's name as it appears in error messages.
    pub fn name(self) -> &'static str {
        match self {
            RequiredField::CallSign => "CallSign",
            RequiredField::Code => "Code",
            RequiredField::State => "State",
        }
    }

    /// Human-readable message for a missing value.
    pub fn message(self) -> String {
        format!("The {} field is required.", self.name())
    }
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One or more required fields were missing or blank.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub struct ValidationError {
    fields: Vec<RequiredField>,
}

impl ValidationError {
    pub(crate) fn new(fields: Vec<RequiredField>) -> Self {
        Self { fields }
    }

    /// The offending fields, in declaration order.
    pub fn fields(&self) -> &[RequiredField] {
        &self.fields
    }

    /// One message per offending field.
    pub fn messages(&self) -> Vec<String> {
        self.fields.iter().map(|f| f.message()).collect()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.messages().join(" "))
    }
}
