//! Clarity values used as contract-call arguments.

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::error::{AppError, Result};

/// A typed Clarity argument.
///
/// Only the shapes `create-listing` takes are modelled; wire encoding is
/// left to whichever submitter broadcasts the call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClarityValue {
    Uint(u128),
    StringAscii(String),
}

impl ClarityValue {
    /// Build a `string-ascii` value, rejecting non-ASCII input.
    pub fn string_ascii(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if !value.is_ascii() {
            return Err(AppError::InvalidArgument(format!(
                "string-ascii value contains non-ASCII characters: {:?}",
                value
            )));
        }
        Ok(ClarityValue::StringAscii(value))
    }

    /// Clarity type name (e.g. `"uint"`, `"string-ascii"`).
    pub fn type_name(&self) -> &'static str {
        match self {
            ClarityValue::Uint(_) => "uint",
            ClarityValue::StringAscii(_) => "string-ascii",
        }
    }
}

impl std::fmt::Display for ClarityValue {
    /// Renders Clarity literal syntax.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClarityValue::Uint(v) => write!(f, "u{}", v),
            ClarityValue::StringAscii(s) => write!(f, "{:?}", s),
        }
    }
}

impl Serialize for ClarityValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ClarityValue", 2)?;
        state.serialize_field("type", self.type_name())?;
        match self {
            // Integers go out as strings so 128-bit values survive JSON consumers.
            ClarityValue::Uint(v) => state.serialize_field("value", &v.to_string())?,
            ClarityValue::StringAscii(s) => state.serialize_field("value", s)?,
        }
        state.end()
    }
}
