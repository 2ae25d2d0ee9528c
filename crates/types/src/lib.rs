//! Shared value types for FillDCM.
//!
//! These types sit between caller input (CLI tokens, JSON documents) and the core engine:
//! - [`TagKeyword`] names a DICOM attribute by its dictionary keyword.
//! - [`TypeTag`] is the attribute's value representation (VR).
//! - [`TagValue`] is a concrete value, supplied by the caller or generated.
//! - [`SexHint`] narrows personal-name generation.

mod value;
mod vr;

pub use value::{SexHint, TagValue};
pub use vr::{TypeTag, TypeTagError};

#[derive(Debug, thiserror::Error)]
pub enum KeywordError {
    #[error("tag keyword cannot be empty")]
    Empty,
}

/// A DICOM attribute keyword, such as `PatientName` or `StudyDate`.
///
/// Surrounding whitespace is dropped and blank keywords are refused. Dictionary membership is
/// left to validation. Serialises as a bare string, so it can key a JSON object.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TagKeyword(String);

impl TagKeyword {
    /// # Errors
    ///
    /// [`KeywordError::Empty`] for blank input.
    pub fn new(input: impl AsRef<str>) -> Result<Self, KeywordError> {
        match input.as_ref().trim() {
            "" => Err(KeywordError::Empty),
            keyword => Ok(Self(keyword.to_owned())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TagKeyword {
    type Error = KeywordError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TagKeyword> for String {
    fn from(keyword: TagKeyword) -> Self {
        keyword.0
    }
}

impl std::str::FromStr for TagKeyword {
    type Err = KeywordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl std::fmt::Display for TagKeyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// Lets keyword-keyed maps be queried with `&str`.
impl std::borrow::Borrow<str> for TagKeyword {
    fn borrow(&self) -> &str {
        &self.0
    }
}
