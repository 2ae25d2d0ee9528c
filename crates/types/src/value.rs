use std::fmt;

/// A concrete attribute value, either supplied by the caller or generated.
///
/// Caller literals are always text; they are not checked against the attribute's VR.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagValue {
    Text(String),
    UnsignedShort(u16),
}

impl TagValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }
}

impl fmt::Display for TagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::UnsignedShort(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for TagValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for TagValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<u16> for TagValue {
    fn from(value: u16) -> Self {
        Self::UnsignedShort(value)
    }
}

/// Patient sex, used to pick first names when generating a person name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SexHint {
    Male,
    Female,
}

impl SexHint {
    /// Parses a `PatientSex`-style value.
    ///
    /// Accepts `M`, `F`, `MALE` and `FEMALE` in any case. Anything else (including DICOM's
    /// `O` for other) gives no hint, so names are drawn from both lists.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_uppercase().as_str() {
            "M" | "MALE" => Some(Self::Male),
            "F" | "FEMALE" => Some(Self::Female),
            _ => None,
        }
    }
}
