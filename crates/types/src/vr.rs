use std::fmt;
use std::str::FromStr;

/// Error returned when a string is not a known DICOM value representation.
#[derive(Debug, thiserror::Error)]
#[error("unknown value representation: {0}")]
pub struct TypeTagError(pub String);

/// DICOM value representation of an attribute, as declared by the data dictionary.
///
/// This is the full closed set of VRs defined by DICOM PS3.5. Only some of them can be
/// generated synthetically; the rest are still classified so that unsupported types
/// are reported by name rather than silently skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TypeTag {
    /// Application Entity
    AE,
    /// Age String
    AS,
    /// Attribute Tag
    AT,
    /// Code String
    CS,
    /// Date
    DA,
    /// Decimal String
    DS,
    /// Date Time
    DT,
    /// Floating Point Double
    FD,
    /// Floating Point Single
    FL,
    /// Integer String
    IS,
    /// Long String
    LO,
    /// Long Text
    LT,
    /// Other Byte
    OB,
    /// Other Double
    OD,
    /// Other Float
    OF,
    /// Other Long
    OL,
    /// Other 64-bit Very Long
    OV,
    /// Other Word
    OW,
    /// Person Name
    PN,
    /// Short String
    SH,
    /// Signed Long
    SL,
    /// Sequence of Items
    SQ,
    /// Signed Short
    SS,
    /// Short Text
    ST,
    /// Signed 64-bit Very Long
    SV,
    /// Time
    TM,
    /// Unlimited Characters
    UC,
    /// Unique Identifier
    UI,
    /// Unsigned Long
    UL,
    /// Unknown
    UN,
    /// Universal Resource Identifier
    UR,
    /// Unsigned Short
    US,
    /// Unlimited Text
    UT,
    /// Unsigned 64-bit Very Long
    UV,
}

const ALL: [(TypeTag, &str); 34] = [
    (TypeTag::AE, "AE"),
    (TypeTag::AS, "AS"),
    (TypeTag::AT, "AT"),
    (TypeTag::CS, "CS"),
    (TypeTag::DA, "DA"),
    (TypeTag::DS, "DS"),
    (TypeTag::DT, "DT"),
    (TypeTag::FD, "FD"),
    (TypeTag::FL, "FL"),
    (TypeTag::IS, "IS"),
    (TypeTag::LO, "LO"),
    (TypeTag::LT, "LT"),
    (TypeTag::OB, "OB"),
    (TypeTag::OD, "OD"),
    (TypeTag::OF, "OF"),
    (TypeTag::OL, "OL"),
    (TypeTag::OV, "OV"),
    (TypeTag::OW, "OW"),
    (TypeTag::PN, "PN"),
    (TypeTag::SH, "SH"),
    (TypeTag::SL, "SL"),
    (TypeTag::SQ, "SQ"),
    (TypeTag::SS, "SS"),
    (TypeTag::ST, "ST"),
    (TypeTag::SV, "SV"),
    (TypeTag::TM, "TM"),
    (TypeTag::UC, "UC"),
    (TypeTag::UI, "UI"),
    (TypeTag::UL, "UL"),
    (TypeTag::UN, "UN"),
    (TypeTag::UR, "UR"),
    (TypeTag::US, "US"),
    (TypeTag::UT, "UT"),
    (TypeTag::UV, "UV"),
];

impl TypeTag {
    /// Two-letter VR code, e.g. `"PN"`.
    pub fn as_str(self) -> &'static str {
        ALL.iter()
            .find(|(tag, _)| *tag == self)
            .map(|(_, code)| *code)
            .unwrap_or("UN")
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TypeTag {
    type Err = TypeTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        ALL.iter()
            .find(|(_, c)| c.eq_ignore_ascii_case(code))
            .map(|(tag, _)| *tag)
            .ok_or_else(|| TypeTagError(s.to_string()))
    }
}
