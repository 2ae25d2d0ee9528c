//! Type classification of DICOM attributes.
//!
//! The classifier answers two questions about an attribute keyword: does the dictionary know
//! it, and what value representation does it declare. The DICOM standard dictionary is the
//! production backing; tests may provide their own.

use crate::{FillError, FillResult};
use dicom_core::dictionary::{DataDictionary, DataDictionaryEntry};
use dicom_core::Tag;
use dicom_dictionary_std::StandardDataDictionary;
use filldcm_types::TypeTag;

/// Lookup of attribute keywords in a data dictionary.
pub trait TagDictionary {
    /// Whether `name` is a keyword of this dictionary.
    fn has_field(&self, name: &str) -> bool;

    /// The VR declared for `name`.
    ///
    /// # Errors
    ///
    /// Returns [`FillError::UnknownField`] if `name` is not in the dictionary.
    fn type_of(&self, name: &str) -> FillResult<TypeTag>;
}

/// Classifies `field` by its declared VR.
pub fn classify(dictionary: &dyn TagDictionary, field: &str) -> FillResult<TypeTag> {
    dictionary.type_of(field)
}

/// [`TagDictionary`] backed by the DICOM standard data dictionary.
///
/// Only keyword lookups are supported (`PatientName`, not `(0010,0010)`). Keywords are
/// case-sensitive, as in the standard.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardTagDictionary;

impl StandardTagDictionary {
    pub fn new() -> Self {
        Self
    }

    /// Resolves `name` to its element tag.
    pub fn tag_of(&self, name: &str) -> FillResult<Tag> {
        StandardDataDictionary
            .by_name(name)
            .map(|entry| entry.tag_range().inner())
            .ok_or_else(|| FillError::UnknownField(name.to_string()))
    }
}

impl TagDictionary for StandardTagDictionary {
    fn has_field(&self, name: &str) -> bool {
        StandardDataDictionary.by_name(name).is_some()
    }

    fn type_of(&self, name: &str) -> FillResult<TypeTag> {
        let entry = StandardDataDictionary
            .by_name(name)
            .ok_or_else(|| FillError::UnknownField(name.to_string()))?;

        // Entries such as US or SS resolve to their first VR.
        type_tag_of(name, &entry.vr().relaxed().to_string())
    }
}

fn type_tag_of(name: &str, code: &str) -> FillResult<TypeTag> {
    code.parse::<TypeTag>()
        .map_err(|_| FillError::UnrecognizedType {
            field: name.to_string(),
            code: code.to_string(),
        })
}
