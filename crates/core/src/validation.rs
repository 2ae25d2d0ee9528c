//! Input validation.
//!
//! Runs once, before any value is generated or any file is opened. Every failure is fatal
//! for the run and reported as [`FillError::InvalidInput`].

use crate::classifier::TagDictionary;
use crate::input::InputTags;
use crate::{FillError, FillResult};

/// Validates the tags to fill and to replace.
///
/// Rules:
/// - at least one tag is given, in either set
/// - every tag to replace has a value (`Name=value`)
/// - no tag is in both sets
/// - every tag of both sets is a keyword of `dictionary`
///
/// Literal values are not checked against the tag's VR.
///
/// # Errors
///
/// Returns [`FillError::InvalidInput`] naming the first offending tag.
pub fn validate(input: &InputTags, dictionary: &dyn TagDictionary) -> FillResult<()> {
    if input.is_empty() {
        return Err(FillError::InvalidInput(
            "at least one tag shall be defined".into(),
        ));
    }

    for (tag, value) in &input.tags_to_replace {
        if value.is_none() {
            return Err(FillError::InvalidInput(format!(
                "tag {tag} to replace must have a value"
            )));
        }
        if input.tags_to_fill.contains_key(tag) {
            return Err(FillError::InvalidInput(format!(
                "tag {tag} is duplicated. A tag can only be defined once"
            )));
        }
        if !dictionary.has_field(tag.as_str()) {
            return Err(FillError::InvalidInput(format!(
                "tag {tag} is not a valid tag from DICOM dictionary"
            )));
        }
    }

    for tag in input.tags_to_fill.keys() {
        if !dictionary.has_field(tag.as_str()) {
            return Err(FillError::InvalidInput(format!(
                "tag {tag} is not a valid tag from DICOM dictionary"
            )));
        }
    }

    Ok(())
}
