//! Caller input: the tags to fill and the tags to replace.
//!
//! Input comes from up to three sources, applied in this order so that later sources win on
//! key collision:
//! 1. a JSON document `{"tags_to_fill": {..}, "tags_to_replace": {..}}`
//! 2. `--fill` tokens
//! 3. `--replace` tokens
//!
//! Tokens use the form `<Keyword>` or `<Keyword>=<value>`; a token without `=` leaves the
//! value to be generated.

use crate::{FillError, FillResult};
use filldcm_types::{TagKeyword, TagValue};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Tag keyword to optional literal value.
pub type TagSpecs = BTreeMap<TagKeyword, Option<TagValue>>;

/// All DICOM tags to fill or to replace, as supplied by the caller.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InputTags {
    /// Filled only when missing or empty. `None` means generate a value.
    pub tags_to_fill: TagSpecs,
    /// Always written. A `None` value is rejected by validation.
    pub tags_to_replace: TagSpecs,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonValue {
    Text(String),
    Number(serde_json::Number),
}

impl From<JsonValue> for TagValue {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Text(text) => TagValue::Text(text),
            JsonValue::Number(number) => TagValue::Text(number.to_string()),
        }
    }
}

#[derive(Deserialize)]
struct JsonInput {
    #[serde(default)]
    tags_to_fill: BTreeMap<TagKeyword, Option<JsonValue>>,
    #[serde(default)]
    tags_to_replace: BTreeMap<TagKeyword, Option<JsonValue>>,
}

fn into_specs(map: BTreeMap<TagKeyword, Option<JsonValue>>) -> TagSpecs {
    map.into_iter()
        .map(|(keyword, value)| (keyword, value.map(TagValue::from)))
        .collect()
}

/// Parses one `<Keyword>[=<value>]` token.
///
/// Only the first `=` separates keyword and value, so values may themselves contain `=`.
/// `Name=` gives an empty literal, which is different from no value at all.
pub fn parse_tag_spec(raw: &str) -> FillResult<(TagKeyword, Option<TagValue>)> {
    let (name, value) = match raw.split_once('=') {
        Some((name, value)) => (name, Some(TagValue::text(value))),
        None => (raw, None),
    };
    let keyword = TagKeyword::new(name)
        .map_err(|e| FillError::InvalidInput(format!("tag argument '{raw}': {e}")))?;
    Ok((keyword, value))
}

impl InputTags {
    pub fn new(tags_to_fill: TagSpecs, tags_to_replace: TagSpecs) -> Self {
        Self {
            tags_to_fill,
            tags_to_replace,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tags_to_fill.is_empty() && self.tags_to_replace.is_empty()
    }

    /// Parses a JSON input document. Unknown top-level keys are ignored.
    pub fn from_json_str(json: &str) -> FillResult<Self> {
        let parsed: JsonInput = serde_json::from_str(json)
            .map_err(|e| FillError::InvalidInput(format!("error while reading JSON input: {e}")))?;
        Ok(Self::new(
            into_specs(parsed.tags_to_fill),
            into_specs(parsed.tags_to_replace),
        ))
    }

    /// Reads and parses a JSON input file.
    pub fn from_json_file(path: &Path) -> FillResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            FillError::InvalidInput(format!(
                "error while reading JSON input. File: {}. Error: {e}",
                path.display()
            ))
        })?;
        Self::from_json_str(&contents).map_err(|e| match e {
            FillError::InvalidInput(msg) => {
                FillError::InvalidInput(format!("{msg}. File: {}", path.display()))
            }
            other => other,
        })
    }

    /// Adds `--fill` tokens, overriding earlier entries with the same keyword.
    pub fn merge_fill_specs<S: AsRef<str>>(&mut self, raw: &[S]) -> FillResult<()> {
        for token in raw {
            let (keyword, value) = parse_tag_spec(token.as_ref())?;
            self.tags_to_fill.insert(keyword, value);
        }
        Ok(())
    }

    /// Adds `--replace` tokens, overriding earlier entries with the same keyword.
    pub fn merge_replace_specs<S: AsRef<str>>(&mut self, raw: &[S]) -> FillResult<()> {
        for token in raw {
            let (keyword, value) = parse_tag_spec(token.as_ref())?;
            self.tags_to_replace.insert(keyword, value);
        }
        Ok(())
    }

    /// Builds the input from every source, in precedence order.
    pub fn from_sources<S: AsRef<str>>(
        json_path: Option<&Path>,
        fill: &[S],
        replace: &[S],
    ) -> FillResult<Self> {
        let mut input = match json_path {
            Some(path) => Self::from_json_file(path)?,
            None => Self::default(),
        };
        input.merge_fill_specs(fill)?;
        input.merge_replace_specs(replace)?;
        Ok(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn kw(name: &str) -> TagKeyword {
        TagKeyword::new(name).unwrap()
    }

    #[test]
    fn token_without_value_marks_generation() {
        let (keyword, value) = parse_tag_spec("PatientName").unwrap();
        assert_eq!(keyword.as_str(), "PatientName");
        assert_eq!(value, None);
    }

    #[test]
    fn token_splits_on_first_equals_only() {
        let (keyword, value) = parse_tag_spec("ImageComments=a=b").unwrap();
        assert_eq!(keyword.as_str(), "ImageComments");
        assert_eq!(value, Some(TagValue::text("a=b")));
    }

    #[test]
    fn token_with_empty_value_keeps_empty_literal() {
        let (_, value) = parse_tag_spec("PatientID=").unwrap();
        assert_eq!(value, Some(TagValue::text("")));
    }

    #[test]
    fn token_without_keyword_is_rejected() {
        let err = parse_tag_spec("=value").unwrap_err();
        assert!(matches!(err, FillError::InvalidInput(_)));
    }

    #[test]
    fn fill_and_replace_tokens_are_parsed() {
        let input = InputTags::from_sources(
            None,
            &["PatientName=Doe^John", "PatientBirthDate"],
            &["PatientID=42"],
        )
        .unwrap();

        assert_eq!(
            input.tags_to_fill.get("PatientName"),
            Some(&Some(TagValue::text("Doe^John")))
        );
        assert_eq!(input.tags_to_fill.get("PatientBirthDate"), Some(&None));
        assert_eq!(
            input.tags_to_replace.get("PatientID"),
            Some(&Some(TagValue::text("42")))
        );
    }

    #[test]
    fn no_source_gives_empty_input() {
        let input = InputTags::from_sources::<&str>(None, &[], &[]).unwrap();
        assert!(input.is_empty());
    }

    #[test]
    fn json_document_is_parsed() {
        let input = InputTags::from_json_str(
            r#"{
                "tags_to_fill": {"PatientName": null, "PatientAge": "042Y", "Rows": 512},
                "tags_to_replace": {"PatientID": "42"},
                "comment": "ignored"
            }"#,
        )
        .unwrap();

        assert_eq!(input.tags_to_fill.get("PatientName"), Some(&None));
        assert_eq!(
            input.tags_to_fill.get("PatientAge"),
            Some(&Some(TagValue::text("042Y")))
        );
        assert_eq!(
            input.tags_to_fill.get("Rows"),
            Some(&Some(TagValue::text("512")))
        );
        assert_eq!(
            input.tags_to_replace.get("PatientID"),
            Some(&Some(TagValue::text("42")))
        );
    }

    #[test]
    fn empty_json_object_gives_empty_input() {
        assert!(InputTags::from_json_str("{}").unwrap().is_empty());
    }

    #[test]
    fn malformed_json_is_invalid_input() {
        let err = InputTags::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, FillError::InvalidInput(_)));

        let err = InputTags::from_json_str(r#"{"tags_to_fill": ["PatientName"]}"#).unwrap_err();
        assert!(matches!(err, FillError::InvalidInput(_)));
    }

    #[test]
    fn missing_json_file_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let err = InputTags::from_json_file(&path).unwrap_err();
        match err {
            FillError::InvalidInput(msg) => assert!(msg.contains("absent.json")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn tokens_override_json_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tags.json");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(
            file,
            r#"{{"tags_to_fill": {{"PatientName": "From^Json", "StudyDate": null}},
                "tags_to_replace": {{"PatientID": "json"}}}}"#
        )
        .unwrap();

        let input = InputTags::from_sources(
            Some(path.as_path()),
            &["PatientName=From^Cli"],
            &["PatientID=cli"],
        )
        .unwrap();

        assert_eq!(
            input.tags_to_fill.get(&kw("PatientName")),
            Some(&Some(TagValue::text("From^Cli")))
        );
        assert_eq!(input.tags_to_fill.get(&kw("StudyDate")), Some(&None));
        assert_eq!(
            input.tags_to_replace.get(&kw("PatientID")),
            Some(&Some(TagValue::text("cli")))
        );
    }
}
