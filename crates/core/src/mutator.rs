//! Dataset mutation: applying resolved values to a record.

use crate::classifier::{classify, TagDictionary};
use crate::input::TagSpecs;
use crate::resolver::ResolvedTags;
use crate::{FillError, FillResult};
use filldcm_types::{TagKeyword, TagValue, TypeTag};
use std::collections::BTreeMap;
use std::fmt;

/// Presence of an attribute in a record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldState {
    /// No element for the attribute.
    Missing,
    /// An element exists but holds zero values (value multiplicity 0).
    Empty,
    /// An element with at least one value.
    Present,
}

/// A record of attributes that can be inspected and mutated by keyword.
pub trait Record {
    fn field_state(&self, name: &str) -> FillResult<FieldState>;

    /// Adds a new element with the given VR.
    fn insert_field(&mut self, name: &str, type_tag: TypeTag, value: &TagValue) -> FillResult<()>;

    /// Replaces the value of an existing element, keeping its VR.
    fn set_field_value(&mut self, name: &str, value: &TagValue) -> FillResult<()>;

    /// The element's value as text, if present and convertible.
    fn field_text(&self, name: &str) -> Option<String>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChangeKind {
    Fill,
    Replace,
}

/// One mutation performed by [`apply`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppliedChange {
    pub tag: TagKeyword,
    pub value: TagValue,
    pub kind: ChangeKind,
    /// `true` if the element was added, `false` if an existing one was overwritten.
    pub inserted: bool,
}

impl fmt::Display for AppliedChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let action = match (self.kind, self.inserted) {
            (ChangeKind::Fill, true) => "filled missing",
            (ChangeKind::Fill, false) => "filled empty",
            (ChangeKind::Replace, true) => "inserted",
            (ChangeKind::Replace, false) => "replaced",
        };
        write!(f, "{action} {} = {}", self.tag, self.value)
    }
}

fn insert<Rec: Record + ?Sized>(
    record: &mut Rec,
    dictionary: &dyn TagDictionary,
    tag: &TagKeyword,
    value: &TagValue,
) -> FillResult<()> {
    let type_tag = classify(dictionary, tag.as_str())?;
    record.insert_field(tag.as_str(), type_tag, value)
}

/// Applies the resolved tags to fill and the tags to replace to `record`.
///
/// Tags to fill are written only when missing or empty; present values are never touched,
/// so applying twice is the same as applying once. Tags to replace are always written
/// afterwards. Returns the mutations made, in order.
///
/// # Errors
///
/// Fails if a tag to replace has no value (validation rejects this earlier), or if the record
/// rejects an element.
pub fn apply<Rec: Record + ?Sized>(
    record: &mut Rec,
    dictionary: &dyn TagDictionary,
    tags_to_fill: &ResolvedTags,
    tags_to_replace: &TagSpecs,
) -> FillResult<Vec<AppliedChange>> {
    let mut changes = Vec::new();

    for (tag, value) in tags_to_fill {
        let inserted = match record.field_state(tag.as_str())? {
            FieldState::Missing => {
                insert(record, dictionary, tag, value)?;
                true
            }
            FieldState::Empty => {
                record.set_field_value(tag.as_str(), value)?;
                false
            }
            FieldState::Present => continue,
        };
        changes.push(AppliedChange {
            tag: tag.clone(),
            value: value.clone(),
            kind: ChangeKind::Fill,
            inserted,
        });
    }

    for (tag, value) in tags_to_replace {
        let value = value.as_ref().ok_or_else(|| {
            FillError::InvalidInput(format!("tag {tag} to replace must have a value"))
        })?;
        let inserted = match record.field_state(tag.as_str())? {
            FieldState::Missing => {
                insert(record, dictionary, tag, value)?;
                true
            }
            FieldState::Empty | FieldState::Present => {
                record.set_field_value(tag.as_str(), value)?;
                false
            }
        };
        changes.push(AppliedChange {
            tag: tag.clone(),
            value: value.clone(),
            kind: ChangeKind::Replace,
            inserted,
        });
    }

    Ok(changes)
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct MemoryEntry {
    type_tag: TypeTag,
    values: Vec<String>,
}

/// In-memory [`Record`]: each entry holds a VR and a list of values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryRecord {
    entries: BTreeMap<String, MemoryEntry>,
}

impl MemoryRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insertion of an entry with one value per item of `values`.
    pub fn with_entry(mut self, name: &str, type_tag: TypeTag, values: &[&str]) -> Self {
        self.entries.insert(
            name.to_string(),
            MemoryEntry {
                type_tag,
                values: values.iter().map(|v| v.to_string()).collect(),
            },
        );
        self
    }

    pub fn type_of(&self, name: &str) -> Option<TypeTag> {
        self.entries.get(name).map(|entry| entry.type_tag)
    }
}

impl Record for MemoryRecord {
    fn field_state(&self, name: &str) -> FillResult<FieldState> {
        Ok(match self.entries.get(name) {
            None => FieldState::Missing,
            Some(entry) if entry.values.is_empty() => FieldState::Empty,
            Some(_) => FieldState::Present,
        })
    }

    fn insert_field(&mut self, name: &str, type_tag: TypeTag, value: &TagValue) -> FillResult<()> {
        self.entries.insert(
            name.to_string(),
            MemoryEntry {
                type_tag,
                values: vec![value.to_string()],
            },
        );
        Ok(())
    }

    fn set_field_value(&mut self, name: &str, value: &TagValue) -> FillResult<()> {
        let entry = self
            .entries
            .get_mut(name)
            .ok_or_else(|| FillError::RecordAccess(format!("no element for tag {name}")))?;
        entry.values = vec![value.to_string()];
        Ok(())
    }

    fn field_text(&self, name: &str) -> Option<String> {
        self.entries.get(name).map(|entry| entry.values.join("\\"))
    }
}
