//! DICOM adapters: a [`Record`] over an in-memory DICOM object and a file store that reads and
//! writes DICOM part-10 files.

use crate::batch::RecordStore;
use crate::classifier::StandardTagDictionary;
use crate::mutator::{FieldState, Record};
use crate::{FillError, FillResult};
use dicom_core::{DataElement, DicomValue, PrimitiveValue, VR};
use dicom_object::mem::InMemElement;
use dicom_object::{open_file, DefaultDicomObject};
use filldcm_types::{TagValue, TypeTag};
use std::path::Path;

/// A DICOM file's dataset, addressed by attribute keyword.
pub struct DicomRecord {
    object: DefaultDicomObject,
    dictionary: StandardTagDictionary,
}

impl DicomRecord {
    pub fn new(object: DefaultDicomObject) -> Self {
        Self {
            object,
            dictionary: StandardTagDictionary::new(),
        }
    }

    pub fn object(&self) -> &DefaultDicomObject {
        &self.object
    }

    fn element(&self, name: &str) -> FillResult<Option<&InMemElement>> {
        let tag = self.dictionary.tag_of(name)?;
        self.object
            .element_opt(tag)
            .map_err(|e| FillError::RecordAccess(format!("tag {name}: {e}")))
    }

    fn put(&mut self, name: &str, vr: VR, value: &TagValue) -> FillResult<()> {
        let tag = self.dictionary.tag_of(name)?;
        self.object.put(DataElement::new(tag, vr, primitive(value, vr)));
        Ok(())
    }
}

/// US elements are binary; everything else is written as text.
fn primitive(value: &TagValue, vr: VR) -> PrimitiveValue {
    match (value, vr) {
        (TagValue::UnsignedShort(number), VR::US) => PrimitiveValue::from(*number),
        (TagValue::Text(text), VR::US) => match text.trim().parse::<u16>() {
            Ok(number) => PrimitiveValue::from(number),
            Err(_) => PrimitiveValue::from(text.clone()),
        },
        (value, _) => PrimitiveValue::from(value.to_string()),
    }
}

/// No values, or only text values made of padding.
fn is_blank(element: &InMemElement) -> bool {
    let blank = |text: &str| text.trim_matches(|c: char| c == ' ' || c == '\0').is_empty();
    match element.value() {
        DicomValue::Primitive(PrimitiveValue::Str(text)) => blank(text.as_str()),
        DicomValue::Primitive(PrimitiveValue::Strs(texts)) => {
            texts.iter().all(|text| blank(text.as_str()))
        }
        value => value.multiplicity() == 0,
    }
}

impl Record for DicomRecord {
    fn field_state(&self, name: &str) -> FillResult<FieldState> {
        Ok(match self.element(name)? {
            None => FieldState::Missing,
            Some(element) if is_blank(element) => FieldState::Empty,
            Some(_) => FieldState::Present,
        })
    }

    fn insert_field(&mut self, name: &str, type_tag: TypeTag, value: &TagValue) -> FillResult<()> {
        let vr: VR = type_tag
            .as_str()
            .parse()
            .map_err(|_| FillError::RecordAccess(format!("tag {name}: unsupported VR {type_tag}")))?;
        self.put(name, vr, value)
    }

    fn set_field_value(&mut self, name: &str, value: &TagValue) -> FillResult<()> {
        let vr = self
            .element(name)?
            .map(|element| element.vr())
            .ok_or_else(|| FillError::RecordAccess(format!("no element for tag {name}")))?;
        self.put(name, vr, value)
    }

    fn field_text(&self, name: &str) -> Option<String> {
        let element = self.element(name).ok().flatten()?;
        element.to_str().ok().map(|text| text.into_owned())
    }
}

/// Reads and writes DICOM part-10 files.
#[derive(Clone, Copy, Debug, Default)]
pub struct DicomFileStore;

impl DicomFileStore {
    pub fn new() -> Self {
        Self
    }
}

impl RecordStore for DicomFileStore {
    type Record = DicomRecord;

    fn load(&self, path: &Path) -> FillResult<DicomRecord> {
        let object = open_file(path).map_err(|e| FillError::RecordLoad {
            path: path.to_path_buf(),
            source: e.to_string().into(),
        })?;
        Ok(DicomRecord::new(object))
    }

    fn save(&self, record: &DicomRecord, path: &Path) -> FillResult<()> {
        record
            .object()
            .write_to_file(path)
            .map_err(|e| FillError::RecordPersist {
                path: path.to_path_buf(),
                source: e.to_string().into(),
            })
    }
}
