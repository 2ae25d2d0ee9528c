//! # FillDCM Core
//!
//! Tag resolution and dataset mutation for DICOM files.
//!
//! FillDCM fills missing or empty DICOM attributes with caller-supplied or generated values,
//! and can overwrite attributes unconditionally. A run goes through these stages:
//! - [`input`]: tags to fill and to replace, from CLI tokens and/or a JSON document
//! - [`validation`]: rejects empty, duplicated, valueless or unknown tags
//! - [`resolver`]: generates a value, according to the tag's VR, for every tag to fill
//!   without one ([`classifier`] and [`generators`])
//! - [`mutator`]: applies fill and replace rules to one record
//! - [`batch`]: load, mutate and save each file, skipping files that fail
//!
//! **No CLI concerns**: argument parsing and logging setup belong in the `filldcm` binary.

pub mod batch;
pub mod classifier;
pub mod config;
pub mod constants;
pub mod dicom;
pub mod error;
pub mod generators;
pub mod input;
pub mod mutator;
pub mod resolver;
pub mod validation;

pub use batch::{output_path, process_files, BatchReport, RecordStore, SkippedFile};
pub use classifier::{classify, StandardTagDictionary, TagDictionary};
pub use config::RunOptions;
pub use dicom::{DicomFileStore, DicomRecord};
pub use error::{FillError, FillResult};
pub use input::{parse_tag_spec, InputTags, TagSpecs};
pub use mutator::{apply, AppliedChange, ChangeKind, FieldState, MemoryRecord, Record};
pub use resolver::{FillResolver, ResolvedTags};
pub use validation::validate;

pub use filldcm_types::{SexHint, TagKeyword, TagValue, TypeTag};
