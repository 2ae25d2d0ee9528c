//! Batch processing of record files.
//!
//! Files are processed one after the other: load, apply, save. A file that cannot be loaded,
//! mutated or saved is logged and skipped; the rest of the batch carries on. Validation and
//! value resolution happen before the first file is opened, so their failures abort the run
//! without touching any file.
//!
//! Generated values are resolved once and shared by every file of the batch, so one run
//! produces consistent values across a series. With [`RunOptions::match_patient_sex`], one set
//! is resolved per detected `PatientSex` instead.

use crate::classifier::TagDictionary;
use crate::config::RunOptions;
use crate::constants::{MODIFIED_FILE_SUFFIX, PATIENT_SEX_KEYWORD};
use crate::input::InputTags;
use crate::mutator::{apply, Record};
use crate::resolver::{FillResolver, ResolvedTags};
use crate::validation::validate;
use crate::FillResult;
use filldcm_types::SexHint;
use rand::RngCore;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Loads and saves records.
pub trait RecordStore {
    type Record: Record;

    /// # Errors
    ///
    /// Returns [`crate::FillError::RecordLoad`] if the file cannot be read or is not a valid
    /// container.
    fn load(&self, path: &Path) -> FillResult<Self::Record>;

    /// # Errors
    ///
    /// Returns [`crate::FillError::RecordPersist`] if the file cannot be written.
    fn save(&self, record: &Self::Record, path: &Path) -> FillResult<()>;
}

/// Where the modified copy of `input` is written.
///
/// With `overwrite` the input itself; otherwise `<dir>/<stem>_modified<.ext>`.
pub fn output_path(input: &Path, overwrite: bool) -> PathBuf {
    if overwrite {
        return input.to_path_buf();
    }
    let mut file_name = input.file_stem().unwrap_or_default().to_os_string();
    file_name.push(MODIFIED_FILE_SUFFIX);
    if let Some(extension) = input.extension() {
        file_name.push(".");
        file_name.push(extension);
    }
    input.with_file_name(file_name)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// Outcome of a batch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Output paths written, in input order.
    pub written: Vec<PathBuf>,
    pub skipped: Vec<SkippedFile>,
}

/// Validates `input`, resolves the values to fill, and applies them to every file.
///
/// # Errors
///
/// Returns validation and resolution errors. Per-file errors are reported in
/// [`BatchReport::skipped`] instead.
pub fn process_files<S, R>(
    store: &S,
    dictionary: &dyn TagDictionary,
    resolver: &mut FillResolver<R>,
    files: &[PathBuf],
    input: &InputTags,
    options: &RunOptions,
) -> FillResult<BatchReport>
where
    S: RecordStore,
    R: RngCore,
{
    validate(input, dictionary)?;

    // Resolving the unhinted set up front surfaces resolution errors before any file is read.
    let mut resolved: HashMap<Option<SexHint>, ResolvedTags> = HashMap::new();
    resolved.insert(
        None,
        resolver.resolve(&input.tags_to_fill, dictionary, None)?,
    );

    let mut report = BatchReport::default();

    for path in files {
        tracing::info!(file = %path.display(), "processing file");

        let mut record = match store.load(path) {
            Ok(record) => record,
            Err(e) if e.is_per_file() => {
                tracing::warn!(file = %path.display(), error = %e, "skipping file");
                report.skipped.push(SkippedFile {
                    path: path.clone(),
                    reason: e.to_string(),
                });
                continue;
            }
            Err(e) => return Err(e),
        };

        let hint = if options.match_patient_sex {
            record
                .field_text(PATIENT_SEX_KEYWORD)
                .and_then(|sex| SexHint::parse(&sex))
        } else {
            None
        };
        if !resolved.contains_key(&hint) {
            let tags = resolver.resolve(&input.tags_to_fill, dictionary, hint)?;
            resolved.insert(hint, tags);
        }
        let tags_to_fill = &resolved[&hint];

        let changes = match apply(&mut record, dictionary, tags_to_fill, &input.tags_to_replace) {
            Ok(changes) => changes,
            Err(e) if e.is_per_file() => {
                tracing::warn!(file = %path.display(), error = %e, "skipping file");
                report.skipped.push(SkippedFile {
                    path: path.clone(),
                    reason: e.to_string(),
                });
                continue;
            }
            Err(e) => return Err(e),
        };
        for change in &changes {
            tracing::info!(file = %path.display(), "{change}");
        }

        let destination = output_path(path, options.overwrite_output_file);
        match store.save(&record, &destination) {
            Ok(()) => {
                tracing::debug!(output = %destination.display(), "file written");
                report.written.push(destination);
            }
            Err(e) if e.is_per_file() => {
                tracing::warn!(file = %path.display(), error = %e, "skipping file");
                report.skipped.push(SkippedFile {
                    path: path.clone(),
                    reason: e.to_string(),
                });
            }
            Err(e) => return Err(e),
        }
    }

    tracing::info!(
        written = report.written.len(),
        skipped = report.skipped.len(),
        "batch complete"
    );
    Ok(report)
}
