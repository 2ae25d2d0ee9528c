//! Run configuration.
//!
//! Options are resolved once at process startup (from CLI flags) and then passed into the
//! batch driver. The core never reads environment variables or argument lists itself.

/// Options controlling a single FillDCM run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Write back to the input file instead of `<stem>_modified<.ext>` next to it.
    pub overwrite_output_file: bool,
    /// Verbose logging only; has no effect on what is written.
    pub verbose_log: bool,
    /// Resolve generated values once per detected `PatientSex` instead of once per run,
    /// so generated person names match each record's sex.
    pub match_patient_sex: bool,
}

impl RunOptions {
    pub fn new(overwrite_output_file: bool, verbose_log: bool) -> Self {
        Self {
            overwrite_output_file,
            verbose_log,
            match_patient_sex: false,
        }
    }

    pub fn with_match_patient_sex(mut self, enabled: bool) -> Self {
        self.match_patient_sex = enabled;
        self
    }
}
