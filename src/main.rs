use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use filldcm_core::{
    process_files, DicomFileStore, FillResolver, InputTags, RunOptions, StandardTagDictionary,
};

#[derive(Parser)]
#[command(name = "filldcm")]
#[command(about = "Tool to fill missing or empty DICOM tags or to overwrite others")]
struct Cli {
    /// DICOM files to edit
    #[arg(value_name = "DCM_FILE", required = true)]
    files: Vec<PathBuf>,

    /// Tag to fill if missing or empty: <Tag keyword>[=<value>]. Without a value, one is
    /// generated according to the tag's VR
    #[arg(short = 't', long = "fill", value_name = "TAG")]
    fill: Vec<String>,

    /// Tag to overwrite with the given value: <Tag keyword>=<value>
    #[arg(short = 'r', long = "replace", value_name = "TAG")]
    replace: Vec<String>,

    /// JSON file with "tags_to_fill" and "tags_to_replace" objects. --fill and --replace
    /// take precedence over it
    #[arg(short = 'j', long = "json", value_name = "PATH")]
    json: Option<PathBuf>,

    /// Overwrite the input files instead of writing <name>_modified.<ext> next to them
    #[arg(long)]
    overwrite_file: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Pick generated first names according to each file's PatientSex
    #[arg(long)]
    match_patient_sex: bool,

    /// Seed for generated values, for reproducible runs
    #[arg(long)]
    seed: Option<u64>,
}

impl Cli {
    fn options(&self) -> RunOptions {
        RunOptions::new(self.overwrite_file, self.verbose)
            .with_match_patient_sex(self.match_patient_sex)
    }

    fn input_tags(&self) -> filldcm_core::FillResult<InputTags> {
        InputTags::from_sources(
            self.json.as_deref(),
            self.fill.as_slice(),
            self.replace.as_slice(),
        )
    }
}

fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let level = if verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(format!("filldcm={level}").parse()?)
                .add_directive(format!("filldcm_core={level}").parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
    Ok(())
}

/// Entry point for FillDCM
///
/// Validates the requested tags, resolves generated values once, then edits each file in
/// turn. Invalid input aborts before any file is read; files that cannot be read or written
/// are logged and skipped.
///
/// # Environment Variables
/// - `RUST_LOG`: extra tracing filter directives (a `.env` file is honoured)
fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let options = cli.options();
    init_tracing(options.verbose_log)?;

    let input = cli.input_tags()?;
    let mut resolver = match cli.seed {
        Some(seed) => FillResolver::from_seed(seed),
        None => FillResolver::from_entropy(),
    };

    let report = process_files(
        &DicomFileStore::new(),
        &StandardTagDictionary::new(),
        &mut resolver,
        &cli.files,
        &input,
        &options,
    )?;

    if !report.skipped.is_empty() {
        tracing::warn!(
            "{} of {} file(s) skipped",
            report.skipped.len(),
            cli.files.len()
        );
    }

    Ok(())
}
