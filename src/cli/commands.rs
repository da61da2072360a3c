use crate::archive::Bundle;
use crate::cli::args::{ConvertBundleArgs, PlacemarkArgs};
use crate::config::Settings;
use crate::error::ProcessingError;
use crate::readers::CsvFile;
use crate::utils::filename::placemark_output_path;
use crate::utils::progress::ProgressReporter;
use crate::writers::PlacemarkWriter;
use anyhow::Context;
use tracing::{info, Level};

/// Install the fmt subscriber; `verbose` lowers the threshold to INFO
pub fn init_logging(verbose: bool) {
    let level = if verbose { Level::INFO } else { Level::WARN };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .try_init();
}

pub fn run_convert_bundle(args: ConvertBundleArgs) -> anyhow::Result<()> {
    init_logging(args.verbose);

    if !args.inputfile.exists() {
        return Err(ProcessingError::MissingFile(args.inputfile.display().to_string()).into());
    }

    let mut bundle = Bundle::new(&args.inputfile);
    let progress = ProgressReporter::new_spinner("Opening bundle...", !args.verbose);

    let members = bundle
        .extract_files(&progress)
        .with_context(|| format!("Failed to unpack {}", bundle.name().display()))?;
    info!("Unpacked {} files", members);

    let report = bundle
        .fix_files()
        .with_context(|| format!("Failed to convert {}", bundle.name().display()))?;

    info!(
        "Converted {} files; metadata written to {}",
        report.renamed.len(),
        report.metadata_file.display()
    );
    Ok(())
}

pub fn run_make_placemark(args: PlacemarkArgs) -> anyhow::Result<()> {
    init_logging(args.verbose);

    let outfile = placemark_output_path(&args.outfile);
    if !args.infile.exists() {
        return Err(ProcessingError::MissingFile(args.infile.display().to_string()).into());
    }

    let settings = Settings::load(args.config.as_deref()).context("Failed to load settings")?;

    let mut csv_file = CsvFile::new(&args.infile)
        .with_dms(args.dms)
        .with_skip(args.skip);
    csv_file
        .load()
        .with_context(|| format!("Failed to read {}", args.infile.display()))?;

    let writer = PlacemarkWriter::from_settings(&settings)?;
    writer
        .write(&outfile, csv_file.placemarks())
        .with_context(|| format!("Failed to write {}", outfile.display()))?;

    Ok(())
}
