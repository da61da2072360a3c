use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "convert-oli-bundle")]
#[command(
    about = "Extract and convert a Landsat 8 \"Collection 1\" bundle from the new file naming convention to a SeaDAS 7-compatible set of files"
)]
#[command(
    after_help = "Required input file should be \"gzip\" compressed and have a file extension of either \".tar.gz\" or \".tgz\""
)]
#[command(version)]
pub struct ConvertBundleArgs {
    #[arg(help = "The bundle (.tar.gz or .tgz file) to be converted")]
    pub inputfile: PathBuf,

    #[arg(
        short,
        long,
        help = "Display informational non-error output (recommended)"
    )]
    pub verbose: bool,
}

#[derive(Parser, Debug)]
#[command(name = "make-placemark-file")]
#[command(
    about = "Create SeaDAS Placemark file from csv file. If space-delimited, make sure all are single spaces."
)]
#[command(after_help = "Example: make-placemark-file -i mydata.csv -o mydata.placemark -s 1")]
#[command(version)]
pub struct PlacemarkArgs {
    #[arg(
        short,
        long,
        value_name = "name",
        help = "Name of input CSV file. Contents are expected to be \"label, latitude, longitude\" (3 columns). Positions can be floats, or \"degree, minute, second\" triples (for a total of 7 columns). Input can be comma, space or tab-separated, but don't mix the separators."
    )]
    pub infile: PathBuf,

    #[arg(
        short,
        long,
        value_name = "outfile",
        help = "Full name of output placemark file. If no extension is provided, \".placemark\" will be appended."
    )]
    pub outfile: PathBuf,

    #[arg(
        short,
        long,
        value_name = "skip_lines",
        default_value = "0",
        help = "Number of header lines to skip"
    )]
    pub skip: usize,

    #[arg(short, long, help = "Lat & lon expressed as degree, minute, second")]
    pub dms: bool,

    #[arg(short, long, help = "Display informational non-error output")]
    pub verbose: bool,

    #[arg(short, long, help = "Settings file for placemark style and encoding")]
    pub config: Option<PathBuf>,
}
