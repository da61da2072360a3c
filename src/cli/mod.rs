pub mod args;
pub mod commands;

pub use args::{ConvertBundleArgs, PlacemarkArgs};
pub use commands::{init_logging, run_convert_bundle, run_make_placemark};

/// Print a failure the way both tools report it
pub fn report_fatal(err: &anyhow::Error) {
    eprintln!("A fatal error was encountered!");
    eprintln!("{:#}", err);
}
