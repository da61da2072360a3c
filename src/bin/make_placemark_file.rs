use clap::Parser;
use seadas_prep::cli::{report_fatal, run_make_placemark, PlacemarkArgs};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = PlacemarkArgs::parse();
    match run_make_placemark(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_fatal(&err);
            ExitCode::FAILURE
        }
    }
}
