use clap::Parser;
use seadas_prep::cli::{report_fatal, run_convert_bundle, ConvertBundleArgs};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = ConvertBundleArgs::parse();
    match run_convert_bundle(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_fatal(&err);
            ExitCode::FAILURE
        }
    }
}
