pub mod constants;
pub mod coordinates;
pub mod filename;
pub mod progress;

pub use constants::*;
pub use coordinates::{dms_to_decimal, format_degrees, parse_decimal};
pub use filename::{is_bundle_name, placemark_output_path, split_filename};
pub use progress::ProgressReporter;
