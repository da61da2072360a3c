pub mod csv_reader;

pub use csv_reader::{sniff_delimiter, CsvFile};
