use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProcessingError>;

#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("XML write error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Expecting file extension to be \".tgz\" or \".tar.gz\", got '{0}'")]
    InvalidExtension(String),

    #[error("Input file \"{0}\" does not exist")]
    MissingFile(String),

    #[error("Missing required data: {0}")]
    MissingData(String),

    #[error("Invalid coordinate format: {0}")]
    InvalidCoordinate(String),

    #[error("Invalid data format: {0}")]
    InvalidFormat(String),
}

impl From<::config::ConfigError> for ProcessingError {
    fn from(err: ::config::ConfigError) -> Self {
        ProcessingError::Config(err.to_string())
    }
}
