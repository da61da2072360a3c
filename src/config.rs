use crate::error::Result;
use crate::utils::constants::{DEFAULT_STYLE_CSS, DEFAULT_XML_ENCODING, ENV_PREFIX};
use ::config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use validator::Validate;

/// Placemark output settings
///
/// Layered from the built-in defaults, an optional settings file and
/// `SEADAS_PREP_*` environment variables, later sources winning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Settings {
    #[validate(length(min = 1))]
    pub style_css: String,

    #[validate(length(min = 1))]
    pub xml_encoding: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            style_css: DEFAULT_STYLE_CSS.to_string(),
            xml_encoding: DEFAULT_XML_ENCODING.to_string(),
        }
    }
}

impl Settings {
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder()
            .set_default("style_css", DEFAULT_STYLE_CSS)?
            .set_default("xml_encoding", DEFAULT_XML_ENCODING)?;

        if let Some(path) = config_file {
            builder = builder.add_source(File::from(path).required(true));
        }

        let settings: Settings = builder
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }
}
