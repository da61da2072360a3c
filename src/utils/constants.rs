/// Accepted bundle file extensions
pub const BUNDLE_EXT_TGZ: &str = ".tgz";
pub const BUNDLE_EXT_TAR_GZ: &str = ".tar.gz";

/// Metadata file suffix
pub const MTL_SUFFIX: &str = "_MTL.txt";

/// Metadata key holding the pre-collection scene identifier
pub const SCENE_ID_KEY: &str = "LANDSAT_SCENE_ID";

/// Collection 1 metadata keys that pre-collection readers reject
pub const COLLECTION_1_LINES: [&str; 15] = [
    "LANDSAT_PRODUCT_ID",
    "COLLECTION_NUMBER",
    "COLLECTION_CATEGORY",
    "ANGLE_COEFFICIENT_FILE_NAME",
    "TIRS_STRAY_LIGHT_CORRECTION_SOURCE",
    "SATURATION_BAND_1",
    "SATURATION_BAND_2",
    "SATURATION_BAND_3",
    "SATURATION_BAND_4",
    "SATURATION_BAND_5",
    "SATURATION_BAND_6",
    "SATURATION_BAND_7",
    "SATURATION_BAND_8",
    "SATURATION_BAND_9",
    "TRUNCATION_OLI",
];

/// OLI/TIRS bundle member suffixes, in match order
pub const OLI_EXTENSIONS: [&str; 14] = [
    "_B1.TIF", "_B2.TIF", "_B3.TIF", "_B4.TIF", "_B5.TIF", "_B6.TIF", "_B7.TIF", "_B8.TIF",
    "_B9.TIF", "_B10.TIF", "_B11.TIF", "_BQA.TIF", "_ANG.txt", "_MTL.txt",
];

/// Placemark output
pub const PLACEMARK_EXTENSION: &str = ".placemark";
pub const DEFAULT_STYLE_CSS: &str = "fill:#ff0000";
pub const DEFAULT_XML_ENCODING: &str = "ISO-8859-1";

/// Delimiter sniffing
pub const SNIFF_SAMPLE_SIZE: usize = 1024;
pub const CANDIDATE_DELIMITERS: [u8; 3] = [b',', b'\t', b' '];

/// Expected column counts
pub const DECIMAL_COLUMNS: usize = 3;
pub const DMS_COLUMNS: usize = 7;

/// Environment prefix for configuration overrides
pub const ENV_PREFIX: &str = "SEADAS_PREP";
