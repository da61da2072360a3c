use crate::utils::constants::{BUNDLE_EXT_TAR_GZ, BUNDLE_EXT_TGZ, PLACEMARK_EXTENSION};
use std::path::{Path, PathBuf};

/// Split a path into its directory, the base name (text before the first
/// `.`) and the remaining `.`-separated extensions
pub fn split_filename(full_name: &Path) -> (PathBuf, String, Vec<String>) {
    let dir = full_name
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default();

    let base_name = full_name
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut parts = base_name.split('.');
    let file_name = parts.next().unwrap_or_default().to_string();
    let extensions = parts.map(str::to_string).collect();

    (dir, file_name, extensions)
}

/// Whether a file name carries a gzip-compressed tarball extension
pub fn is_bundle_name(name: &str) -> bool {
    name.ends_with(BUNDLE_EXT_TGZ) || name.ends_with(BUNDLE_EXT_TAR_GZ)
}

/// Append `.placemark` unless the name already ends with it
pub fn placemark_output_path(outfile: &Path) -> PathBuf {
    let name = outfile.to_string_lossy();
    if name.ends_with(PLACEMARK_EXTENSION) {
        outfile.to_path_buf()
    } else {
        PathBuf::from(format!("{}{}", name, PLACEMARK_EXTENSION))
    }
}
