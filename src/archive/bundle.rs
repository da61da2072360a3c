use crate::archive::metadata::rewrite_metadata;
use crate::error::{ProcessingError, Result};
use crate::utils::constants::{BUNDLE_EXT_TAR_GZ, BUNDLE_EXT_TGZ, MTL_SUFFIX, OLI_EXTENSIONS};
use crate::utils::filename::{is_bundle_name, split_filename};
use crate::utils::progress::ProgressReporter;
use flate2::read::GzDecoder;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tar::Archive;
use tracing::{debug, info};

pub type BundleArchive = Archive<GzDecoder<BufReader<File>>>;

/// What `Bundle::fix_files` changed on disk
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FixReport {
    pub metadata_file: PathBuf,
    pub renamed: Vec<(PathBuf, PathBuf)>,
}

/// A Landsat 8 Collection 1 bundle on its way to the pre-collection layout
#[derive(Debug, Clone)]
pub struct Bundle {
    name: PathBuf,
    dir: PathBuf,
    input_base_name: String,
    extensions: Vec<String>,
    output_base_name: Option<String>,
}

impl Bundle {
    pub fn new(name: impl AsRef<Path>) -> Self {
        let name = name.as_ref();
        let name = name.strip_prefix("./").unwrap_or(name).to_path_buf();
        let (dir, input_base_name, extensions) = split_filename(&name);

        Self {
            name,
            dir,
            input_base_name,
            extensions,
            output_base_name: None,
        }
    }

    pub fn name(&self) -> &Path {
        &self.name
    }

    /// Directory the bundle lives in and is unpacked into
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn input_base_name(&self) -> &str {
        &self.input_base_name
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Scene id the members are renamed to, known once the metadata is fixed
    pub fn output_base_name(&self) -> Option<&str> {
        self.output_base_name.as_deref()
    }

    fn unpack_dir(&self) -> &Path {
        if self.dir.as_os_str().is_empty() {
            Path::new(".")
        } else {
            &self.dir
        }
    }

    /// Open the gzip-compressed tarball for streaming
    pub fn open(&self) -> Result<BundleArchive> {
        let name = self.name.to_string_lossy();
        if !is_bundle_name(&name) {
            return Err(ProcessingError::InvalidExtension(name.into_owned()));
        }

        let file = File::open(&self.name)?;
        Ok(Archive::new(GzDecoder::new(BufReader::new(file))))
    }

    /// Unpack every member next to the tarball, returning the member count
    pub fn extract_files(&self, progress: &ProgressReporter) -> Result<usize> {
        let mut archive = self.open()?;
        let dest = self.unpack_dir();

        info!("Unpacking tarball; this may take a while...");
        progress.set_message("Unpacking tarball; this may take a while...");

        let mut count = 0;
        for entry in archive.entries()? {
            let mut entry = entry?;
            let member = entry.path()?.into_owned();
            progress.set_message(&format!("Unpacking {}", member.display()));

            if entry.unpack_in(dest)? {
                debug!("Unpacked {}", member.display());
                count += 1;
            } else {
                return Err(ProcessingError::InvalidFormat(format!(
                    "Archive member '{}' would unpack outside '{}'",
                    member.display(),
                    dest.display()
                )));
            }
        }

        progress.finish_with_message("Done!");
        info!("Done!");

        Ok(count)
    }

    fn metadata_path(&self, base_name: &str) -> PathBuf {
        self.dir.join(format!("{}{}", base_name, MTL_SUFFIX))
    }

    /// Rewrite the metadata file and rename the band files to the scene id
    pub fn fix_files(&mut self) -> Result<FixReport> {
        let text = self.read_meta()?;
        let metadata_file = self.write_meta(&text)?;

        let old_mtl = self.metadata_path(&self.input_base_name);
        if old_mtl != metadata_file {
            fs::remove_file(&old_mtl)?;
        }

        let renamed = self.write_bands()?;

        Ok(FixReport {
            metadata_file,
            renamed,
        })
    }

    fn read_meta(&self) -> Result<String> {
        let old_mtl = self.metadata_path(&self.input_base_name);
        if !old_mtl.exists() {
            return Err(ProcessingError::MissingFile(old_mtl.display().to_string()));
        }

        Ok(fs::read_to_string(&old_mtl)?)
    }

    fn write_meta(&mut self, text: &str) -> Result<PathBuf> {
        let rewrite = rewrite_metadata(text, &self.input_base_name)?;
        let new_mtl = self.metadata_path(&rewrite.scene_id);

        debug!(
            "Dropped {} Collection 1 lines from metadata",
            rewrite.dropped_lines
        );
        info!("Writing new metadata file {}", new_mtl.display());
        fs::write(&new_mtl, rewrite.text)?;

        self.output_base_name = Some(rewrite.scene_id);
        Ok(new_mtl)
    }

    fn write_bands(&self) -> Result<Vec<(PathBuf, PathBuf)>> {
        let output_base_name = self.output_base_name.as_deref().ok_or_else(|| {
            ProcessingError::MissingData("Scene id unknown; metadata not rewritten".to_string())
        })?;

        let mut bundle_files = Vec::new();
        for entry in fs::read_dir(self.unpack_dir())? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }

            let file_name = entry.file_name().to_string_lossy().into_owned();
            if !file_name.starts_with(&self.input_base_name) {
                continue;
            }
            if [BUNDLE_EXT_TAR_GZ, BUNDLE_EXT_TGZ, MTL_SUFFIX]
                .iter()
                .any(|ext| file_name.ends_with(ext))
            {
                continue;
            }
            bundle_files.push(file_name);
        }
        bundle_files.sort();

        let mut renamed = Vec::new();
        for file_name in bundle_files {
            let Some(band) = OLI_EXTENSIONS.iter().find(|band| file_name.contains(*band)) else {
                debug!("Leaving {} alone; no band suffix", file_name);
                continue;
            };

            let from = self.dir.join(&file_name);
            let to = self.dir.join(format!("{}{}", output_base_name, band));
            info!("Converting {} to {}", from.display(), to.display());
            fs::rename(&from, &to)?;
            renamed.push((from, to));
        }

        Ok(renamed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    /// Write a tarball with raw member names, so `..` paths survive
    fn write_tarball(path: &Path, members: &[(&str, &[u8])]) -> Result<()> {
        let file = File::create(path)?;
        let mut builder = tar::Builder::new(GzEncoder::new(file, Compression::default()));
        for (name, data) in members {
            let mut header = tar::Header::new_old();
            let raw = name.as_bytes();
            header.as_old_mut().name[..raw.len()].copy_from_slice(raw);
            header.set_size(data.len() as u64);
            header.set_mode(0o644);
            header.set_entry_type(tar::EntryType::Regular);
            header.set_cksum();
            builder.append(&header, *data)?;
        }
        builder.into_inner()?.finish()?;
        Ok(())
    }

    #[test]
    fn test_bundle_strips_leading_dot_slash() {
        let bundle = Bundle::new("./LC08_L1TP_042034_20170616_20170629_01_T1.tar.gz");
        assert_eq!(
            bundle.name(),
            Path::new("LC08_L1TP_042034_20170616_20170629_01_T1.tar.gz")
        );
        assert_eq!(bundle.dir(), Path::new(""));
        assert_eq!(
            bundle.input_base_name(),
            "LC08_L1TP_042034_20170616_20170629_01_T1"
        );
        assert_eq!(bundle.extensions(), ["tar".to_string(), "gz".to_string()]);
        assert_eq!(bundle.output_base_name(), None);
    }

    #[test]
    fn test_bundle_keeps_directory() {
        let bundle = Bundle::new("scenes/LC08_SCENE.tgz");
        assert_eq!(bundle.dir(), Path::new("scenes"));
        assert_eq!(bundle.input_base_name(), "LC08_SCENE");
        assert_eq!(bundle.extensions(), ["tgz".to_string()]);
    }

    #[test]
    fn test_open_rejects_other_extensions() {
        let bundle = Bundle::new("scene.zip");
        assert!(matches!(
            bundle.open(),
            Err(ProcessingError::InvalidExtension(_))
        ));
    }

    #[test]
    fn test_open_missing_file() {
        let bundle = Bundle::new("no/such/scene.tgz");
        assert!(matches!(bundle.open(), Err(ProcessingError::Io(_))));
    }

    #[test]
    fn test_extract_rejects_members_outside_bundle_dir() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let bundle_dir = temp_dir.path().join("scenes");
        fs::create_dir(&bundle_dir)?;
        let archive = bundle_dir.join("LC08_SCENE.tar.gz");
        write_tarball(
            &archive,
            &[
                ("LC08_SCENE_B1.TIF", &b"band one"[..]),
                ("../escape", &b"outside"[..]),
            ],
        )?;

        let bundle = Bundle::new(&archive);
        let result = bundle.extract_files(&ProgressReporter::hidden());

        assert!(matches!(result, Err(ProcessingError::InvalidFormat(_))));
        assert!(!temp_dir.path().join("escape").exists());

        Ok(())
    }

    #[test]
    fn test_fix_files_without_scene_id_changes_nothing() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let dir = temp_dir.path();
        let mtl = dir.join("LC08_SCENE_MTL.txt");
        let band = dir.join("LC08_SCENE_B1.TIF");
        fs::write(&mtl, "GROUP = L1_METADATA_FILE\nLANDSAT_PRODUCT_ID = \"LC08_SCENE\"\nEND\n")?;
        fs::write(&band, b"band one")?;

        let mut bundle = Bundle::new(dir.join("LC08_SCENE.tgz"));
        let result = bundle.fix_files();

        assert!(matches!(result, Err(ProcessingError::MissingData(_))));
        assert!(mtl.exists());
        assert!(band.exists());
        assert_eq!(bundle.output_base_name(), None);
        assert_eq!(fs::read_dir(dir)?.count(), 2);

        Ok(())
    }
}
