use crate::error::{ProcessingError, Result};
use crate::utils::constants::{COLLECTION_1_LINES, SCENE_ID_KEY};

/// Outcome of rewriting a Collection 1 MTL file for pre-collection readers
#[derive(Debug, Clone, PartialEq)]
pub struct MetadataRewrite {
    pub scene_id: String,
    pub text: String,
    pub dropped_lines: usize,
}

/// Find the `LANDSAT_SCENE_ID` value in MTL text
pub fn find_scene_id(text: &str) -> Option<String> {
    text.lines()
        .find(|line| line.contains(SCENE_ID_KEY))
        .and_then(|line| line.split('=').nth(1))
        .map(|value| value.trim().trim_matches('"').to_string())
        .filter(|value| !value.is_empty())
}

pub fn is_collection_1_line(line: &str) -> bool {
    COLLECTION_1_LINES.iter().any(|key| line.contains(key))
}

/// Rename every occurrence of `input_base_name` to the scene id and drop the
/// Collection 1 only keys. Line endings are kept as they were.
pub fn rewrite_metadata(text: &str, input_base_name: &str) -> Result<MetadataRewrite> {
    let scene_id = find_scene_id(text).ok_or_else(|| {
        ProcessingError::MissingData(format!("No {} found in metadata", SCENE_ID_KEY))
    })?;

    let mut out = String::with_capacity(text.len());
    let mut dropped_lines = 0;

    for line in text.split_inclusive('\n') {
        if is_collection_1_line(line) {
            dropped_lines += 1;
            continue;
        }

        if !input_base_name.is_empty() && line.contains(input_base_name) {
            out.push_str(&line.replace(input_base_name, &scene_id));
        } else {
            out.push_str(line);
        }
    }

    Ok(MetadataRewrite {
        scene_id,
        text: out,
        dropped_lines,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const BASE: &str = "LC08_L1TP_042034_20170616_20170629_01_T1";

    fn sample_mtl() -> String {
        format!(
            "GROUP = L1_METADATA_FILE\n\
             \x20 GROUP = METADATA_FILE_INFO\n\
             \x20   LANDSAT_SCENE_ID = \"LC80420342017167LGN00\"\n\
             \x20   LANDSAT_PRODUCT_ID = \"{base}\"\n\
             \x20   COLLECTION_NUMBER = 01\n\
             \x20 END_GROUP = METADATA_FILE_INFO\n\
             \x20 GROUP = PRODUCT_METADATA\n\
             \x20   COLLECTION_CATEGORY = \"T1\"\n\
             \x20   FILE_NAME_BAND_1 = \"{base}_B1.TIF\"\n\
             \x20   FILE_NAME_BAND_QUALITY = \"{base}_BQA.TIF\"\n\
             \x20   ANGLE_COEFFICIENT_FILE_NAME = \"{base}_ANG.txt\"\n\
             \x20   METADATA_FILE_NAME = \"{base}_MTL.txt\"\n\
             \x20 END_GROUP = PRODUCT_METADATA\n\
             \x20 GROUP = MIN_MAX_RADIANCE\n\
             \x20   SATURATION_BAND_1 = \"N\"\n\
             \x20   SATURATION_BAND_10 = \"N\"\n\
             \x20   TRUNCATION_OLI = \"UPPER\"\n\
             \x20   TIRS_STRAY_LIGHT_CORRECTION_SOURCE = \"TIRS\"\n\
             \x20 END_GROUP = MIN_MAX_RADIANCE\n\
             END_GROUP = L1_METADATA_FILE\n\
             END\n",
            base = BASE
        )
    }

    #[test]
    fn test_find_scene_id() {
        assert_eq!(
            find_scene_id(&sample_mtl()),
            Some("LC80420342017167LGN00".to_string())
        );
        assert_eq!(find_scene_id("GROUP = L1_METADATA_FILE\n"), None);
        assert_eq!(find_scene_id("LANDSAT_SCENE_ID = \"\"\n"), None);
    }

    #[test]
    fn test_rewrite_metadata() {
        let rewrite = rewrite_metadata(&sample_mtl(), BASE).unwrap();

        assert_eq!(rewrite.scene_id, "LC80420342017167LGN00");
        assert_eq!(rewrite.dropped_lines, 8);

        let expected = "GROUP = L1_METADATA_FILE\n\
             \x20 GROUP = METADATA_FILE_INFO\n\
             \x20   LANDSAT_SCENE_ID = \"LC80420342017167LGN00\"\n\
             \x20 END_GROUP = METADATA_FILE_INFO\n\
             \x20 GROUP = PRODUCT_METADATA\n\
             \x20   FILE_NAME_BAND_1 = \"LC80420342017167LGN00_B1.TIF\"\n\
             \x20   FILE_NAME_BAND_QUALITY = \"LC80420342017167LGN00_BQA.TIF\"\n\
             \x20   METADATA_FILE_NAME = \"LC80420342017167LGN00_MTL.txt\"\n\
             \x20 END_GROUP = PRODUCT_METADATA\n\
             \x20 GROUP = MIN_MAX_RADIANCE\n\
             \x20 END_GROUP = MIN_MAX_RADIANCE\n\
             END_GROUP = L1_METADATA_FILE\n\
             END\n";
        assert_eq!(rewrite.text, expected);
    }

    #[test]
    fn test_rewrite_keeps_crlf_line_endings() {
        let text = "LANDSAT_SCENE_ID = \"SCENE\"\r\nFILE = \"OLD_B1.TIF\"\r\nCOLLECTION_NUMBER = 01\r\n";
        let rewrite = rewrite_metadata(text, "OLD").unwrap();
        assert_eq!(
            rewrite.text,
            "LANDSAT_SCENE_ID = \"SCENE\"\r\nFILE = \"SCENE_B1.TIF\"\r\n"
        );
    }

    #[test]
    fn test_rewrite_without_scene_id_fails() {
        let result = rewrite_metadata("GROUP = L1_METADATA_FILE\nEND\n", BASE);
        assert!(matches!(result, Err(ProcessingError::MissingData(_))));
    }
}
