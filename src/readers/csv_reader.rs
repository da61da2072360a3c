use crate::error::{ProcessingError, Result};
use crate::models::Placemark;
use crate::utils::constants::{
    CANDIDATE_DELIMITERS, DECIMAL_COLUMNS, DMS_COLUMNS, SNIFF_SAMPLE_SIZE,
};
use csv::{ReaderBuilder, Trim};
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Labelled coordinates loaded from a comma, tab or space separated file
pub struct CsvFile {
    infile: PathBuf,
    positions_as_dms: bool,
    skip: usize,
    placemarks: Vec<Placemark>,
}

impl CsvFile {
    pub fn new(infile: impl AsRef<Path>) -> Self {
        Self {
            infile: infile.as_ref().to_path_buf(),
            positions_as_dms: false,
            skip: 0,
            placemarks: Vec::new(),
        }
    }

    pub fn with_dms(mut self, positions_as_dms: bool) -> Self {
        self.positions_as_dms = positions_as_dms;
        self
    }

    pub fn with_skip(mut self, skip: usize) -> Self {
        self.skip = skip;
        self
    }

    pub fn placemarks(&self) -> &[Placemark] {
        &self.placemarks
    }

    pub fn into_placemarks(self) -> Vec<Placemark> {
        self.placemarks
    }

    /// Read every record into a placemark
    pub fn load(&mut self) -> Result<usize> {
        let mut sample = Vec::with_capacity(SNIFF_SAMPLE_SIZE);
        File::open(&self.infile)?
            .take(SNIFF_SAMPLE_SIZE as u64)
            .read_to_end(&mut sample)?;
        let delimiter = sniff_delimiter(&sample, sample.len() == SNIFF_SAMPLE_SIZE)?;
        debug!("Using delimiter {:?}", delimiter as char);

        let mut reader = ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(false)
            .flexible(true)
            .trim(Trim::All)
            .from_path(&self.infile)?;

        let expected = if self.positions_as_dms {
            DMS_COLUMNS
        } else {
            DECIMAL_COLUMNS
        };

        for (index, record) in reader.records().enumerate() {
            let record = record?;
            if index < self.skip {
                debug!("Skipping header record {}", index + 1);
                continue;
            }

            let values: Vec<&str> = record.iter().filter(|v| !v.is_empty()).collect();
            if values.is_empty() {
                continue;
            }

            if values.len() != expected {
                let line = record.position().map_or(index as u64 + 1, |p| p.line());
                return Err(ProcessingError::InvalidFormat(format!(
                    "Line {}: expected {} columns, found {}",
                    line,
                    expected,
                    values.len()
                )));
            }

            let placemark = if self.positions_as_dms {
                Placemark::from_dms(
                    values[0],
                    [values[1], values[2], values[3]],
                    [values[4], values[5], values[6]],
                )?
            } else {
                Placemark::from_decimal(values[0], values[1], values[2])?
            };
            self.placemarks.push(placemark);
        }

        info!(
            "Loaded {} placemarks from {}",
            self.placemarks.len(),
            self.infile.display()
        );
        Ok(self.placemarks.len())
    }
}

/// Pick the delimiter that splits the most sample lines into the same
/// number of fields. Ties go to comma, then tab, then space.
pub fn sniff_delimiter(sample: &[u8], truncated: bool) -> Result<u8> {
    let text = String::from_utf8_lossy(sample);
    let mut lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
    if truncated && lines.len() > 1 {
        lines.pop();
    }

    let mut best: Option<(u8, usize)> = None;
    for &candidate in CANDIDATE_DELIMITERS.iter() {
        let mut frequencies: HashMap<usize, usize> = HashMap::new();
        for line in &lines {
            let count = line.trim().bytes().filter(|b| *b == candidate).count();
            if count > 0 {
                *frequencies.entry(count).or_default() += 1;
            }
        }

        let score = frequencies.values().copied().max().unwrap_or(0);
        if score > 0 && best.map_or(true, |(_, s)| score > s) {
            best = Some((candidate, score));
        }
    }

    best.map(|(delimiter, _)| delimiter).ok_or_else(|| {
        ProcessingError::InvalidFormat(
            "Could not determine delimiter; expected comma, tab or space separated values"
                .to_string(),
        )
    })
}
