use crate::error::Result;
use crate::utils::coordinates::{dms_to_decimal, parse_decimal};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Placemark {
    #[validate(length(min = 1))]
    pub label: String,

    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
}

impl Placemark {
    pub fn new(label: String, latitude: f64, longitude: f64) -> Result<Self> {
        let placemark = Self {
            label,
            latitude,
            longitude,
        };
        placemark.validate()?;
        Ok(placemark)
    }

    /// Build from positions already in decimal degrees
    pub fn from_decimal(label: &str, lat: &str, lon: &str) -> Result<Self> {
        Self::new(label.to_string(), parse_decimal(lat)?, parse_decimal(lon)?)
    }

    /// Build from degree, minute, second triples
    pub fn from_dms(label: &str, lat: [&str; 3], lon: [&str; 3]) -> Result<Self> {
        Self::new(
            label.to_string(),
            dms_to_decimal(lat)?,
            dms_to_decimal(lon)?,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProcessingError;

    #[test]
    fn test_from_decimal() {
        let placemark = Placemark::from_decimal("Station A", "51.5074", "-0.1278").unwrap();
        assert_eq!(placemark.label, "Station A");
        assert!((placemark.latitude - 51.5074).abs() < 0.000001);
        assert!((placemark.longitude - -0.1278).abs() < 0.000001);
    }

    #[test]
    fn test_from_dms() {
        let placemark =
            Placemark::from_dms("Buoy 7", ["36", "48", "0"], ["-121", "54", "36"]).unwrap();
        assert!((placemark.latitude - 36.8).abs() < 0.000001);
        assert!((placemark.longitude - -121.91).abs() < 0.000001);
    }

    #[test]
    fn test_invalid_coordinates() {
        assert!(matches!(
            Placemark::from_decimal("Bad", "91.0", "0.0"),
            Err(ProcessingError::Validation(_))
        ));
        assert!(matches!(
            Placemark::from_decimal("Bad", "0.0", "180.5"),
            Err(ProcessingError::Validation(_))
        ));
        assert!(matches!(
            Placemark::from_decimal("Bad", "north", "0.0"),
            Err(ProcessingError::InvalidCoordinate(_))
        ));
    }

    #[test]
    fn test_empty_label_rejected() {
        assert!(Placemark::from_decimal("", "10.0", "10.0").is_err());
    }
}
