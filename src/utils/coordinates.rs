use crate::error::{ProcessingError, Result};

/// Convert a degree, minute, second triple to decimal degrees
///
/// Each part may carry decoration such as `45°`, `30'` or `15"N`; only the
/// digits and the decimal point are kept. The result is negative when the
/// degree part starts with `-` or a part carries a standalone `S` or `W`
/// hemisphere letter. Unit words such as `15s` or `30 min` do not count.
///
/// # Examples
/// ```
/// use seadas_prep::utils::dms_to_decimal;
///
/// let decimal = dms_to_decimal(["50", "30", "15"]).unwrap();
/// assert!((decimal - 50.504167).abs() < 0.000001);
/// ```
pub fn dms_to_decimal(dms: [&str; 3]) -> Result<f64> {
    let is_negative =
        dms[0].trim_start().starts_with('-') || dms.iter().any(|part| is_south_or_west(part));

    let degrees = pure_number(dms[0], "degrees")?;
    let minutes = pure_number(dms[1], "minutes")?;
    let seconds = pure_number(dms[2], "seconds")?;

    let decimal_value = degrees + minutes / 60.0 + seconds / 3600.0;

    if is_negative {
        Ok(-decimal_value)
    } else {
        Ok(decimal_value)
    }
}

/// The part's text once digits, signs and angle marks are removed is
/// exactly `S` or `W`
fn is_south_or_west(part: &str) -> bool {
    let letters: String = part
        .chars()
        .filter(|c| {
            !(c.is_ascii_digit()
                || c.is_whitespace()
                || matches!(*c, '.' | '-' | '+' | '\'' | '"' | '°' | 'º' | '′' | '″'))
        })
        .collect();

    letters == "S" || letters == "W"
}

fn pure_number(part: &str, what: &str) -> Result<f64> {
    let digits: String = part
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    digits.parse::<f64>().map_err(|_| {
        ProcessingError::InvalidCoordinate(format!("Invalid {} value: '{}'", what, part))
    })
}

/// Parse a coordinate already expressed in decimal degrees
pub fn parse_decimal(coord_str: &str) -> Result<f64> {
    let trimmed = coord_str.trim();
    trimmed.parse::<f64>().map_err(|_| {
        ProcessingError::InvalidCoordinate(format!("Invalid coordinate value: '{}'", coord_str))
    })
}

/// Render decimal degrees as the shortest round-trip float in positional
/// notation, always with a decimal point (`10.0`, `0.00001`)
pub fn format_degrees(value: f64) -> String {
    let rendered = value.to_string();
    if rendered.contains('.') || !value.is_finite() {
        rendered
    } else {
        format!("{}.0", rendered)
    }
}
