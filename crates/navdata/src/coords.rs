//! Coordinate text parsing.
//!
//! Two notations are accepted:
//! - hemisphere-prefixed degrees, optionally followed by a degree sign:
//!   `S41.3319°`, `E174.8056`
//! - signed decimal degrees: `-41.3319`

/// Which axis a coordinate belongs to, for hemisphere letter checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    fn hemispheres(self) -> (char, char) {
        match self {
            Axis::Latitude => ('N', 'S'),
            Axis::Longitude => ('E', 'W'),
        }
    }
}

/// Parse a coordinate in either accepted notation.
///
/// Returns `None` for text that matches neither. Range checking is left to
/// the caller.
pub fn parse_coordinate(text: &str, axis: Axis) -> Option<f64> {
    let text = text.trim();
    let (positive, negative) = axis.hemispheres();

    let mut chars = text.chars();
    let first = chars.next()?.to_ascii_uppercase();
    if first == positive || first == negative {
        let magnitude = parse_degrees(chars.as_str())?;
        return Some(if first == negative { -magnitude } else { magnitude });
    }

    let value: f64 = text.trim_end_matches('°').trim().parse().ok()?;
    value.is_finite().then_some(value)
}

/// Unsigned decimal degrees with a mandatory fractional part, as written
/// after a hemisphere letter.
fn parse_degrees(text: &str) -> Option<f64> {
    let digits = text.trim_end_matches('°').trim();
    let (whole, fraction) = digits.split_once('.')?;
    if whole.is_empty()
        || fraction.is_empty()
        || !whole.bytes().all(|b| b.is_ascii_digit())
        || !fraction.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }
    digits.parse().ok()
}
