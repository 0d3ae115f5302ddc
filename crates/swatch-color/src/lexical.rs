//! Textual component parsing.
//!
//! Asset catalogs write RGB components in one of three lexical forms, and
//! the form is decided once per record by looking at `red`:
//!
//! | `red` contains | Interpretation of red/green/blue | Example |
//! |----------------|----------------------------------|---------|
//! | `.` | decimal fraction in [0, 1] | `"0.502"` |
//! | `x` | last two characters as a hex byte, / 255 | `"0x80"` |
//! | neither | integer 0-255, / 255 | `"128"` |
//!
//! Alpha is always a decimal fraction. The rule is order dependent and
//! purely lexical; it is kept exactly as catalogs expect it.
//!
//! Interface-builder documents never use the byte forms (`red="1"` there
//! means full intensity), hence [`ComponentEncoding::Decimal`].

use serde::Serialize;
use swatch_core::{Error, RawColorComponents, Result};
use tracing::debug;

/// How RGB component strings are to be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComponentEncoding {
    /// Catalog content records: decimal, hex byte or integer byte, decided on `red`.
    #[default]
    Lexical,
    /// Source documents: every component is a decimal number.
    Decimal,
}

/// Lexical form of an RGB record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexicalForm {
    /// `0.0` to `1.0`
    Fraction,
    /// `0x00` to `0xFF`
    HexByte,
    /// `0` to `255`
    IntegerByte,
}

impl LexicalForm {
    /// Classifies a `red` component string.
    pub fn of(red: &str) -> Self {
        if red.contains('.') {
            Self::Fraction
        } else if red.contains('x') {
            Self::HexByte
        } else {
            Self::IntegerByte
        }
    }

    /// Reads one channel in this form; unparsable input yields `0.0`.
    pub fn read(&self, key: &str, value: &str) -> f64 {
        match self {
            Self::Fraction => decimal(key, Some(value)),
            Self::HexByte => {
                let byte = u8::from_str_radix(last_two_chars(value), 16).unwrap_or_else(|_| {
                    debug!(key, value, "unparsable hex component, using 0");
                    0
                });
                f64::from(byte) / 255.0
            }
            Self::IntegerByte => decimal(key, Some(value)) / 255.0,
        }
    }
}

/// Reads a decimal component, degrading to `0.0`.
///
/// Absent keys are expected and silent; present but malformed or non-finite
/// values are logged at debug level.
pub fn decimal(key: &str, value: Option<&str>) -> f64 {
    match value {
        None => 0.0,
        Some(v) => parse_decimal_strict(key, v).unwrap_or_else(|e| {
            debug!(error = %e, "malformed component, using 0");
            0.0
        }),
    }
}

/// Reads a decimal component, reporting why it was rejected.
///
/// ```rust
/// use swatch_color::lexical::parse_decimal_strict;
///
/// assert_eq!(parse_decimal_strict("white", "0.25").unwrap(), 0.25);
/// assert!(parse_decimal_strict("white", "quarter").is_err());
/// assert!(parse_decimal_strict("white", "NaN").is_err());
/// ```
pub fn parse_decimal_strict(key: &str, value: &str) -> Result<f64> {
    match value.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(Error::malformed(key, value)),
    }
}

/// Reads `red`, `green`, `blue` and `alpha` using the given encoding.
///
/// With [`ComponentEncoding::Lexical`] the record is all-or-nothing: if any
/// of the four keys is missing the result is `None` and callers degrade to the
/// zero color. With [`ComponentEncoding::Decimal`] each absent key reads as `0.0`.
pub fn read_rgba(
    components: &RawColorComponents,
    encoding: ComponentEncoding,
) -> Option<([f64; 3], f64)> {
    match encoding {
        ComponentEncoding::Lexical => {
            let red = components.get("red")?;
            let green = components.get("green")?;
            let blue = components.get("blue")?;
            let alpha = components.get("alpha")?;
            let form = LexicalForm::of(red);
            Some((
                [
                    form.read("red", red),
                    form.read("green", green),
                    form.read("blue", blue),
                ],
                decimal("alpha", Some(alpha)),
            ))
        }
        ComponentEncoding::Decimal => Some((
            [
                decimal("red", components.get("red")),
                decimal("green", components.get("green")),
                decimal("blue", components.get("blue")),
            ],
            decimal("alpha", components.get("alpha")),
        )),
    }
}

/// Reads the named components as decimals, absent keys as `0.0`.
pub fn read_decimals<const N: usize>(
    components: &RawColorComponents,
    keys: [&str; N],
) -> [f64; N] {
    keys.map(|key| decimal(key, components.get(key)))
}

/// Renders a component at full precision, always with a decimal point.
///
/// The point matters: without it a catalog reader would take `"1"` for the
/// integer byte 1/255.
///
/// ```rust
/// use swatch_color::lexical::format_component;
///
/// assert_eq!(format_component(1.0), "1.0");
/// assert_eq!(format_component(0.5019607843137255), "0.5019607843137255");
/// assert_eq!(format_component(0.0000001), "0.0000001");
/// ```
pub fn format_component(value: f64) -> String {
    let text = value.to_string();
    if text.contains('.') {
        text
    } else {
        format!("{text}.0")
    }
}

pub(crate) fn last_two_chars(s: &str) -> &str {
    match s.char_indices().rev().nth(1) {
        Some((i, _)) => &s[i..],
        None => s,
    }
}
