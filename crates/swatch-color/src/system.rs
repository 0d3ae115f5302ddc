//! Legacy system color constants.
//!
//! Six named colors from the retired platform palette, reproduced with the
//! exact literal values the platform published for them. They take no input
//! components.

use swatch_core::{CanonicalColor, LegacySystemColor};

#[allow(clippy::excessive_precision)]
const LEGACY_TABLE: [(LegacySystemColor, [f64; 4]); 6] = [
    // Gray gamma 2.2, white 0: black in every encoding.
    (LegacySystemColor::DarkText, [0.0, 0.0, 0.0, 1.0]),
    (
        LegacySystemColor::GroupTableBackground,
        [0.93725490199999995, 0.93725490199999995, 0.95686274510000002, 1.0],
    ),
    (LegacySystemColor::LightText, [1.0, 1.0, 1.0, 0.59999999999999998]),
    (
        LegacySystemColor::ScrollViewTexturedBackground,
        [0.43529411759999997, 0.4431372549, 0.47450980390000003, 1.0],
    ),
    (LegacySystemColor::TableCellGroupedBackground, [1.0, 1.0, 1.0, 1.0]),
    (
        LegacySystemColor::ViewFlipsideBackground,
        [0.1215686275, 0.12941176469999999, 0.14117647059999999, 1.0],
    ),
];

/// Canonical value of a legacy system color.
///
/// ```rust
/// use swatch_color::system::legacy_color;
/// use swatch_core::{CanonicalColor, LegacySystemColor};
///
/// assert_eq!(legacy_color(LegacySystemColor::TableCellGroupedBackground), CanonicalColor::WHITE);
/// ```
pub fn legacy_color(color: LegacySystemColor) -> CanonicalColor {
    LEGACY_TABLE
        .iter()
        .find(|(c, _)| *c == color)
        .map(|(_, [r, g, b, a])| CanonicalColor::new(*r, *g, *b, *a))
        .unwrap_or(CanonicalColor::ZERO)
}
