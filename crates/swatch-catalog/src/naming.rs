//! Naming of new catalog entries.
//!
//! Naming is a collaborator: the run hands it the distinct colors to create
//! and the names already taken, and gets back one unique name per color.

use std::collections::BTreeSet;

use serde::Serialize;
use swatch_core::CanonicalColor;

/// A color paired with the entry name it will be written under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedColor {
    /// Entry name
    pub name: String,
    /// Color to write
    pub color: CanonicalColor,
}

/// Assigns entry names to new colors.
pub trait ColorNamer {
    /// Returns one entry per color in `colors`, with names that are unique
    /// and not in `reserved`.
    fn assign_names(
        &self,
        colors: &BTreeSet<CanonicalColor>,
        reserved: &BTreeSet<String>,
    ) -> Vec<NamedColor>;
}

/// Names colors after their hex value: `Color1E90FF`, `Color000000A50`.
///
/// Translucent colors get `A` plus the rounded alpha percentage. Colors that
/// share a name (equal at 8 bits) or hit a reserved name get `-2`, `-3`, ...
///
/// ```rust
/// use std::collections::BTreeSet;
/// use swatch_catalog::{ColorNamer, HexNamer};
/// use swatch_core::CanonicalColor;
///
/// let colors = BTreeSet::from([CanonicalColor::new(1.0, 0.0, 0.0, 0.5)]);
/// let named = HexNamer.assign_names(&colors, &BTreeSet::from(["ColorFF0000A50".to_owned()]));
/// assert_eq!(named[0].name, "ColorFF0000A50-2");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct HexNamer;

impl HexNamer {
    /// Base name of a color, before collision handling.
    pub fn base_name(color: &CanonicalColor) -> String {
        if color.alpha() < 1.0 {
            format!("Color{}A{}", color.to_hex(), (color.alpha() * 100.0).round() as u32)
        } else {
            format!("Color{}", color.to_hex())
        }
    }
}

impl ColorNamer for HexNamer {
    fn assign_names(
        &self,
        colors: &BTreeSet<CanonicalColor>,
        reserved: &BTreeSet<String>,
    ) -> Vec<NamedColor> {
        let mut taken = reserved.clone();
        colors
            .iter()
            .map(|color| {
                let base = Self::base_name(color);
                let mut name = base.clone();
                let mut n = 2;
                while taken.contains(&name) {
                    name = format!("{base}-{n}");
                    n += 1;
                }
                taken.insert(name.clone());
                NamedColor {
                    name,
                    color: *color,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_names() {
        assert_eq!(HexNamer::base_name(&CanonicalColor::WHITE), "ColorFFFFFF");
        assert_eq!(
            HexNamer::base_name(&CanonicalColor::new(0.0, 0.0, 0.0, 0.6)),
            "Color000000A60"
        );
        assert_eq!(HexNamer::base_name(&CanonicalColor::ZERO), "Color000000A0");
    }

    #[test]
    fn test_one_name_per_distinct_color() {
        // Distinct colors that round to the same 8-bit hex.
        let colors = BTreeSet::from([
            CanonicalColor::new(0.5, 0.5, 0.5, 1.0),
            CanonicalColor::new(0.5000001, 0.5, 0.5, 1.0),
            CanonicalColor::WHITE,
        ]);
        let named = HexNamer.assign_names(&colors, &BTreeSet::new());
        assert_eq!(named.len(), 3);
        let names: BTreeSet<_> = named.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, BTreeSet::from(["Color808080", "Color808080-2", "ColorFFFFFF"]));
    }

    #[test]
    fn test_deterministic() {
        let colors = BTreeSet::from([CanonicalColor::WHITE, CanonicalColor::ZERO]);
        let reserved = BTreeSet::from(["ColorFFFFFF".to_owned()]);
        assert_eq!(
            HexNamer.assign_names(&colors, &reserved),
            HexNamer.assign_names(&colors, &reserved)
        );
    }
}
