//! Color space tags.
//!
//! A [`ColorSpaceTag`] identifies how the components of a raw color record
//! are to be interpreted. Every tag maps to exactly one conversion in
//! `swatch-color`; adding a variant here is a compile error there until the
//! new space is handled.
//!
//! # Supported Tags
//!
//! | Tag | Components | Family |
//! |-----|------------|--------|
//! | `srgb` | red, green, blue, alpha | RGB |
//! | `extended-srgb` | red, green, blue, alpha | RGB (extended range) |
//! | `extended-linear-srgb` | red, green, blue, alpha | RGB (linear, extended) |
//! | `display-p3` | red, green, blue, alpha | RGB (wide gamut) |
//! | `adobe-rgb-1998` | red, green, blue, alpha | RGB (wide gamut) |
//! | `gray-gamma-2.2` | white, alpha | Gray |
//! | `extended-gray` | white, alpha | Gray (extended range) |
//! | `calibrated-white` | white, alpha | Gray |
//! | `device-white` | white, alpha | Gray |
//! | `generic-gray-gamma-2.2` | white, alpha | Gray |
//! | `calibrated-rgb` | red, green, blue, alpha | RGB |
//! | `device-rgb` | red, green, blue, alpha | RGB |
//! | `generic-cmyk` | cyan, magenta, yellow, black, alpha | CMYK |
//! | `device-cmyk` | cyan, magenta, yellow, black, alpha | CMYK |
//! | `catalog` | catalog, name | Named lookup |
//! | `dark-text`, ... | none | Legacy system constant |

use crate::error::Error;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Components of an RGB record.
pub const RGB_COMPONENTS: &[&str] = &["red", "green", "blue", "alpha"];
/// Components of a gray record.
pub const GRAY_COMPONENTS: &[&str] = &["white", "alpha"];
/// Components of a CMYK record.
pub const CMYK_COMPONENTS: &[&str] = &["cyan", "magenta", "yellow", "black", "alpha"];
/// Components of a catalog record.
pub const CATALOG_COMPONENTS: &[&str] = &["catalog", "name"];

/// The six legacy named system colors.
///
/// They have no colorimetric derivation; each maps to a fixed literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LegacySystemColor {
    /// Dark text color.
    DarkText,
    /// Grouped table view background.
    GroupTableBackground,
    /// Light text color.
    LightText,
    /// Textured scroll view background.
    ScrollViewTexturedBackground,
    /// Grouped table cell background.
    TableCellGroupedBackground,
    /// Flipside view background.
    ViewFlipsideBackground,
}

impl LegacySystemColor {
    /// All legacy colors in declaration order.
    pub const ALL: [Self; 6] = [
        Self::DarkText,
        Self::GroupTableBackground,
        Self::LightText,
        Self::ScrollViewTexturedBackground,
        Self::TableCellGroupedBackground,
        Self::ViewFlipsideBackground,
    ];

    /// Tag identifier (`dark-text`, ...).
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::DarkText => "dark-text",
            Self::GroupTableBackground => "group-table-background",
            Self::LightText => "light-text",
            Self::ScrollViewTexturedBackground => "scroll-view-textured-background",
            Self::TableCellGroupedBackground => "table-cell-grouped-background",
            Self::ViewFlipsideBackground => "view-flipside-background",
        }
    }

    /// Identifier used by interface-builder documents (`darkTextColor`, ...).
    pub const fn document_name(&self) -> &'static str {
        match self {
            Self::DarkText => "darkTextColor",
            Self::GroupTableBackground => "groupTableViewBackgroundColor",
            Self::LightText => "lightTextColor",
            Self::ScrollViewTexturedBackground => "scrollViewTexturedBackgroundColor",
            Self::TableCellGroupedBackground => "tableCellGroupedBackgroundColor",
            Self::ViewFlipsideBackground => "viewFlipsideBackgroundColor",
        }
    }

    /// Looks up a legacy color by its document identifier.
    pub fn from_document_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.document_name() == name)
    }
}

/// Input color space of a raw color record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ColorSpaceTag {
    /// sRGB, already canonical.
    Srgb,
    /// Extended-range sRGB (values may leave [0, 1]).
    ExtendedSrgb,
    /// Extended-range linear sRGB.
    ExtendedLinearSrgb,
    /// Display P3 (P3 primaries, D65, sRGB curve).
    DisplayP3,
    /// Adobe RGB (1998).
    AdobeRgb1998,
    /// Gray with gamma 2.2.
    GrayGamma22,
    /// Extended-range gray with gamma 2.2.
    ExtendedGray,
    /// Calibrated white (gray, gamma 2.2).
    CalibratedWhite,
    /// Device white (gray, treated as display encoded).
    DeviceWhite,
    /// Generic gray with gamma 2.2.
    GenericGrayGamma22,
    /// Calibrated RGB (treated as sRGB).
    CalibratedRgb,
    /// Device RGB (treated as sRGB).
    DeviceRgb,
    /// Generic CMYK.
    GenericCmyk,
    /// Device CMYK.
    DeviceCmyk,
    /// Named color from a platform color list.
    Catalog,
    /// One of the six legacy system colors.
    System(LegacySystemColor),
}

impl ColorSpaceTag {
    /// Every tag, system colors included.
    pub const ALL: [Self; 21] = [
        Self::Srgb,
        Self::ExtendedSrgb,
        Self::ExtendedLinearSrgb,
        Self::DisplayP3,
        Self::AdobeRgb1998,
        Self::GrayGamma22,
        Self::ExtendedGray,
        Self::CalibratedWhite,
        Self::DeviceWhite,
        Self::GenericGrayGamma22,
        Self::CalibratedRgb,
        Self::DeviceRgb,
        Self::GenericCmyk,
        Self::DeviceCmyk,
        Self::Catalog,
        Self::System(LegacySystemColor::DarkText),
        Self::System(LegacySystemColor::GroupTableBackground),
        Self::System(LegacySystemColor::LightText),
        Self::System(LegacySystemColor::ScrollViewTexturedBackground),
        Self::System(LegacySystemColor::TableCellGroupedBackground),
        Self::System(LegacySystemColor::ViewFlipsideBackground),
    ];

    /// Canonical identifier string.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Srgb => "srgb",
            Self::ExtendedSrgb => "extended-srgb",
            Self::ExtendedLinearSrgb => "extended-linear-srgb",
            Self::DisplayP3 => "display-p3",
            Self::AdobeRgb1998 => "adobe-rgb-1998",
            Self::GrayGamma22 => "gray-gamma-2.2",
            Self::ExtendedGray => "extended-gray",
            Self::CalibratedWhite => "calibrated-white",
            Self::DeviceWhite => "device-white",
            Self::GenericGrayGamma22 => "generic-gray-gamma-2.2",
            Self::CalibratedRgb => "calibrated-rgb",
            Self::DeviceRgb => "device-rgb",
            Self::GenericCmyk => "generic-cmyk",
            Self::DeviceCmyk => "device-cmyk",
            Self::Catalog => "catalog",
            Self::System(c) => c.as_str(),
        }
    }

    /// Component keys this tag reads.
    pub const fn required_components(&self) -> &'static [&'static str] {
        match self {
            Self::Srgb
            | Self::ExtendedSrgb
            | Self::ExtendedLinearSrgb
            | Self::DisplayP3
            | Self::AdobeRgb1998
            | Self::CalibratedRgb
            | Self::DeviceRgb => RGB_COMPONENTS,
            Self::GrayGamma22
            | Self::ExtendedGray
            | Self::CalibratedWhite
            | Self::DeviceWhite
            | Self::GenericGrayGamma22 => GRAY_COMPONENTS,
            Self::GenericCmyk | Self::DeviceCmyk => CMYK_COMPONENTS,
            Self::Catalog => CATALOG_COMPONENTS,
            Self::System(_) => &[],
        }
    }

    /// Returns `true` when the components may leave [0, 1] before conversion.
    #[inline]
    pub const fn is_extended(&self) -> bool {
        matches!(
            self,
            Self::ExtendedSrgb | Self::ExtendedLinearSrgb | Self::ExtendedGray
        )
    }

    /// Returns `true` for single-channel gray spaces.
    #[inline]
    pub const fn is_gray(&self) -> bool {
        matches!(
            self,
            Self::GrayGamma22
                | Self::ExtendedGray
                | Self::CalibratedWhite
                | Self::DeviceWhite
                | Self::GenericGrayGamma22
        )
    }
}

impl fmt::Display for ColorSpaceTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorSpaceTag {
    type Err = Error;

    /// Parses a tag identifier. Asset catalogs spell gray gamma as
    /// `gray-gamma-22`; both spellings are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gray-gamma-22" => return Ok(Self::GrayGamma22),
            "generic-gray-gamma-22" => return Ok(Self::GenericGrayGamma22),
            _ => {}
        }
        Self::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| Error::UnknownColorSpace(s.to_string()))
    }
}

impl Serialize for ColorSpaceTag {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_tag_roundtrips_through_its_name() {
        for tag in ColorSpaceTag::ALL {
            assert_eq!(tag.as_str().parse::<ColorSpaceTag>().unwrap(), tag);
        }
    }

    #[test]
    fn test_catalog_spelling_alias() {
        assert_eq!(
            "gray-gamma-22".parse::<ColorSpaceTag>().unwrap(),
            ColorSpaceTag::GrayGamma22
        );
    }

    #[test]
    fn test_unknown_tag() {
        assert_eq!(
            "lab".parse::<ColorSpaceTag>(),
            Err(Error::UnknownColorSpace("lab".into()))
        );
    }

    #[test]
    fn test_required_components() {
        assert_eq!(ColorSpaceTag::DeviceCmyk.required_components().len(), 5);
        assert!(ColorSpaceTag::CalibratedWhite.is_gray());
        assert!(!ColorSpaceTag::DisplayP3.is_gray());
        assert!(ColorSpaceTag::ExtendedGray.is_gray() && ColorSpaceTag::ExtendedGray.is_extended());
        assert!(!ColorSpaceTag::Srgb.is_extended());
        assert!(ColorSpaceTag::System(LegacySystemColor::DarkText)
            .required_components()
            .is_empty());
    }

    #[test]
    fn test_document_names() {
        assert_eq!(
            LegacySystemColor::from_document_name("lightTextColor"),
            Some(LegacySystemColor::LightText)
        );
        assert_eq!(LegacySystemColor::from_document_name("redColor"), None);
    }
}
