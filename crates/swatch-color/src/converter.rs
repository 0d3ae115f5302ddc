//! Tag dispatch: raw components in, canonical sRGB out.
//!
//! # Pipeline per family
//!
//! ```text
//! srgb, device-rgb, calibrated-rgb    read -------------------------------> sanitize
//! display-p3                          read -> sRGB EOTF -> M(P3) -> clip -> sRGB OETF
//! adobe-rgb-1998                      read -> gamma 563/256 -> M(Adobe) -> clip -> sRGB OETF
//! extended-srgb                       read -> mirrored sRGB EOTF -> clip -> sRGB OETF
//! extended-linear-srgb                read -> clip -> sRGB OETF
//! gray gamma 2.2, calibrated-white    white^2.2 -> clip -> sRGB OETF
//! extended-gray                       mirrored white^2.2 -> clip -> sRGB OETF
//! device-white                        white ------------------------------> sanitize
//! generic-cmyk, device-cmyk           (1 - c)(1 - k) per channel ---------> sanitize
//! catalog                             lookup(catalog, name) or zero
//! legacy system colors                fixed constant
//! ```
//!
//! Conversion is total. Absent or malformed input never fails; it degrades
//! toward [`CanonicalColor::ZERO`] component by component.

use std::sync::LazyLock;

use swatch_core::{CanonicalColor, ColorSpaceTag, Error, RawColorComponents, Result};
use swatch_math::{Mat3, Vec3};
use swatch_primaries::{ADOBE_RGB, DISPLAY_P3, SRGB, rgb_to_rgb_matrix};
use swatch_transfer::{gamma, srgb};
use tracing::{debug, trace};

use crate::catalog::{CatalogLookup, NoCatalog};
use crate::lexical::{self, ComponentEncoding, LexicalForm};
use crate::system::legacy_color;

static P3_TO_SRGB: LazyLock<Mat3> = LazyLock::new(|| rgb_to_rgb_matrix(&DISPLAY_P3, &SRGB));
static ADOBE_TO_SRGB: LazyLock<Mat3> = LazyLock::new(|| rgb_to_rgb_matrix(&ADOBE_RGB, &SRGB));

/// Keys that only some color spaces read; a normalized record drops them.
pub const SPACE_SPECIFIC_COMPONENTS: &[&str] =
    &["white", "cyan", "magenta", "yellow", "black", "catalog", "name"];

/// Color space converter with a catalog collaborator.
///
/// The default converter resolves no catalog names.
///
/// ```rust
/// use swatch_color::ColorSpaceConverter;
/// use swatch_core::{ColorSpaceTag, RawColorComponents};
///
/// let converter = ColorSpaceConverter::new();
/// let cyan = RawColorComponents::from_pairs([
///     ("cyan", "1"), ("magenta", "0"), ("yellow", "0"), ("black", "0"), ("alpha", "1"),
/// ]);
/// let color = converter.convert(ColorSpaceTag::GenericCmyk, &cyan);
/// assert_eq!(color.to_array(), [0.0, 1.0, 1.0, 1.0]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ColorSpaceConverter<L = NoCatalog> {
    lookup: L,
}

impl ColorSpaceConverter {
    /// Creates a converter without catalog names.
    pub fn new() -> Self {
        Self { lookup: NoCatalog }
    }
}

impl<L: CatalogLookup> ColorSpaceConverter<L> {
    /// Creates a converter resolving `catalog` colors through `lookup`.
    pub fn with_lookup(lookup: L) -> Self {
        Self { lookup }
    }

    /// The catalog collaborator.
    pub fn lookup(&self) -> &L {
        &self.lookup
    }

    /// Converts a catalog content record (lexical RGB encoding).
    pub fn convert(&self, tag: ColorSpaceTag, components: &RawColorComponents) -> CanonicalColor {
        self.convert_with(tag, components, ComponentEncoding::Lexical)
    }

    /// Converts with an explicit RGB encoding.
    ///
    /// The encoding only affects the RGB families; gray, CMYK and alpha
    /// components are always decimal.
    pub fn convert_with(
        &self,
        tag: ColorSpaceTag,
        components: &RawColorComponents,
        encoding: ComponentEncoding,
    ) -> CanonicalColor {
        let color = match tag {
            ColorSpaceTag::Srgb | ColorSpaceTag::CalibratedRgb | ColorSpaceTag::DeviceRgb => {
                rgb(components, encoding, |v| v)
            }
            ColorSpaceTag::DisplayP3 => rgb(components, encoding, |v| {
                through_primaries(v, srgb::eotf, &P3_TO_SRGB)
            }),
            ColorSpaceTag::AdobeRgb1998 => rgb(components, encoding, |v| {
                through_primaries(v, gamma::adobe_rgb_eotf, &ADOBE_TO_SRGB)
            }),
            ColorSpaceTag::ExtendedSrgb => rgb(components, encoding, |v| {
                v.map(srgb::eotf_extended).clamp01().map(srgb::oetf)
            }),
            ColorSpaceTag::ExtendedLinearSrgb => {
                rgb(components, encoding, |v| v.clamp01().map(srgb::oetf))
            }
            ColorSpaceTag::GrayGamma22
            | ColorSpaceTag::GenericGrayGamma22
            | ColorSpaceTag::CalibratedWhite => gray(components, |w| {
                srgb::oetf(gamma::eotf_22(w).clamp(0.0, 1.0))
            }),
            ColorSpaceTag::ExtendedGray => gray(components, |w| {
                srgb::oetf(gamma::gamma_eotf_mirrored(w, gamma::GRAY_GAMMA).clamp(0.0, 1.0))
            }),
            ColorSpaceTag::DeviceWhite => gray(components, |w| w),
            ColorSpaceTag::GenericCmyk | ColorSpaceTag::DeviceCmyk => cmyk(components),
            ColorSpaceTag::Catalog => self.named(components),
            ColorSpaceTag::System(legacy) => legacy_color(legacy),
        };
        trace!(%tag, %color, "converted");
        color
    }

    /// Converts a source-document color and rewrites its components in place.
    ///
    /// Space-specific keys are removed and `red`, `green`, `blue`, `alpha`
    /// are set to the canonical values at full precision. Source documents
    /// always encode decimals.
    pub fn normalize(
        &self,
        tag: ColorSpaceTag,
        components: &mut RawColorComponents,
    ) -> CanonicalColor {
        let color = self.convert_with(tag, components, ComponentEncoding::Decimal);
        for key in SPACE_SPECIFIC_COMPONENTS {
            components.remove(key);
        }
        for (key, value) in ["red", "green", "blue", "alpha"].into_iter().zip(color.to_array()) {
            components.insert(key, lexical::format_component(value));
        }
        color
    }

    fn named(&self, components: &RawColorComponents) -> CanonicalColor {
        let (Some(catalog), Some(name)) = (components.get("catalog"), components.get("name"))
        else {
            debug!("catalog color without catalog/name, using zero");
            return CanonicalColor::ZERO;
        };
        self.lookup.resolve(catalog, name).unwrap_or_else(|| {
            debug!(catalog, name, "unresolved catalog color, using zero");
            CanonicalColor::ZERO
        })
    }
}

/// Converts a catalog content record with the default converter.
///
/// ```rust
/// use swatch_color::convert;
/// use swatch_core::{ColorSpaceTag, RawColorComponents};
///
/// let c = RawColorComponents::from_pairs([
///     ("red", "0x80"), ("green", "0x80"), ("blue", "0x80"), ("alpha", "1"),
/// ]);
/// assert_eq!(convert(ColorSpaceTag::Srgb, &c).to_hex(), "808080");
/// ```
pub fn convert(tag: ColorSpaceTag, components: &RawColorComponents) -> CanonicalColor {
    ColorSpaceConverter::new().convert(tag, components)
}

/// Normalizes source-document components in place with the default converter.
pub fn normalize_components(
    tag: ColorSpaceTag,
    components: &mut RawColorComponents,
) -> CanonicalColor {
    ColorSpaceConverter::new().normalize(tag, components)
}

/// Strictly validates the components `tag` reads.
///
/// Conversion itself never fails; this reports the first absent or
/// malformed component for callers that want to warn about it.
pub fn check_components(
    tag: ColorSpaceTag,
    components: &RawColorComponents,
    encoding: ComponentEncoding,
) -> Result<()> {
    let required = tag.required_components();
    for key in required {
        if !components.contains(key) {
            return Err(Error::MissingComponent((*key).to_owned()));
        }
    }
    let form = match (encoding, components.get("red")) {
        (ComponentEncoding::Lexical, Some(red)) => LexicalForm::of(red),
        _ => LexicalForm::Fraction,
    };
    for key in required {
        let Some(value) = components.get(key) else {
            continue;
        };
        match *key {
            "catalog" | "name" => {}
            "red" | "green" | "blue" if form == LexicalForm::HexByte => {
                u8::from_str_radix(lexical::last_two_chars(value), 16)
                    .map_err(|_| Error::malformed(*key, value))?;
            }
            _ => {
                lexical::parse_decimal_strict(key, value)?;
            }
        }
    }
    Ok(())
}

fn rgb(
    components: &RawColorComponents,
    encoding: ComponentEncoding,
    transform: impl Fn(Vec3) -> Vec3,
) -> CanonicalColor {
    match lexical::read_rgba(components, encoding) {
        Some((values, alpha)) => CanonicalColor::from_rgb(transform(Vec3::from(values)).into(), alpha),
        None => {
            debug!("incomplete rgba record, using zero");
            CanonicalColor::ZERO
        }
    }
}

fn gray(components: &RawColorComponents, transform: impl Fn(f64) -> f64) -> CanonicalColor {
    let [white, alpha] = lexical::read_decimals(components, ["white", "alpha"]);
    CanonicalColor::gray(transform(white), alpha)
}

fn cmyk(components: &RawColorComponents) -> CanonicalColor {
    let [c, m, y, k, alpha] =
        lexical::read_decimals(components, ["cyan", "magenta", "yellow", "black", "alpha"]);
    let ink = |v: f64| (1.0 - v) * (1.0 - k);
    CanonicalColor::new(ink(c), ink(m), ink(y), alpha)
}

fn through_primaries(encoded: Vec3, decode: fn(f64) -> f64, to_srgb: &Mat3) -> Vec3 {
    let linear = *to_srgb * encoded.map(decode);
    linear.clamp01().map(srgb::oetf)
}
