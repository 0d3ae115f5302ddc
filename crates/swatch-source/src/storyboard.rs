//! Interface-builder document (storyboard) color normalization.
//!
//! Every `<color>` element is examined. Its color space is resolved from the
//! element attributes:
//!
//! | Attribute | Value | Tag |
//! |-----------|-------|-----|
//! | `cocoaTouchSystemColor` | `darkTextColor`, ... | legacy system color |
//! | `customColorSpace` | `sRGB` | already canonical |
//! | `colorSpace` | `calibratedWhite` / `deviceWhite` | calibrated / device white |
//! | `colorSpace` | `calibratedRGB` / `deviceRGB` | calibrated / device RGB |
//! | `colorSpace` | `deviceCMYK` | device CMYK |
//! | `colorSpace` | `catalog` | named catalog color |
//! | `customColorSpace` | `genericGamma22GrayColorSpace` | generic gray gamma 2.2 |
//! | `customColorSpace` | `displayP3` / `adobeRGB1998` | Display P3 / Adobe RGB |
//! | `customColorSpace` | `genericCMYKColorSpace` | generic CMYK |
//!
//! Converted elements are rewritten as `colorSpace="custom"
//! customColorSpace="sRGB"` with decimal `red`, `green`, `blue`, `alpha`.
//! Everything else in the document, including the other attributes of a
//! rewritten element, is written back byte for byte.

use quick_xml::events::{BytesStart, Event};
use quick_xml::{Reader, Writer};
use swatch_color::{CatalogLookup, ColorSpaceConverter, ComponentEncoding};
use swatch_core::{CanonicalColor, ColorSpaceTag, LegacySystemColor, RawColorComponents};
use tracing::{debug, trace};

use crate::error::{SourceError, SourceResult};

const COLOR_ELEMENT: &[u8] = b"color";
const SYSTEM_COLOR_ATTR: &str = "cocoaTouchSystemColor";
const COLOR_SPACE_ATTR: &str = "colorSpace";
const CUSTOM_COLOR_SPACE_ATTR: &str = "customColorSpace";

/// How a `<color>` element is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorElement {
    /// Already sRGB: collected, left as is.
    Canonical,
    /// Converted from the given color space and rewritten.
    Convert(ColorSpaceTag),
    /// Not a color space this tool understands: left untouched.
    Unrecognized,
}

impl ColorElement {
    /// Resolves the handling of an element from its attributes.
    ///
    /// ```rust
    /// use swatch_core::{ColorSpaceTag, RawColorComponents};
    /// use swatch_source::storyboard::ColorElement;
    ///
    /// let attrs = RawColorComponents::from_pairs([("colorSpace", "custom"), ("customColorSpace", "displayP3")]);
    /// assert_eq!(ColorElement::classify(&attrs), ColorElement::Convert(ColorSpaceTag::DisplayP3));
    /// ```
    pub fn classify(attrs: &RawColorComponents) -> Self {
        if let Some(system) = attrs.get(SYSTEM_COLOR_ATTR).filter(|s| !s.is_empty()) {
            return match LegacySystemColor::from_document_name(system) {
                Some(legacy) => Self::Convert(ColorSpaceTag::System(legacy)),
                None => Self::Unrecognized,
            };
        }
        let custom = attrs.get(CUSTOM_COLOR_SPACE_ATTR).unwrap_or_default();
        if custom == "sRGB" {
            return Self::Canonical;
        }
        let tag = match attrs.get(COLOR_SPACE_ATTR).unwrap_or_default() {
            "calibratedWhite" => Some(ColorSpaceTag::CalibratedWhite),
            "deviceWhite" => Some(ColorSpaceTag::DeviceWhite),
            "calibratedRGB" => Some(ColorSpaceTag::CalibratedRgb),
            "deviceRGB" => Some(ColorSpaceTag::DeviceRgb),
            "deviceCMYK" => Some(ColorSpaceTag::DeviceCmyk),
            "catalog" => Some(ColorSpaceTag::Catalog),
            _ => match custom {
                "genericGamma22GrayColorSpace" => Some(ColorSpaceTag::GenericGrayGamma22),
                "displayP3" => Some(ColorSpaceTag::DisplayP3),
                "adobeRGB1998" => Some(ColorSpaceTag::AdobeRgb1998),
                "genericCMYKColorSpace" => Some(ColorSpaceTag::GenericCmyk),
                _ => None,
            },
        };
        tag.map_or(Self::Unrecognized, Self::Convert)
    }
}

/// Result of normalizing one document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoryboardScan {
    /// Canonical colors found, in document order (duplicates included).
    pub colors: Vec<CanonicalColor>,
    /// Rewritten document text, present only when some element changed.
    pub rewritten: Option<String>,
    /// Number of elements rewritten.
    pub converted: usize,
}

impl StoryboardScan {
    /// Returns `true` when the document needs to be written back.
    pub fn is_modified(&self) -> bool {
        self.rewritten.is_some()
    }
}

/// Collects and normalizes every `<color>` element of a storyboard.
///
/// Catalog colors the converter cannot resolve are left untouched and not
/// collected, so a missing lookup never erases a reference.
///
/// ```rust
/// use swatch_color::ColorSpaceConverter;
/// use swatch_source::storyboard::normalize_storyboard;
///
/// let xml = r#"<view><color key="backgroundColor" white="1" alpha="1" colorSpace="deviceWhite"/></view>"#;
/// let scan = normalize_storyboard(xml, &ColorSpaceConverter::new()).unwrap();
/// assert_eq!(scan.colors.len(), 1);
/// assert_eq!(
///     scan.rewritten.as_deref(),
///     Some(r#"<view><color key="backgroundColor" alpha="1.0" colorSpace="custom" red="1.0" green="1.0" blue="1.0" customColorSpace="sRGB"/></view>"#),
/// );
/// ```
pub fn normalize_storyboard<L: CatalogLookup>(
    xml: &str,
    converter: &ColorSpaceConverter<L>,
) -> SourceResult<StoryboardScan> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(false);
    let mut writer = Writer::new(Vec::with_capacity(xml.len()));
    let mut scan = StoryboardScan::default();

    loop {
        let event = reader.read_event().map_err(|e| SourceError::Xml {
            path: None,
            position: reader.buffer_position() as u64,
            message: e.to_string(),
        })?;
        let event = match event {
            Event::Eof => break,
            Event::Start(e) if e.name().as_ref() == COLOR_ELEMENT => {
                Event::Start(visit_color(e, converter, &mut scan))
            }
            Event::Empty(e) if e.name().as_ref() == COLOR_ELEMENT => {
                Event::Empty(visit_color(e, converter, &mut scan))
            }
            other => other,
        };
        writer.write_event(event).map_err(|e| SourceError::Xml {
            path: None,
            position: reader.buffer_position() as u64,
            message: format!("write error: {e}"),
        })?;
    }

    if scan.converted > 0 {
        let bytes = writer.into_inner();
        let text = String::from_utf8(bytes).map_err(|e| SourceError::Xml {
            path: None,
            position: e.utf8_error().valid_up_to() as u64,
            message: e.to_string(),
        })?;
        scan.rewritten = Some(text);
    }
    debug!(
        colors = scan.colors.len(),
        converted = scan.converted,
        "storyboard scanned"
    );
    Ok(scan)
}

/// Handles one `<color>` element, returning the element to write back.
fn visit_color<'a, L: CatalogLookup>(
    element: BytesStart<'a>,
    converter: &ColorSpaceConverter<L>,
    scan: &mut StoryboardScan,
) -> BytesStart<'a> {
    let attrs = attributes(&element);
    match ColorElement::classify(&attrs) {
        ColorElement::Unrecognized => element,
        ColorElement::Canonical => {
            let color =
                converter.convert_with(ColorSpaceTag::Srgb, &attrs, ComponentEncoding::Decimal);
            scan.colors.push(color);
            element
        }
        ColorElement::Convert(ColorSpaceTag::Catalog) if !resolves(&attrs, converter) => {
            debug!(
                catalog = attrs.get("catalog"),
                name = attrs.get("name"),
                "unresolved catalog color left in place"
            );
            element
        }
        ColorElement::Convert(tag) => {
            let mut normalized = attrs.clone();
            let color = converter.normalize(tag, &mut normalized);
            normalized.remove(SYSTEM_COLOR_ATTR);
            normalized.insert(COLOR_SPACE_ATTR, "custom");
            normalized.insert(CUSTOM_COLOR_SPACE_ATTR, "sRGB");
            trace!(%tag, %color, "color element rewritten");
            scan.colors.push(color);
            scan.converted += 1;
            rebuild(&element, &attrs, &normalized)
        }
    }
}

fn resolves<L: CatalogLookup>(attrs: &RawColorComponents, converter: &ColorSpaceConverter<L>) -> bool {
    match (attrs.get("catalog"), attrs.get("name")) {
        (Some(catalog), Some(name)) => converter.lookup().resolve(catalog, name).is_some(),
        _ => false,
    }
}

/// Attribute map of an element, values decoded lossily.
fn attributes(element: &BytesStart<'_>) -> RawColorComponents {
    element
        .attributes()
        .flatten()
        .map(|a| {
            (
                String::from_utf8_lossy(a.key.as_ref()).into_owned(),
                String::from_utf8_lossy(&a.value).into_owned(),
            )
        })
        .collect()
}

/// Re-emits an element in original attribute order.
///
/// Attributes missing from `after` are dropped, unchanged ones keep their raw
/// bytes, and keys new in `after` are appended.
fn rebuild(
    element: &BytesStart<'_>,
    before: &RawColorComponents,
    after: &RawColorComponents,
) -> BytesStart<'static> {
    let name = String::from_utf8_lossy(element.name().as_ref()).into_owned();
    let mut out = BytesStart::new(name);
    for attr in element.attributes().flatten() {
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let Some(new_value) = after.get(&key) else {
            continue;
        };
        if before.get(&key) == Some(new_value) {
            out.push_attribute((attr.key.as_ref(), attr.value.as_ref()));
        } else {
            out.push_attribute((key.as_str(), new_value));
        }
    }
    for key in ["red", "green", "blue", "alpha", COLOR_SPACE_ATTR, CUSTOM_COLOR_SPACE_ATTR] {
        if !before.contains(key) {
            if let Some(value) = after.get(key) {
                out.push_attribute((key, value));
            }
        }
    }
    out
}
