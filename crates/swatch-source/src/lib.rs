//! # swatch-source
//!
//! Discovery and normalization of colors embedded in source documents.
//!
//! Interface-builder documents (storyboards) reference colors in many color
//! spaces. This crate finds those documents, converts every recognized
//! `<color>` element to canonical sRGB through [`swatch_color`], and rewrites
//! the elements in place while leaving the rest of the document untouched.
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use swatch_color::ColorSpaceConverter;
//! use swatch_source::{SourceDocument, SourceFilter};
//!
//! let root = Path::new("MyApp");
//! let converter = ColorSpaceConverter::new();
//! for path in SourceFilter::default().discover(root)?.into_complete()? {
//!     let doc = SourceDocument::load(&path, &converter)?;
//!     println!("{}: {} colors", path.display(), doc.colors().len());
//!     doc.save()?;
//! }
//! # Ok::<(), swatch_source::SourceError>(())
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod document;
pub mod error;
pub mod filter;
pub mod storyboard;

pub use document::SourceDocument;
pub use error::{SourceError, SourceResult};
pub use filter::{Discovery, SourceFilter};
pub use storyboard::{ColorElement, StoryboardScan, normalize_storyboard};
