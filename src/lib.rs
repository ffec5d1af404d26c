//! buddy-icon: deterministic placeholder avatars from display names
//!
//! Every icon is a pure function of a name, a font and a size: the SHA-1 of
//! the name picks a dark background and a contrasting foreground, and the
//! uppercase first letter of the name is drawn in the foreground color,
//! centered on the bottom edge.
//!
//! # Example
//!
//! ```
//! use buddy_icon::{ColorPair, Glyph};
//!
//! let colors = ColorPair::for_name("A");
//! assert_eq!(colors.background.red, 51);
//!
//! let glyph = Glyph::from_name("alice").unwrap();
//! assert_eq!(glyph.as_str(), "A");
//! ```
//!
//! # Writing Files
//!
//! [`IconGenerator`] loads the configured font once and writes
//! `<output>/<name>.png` for each name:
//!
//! ```no_run
//! use buddy_icon::{GeneratorConfig, IconGenerator};
//!
//! let config = GeneratorConfig::new()
//!     .with_font("/usr/share/fonts/TTF/DejaVuSans.ttf")
//!     .with_size(64)
//!     .with_output("icons");
//!
//! let generator = IconGenerator::from_config(config)?;
//! let report = generator.generate_all(&["Alice", "Bob"]);
//! for (name, error) in report.failures() {
//!     eprintln!("{name}: {error}");
//! }
//! # Ok::<(), buddy_icon::IconError>(())
//! ```

mod color;
mod config;
mod digest;
mod error;
mod export;
mod font;
mod generator;
mod glyph;
mod icon;
mod layer;

pub use color::{BACKGROUND_VALUE, ColorPair, hsv_to_rgb, hue_from_word, to_hex};
pub use config::{DEFAULT_FONT, DEFAULT_SIZE, GeneratorConfig};
pub use digest::{DIGEST_LEN, NameDigest};
pub use error::{IconError, Result};
pub use export::{ICON_EXTENSION, export_png, icon_path, validate_file_name};
pub use font::{FontProvider, GlyphPlacement, SvgFont};
pub use generator::{BatchReport, IconGenerator, IconOutcome, RenderedIcon, render_icon};
pub use glyph::Glyph;
pub use icon::{IconCanvas, MAX_SIZE, PointPx, SizePx, validate_size};
pub use layer::{
    BackgroundLayer, GlyphLayer, LayerEffect, LayerPipeline, RenderContext, font_size_for,
};
