//! Font loading and glyph rendering.
//!
//! Generation only talks to fonts through [`FontProvider`], so the color and
//! layout logic never touches the filesystem. [`SvgFont`] is the real
//! implementation: it loads a TrueType/OpenType file into a font database and
//! draws glyphs by rasterizing a one-element SVG `<text>` document with resvg.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use image::Rgba;
use resvg::tiny_skia::Transform;
use resvg::usvg::{Options, fontdb};

use crate::error::{IconError, Result};
use crate::glyph::Glyph;
use crate::icon::{IconCanvas, PointPx};
use crate::layer::svg::{glyph_document, ink_bottom_shift, parse_document, render_over};

// ============================================================================
// FontProvider
// ============================================================================

/// Where and how large a glyph is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphPlacement {
    /// `x` is the horizontal center of the glyph's advance; `y` is the
    /// lowest pixel row its ink may cover.
    pub anchor: PointPx,
    /// Em size in pixels.
    pub font_size: u32,
}

/// A loaded font that can draw glyphs onto a canvas.
///
/// A provider is loaded once and then shared read-only by every name in a
/// batch, possibly across threads.
pub trait FontProvider: Send + Sync {
    /// Loads the font at `path`.
    fn load(path: &Path) -> Result<Self>
    where
        Self: Sized;

    /// Draws `glyph` onto `canvas` in `color`, centered horizontally on
    /// `placement.anchor` with the bottom of its ink on the anchor row.
    ///
    /// Characters the font does not cover are drawn however the font
    /// implementation chooses (usually `.notdef`); that is not an error.
    fn render_glyph(
        &self,
        canvas: &mut IconCanvas,
        glyph: &Glyph,
        placement: GlyphPlacement,
        color: Rgba<u8>,
    ) -> Result<()>;
}

// ============================================================================
// SvgFont
// ============================================================================

/// A single font file rendered through resvg.
#[derive(Clone)]
pub struct SvgFont {
    origin: PathBuf,
    family: String,
    fontdb: Arc<fontdb::Database>,
}

impl SvgFont {
    /// Builds a font from in-memory font file data.
    ///
    /// `origin` is only used in error messages.
    pub fn from_data(data: Vec<u8>, origin: &Path) -> Result<Self> {
        let mut db = fontdb::Database::new();
        db.load_font_data(data);

        let family = db
            .faces()
            .find_map(|face| face.families.first().map(|(name, _)| name.clone()))
            .ok_or_else(|| IconError::FontLoad {
                path: origin.to_path_buf(),
                reason: "no usable TrueType or OpenType face found".into(),
            })?;

        tracing::debug!(path = %origin.display(), %family, faces = db.len(), "loaded font");

        Ok(Self {
            origin: origin.to_path_buf(),
            family,
            fontdb: Arc::new(db),
        })
    }

    /// The family name the glyph text is rendered with.
    pub fn family(&self) -> &str {
        &self.family
    }
}

impl std::fmt::Debug for SvgFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SvgFont")
            .field("origin", &self.origin)
            .field("family", &self.family)
            .finish_non_exhaustive()
    }
}

impl FontProvider for SvgFont {
    fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read(path).map_err(|e| IconError::FontLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::from_data(data, path)
    }

    fn render_glyph(
        &self,
        canvas: &mut IconCanvas,
        glyph: &Glyph,
        placement: GlyphPlacement,
        color: Rgba<u8>,
    ) -> Result<()> {
        let size = canvas.size();
        let document = glyph_document(size, glyph.as_str(), &self.family, placement, color);
        let options = Options {
            font_family: self.family.clone(),
            fontdb: Arc::clone(&self.fontdb),
            ..Options::default()
        };
        let tree = parse_document(&document, &options)?;

        let Some(shift) = ink_bottom_shift(&tree, placement.anchor.y) else {
            tracing::debug!(
                origin = %self.origin.display(),
                glyph = %glyph,
                "glyph has no outline"
            );
            return Ok(());
        };
        render_over(&mut canvas.data, &tree, Transform::from_translate(0.0, shift))
    }
}

// ============================================================================
// Tests
// ============================================================================
