//! Glyph layer: draws the name's letter over the background.

use image::Rgba;

use super::{LayerEffect, RenderContext};
use crate::error::Result;
use crate::font::{FontProvider, GlyphPlacement};
use crate::glyph::Glyph;

/// Returns the font size used for an icon of `size` pixels.
///
/// The icon size is treated as a point size at 96 DPI (`size * 96 / 72`,
/// truncated), so glyphs come out larger than the canvas em box and fill
/// it the way the existing icon sets do.
pub fn font_size_for(size: u32) -> u32 {
    (u64::from(size) * 96 / 72) as u32
}

/// Draws a [`Glyph`] in the foreground color through a [`FontProvider`].
pub struct GlyphLayer<'a, F: FontProvider> {
    pub glyph: Glyph,
    pub color: Rgba<u8>,
    font: &'a F,
}

impl<'a, F: FontProvider> GlyphLayer<'a, F> {
    pub fn new(glyph: Glyph, color: Rgba<u8>, font: &'a F) -> Self {
        Self { glyph, color, font }
    }
}

impl<F: FontProvider> LayerEffect for GlyphLayer<'_, F> {
    fn transform(&self, ctx: &mut RenderContext) -> Result<()> {
        let placement = GlyphPlacement {
            anchor: ctx.canvas.glyph_anchor(),
            font_size: font_size_for(ctx.canvas.size()),
        };
        self.font
            .render_glyph(&mut ctx.canvas, &self.glyph, placement, self.color)
    }
}
