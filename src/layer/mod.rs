//! Layer infrastructure for icon compositing.
//!
//! An icon is built by running a fixed sequence of layers over a fresh
//! canvas. Each layer implements [`LayerEffect`] and mutates the canvas held
//! by the [`RenderContext`] in place.
//!
//! # Pipeline
//!
//! ```text
//! Opaque canvas (size x size)
//!     │
//!     ▼
//! ┌────────────┐
//! │ Background │ ◄── fills every pixel
//! └─────┬──────┘
//!       │
//!       ▼
//! ┌────────────┐
//! │   Glyph    │ ◄── draws the letter through a FontProvider
//! └─────┬──────┘
//!       │
//!       ▼
//!   IconCanvas
//! ```

pub mod background;
pub mod glyph;
pub mod svg;

pub use background::BackgroundLayer;
pub use glyph::{GlyphLayer, font_size_for};

use crate::color::ColorPair;
use crate::error::Result;
use crate::font::FontProvider;
use crate::glyph::Glyph;
use crate::icon::IconCanvas;

// ============================================================================
// Render Context
// ============================================================================

/// Context that flows through the rendering pipeline.
pub struct RenderContext {
    /// The canvas being drawn into.
    pub canvas: IconCanvas,
}

impl RenderContext {
    /// Creates a context around a new opaque `size` x `size` canvas.
    pub fn new(size: u32) -> Result<Self> {
        Ok(Self {
            canvas: IconCanvas::new(size)?,
        })
    }

    pub fn into_canvas(self) -> IconCanvas {
        self.canvas
    }
}

// ============================================================================
// Layer Trait
// ============================================================================

/// A single drawing step of the pipeline.
pub trait LayerEffect {
    /// Draws this layer onto `ctx.canvas`.
    fn transform(&self, ctx: &mut RenderContext) -> Result<()>;
}

// ============================================================================
// Layer Pipeline
// ============================================================================

/// The ordered layers that make up one icon.
pub struct LayerPipeline<'a, F: FontProvider> {
    /// Solid background fill (applied first).
    pub background: BackgroundLayer,

    /// The letter, drawn over the background.
    pub glyph: GlyphLayer<'a, F>,
}

impl<'a, F: FontProvider> LayerPipeline<'a, F> {
    /// Builds the pipeline for one name's colors and glyph.
    pub fn new(colors: &ColorPair, glyph: Glyph, font: &'a F) -> Self {
        Self {
            background: BackgroundLayer::new(colors.background_rgba()),
            glyph: GlyphLayer::new(glyph, colors.foreground_rgba(), font),
        }
    }

    /// Renders a `size` x `size` icon through every layer in order.
    pub fn render(&self, size: u32) -> Result<IconCanvas> {
        let mut ctx = RenderContext::new(size)?;
        self.background.transform(&mut ctx)?;
        self.glyph.transform(&mut ctx)?;
        Ok(ctx.into_canvas())
    }
}

// ============================================================================
// Tests
// ============================================================================
