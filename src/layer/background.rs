//! Background fill layer.

use image::Rgba;

use super::{LayerEffect, RenderContext};
use crate::error::Result;

/// Fills the whole canvas with one opaque color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackgroundLayer {
    pub color: Rgba<u8>,
}

impl BackgroundLayer {
    pub fn new(color: Rgba<u8>) -> Self {
        Self { color }
    }
}

impl LayerEffect for BackgroundLayer {
    fn transform(&self, ctx: &mut RenderContext) -> Result<()> {
        ctx.canvas.fill(self.color);
        Ok(())
    }
}
