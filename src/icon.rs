//! Canvas types for a single buddy icon.
//!
//! An [`IconCanvas`] is the square RGBA surface an icon is drawn into before
//! it is exported.

use image::{Rgba, RgbaImage};

use crate::error::{IconError, Result};

/// Largest edge length, in pixels, a canvas may have.
pub const MAX_SIZE: u32 = 8192;

/// Checks that `size` is a usable canvas edge length (`1..=MAX_SIZE`).
pub fn validate_size(size: u32) -> Result<()> {
    if size == 0 || size > MAX_SIZE {
        return Err(IconError::InvalidSize(size));
    }
    Ok(())
}

/// A point in pixel coordinates, origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointPx {
    pub x: u32,
    pub y: u32,
}

impl PointPx {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// A 2D size in pixel units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SizePx {
    pub width: u32,
    pub height: u32,
}

impl SizePx {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// A square, fully opaque RGBA canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct IconCanvas {
    /// The pixel data.
    pub data: RgbaImage,
}

impl IconCanvas {
    /// Creates a `size` x `size` canvas filled with opaque black.
    pub fn new(size: u32) -> Result<Self> {
        Self::filled(size, Rgba([0, 0, 0, 255]))
    }

    /// Creates a `size` x `size` canvas filled with `color`.
    ///
    /// Fails with [`IconError::InvalidSize`] unless `size` is in
    /// `1..=MAX_SIZE`.
    pub fn filled(size: u32, color: Rgba<u8>) -> Result<Self> {
        validate_size(size)?;
        Ok(Self {
            data: RgbaImage::from_pixel(size, size, color),
        })
    }

    /// Edge length in pixels.
    pub fn size(&self) -> u32 {
        self.data.width()
    }

    /// Returns the pixel dimensions of the canvas.
    pub fn dimensions(&self) -> SizePx {
        SizePx::new(self.data.width(), self.data.height())
    }

    /// Where the glyph is anchored: horizontally centered, with the bottom
    /// of its ink on the last pixel row.
    pub fn glyph_anchor(&self) -> PointPx {
        let size = self.size();
        PointPx::new(size / 2, size.saturating_sub(1))
    }

    /// Replaces every pixel with `color`.
    pub fn fill(&mut self, color: Rgba<u8>) {
        for pixel in self.data.pixels_mut() {
            *pixel = color;
        }
    }
}
