//! SVG rendering utilities using resvg/usvg.
//!
//! Glyphs are drawn by building a tiny SVG document holding a single `<text>`
//! element, parsing it into a usvg tree (which lays the text out into
//! outlines), and rasterizing that tree straight into the icon's pixels.

use image::{Rgba, RgbaImage};
use resvg::tiny_skia::{IntSize, Pixmap, Transform};
use resvg::usvg::{Options, Tree};

use crate::error::{IconError, Result};
use crate::font::GlyphPlacement;

// ============================================================================
// Documents
// ============================================================================

/// Builds a `size` x `size` SVG document containing `text`, horizontally
/// centered on the anchor with its baseline on the anchor row.
///
/// The baseline is only a starting point; see [`ink_bottom_shift`].
pub fn glyph_document(
    size: u32,
    text: &str,
    family: &str,
    placement: GlyphPlacement,
    color: Rgba<u8>,
) -> String {
    let [r, g, b, _] = color.0;
    format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}">"#,
            r##"<text x="{x}" y="{y}" text-anchor="middle" font-family="{family}" font-size="{font_size}" fill="#{r:02x}{g:02x}{b:02x}">{text}</text>"##,
            "</svg>"
        ),
        size = size,
        x = placement.anchor.x,
        y = placement.anchor.y,
        family = escape_xml(family),
        font_size = placement.font_size,
        r = r,
        g = g,
        b = b,
        text = escape_xml(text),
    )
}

/// Escapes the characters that are significant in XML text and attributes.
///
/// Characters XML 1.0 cannot carry at all (most C0 controls, U+FFFE and
/// U+FFFF) become U+FFFD.
fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            '\t' | '\n' | '\r' => out.push(c),
            '\u{0}'..='\u{1f}' | '\u{fffe}' | '\u{ffff}' => out.push(char::REPLACEMENT_CHARACTER),
            _ => out.push(c),
        }
    }
    out
}

// ============================================================================
// SVG Rendering
// ============================================================================

/// Parses an SVG document, laying out any text with the fonts in `options`.
pub fn parse_document(svg_data: &str, options: &Options) -> Result<Tree> {
    Tree::from_str(svg_data, options).map_err(|e| IconError::Render(e.to_string()))
}

/// Vertical offset that moves the lowest inked row of `tree` onto `row`.
///
/// Uses the outline bounds, not the font's ascent/descent box. Returns
/// `None` when the tree draws nothing, e.g. text the font has no outlines
/// for.
pub fn ink_bottom_shift(tree: &Tree, row: u32) -> Option<f32> {
    let root = tree.root();
    if !root.has_children() {
        return None;
    }
    let bottom = root.abs_stroke_bounding_box().bottom();
    Some(row as f32 + 1.0 - bottom)
}

/// Rasterizes `tree` over an opaque image in place.
///
/// Opaque pixels are the same premultiplied or not, so the image bytes are
/// handed to tiny_skia as they are and taken back unchanged in layout.
pub fn render_over(image: &mut RgbaImage, tree: &Tree, transform: Transform) -> Result<()> {
    let (width, height) = image.dimensions();
    let size = IntSize::from_wh(width, height)
        .ok_or_else(|| IconError::Render(format!("cannot render into a {width}x{height} image")))?;
    let mut pixmap = Pixmap::from_vec(image.as_raw().clone(), size)
        .ok_or_else(|| IconError::Render(format!("cannot wrap a {width}x{height} pixmap")))?;

    resvg::render(tree, transform, &mut pixmap.as_mut());

    *image = RgbaImage::from_raw(width, height, pixmap.take())
        .ok_or_else(|| IconError::Render("pixmap size changed while rendering".into()))?;
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
