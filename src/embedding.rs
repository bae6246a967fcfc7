//! Everything needed to put a wave path on a page: the SVG document
//! wrapping it, the data URI and CSS value carrying that document, and
//! the tint applied through a CSS variable.

use alloc::{format, string::String};

use rand::Rng;
use rgb::RGB8;

use crate::geometry::Bounds;

pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// CSS variable receiving the tint
pub const TINT_VARIABLE: &str = "--tint-color";

pub const TINTS: [RGB8; 3] = [
    RGB8 { r: 0xFF, g: 0x00, b: 0x00 },
    RGB8 { r: 0x00, g: 0xFF, b: 0x00 },
    RGB8 { r: 0x00, g: 0x00, b: 0xFF },
];

/// Minimal SVG image filling its box with `path`.
///
/// The aspect ratio is not preserved, so the wave stretches
/// to whatever element it ends up on.
pub fn svg_document(bounds: &Bounds, path: &str) -> String {
    let (x, y) = (bounds.origin.x, bounds.origin.y);
    let (w, h) = (bounds.width, bounds.height);
    format!(
        "<svg xmlns='{SVG_NAMESPACE}' preserveAspectRatio='none' viewBox='{x} {y} {w} {h}' width='{w}px' height='{h}px'><path d='{path}'/></svg>"
    )
}

/// `data:` URI of [`svg_document`]; only angle brackets are escaped
pub fn data_uri(bounds: &Bounds, path: &str) -> String {
    let document = svg_document(bounds, path);
    let mut uri = String::with_capacity(document.len() + 64);
    uri.push_str("data:image/svg+xml,");
    for c in document.chars() {
        match c {
            '<' => uri.push_str("%3C"),
            '>' => uri.push_str("%3E"),
            c => uri.push(c),
        }
    }
    uri
}

/// Value for the `background-image` property
pub fn background_image(bounds: &Bounds, path: &str) -> String {
    format!("url(\"{}\")", data_uri(bounds, path))
}

pub fn pick_tint<R: Rng + ?Sized>(rng: &mut R) -> RGB8 {
    TINTS[rng.gen_range(0..TINTS.len())]
}

/// `#RRGGBB`, upper case
pub fn tint_hex(color: RGB8) -> String {
    format!("#{:02X}{:02X}{:02X}", color.r, color.g, color.b)
}
