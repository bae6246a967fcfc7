use crate::geometry::{Coordinate, Path};
use crate::wave::{WaveError::*, WaveResult};

use wizdraw::push_cubic_bezier_segments;
use wizdraw::fill;

use vek::bezier::CubicBezier2;
use vek::vec::Vec2;

use rgb::{RGB8, RGBA8};

use alloc::vec::Vec;

/// Mask-space point, in the rasterizer's precision
pub type Pixel = Vec2<f32>;

/// Rasterizes the region enclosed by a wave path,
/// the way a clip path would cut an element's background.
pub struct WaveRenderer {
    path: Path,
}

impl WaveRenderer {
    pub fn new(path: Path) -> Self {
        Self { path }
    }

    pub fn log_path(&self) {
        log::info!(    "| INDEX |    ROLE     |   X   |   Y   |");

        log::info!("| {:^5} | {:^11} | {:^5} | {:^5} |", 0, "Origin", self.path.origin.x, self.path.origin.y);
        for (i, segment) in self.path.segments.iter().enumerate() {
            let rows = [
                ("Handle", segment.origin_handle),
                ("Handle", segment.destination_handle),
                ("Destination", segment.destination),
            ];
            for (role, point) in rows {
                log::info!("| {:^5} | {:^11} | {:^5} | {:^5} |", i + 1, role, point.x, point.y);
            }
        }
    }

    /// Closed polyline of the wave region on a `w` by `h` mask.
    ///
    /// The path is stretched to the mask without keeping its aspect
    /// ratio, then flattened there so the tolerance is in pixels.
    pub fn outline(&self, w: usize, h: usize) -> Vec<Pixel> {
        let bounds = &self.path.bounds;
        let scale = Coordinate::new(w as f64 / bounds.width, h as f64 / bounds.height);
        let to_mask = |p: Coordinate| ((p - bounds.origin) * scale).map(|v| v as f32);

        let origin = to_mask(self.path.origin);
        let mut flat = Vec::new();
        flat.push(origin);

        let mut start = origin;
        for segment in &self.path.segments {
            let curve = CubicBezier2 {
                start,
                ctrl0: to_mask(segment.origin_handle),
                ctrl1: to_mask(segment.destination_handle),
                end: to_mask(segment.destination),
            };
            push_cubic_bezier_segments::<8>(&curve, 0.6, &mut flat);
            start = curve.end;
        }

        flat.push(to_mask(bounds.bottom_right()));
        flat.push(to_mask(bounds.bottom_left()));
        flat.push(origin);

        flat
    }

    /// Coverage of the wave region on a `w` by `h` mask
    pub fn mask<const SSAA: usize, const SSAA_SQ: usize>(
        &self,
        mask: &mut [u8],
        w: usize,
        h: usize,
    ) -> WaveResult<()> {
        if mask.len() < w * h {
            return Err(CanvasTooSmall);
        }

        let outline = self.outline(w, h);
        fill::<SSAA, SSAA_SQ>(&outline, mask, Vec2::new(w, h));

        Ok(())
    }

    /// Fills `dst` with `tint` wherever the wave region covers it
    pub fn paint<const SSAA: usize, const SSAA_SQ: usize>(
        &self,
        dst: &mut [RGBA8],
        mask: &mut [u8],
        w: usize,
        h: usize,
        stride: usize,
        tint: RGB8,
        alpha_blend: bool,
    ) -> WaveResult<()> {
        if h > 0 && (stride < w || dst.len() < stride * (h - 1) + w) {
            return Err(CanvasTooSmall);
        }

        self.mask::<SSAA, SSAA_SQ>(mask, w, h)?;

        let color = RGBA8::new(tint.r, tint.g, tint.b, 255);
        let mut line = 0;
        for y in 0..h {
            for (x, q) in mask[y * w..][..w].iter().enumerate() {
                if *q != 0 {
                    blend_pixel(&mut dst[line + x], color, *q, alpha_blend);
                }
            }
            line += stride;
        }

        Ok(())
    }
}

#[inline(always)]
pub fn blend_pixel(dst_pixel: &mut RGBA8, src_pixel: RGBA8, mask_alpha: u8, alpha_blend_dst: bool) {
    if src_pixel.a == 255 && mask_alpha == 255 {
        *dst_pixel = src_pixel;
        return;
    }

    let src_alpha = ((src_pixel.a as u32) * (mask_alpha as u32)) / 255;
    let u8_max = u8::MAX as u32;
    let dst_alpha = u8_max - src_alpha;

    let blend = |src: u8, dst: u8| match alpha_blend_dst {
        true => (((src as u32) * src_alpha + (dst as u32) * dst_alpha) / u8_max) as u8,
        false => ((src as u32 * src_alpha) / u8_max) as u8,
    };

    *dst_pixel = RGBA8::new(
        blend(src_pixel.r, dst_pixel.r),
        blend(src_pixel.g, dst_pixel.g),
        blend(src_pixel.b, dst_pixel.b),
        blend(src_pixel.a, dst_pixel.a),
    );
}
