use alloc::{string::String, vec::Vec};

pub type Float = f64;
pub type Coordinate = vek::vec::repr_c::vec2::Vec2<Float>;
pub const C_ZERO: Coordinate = Coordinate::new(0.0, 0.0);

/// Rectangular region of the plane.
///
/// Used both as the coordinate frame of a wave and as the
/// edge closing the serialized path from below.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Bounds {
    pub origin: Coordinate,
    pub width: Float,
    pub height: Float,
}

/// Normalized 100x100 plane, matching the viewbox of the embedded image
pub const DEFAULT_BOUNDS: Bounds = Bounds {
    origin: C_ZERO,
    width: 100.0,
    height: 100.0,
};

impl Bounds {
    pub const fn new(origin: Coordinate, width: Float, height: Float) -> Self {
        Self {
            origin,
            width,
            height,
        }
    }

    pub fn bottom_right(&self) -> Coordinate {
        Coordinate::new(self.origin.x + self.width, self.origin.y + self.height)
    }

    pub fn bottom_left(&self) -> Coordinate {
        Coordinate::new(self.origin.x, self.origin.y + self.height)
    }
}

impl Default for Bounds {
    fn default() -> Self {
        DEFAULT_BOUNDS
    }
}

/// One cubic curve; its start point is the destination
/// of the previous segment (or the path origin).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BezierSegment {
    pub origin_handle: Coordinate,
    pub destination_handle: Coordinate,
    pub destination: Coordinate,
}

/// The five points a wave passes through, left to right.
/// The last one always sits at the height of the first.
pub type Anchors = [Coordinate; 5];

/// Closed region: the curve, then down to the bottom edge of `bounds`
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    pub origin: Coordinate,
    pub bounds: Bounds,
    pub segments: Vec<BezierSegment>,
}

impl Path {
    pub fn new(bounds: Bounds, origin: Coordinate, segments: Vec<BezierSegment>) -> Self {
        Self {
            origin,
            bounds,
            segments,
        }
    }

    /// Every point the curve passes through, in order
    pub fn on_curve_points(&self) -> impl Iterator<Item = Coordinate> + '_ {
        core::iter::once(self.origin).chain(self.segments.iter().map(|s| s.destination))
    }

    pub fn serialize(&self) -> String {
        crate::path::serialize(&self.bounds, self.origin, &self.segments)
    }
}
