use core::fmt;
use alloc::string::{String, ToString};

use crate::geometry::{Bounds, BezierSegment, Coordinate, Float};

/// `x,y` the way path data expects it
#[derive(Debug, Copy, Clone)]
struct Point(Coordinate);

// -0.0 + 0.0 == +0.0, so "-0" never reaches the output
fn normalized(value: Float) -> Float {
    value + 0.0
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", normalized(self.0.x), normalized(self.0.y))
    }
}

/// Lazily formatted path data.
///
/// All segments are chained under a single `C` command,
/// then the region is closed along the bottom edge of `bounds`.
#[derive(Debug, Copy, Clone)]
pub struct PathData<'a> {
    pub bounds: &'a Bounds,
    pub origin: Coordinate,
    pub segments: &'a [BezierSegment],
}

impl fmt::Display for PathData<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "M {} C", Point(self.origin))?;

        for segment in self.segments {
            write!(f, " {}", Point(segment.origin_handle))?;
            write!(f, " {}", Point(segment.destination_handle))?;
            write!(f, " {}", Point(segment.destination))?;
        }

        write!(f, " L {}", Point(self.bounds.bottom_right()))?;
        write!(f, " L {}", Point(self.bounds.bottom_left()))?;
        write!(f, " L {}z", Point(self.origin))
    }
}

/// Turns Bezier segments into a closed path string.
///
/// An empty `segments` slice is accepted and yields the
/// degenerate `M o C L br L bl L oz` rectangle.
pub fn serialize(bounds: &Bounds, path_origin: Coordinate, segments: &[BezierSegment]) -> String {
    PathData {
        bounds,
        origin: path_origin,
        segments,
    }
    .to_string()
}
