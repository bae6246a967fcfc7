use alloc::{string::String, vec::Vec};

use crate::geometry::{Anchors, BezierSegment, Bounds, Coordinate, Float, Path, DEFAULT_BOUNDS};

use WaveError::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum WaveError {
    /// a wave needs exactly 4 heights; holds the count received
    WrongHeightCount(usize),
    CanvasTooSmall,
    MissingElement,
    Dom,
}

pub type WaveResult<T> = Result<T, WaveError>;

pub const DEFAULT_TIGHTNESS: Float = 15.0;

/// Amplitude used for page backgrounds
pub const PAGE_AMPLITUDE: Float = 20.0;
/// Tightness used for page backgrounds
pub const PAGE_TIGHTNESS: Float = 10.0;

/// Shape preset, selecting the height offsets of a wave
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum WaveVariant {
    Sine,
    Triangular,
}

impl WaveVariant {
    pub fn heights(self, amplitude: Float) -> [Float; 4] {
        match self {
            WaveVariant::Sine => [0.0, -amplitude, 0.0, amplitude],
            WaveVariant::Triangular => [amplitude, 0.0, -amplitude, 0.0],
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct WaveParams {
    /// vertical reach of the steep handles
    pub amplitude: Float,
    /// horizontal reach of the handles; flat handles get a fifth of it
    pub tightness: Float,
    /// offsets of the first four anchors from the middle of the bounds
    pub heights: [Float; 4],
}

impl WaveParams {
    pub fn new(amplitude: Float, heights: [Float; 4]) -> Self {
        Self {
            amplitude,
            tightness: DEFAULT_TIGHTNESS,
            heights,
        }
    }

    pub fn with_tightness(mut self, tightness: Float) -> Self {
        self.tightness = tightness;
        self
    }

    /// Checked constructor for untyped callers; a missing
    /// tightness falls back to [`DEFAULT_TIGHTNESS`]
    pub fn from_slice(amplitude: Float, tightness: Option<Float>, heights: &[Float]) -> WaveResult<Self> {
        let heights = heights.try_into().map_err(|_| WrongHeightCount(heights.len()))?;
        let params = Self::new(amplitude, heights);
        Ok(match tightness {
            Some(tightness) => params.with_tightness(tightness),
            None => params,
        })
    }

    pub fn preset(variant: WaveVariant) -> Self {
        Self::new(PAGE_AMPLITUDE, variant.heights(PAGE_AMPLITUDE)).with_tightness(PAGE_TIGHTNESS)
    }
}

/// Informal shape class, only used to pick the handle phase pattern
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum WaveKind {
    Sine,
    Triangular,
}

impl WaveKind {
    /// Asymmetric second and fourth anchors make a sine-like wave
    pub fn classify(anchors: &Anchors) -> Self {
        match anchors[1].y != anchors[3].y {
            true => WaveKind::Sine,
            false => WaveKind::Triangular,
        }
    }

    // the call count (mod 4) after which `polarity` flips
    fn polarity_phase(self) -> u32 {
        match self {
            WaveKind::Sine => 2,
            WaveKind::Triangular => 0,
        }
    }
}

/// Alternating sign state threaded through the 8 handle computations
/// of one wave. Each call consumes the state and hands back the next one.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HandleState {
    kind: WaveKind,
    /// flips on every call
    side: Float,
    /// steep handles move by `tightness` and `amplitude`,
    /// flat ones by `tightness / 5` and not at all vertically
    steep: bool,
    polarity: Float,
    count: u32,
}

impl HandleState {
    pub fn seed(kind: WaveKind) -> Self {
        Self {
            kind,
            side: 1.0,
            steep: kind == WaveKind::Sine,
            polarity: 1.0,
            count: 0,
        }
    }

    /// Number of handles computed so far
    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn is_steep(&self) -> bool {
        self.steep
    }

    /// Displacement applied to the next anchor
    pub fn offset(&self, params: &WaveParams) -> Coordinate {
        match self.steep {
            true => Coordinate::new(
                params.tightness * self.side,
                -(params.amplitude * self.polarity * self.side),
            ),
            false => Coordinate::new(self.side * (params.tightness / 5.0), 0.0),
        }
    }

    pub fn advance(self) -> Self {
        let count = self.count + 1;
        let steep = match count % 2 == 1 {
            true => !self.steep,
            false => self.steep,
        };
        let polarity = match count % 4 == self.kind.polarity_phase() {
            true => -self.polarity,
            false => self.polarity,
        };

        Self {
            kind: self.kind,
            side: -self.side,
            steep,
            polarity,
            count,
        }
    }

    /// Control point derived from `anchor`, and the state for the next call
    pub fn handle(self, anchor: Coordinate, params: &WaveParams) -> (Coordinate, Self) {
        let handle = anchor + self.offset(params);
        log::trace!("handle #{} from {:?}: {:?}", self.count, anchor, handle);
        (handle, self.advance())
    }
}

/// Lays out the five anchors: evenly spaced across `bounds`,
/// vertically offset from its middle. The fifth repeats the first height.
pub fn anchors(bounds: &Bounds, heights: &[Float; 4]) -> Anchors {
    let mid = bounds.height / 2.0 - bounds.origin.y;
    let incr = bounds.width / 4.0;

    let mut anchors = [Coordinate::new(bounds.origin.x, mid + heights[0]); 5];
    for i in 1..5 {
        anchors[i].x = anchors[i - 1].x + incr;
        anchors[i].y = mid + heights[i % 4];
    }

    anchors
}

pub fn build_path(bounds: &Bounds, params: &WaveParams) -> Path {
    let anchors = anchors(bounds, &params.heights);
    let kind = WaveKind::classify(&anchors);
    log::debug!("{:?} wave through {:?}", kind, anchors);

    let mut state = HandleState::seed(kind);
    let mut segments = Vec::with_capacity(anchors.len() - 1);

    for pair in anchors.windows(2) {
        let (origin_handle, next) = state.handle(pair[0], params);
        let (destination_handle, next) = next.handle(pair[1], params);
        state = next;

        segments.push(BezierSegment {
            origin_handle,
            destination_handle,
            destination: pair[1],
        });
    }

    Path::new(*bounds, anchors[0], segments)
}

/// Serialized wave path for `params` laid out in `bounds`
pub fn generate(bounds: &Bounds, params: &WaveParams) -> String {
    build_path(bounds, params).serialize()
}

/// Same as [`generate`] on the normalized 100x100 plane
pub fn make_wave(amplitude: Float, tightness: Float, heights: [Float; 4]) -> String {
    let params = WaveParams::new(amplitude, heights).with_tightness(tightness);
    generate(&DEFAULT_BOUNDS, &params)
}
