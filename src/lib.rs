#![cfg_attr(not(any(test, feature = "web")), no_std)]
extern crate alloc;

pub mod geometry;
pub mod path;
pub mod wave;
pub mod embedding;
pub mod rendering;

#[cfg(feature = "web")]
pub mod web;


#[doc(inline)]
pub use {
    geometry::Bounds,
    geometry::BezierSegment,
    geometry::Coordinate,
    geometry::Path,
    geometry::DEFAULT_BOUNDS,
    path::serialize,
    wave::generate,
    wave::make_wave,
    wave::WaveError,
    wave::WaveParams,
    wave::WaveVariant,
    rendering::WaveRenderer,
};
