//! Decomposes a 4x4 transform, supplied as sixteen independent scalar cells,
//! into translation, Euler rotation (degrees, selectable axis order) and scale,
//! with optional basis normalization, parent-inverse concatenation and
//! additive TRS offsets.

pub mod constants;
pub mod decomposer;
pub mod math;
