use std::fmt;

use nalgebra::{Matrix4, Vector3};
use thiserror::Error;
use tracing::{debug, trace};

use super::inputs::DecomposerInputs;
use crate::{
    constants::DEGENERACY_EPSILON,
    math::{
        decompositions::{euler::EulerDecomposition, trs::TRSDecomposition},
        utils::{vec_32_to_64, vec_64_to_32, vec_to_degrees},
    },
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "X"),
            Axis::Y => write!(f, "Y"),
            Axis::Z => write!(f, "Z"),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum EvaluateError {
    #[error("missing required inputs: {fields}")]
    MissingInput { fields: String },
    #[error("cannot normalize zero-length basis vector {axis}")]
    DegenerateBasis { axis: Axis },
    #[error("unrecognized rotation order selector {0}")]
    InvalidRotationOrder(i16),
}

/// Translation, rotation (degrees) and scale produced by one evaluation,
/// offsets already applied.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DecompositionResult {
    pub translate: Vector3<f32>,
    pub rotate: Vector3<f32>,
    pub scale: Vector3<f32>,
}

/// Runs the full pipeline: assemble, normalize when requested, concatenate
/// with the parent inverse, decompose, extract Euler angles in the requested
/// order, convert to degrees and add the offsets.
pub fn evaluate(inputs: &DecomposerInputs) -> Result<DecompositionResult, EvaluateError> {
    let mut local = inputs.matrix.to_matrix();

    if inputs.normalize {
        normalize_basis(&mut local)?;
    }

    let composed = inputs.parent_inverse * local;
    trace!(%composed, "concatenated local matrix with parent inverse");

    let trs = TRSDecomposition::decompose(&composed);
    let euler = EulerDecomposition::decompose(
        &trs.rotation.to_rotation_matrix().into_inner(),
        inputs.rotation_order,
    );
    let rotation = vec_to_degrees(Vector3::new(euler.x, euler.y, euler.z));

    let result = DecompositionResult {
        translate: vec_64_to_32(trs.translation + vec_32_to_64(inputs.offset_translate)),
        rotate: vec_64_to_32(rotation + vec_32_to_64(inputs.offset_rotate)),
        scale: vec_64_to_32(trs.scale + vec_32_to_64(inputs.offset_scale)),
    };
    debug!(?result, "matrix decomposed");

    Ok(result)
}

/// Rescales the three basis columns to unit length, before any concatenation.
fn normalize_basis(matrix: &mut Matrix4<f64>) -> Result<(), EvaluateError> {
    for axis in [Axis::X, Axis::Y, Axis::Z] {
        let column = axis as usize;
        let norm = matrix.fixed_view::<3, 1>(0, column).norm();
        if norm <= DEGENERACY_EPSILON {
            return Err(EvaluateError::DegenerateBasis { axis });
        }

        let mut basis = matrix.fixed_view_mut::<3, 1>(0, column);
        basis /= norm;
    }

    Ok(())
}
