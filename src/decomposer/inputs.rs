use itertools::Itertools;
use nalgebra::{Matrix4, Vector3};

use super::evaluation::EvaluateError;
use crate::math::rotation_order::RotationOrder;

/// The sixteen scalar cells of the host matrix, row-major (`cells[row][col]`),
/// with basis vectors in rows 0-2 and translation in row 3.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MatrixCells(pub [[f32; 4]; 4]);

impl Default for MatrixCells {
    fn default() -> Self {
        let mut cells = [[0.0; 4]; 4];
        cells[3][3] = 1.0;
        MatrixCells(cells)
    }
}

impl MatrixCells {
    /// Double-precision matrix in column-vector convention; the row-major
    /// cell layout transposes, putting the basis vectors into columns.
    pub fn to_matrix(&self) -> Matrix4<f64> {
        Matrix4::from_fn(|row, col| self.0[col][row] as f64)
    }
}

/// One full, validated set of inputs for a single evaluation.
#[derive(Clone, Copy, Debug)]
pub struct DecomposerInputs {
    pub matrix: MatrixCells,
    /// Column-vector convention, already transposed from the host cells.
    pub parent_inverse: Matrix4<f64>,
    pub normalize: bool,
    pub rotation_order: RotationOrder,
    pub offset_translate: Vector3<f32>,
    pub offset_rotate: Vector3<f32>,
    pub offset_scale: Vector3<f32>,
}

impl DecomposerInputs {
    pub fn builder() -> DecomposerInputsBuilder {
        DecomposerInputsBuilder::default()
    }
}

/// Collects the host's plug values and validates them all at once, so a
/// single `build` reports every absent field instead of failing on the
/// first one.
#[derive(Clone, Copy, Debug, Default)]
pub struct DecomposerInputsBuilder {
    matrix: Option<MatrixCells>,
    parent_inverse: Option<[[f64; 4]; 4]>,
    normalize: Option<bool>,
    rotation_order: Option<i16>,
    offset_translate: Option<Vector3<f32>>,
    offset_rotate: Option<Vector3<f32>>,
    offset_scale: Option<Vector3<f32>>,
}

impl DecomposerInputsBuilder {
    pub fn matrix(mut self, cells: MatrixCells) -> Self {
        self.matrix = Some(cells);
        self
    }

    /// Sets a single cell, starting from the default cells (zeros with
    /// `[3][3]` at one) if no cell has been set yet.
    pub fn cell(mut self, row: usize, col: usize, value: f32) -> Self {
        let mut cells = self.matrix.unwrap_or_default();
        cells.0[row][col] = value;
        self.matrix = Some(cells);
        self
    }

    /// Row-major cells of the parent-inverse matrix.
    pub fn parent_inverse(mut self, cells: [[f64; 4]; 4]) -> Self {
        self.parent_inverse = Some(cells);
        self
    }

    pub fn normalize(mut self, normalize: bool) -> Self {
        self.normalize = Some(normalize);
        self
    }

    /// Raw host enum selector; the host delivers this as a short.
    pub fn rotation_order(mut self, selector: i16) -> Self {
        self.rotation_order = Some(selector);
        self
    }

    pub fn offset_translate(mut self, offset: Vector3<f32>) -> Self {
        self.offset_translate = Some(offset);
        self
    }

    pub fn offset_rotate(mut self, offset: Vector3<f32>) -> Self {
        self.offset_rotate = Some(offset);
        self
    }

    pub fn offset_scale(mut self, offset: Vector3<f32>) -> Self {
        self.offset_scale = Some(offset);
        self
    }

    pub fn build(self) -> Result<DecomposerInputs, EvaluateError> {
        let missing = [
            ("matrixIn", self.matrix.is_none()),
            ("parentInverseMatrix", self.parent_inverse.is_none()),
            ("normalize", self.normalize.is_none()),
            ("eulerRotateOrder", self.rotation_order.is_none()),
            ("offsetTranslate", self.offset_translate.is_none()),
            ("offsetRotate", self.offset_rotate.is_none()),
            ("offsetScale", self.offset_scale.is_none()),
        ]
        .into_iter()
        .filter(|(_, absent)| *absent)
        .map(|(name, _)| name)
        .collect_vec();

        if !missing.is_empty() {
            return Err(EvaluateError::MissingInput {
                fields: missing.into_iter().join(", "),
            });
        }

        let rotation_order = RotationOrder::try_from(self.rotation_order.unwrap_or_default())
            .map_err(EvaluateError::InvalidRotationOrder)?;
        let parent_cells = self.parent_inverse.unwrap_or_default();

        Ok(DecomposerInputs {
            matrix: self.matrix.unwrap_or_default(),
            parent_inverse: Matrix4::from_fn(|row, col| parent_cells[col][row]),
            normalize: self.normalize.unwrap_or_default(),
            rotation_order,
            offset_translate: self.offset_translate.unwrap_or_default(),
            offset_rotate: self.offset_rotate.unwrap_or_default(),
            offset_scale: self.offset_scale.unwrap_or_default(),
        })
    }
}
