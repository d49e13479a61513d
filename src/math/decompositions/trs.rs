use crate::constants::DEGENERACY_EPSILON;
use nalgebra::{Matrix3, Matrix4, RealField, Rotation3, UnitQuaternion, Vector3};

/// Translation, rotation and scale of an affine transform in column-vector
/// convention: basis vectors in the columns of the upper-left 3x3 block,
/// translation in column 3.
#[derive(Clone, Copy, Debug)]
pub struct TRSDecomposition<T: RealField + Copy> {
    pub translation: Vector3<T>,
    pub rotation: UnitQuaternion<T>,
    pub scale: Vector3<T>,
}

impl<T: RealField + Copy> TRSDecomposition<T> {
    /// Scale components are the basis column norms, always non-negative.
    /// A collapsed basis column (norm under `DEGENERACY_EPSILON`) keeps its
    /// tiny norm as the scale and contributes the identity axis to the
    /// rotation basis, so nothing is ever divided by zero. A reflecting
    /// basis is negated wholesale before the quaternion conversion.
    pub fn decompose(matrix: &Matrix4<T>) -> Self {
        let translation = Vector3::new(matrix[(0, 3)], matrix[(1, 3)], matrix[(2, 3)]);
        let major = matrix.fixed_view::<3, 3>(0, 0);
        let epsilon = T::from_f64(DEGENERACY_EPSILON).unwrap();

        let mut scale = Vector3::zeros();
        let mut basis = Matrix3::identity();
        for axis in 0..3 {
            let norm = major.column(axis).norm();
            scale[axis] = norm;
            if norm > epsilon {
                basis.set_column(axis, &(major.column(axis) / norm));
            }
        }

        if basis.determinant() < T::zero() {
            basis = -basis;
        }

        let rotation = UnitQuaternion::from_rotation_matrix(&Rotation3::from_matrix_unchecked(basis));

        TRSDecomposition {
            translation,
            rotation,
            scale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{
        affine::transforms::{rotation_in_order, scale, translate},
        rotation_order::RotationOrder,
    };

    fn assert_vec_close(a: Vector3<f64>, b: Vector3<f64>) {
        assert!((a - b).norm() < 1.0e-9, "{a} != {b}");
    }

    #[test]
    fn identity_decomposes_to_neutral_components() {
        let trs = TRSDecomposition::decompose(&Matrix4::<f64>::identity());
        assert_vec_close(trs.translation, Vector3::zeros());
        assert_vec_close(trs.scale, Vector3::new(1.0, 1.0, 1.0));
        assert!(trs.rotation.angle() < 1.0e-9);
    }

    #[test]
    fn recovers_composed_translation_rotation_and_scale() {
        let translation = Vector3::new(5.0, -2.0, 3.0);
        let angles = Vector3::new(0.3, 0.8, -0.5);
        let composed = translate(translation)
            * rotation_in_order(angles, RotationOrder::Xyz)
            * scale(2.0, 0.5, 3.0);

        let trs = TRSDecomposition::decompose(&composed);
        assert_vec_close(trs.translation, translation);
        assert_vec_close(trs.scale, Vector3::new(2.0, 0.5, 3.0));

        let expected = rotation_in_order(angles, RotationOrder::Xyz);
        let recovered = trs.rotation.to_rotation_matrix().to_homogeneous();
        assert!((expected - recovered).norm() < 1.0e-9);
    }

    #[test]
    fn reflection_yields_positive_scales_and_a_proper_rotation() {
        let trs = TRSDecomposition::decompose(&scale(-2.0, 1.0, 1.0));
        assert_vec_close(trs.scale, Vector3::new(2.0, 1.0, 1.0));
        let det = trs.rotation.to_rotation_matrix().into_inner().determinant();
        assert!((det - 1.0).abs() < 1.0e-9);
    }

    #[test]
    fn collapsed_axis_keeps_its_norm_and_an_identity_contribution() {
        let trs = TRSDecomposition::decompose(&scale(0.0, 2.0, 2.0));
        assert_vec_close(trs.scale, Vector3::new(0.0, 2.0, 2.0));
        assert!(trs.rotation.angle() < 1.0e-9);
    }
}
