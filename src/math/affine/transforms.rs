use crate::math::rotation_order::RotationOrder;
use nalgebra::{Matrix4, RealField, Vector3};
use num_traits::identities::Zero;

pub fn rotate_x<T: RealField + Copy>(angle: T) -> Matrix4<T> {
    let mut rot_x = Matrix4::zeros();

    rot_x[(0, 0)] = T::one();
    rot_x[(3, 3)] = T::one();

    rot_x[(1, 1)] = angle.cos();
    rot_x[(1, 2)] = -angle.sin();
    rot_x[(2, 1)] = angle.sin();
    rot_x[(2, 2)] = angle.cos();

    rot_x
}

pub fn rotate_y<T: RealField + Copy>(angle: T) -> Matrix4<T> {
    let mut rot_y = Matrix4::zeros();

    rot_y[(1, 1)] = T::one();
    rot_y[(3, 3)] = T::one();

    rot_y[(0, 0)] = angle.cos();
    rot_y[(0, 2)] = angle.sin();
    rot_y[(2, 0)] = -angle.sin();
    rot_y[(2, 2)] = angle.cos();

    rot_y
}

pub fn rotate_z<T: RealField + Copy>(angle: T) -> Matrix4<T> {
    let mut rot_z = Matrix4::zeros();

    rot_z[(2, 2)] = T::one();
    rot_z[(3, 3)] = T::one();

    rot_z[(0, 0)] = angle.cos();
    rot_z[(0, 1)] = -angle.sin();
    rot_z[(1, 0)] = angle.sin();
    rot_z[(1, 1)] = angle.cos();

    rot_z
}

/// Rotation combining the given Euler angles in the given application order.
///
/// The order names which axis rotation is applied first, so e.g. `Xyz`
/// composes to `Rz * Ry * Rx` in column-vector convention.
pub fn rotation_in_order<T: RealField + Copy>(
    angles: Vector3<T>,
    order: RotationOrder,
) -> Matrix4<T> {
    if angles.is_zero() {
        return Matrix4::identity();
    }

    let x = rotate_x(angles.x);
    let y = rotate_y(angles.y);
    let z = rotate_z(angles.z);

    match order {
        RotationOrder::Xyz => z * y * x,
        RotationOrder::Yzx => x * z * y,
        RotationOrder::Zxy => y * x * z,
        RotationOrder::Xzy => y * z * x,
        RotationOrder::Yxz => z * x * y,
        RotationOrder::Zyx => x * y * z,
    }
}

pub fn translate<T: RealField + Copy>(vector: Vector3<T>) -> Matrix4<T> {
    let mut translation = Matrix4::identity();

    translation[(0, 3)] = vector[0];
    translation[(1, 3)] = vector[1];
    translation[(2, 3)] = vector[2];

    translation
}

pub fn scale<T: RealField + Copy>(sx: T, sy: T, sz: T) -> Matrix4<T> {
    let mut scaling = Matrix4::zeros();

    scaling[(0, 0)] = sx;
    scaling[(1, 1)] = sy;
    scaling[(2, 2)] = sz;
    scaling[(3, 3)] = T::one();

    scaling
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_matrix_close(a: &Matrix4<f64>, b: &Matrix4<f64>) {
        for row in 0..4 {
            for col in 0..4 {
                assert!(
                    (a[(row, col)] - b[(row, col)]).abs() < 1.0e-9,
                    "matrices differ at ({row}, {col}): {a} vs {b}"
                );
            }
        }
    }

    #[test]
    fn quarter_turn_about_x_maps_y_to_z() {
        let rotated = rotate_x(std::f64::consts::FRAC_PI_2) * Vector3::y().to_homogeneous();
        assert!((rotated.xyz() - Vector3::z()).norm() < 1.0e-9);
    }

    #[test]
    fn zero_angles_compose_to_identity() {
        for order in RotationOrder::ALL {
            assert_matrix_close(
                &rotation_in_order(Vector3::zeros(), order),
                &Matrix4::identity(),
            );
        }
    }

    #[test]
    fn xyz_order_applies_x_first() {
        let angles = Vector3::new(0.3, -0.7, 1.1);
        let composed = rotation_in_order(angles, RotationOrder::Xyz);
        let by_hand = rotate_z(angles.z) * rotate_y(angles.y) * rotate_x(angles.x);
        assert_matrix_close(&composed, &by_hand);
    }

    #[test]
    fn single_axis_rotation_is_order_independent() {
        let angles = Vector3::new(0.0, 0.9, 0.0);
        let reference = rotation_in_order(angles, RotationOrder::Xyz);
        for order in RotationOrder::ALL {
            assert_matrix_close(&rotation_in_order(angles, order), &reference);
        }
    }
}
