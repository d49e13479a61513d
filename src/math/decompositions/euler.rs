use crate::{constants::GIMBAL_LOCK_EPSILON, math::rotation_order::RotationOrder};
use nalgebra::{Matrix3, RealField};

/// Euler angles (radians) extracted from a rotation matrix.
///
/// Components are always named by axis, not by application position: `x` is
/// the rotation about X regardless of where X sits in the order.
#[derive(Clone, Copy, Debug)]
pub struct EulerDecomposition<T: RealField + Copy> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T: RealField + Copy> EulerDecomposition<T> {
    /// Extracts the angles whose `order`-sequenced composition reproduces
    /// `rotation` (column-vector convention, assumed orthonormal).
    ///
    /// The middle angle comes from an atan2 against the norm of the two
    /// entries carrying its cosine, which keeps it in [-pi/2, pi/2]. When
    /// that cosine collapses the order is gimbal-locked, the angle of the
    /// last-applied axis is pinned to zero and the first-applied axis
    /// absorbs the remaining turn.
    pub fn decompose(rotation: &Matrix3<T>, order: RotationOrder) -> Self {
        let eps = T::from_f64(GIMBAL_LOCK_EPSILON).unwrap();
        let m = rotation;

        match order {
            RotationOrder::Xyz => {
                let cos_y = (m[(2, 1)] * m[(2, 1)] + m[(2, 2)] * m[(2, 2)]).sqrt();
                let y = (-m[(2, 0)]).atan2(cos_y);
                if cos_y > eps {
                    Self {
                        x: m[(2, 1)].atan2(m[(2, 2)]),
                        y,
                        z: m[(1, 0)].atan2(m[(0, 0)]),
                    }
                } else {
                    Self {
                        x: (-m[(1, 2)]).atan2(m[(1, 1)]),
                        y,
                        z: T::zero(),
                    }
                }
            }
            RotationOrder::Yzx => {
                let cos_z = (m[(0, 0)] * m[(0, 0)] + m[(0, 2)] * m[(0, 2)]).sqrt();
                let z = (-m[(0, 1)]).atan2(cos_z);
                if cos_z > eps {
                    Self {
                        x: m[(2, 1)].atan2(m[(1, 1)]),
                        y: m[(0, 2)].atan2(m[(0, 0)]),
                        z,
                    }
                } else {
                    Self {
                        x: T::zero(),
                        y: (-m[(2, 0)]).atan2(m[(2, 2)]),
                        z,
                    }
                }
            }
            RotationOrder::Zxy => {
                let cos_x = (m[(1, 0)] * m[(1, 0)] + m[(1, 1)] * m[(1, 1)]).sqrt();
                let x = (-m[(1, 2)]).atan2(cos_x);
                if cos_x > eps {
                    Self {
                        x,
                        y: m[(0, 2)].atan2(m[(2, 2)]),
                        z: m[(1, 0)].atan2(m[(1, 1)]),
                    }
                } else {
                    Self {
                        x,
                        y: T::zero(),
                        z: (-m[(0, 1)]).atan2(m[(0, 0)]),
                    }
                }
            }
            RotationOrder::Xzy => {
                let cos_z = (m[(1, 1)] * m[(1, 1)] + m[(1, 2)] * m[(1, 2)]).sqrt();
                let z = m[(1, 0)].atan2(cos_z);
                if cos_z > eps {
                    Self {
                        x: (-m[(1, 2)]).atan2(m[(1, 1)]),
                        y: (-m[(2, 0)]).atan2(m[(0, 0)]),
                        z,
                    }
                } else {
                    Self {
                        x: m[(2, 1)].atan2(m[(2, 2)]),
                        y: T::zero(),
                        z,
                    }
                }
            }
            RotationOrder::Yxz => {
                let cos_x = (m[(2, 0)] * m[(2, 0)] + m[(2, 2)] * m[(2, 2)]).sqrt();
                let x = m[(2, 1)].atan2(cos_x);
                if cos_x > eps {
                    Self {
                        x,
                        y: (-m[(2, 0)]).atan2(m[(2, 2)]),
                        z: (-m[(0, 1)]).atan2(m[(1, 1)]),
                    }
                } else {
                    Self {
                        x,
                        y: m[(0, 2)].atan2(m[(0, 0)]),
                        z: T::zero(),
                    }
                }
            }
            RotationOrder::Zyx => {
                let cos_y = (m[(0, 0)] * m[(0, 0)] + m[(0, 1)] * m[(0, 1)]).sqrt();
                let y = m[(0, 2)].atan2(cos_y);
                if cos_y > eps {
                    Self {
                        x: (-m[(1, 2)]).atan2(m[(2, 2)]),
                        y,
                        z: (-m[(0, 1)]).atan2(m[(0, 0)]),
                    }
                } else {
                    Self {
                        x: T::zero(),
                        y,
                        z: m[(1, 0)].atan2(m[(1, 1)]),
                    }
                }
            }
        }
    }
}
