/// Axis sequence used when expressing an orientation as Euler angles.
///
/// The variant names the order in which the axis rotations are applied;
/// discriminants match the host's enum selector values.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RotationOrder {
    #[default]
    Xyz = 0,
    Yzx = 1,
    Zxy = 2,
    Xzy = 3,
    Yxz = 4,
    Zyx = 5,
}

impl RotationOrder {
    pub const ALL: [RotationOrder; 6] = [
        RotationOrder::Xyz,
        RotationOrder::Yzx,
        RotationOrder::Zxy,
        RotationOrder::Xzy,
        RotationOrder::Yxz,
        RotationOrder::Zyx,
    ];

    pub fn selector(self) -> i16 {
        self as i16
    }
}

impl TryFrom<i16> for RotationOrder {
    type Error = i16;

    fn try_from(selector: i16) -> Result<Self, i16> {
        match selector {
            0 => Ok(RotationOrder::Xyz),
            1 => Ok(RotationOrder::Yzx),
            2 => Ok(RotationOrder::Zxy),
            3 => Ok(RotationOrder::Xzy),
            4 => Ok(RotationOrder::Yxz),
            5 => Ok(RotationOrder::Zyx),
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_round_trip() {
        for order in RotationOrder::ALL {
            assert_eq!(RotationOrder::try_from(order.selector()), Ok(order));
        }
    }

    #[test]
    fn out_of_range_selectors_are_rejected() {
        assert_eq!(RotationOrder::try_from(6), Err(6));
        assert_eq!(RotationOrder::try_from(-1), Err(-1));
    }
}
