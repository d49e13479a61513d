/// Basis vectors with a norm at or below this are treated as collapsed.
pub const DEGENERACY_EPSILON: f64 = 1.0e-12;

/// Cosine magnitude of the middle Euler angle below which the extraction
/// switches to its gimbal-lock branch.
pub const GIMBAL_LOCK_EPSILON: f64 = 1.0e-7;
