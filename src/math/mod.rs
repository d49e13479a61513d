pub mod affine;
pub mod decompositions;
pub mod rotation_order;
pub mod utils;
