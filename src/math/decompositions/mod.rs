pub mod euler;
pub mod trs;
