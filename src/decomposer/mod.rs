pub mod evaluation;
pub mod inputs;

pub use evaluation::{evaluate, DecompositionResult, EvaluateError};
pub use inputs::{DecomposerInputs, DecomposerInputsBuilder, MatrixCells};
