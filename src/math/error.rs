use thiserror::Error;

/// Errors from building a matrix out of runtime-sized data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DimensionError {
    #[error("a {dimension}x{dimension} matrix needs {expected} elements, got {actual}")]
    LengthMismatch {
        dimension: usize,
        expected: usize,
        actual: usize,
    },
}
