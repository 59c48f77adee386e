use crate::algebra::SparseFormatError;
use thiserror::Error;

/// Error type returned by model loading and by warm start translation.
///
/// Every variant maps to a stable integer status code via [`ModelError::code`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// A required input vector was not supplied
    #[error("Required argument \"{0}\" is missing")]
    ArgumentNull(&'static str),
    /// Problem dimensions or vector lengths are inconsistent
    #[error("Bad dimension for \"{0}\"")]
    InvalidDimension(&'static str),
    /// A vector holds a non-finite or inconsistent value
    #[error("Invalid value in \"{0}\"")]
    InvalidVector(&'static str),
    /// The constraint matrix is malformed
    #[error("Invalid constraint matrix: {0}")]
    InvalidMatrix(#[from] SparseFormatError),
    /// The operation is not available for the current formulation
    #[error("Operation not implemented: {0}")]
    NotImplemented(&'static str),
}

impl ModelError {
    /// Integer status code of the error.
    pub fn code(&self) -> i32 {
        match self {
            ModelError::ArgumentNull(_) => 102,
            ModelError::InvalidDimension(_) => 103,
            ModelError::InvalidMatrix(_) => 104,
            ModelError::InvalidVector(_) => 105,
            ModelError::NotImplemented(_) => 109,
        }
    }
}

#[test]
fn test_error_codes() {
    let err: ModelError = SparseFormatError::BadRowval.into();
    assert_eq!(err.code(), 104);
    assert_eq!(
        err.to_string(),
        "Invalid constraint matrix: Row value exceeds the matrix row dimension"
    );
    assert_eq!(ModelError::ArgumentNull("x").code(), 102);
    assert_eq!(ModelError::NotImplemented("dual").code(), 109);
}
