//! Library-wide error type.
use crate::index::ExponentTriple;
use std::fmt;
use std::fmt::{Display, Formatter};

/// Errors signalled by kinematics, stress recovery and model construction.
///
/// Errors are raised at the point of detection. Floating-point overflow (for example in the
/// exponential energy) is *not* an error and propagates as `inf`/`NaN`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The logarithm of a non-positive stretch was requested.
    Domain { quantity: &'static str },
    /// A division by an exactly zero quantity, e.g. normalizing a zero-length direction.
    DivideByZero { quantity: &'static str },
    /// The deformation gradient is not invertible.
    SingularMatrix,
    /// Two sequences that must be parallel have different lengths.
    ShapeMismatch { expected: usize, actual: usize },
    /// The exponents cannot be addressed by the index codec for the given top degree.
    UnaddressableExponents { triple: ExponentTriple, top_degree: usize },
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domain { quantity } => {
                write!(f, "Logarithm of non-positive {quantity} (non-physical deformation)")
            }
            Self::DivideByZero { quantity } => {
                write!(f, "Division by zero: {quantity} vanishes (degenerate deformation)")
            }
            Self::SingularMatrix => write!(f, "Deformation gradient is singular"),
            Self::ShapeMismatch { expected, actual } => {
                write!(f, "Shape mismatch: expected {expected} entries, got {actual}")
            }
            Self::UnaddressableExponents { triple, top_degree } => {
                let ExponentTriple { i, j, k } = triple;
                write!(
                    f,
                    "Exponents ({i}, {j}, {k}) cannot be addressed with top degree {top_degree}"
                )
            }
        }
    }
}

impl std::error::Error for Error {}
