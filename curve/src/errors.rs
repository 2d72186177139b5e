//! Error types for curve and field arithmetic.

use thiserror::Error;

/// Errors raised by modular arithmetic, point operations and encodings.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum CurveError {
    /// An operand has no inverse modulo the requested modulus, or a modulus
    /// is too small to define a residue ring.
    #[error("invalid operand for modular arithmetic")]
    InvalidOperand,
    /// The point at infinity was passed where affine coordinates are needed.
    #[error("point at infinity has no affine encoding")]
    PointAtInfinity,
    /// A point does not satisfy the curve equation.
    #[error("point is not on the curve")]
    NotOnCurve,
    /// An integer does not fit in the requested number of bytes.
    #[error("integer does not fit in {0} bytes")]
    Overflow(usize),
}
