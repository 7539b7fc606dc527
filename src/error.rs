/// Error types for numvec

use thiserror::Error;

/// Result type alias for vector operations
pub type Result<T> = std::result::Result<T, VecError>;

/// Errors raised while building or operating on a [`NumVec`](crate::NumVec)
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VecError {
    /// Construction input that fits none of the accepted shapes
    #[error("Unsupported input type: {0}")]
    UnsupportedInput(String),

    /// Operand type the operation does not accept
    #[error("{op} with type {operand} not supported")]
    UnsupportedOperand {
        /// Operation name
        op: &'static str,
        /// Offending operand type
        operand: &'static str,
    },

    /// Operand combination with no defined semantics yet
    #[error("{op} with a {operand} operand is not implemented")]
    NotImplemented {
        /// Operation name
        op: &'static str,
        /// Offending operand type
        operand: &'static str,
    },

    /// Zero divisor in division or modulo
    #[error("Division by zero in {op}")]
    DivisionByZero {
        /// Operation name
        op: &'static str,
    },

    /// Inner product is only defined against a raw coordinate sequence
    #[error("The inner product requires a coordinate sequence, not a vector")]
    InnerProductWithVector,

    /// Index list entry past the end of the vector
    #[error("Index {index} out of range for vector of dimension {dim}")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Vector dimension
        dim: usize,
    },

    /// Index whose zero-filled extension cannot be represented or allocated
    #[error("Index {index} is too large to extend the vector")]
    IndexTooLarge {
        /// Requested index
        index: usize,
    },

    /// Requested minimum dimension that cannot be allocated
    #[error("Dimension {dim} is too large to allocate")]
    DimensionTooLarge {
        /// Requested dimension
        dim: usize,
    },
}
