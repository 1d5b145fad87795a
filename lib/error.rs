//! Errors raised when a Pauli index or matrix shape is unusable.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PauliError {
    /// A Pauli index outside `0..=3` was requested.
    #[error("invalid Pauli index {0}: must be one of 0 (I), 1 (x), 2 (y), 3 (z)")]
    InvalidIndex(usize),

    /// A matrix cannot be split into four equal spin blocks.
    #[error("invalid dimension {rows} × {cols}: cannot split into 2 × 2 spin blocks")]
    InvalidDimension { rows: usize, cols: usize },

    /// Block decomposition was asked for a component other than I, x, y, z.
    #[error("Pauli block component {0} is not implemented")]
    NotImplemented(usize),

    /// Block components passed to a composition do not share a shape.
    #[error("Pauli block components must all have the same shape")]
    ShapeMismatch,
}

pub type PauliResult<T> = Result<T, PauliError>;
