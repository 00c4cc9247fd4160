use thiserror::Error;

/// Failures of the lattice kernel and its combinators.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    /// Element-wise matrix operation on operands of different shapes.
    #[error("shape mismatch: {left:?} vs {right:?} (rows, cols)")]
    ShapeMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },

    /// Quantizer selector outside 0..=4.
    #[error("invalid precision selector {0}, expected 0..=4")]
    InvalidPrecisionSelector(usize),

    /// Lattice or matrix dimensions that break the lattice invariants.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// Non-finite or out-of-range configuration value.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

pub type SimResult<T> = Result<T, SimError>;

/// Failure reported by a renderer. Never propagated into the kernel.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("state does not match a {rows}x{cols} lattice")]
    Dimensions { rows: usize, cols: usize },
}
