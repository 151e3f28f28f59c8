//! Error types for vector operations.

use thiserror::Error;

/// Errors that can occur outside the arithmetic paths of [`Vector3`](crate::Vector3).
///
/// Arithmetic itself never fails; these cover conversion and formatting.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VectorError {
    /// The format spec is not understood for this element kind.
    #[error("invalid format spec {spec:?} for {kind} vector")]
    InvalidFormatSpec {
        /// The rejected spec string.
        spec: String,
        /// Element kind the spec was applied to.
        kind: &'static str,
    },

    /// A slice did not hold exactly three components.
    #[error("expected 3 components, got {len}")]
    SliceLength {
        /// Length of the rejected slice.
        len: usize,
    },
}
