//! Slicing error types
//!
//! Only bad inputs are errors. Planes that miss the cube, polygons too small
//! to triangulate and edges parallel to a plane simply produce no geometry.

use std::fmt;

/// Error type for the slicing pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliceError {
    /// The slice count was zero
    ZeroSliceCount,
    /// The model-view matrix has no inverse, so slices cannot be lifted
    /// back to world space
    SingularTransform,
    /// The model-view matrix contains NaN or infinite elements
    NonFiniteTransform,
}

impl fmt::Display for SliceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SliceError::ZeroSliceCount => write!(f, "Slice count must be at least 1"),
            SliceError::SingularTransform => write!(f, "Model-view matrix is not invertible"),
            SliceError::NonFiniteTransform => write!(f, "Model-view matrix contains non-finite values"),
        }
    }
}

impl std::error::Error for SliceError {}
