//! Error types for venndraw operations.
//!
//! This module provides the main error type [`VennError`] which wraps
//! the error conditions that can occur while computing labels or rendering.

use std::io;

use thiserror::Error;

use venndraw_core::region::RegionError;

use crate::labels::UnknownFillMode;

/// The main error type for venndraw operations.
///
/// Every error is immediate: nothing is retried and no partial figure is
/// produced.
#[derive(Debug, Error)]
pub enum VennError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Wrong set count, mismatched names or collections, unsupported fill
    /// mode, too few colors, or labels computed for another set count.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A color string was rejected by the color backend.
    #[error("Style error: {0}")]
    Style(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for VennError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

impl From<RegionError> for VennError {
    fn from(error: RegionError) -> Self {
        Self::InvalidArgument(error.to_string())
    }
}

impl From<UnknownFillMode> for VennError {
    fn from(error: UnknownFillMode) -> Self {
        Self::InvalidArgument(error.to_string())
    }
}
