//! Prelude module for convenient imports.
//!
//! Re-exports the most commonly used combinators and types for
//! ergonomic usage of the library.
//!
//! # Usage
//!
//! ```
//! use seqcomb::prelude::*;
//!
//! let avg3 = moving_average(3).unwrap();
//! assert_eq!(avg3(&[1.0, 2.0, 3.0]), vec![2.0, 2.5, 3.0]);
//! ```

// ============================================================================
// Composition
// ============================================================================

pub use crate::compose::{fuse_all, fuse_any, fuse_transforms, identity, Predicate, Transform};
pub use crate::pipe;

// ============================================================================
// Fold & Aggregates
// ============================================================================

pub use crate::reduce::{
    average, average_with, max, prefix_average_with, reduce_with, select_greatest, sum, sum_with,
    RunningMean,
};

// ============================================================================
// Windowing
// ============================================================================

pub use crate::window::{
    chunks, chunks_with, moving_average, sequential_windows, sequential_windows_with,
    windows_with, WindowError, WindowSpec,
};

// ============================================================================
// Sequence Combinators
// ============================================================================

pub use crate::transform::{filter, map, some};

// ============================================================================
// Configuration
// ============================================================================

pub use crate::config::{Aggregate, AggregationConfig, ExperimentMetadata, WindowStrategy};

// ============================================================================
// Type Aliases for Convenience
// ============================================================================

/// Numeric sequence type used throughout the examples.
pub type NumericSeq = Vec<f64>;
