//! Sequence Combinators
//!
//! A small functional toolkit for in-memory sequence transformation:
//! windowed aggregation (chunks, strided windows, sequential windows,
//! moving averages) built on a single generic fold primitive, plus the
//! composition engine that glues combinators into pipelines.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                         seqcomb                            │
//! ├────────────────────────────────────────────────────────────┤
//! │  compose/    - pipe!, identity, predicate/transform fusion │
//! │  reduce/     - reduce_with and derived aggregates          │
//! │  window/     - chunking, strided and sequential windows    │
//! │  transform/  - map, filter, some                           │
//! │  config/     - serializable pipeline descriptions          │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every combinator is a pure function from configuration to a function
//! from sequence to result. Inputs are never mutated; invocations share
//! no state; evaluation is single-threaded, synchronous, and strictly
//! left-to-right.
//!
//! # Example
//!
//! ```
//! use seqcomb::pipe;
//! use seqcomb::transform::filter;
//! use seqcomb::reduce::sum;
//!
//! // Total stock of items under 200.
//! let low_stock_total = pipe!(
//!     filter(|stock: &f64| *stock < 200.0),
//!     |small: Vec<f64>| sum(&small)
//! );
//! assert_eq!(low_stock_total(&[123.0, 452.0, 142.0]), 265.0);
//! ```

pub mod compose;
pub mod config;
pub mod prelude;
pub mod reduce;
pub mod transform;
pub mod window;

// Re-exports - Composition
pub use compose::{fuse_all, fuse_any, fuse_transforms, identity, Predicate, Transform};

// Re-exports - Fold & aggregates
pub use reduce::{
    average, average_with, max, prefix_average_with, reduce_with, select_greatest, sum, sum_with,
    RunningMean,
};

// Re-exports - Windowing
pub use window::{
    chunks, chunks_with, moving_average, sequential_windows, sequential_windows_with,
    windows_with, WindowError, WindowSpec,
};

// Re-exports - Sequence combinators
pub use transform::{filter, map, some};

// Re-exports - Configuration
pub use config::{Aggregate, AggregationConfig, ExperimentMetadata, WindowStrategy};
