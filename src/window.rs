//! Windowing and chunking algorithms.
//!
//! Two distinct algorithms, both configured by a [`WindowSpec`] and a
//! per-window transform:
//!
//! - **Strided walk** ([`windows_with`], [`chunks_with`], [`chunks`]):
//!   advances a start index by `step` and applies the transform to each
//!   slice `[start, start + size)`, clipped at the sequence end. With
//!   `step == size` this is non-overlapping chunking; the trailing chunk
//!   may be shorter. Implemented as a direct index loop - one transform
//!   invocation per *window* - rather than through
//!   [`reduce_with`](crate::reduce::reduce_with), which would cost one
//!   reducer invocation per *element* for no benefit.
//! - **Sequential windows** ([`sequential_windows_with`],
//!   [`sequential_windows`], [`moving_average`]): one output per input
//!   element, each reflecting the window starting at that element,
//!   clipped at the sequence end. Implemented through `reduce_with`
//!   because it must emit once per source element. The two algorithms
//!   have different output cardinalities (per-chunk vs per-element) and
//!   are deliberately kept separate.
//!
//! # Validation
//!
//! Window geometry is validated when the combinator is *constructed*,
//! before any element is touched. A zero `size` or `step` is a
//! configuration error ([`WindowError`]), never deferred into the fold.
//!
//! # Example
//!
//! ```
//! use seqcomb::window::{chunks, moving_average};
//!
//! let chunk3 = chunks::<i32>(3).unwrap();
//! assert_eq!(chunk3(&[1, 2, 3, 4, 5]), vec![vec![1, 2, 3], vec![4, 5]]);
//!
//! let avg3 = moving_average(3).unwrap();
//! assert_eq!(avg3(&[1.0, 2.0, 3.0, 4.0, 5.0]), vec![2.0, 3.0, 4.0, 4.5, 5.0]);
//! ```

use std::fmt;

use crate::reduce::{average, reduce_with};

/// Error type for invalid window geometry.
///
/// Raised synchronously at combinator construction time. Fatal to that
/// pipeline construction - not retried, not recoverable within the
/// library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowError {
    /// Window size must be strictly positive.
    ZeroSize,
    /// Step must be strictly positive (a zero step would never advance).
    ZeroStep,
}

impl fmt::Display for WindowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroSize => write!(f, "window size must be a positive integer, got 0"),
            Self::ZeroStep => write!(f, "window step must be a positive integer, got 0"),
        }
    }
}

impl std::error::Error for WindowError {}

/// Window geometry: slice length and stride between slice starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct WindowSpec {
    /// Number of elements per window.
    pub size: usize,
    /// Elements to advance between window starts. `step == size` gives
    /// non-overlapping chunks; `step < size` gives overlapping windows.
    pub step: usize,
}

impl WindowSpec {
    /// Creates a spec with `step` defaulted to `size` (chunking).
    pub fn new(size: usize) -> Self {
        Self { size, step: size }
    }

    /// Overrides the step.
    pub fn with_step(mut self, step: usize) -> Self {
        self.step = step;
        self
    }

    /// Rejects zero size or step.
    pub fn validate(&self) -> Result<(), WindowError> {
        if self.size == 0 {
            return Err(WindowError::ZeroSize);
        }
        if self.step == 0 {
            return Err(WindowError::ZeroStep);
        }
        Ok(())
    }
}

/// Strided window walk with a per-window transform.
///
/// Applies `f` to each slice `[start, start + size)` for starts `0,
/// step, 2*step, ...` while `start < len`. Windows are clipped at the
/// sequence end, so the final windows may be shorter.
pub fn windows_with<T, R, F>(
    spec: WindowSpec,
    f: F,
) -> Result<impl Fn(&[T]) -> Vec<R>, WindowError>
where
    F: Fn(&[T]) -> R,
{
    spec.validate()?;
    Ok(move |seq: &[T]| {
        let mut out = Vec::with_capacity(seq.len().div_ceil(spec.step));
        let mut start = 0;
        while start < seq.len() {
            let end = (start + spec.size).min(seq.len());
            out.push(f(&seq[start..end]));
            start += spec.step;
        }
        out
    })
}

/// Non-overlapping chunking with a per-chunk transform.
///
/// Partitions the sequence into consecutive slices of length `size`
/// (the final slice may be shorter), applies `f` to each, and returns
/// the ordered results. Equivalent to [`windows_with`] with
/// `step == size`.
pub fn chunks_with<T, R, F>(f: F, size: usize) -> Result<impl Fn(&[T]) -> Vec<R>, WindowError>
where
    F: Fn(&[T]) -> R,
{
    windows_with(WindowSpec::new(size), f)
}

/// Non-overlapping chunking returning the slices themselves.
pub fn chunks<T: Clone>(size: usize) -> Result<impl Fn(&[T]) -> Vec<Vec<T>>, WindowError> {
    chunks_with(|w: &[T]| w.to_vec(), size)
}

/// Per-element windows with a transform: one output per input element.
///
/// For each index `i`, computes `f` over the slice `[i, i + window)`,
/// clipped at the sequence end for the final `window - 1` positions.
/// Output length always equals input length.
///
/// Folded through [`reduce_with`], threading the cursor in the
/// accumulator: one reducer invocation per source element.
pub fn sequential_windows_with<T, R, F>(
    window: usize,
    f: F,
) -> Result<impl Fn(&[T]) -> Vec<R>, WindowError>
where
    R: Clone,
    F: Fn(&[T]) -> R,
{
    WindowSpec::new(window).validate()?;
    Ok(move |seq: &[T]| {
        let fold = reduce_with(
            |(pos, mut out): (usize, Vec<R>), _elem: &T| {
                let end = (pos + window).min(seq.len());
                out.push(f(&seq[pos..end]));
                (pos + 1, out)
            },
            (0usize, Vec::with_capacity(seq.len())),
        );
        fold(seq).1
    })
}

/// Per-element windows returning the slices themselves.
pub fn sequential_windows<T: Clone>(
    window: usize,
) -> Result<impl Fn(&[T]) -> Vec<Vec<T>>, WindowError> {
    sequential_windows_with(window, |w: &[T]| w.to_vec())
}

/// Moving average: per-element windows reduced by [`average`].
///
/// Output length equals input length; trailing positions average the
/// remaining, shorter tail rather than padding.
pub fn moving_average(window: usize) -> Result<impl Fn(&[f64]) -> Vec<f64>, WindowError> {
    sequential_windows_with(window, average)
}
