//! The generic fold primitive and its derived aggregates.
//!
//! [`reduce_with`] is the single primitive from which the aggregate
//! combinators (`sum_with`, `average_with`, `select_greatest`,
//! `prefix_average_with`) and the sequential windowing algorithm are
//! derived. Its evaluation order - strictly left-to-right, one pass -
//! is a hard guarantee the rest of the library depends on.
//!
//! # Empty input
//!
//! Folding an empty sequence returns the seed unchanged. Averaging an
//! empty sequence yields `f64::NAN` (0.0 / 0.0); this is documented
//! behavior, not an error. Callers that need to forbid empty input must
//! validate before calling.
//!
//! # Example
//!
//! ```
//! use seqcomb::reduce::{reduce_with, sum_with};
//!
//! let count = reduce_with(|acc: usize, _elem: &i32| acc + 1, 0);
//! assert_eq!(count(&[10, 20, 30]), 3);
//!
//! let total = sum_with(|x: &f64| *x);
//! assert_eq!(total(&[1.0, 2.0, 3.0]), 6.0);
//! ```

/// Builds a reusable left-to-right fold over a sequence.
///
/// The seed is cloned per invocation, so the returned combinator is a
/// pure function: applying it twice to the same input yields equal
/// results, and no state leaks between invocations.
///
/// # Arguments
///
/// * `reducer` - the fold step `(accumulator, element) -> accumulator`
/// * `seed` - the initial accumulator; returned unchanged for empty input
pub fn reduce_with<T, Acc, F>(reducer: F, seed: Acc) -> impl Fn(&[T]) -> Acc
where
    Acc: Clone,
    F: Fn(Acc, &T) -> Acc,
{
    move |seq: &[T]| seq.iter().fold(seed.clone(), |acc, elem| reducer(acc, elem))
}

/// Sum of a numeric sequence. Empty input sums to 0.0.
pub fn sum(xs: &[f64]) -> f64 {
    sum_with(|x: &f64| *x)(xs)
}

/// Arithmetic mean of a numeric sequence. Empty input yields NaN.
pub fn average(xs: &[f64]) -> f64 {
    average_with(|x: &f64| *x)(xs)
}

/// Greatest value in a numeric sequence. Empty input yields NaN.
pub fn max(xs: &[f64]) -> f64 {
    // f64::max(NAN, x) is x, so the NaN seed never poisons the fold.
    reduce_with(|acc: f64, x: &f64| acc.max(*x), f64::NAN)(xs)
}

/// Sums a projection over a sequence: seed 0.0, reducer `acc + f(elem)`.
pub fn sum_with<T, F>(f: F) -> impl Fn(&[T]) -> f64
where
    F: Fn(&T) -> f64,
{
    reduce_with(move |acc, elem| acc + f(elem), 0.0)
}

/// Averages a projection over a sequence.
///
/// `sum_with(f)` divided by sequence length. Division by zero on an
/// empty sequence is not special-cased: the result is NaN.
pub fn average_with<T, F>(f: F) -> impl Fn(&[T]) -> f64
where
    F: Fn(&T) -> f64,
{
    let total = sum_with(f);
    move |seq: &[T]| total(seq) / seq.len() as f64
}

/// Selects the element with the strictly greatest projection.
///
/// The seed is the initial "current best"; an empty sequence returns it
/// unchanged. Ties keep the earlier element (or the seed): the reducer
/// replaces the running best only when `f(elem) > f(best)`. A NaN
/// projection never beats the running best, since NaN comparisons are
/// false.
///
/// # Example
///
/// ```
/// use seqcomb::reduce::select_greatest;
///
/// let biggest = select_greatest(|x: &(i32, f64)| x.1, (0, 0.0));
/// assert_eq!(biggest(&[(1, 5.0), (2, 800.0), (3, 100.0)]), (2, 800.0));
/// ```
pub fn select_greatest<T, F>(f: F, seed: T) -> impl Fn(&[T]) -> T
where
    T: Clone,
    F: Fn(&T) -> f64,
{
    reduce_with(
        move |best: T, elem: &T| {
            if f(elem) > f(&best) {
                elem.clone()
            } else {
                best
            }
        },
        seed,
    )
}

/// Explicit running-mean accumulator.
///
/// State that a mutable-closure formulation would hide is carried in the
/// accumulator type instead, so it is visible in the fold's signature
/// and cannot leak between invocations.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RunningMean {
    pub sum: f64,
    pub count: usize,
}

impl RunningMean {
    /// Folds one value in, returning the updated accumulator.
    pub fn push(mut self, value: f64) -> Self {
        self.sum += value;
        self.count += 1;
        self
    }

    /// Current mean. NaN while empty.
    pub fn value(&self) -> f64 {
        self.sum / self.count as f64
    }
}

/// Running mean of a projection, one output per element.
///
/// Output position `i` holds the mean of `f` over elements `[0, i]`.
/// Threaded through [`reduce_with`] with a [`RunningMean`] accumulator.
pub fn prefix_average_with<T, F>(f: F) -> impl Fn(&[T]) -> Vec<f64>
where
    F: Fn(&T) -> f64,
{
    let fold = reduce_with(
        move |(mean, mut out): (RunningMean, Vec<f64>), elem: &T| {
            let mean = mean.push(f(elem));
            out.push(mean.value());
            (mean, out)
        },
        (RunningMean::default(), Vec::new()),
    );
    move |seq: &[T]| fold(seq).1
}
