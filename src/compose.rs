//! Function composition primitives.
//!
//! This module is the glue layer of the library: it knows nothing about
//! sequences or aggregation, it only combines caller-supplied functions
//! into new functions.
//!
//! - [`pipe!`](crate::pipe) - left-to-right pipelining of unary functions
//! - [`fuse_all`] / [`fuse_any`] - boolean fusion of predicates
//! - [`fuse_transforms`] - dynamic chaining of same-type transforms
//! - [`identity`] - the do-nothing stage
//!
//! This layer raises no errors of its own; it only orchestrates the
//! functions it is given. A stage that cannot consume its predecessor's
//! output is a caller configuration error, and because [`pipe!`]
//! monomorphizes each pipeline at its call site, that error is reported
//! by the compiler rather than at run time.
//!
//! # Example
//!
//! ```
//! use seqcomb::pipe;
//!
//! let shout = pipe!(str::trim, str::to_uppercase);
//! assert_eq!(shout("  hello "), "HELLO");
//! ```

/// The identity function. `pipe!()` with no stages evaluates to this.
pub fn identity<T>(x: T) -> T {
    x
}

/// Boxed predicate over borrowed elements.
///
/// Heterogeneous closures cannot share a concrete type, so fused
/// predicate lists are boxed. Predicates must be pure: fusion
/// short-circuits, and a predicate with side effects would observe an
/// unspecified number of calls.
pub type Predicate<T> = Box<dyn Fn(&T) -> bool>;

/// Boxed same-type transform, for dynamically sized pipelines.
pub type Transform<T> = Box<dyn Fn(T) -> T>;

/// Fuses predicates with AND semantics.
///
/// The returned predicate is true for an element iff every input
/// predicate is true for it, short-circuiting on the first false.
/// An empty list is vacuously true.
///
/// # Example
///
/// ```
/// use seqcomb::compose::{fuse_all, Predicate};
///
/// let preds: Vec<Predicate<i32>> = vec![
///     Box::new(|x| *x > 0),
///     Box::new(|x| x % 2 == 0),
/// ];
/// let positive_even = fuse_all(preds);
/// assert!(positive_even(&4));
/// assert!(!positive_even(&3));
/// ```
pub fn fuse_all<T>(predicates: Vec<Predicate<T>>) -> impl Fn(&T) -> bool {
    move |elem| predicates.iter().all(|p| p(elem))
}

/// Fuses predicates with OR semantics.
///
/// True iff at least one input predicate is true, short-circuiting on
/// the first true. An empty list is false.
pub fn fuse_any<T>(predicates: Vec<Predicate<T>>) -> impl Fn(&T) -> bool {
    move |elem| predicates.iter().any(|p| p(elem))
}

/// Chains same-type transforms left-to-right.
///
/// This is the dynamically sized counterpart of [`pipe!`](crate::pipe):
/// use it when the number of stages is only known at run time (e.g. a
/// pipeline built from configuration). All stages must share one
/// value type.
pub fn fuse_transforms<T>(transforms: Vec<Transform<T>>) -> impl Fn(T) -> T {
    move |value| transforms.iter().fold(value, |acc, t| t(acc))
}

/// Left-to-right function pipelining.
///
/// `pipe!(f1, f2, ..., fn)` evaluates to a closure applying the stages
/// in order, each stage receiving the previous stage's single return
/// value. `pipe!()` evaluates to [`identity`]; `pipe!(g)` is `g` itself.
///
/// Each stage expression is evaluated once, when the pipeline is built.
///
/// # Example
///
/// ```
/// use seqcomb::pipe;
///
/// let f = pipe!(|x: i32| x + 1, |x: i32| x * 2);
/// assert_eq!(f(3), 8);
/// assert_eq!(pipe!()(42), 42);
/// ```
#[macro_export]
macro_rules! pipe {
    () => {
        $crate::compose::identity
    };
    ($f:expr $(,)?) => {
        $f
    };
    ($f:expr, $($rest:expr),+ $(,)?) => {{
        let __head = $f;
        let __tail = $crate::pipe!($($rest),+);
        move |x| __tail(__head(x))
    }};
}
