//! Function composition
//!
//! - [`compose`]: right-to-left composition, `compose(f, g)(x) == f(g(x))`
//! - [`pipe`]: left-to-right composition, `pipe(f, g)(x) == g(f(x))`
//! - [`compose!`](crate::compose!): right-to-left composition of any number of functions
//! - [`identity`]: the unit of composition
//!
//! # Laws
//!
//! - **Associativity**: `compose(f, compose(g, h)) == compose(compose(f, g), h)`
//! - **Identity**: `compose(identity, f) == f == compose(f, identity)`
//!
//! # Examples
//!
//! ```
//! use hofkit::{compose, pipe};
//!
//! let add_one = |x: i32| x + 1;
//! let double = |x: i32| x * 2;
//!
//! assert_eq!(compose(add_one, double)(5), 11); // add_one(double(5))
//! assert_eq!(pipe(add_one, double)(5), 12); // double(add_one(5))
//! ```

/// Compose two functions right-to-left.
///
/// The returned function applies `g` first, then `f`.
#[inline]
pub fn compose<A, B, C, F, G>(f: F, g: G) -> impl Fn(A) -> C
where
    F: Fn(B) -> C,
    G: Fn(A) -> B,
{
    move |input| f(g(input))
}

/// Compose two functions left-to-right.
///
/// The returned function applies `f` first, then `g`.
#[inline]
pub fn pipe<A, B, C, F, G>(f: F, g: G) -> impl Fn(A) -> C
where
    F: Fn(A) -> B,
    G: Fn(B) -> C,
{
    move |input| g(f(input))
}

/// Returns the value unchanged.
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Compose any number of functions right-to-left.
///
/// `compose!(f, g, h)(x) == f(g(h(x)))`. A single function is returned as is.
///
/// # Example
///
/// ```
/// use hofkit::compose;
///
/// let add_one = |x: i32| x + 1;
/// let double = |x: i32| x * 2;
/// let square = |x: i32| x * x;
///
/// let composed = compose!(add_one, double, square);
/// assert_eq!(composed(3), 19); // add_one(double(square(3)))
/// ```
#[macro_export]
macro_rules! compose {
    ($function:expr $(,)?) => {
        $function
    };

    ($outer:expr, $($rest:expr),+ $(,)?) => {{
        let outer = $outer;
        let inner = $crate::compose!($($rest),+);
        move |input| outer(inner(input))
    }};
}
