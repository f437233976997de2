//! Partial application
//!
//! Bind a prefix of a function's arguments and get back a function taking
//! the rest. Bound arguments are cloned on every call, so the result can be
//! called any number of times.
//!
//! ```text
//! partial(f, a)(b)          = f(a, b)
//! partial3(f, a)(b, c)      = f(a, b, c)
//! partial3_2(f, a, b)(c)    = f(a, b, c)
//! ```
//!
//! # Examples
//!
//! ```
//! use hofkit::partial;
//!
//! fn greet(greeting: &str, name: &str) -> String {
//!     format!("{greeting}, {name}!")
//! }
//!
//! let hello = partial(greet, "Hello");
//! assert_eq!(hello("Ada"), "Hello, Ada!");
//! ```

/// Bind the first argument of a binary function.
pub fn partial<A, B, R, F>(function: F, first: A) -> impl Fn(B) -> R
where
    F: Fn(A, B) -> R,
    A: Clone,
{
    move |second| function(first.clone(), second)
}

/// Bind the first argument of a ternary function.
pub fn partial3<A, B, C, R, F>(function: F, first: A) -> impl Fn(B, C) -> R
where
    F: Fn(A, B, C) -> R,
    A: Clone,
{
    move |second, third| function(first.clone(), second, third)
}

/// Bind the first two arguments of a ternary function.
pub fn partial3_2<A, B, C, R, F>(function: F, first: A, second: B) -> impl Fn(C) -> R
where
    F: Fn(A, B, C) -> R,
    A: Clone,
    B: Clone,
{
    move |third| function(first.clone(), second.clone(), third)
}
