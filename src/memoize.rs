//! Memoization of zero-argument producers
//!
//! [`memoize`] wraps a producer so that it runs at most once. The first call to
//! [`Memoized::get`] evaluates the producer and caches its value; every later
//! call hands back the same cached value without running anything.
//!
//! Evaluation is lazy: wrapping a producer does not call it. Use
//! [`Memoized::eager`] when the value should be computed at construction.
//!
//! # Examples
//!
//! ```
//! use hofkit::memoize;
//! use std::cell::Cell;
//!
//! let calls = Cell::new(0);
//! let answer = memoize(|| {
//!     calls.set(calls.get() + 1);
//!     42
//! });
//!
//! assert_eq!(calls.get(), 0); // nothing evaluated yet
//! assert_eq!(*answer.get(), 42);
//! assert_eq!(*answer.get(), 42);
//! assert_eq!(calls.get(), 1); // evaluated exactly once
//! ```
//!
//! # Failures
//!
//! A failing producer is just a producer returning a `Result`. The `Result` is
//! cached like any other value, so an `Err` is returned on every call and the
//! producer is never re-run:
//!
//! ```
//! use hofkit::memoize;
//!
//! let config = memoize(|| "not a number".parse::<u16>());
//! assert!(config.get().is_err());
//! assert!(config.get().is_err());
//! ```
//!
//! If the producer panics, the panic propagates to the caller. The producer has
//! been consumed by then, so the wrapper is poisoned and every later call panics.

use std::cell::{Cell, OnceCell};
use std::fmt;
use std::ops::Deref;

const POISONED: &str = "memoized producer panicked during evaluation";

/// A zero-argument producer whose value is computed once and cached.
///
/// Created by [`memoize`] (lazy) or [`Memoized::eager`].
///
/// # Thread Safety
///
/// `Memoized` is not `Sync`. It is meant to be owned by a single call stack.
pub struct Memoized<T, F = fn() -> T> {
    value: OnceCell<T>,
    producer: Cell<Option<F>>,
}

/// Wrap `producer` so that it is evaluated at most once, on first use.
///
/// # Example
///
/// ```
/// use hofkit::memoize;
///
/// let greeting = memoize(|| format!("hello {}", "world"));
/// assert_eq!(greeting.get(), "hello world");
/// assert!(greeting.is_evaluated());
/// ```
pub fn memoize<T, F>(producer: F) -> Memoized<T, F>
where
    F: FnOnce() -> T,
{
    Memoized {
        value: OnceCell::new(),
        producer: Cell::new(Some(producer)),
    }
}

impl<T, F> Memoized<T, F>
where
    F: FnOnce() -> T,
{
    /// Evaluate `producer` immediately and cache its value.
    ///
    /// ```
    /// use hofkit::Memoized;
    ///
    /// let ready = Memoized::eager(|| 7);
    /// assert!(ready.is_evaluated());
    /// assert_eq!(*ready.get(), 7);
    /// ```
    pub fn eager(producer: F) -> Self {
        Memoized {
            value: OnceCell::from(producer()),
            producer: Cell::new(None),
        }
    }

    /// Return the cached value, evaluating the producer on the first call.
    ///
    /// # Panics
    ///
    /// Panics if the producer panicked during an earlier evaluation.
    pub fn get(&self) -> &T {
        self.value.get_or_init(|| match self.producer.take() {
            Some(producer) => {
                #[cfg(feature = "tracing")]
                tracing::debug!("evaluating memoized producer");
                producer()
            }
            None => panic!("{}", POISONED),
        })
    }

    /// Return an owned copy of the cached value.
    pub fn get_cloned(&self) -> T
    where
        T: Clone,
    {
        self.get().clone()
    }

    /// Consume the wrapper and return its value, evaluating it if needed.
    pub fn into_value(self) -> T {
        if let Some(value) = self.value.into_inner() {
            return value;
        }
        match self.producer.into_inner() {
            Some(producer) => producer(),
            None => panic!("{}", POISONED),
        }
    }

    /// Turn the wrapper into a plain closure returning clones of the value.
    ///
    /// ```
    /// use hofkit::memoize;
    ///
    /// let id = memoize(|| String::from("abc")).into_fn();
    /// assert_eq!(id(), "abc");
    /// assert_eq!(id(), "abc");
    /// ```
    pub fn into_fn(self) -> impl Fn() -> T
    where
        T: Clone,
    {
        move || self.get_cloned()
    }
}

impl<T, F> Memoized<T, F> {
    /// Returns true once the producer has run.
    pub fn is_evaluated(&self) -> bool {
        self.value.get().is_some()
    }

    /// Return the cached value without evaluating anything.
    pub fn peek(&self) -> Option<&T> {
        self.value.get()
    }
}

impl<T, F> Deref for Memoized<T, F>
where
    F: FnOnce() -> T,
{
    type Target = T;

    fn deref(&self) -> &T {
        self.get()
    }
}

// Manual Debug implementation since the producer is not Debug
impl<T: fmt::Debug, F> fmt::Debug for Memoized<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value.get() {
            Some(value) => f.debug_tuple("Memoized").field(value).finish(),
            None => f.debug_tuple("Memoized").field(&"<pending>").finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::CallCounter;
    use std::panic::{catch_unwind, AssertUnwindSafe};

    #[test]
    fn test_lazy_until_first_get() {
        let counter = CallCounter::new();
        let memo = memoize({
            let counter = counter.clone();
            move || counter.tick()
        });

        assert_eq!(counter.count(), 0);
        assert!(!memo.is_evaluated());
        assert_eq!(memo.peek(), None);

        assert_eq!(*memo.get(), 1);
        assert_eq!(counter.count(), 1);
        assert_eq!(memo.peek(), Some(&1));
    }

    #[test]
    fn test_repeated_calls_return_same_reference() {
        let memo = memoize(|| vec![1, 2, 3]);
        let first: *const Vec<i32> = memo.get();
        let second: *const Vec<i32> = memo.get();
        assert_eq!(first, second);
    }

    #[test]
    fn test_eager_runs_at_construction() {
        let counter = CallCounter::new();
        let memo = Memoized::eager({
            let counter = counter.clone();
            move || counter.tick()
        });

        assert_eq!(counter.count(), 1);
        assert!(memo.is_evaluated());
        assert_eq!(*memo.get(), 1);
        assert_eq!(counter.count(), 1);
    }

    #[test]
    fn test_err_is_cached() {
        let counter = CallCounter::new();
        let memo = memoize({
            let counter = counter.clone();
            move || {
                counter.tick();
                Err::<i32, _>("boom")
            }
        });

        assert_eq!(memo.get(), &Err("boom"));
        assert_eq!(memo.get(), &Err("boom"));
        assert_eq!(counter.count(), 1);
    }

    #[test]
    fn test_into_value_without_prior_get() {
        let memo = memoize(|| String::from("owned"));
        assert_eq!(memo.into_value(), "owned");
    }

    #[test]
    fn test_into_value_after_get() {
        let counter = CallCounter::new();
        let memo = memoize({
            let counter = counter.clone();
            move || counter.tick()
        });
        let _ = memo.get();
        assert_eq!(memo.into_value(), 1);
        assert_eq!(counter.count(), 1);
    }

    #[test]
    fn test_deref_forces_evaluation() {
        let memo = memoize(|| String::from("deref"));
        assert_eq!(memo.len(), 5);
        assert!(memo.is_evaluated());
    }

    #[test]
    fn test_into_fn_clones_value() {
        let counter = CallCounter::new();
        let f = memoize({
            let counter = counter.clone();
            move || counter.tick()
        })
        .into_fn();

        assert_eq!(f(), 1);
        assert_eq!(f(), 1);
        assert_eq!(counter.count(), 1);
    }

    #[test]
    fn test_panicking_producer_poisons() {
        let memo: Memoized<i32, _> = memoize(|| panic!("producer failed"));

        let first = catch_unwind(AssertUnwindSafe(|| *memo.get()));
        assert!(first.is_err());
        assert!(!memo.is_evaluated());

        let second = catch_unwind(AssertUnwindSafe(|| *memo.get()));
        let payload = second.unwrap_err();
        let message = payload
            .downcast_ref::<String>()
            .cloned()
            .unwrap_or_default();
        assert!(message.contains("panicked during evaluation"));
    }

    #[test]
    fn test_debug_output() {
        let memo = memoize(|| 5);
        assert_eq!(format!("{:?}", memo), "Memoized(\"<pending>\")");
        let _ = memo.get();
        assert_eq!(format!("{:?}", memo), "Memoized(5)");
    }

    #[cfg(feature = "tracing")]
    #[tracing_test::traced_test]
    #[test]
    fn test_evaluation_is_traced_once() {
        let memo = memoize(|| 1);
        let _ = memo.get();
        let _ = memo.get();
        logs_assert(|lines: &[&str]| {
            match lines
                .iter()
                .filter(|line| line.contains("evaluating memoized producer"))
                .count()
            {
                1 => Ok(()),
                n => Err(format!("expected one evaluation event, got {}", n)),
            }
        });
    }
}
