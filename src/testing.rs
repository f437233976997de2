//! Testing utilities and helpers for hofkit
//!
//! This module provides small building blocks for testing code that wraps
//! functions: call counters, producers that fail on demand, a recording log
//! sink, assertion macros, and property-based testing support.
//!
//! # Examples
//!
//! ## Counting producer calls
//!
//! ```rust
//! use hofkit::{assert_calls, memoize};
//! use hofkit::testing::CallCounter;
//!
//! let counter = CallCounter::new();
//! let memo = memoize({
//!     let counter = counter.clone();
//!     move || counter.tick()
//! });
//!
//! memo.get();
//! memo.get();
//! assert_calls!(counter, 1);
//! ```
//!
//! ## Flaky producers
//!
//! ```rust
//! use hofkit::retry;
//! use hofkit::testing::flaky;
//!
//! let (counter, producer) = flaky(2, "ok", "transient");
//! assert_eq!(retry(producer, 2).call(), Ok("ok"));
//! assert_eq!(counter.count(), 3);
//! ```

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::logging::LogSink;

/// A shared call counter.
///
/// Clones share the same count, so one clone can move into a closure while
/// the test keeps another to inspect.
#[derive(Debug, Clone, Default)]
pub struct CallCounter {
    count: Rc<Cell<usize>>,
}

impl CallCounter {
    /// Create a counter starting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one call and return the updated count.
    pub fn tick(&self) -> usize {
        let next = self.count.get() + 1;
        self.count.set(next);
        next
    }

    /// Number of calls recorded so far.
    pub fn count(&self) -> usize {
        self.count.get()
    }
}

/// Build a producer that fails `failures` times, then always succeeds.
///
/// Returns the counter tracking how often the producer ran.
pub fn flaky<T, E>(
    failures: usize,
    value: T,
    error: E,
) -> (CallCounter, impl FnMut() -> Result<T, E>)
where
    T: Clone,
    E: Clone,
{
    let counter = CallCounter::new();
    let calls = counter.clone();
    let producer = move || {
        if calls.tick() <= failures {
            Err(error.clone())
        } else {
            Ok(value.clone())
        }
    };
    (counter, producer)
}

/// Build a producer that always fails with `error`.
pub fn always_failing<T, E>(error: E) -> (CallCounter, impl FnMut() -> Result<T, E>)
where
    E: Clone,
{
    let counter = CallCounter::new();
    let calls = counter.clone();
    let producer = move || {
        calls.tick();
        Err(error.clone())
    };
    (counter, producer)
}

/// A [`LogSink`] that keeps every message in memory.
///
/// Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    messages: Rc<RefCell<Vec<String>>>,
}

impl RecordingSink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded messages.
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl LogSink for RecordingSink {
    fn log(&mut self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

/// Assert that a [`CallCounter`] recorded exactly the expected number of calls.
///
/// # Example
///
/// ```rust
/// use hofkit::assert_calls;
/// use hofkit::testing::CallCounter;
///
/// let counter = CallCounter::new();
/// counter.tick();
/// assert_calls!(counter, 1);
/// ```
#[macro_export]
macro_rules! assert_calls {
    ($counter:expr, $expected:expr) => {{
        let actual = $counter.count();
        if actual != $expected {
            panic!("Expected {} calls, got {}", $expected, actual);
        }
    }};
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl Arbitrary for crate::RetryPolicy {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (0u32..64).prop_map(crate::RetryPolicy::new).boxed()
    }
}
