//! Outcome types for detailed retry calls.

use std::error::Error;
use std::fmt;
use std::time::Duration;

/// The failure reported by [`Retrier::call_detailed`](crate::Retrier::call_detailed)
/// once the whole budget has been spent.
///
/// `final_error` is the last attempt's error, untouched; the other fields
/// describe the run that produced it.
///
/// ```rust
/// use hofkit::retry;
///
/// let exhausted = retry(|| Err::<(), _>("always fails"), 2)
///     .call_detailed()
///     .unwrap_err();
///
/// assert_eq!(exhausted.attempts, 3);
/// assert_eq!(exhausted.into_error(), "always fails");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryExhausted<E> {
    /// The error from the final attempt.
    pub final_error: E,
    /// How many times the producer ran.
    pub attempts: u32,
    /// Time from the first attempt to the last failure.
    pub elapsed: Duration,
}

impl<E> RetryExhausted<E> {
    /// Bundle the last error with the run's metadata.
    pub fn new(final_error: E, attempts: u32, elapsed: Duration) -> Self {
        Self {
            final_error,
            attempts,
            elapsed,
        }
    }

    /// Drop the metadata and keep the error.
    pub fn into_error(self) -> E {
        self.final_error
    }

    /// Borrow the last error.
    pub fn error(&self) -> &E {
        &self.final_error
    }
}

impl<E: fmt::Display> fmt::Display for RetryExhausted<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plural = if self.attempts == 1 { "" } else { "s" };
        write!(
            f,
            "gave up after {} attempt{}: {}",
            self.attempts, plural, self.final_error
        )
    }
}

impl<E: Error + 'static> Error for RetryExhausted<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.final_error)
    }
}

/// A successful value together with the number of attempts it took.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempted<T> {
    /// The value produced by the successful attempt.
    pub value: T,
    /// Total number of attempts made, including the successful one.
    pub attempts: u32,
}

impl<T> Attempted<T> {
    /// Extract the value, discarding the attempt count.
    pub fn into_value(self) -> T {
        self.value
    }

    /// Returns true if the first attempt succeeded.
    pub fn first_try(&self) -> bool {
        self.attempts == 1
    }
}
