//! Bounded retry of fallible producers.
//!
//! [`retry`] wraps a zero-argument producer returning `Result`. Calling the
//! wrapper runs the producer; every failure is retried until either an attempt
//! succeeds or the retry budget is spent, at which point the last error is
//! returned to the caller unchanged.
//!
//! - **Immediate**: no delay between attempts, the calling thread never sleeps
//! - **Unconditional**: every error spends one retry, whatever its value
//! - **Observable**: [`Retrier::on_retry`] sees each failed attempt
//!
//! # Quick Start
//!
//! ```rust
//! use hofkit::retry;
//!
//! let mut failures_left = 2;
//! let mut fetch = retry(
//!     move || {
//!         if failures_left > 0 {
//!             failures_left -= 1;
//!             Err("temporarily unavailable")
//!         } else {
//!             Ok("payload")
//!         }
//!     },
//!     3,
//! );
//!
//! assert_eq!(fetch.call(), Ok("payload"));
//! ```

mod error;
mod policy;

pub use error::{Attempted, RetryExhausted};
pub use policy::{RetryEvent, RetryPolicy};

use std::fmt;
use std::time::Instant;

type Hook<E> = Box<dyn FnMut(&RetryEvent<'_, E>)>;

/// A fallible producer wrapped with a retry budget.
///
/// Created by [`retry`] or [`Retrier::with_policy`]. Each [`call`](Retrier::call)
/// starts from the full budget of the policy.
pub struct Retrier<F, E> {
    producer: F,
    policy: RetryPolicy,
    on_retry: Option<Hook<E>>,
}

/// Wrap `producer` so that a failing call is retried up to `max_retries` more times.
///
/// The producer runs at most `max_retries + 1` times per call, back to back.
///
/// # Example
///
/// ```rust
/// use hofkit::retry;
///
/// let mut calls = 0;
/// let mut doomed = retry(
///     || {
///         calls += 1;
///         Err::<(), _>("down")
///     },
///     2,
/// );
///
/// assert_eq!(doomed.call(), Err("down"));
/// drop(doomed);
/// assert_eq!(calls, 3);
/// ```
pub fn retry<F, T, E>(producer: F, max_retries: u32) -> Retrier<F, E>
where
    F: FnMut() -> Result<T, E>,
{
    Retrier::with_policy(producer, RetryPolicy::new(max_retries))
}

impl<F, T, E> Retrier<F, E>
where
    F: FnMut() -> Result<T, E>,
{
    /// Wrap `producer` with an explicit [`RetryPolicy`].
    ///
    /// ```rust
    /// use hofkit::{Retrier, RetryPolicy};
    ///
    /// let policy: RetryPolicy = serde_json::from_str(r#"{ "max_retries": 1 }"#).unwrap();
    /// let mut ping = Retrier::with_policy(|| Ok::<_, String>("pong"), policy);
    ///
    /// assert_eq!(ping.call(), Ok("pong"));
    /// ```
    pub fn with_policy(producer: F, policy: RetryPolicy) -> Self {
        Self {
            producer,
            policy,
            on_retry: None,
        }
    }

    /// Run the producer, retrying failures, and return the outcome.
    ///
    /// On exhaustion the error of the last attempt is returned as is.
    pub fn call(&mut self) -> Result<T, E> {
        self.call_detailed()
            .map(Attempted::into_value)
            .map_err(RetryExhausted::into_error)
    }

    /// Like [`call`](Retrier::call), but report how many attempts were made.
    pub fn call_detailed(&mut self) -> Result<Attempted<T>, RetryExhausted<E>> {
        let start = Instant::now();
        let mut used = 0u32;

        loop {
            let attempt = used.saturating_add(1);
            let error = match (self.producer)() {
                Ok(value) => {
                    return Ok(Attempted {
                        value,
                        attempts: attempt,
                    })
                }
                Err(error) => error,
            };

            let remaining = self.policy.remaining(used);
            if let Some(hook) = self.on_retry.as_mut() {
                hook(&RetryEvent {
                    attempt,
                    error: &error,
                    remaining,
                    elapsed: start.elapsed(),
                });
            }

            if remaining == 0 {
                #[cfg(feature = "tracing")]
                tracing::warn!(attempts = attempt, "retry budget exhausted");
                return Err(RetryExhausted::new(error, attempt, start.elapsed()));
            }

            #[cfg(feature = "tracing")]
            tracing::debug!(attempt, remaining, "attempt failed, retrying");
            used += 1;
        }
    }

    /// Turn the wrapper into a plain closure with the same behavior as [`call`](Retrier::call).
    pub fn into_fn(mut self) -> impl FnMut() -> Result<T, E> {
        move || self.call()
    }
}

impl<F, E> Retrier<F, E> {
    /// Observe every failed attempt.
    ///
    /// The hook runs after each failure, including the final one, which
    /// reports [`RetryEvent::remaining`] as zero.
    pub fn on_retry<H>(mut self, hook: H) -> Self
    where
        H: FnMut(&RetryEvent<'_, E>) + 'static,
    {
        self.on_retry = Some(Box::new(hook));
        self
    }

    /// The policy this wrapper retries with.
    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Discard the wrapper and return the producer.
    pub fn into_inner(self) -> F {
        self.producer
    }
}

// Manual Debug implementation since closures are not Debug
impl<F, E> fmt::Debug for Retrier<F, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Retrier")
            .field("producer", &"<function>")
            .field("policy", &self.policy)
            .field("on_retry", &self.on_retry.is_some())
            .finish()
    }
}
