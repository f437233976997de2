//! The retry budget and the events reported while spending it.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// How many extra attempts a [`Retrier`](crate::Retrier) makes after the first one fails.
///
/// A policy is plain data, so it can be cloned, compared and loaded from
/// configuration. Retries are immediate and unconditional: every failure
/// spends one unit of the budget, whatever the error.
///
/// # Examples
///
/// ```rust
/// use hofkit::RetryPolicy;
///
/// let policy = RetryPolicy::new(3);
/// assert_eq!(policy.max_retries(), 3);
/// assert_eq!(policy.total_attempts(), 4);
///
/// let loaded: RetryPolicy = serde_json::from_str(r#"{ "max_retries": 3 }"#).unwrap();
/// assert_eq!(loaded, policy);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RetryPolicy {
    #[serde(default)]
    max_retries: u32,
}

/// A failed attempt, as seen by [`Retrier::on_retry`](crate::Retrier::on_retry) hooks.
#[derive(Debug, Clone)]
pub struct RetryEvent<'a, E> {
    /// Which attempt just failed (1-indexed).
    pub attempt: u32,
    /// The error from the failed attempt.
    pub error: &'a E,
    /// Retries still available; zero when this failure is the one returned.
    pub remaining: u32,
    /// Time since the first attempt started.
    pub elapsed: Duration,
}

impl<E> RetryEvent<'_, E> {
    /// Returns true if another attempt follows this one.
    pub fn will_retry(&self) -> bool {
        self.remaining > 0
    }
}

impl RetryPolicy {
    /// A policy allowing `max_retries` attempts after the first.
    pub fn new(max_retries: u32) -> Self {
        Self { max_retries }
    }

    /// Replace the budget.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Number of retries after the first attempt.
    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Total number of producer calls this policy allows, saturating at `u32::MAX`.
    pub fn total_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }

    /// Retries left once `used` of them have been spent.
    ///
    /// ```rust
    /// use hofkit::RetryPolicy;
    ///
    /// let policy = RetryPolicy::new(2);
    /// assert_eq!(policy.remaining(0), 2);
    /// assert_eq!(policy.remaining(2), 0);
    /// assert_eq!(policy.remaining(7), 0);
    /// ```
    pub fn remaining(&self, used: u32) -> u32 {
        self.max_retries.saturating_sub(used)
    }
}
