//! # hofkit
//!
//! Higher-order function wrappers for Rust.
//!
//! Every wrapper owns its state privately: a memoizer owns its cached value, a
//! retrier owns its budget, an id generator owns its counter. Nothing is shared
//! between wrappers and nothing is global.
//!
//! - [`memoize()`]: run a producer once, return the cached value forever after
//! - [`retry()`]: re-run a failing producer up to a bounded number of times
//! - [`compose()`], [`pipe`], [`compose!`]: function composition
//! - [`partial()`], [`partial3`], [`partial3_2`]: partial application
//! - [`power`], [`polynomial`]: numeric function builders
//! - [`logged`]: bracket calls with start/end log messages
//! - [`IdGenerator`]: independent incrementing id counters
//!
//! ## Quick Example
//!
//! ```rust
//! use hofkit::{memoize, retry};
//! use std::cell::Cell;
//!
//! let loads = Cell::new(0);
//! let settings = memoize(|| {
//!     loads.set(loads.get() + 1);
//!     vec!["verbose", "color"]
//! });
//! assert_eq!(settings.get().len(), 2);
//! assert_eq!(settings.get().len(), 2);
//! assert_eq!(loads.get(), 1);
//!
//! let mut remaining_failures = 1;
//! let mut connect = retry(
//!     move || {
//!         if remaining_failures > 0 {
//!             remaining_failures -= 1;
//!             Err("connection reset")
//!         } else {
//!             Ok("connected")
//!         }
//!     },
//!     3,
//! );
//! assert_eq!(connect.call(), Ok("connected"));
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events from memoization and retry loops, and
//!   enable [`logging::TracingSink`]
//! - `proptest`: `Arbitrary` implementation for [`RetryPolicy`]

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod compose;
pub mod id;
pub mod logging;
pub mod memoize;
pub mod numeric;
pub mod partial;
pub mod retry;
pub mod testing;

// Re-exports
pub use compose::{compose, identity, pipe};
pub use id::IdGenerator;
pub use logging::{logged, LogSink, Logged};
pub use memoize::{memoize, Memoized};
pub use numeric::{polynomial, power, Polynomial};
pub use partial::{partial, partial3, partial3_2};
pub use retry::{retry, Attempted, Retrier, RetryEvent, RetryExhausted, RetryPolicy};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::compose::{compose, identity, pipe};
    pub use crate::id::IdGenerator;
    pub use crate::logging::{logged, LogSink, Logged};
    pub use crate::memoize::{memoize, Memoized};
    pub use crate::numeric::{polynomial, power, Polynomial};
    pub use crate::partial::{partial, partial3, partial3_2};
    pub use crate::retry::{retry, Retrier, RetryExhausted, RetryPolicy};
}
