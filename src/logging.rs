//! Call logging wrappers
//!
//! [`logged`] brackets every call of a function with a "start" and an "end"
//! message sent to a [`LogSink`]. Both messages carry the wrapper's name and
//! the call arguments serialized as JSON.
//!
//! # Examples
//!
//! ```
//! use hofkit::logged;
//!
//! let mut lines = Vec::new();
//! let mut add = logged("add", |(a, b): (i32, i32)| a + b, |line: &str| {
//!     lines.push(line.to_string())
//! });
//!
//! assert_eq!(add.call((2, 3)), 5);
//! drop(add);
//! assert_eq!(lines, vec!["start add [2,3]", "end add [2,3]"]);
//! ```
//!
//! Multi-argument functions take their arguments as a tuple, which serializes
//! as a JSON array.

use std::fmt;

use serde::Serialize;

/// Placeholder rendered when arguments cannot be serialized.
pub const UNSERIALIZABLE: &str = "<unserializable>";

/// Destination for log messages produced by [`Logged`].
///
/// Implemented for every `FnMut(&str)`, so a closure is the simplest sink.
pub trait LogSink {
    /// Record one message.
    fn log(&mut self, message: &str);
}

impl<F> LogSink for F
where
    F: FnMut(&str),
{
    fn log(&mut self, message: &str) {
        self(message)
    }
}

/// A sink that forwards every message to `tracing` at INFO level.
#[cfg(feature = "tracing")]
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

#[cfg(feature = "tracing")]
impl LogSink for TracingSink {
    fn log(&mut self, message: &str) {
        tracing::info!("{}", message);
    }
}

/// A function wrapped with start/end logging.
///
/// Created by [`logged`].
pub struct Logged<F, S> {
    name: String,
    function: F,
    sink: S,
}

/// Wrap `function` so that every call is logged to `sink`.
pub fn logged<F, S>(name: impl Into<String>, function: F, sink: S) -> Logged<F, S>
where
    S: LogSink,
{
    Logged {
        name: name.into(),
        function,
        sink,
    }
}

impl<F, S> Logged<F, S>
where
    S: LogSink,
{
    /// Call the wrapped function with `args`.
    ///
    /// The result of the function, including any error it returns, is passed
    /// through untouched. If the function panics the "end" message is not sent.
    pub fn call<A, R>(&mut self, args: A) -> R
    where
        A: Serialize,
        F: FnMut(A) -> R,
    {
        let rendered = render_args(&args);
        self.sink.log(&format!("start {} {}", self.name, rendered));
        let result = (self.function)(args);
        self.sink.log(&format!("end {} {}", self.name, rendered));
        result
    }

    /// The name used in log messages.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Discard the wrapper and return the function and sink.
    pub fn into_parts(self) -> (F, S) {
        (self.function, self.sink)
    }
}

fn render_args<A: Serialize>(args: &A) -> String {
    serde_json::to_string(args).unwrap_or_else(|_| UNSERIALIZABLE.to_string())
}

impl<F, S> fmt::Debug for Logged<F, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logged")
            .field("name", &self.name)
            .field("function", &"<function>")
            .finish()
    }
}
