//! Numeric function builders
//!
//! - [`power`]: a function raising its input to a fixed exponent
//! - [`polynomial`]: a polynomial evaluator built from its coefficients
//!
//! # Examples
//!
//! ```
//! use hofkit::{polynomial, power};
//!
//! let cube = power(3.0);
//! assert_eq!(cube(2.0), 8.0);
//!
//! // 2x² + 3x + 5
//! let p = polynomial([2.0, 3.0, 5.0]).expect("at least one coefficient");
//! assert_eq!(p.eval(2.0), 19.0);
//!
//! // No coefficients, no polynomial
//! assert!(polynomial([]).is_none());
//! ```

/// Build a function raising its input to `exponent`.
pub fn power(exponent: f64) -> impl Fn(f64) -> f64 {
    move |x| x.powf(exponent)
}

/// A polynomial with coefficients stored highest degree first.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    coefficients: Vec<f64>,
}

/// Build a polynomial from coefficients ordered highest degree first.
///
/// `polynomial([a, b, c])` evaluates `a·x² + b·x + c`. Returns `None` when
/// no coefficients are given.
pub fn polynomial<I>(coefficients: I) -> Option<Polynomial>
where
    I: IntoIterator<Item = f64>,
{
    let coefficients: Vec<f64> = coefficients.into_iter().collect();
    if coefficients.is_empty() {
        None
    } else {
        Some(Polynomial { coefficients })
    }
}

impl Polynomial {
    /// Evaluate the polynomial at `x` (Horner's scheme).
    pub fn eval(&self, x: f64) -> f64 {
        self.coefficients
            .iter()
            .fold(0.0, |acc, &coefficient| acc * x + coefficient)
    }

    /// Degree of the polynomial, counting leading zero coefficients.
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Coefficients, highest degree first.
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Turn the polynomial into a plain closure.
    pub fn into_fn(self) -> impl Fn(f64) -> f64 {
        move |x| self.eval(x)
    }
}
