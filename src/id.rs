//! Incrementing id generators
//!
//! ```
//! use hofkit::IdGenerator;
//!
//! let mut orders = IdGenerator::new(100);
//! let mut users = IdGenerator::new(1);
//!
//! assert_eq!(orders.next_id(), Some(100));
//! assert_eq!(users.next_id(), Some(1));
//! assert_eq!(orders.next_id(), Some(101));
//! ```

/// Hands out consecutive ids starting from a seed.
///
/// The first id is the seed itself. Each generator owns its counter, so
/// generators never affect each other. The sequence ends at `i64::MAX`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdGenerator {
    next: Option<i64>,
}

impl IdGenerator {
    /// Create a generator whose first id is `start`.
    pub fn new(start: i64) -> Self {
        Self { next: Some(start) }
    }

    /// Return the next id and advance by one.
    ///
    /// Returns `None` once `i64::MAX` has been handed out.
    pub fn next_id(&mut self) -> Option<i64> {
        let current = self.next?;
        self.next = current.checked_add(1);
        Some(current)
    }

    /// The id the next call will return, without advancing.
    pub fn peek(&self) -> Option<i64> {
        self.next
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Iterator for IdGenerator {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        self.next_id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_seed() {
        let mut ids = IdGenerator::new(42);
        assert_eq!(ids.peek(), Some(42));
        assert_eq!(ids.next_id(), Some(42));
        assert_eq!(ids.peek(), Some(43));
    }

    #[test]
    fn generators_are_independent() {
        let mut a = IdGenerator::new(0);
        let mut b = IdGenerator::new(1000);

        assert_eq!(a.next_id(), Some(0));
        assert_eq!(a.next_id(), Some(1));
        assert_eq!(b.next_id(), Some(1000));
        assert_eq!(a.next_id(), Some(2));
        assert_eq!(b.next_id(), Some(1001));
    }

    #[test]
    fn negative_seed() {
        let ids: Vec<i64> = IdGenerator::new(-2).take(4).collect();
        assert_eq!(ids, vec![-2, -1, 0, 1]);
    }

    #[test]
    fn ends_at_max() {
        let mut ids = IdGenerator::new(i64::MAX - 1);
        assert_eq!(ids.next_id(), Some(i64::MAX - 1));
        assert_eq!(ids.next_id(), Some(i64::MAX));
        assert_eq!(ids.next_id(), None);
        assert_eq!(ids.next_id(), None);
    }

    #[test]
    fn default_starts_at_zero() {
        assert_eq!(IdGenerator::default().next(), Some(0));
    }
}
