//! # foo
//!
//! Bounded counter functions for the coverage fixture.
//!
//! The loops are intentionally trivial: they exist so a coverage tool has
//! loop iterations and branch edges to record.

use tracing::trace;

/// Upper bound of the counter loop.
pub const COUNTER_BOUND: i32 = 10;

/// Count from zero up to `bound` and return the final counter value.
///
/// For non-positive bounds the loop body never runs and `0` is returned.
#[must_use]
pub fn count_to(bound: i32) -> i32
{
    let mut i = 0;
    while i < bound {
        i += 1;
    }

    trace!(bound, counter = i, "counter loop finished");
    i
}

/// The counter function.
///
/// Always returns [`COUNTER_BOUND`].
///
/// ## Example
///
/// ```rust
/// assert_eq!(foo::foo(), 10);
/// ```
#[must_use]
pub fn foo() -> i32
{
    count_to(COUNTER_BOUND)
}

/// Alternate counter reached by the dispatcher's second branch.
///
/// Walks the same range as [`foo`] with a range loop instead of a `while`
/// loop, so the two branches instrument differently but agree on the result.
#[must_use]
pub fn bar() -> i32
{
    let mut counter = 0;
    for _ in 0..COUNTER_BOUND {
        counter += 1;
    }

    trace!(counter, "alternate counter finished");
    counter
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn test_count_to_non_positive_bound()
    {
        assert_eq!(count_to(0), 0);
        assert_eq!(count_to(-5), 0);
    }

    #[test]
    fn test_count_to_returns_bound()
    {
        assert_eq!(count_to(1), 1);
        assert_eq!(count_to(COUNTER_BOUND), COUNTER_BOUND);
    }
}
