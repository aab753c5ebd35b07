//! Tests for the counter functions

use foo::{bar, foo, COUNTER_BOUND};

#[test]
fn test_foo_returns_ten()
{
    assert_eq!(foo(), 10);
}

#[test]
fn test_foo_is_deterministic()
{
    let first = foo();
    for _ in 0..5 {
        assert_eq!(foo(), first);
    }
}

#[test]
fn test_bar_matches_foo()
{
    assert_eq!(bar(), foo());
    assert_eq!(bar(), COUNTER_BOUND);
}
