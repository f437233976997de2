//! Property-based tests for bounded retry

use hofkit::testing::{always_failing, flaky};
use hofkit::{retry, Retrier, RetryPolicy};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_success_after_k_failures(failures in 0u32..20, extra in 0u32..5) {
        let budget = failures + extra;
        let (counter, producer) = flaky(failures as usize, "ok", "transient");

        let result = retry(producer, budget).call();

        prop_assert_eq!(result, Ok("ok"));
        prop_assert_eq!(counter.count(), failures as usize + 1);
    }

    #[test]
    fn prop_exhaustion_calls_budget_plus_one(budget in 0u32..32) {
        let (counter, producer) = always_failing::<(), _>("down");

        let result = retry(producer, budget).call();

        prop_assert_eq!(result, Err("down"));
        prop_assert_eq!(counter.count(), budget as usize + 1);
    }

    #[test]
    fn prop_too_many_failures_propagate(budget in 0u32..16, surplus in 1u32..8) {
        let failures = budget + surplus;
        let (counter, producer) = flaky(failures as usize, 1u8, "still failing");

        let exhausted = retry(producer, budget).call_detailed().unwrap_err();

        prop_assert_eq!(exhausted.final_error, "still failing");
        prop_assert_eq!(exhausted.attempts, budget + 1);
        prop_assert_eq!(counter.count(), budget as usize + 1);
    }
}

#[test]
fn configured_policy_keeps_attempt_count() {
    let (counter, producer) = flaky(2, 5, "slow");
    let policy: RetryPolicy = serde_json::from_str(r#"{ "max_retries": 4 }"#).unwrap();

    let attempted = Retrier::with_policy(producer, policy)
        .call_detailed()
        .unwrap();

    assert_eq!(attempted.value, 5);
    assert_eq!(attempted.attempts, 3);
    assert_eq!(counter.count(), 3);
}

#[test]
fn exhausted_error_displays_final_error() {
    let (_, producer) = always_failing::<(), _>("disk full");
    let exhausted = retry(producer, 1).call_detailed().unwrap_err();

    assert_eq!(exhausted.to_string(), "gave up after 2 attempts: disk full");
}
