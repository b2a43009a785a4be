//! End-to-end coverage for combinator chains and caller-contract violations.

use std::panic::{AssertUnwindSafe, catch_unwind};

use outcome::{Outcome, combinator};
use rstest::rstest;

#[rstest]
#[case::doubled(Outcome::success(5), Outcome::success(10))]
#[case::propagated(Outcome::failure("Original error"), Outcome::failure("Original error"))]
fn mapping_scenarios(#[case] input: Outcome<i32>, #[case] expected: Outcome<i32>) {
    assert_eq!(input.map(|n| n * 2), expected);
}

#[rstest]
#[case::success_path(Outcome::success(5), Outcome::success(10))]
#[case::failure_recovers(Outcome::failure("Error occurred"), Outcome::success(14))]
fn matching_scenarios(#[case] input: Outcome<usize>, #[case] expected: Outcome<usize>) {
    assert_eq!(input.match_with(|n| n * 2, |err| err.len()), expected);
}

#[test]
fn a_chain_never_unwinds_past_the_fault_boundary() {
    let result = Outcome::success(2)
        .map(|n| n + 1)
        .map(|_| -> i32 { panic!("stage two failed") })
        .map(|n| n * 10)
        .match_with(|n| n.to_string(), |err| format!("recovered: {err}"));
    assert_eq!(
        result,
        Outcome::success("recovered: stage two failed".to_owned())
    );
}

#[test]
fn chains_continue_after_normalization() {
    let result = Outcome::<usize>::failure("Error occurred")
        .match_with(|n| n * 2, |err| err.len())
        .map(|n| n + 1);
    assert_eq!(result, Outcome::success(15));
}

#[test]
fn free_functions_accept_present_outcomes() {
    let doubled = combinator::map(Some(Outcome::success(5)), |n| n * 2);
    assert_eq!(doubled, Outcome::success(10));

    let recovered = combinator::match_with(
        Some(Outcome::<usize>::failure("Error occurred")),
        |n| n * 2,
        |err| err.len(),
    );
    assert_eq!(recovered, Outcome::success(14));
}

#[test]
fn absent_outcomes_are_a_contract_violation() {
    let map_raised = catch_unwind(AssertUnwindSafe(|| {
        combinator::map(None::<Outcome<i32>>, |n| n * 2)
    }));
    assert!(map_raised.is_err());

    let match_raised = catch_unwind(AssertUnwindSafe(|| {
        combinator::match_with(None::<Outcome<i32>>, |n| n, |_| 0)
    }));
    assert!(match_raised.is_err());
}

#[test]
fn std_results_enter_and_leave_the_chain() {
    let parsed: Outcome<u32> = "12".parse::<u32>().into();
    let total = parsed.map(|n| n * 3);
    assert_eq!(total.clone().into_value(), Some(36));
    assert_eq!(total.into_result(), Ok(36));

    let unparsable: Outcome<u32> = "eleven".parse::<u32>().into();
    assert!(unparsable.is_failure());
}
