//! Tests for the generic bounded retain-best-k component

use crate::app::services::ranking::retain_best;

#[test]
fn test_selects_greatest_elements_sorted_descending() {
    let best = retain_best(vec![3, 9, 1, 7, 5], 3);
    assert_eq!(best, vec![9, 7, 5]);
}

#[test]
fn test_under_capacity_returns_all_sorted() {
    let best = retain_best(vec![2, 8, 4], 10);
    assert_eq!(best, vec![8, 4, 2]);
}

#[test]
fn test_k_zero_returns_empty() {
    let best: Vec<i32> = retain_best(vec![1, 2, 3], 0);
    assert!(best.is_empty());
}

#[test]
fn test_empty_input_returns_empty() {
    let best: Vec<i32> = retain_best(Vec::new(), 5);
    assert!(best.is_empty());
}

#[test]
fn test_worst_retained_is_evicted_first() {
    // Ascending stream: every arrival after capacity displaces the minimum
    let best = retain_best(1..=100, 4);
    assert_eq!(best, vec![100, 99, 98, 97]);
}

#[test]
fn test_candidate_equal_to_worst_is_dropped() {
    // Duplicates of the current worst never displace it
    let best = retain_best(vec![5, 5, 5, 5, 5], 2);
    assert_eq!(best, vec![5, 5]);
}

#[test]
fn test_matches_full_sort_for_every_k() {
    let input: Vec<u32> = (0..64).map(|i| i * 31 % 67).collect();
    let mut sorted = input.clone();
    sorted.sort_unstable_by(|a, b| b.cmp(a));

    for k in 0..=input.len() {
        let best = retain_best(input.clone(), k);
        assert_eq!(best, sorted[..k], "k = {}", k);
    }
}
