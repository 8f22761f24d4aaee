//! Generic bounded-retention top-k selection
//!
//! Keeps only the k currently-best candidates at any point instead of
//! sorting the whole candidate universe. `Ord` on the element type defines
//! the ranking: the greatest element is the best, and the order must be
//! total so ties cannot occur between distinct candidates.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Select the `k` greatest elements of `candidates`, best first
///
/// A min-heap of capacity `k` holds the retained set with the worst
/// element on top. While under capacity every candidate is inserted;
/// afterwards a candidate only displaces the worst when it is strictly
/// greater. The result is fully sorted in descending `Ord` order.
pub fn retain_best<T, I>(candidates: I, k: usize) -> Vec<T>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    if k == 0 {
        return Vec::new();
    }

    // Pre-size for the common small-k case; very large k grows on demand
    let mut heap: BinaryHeap<Reverse<T>> = BinaryHeap::with_capacity(k.min(4096) + 1);
    for candidate in candidates {
        if heap.len() < k {
            heap.push(Reverse(candidate));
        } else if let Some(Reverse(worst)) = heap.peek() {
            if candidate > *worst {
                heap.pop();
                heap.push(Reverse(candidate));
            }
        }
    }

    let mut best: Vec<T> = heap.into_iter().map(|Reverse(element)| element).collect();
    best.sort_unstable_by(|a, b| b.cmp(a));
    best
}
