// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Index orderings for position-sensitive container tests.

/// Rearranges `order` into the next lexicographic ordering.
///
/// Returns `false` (leaving `order` untouched) once it is the last one.
fn advance(order: &mut [usize]) -> bool {
    let Some(pivot) = order.windows(2).rposition(|pair| pair[0] < pair[1]) else {
        return false;
    };

    // Rightmost element greater than the pivot; exists since order[pivot + 1] is.
    let successor = order
        .iter()
        .rposition(|&value| value > order[pivot])
        .unwrap_or(pivot + 1);

    order.swap(pivot, successor);
    order[pivot + 1..].reverse();

    true
}

/// Calls `visit` with every ordering of `0..len`, in lexicographic order.
///
/// The first ordering is ascending, the last descending. `len == 0` visits
/// the empty ordering once.
///
/// # Example
/// ```
/// use dynarray_test_utils::index_permutations;
///
/// let mut seen = Vec::new();
/// index_permutations(3, |order| seen.push(order.to_vec()));
///
/// assert_eq!(seen.len(), 6);
/// assert_eq!(seen[0], [0, 1, 2]);
/// assert_eq!(seen[5], [2, 1, 0]);
/// ```
pub fn index_permutations<F>(len: usize, mut visit: F)
where
    F: FnMut(&[usize]),
{
    let mut order: Vec<usize> = (0..len).collect();

    loop {
        visit(&order);

        if !advance(&mut order) {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::index_permutations;

    #[test]
    fn test_counts_factorial() {
        for (len, expected) in [(0, 1), (1, 1), (2, 2), (4, 24), (5, 120)] {
            let mut count = 0;
            index_permutations(len, |_| count += 1);

            assert_eq!(count, expected);
        }
    }

    #[test]
    fn test_orderings_are_distinct_and_sorted() {
        let mut seen: Vec<Vec<usize>> = Vec::new();
        index_permutations(4, |order| seen.push(order.to_vec()));

        assert!(seen.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
