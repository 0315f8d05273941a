// Copyright 2025 the Barchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Positional pairing of old and new bar lists.
//!
//! Bars have no stable identity: the bar at index `i` after an update is treated as the same
//! bar that was at index `i` before it, whatever its title. Reordering the input therefore makes
//! values slide between bars instead of following their category.

/// Pairs every entry of `new` with the entry at the same index in `old`, if there is one.
///
/// Yields `(index, new, old)` for each index of `new`. Extra entries in `old` are never visited;
/// extra entries in `new` are paired with `None`.
pub fn pair_by_index<'a, T>(
    old: &'a [T],
    new: &'a [T],
) -> impl Iterator<Item = (usize, &'a T, Option<&'a T>)> + 'a {
    new.iter()
        .enumerate()
        .map(move |(index, entry)| (index, entry, old.get(index)))
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec::Vec;

    use super::*;

    #[test]
    fn longer_new_list_gets_none_for_extras() {
        let old = [1, 2];
        let new = [10, 20, 30, 40];
        let pairs: Vec<_> = pair_by_index(&old, &new).collect();
        assert_eq!(
            pairs,
            [
                (0, &10, Some(&1)),
                (1, &20, Some(&2)),
                (2, &30, None),
                (3, &40, None),
            ],
            "entries past the old length have no prior state"
        );
    }

    #[test]
    fn shorter_new_list_drops_old_extras() {
        let old = [1, 2, 3];
        let new = [10];
        let pairs: Vec<_> = pair_by_index(&old, &new).collect();
        assert_eq!(
            pairs,
            [(0, &10, Some(&1))],
            "old entries 1 and 2 are dropped"
        );
    }

    #[test]
    fn empty_new_list_pairs_nothing() {
        let old = [1, 2, 3];
        assert_eq!(pair_by_index(&old, &[]).count(), 0, "nothing to draw");
    }
}
