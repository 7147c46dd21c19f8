// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Differences between two displayed item lists.
//!
//! After every layout pass the host has a new list of displayed items. Hosts
//! that keep one view per item use [`ItemDiff`] to find which views to create,
//! which to drop, and which to move to a new frame.

use alloc::vec::Vec;
use core::hash::Hash;

use hashbrown::HashMap;

/// Added, removed, and kept positions between an old and a new list.
///
/// Items are matched by key. Each old item matches at most one new item, so
/// repeated keys pair up in order and any surplus counts as added or removed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemDiff {
    /// Indices into the old list of items with no counterpart in the new list.
    pub removed: Vec<usize>,
    /// Indices into the new list of items with no counterpart in the old list.
    pub added: Vec<usize>,
    /// `(old, new)` index pairs of items present in both, in new-list order.
    pub kept: Vec<(usize, usize)>,
}

impl ItemDiff {
    /// Diffs `old` against `new`, identifying items by `key`.
    ///
    /// ```rust
    /// use understory_section_index::ItemDiff;
    ///
    /// let diff = ItemDiff::between(&["A", "•", "Z"], &["A", "M", "Z"], |s| *s);
    /// assert_eq!(diff.removed, [1]);
    /// assert_eq!(diff.added, [1]);
    /// assert_eq!(diff.kept, [(0, 0), (2, 2)]);
    /// ```
    pub fn between<T, K, F>(old: &[T], new: &[T], mut key: F) -> Self
    where
        K: Hash + Eq,
        F: FnMut(&T) -> K,
    {
        let mut pending: HashMap<K, Vec<usize>> = HashMap::with_capacity(old.len());
        for (index, item) in old.iter().enumerate().rev() {
            pending.entry(key(item)).or_default().push(index);
        }

        let mut diff = Self::default();
        let mut matched = Vec::new();
        for (index, item) in new.iter().enumerate() {
            match pending.get_mut(&key(item)).and_then(Vec::pop) {
                Some(old_index) => {
                    diff.kept.push((old_index, index));
                    matched.push(old_index);
                }
                None => diff.added.push(index),
            }
        }

        matched.sort_unstable();
        diff.removed = (0..old.len())
            .filter(|index| matched.binary_search(index).is_err())
            .collect();
        diff
    }

    /// Returns `true` if both lists hold the same items in the same order.
    #[must_use]
    pub fn is_unchanged(&self) -> bool {
        self.removed.is_empty()
            && self.added.is_empty()
            && self.kept.iter().all(|(old, new)| old == new)
    }
}
