// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Truncation engine: sample an item list down to a height budget.
//!
//! When the full stack does not fit, the engine keeps an odd number of lines
//! that alternate between original items (even positions) and freshly made
//! placeholders (odd positions). Original items are sampled evenly across the
//! list, and the last line is always the last item, so both ends of the range
//! stay visible. Items at either end that
//! [block edge truncation](crate::IndexItem::blocks_edge_truncation) are set
//! aside first and restored verbatim afterwards.
//!
//! ```rust
//! use kurbo::Size;
//! use understory_section_index::{Item, Style, truncate};
//!
//! let style = Style::builder().item_spacing(1.0).build().unwrap();
//! let letters: Vec<Item> = ('A'..='Z')
//!     .map(|c| Item::text(c.to_string(), Size::new(8.0, 13.0)))
//!     .collect();
//!
//! let shown = truncate(&letters, &style, 150.0, Item::placeholder);
//! assert!(shown.len() < letters.len());
//! assert_eq!(shown.first(), letters.first());
//! assert_eq!(shown.last(), letters.last());
//! assert!(shown[1].is_placeholder());
//! ```

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `round`

use crate::metrics::median;
use crate::{IndexItem, Metrics, Style};

/// Lists longer than this protect their edge-blocking first and last items.
pub const EDGE_PROTECTION_MIN_LEN: usize = 5;

/// Reduces `items` so the stack fits `available_height`.
///
/// Returns `items` unchanged when the full stack already fits or when
/// `available_height <= 0.0` (no constraint). Returns an empty list when not
/// even a single line fits. `placeholder` is called once per inserted
/// placeholder, so every placeholder is a distinct value.
///
/// The result fits the budget when items are of similar height; the line
/// estimate uses the median item height, so very uneven lists may overshoot.
pub fn truncate<T, F>(
    items: &[T],
    style: &Style,
    available_height: f64,
    mut placeholder: F,
) -> Vec<T>
where
    T: IndexItem + Clone,
    F: FnMut() -> T,
{
    let metrics = Metrics::new(items, style);
    if metrics.size().height <= available_height || available_height <= 0.0 {
        return items.to_vec();
    }
    log::debug!(
        "truncating {} items: stack height {} exceeds {}",
        items.len(),
        metrics.size().height,
        available_height
    );

    let sizes = metrics.item_sizes();
    let mut working = items;
    let mut working_sizes = sizes;
    let mut budget = available_height;
    let mut leading = None;
    let mut trailing = None;

    if items.len() > EDGE_PROTECTION_MIN_LEN {
        if let (Some((first, rest)), Some((first_size, rest_sizes))) =
            (working.split_first(), working_sizes.split_first())
        {
            if first.blocks_edge_truncation() {
                budget -= first_size.height;
                leading = Some(first);
                working = rest;
                working_sizes = rest_sizes;
            }
        }
        if let (Some((last, rest)), Some((last_size, rest_sizes))) =
            (working.split_last(), working_sizes.split_last())
        {
            if last.blocks_edge_truncation() {
                budget -= last_size.height;
                trailing = Some(last);
                working = rest;
                working_sizes = rest_sizes;
            }
        }
        log::trace!(
            "edge protection: leading {}, trailing {}",
            leading.is_some(),
            trailing.is_some()
        );
    }

    let mut heights: Vec<f64> = working_sizes.iter().map(|s| s.height).collect();
    let line_height = median(&mut heights);
    let placeholder_height = placeholder()
        .preferred_size(style.font().bounding_size())
        .height;

    let lines = available_lines(
        working.len(),
        line_height,
        placeholder_height,
        style.item_spacing(),
        budget,
    );
    log::debug!(
        "showing {lines} of {} lines (median {line_height}, placeholder {placeholder_height})",
        working.len()
    );
    if lines == 0 {
        return Vec::new();
    }

    let mut result = Vec::with_capacity(lines + 2);
    result.extend(leading.cloned());
    sample(working, lines, &mut placeholder, &mut result);
    result.extend(trailing.cloned());
    result
}

/// Largest odd line count whose estimated height fits `budget`.
///
/// A candidate `lines` is estimated as `lines / 2` items plus `lines / 2`
/// placeholders (integer halves) plus `lines - 1` gaps. The search steps down
/// from `count` and stops one below the first candidate that fits; the
/// result is then made odd so it starts and ends on an item.
fn available_lines(
    count: usize,
    line_height: f64,
    placeholder_height: f64,
    spacing: f64,
    budget: f64,
) -> usize {
    let Ok(mut lines) = isize::try_from(count) else {
        return 0;
    };
    loop {
        let half = (lines / 2) as f64;
        let projected =
            half * line_height + half * placeholder_height + spacing * (lines - 1) as f64;
        lines -= 1;
        if projected <= budget {
            break;
        }
        if lines < 0 {
            return 0;
        }
    }
    if lines % 2 == 0 {
        lines -= 1;
    }
    usize::try_from(lines).unwrap_or(0)
}

/// Emits `lines` entries alternating sampled items and placeholders.
fn sample<T, F>(items: &[T], lines: usize, placeholder: &mut F, out: &mut Vec<T>)
where
    T: Clone,
    F: FnMut() -> T,
{
    let Some((last, _)) = items.split_last() else {
        return;
    };
    let step = items.len() as f64 / lines as f64;
    for i in 0..lines - 1 {
        if i % 2 == 1 {
            out.push(placeholder());
        } else {
            #[expect(
                clippy::cast_possible_truncation,
                reason = "i * step stays below items.len() because lines <= items.len()"
            )]
            let index = (i as f64 * step).round() as usize;
            out.push(items[index.min(items.len() - 1)].clone());
        }
    }
    out.push(last.clone());
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use kurbo::Size;

    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    enum Entry {
        Letter(u8, bool),
        Dot,
    }

    impl IndexItem for Entry {
        fn preferred_size(&self, _bounding: Size) -> Size {
            match self {
                Self::Letter(..) => Size::new(8.0, 20.0),
                Self::Dot => Size::new(10.0, 18.0),
            }
        }

        fn blocks_edge_truncation(&self) -> bool {
            matches!(self, Self::Letter(_, true))
        }
    }

    fn letters(count: u8) -> Vec<Entry> {
        (0..count).map(|i| Entry::Letter(i, false)).collect()
    }

    fn spaced(spacing: f64) -> Style {
        Style::builder().item_spacing(spacing).build().unwrap()
    }

    #[test]
    fn line_count_is_odd_and_one_below_the_first_fit() {
        // 15 lines fit (7 * 38 + 14 = 280 <= 314), so 13 are shown.
        assert_eq!(available_lines(26, 20.0, 18.0, 1.0, 314.0), 13);
        // 16 lines fit exactly, so 15 are shown.
        assert_eq!(available_lines(26, 20.0, 18.0, 1.0, 319.0), 15);
        assert_eq!(available_lines(4, 20.0, 18.0, 1.0, 5.0), 0);
        assert_eq!(available_lines(0, 20.0, 18.0, 0.0, -5.0), 0);
    }

    #[test]
    fn samples_evenly_and_ends_on_the_last_item() {
        let items = letters(26);
        let shown = truncate(&items, &spaced(1.0), 314.0, || Entry::Dot);

        let expected: Vec<Entry> = [0, 4, 8, 12, 16, 20]
            .into_iter()
            .flat_map(|i| [Entry::Letter(i, false), Entry::Dot])
            .chain([Entry::Letter(25, false)])
            .collect();
        assert_eq!(shown, expected);
    }

    #[test]
    fn fitting_or_unconstrained_lists_pass_through() {
        let items = letters(4);
        let style = spaced(1.0);
        assert_eq!(truncate(&items, &style, 84.0, || Entry::Dot), items);
        assert_eq!(truncate(&items, &style, 0.0, || Entry::Dot), items);
        assert_eq!(truncate(&items, &style, -1.0, || Entry::Dot), items);
    }

    #[test]
    fn short_lists_truncate_without_edge_protection() {
        let mut items = letters(3);
        items[0] = Entry::Letter(0, true);
        // Two lines (item + dot + gap = 39) fit, the estimate keeps one.
        let shown = truncate(&items, &spaced(1.0), 39.5, || Entry::Dot);
        assert_eq!(shown, vec![Entry::Letter(2, false)]);
    }

    #[test]
    fn edge_protection_starts_above_five_items() {
        let style = spaced(1.0);

        // Five items: the pinned head is just the first sampled item, so the
        // full budget buys three lines.
        let mut five = letters(5);
        five[0] = Entry::Letter(0, true);
        let shown = truncate(&five, &style, 80.0, || Entry::Dot);
        assert_eq!(
            shown,
            vec![Entry::Letter(0, true), Entry::Dot, Entry::Letter(4, false)]
        );

        // Six items: the head is set aside and its height leaves room for
        // a single sampled line.
        let mut six = letters(6);
        six[0] = Entry::Letter(0, true);
        let shown = truncate(&six, &style, 80.0, || Entry::Dot);
        assert_eq!(shown, vec![Entry::Letter(0, true), Entry::Letter(5, false)]);
    }

    #[test]
    fn protected_edges_are_restored() {
        let mut items = letters(26);
        items[0] = Entry::Letter(0, true);
        items[25] = Entry::Letter(25, true);
        let shown = truncate(&items, &spaced(1.0), 314.0, || Entry::Dot);

        assert_eq!(shown.first(), Some(&Entry::Letter(0, true)));
        assert_eq!(shown.last(), Some(&Entry::Letter(25, true)));
        // The sampled run in between still alternates and ends on item 24.
        let inner = &shown[1..shown.len() - 1];
        assert_eq!(inner.len() % 2, 1);
        assert_eq!(inner.last(), Some(&Entry::Letter(24, false)));
        for (i, entry) in inner.iter().enumerate() {
            assert_eq!(i % 2 == 1, *entry == Entry::Dot, "position {i}");
        }
    }

    #[test]
    fn nothing_fits_gives_an_empty_list() {
        let items = letters(10);
        assert!(truncate(&items, &spaced(1.0), 1.0, || Entry::Dot).is_empty());
    }

    #[test]
    fn placeholders_are_made_fresh_per_slot() {
        let items = letters(26);
        let mut made = 0;
        let shown = truncate(&items, &spaced(1.0), 314.0, || {
            made += 1;
            Entry::Dot
        });
        let dots = shown.iter().filter(|e| **e == Entry::Dot).count();
        // One extra call measures the placeholder height.
        assert_eq!(made, dots + 1);
    }
}
