// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raw (unsnapped) measurements of an item list.

use alloc::vec::Vec;

use kurbo::Size;

use crate::{IndexItem, Style};

/// Measurements of an item list under a style.
///
/// Unlike [`ItemLayout`](crate::ItemLayout), sizes here are the items' own
/// preferred sizes, not snapped to the pixel grid. Metrics belong to one item
/// list; compute new ones whenever the list or the style changes.
#[derive(Clone, Debug, PartialEq)]
pub struct Metrics {
    item_sizes: Vec<Size>,
    size: Size,
    median_size: Size,
}

impl Metrics {
    /// Measures `items` against the style's bounding box.
    ///
    /// The stacked height adds [`Style::item_spacing`] after *every* item,
    /// including the last one, exactly like [`ItemLayout`](crate::ItemLayout).
    pub fn new<T: IndexItem>(items: &[T], style: &Style) -> Self {
        let bbox = style.font().bounding_size();
        let spacing = style.item_spacing();

        let mut item_sizes = Vec::with_capacity(items.len());
        let mut total_height = 0.0;
        for item in items {
            let size = item.preferred_size(bbox);
            total_height += size.height + spacing;
            item_sizes.push(size);
        }

        let median_size = median_size(&item_sizes);
        let width = if items.is_empty() { 0.0 } else { bbox.width };
        Self {
            item_sizes,
            size: Size::new(width, total_height),
            median_size,
        }
    }

    /// Preferred size of each item, in list order.
    #[must_use]
    pub fn item_sizes(&self) -> &[Size] {
        &self.item_sizes
    }

    /// Stacked size: bounding-box width by summed heights plus spacing.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Per-axis median of the item sizes; zero for an empty list.
    #[must_use]
    pub fn median_size(&self) -> Size {
        self.median_size
    }
}

fn median_size(sizes: &[Size]) -> Size {
    let mut widths: Vec<f64> = sizes.iter().map(|s| s.width).collect();
    let mut heights: Vec<f64> = sizes.iter().map(|s| s.height).collect();
    Size::new(median(&mut widths), median(&mut heights))
}

/// Median of the values (mean of the middle two for even counts).
pub(crate) fn median(values: &mut [f64]) -> f64 {
    let count = values.len();
    if count == 0 {
        return 0.0;
    }
    values.sort_by(f64::total_cmp);
    let mid = count / 2;
    if count % 2 == 0 {
        (values[mid - 1] + values[mid]) / 2.0
    } else {
        values[mid]
    }
}
