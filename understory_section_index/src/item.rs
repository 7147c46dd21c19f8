// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The capability interface every index item implements.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::sync::Arc;

use kurbo::Size;

use crate::Style;

/// A displayable entry of the index strip.
///
/// The engine treats items as opaque handles: it only measures them and asks
/// whether they protect their edge of the sequence. Measurement must be pure
/// and deterministic for a given bounding box.
pub trait IndexItem {
    /// Returns the size that best fits inside `bounding`.
    ///
    /// `bounding` is the square box derived from the style font
    /// ([`FontMetrics::bounding_size`](crate::FontMetrics::bounding_size)).
    /// Returned sizes are expected to fit that box; the engine snaps them to
    /// the pixel grid but does not clamp them.
    fn preferred_size(&self, bounding: Size) -> Size;

    /// Whether the closest neighborhood of this item must survive truncation.
    ///
    /// Only consulted when the item is the first or the last of the sequence.
    /// The system index never truncates right after the search marker or right
    /// before the `#` sign; items reproduce that by returning `true`.
    fn blocks_edge_truncation(&self) -> bool {
        false
    }

    /// Applies the index style to the item, e.g. to pick up the font.
    fn apply_style(&mut self, style: &Style) {
        let _ = style;
    }
}

/// Applies `style` to every item.
pub fn apply_style<T: IndexItem>(items: &mut [T], style: &Style) {
    for item in items {
        item.apply_style(style);
    }
}

impl<T: IndexItem + ?Sized> IndexItem for &T {
    fn preferred_size(&self, bounding: Size) -> Size {
        (**self).preferred_size(bounding)
    }

    fn blocks_edge_truncation(&self) -> bool {
        (**self).blocks_edge_truncation()
    }
}

impl<T: IndexItem + ?Sized> IndexItem for Box<T> {
    fn preferred_size(&self, bounding: Size) -> Size {
        (**self).preferred_size(bounding)
    }

    fn blocks_edge_truncation(&self) -> bool {
        (**self).blocks_edge_truncation()
    }

    fn apply_style(&mut self, style: &Style) {
        (**self).apply_style(style);
    }
}

// Shared handles are measured through, but styling needs exclusive access.
impl<T: IndexItem + ?Sized> IndexItem for Rc<T> {
    fn preferred_size(&self, bounding: Size) -> Size {
        (**self).preferred_size(bounding)
    }

    fn blocks_edge_truncation(&self) -> bool {
        (**self).blocks_edge_truncation()
    }
}

impl<T: IndexItem + ?Sized> IndexItem for Arc<T> {
    fn preferred_size(&self, bounding: Size) -> Size {
        (**self).preferred_size(bounding)
    }

    fn blocks_edge_truncation(&self) -> bool {
        (**self).blocks_edge_truncation()
    }
}
