// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A small controller tying truncation and layout together.

use alloc::vec::Vec;
use core::fmt;

use kurbo::Rect;

use crate::{ContainerLayout, IndexItem, Style, apply_style, intrinsic_width, truncate};

/// Host-facing state of one section index.
///
/// `SectionIndex` owns the full item list, the style, and the placeholder
/// factory. Each call to [`layout`](Self::layout) truncates for the height of
/// the given bounds and lays out the result, replacing whatever the previous
/// pass produced. Hosts call it on every bounds, content, or style change and
/// read back [`displayed_items`](Self::displayed_items) and
/// [`container_layout`](Self::container_layout) to drive their views.
///
/// The controller has no internal synchronization; calls for one instance
/// must be serialized by the host.
///
/// ```rust
/// use kurbo::{Rect, Size};
/// use understory_section_index::{Item, SearchItem, SectionIndex, Style};
///
/// let mut items = vec![Item::from(SearchItem)];
/// items.extend(('A'..='Z').map(|c| Item::text(c.to_string(), Size::new(8.0, 13.0))));
/// items.push(Item::text("#", Size::new(8.0, 13.0)));
///
/// let mut index = SectionIndex::new(items, Style::default(), Item::placeholder);
/// index.layout(Rect::new(0.0, 0.0, 44.0, 200.0));
///
/// let shown = index.displayed_items();
/// assert!(shown.len() < index.items().len());
/// assert_eq!(shown.first(), index.items().first());
/// assert_eq!(shown.last(), index.items().last());
/// ```
pub struct SectionIndex<T, F> {
    items: Vec<T>,
    style: Style,
    placeholder: F,
    displayed: Vec<T>,
    layout: ContainerLayout,
}

impl<T, F> SectionIndex<T, F>
where
    T: IndexItem + Clone,
    F: FnMut() -> T,
{
    /// Creates a controller and applies `style` to `items`.
    ///
    /// Nothing is displayed until the first [`layout`](Self::layout).
    pub fn new(mut items: Vec<T>, style: Style, placeholder: F) -> Self {
        apply_style(&mut items, &style);
        Self {
            items,
            style,
            placeholder,
            displayed: Vec::new(),
            layout: ContainerLayout::default(),
        }
    }

    /// Replaces the items. Takes effect on the next layout pass.
    pub fn set_items(&mut self, mut items: Vec<T>) {
        apply_style(&mut items, &self.style);
        self.items = items;
    }

    /// Replaces the style and re-applies it to every item.
    pub fn set_style(&mut self, style: Style) {
        if self.style == style {
            return;
        }
        self.style = style;
        apply_style(&mut self.items, &self.style);
    }

    /// Truncates for `bounds` and lays out the displayed items.
    pub fn layout(&mut self, bounds: Rect) -> &ContainerLayout {
        self.displayed = truncate(
            &self.items,
            &self.style,
            bounds.height(),
            &mut self.placeholder,
        );
        self.layout = ContainerLayout::new(&self.displayed, &self.style, bounds);
        &self.layout
    }

    /// Width the index wants for its full item list.
    #[must_use]
    pub fn intrinsic_width(&self) -> f64 {
        intrinsic_width(&self.items, &self.style)
    }
}

impl<T, F> SectionIndex<T, F> {
    /// All items, truncated or not.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Items chosen by the last layout pass, placeholders included.
    #[must_use]
    pub fn displayed_items(&self) -> &[T] {
        &self.displayed
    }

    /// Geometry from the last layout pass.
    #[must_use]
    pub fn container_layout(&self) -> &ContainerLayout {
        &self.layout
    }

    /// The current style.
    #[must_use]
    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Index into [`items`](Self::items) for a vertical position in bounds space.
    ///
    /// Positions map onto the full list even when the strip is truncated.
    #[must_use]
    pub fn item_index_at(&self, y: f64) -> Option<usize> {
        self.layout.item_index_at(y, self.items.len())
    }
}

impl<T: fmt::Debug, F> fmt::Debug for SectionIndex<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SectionIndex")
            .field("items", &self.items)
            .field("style", &self.style)
            .field("displayed", &self.displayed)
            .field("layout", &self.layout)
            .finish_non_exhaustive()
    }
}
