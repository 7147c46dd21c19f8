// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout engine: item frames, content frame, and background frame.
//!
//! Item frames are expressed in content space (origin at the top-left of the
//! item stack). The content and background frames are expressed in the space
//! of the outer bounds passed to [`compute_container_layout`].

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `floor`
use kurbo::{Point, Rect, Size};

use crate::{Direction, IndexItem, Inset, Style};

/// Frames of a vertically stacked item list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ItemLayout {
    frames: Vec<Rect>,
    size: Size,
}

impl ItemLayout {
    /// Stacks `items` from `y = 0` down, centered on the bounding box.
    ///
    /// Every item is measured against the style's bounding box and its size
    /// ceiled to the pixel grid; its origin is rounded to the pixel grid.
    /// Spacing is added after each item, the last one included, so the total
    /// height is one gap taller than `n - 1` gaps would give.
    pub fn new<T: IndexItem>(items: &[T], style: &Style) -> Self {
        let bbox = style.font().bounding_size();
        let grid = style.pixel_grid();
        let spacing = style.item_spacing();

        let mut frames = Vec::with_capacity(items.len());
        let mut height = 0.0;
        for item in items {
            let size = grid.ceil_size(item.preferred_size(bbox));
            let origin = grid.round_point(Point::new((bbox.width - size.width) / 2.0, height));
            let frame = Rect::from_origin_size(origin, size);
            height += frame.height() + spacing;
            frames.push(frame);
        }

        let size = if frames.is_empty() {
            Size::ZERO
        } else {
            grid.round_size(Size::new(bbox.width, height))
        };
        Self { frames, size }
    }

    /// One frame per item, in list order.
    #[must_use]
    pub fn frames(&self) -> &[Rect] {
        &self.frames
    }

    /// Size of the whole stack.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }
}

/// Computes item frames and the stacked size. See [`ItemLayout::new`].
pub fn compute_item_layout<T: IndexItem>(items: &[T], style: &Style) -> ItemLayout {
    ItemLayout::new(items, style)
}

/// Complete geometry of the index inside its outer bounds.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContainerLayout {
    item_layout: ItemLayout,
    content_frame: Rect,
    background_frame: Rect,
}

impl ContainerLayout {
    /// Lays out `items` inside `bounds`.
    ///
    /// The stack is placed against the trailing edge: its right edge sits at
    /// `bounds.x1 - inset.right + offset.x` for left-to-right, its left edge
    /// at `bounds.x0 + inset.right + offset.x` for right-to-left. It is
    /// centered vertically on `bounds` and then shifted by `offset.y`.
    ///
    /// The background is the content frame grown by the inset on every side.
    /// An [`Inset::Unbounded`] side instead extends to the matching edge of
    /// `bounds`.
    pub fn new<T: IndexItem>(items: &[T], style: &Style, bounds: Rect) -> Self {
        let item_layout = ItemLayout::new(items, style);
        let grid = style.pixel_grid();
        let inset = style.index_inset();
        let offset = style.index_offset();
        let size = item_layout.size();

        // The trailing slot is `right` in both directions.
        let trailing = inset.right.fixed_or_zero();
        let x0 = match style.direction() {
            Direction::LeftToRight => bounds.x1 - trailing + offset.x - size.width,
            Direction::RightToLeft => bounds.x0 + trailing + offset.x,
        };
        let y0 = bounds.center().y + offset.y - size.height / 2.0;
        let content_frame = Rect::from_origin_size(grid.round_point(Point::new(x0, y0)), size);

        let background_frame = grid.round_rect(Rect::new(
            grow(content_frame.x0, inset.left, -1.0, bounds.x0),
            grow(content_frame.y0, inset.top, -1.0, bounds.y0),
            grow(content_frame.x1, inset.right, 1.0, bounds.x1),
            grow(content_frame.y1, inset.bottom, 1.0, bounds.y1),
        ));

        Self {
            item_layout,
            content_frame,
            background_frame,
        }
    }

    /// The item frames in content space.
    #[must_use]
    pub fn item_layout(&self) -> &ItemLayout {
        &self.item_layout
    }

    /// Item frames in content space.
    #[must_use]
    pub fn item_frames(&self) -> &[Rect] {
        self.item_layout.frames()
    }

    /// Frame of item `index` in the space of the outer bounds.
    #[must_use]
    pub fn item_frame_in_bounds(&self, index: usize) -> Option<Rect> {
        let origin = self.content_frame.origin().to_vec2();
        self.item_layout.frames().get(index).map(|frame| *frame + origin)
    }

    /// Bounding box of the item stack.
    #[must_use]
    pub fn content_frame(&self) -> Rect {
        self.content_frame
    }

    /// Frame of the background drawn behind the stack.
    #[must_use]
    pub fn background_frame(&self) -> Rect {
        self.background_frame
    }

    /// Maps a vertical position to an index into a list of `len` items.
    ///
    /// `y` is in the space of the outer bounds. The content frame is split
    /// into `len` equal bands; positions above or below it clamp to the first
    /// or last item. `len` is normally the full, untruncated item count, so a
    /// pointer dragged over a truncated strip still reaches every section.
    ///
    /// Returns `None` if `len` is zero or the content frame has no height.
    #[must_use]
    pub fn item_index_at(&self, y: f64, len: usize) -> Option<usize> {
        let height = self.content_frame.height();
        if len == 0 || height <= 0.0 || !y.is_finite() {
            return None;
        }
        let progress = ((y - self.content_frame.y0) / height).clamp(0.0, 0.9999);
        #[expect(
            clippy::cast_possible_truncation,
            reason = "progress is clamped to [0, 1), so the product is a valid index"
        )]
        let index = (progress * len as f64).floor() as usize;
        Some(index.min(len - 1))
    }
}

/// Moves `edge` outward by `inset` in direction `sign`, or to `bound` when unbounded.
fn grow(edge: f64, inset: Inset, sign: f64, bound: f64) -> f64 {
    match inset {
        Inset::Fixed(value) => edge + sign * value,
        Inset::Unbounded => bound,
    }
}

/// Computes the full container geometry. See [`ContainerLayout::new`].
pub fn compute_container_layout<T: IndexItem>(
    items: &[T],
    style: &Style,
    bounds: Rect,
) -> ContainerLayout {
    ContainerLayout::new(items, style, bounds)
}

/// Width the index wants: stack width plus horizontal insets, at least `min_width`.
///
/// Unbounded horizontal insets contribute nothing.
pub fn intrinsic_width<T: IndexItem>(items: &[T], style: &Style) -> f64 {
    let stack = ItemLayout::new(items, style).size();
    let width = stack.width + style.index_inset().horizontal_fixed();
    width.max(style.min_width())
}

/// Size the index wants inside `proposed`: its intrinsic width and the proposed height.
pub fn intrinsic_size<T: IndexItem>(items: &[T], style: &Style, proposed: Size) -> Size {
    Size::new(intrinsic_width(items, style), proposed.height)
}
