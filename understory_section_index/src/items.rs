// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stock index items: text, images, the search marker, and the truncation dot.
//!
//! [`Item`] is a tagged variant over the stock kinds so hosts can mix them in
//! a single ordered list without dynamic dispatch. Hosts with their own item
//! types implement [`IndexItem`] directly instead.

use alloc::string::String;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `round` and `ceil`
use kurbo::{Insets, Size};

use crate::{FontMetrics, IndexItem, Style, StyleDefaults};

/// Glyph box of the `#` sign the system index draws at the default font.
const NUMBER_SIGN_SIZE: Size = Size::new(8.0, 14.0);

/// A text label, typically a single section title letter.
#[derive(Clone, Debug, PartialEq)]
pub struct TextItem {
    text: String,
    measured: Size,
    font: FontMetrics,
}

impl TextItem {
    /// Creates a label with the measured size of `text` in the current font.
    ///
    /// Text shaping lives outside this crate, so the host supplies the
    /// measurement.
    #[must_use]
    pub fn new(text: impl Into<String>, measured: Size) -> Self {
        Self {
            text: text.into(),
            measured,
            font: StyleDefaults::FONT,
        }
    }

    /// The label text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The font last applied through [`IndexItem::apply_style`].
    #[must_use]
    pub fn font(&self) -> FontMetrics {
        self.font
    }

    /// Replaces the measured size, e.g. after re-shaping for a new font.
    pub fn set_measured(&mut self, measured: Size) {
        self.measured = measured;
    }

    fn is_number_sign(&self) -> bool {
        self.text == "#"
    }
}

impl IndexItem for TextItem {
    fn preferred_size(&self, bounding: Size) -> Size {
        if self.is_number_sign() && self.font == StyleDefaults::FONT {
            return NUMBER_SIGN_SIZE;
        }
        Size::new(
            self.measured.width.min(bounding.width),
            self.measured.height.min(bounding.height),
        )
    }

    fn blocks_edge_truncation(&self) -> bool {
        self.is_number_sign()
    }

    fn apply_style(&mut self, style: &Style) {
        self.font = style.font();
    }
}

/// An image, shown at its natural size but never larger than the bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImageItem {
    /// Natural image size; `None` for an item without an image.
    pub image_size: Option<Size>,
    /// Padding removed from the fitted image size.
    pub content_inset: Insets,
}

impl ImageItem {
    /// Creates an image item with no content inset.
    #[must_use]
    pub fn new(image_size: Size) -> Self {
        Self {
            image_size: Some(image_size),
            content_inset: Insets::ZERO,
        }
    }
}

impl IndexItem for ImageItem {
    fn preferred_size(&self, bounding: Size) -> Size {
        let Some(image) = self.image_size else {
            return Size::ZERO;
        };
        let fitted = Size::new(
            image.width.min(bounding.width),
            image.height.min(bounding.height),
        );
        let inset = self.content_inset;
        Size::new(
            (fitted.width - inset.x_value()).max(0.0),
            (fitted.height - inset.y_value()).max(0.0),
        )
    }
}

/// Magnifying glass marker standing for the search field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchItem;

impl IndexItem for SearchItem {
    fn preferred_size(&self, bounding: Size) -> Size {
        Size::new(bounding.width * 0.75, (bounding.height * 1.15).ceil())
    }

    fn blocks_edge_truncation(&self) -> bool {
        true
    }
}

/// The dot inserted where items were truncated away.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TruncationItem;

impl TruncationItem {
    /// Radius of the dot drawn inside a box of the given height.
    #[must_use]
    pub fn dot_radius(height: f64) -> f64 {
        (height * 0.25).round()
    }
}

impl IndexItem for TruncationItem {
    fn preferred_size(&self, bounding: Size) -> Size {
        let diameter = Self::dot_radius(bounding.height) * 2.0;
        Size::new(diameter, diameter * 1.8)
    }
}

/// Any of the stock item kinds.
#[derive(Clone, Debug, PartialEq)]
pub enum Item {
    /// A text label.
    Text(TextItem),
    /// An image.
    Image(ImageItem),
    /// The search marker.
    Search(SearchItem),
    /// A truncation placeholder.
    Truncation(TruncationItem),
}

impl Item {
    /// Creates a text item. See [`TextItem::new`].
    #[must_use]
    pub fn text(text: impl Into<String>, measured: Size) -> Self {
        Self::Text(TextItem::new(text, measured))
    }

    /// Creates a fresh truncation placeholder.
    ///
    /// Passing `Item::placeholder` to [`truncate`](crate::truncate) gives the
    /// stock truncation dot.
    #[must_use]
    pub fn placeholder() -> Self {
        Self::Truncation(TruncationItem)
    }

    /// Returns `true` for truncation placeholders.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Truncation(_))
    }

    fn as_dyn(&self) -> &dyn IndexItem {
        match self {
            Self::Text(item) => item,
            Self::Image(item) => item,
            Self::Search(item) => item,
            Self::Truncation(item) => item,
        }
    }
}

impl IndexItem for Item {
    fn preferred_size(&self, bounding: Size) -> Size {
        self.as_dyn().preferred_size(bounding)
    }

    fn blocks_edge_truncation(&self) -> bool {
        self.as_dyn().blocks_edge_truncation()
    }

    fn apply_style(&mut self, style: &Style) {
        match self {
            Self::Text(item) => item.apply_style(style),
            Self::Image(item) => item.apply_style(style),
            Self::Search(item) => item.apply_style(style),
            Self::Truncation(item) => item.apply_style(style),
        }
    }
}

impl From<TextItem> for Item {
    fn from(item: TextItem) -> Self {
        Self::Text(item)
    }
}

impl From<ImageItem> for Item {
    fn from(item: ImageItem) -> Self {
        Self::Image(item)
    }
}

impl From<SearchItem> for Item {
    fn from(item: SearchItem) -> Self {
        Self::Search(item)
    }
}

impl From<TruncationItem> for Item {
    fn from(item: TruncationItem) -> Self {
        Self::Truncation(item)
    }
}
