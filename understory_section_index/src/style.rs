// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Index appearance: font metrics, spacing, insets, offset, and direction.
//!
//! [`Style`] is an immutable value. Changing any parameter produces a new
//! `Style`, either through [`Style::to_builder`] or one of the reset helpers.
//! The defaults reproduce the look of the system table index.

use core::fmt;

use kurbo::{Size, Vec2};

use crate::PixelGrid;

/// Font metrics used by the layout engine.
///
/// Only the line height participates in layout, through the square
/// [`bounding_size`](Self::bounding_size) every item is measured against.
/// The point size identifies the font for items that special-case the
/// default font.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FontMetrics {
    /// Nominal font size in points.
    pub point_size: f64,
    /// Distance between consecutive baselines.
    pub line_height: f64,
}

impl FontMetrics {
    /// Creates font metrics.
    #[must_use]
    pub const fn new(point_size: f64, line_height: f64) -> Self {
        Self {
            point_size,
            line_height,
        }
    }

    /// Returns the `line_height × line_height` box items are measured against.
    #[must_use]
    pub fn bounding_size(&self) -> Size {
        Size::new(self.line_height, self.line_height)
    }
}

impl Default for FontMetrics {
    fn default() -> Self {
        StyleDefaults::FONT
    }
}

/// One side of the [`IndexInset`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Inset {
    /// A fixed distance in logical units.
    Fixed(f64),
    /// Extend the background to the edge of the outer bounds on this side.
    Unbounded,
}

impl Inset {
    /// Returns `true` for [`Inset::Unbounded`].
    #[must_use]
    pub fn is_unbounded(self) -> bool {
        matches!(self, Self::Unbounded)
    }

    /// Returns the fixed distance, or `0.0` for an unbounded side.
    #[must_use]
    pub fn fixed_or_zero(self) -> f64 {
        match self {
            Self::Fixed(value) => value,
            Self::Unbounded => 0.0,
        }
    }
}

impl From<f64> for Inset {
    fn from(value: f64) -> Self {
        Self::Fixed(value)
    }
}

/// Distance between the background edges and the item stack.
///
/// Insets size the background around the content; they do not move items
/// except through the trailing (`right`) inset, which positions the stack
/// against the trailing edge of the bounds.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndexInset {
    /// Space above the first item.
    pub top: Inset,
    /// Space left of the stack.
    pub left: Inset,
    /// Space below the last item.
    pub bottom: Inset,
    /// Space right of the stack.
    pub right: Inset,
}

impl IndexInset {
    /// Creates an inset with a fixed distance on every side.
    #[must_use]
    pub const fn uniform(value: f64) -> Self {
        Self {
            top: Inset::Fixed(value),
            left: Inset::Fixed(value),
            bottom: Inset::Fixed(value),
            right: Inset::Fixed(value),
        }
    }

    /// Horizontal insets summed, with unbounded sides counting as zero.
    #[must_use]
    pub fn horizontal_fixed(&self) -> f64 {
        self.left.fixed_or_zero() + self.right.fixed_or_zero()
    }
}

impl Default for IndexInset {
    fn default() -> Self {
        StyleDefaults::INDEX_INSET
    }
}

/// Horizontal writing direction of the host.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// The index sits against the right edge.
    #[default]
    LeftToRight,
    /// The index sits against the left edge.
    RightToLeft,
}

/// Default values matching the system index appearance.
#[derive(Debug)]
pub struct StyleDefaults;

impl StyleDefaults {
    /// Bold 11pt system font.
    pub const FONT: FontMetrics = FontMetrics::new(11.0, 13.0);
    /// The system index uses this constant rather than one device pixel.
    pub const ITEM_SPACING: f64 = 0.5;
    /// Background fills the full height and hugs the stack horizontally.
    pub const INDEX_INSET: IndexInset = IndexInset {
        top: Inset::Unbounded,
        left: Inset::Fixed(1.0),
        bottom: Inset::Unbounded,
        right: Inset::Fixed(1.0),
    };
    /// No shift.
    pub const INDEX_OFFSET: Vec2 = Vec2::ZERO;
    /// Minimum overall width of the control.
    pub const MIN_WIDTH: f64 = 44.0;
}

/// Immutable bundle of the visual parameters governing index layout.
///
/// # Example
///
/// ```rust
/// use understory_section_index::{Inset, IndexInset, Style};
///
/// let style = Style::builder()
///     .item_spacing(1.0)
///     .index_inset(IndexInset {
///         top: Inset::Fixed(4.0),
///         ..IndexInset::default()
///     })
///     .build()
///     .unwrap();
///
/// // Changes produce a new value.
/// let wider = style.to_builder().min_width(60.0).build().unwrap();
/// assert_eq!(style.min_width(), 44.0);
/// assert_eq!(wider.min_width(), 60.0);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawStyle")
)]
pub struct Style {
    font: FontMetrics,
    item_spacing: f64,
    index_inset: IndexInset,
    index_offset: Vec2,
    direction: Direction,
    min_width: f64,
    pixel_grid: PixelGrid,
}

impl Style {
    /// Starts a builder from the default style.
    #[must_use]
    pub fn builder() -> StyleBuilder {
        StyleBuilder::new()
    }

    /// Starts a builder from this style.
    #[must_use]
    pub fn to_builder(&self) -> StyleBuilder {
        StyleBuilder { style: *self }
    }

    /// Font metrics items are measured with.
    #[must_use]
    pub fn font(&self) -> FontMetrics {
        self.font
    }

    /// Vertical gap added after each item.
    #[must_use]
    pub fn item_spacing(&self) -> f64 {
        self.item_spacing
    }

    /// Insets between the background and the item stack.
    #[must_use]
    pub fn index_inset(&self) -> IndexInset {
        self.index_inset
    }

    /// Shift applied to the item stack after insets.
    #[must_use]
    pub fn index_offset(&self) -> Vec2 {
        self.index_offset
    }

    /// Writing direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Minimum overall width reported by [`intrinsic_width`](crate::intrinsic_width).
    #[must_use]
    pub fn min_width(&self) -> f64 {
        self.min_width
    }

    /// Grid all output geometry is snapped to.
    #[must_use]
    pub fn pixel_grid(&self) -> PixelGrid {
        self.pixel_grid
    }

    /// Returns a copy with a different writing direction.
    #[must_use]
    pub fn with_direction(self, direction: Direction) -> Self {
        Self { direction, ..self }
    }

    /// Returns a copy using the default font.
    #[must_use]
    pub fn with_default_font(self) -> Self {
        Self {
            font: StyleDefaults::FONT,
            ..self
        }
    }

    /// Returns a copy using the default item spacing.
    #[must_use]
    pub fn with_default_item_spacing(self) -> Self {
        Self {
            item_spacing: StyleDefaults::ITEM_SPACING,
            ..self
        }
    }

    /// Returns a copy using the default index inset.
    #[must_use]
    pub fn with_default_index_inset(self) -> Self {
        Self {
            index_inset: StyleDefaults::INDEX_INSET,
            ..self
        }
    }

    /// Returns a copy using the default index offset.
    #[must_use]
    pub fn with_default_index_offset(self) -> Self {
        Self {
            index_offset: StyleDefaults::INDEX_OFFSET,
            ..self
        }
    }
}

impl Default for Style {
    fn default() -> Self {
        Self {
            font: StyleDefaults::FONT,
            item_spacing: StyleDefaults::ITEM_SPACING,
            index_inset: StyleDefaults::INDEX_INSET,
            index_offset: StyleDefaults::INDEX_OFFSET,
            direction: Direction::default(),
            min_width: StyleDefaults::MIN_WIDTH,
            pixel_grid: PixelGrid::default(),
        }
    }
}

/// Builder for [`Style`]; validates values on [`build`](Self::build).
#[derive(Clone, Debug, Default)]
pub struct StyleBuilder {
    style: Style,
}

impl StyleBuilder {
    /// Creates a builder holding the default style.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the font metrics.
    #[must_use]
    pub fn font(mut self, font: FontMetrics) -> Self {
        self.style.font = font;
        self
    }

    /// Sets the vertical spacing between items.
    #[must_use]
    pub fn item_spacing(mut self, spacing: f64) -> Self {
        self.style.item_spacing = spacing;
        self
    }

    /// Sets the index inset.
    #[must_use]
    pub fn index_inset(mut self, inset: IndexInset) -> Self {
        self.style.index_inset = inset;
        self
    }

    /// Sets the index offset (`x` horizontal, `y` vertical).
    #[must_use]
    pub fn index_offset(mut self, offset: Vec2) -> Self {
        self.style.index_offset = offset;
        self
    }

    /// Sets the writing direction.
    #[must_use]
    pub fn direction(mut self, direction: Direction) -> Self {
        self.style.direction = direction;
        self
    }

    /// Sets the minimum overall width.
    #[must_use]
    pub fn min_width(mut self, min_width: f64) -> Self {
        self.style.min_width = min_width;
        self
    }

    /// Sets the pixel grid.
    #[must_use]
    pub fn pixel_grid(mut self, grid: PixelGrid) -> Self {
        self.style.pixel_grid = grid;
        self
    }

    /// Validates and returns the style.
    pub fn build(self) -> Result<Style, StyleError> {
        let style = self.style;
        non_negative("font.point_size", style.font.point_size)?;
        non_negative("font.line_height", style.font.line_height)?;
        non_negative("item_spacing", style.item_spacing)?;
        non_negative("min_width", style.min_width)?;
        let inset = style.index_inset;
        for (field, side) in [
            ("index_inset.top", inset.top),
            ("index_inset.left", inset.left),
            ("index_inset.bottom", inset.bottom),
            ("index_inset.right", inset.right),
        ] {
            if let Inset::Fixed(value) = side {
                non_negative(field, value)?;
            }
        }
        finite("index_offset.x", style.index_offset.x)?;
        finite("index_offset.y", style.index_offset.y)?;
        Ok(style)
    }
}

/// Unvalidated form of [`Style`] read from config.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawStyle {
    font: FontMetrics,
    item_spacing: f64,
    index_inset: IndexInset,
    index_offset: Vec2,
    direction: Direction,
    min_width: f64,
    pixel_grid: PixelGrid,
}

#[cfg(feature = "serde")]
impl TryFrom<RawStyle> for Style {
    type Error = StyleError;

    fn try_from(raw: RawStyle) -> Result<Self, Self::Error> {
        Self::builder()
            .font(raw.font)
            .item_spacing(raw.item_spacing)
            .index_inset(raw.index_inset)
            .index_offset(raw.index_offset)
            .direction(raw.direction)
            .min_width(raw.min_width)
            .pixel_grid(raw.pixel_grid)
            .build()
    }
}

fn finite(field: &'static str, value: f64) -> Result<(), StyleError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(StyleError::NonFinite { field })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), StyleError> {
    finite(field, value)?;
    if value < 0.0 {
        Err(StyleError::Negative { field })
    } else {
        Ok(())
    }
}

/// Error returned when building an invalid [`Style`] or [`PixelGrid`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum StyleError {
    /// A value was NaN or infinite.
    NonFinite {
        /// Name of the offending field.
        field: &'static str,
    },
    /// A length that must not be negative was negative.
    Negative {
        /// Name of the offending field.
        field: &'static str,
    },
    /// A pixel grid scale was not finite and positive.
    InvalidScale {
        /// The rejected scale.
        scale: f64,
    },
}

impl fmt::Display for StyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite { field } => write!(f, "style field `{field}` is not finite"),
            Self::Negative { field } => write!(f, "style field `{field}` is negative"),
            Self::InvalidScale { scale } => {
                write!(f, "pixel grid scale {scale} must be finite and positive")
            }
        }
    }
}

impl core::error::Error for StyleError {}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn defaults_match_system_index() {
        let style = Style::default();
        assert_eq!(style.font(), FontMetrics::new(11.0, 13.0));
        assert_eq!(style.item_spacing(), 0.5);
        assert!(style.index_inset().top.is_unbounded());
        assert!(style.index_inset().bottom.is_unbounded());
        assert_eq!(style.index_inset().left, Inset::Fixed(1.0));
        assert_eq!(style.index_offset(), Vec2::ZERO);
        assert_eq!(style.direction(), Direction::LeftToRight);
        assert_eq!(style.min_width(), 44.0);
        assert_eq!(style.font().bounding_size(), Size::new(13.0, 13.0));
    }

    #[test]
    fn builder_rejects_invalid_values() {
        assert_eq!(
            Style::builder().item_spacing(-1.0).build(),
            Err(StyleError::Negative {
                field: "item_spacing"
            })
        );
        assert_eq!(
            Style::builder()
                .index_offset(Vec2::new(f64::NAN, 0.0))
                .build(),
            Err(StyleError::NonFinite {
                field: "index_offset.x"
            })
        );
        assert_eq!(
            Style::builder()
                .index_inset(IndexInset {
                    left: Inset::Fixed(-2.0),
                    ..IndexInset::default()
                })
                .build(),
            Err(StyleError::Negative {
                field: "index_inset.left"
            })
        );
        // Unbounded sides are valid on every edge.
        assert!(
            Style::builder()
                .index_inset(IndexInset {
                    top: Inset::Unbounded,
                    left: Inset::Unbounded,
                    bottom: Inset::Unbounded,
                    right: Inset::Unbounded,
                })
                .build()
                .is_ok()
        );
    }

    #[test]
    fn reset_helpers_restore_one_field() {
        let custom = Style::builder()
            .font(FontMetrics::new(14.0, 17.0))
            .item_spacing(3.0)
            .index_offset(Vec2::new(2.0, -1.0))
            .direction(Direction::RightToLeft)
            .build()
            .unwrap();

        let reset = custom.with_default_font();
        assert_eq!(reset.font(), StyleDefaults::FONT);
        assert_eq!(reset.item_spacing(), 3.0);
        assert_eq!(reset.direction(), Direction::RightToLeft);

        let reset = custom.with_default_item_spacing().with_default_index_offset();
        assert_eq!(reset.item_spacing(), StyleDefaults::ITEM_SPACING);
        assert_eq!(reset.index_offset(), Vec2::ZERO);
        assert_eq!(reset.font(), FontMetrics::new(14.0, 17.0));

        let flipped = custom.with_direction(Direction::LeftToRight);
        assert_eq!(flipped.direction(), Direction::LeftToRight);
        assert_eq!(custom.direction(), Direction::RightToLeft);
    }

    #[test]
    fn error_messages_name_the_field() {
        let err = StyleError::Negative {
            field: "min_width",
        };
        assert_eq!(err.to_string(), "style field `min_width` is negative");
    }
}
