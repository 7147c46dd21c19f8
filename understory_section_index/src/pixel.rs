// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Device pixel grid snapping.
//!
//! Index items are small (a glyph or two), so a frame that straddles a device
//! pixel boundary renders visibly blurry. Every coordinate the engine emits is
//! snapped with a [`PixelGrid`]: positions are *rounded* to the nearest device
//! pixel and sizes are *ceiled* so content is never clipped.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `round` and `ceil`
use kurbo::{Point, Rect, Size};

use crate::StyleError;

/// Scale factor between logical coordinates and device pixels.
///
/// A scale of `2.0` means one logical unit covers two device pixels, so the
/// grid has a step of `0.5` logical units.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawPixelGrid")
)]
pub struct PixelGrid {
    scale: f64,
}

impl PixelGrid {
    /// Creates a grid for the given device scale factor.
    ///
    /// Returns [`StyleError::InvalidScale`] unless `scale` is finite and positive.
    pub fn new(scale: f64) -> Result<Self, StyleError> {
        if scale.is_finite() && scale > 0.0 {
            Ok(Self { scale })
        } else {
            Err(StyleError::InvalidScale { scale })
        }
    }

    /// Returns the device scale factor.
    #[must_use]
    pub fn scale(self) -> f64 {
        self.scale
    }

    /// Rounds a coordinate to the nearest device pixel.
    #[must_use]
    pub fn round(self, value: f64) -> f64 {
        (value * self.scale).round() / self.scale
    }

    /// Rounds a length up to a whole number of device pixels.
    #[must_use]
    pub fn ceil(self, value: f64) -> f64 {
        (value * self.scale).ceil() / self.scale
    }

    /// Rounds both coordinates of a point.
    #[must_use]
    pub fn round_point(self, point: Point) -> Point {
        Point::new(self.round(point.x), self.round(point.y))
    }

    /// Rounds both dimensions of a size.
    #[must_use]
    pub fn round_size(self, size: Size) -> Size {
        Size::new(self.round(size.width), self.round(size.height))
    }

    /// Ceils both dimensions of a size.
    #[must_use]
    pub fn ceil_size(self, size: Size) -> Size {
        Size::new(self.ceil(size.width), self.ceil(size.height))
    }

    /// Rounds every edge of a rectangle.
    ///
    /// Rounding edges rather than origin and size keeps abutting rectangles
    /// abutting after snapping.
    #[must_use]
    pub fn round_rect(self, rect: Rect) -> Rect {
        Rect::new(
            self.round(rect.x0),
            self.round(rect.y0),
            self.round(rect.x1),
            self.round(rect.y1),
        )
    }
}

impl Default for PixelGrid {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

/// Unvalidated form of [`PixelGrid`] read from config.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawPixelGrid {
    scale: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawPixelGrid> for PixelGrid {
    type Error = StyleError;

    fn try_from(raw: RawPixelGrid) -> Result<Self, Self::Error> {
        Self::new(raw.scale)
    }
}
