// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_section_index --heading-base-level=0

//! Understory Section Index: layout and truncation for index strips.
//!
//! A section index is the narrow strip of section titles (`A`…`Z`, a search
//! marker, `#`) along the trailing edge of a table. This crate is the
//! renderer-agnostic core of such a control. It decides which items to show,
//! where to put them, and how to collapse them when they do not all fit,
//! reproducing the look of the system table index.
//!
//! The core concepts are:
//!
//! - [`IndexItem`]: the capability trait items implement (preferred size,
//!   edge protection, style hook). [`Item`] is a tagged variant over the
//!   stock kinds: [`TextItem`], [`ImageItem`], [`SearchItem`], and the
//!   [`TruncationItem`] placeholder.
//! - [`Style`]: an immutable bundle of font metrics, spacing, insets, offset,
//!   writing direction, minimum width and [`PixelGrid`].
//! - [`compute_item_layout`] and [`compute_container_layout`]: stack items on
//!   the pixel grid and place the stack and its background inside bounds.
//! - [`truncate`]: reduce an item list to a height budget by evenly sampling
//!   items and inserting placeholders between them.
//! - [`SectionIndex`]: a small controller that runs both on every pass.
//! - [`ItemDiff`]: which displayed items appeared, disappeared, or stayed.
//!
//! This crate deliberately does **not** know about views, touches, or any
//! particular UI framework. Host frameworks are responsible for:
//!
//! - Measuring text (see [`TextItem::new`]) and drawing items.
//! - Calling [`SectionIndex::layout`] whenever bounds, items, or style change,
//!   including when the available height shrinks under an on-screen keyboard.
//! - Turning pointer positions into sections via
//!   [`SectionIndex::item_index_at`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Rect, Size};
//! use understory_section_index::{Item, Style, compute_container_layout, truncate};
//!
//! let style = Style::default();
//! let items: Vec<Item> = ('A'..='Z')
//!     .map(|c| Item::text(c.to_string(), Size::new(8.0, 13.0)))
//!     .collect();
//!
//! let bounds = Rect::new(0.0, 0.0, 44.0, 200.0);
//! let shown = truncate(&items, &style, bounds.height(), Item::placeholder);
//! let layout = compute_container_layout(&shown, &style, bounds);
//!
//! assert_eq!(layout.item_frames().len(), shown.len());
//! let background = layout.background_frame();
//! assert_eq!(background.union(layout.content_frame()), background);
//! ```
//!
//! All geometry lives in logical coordinates and is snapped to the style's
//! [`PixelGrid`]. Every computation is pure and synchronous.
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod diff;
mod item;
mod items;
mod layout;
mod metrics;
mod pixel;
mod section_index;
mod style;
mod truncation;

pub use diff::ItemDiff;
pub use item::{IndexItem, apply_style};
pub use items::{ImageItem, Item, SearchItem, TextItem, TruncationItem};
pub use layout::{
    ContainerLayout, ItemLayout, compute_container_layout, compute_item_layout, intrinsic_size,
    intrinsic_width,
};
pub use metrics::Metrics;
pub use pixel::PixelGrid;
pub use section_index::SectionIndex;
pub use style::{
    Direction, FontMetrics, IndexInset, Inset, Style, StyleBuilder, StyleDefaults, StyleError,
};
pub use truncation::{EDGE_PROTECTION_MIN_LEN, truncate};
