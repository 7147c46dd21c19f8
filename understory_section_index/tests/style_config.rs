// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loading index styles from host configuration.

#![cfg(feature = "serde")]

use understory_section_index::{Direction, IndexInset, Inset, PixelGrid, Style};

#[test]
fn insets_load_from_json() {
    let json = r#"{
        "top": "Unbounded",
        "left": { "Fixed": 1.0 },
        "bottom": "Unbounded",
        "right": { "Fixed": 1.0 }
    }"#;
    let inset: IndexInset = serde_json::from_str(json).unwrap();
    assert_eq!(inset, Style::default().index_inset());
    assert_eq!(inset.horizontal_fixed(), 2.0);
}

#[test]
fn loaded_parts_go_through_the_builder() {
    let json = r#"{
        "top": { "Fixed": 4.0 },
        "left": "Unbounded",
        "bottom": { "Fixed": 4.0 },
        "right": { "Fixed": 2.0 }
    }"#;
    let inset: IndexInset = serde_json::from_str(json).unwrap();
    let grid: PixelGrid = serde_json::from_str(r#"{"scale":3.0}"#).unwrap();
    let direction: Direction = serde_json::from_str(r#""RightToLeft""#).unwrap();

    let style = Style::builder()
        .index_inset(inset)
        .pixel_grid(grid)
        .direction(direction)
        .build()
        .unwrap();
    assert_eq!(style.index_inset().left, Inset::Unbounded);
    assert_eq!(style.pixel_grid().scale(), 3.0);
    assert_eq!(style.direction(), Direction::RightToLeft);
}

#[test]
fn saved_style_restores_the_same_layout_inputs() {
    let style = Style::builder()
        .item_spacing(2.0)
        .min_width(60.0)
        .direction(Direction::RightToLeft)
        .build()
        .unwrap();
    let saved = serde_json::to_value(style).unwrap();
    assert_eq!(saved["item_spacing"], 2.0);
    assert_eq!(saved["direction"], "RightToLeft");

    let restored: Style = serde_json::from_value(saved).unwrap();
    assert_eq!(restored, style);
}

#[test]
fn degenerate_pixel_scales_are_rejected() {
    for json in [r#"{"scale":0.0}"#, r#"{"scale":-2.0}"#] {
        let err = serde_json::from_str::<PixelGrid>(json).unwrap_err();
        assert!(err.to_string().contains("must be finite and positive"), "{err}");
    }
}

#[test]
fn invalid_styles_are_rejected_on_load() {
    let mut saved = serde_json::to_value(Style::default()).unwrap();
    saved["item_spacing"] = serde_json::json!(-5.0);
    let err = serde_json::from_value::<Style>(saved).unwrap_err();
    assert!(err.to_string().contains("`item_spacing` is negative"), "{err}");

    let mut saved = serde_json::to_value(Style::default()).unwrap();
    saved["pixel_grid"]["scale"] = serde_json::json!(0.0);
    assert!(serde_json::from_value::<Style>(saved).is_err());
}
