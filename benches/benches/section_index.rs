// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Rect, Size};
use understory_section_index::{
    Item, ItemDiff, SearchItem, Style, compute_container_layout, truncate,
};

/// A search marker followed by `len` single-line text items and `#`.
fn items(len: usize) -> Vec<Item> {
    let mut items = vec![Item::from(SearchItem)];
    items.extend((0..len).map(|i| Item::text(format!("{i}"), Size::new(8.0, 13.0))));
    items.push(Item::text("#", Size::new(8.0, 13.0)));
    items
}

/// Diff key: the title of text items, `None` for everything else.
fn title(item: &Item) -> Option<String> {
    match item {
        Item::Text(text) => Some(text.text().to_owned()),
        _ => None,
    }
}

fn bench_container_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("section_index/container_layout");
    let style = Style::default();

    for len in [26usize, 256, 4_096] {
        let items = items(len);
        let bounds = Rect::new(0.0, 0.0, 320.0, 13.5 * items.len() as f64 + 40.0);
        group.throughput(Throughput::Elements(items.len() as u64));

        group.bench_with_input(BenchmarkId::new("full", len), &items, |b, items| {
            b.iter(|| black_box(compute_container_layout(items, &style, bounds)));
        });
    }

    group.finish();
}

fn bench_truncate(c: &mut Criterion) {
    let mut group = c.benchmark_group("section_index/truncate");
    let style = Style::default();

    // Short budgets emulate a keyboard covering most of the table.
    for len in [26usize, 256, 4_096] {
        let items = items(len);
        group.throughput(Throughput::Elements(items.len() as u64));

        for budget in [120.0, 400.0] {
            group.bench_with_input(
                BenchmarkId::new(format!("budget_{budget}"), len),
                &items,
                |b, items| {
                    b.iter(|| black_box(truncate(items, &style, budget, Item::placeholder)));
                },
            );
        }
    }

    group.finish();
}

fn bench_truncate_then_diff(c: &mut Criterion) {
    let mut group = c.benchmark_group("section_index/truncate_then_diff");
    let style = Style::default();
    let items = items(26);

    // Successive passes while the available height animates.
    let before = truncate(&items, &style, 300.0, Item::placeholder);
    group.bench_function("keyboard_step", |b| {
        b.iter(|| {
            let after = truncate(&items, &style, black_box(180.0), Item::placeholder);
            black_box(ItemDiff::between(&before, &after, title))
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_container_layout,
    bench_truncate,
    bench_truncate_then_diff
);
criterion_main!(benches);
