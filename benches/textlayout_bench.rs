// ABOUTME: Criterion benchmarks for the table realignment and reflow engine
// ABOUTME: Measures alignment and wrapping over synthetic session documents
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// A session-plan-shaped document: prose, a drifted table, more prose
fn synthetic_document(tables: usize) -> String {
    let mut doc = String::new();
    for i in 0..tables {
        doc.push_str("Session block ");
        doc.push_str(&i.to_string());
        doc.push_str(": possession work with overloads in the middle third.\n\n");
        doc.push_str("┌──────────┬────────┬──────────────┐\n");
        doc.push_str("│ Phase│ Minutes   │ Focus │\n");
        doc.push_str("│ Warm-up   │ 15│ Activation │\n");
        doc.push_str("│ Rondo │ 20 │ First touch│\n");
        doc.push_str("└──────────┴────────┴──────────────┘\n\n");
        doc.push_str(
            "Coaching points: body shape before receiving, scan before the ball arrives, \
             play forward when the pass is on, recover immediately after losing possession.\n\n",
        );
    }
    doc
}

fn bench_fix_alignment(c: &mut Criterion) {
    let doc = synthetic_document(50);
    c.bench_function("fix_alignment_50_tables", |b| {
        b.iter(|| coachkit_core::fix_alignment(black_box(&doc)));
    });
}

fn bench_wrap_long_lines(c: &mut Criterion) {
    let doc = synthetic_document(50);
    c.bench_function("wrap_long_lines_50_blocks", |b| {
        b.iter(|| coachkit_core::wrap_long_lines(black_box(&doc), Some(60)));
    });
}

fn bench_format_text(c: &mut Criterion) {
    let doc = synthetic_document(50);
    c.bench_function("format_text_50_blocks", |b| {
        b.iter(|| coachkit_core::format_text(black_box(&doc), None));
    });
}

criterion_group!(
    benches,
    bench_fix_alignment,
    bench_wrap_long_lines,
    bench_format_text
);
criterion_main!(benches);
