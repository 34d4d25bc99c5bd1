// ABOUTME: Criterion benchmarks for the derived-state engine
// ABOUTME: Measures collection totals and the filter/sort pipeline across collection sizes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the derived-state engine.
//!
//! Sizes straddle the default parallel threshold so both the sequential and
//! rayon paths are measured.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pierre_state_engine::filtering::{FilterCriterion, FilterSortPipeline, SortSpec};
use pierre_state_engine::metrics::MetricsCalculator;
use pierre_state_engine::models::{Item, TemporalEntity};
use pierre_state_engine::scoring::ScoreEngine;

const SIZES: [usize; 3] = [100, 1_000, 10_000];

const SPORTS: [&str; 4] = ["Football", "Tennis", "Padel", "Basketball"];

fn bench_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 5, 20, 12, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

#[allow(clippy::cast_possible_truncation)]
fn generate_items(count: usize) -> Vec<Item> {
    (0..count)
        .map(|index| {
            let item = Item::new(format!("item_{index}"))
                .with_duration(30 + (index * 37 % 300) as u32)
                .with_calories((index % 250) as f64);
            if index % 3 == 0 {
                item
            } else {
                item.with_rest(15 + (index % 45) as u32)
            }
        })
        .collect()
}

#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn generate_tournaments(count: usize) -> Vec<TemporalEntity> {
    let now = bench_now();
    (0..count)
        .map(|index| {
            let start = now + Duration::days((index % 60) as i64);
            TemporalEntity::new(
                format!("tournament_{index}"),
                format!("Benchmark Cup {index}"),
                start,
                start + Duration::hours(4),
                start - Duration::days(2),
            )
            .with_sport(SPORTS[index % SPORTS.len()])
            .with_capacity(32, (index % 40) as u32)
        })
        .collect()
}

fn bench_compute_totals(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_totals");
    let calculator = MetricsCalculator::new();

    for size in SIZES {
        let items = generate_items(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &items, |b, items| {
            b.iter(|| calculator.compute_totals(black_box(items)));
        });
    }

    group.finish();
}

fn bench_filter_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_sort");
    let pipeline = FilterSortPipeline::default();
    let criteria = [
        FilterCriterion::one_of("sport", ["Football", "Padel"]),
        FilterCriterion::contains(["title"], "cup"),
    ];
    let sort = SortSpec::asc("startAt").then_by("registeredCount");
    let now = bench_now();

    for size in SIZES {
        let tournaments = generate_tournaments(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &tournaments,
            |b, tournaments| {
                b.iter(|| pipeline.apply(black_box(tournaments), &criteria, &sort, now));
            },
        );
    }

    group.finish();
}

fn bench_score(c: &mut Criterion) {
    let engine = ScoreEngine::new();
    let features: Vec<bool> = (0..64).map(|index| index % 3 != 0).collect();

    c.bench_function("compute_score_64_features", |b| {
        b.iter(|| engine.compute_score(black_box(&features)));
    });
}

criterion_group!(benches, bench_compute_totals, bench_filter_sort, bench_score);
criterion_main!(benches);
