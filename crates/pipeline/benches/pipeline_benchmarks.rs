//! Benchmarks for betalens-pipeline view assembly.
#![allow(missing_docs)]

use betalens_pipeline::{BetaViews, aggregate_universe, parse_csv, partition_sectors};
use betalens_primitives::{FACTOR_COUNT, FactorGroups, SectorWeighting};
use chrono::{Duration, NaiveDate};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rand::Rng;

const SECTORS: [&str; 11] = [
    "Communication Services",
    "Consumer Discretionary",
    "Consumer Staples",
    "Energy",
    "Financials",
    "Health Care",
    "Industrials",
    "Information Technology",
    "Materials",
    "Real Estate",
    "Utilities",
];

fn random_csv(n_days: usize) -> String {
    let mut rng = rand::thread_rng();
    let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap_or_default();

    let header: Vec<String> = (1..=FACTOR_COUNT).map(|i| format!("f{i}")).collect();
    let mut lines = vec![format!("date,sector,sector_weight,{}", header.join(","))];
    for day in 0..n_days {
        let date = start + Duration::days(day as i64);
        for sector in SECTORS {
            let weight = rng.r#gen::<f64>() / SECTORS.len() as f64;
            let values: Vec<String> =
                (0..FACTOR_COUNT).map(|_| format!("{:.4}", rng.r#gen::<f64>() * 2.0 - 1.0)).collect();
            lines.push(format!("{date},{sector},{weight:.4},{}", values.join(",")));
        }
    }
    lines.join("\n")
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_csv");
    group.sample_size(20);

    for n_days in [30, 250, 750] {
        let text = random_csv(n_days);
        group.throughput(Throughput::Elements((n_days * SECTORS.len()) as u64));
        group.bench_with_input(BenchmarkId::new("days", n_days), &text, |b, text| {
            b.iter(|| parse_csv(black_box(text)));
        });
    }

    group.finish();
}

fn bench_aggregation(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregation");
    let groups = FactorGroups::reference();

    for n_days in [250, 750] {
        let rows = parse_csv(&random_csv(n_days));
        group.throughput(Throughput::Elements(rows.len() as u64));
        group.bench_with_input(BenchmarkId::new("universe", n_days), &rows, |b, rows| {
            b.iter(|| aggregate_universe(black_box(rows), &groups));
        });
        group.bench_with_input(BenchmarkId::new("sectors_weighted", n_days), &rows, |b, rows| {
            b.iter(|| partition_sectors(black_box(rows), &groups, SectorWeighting::Weighted));
        });
    }

    group.finish();
}

fn bench_full_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("beta_views");
    group.sample_size(10);

    for n_days in [250, 750] {
        let text = random_csv(n_days);
        group.bench_with_input(BenchmarkId::new("from_csv", n_days), &text, |b, text| {
            b.iter(|| BetaViews::from_csv(black_box(text), FactorGroups::reference()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse, bench_aggregation, bench_full_build);
criterion_main!(benches);
