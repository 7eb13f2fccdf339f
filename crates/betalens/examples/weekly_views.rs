//! Example: Weekly Beta Views
//!
//! Builds the universe and sector views from a beta CSV and prints:
//! 1. The available sectors and the latest weekly universe rows
//! 2. Per-group statistics over the last year
//! 3. The largest factor moves over the trailing four weeks
//! 4. A CSV export and a polars DataFrame of one sector view
//!
//! Run with: `cargo run --example weekly_views -- path/to/betas.csv`
//!
//! Without a path a synthetic two-year file is generated.

use betalens::{
    pipeline::{BetaViews, export_filename, series_to_frame},
    primitives::{
        DateWindow, FACTOR_COUNT, FactorGroups, RelativePreset, SectorWeighting, ViewSelection,
        today,
    },
    utils::RankerConfig,
};
use chrono::Duration;
use rand::Rng;
use tracing_subscriber::EnvFilter;

const SECTORS: &[(&str, f64)] = &[
    ("Information Technology", 0.30),
    ("Financials", 0.25),
    ("Health Care", 0.20),
    ("Energy", 0.15),
    ("Utilities", 0.10),
];

fn synthetic_csv() -> String {
    let mut rng = rand::thread_rng();
    let end = today();
    let start = end - Duration::days(730);

    let header: Vec<String> = (1..=FACTOR_COUNT).map(|i| format!("beta_{i}")).collect();
    let mut lines = vec![format!("date,sector,sector_weight,{}", header.join(","))];

    let mut levels: Vec<Vec<f64>> =
        SECTORS.iter().map(|_| (0..FACTOR_COUNT).map(|_| rng.gen_range(-1.0..1.0)).collect()).collect();

    let mut date = start;
    while date <= end {
        for ((sector, weight), level) in SECTORS.iter().zip(levels.iter_mut()) {
            for value in level.iter_mut() {
                *value += rng.gen_range(-0.05..0.05);
            }
            let values: Vec<String> = level.iter().map(|v| format!("{v:.5}")).collect();
            lines.push(format!("{date},{sector},{weight},{}", values.join(",")));
        }
        date += Duration::days(1);
    }

    lines.join("\n")
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== Weekly Beta Views ===\n");

    let text = match std::env::args().nth(1) {
        Some(path) => {
            println!("Reading {path}\n");
            std::fs::read_to_string(path)?
        }
        None => {
            println!("No file given, generating synthetic data\n");
            synthetic_csv()
        }
    };

    let views = BetaViews::from_csv(&text, FactorGroups::reference())?;
    let groups = views.groups();
    let today = today();

    // =========================================================================
    // UNIVERSE
    // =========================================================================

    println!("Sectors: {}\n", views.sectors().join(", "));

    let universe = views.series(&ViewSelection::Universe);
    println!("Latest weekly universe rows ({} weeks total):", universe.len());
    print!("{:<12}", "Week");
    for name in groups.names() {
        print!("{name:>13}");
    }
    println!();
    for row in universe.iter().rev().take(5).rev() {
        print!("{:<12}", row.date.to_string());
        for value in &row.values {
            print!("{value:>13.4}");
        }
        println!();
    }

    // =========================================================================
    // STATISTICS
    // =========================================================================

    let year = DateWindow::Preset(RelativePreset::OneYear);
    println!("\nGroup statistics over the last year:");
    println!("{:<14}{:>10}{:>10}{:>10}{:>10}", "Group", "Mean", "StdDev", "Min", "Max");
    for stats in views.statistics(&ViewSelection::Universe, &year, today) {
        let s = stats.summary;
        println!(
            "{:<14}{:>10.4}{:>10.4}{:>10.4}{:>10.4}",
            stats.name, s.mean, s.std_dev, s.min, s.max
        );
    }

    // =========================================================================
    // LARGEST MOVES
    // =========================================================================

    println!("\nLargest factor moves, trailing four weeks:");
    let changes = views.top_changes(&ViewSelection::Universe, &DateWindow::All, &RankerConfig::default());
    if changes.is_empty() {
        println!("  not enough data");
    }
    for change in changes {
        println!(
            "  factor {:>2} ({:<12}) {:>+9.2}%  {:.4} -> {:.4}  ({} to {})",
            change.index,
            change.category,
            change.pct_change,
            change.previous_value,
            change.current_value,
            change.previous_date,
            change.current_date,
        );
    }

    // =========================================================================
    // EXPORT
    // =========================================================================

    let Some(sector) = views.sectors().first().map(|s| s.to_string()) else {
        return Ok(());
    };
    let view = ViewSelection::sector(sector, SectorWeighting::Unweighted);
    let window = DateWindow::Preset(RelativePreset::SixMonths);
    let series = views.filtered(&view, &window, today);
    let selected = ["Value", "Growth", "Macro"];

    match views.export(&view, &window, today, &selected) {
        Ok(csv) => {
            println!("\n{}:", export_filename(&selected, &window, &view, today));
            for line in csv.lines().take(4) {
                println!("  {line}");
            }
        }
        Err(err) => println!("\nexport skipped: {err}"),
    }

    println!("\n{}", series_to_frame(&series, groups)?);

    Ok(())
}
