//! # ghazal-lines
//!
//! Count the couplets of every ghazal in the corpus and report summary
//! statistics.
//!
//! The corpus layout is fixed: two directories, `hafiz-1` and
//! `hafiz-2`, each holding one ghazal per `.txt` file, processed in
//! numeric filename order. The tool takes no flags and reads no
//! configuration; it prints one progress line per file, then a
//! statistics section and a couplet-count distribution:
//!
//! ```text
//! 1.txt: 7 lines
//! 2.txt: 9 lines
//! ...
//!
//! ==================================================
//! STATISTICS
//! ==================================================
//! Total ghazals: 495
//! Mean lines per ghazal: 8.73
//! ...
//! ```
//!
//! A file with an odd number of hemistichs aborts the whole run: a
//! wrong corpus is worse than no answer.

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use console::Style;
use ghazallib::{count_file, ghazal_files, Distribution, Measurement, Summary};

/// Corpus directories, scanned in this order.
const CORPUS_DIRS: [&str; 2] = ["hafiz-1", "hafiz-2"];

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let mut measurements = Vec::new();

    for dir in CORPUS_DIRS {
        for file in ghazal_files(Path::new(dir))? {
            let count = count_file(&file)?;

            if count.exceeds_soft_limit() {
                println!(
                    "File {} has a large number of hemistichs: {}",
                    file.display(),
                    count.hemistichs
                );
            }

            let name = file
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| file.display().to_string());
            println!("{}: {} lines", name, count.couplets);

            measurements.push(Measurement::new(name, count.couplets as u64));
        }
    }

    // Nothing measured, nothing to report
    if measurements.is_empty() {
        return Ok(());
    }

    let values: Vec<u64> = measurements.iter().map(|m| m.couplets).collect();
    let summary = Summary::from_values(&values)?;
    let distribution = Distribution::from_values(&values);

    print_statistics(&summary, &distribution);

    Ok(())
}

/// Print the banner-delimited statistics section and the distribution.
fn print_statistics(summary: &Summary, distribution: &Distribution) {
    let heading = Style::new().bold();
    let banner = "=".repeat(50);

    println!();
    println!("{}", heading.apply_to(&banner));
    println!("{}", heading.apply_to("STATISTICS"));
    println!("{}", heading.apply_to(&banner));

    println!("Total ghazals: {}", summary.count);
    println!("Mean lines per ghazal: {:.2}", summary.mean);
    println!("Median lines per ghazal: {:.2}", summary.median);
    println!("Min lines: {}", summary.min);
    println!("Max lines: {}", summary.max);
    println!("Standard deviation: {:.2}", summary.stdev);

    println!();
    println!("{}", heading.apply_to("Distribution:"));
    for (couplets, ghazals) in distribution.iter() {
        println!("  {couplets} lines: {ghazals} ghazals");
    }
}
