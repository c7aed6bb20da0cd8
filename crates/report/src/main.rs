//! Times the iterative quicksort on sorted, reverse sorted and random inputs and prints the
//! timings next to `n log n` and `n²` reference curves.

mod measure;
mod output;
mod plot;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use bench::{DEFAULT_SEED, DEFAULT_SIZES, random_sequence, seeded_rng};
use clap::Parser;
use rand::Rng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::measure::{measure_verified, sweep};
use crate::output::{Format, write_sweep};
use crate::plot::plot_sweep;

const SEQUENCE_A: [u64; 8] = [10, 80, 3, 19, 14, 7, 5, 12];

#[derive(Debug, Parser)]
#[command(name = "quicksort-report", version, about)]
struct Args {
    /// Input sizes to sweep, comma separated.
    #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_SIZES)]
    sizes: Vec<usize>,

    /// Seed for every generated sequence.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    #[arg(long, value_enum, default_value_t = Format::Table)]
    format: Format,

    /// Skip the fixed and random sample sequences.
    #[arg(long)]
    skip_demo: bool,

    /// Also draw the sweep as a PNG chart at this path.
    #[arg(long, value_name = "PATH")]
    plot: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("quicksort_report=info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let mut rng = seeded_rng(args.seed);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !args.skip_demo {
        run_demo(&mut out, &mut rng)?;
    }

    info!(sizes = ?args.sizes, seed = args.seed, "sweeping input sizes");
    let rows = sweep(&args.sizes, &mut rng)?;
    write_sweep(&mut out, args.format, &rows).context("failed to write sweep results")?;

    if let Some(path) = &args.plot {
        plot_sweep(&rows, path)?;
        info!(path = %path.display(), "wrote performance chart");
    }
    Ok(())
}

fn run_demo<W: Write, R: Rng + ?Sized>(out: &mut W, rng: &mut R) -> anyhow::Result<()> {
    let a = SEQUENCE_A.to_vec();
    let b = random_sequence(rng, 100, 1_000);
    let c = random_sequence(rng, 1_000, 10_000);

    let demos = [
        ("sequence A", &a, true),
        ("sequence B", &b, false),
        ("sequence C", &c, false),
    ];
    for (label, data, show_values) in demos {
        let timing = measure_verified(label, data)?;
        if show_values {
            writeln!(out, "Original {label}: {data:?}")?;
            writeln!(out, "Sorted {label}:   {:?}", timing.sorted)?;
        }
        writeln!(
            out,
            "{label} ({} integers): time taken {:.6} s, {} comparisons",
            data.len(),
            timing.seconds(),
            timing.stats.comparisons
        )?;
    }
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["quicksort-report"]).unwrap();
        assert_eq!(args.sizes, DEFAULT_SIZES.to_vec());
        assert_eq!(args.seed, 42);
        assert_eq!(args.format, Format::Table);
        assert!(!args.skip_demo);
        assert_eq!(args.plot, None);
    }

    #[test]
    fn plot_path() {
        let args =
            Args::try_parse_from(["quicksort-report", "--plot", "quicksort_performance.png"])
                .unwrap();
        assert_eq!(args.plot, Some(PathBuf::from("quicksort_performance.png")));
    }

    #[test]
    fn custom_sizes_and_format() {
        let args = Args::try_parse_from([
            "quicksort-report",
            "--sizes",
            "8,64",
            "--format",
            "csv",
            "--seed",
            "7",
            "--skip-demo",
        ])
        .unwrap();
        assert_eq!(args.sizes, vec![8, 64]);
        assert_eq!(args.format, Format::Csv);
        assert_eq!(args.seed, 7);
        assert!(args.skip_demo);
    }

    #[test]
    fn rejects_unknown_format() {
        assert!(Args::try_parse_from(["quicksort-report", "--format", "png"]).is_err());
    }

    #[test]
    fn demo_prints_sorted_sequence_a() {
        let mut out = Vec::new();
        run_demo(&mut out, &mut seeded_rng(42)).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Original sequence A: [10, 80, 3, 19, 14, 7, 5, 12]"));
        assert!(text.contains("Sorted sequence A:   [3, 5, 7, 10, 12, 14, 19, 80]"));
        let a_line = text
            .lines()
            .find(|line| line.starts_with("sequence A (8 integers): time taken "))
            .unwrap();
        assert!(a_line.ends_with(" s, 14 comparisons"));
        assert!(text.contains("sequence B (100 integers): time taken "));
        assert!(text.contains("sequence C (1000 integers): time taken "));
        assert!(!text.contains("Original sequence B"));
    }
}
