use std::io::{self, Write};

use bench::{n_log_n_reference, quadratic_reference};
use clap::ValueEnum;

use crate::measure::SweepRow;

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum Format {
    Table,
    Csv,
}

/// Writes the sweep with the `n log n` and `n²` reference curves alongside each row.
pub fn write_sweep<W: Write>(out: &mut W, format: Format, rows: &[SweepRow]) -> io::Result<()> {
    match format {
        Format::Table => {
            writeln!(
                out,
                "{:>6}  {:>10}  {:>10}  {:>10}  {:>10}  {:>10}",
                "size", "best_s", "worst_s", "average_s", "n_log_n", "n_squared"
            )?;
            for row in rows {
                writeln!(
                    out,
                    "{:>6}  {:>10.6}  {:>10.6}  {:>10.6}  {:>10.6}  {:>10.6}",
                    row.size,
                    row.best,
                    row.worst,
                    row.average,
                    n_log_n_reference(row.size),
                    quadratic_reference(row.size),
                )?;
            }
        }
        Format::Csv => {
            writeln!(out, "size,best_s,worst_s,average_s,n_log_n_ref,n_squared_ref")?;
            for row in rows {
                writeln!(
                    out,
                    "{},{:.9},{:.9},{:.9},{:.9},{:.9}",
                    row.size,
                    row.best,
                    row.worst,
                    row.average,
                    n_log_n_reference(row.size),
                    quadratic_reference(row.size),
                )?;
            }
        }
    }
    Ok(())
}
