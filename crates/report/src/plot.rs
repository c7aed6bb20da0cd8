use std::path::Path;

use anyhow::anyhow;
use bench::{n_log_n_reference, quadratic_reference};
use plotters::prelude::*;

use crate::measure::SweepRow;

const GREY: RGBColor = RGBColor(128, 128, 128);

/// Draws best, average and worst timings against input size, with the `n log n` and `n²`
/// reference curves, into a PNG at `path`.
pub fn plot_sweep(rows: &[SweepRow], path: &Path) -> anyhow::Result<()> {
    render(rows, path).map_err(|e| anyhow!("failed to plot {}: {e}", path.display()))
}

fn render(rows: &[SweepRow], path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new(path, (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let points = |value: fn(&SweepRow) -> f64| -> Vec<(f64, f64)> {
        rows.iter().map(|row| (row.size as f64, value(row))).collect()
    };
    let series: [(&str, RGBColor, Vec<(f64, f64)>); 5] = [
        ("Best Case", GREEN, points(|r| r.best)),
        ("Average Case", BLUE, points(|r| r.average)),
        ("Worst Case", RED, points(|r| r.worst)),
        ("O(n log n)", BLACK, points(|r| n_log_n_reference(r.size))),
        ("O(n²)", GREY, points(|r| quadratic_reference(r.size))),
    ];

    let x_max = rows.iter().map(|row| row.size).max().unwrap_or(0).max(1) as f64;
    let y_max = series
        .iter()
        .flat_map(|(_, _, pts)| pts.iter().map(|&(_, y)| y))
        .fold(0.0, f64::max);
    let y_max = if y_max > 0.0 { y_max * 1.05 } else { 1.0 };

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Quicksort Algorithm Performance Analysis",
            ("sans-serif", 30).into_font(),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d(0f64..x_max, 0f64..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Input Size (n)")
        .y_desc("Time (seconds)")
        .draw()?;

    for (label, color, pts) in series {
        chart
            .draw_series(LineSeries::new(pts, &color))?
            .label(label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;
    root.present()?;
    Ok(())
}
