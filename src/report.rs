//! CSV and SVG output for spot sweeps.
//!
//! Each [`GreekCurve`] is written as a `spot,call,put` table and as a line
//! chart with the strike marked. Kind-symmetric quantities (gamma, vega) plot
//! only the call line since the put line is identical.

use anyhow::{anyhow, Context, Result};
use plotters::element::DashedPathElement;
use plotters::prelude::*;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::sweep::{sweep_all, GreekCurve, SweepConfig};

/// Write the curve as CSV with header `spot,call,put`.
pub fn write_csv(curve: &GreekCurve, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    for point in &curve.points {
        writer.serialize(point)?;
    }
    writer.flush()?;
    Ok(())
}

fn render_error(path: &Path, e: impl std::fmt::Display) -> anyhow::Error {
    anyhow!("Failed to render {}: {}", path.display(), e)
}

/// Render the curve to an SVG line chart.
pub fn render_svg(curve: &GreekCurve, path: impl AsRef<Path>, size: (u32, u32)) -> Result<()> {
    let path = path.as_ref();

    let (x_min, x_max) = match (curve.points.first(), curve.points.last()) {
        (Some(first), Some(last)) if first.spot < last.spot => (first.spot, last.spot),
        _ => return Err(anyhow!("Cannot plot {} curve with fewer than two spots", curve.greek)),
    };
    let (lo, hi) = curve
        .value_range()
        .ok_or_else(|| anyhow!("No finite {} values to plot", curve.greek))?;
    // Flat curves still need a non-empty y range
    let pad = if hi > lo { (hi - lo) * 0.05 } else { lo.abs().max(1.0) * 0.05 };
    let (y_min, y_max) = (lo - pad, hi + pad);

    let root = SVGBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE).map_err(|e| render_error(path, e))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(
            format!(
                "{} vs Stock Price (t = {}, T = {})",
                curve.greek, curve.valuation_time, curve.maturity
            ),
            ("sans-serif", 24),
        )
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(|e| render_error(path, e))?;

    chart
        .configure_mesh()
        .x_desc("Stock Price (S)")
        .y_desc(curve.greek.to_string())
        .draw()
        .map_err(|e| render_error(path, e))?;

    let calls: Vec<(f64, f64)> = curve.points.iter().map(|p| (p.spot, p.call)).collect();
    chart
        .draw_series(std::iter::once(PathElement::new(calls, BLUE.stroke_width(2))))
        .map_err(|e| render_error(path, e))?
        .label("Call")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE.stroke_width(2)));

    if !curve.greek.is_kind_symmetric() {
        let puts: Vec<(f64, f64)> = curve.points.iter().map(|p| (p.spot, p.put)).collect();
        chart
            .draw_series(std::iter::once(DashedPathElement::new(
                puts,
                8,
                5,
                RED.stroke_width(2),
            )))
            .map_err(|e| render_error(path, e))?
            .label("Put")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 8, y)], RED.stroke_width(2)));
    }

    if curve.strike > x_min && curve.strike < x_max {
        let marker = vec![(curve.strike, y_min), (curve.strike, y_max)];
        chart
            .draw_series(std::iter::once(DashedPathElement::new(
                marker,
                2,
                4,
                BLACK.mix(0.5),
            )))
            .map_err(|e| render_error(path, e))?
            .label(format!("Strike (K = {})", curve.strike))
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 4, y)], BLACK.mix(0.5)));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(|e| render_error(path, e))?;

    root.present().map_err(|e| render_error(path, e))?;
    Ok(())
}

/// Sweep every configured quantity and write `<greek>.csv` and `<greek>.svg`
/// into the output directory. Returns the written paths in order.
pub fn write_reports(config: &SweepConfig) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(&config.output_dir).with_context(|| {
        format!(
            "Failed to create output directory {}",
            config.output_dir.display()
        )
    })?;

    let mut written = Vec::with_capacity(config.greeks.len() * 2);
    for curve in sweep_all(config)? {
        let stem = curve.greek.file_stem();

        let csv_path = config.output_dir.join(format!("{}.csv", stem));
        write_csv(&curve, &csv_path)?;
        info!(path = %csv_path.display(), "Saved {} table", curve.greek);
        written.push(csv_path);

        let svg_path = config.output_dir.join(format!("{}.svg", stem));
        render_svg(&curve, &svg_path, (config.chart_width, config.chart_height))?;
        info!(path = %svg_path.display(), "Saved {} chart", curve.greek);
        written.push(svg_path);
    }
    Ok(written)
}
