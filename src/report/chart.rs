//! Static PNG line chart.

use std::error::Error;
use std::path::Path;

use chrono::{NaiveDateTime, TimeDelta};
use plotters::prelude::*;

use super::{CHART_TITLE, SERIES};
use crate::error::ReportError;
use crate::fmt::format_tick;
use crate::model::Sample;

const CHART_SIZE: (u32, u32) = (1200, 600);

/// Renders the four memory/swap series against time into `path`.
///
/// The x axis is seconds since the earliest sample; tick labels are converted
/// back to wall-clock time.
pub fn render_png(samples: &[Sample], path: &Path) -> Result<(), ReportError> {
    draw(samples, path).map_err(|e| ReportError::Chart {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

fn draw(samples: &[Sample], path: &Path) -> Result<(), Box<dyn Error>> {
    let Some(base) = samples.iter().map(|s| s.timestamp).min() else {
        return Err("no samples to plot".into());
    };

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(CHART_TITLE, ("sans-serif", 24))
        .margin(16)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..x_upper_bound(samples, base), 0.0..y_upper_bound(samples))?;

    chart
        .configure_mesh()
        .x_labels(10)
        .x_label_formatter(&|secs| tick_label(base, *secs))
        .x_desc("Time")
        .y_desc("Size (GB)")
        .draw()?;

    for series in &SERIES {
        let (r, g, b) = series.rgb;
        let color = RGBColor(r, g, b);
        chart
            .draw_series(LineSeries::new(
                samples
                    .iter()
                    .map(|s| (offset_secs(base, s.timestamp), (series.value)(s))),
                color.stroke_width(2),
            ))?
            .label(series.label)
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 25, y)], color.stroke_width(2))
            });
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

fn offset_secs(base: NaiveDateTime, ts: NaiveDateTime) -> f64 {
    (ts - base).num_seconds() as f64
}

/// Right edge of the time axis; a single instant still gets a one-second span.
fn x_upper_bound(samples: &[Sample], base: NaiveDateTime) -> f64 {
    samples
        .iter()
        .map(|s| offset_secs(base, s.timestamp))
        .fold(0.0, f64::max)
        .max(1.0)
}

/// Top of the value axis with 10% headroom, never below 1 GiB.
fn y_upper_bound(samples: &[Sample]) -> f64 {
    let peak = samples
        .iter()
        .flat_map(|s| SERIES.iter().map(move |series| (series.value)(s)))
        .fold(0.0, f64::max);
    (peak * 1.1).max(1.0)
}

fn tick_label(base: NaiveDateTime, secs: f64) -> String {
    TimeDelta::try_seconds(secs.round() as i64)
        .and_then(|delta| base.checked_add_signed(delta))
        .map(|ts| format_tick(&ts))
        .unwrap_or_default()
}
