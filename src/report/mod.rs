//! Report generation: CSV table, static PNG chart, optional HTML chart.
//!
//! Nothing is written for an empty sample set.

mod chart;
mod csv;
mod html;

pub use chart::render_png;
pub use csv::{CSV_HEADER, write_csv, write_rows};
pub use html::{build_html, render_html};

use std::io;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::ReportError;
use crate::model::Sample;

/// Output prefix used when none is given.
pub const DEFAULT_OUTPUT_PREFIX: &str = "memory_report";

/// Title shared by both charts.
pub const CHART_TITLE: &str = "Memory/Swap Usage Over Time";

/// One plotted series.
pub struct Series {
    /// Legend label.
    pub label: &'static str,
    /// Short name used in hover text.
    pub hover_name: &'static str,
    pub rgb: (u8, u8, u8),
    pub value: fn(&Sample) -> f64,
}

/// The four series, in legend order.
pub static SERIES: [Series; 4] = [
    Series {
        label: "MEM Total (GB)",
        hover_name: "MEM Total",
        rgb: (31, 119, 180),
        value: mem_total,
    },
    Series {
        label: "MEM Free (GB)",
        hover_name: "MEM Free",
        rgb: (255, 127, 14),
        value: mem_free,
    },
    Series {
        label: "SWAP Total (GB)",
        hover_name: "SWAP Total",
        rgb: (44, 160, 44),
        value: swap_total,
    },
    Series {
        label: "SWAP Free (GB)",
        hover_name: "SWAP Free",
        rgb: (214, 39, 40),
        value: swap_free,
    },
];

fn mem_total(s: &Sample) -> f64 {
    s.mem_total_gb
}

fn mem_free(s: &Sample) -> f64 {
    s.mem_free_gb
}

fn swap_total(s: &Sample) -> f64 {
    s.swap_total_gb
}

fn swap_free(s: &Sample) -> f64 {
    s.swap_free_gb
}

/// Where and what to write.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Path prefix; suffixes are appended verbatim.
    pub prefix: String,
    /// Also write the interactive HTML chart.
    pub html: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_OUTPUT_PREFIX.to_string(),
            html: false,
        }
    }
}

impl ReportOptions {
    pub fn csv_path(&self) -> PathBuf {
        PathBuf::from(format!("{}.csv", self.prefix))
    }

    pub fn png_path(&self) -> PathBuf {
        PathBuf::from(format!("{}_memory_swap.png", self.prefix))
    }

    pub fn html_path(&self) -> PathBuf {
        PathBuf::from(format!("{}_memory_swap.html", self.prefix))
    }
}

/// Files written by [`generate_report`].
#[derive(Debug, Clone, PartialEq)]
pub struct ReportPaths {
    pub csv: PathBuf,
    pub png: PathBuf,
    pub html: Option<PathBuf>,
}

/// Writes all report artifacts for `samples`.
///
/// Returns `Ok(None)` without touching the filesystem when `samples` is empty.
pub fn generate_report(
    samples: &[Sample],
    options: &ReportOptions,
) -> Result<Option<ReportPaths>, ReportError> {
    if samples.is_empty() {
        info!("No valid data found, no report written");
        return Ok(None);
    }

    let csv = options.csv_path();
    write_csv(samples, &csv)?;
    info!("Saved CSV: {}", csv.display());

    let png = options.png_path();
    render_png(samples, &png)?;
    info!("Saved chart: {}", png.display());

    let html = if options.html {
        let path = options.html_path();
        render_html(samples, &path)?;
        info!("Saved interactive report: {}", path.display());
        Some(path)
    } else {
        None
    };

    Ok(Some(ReportPaths { csv, png, html }))
}

fn io_error(path: &Path) -> impl Fn(io::Error) -> ReportError + '_ {
    move |source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    }
}
