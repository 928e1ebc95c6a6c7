//! Interactive HTML chart backed by plotly.js.
//!
//! The page is a single file; the data is embedded as JSON and the plotting
//! library is loaded from its CDN.

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::json;

use super::{CHART_TITLE, SERIES, io_error};
use crate::error::ReportError;
use crate::fmt::format_timestamp;
use crate::model::Sample;

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

#[derive(Serialize)]
struct Trace<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    mode: &'static str,
    name: &'static str,
    x: &'a [String],
    y: Vec<f64>,
    line: Line,
    hovertemplate: String,
}

#[derive(Serialize)]
struct Line {
    color: String,
}

/// Writes the interactive chart page to `path`.
pub fn render_html(samples: &[Sample], path: &Path) -> Result<(), ReportError> {
    let page = build_html(samples).map_err(|e| ReportError::Chart {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    fs::write(path, page).map_err(io_error(path))
}

/// Builds the full HTML document.
///
/// Hovering shows every series at the pointer's x position with values
/// rounded to two decimals.
pub fn build_html(samples: &[Sample]) -> serde_json::Result<String> {
    let x: Vec<String> = samples
        .iter()
        .map(|s| format_timestamp(&s.timestamp))
        .collect();

    let traces: Vec<Trace<'_>> = SERIES
        .iter()
        .map(|series| {
            let (r, g, b) = series.rgb;
            Trace {
                kind: "scatter",
                mode: "lines",
                name: series.label,
                x: &x,
                y: samples.iter().map(series.value).collect(),
                line: Line {
                    color: format!("rgb({r}, {g}, {b})"),
                },
                hovertemplate: format!(
                    "{}: %{{y:.2f}} GB<extra></extra>",
                    series.hover_name
                ),
            }
        })
        .collect();

    let layout = json!({
        "title": { "text": format!("{CHART_TITLE} (Interactive)") },
        "xaxis": { "title": { "text": "Time" } },
        "yaxis": { "title": { "text": "Size (GB)" } },
        "hovermode": "x unified",
        "showlegend": true,
    });

    let data = script_safe(&serde_json::to_string(&traces)?);
    let layout = script_safe(&serde_json::to_string(&layout)?);

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>{CHART_TITLE}</title>
  <script src="{PLOTLY_CDN}"></script>
  <style>
    body {{ font-family: sans-serif; margin: 20px; }}
    #chart {{ width: 100%; height: 80vh; }}
  </style>
</head>
<body>
  <div id="chart"></div>
  <script>
    Plotly.newPlot("chart", {data}, {layout}, {{ responsive: true }});
  </script>
</body>
</html>
"#
    ))
}

/// Keeps embedded JSON from closing the surrounding `<script>` element.
fn script_safe(json: &str) -> String {
    json.replace("</", "<\\/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MemoryPair;
    use chrono::NaiveDate;

    fn samples() -> Vec<Sample> {
        (0..3)
            .map(|i| {
                Sample::new(
                    NaiveDate::from_ymd_opt(2024, 1, 1)
                        .unwrap()
                        .and_hms_opt(0, i * 10, 0)
                        .unwrap(),
                    MemoryPair {
                        total_gb: 16.0,
                        free_gb: 8.0 - i as f64,
                    },
                    MemoryPair {
                        total_gb: 2.0,
                        free_gb: 1.0,
                    },
                )
            })
            .collect()
    }

    /// First argument after the element id in the `Plotly.newPlot` call.
    fn extract_json_arg(page: &str) -> serde_json::Value {
        const CALL: &str = "Plotly.newPlot(\"chart\", ";
        let start = page.find(CALL).unwrap() + CALL.len();
        serde_json::Deserializer::from_str(&page[start..])
            .into_iter::<serde_json::Value>()
            .next()
            .unwrap()
            .unwrap()
    }

    #[test]
    fn test_page_has_four_series() {
        let page = build_html(&samples()).unwrap();
        let data = extract_json_arg(&page);
        let traces = data.as_array().unwrap();
        assert_eq!(traces.len(), 4);

        let names: Vec<&str> = traces
            .iter()
            .map(|t| t["name"].as_str().unwrap())
            .collect();
        assert_eq!(
            names,
            vec!["MEM Total (GB)", "MEM Free (GB)", "SWAP Total (GB)", "SWAP Free (GB)"]
        );

        let mem_free = &traces[1];
        assert_eq!(mem_free["y"], json!([8.0, 7.0, 6.0]));
        assert_eq!(
            mem_free["x"],
            json!(["2024-01-01 00:00:00", "2024-01-01 00:10:00", "2024-01-01 00:20:00"])
        );
        assert_eq!(
            mem_free["hovertemplate"],
            "MEM Free: %{y:.2f} GB<extra></extra>"
        );
    }

    #[test]
    fn test_unified_hover_mode() {
        let page = build_html(&samples()).unwrap();
        assert!(page.contains(r#""hovermode":"x unified""#));
        assert!(page.contains(PLOTLY_CDN));
    }

    #[test]
    fn test_script_safe() {
        assert_eq!(script_safe(r#"["</script>"]"#), r#"["<\/script>"]"#);
    }

    #[test]
    fn test_render_html_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("r_memory_swap.html");
        render_html(&samples(), &path).unwrap();
        let page = fs::read_to_string(&path).unwrap();
        assert!(page.starts_with("<!DOCTYPE html>"));
    }
}
