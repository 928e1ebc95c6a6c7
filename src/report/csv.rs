use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use super::io_error;
use crate::error::ReportError;
use crate::fmt::{format_gib, format_timestamp};
use crate::model::Sample;

/// Column order of the CSV table.
pub const CSV_HEADER: &str = "timestamp,mem_total_gb,mem_free_gb,swap_total_gb,swap_free_gb";

/// Writes the sample table to `path`, replacing any existing file.
pub fn write_csv(samples: &[Sample], path: &Path) -> Result<(), ReportError> {
    let file = File::create(path).map_err(io_error(path))?;
    write_rows(BufWriter::new(file), samples).map_err(io_error(path))
}

/// Writes header plus one row per sample. Every field is numeric or a
/// fixed-layout timestamp, so no quoting is needed.
pub fn write_rows<W: Write>(mut out: W, samples: &[Sample]) -> io::Result<()> {
    writeln!(out, "{CSV_HEADER}")?;
    for s in samples {
        writeln!(
            out,
            "{},{},{},{},{}",
            format_timestamp(&s.timestamp),
            format_gib(s.mem_total_gb),
            format_gib(s.mem_free_gb),
            format_gib(s.swap_total_gb),
            format_gib(s.swap_free_gb),
        )?;
    }
    out.flush()
}
