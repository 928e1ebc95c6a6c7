//! File and directory drivers for the line parser.

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::ParseError;
use crate::model::{Sample, sort_by_timestamp};
use crate::parser::{PairingPolicy, RecordAssembler};

/// Result of scanning a directory of atop logs.
#[derive(Debug, Default)]
pub struct DirectoryScan {
    /// All samples from all files, sorted by timestamp.
    pub samples: Vec<Sample>,
    /// Files that produced at least one sample.
    pub files_parsed: usize,
    /// Files that could not be read.
    pub files_failed: usize,
    /// Files that were read but held no complete sample.
    pub files_empty: usize,
}

/// Runs the parser over any line source, returning samples in encounter order.
///
/// Lines are decoded lossily; bytes that are not valid UTF-8 (process names,
/// command lines) never fail the read.
pub fn parse_reader<R: BufRead>(mut reader: R, policy: PairingPolicy) -> io::Result<Vec<Sample>> {
    let mut assembler = RecordAssembler::new(policy);
    let mut samples = Vec::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        let line = line.trim_end_matches(['\n', '\r']);
        if let Some(sample) = assembler.push_line(line) {
            samples.push(sample);
        }
    }

    Ok(samples)
}

/// Parses one atop log file.
///
/// An I/O error part-way through discards the whole file's result.
pub fn parse_file(path: &Path, policy: PairingPolicy) -> Result<Vec<Sample>, ParseError> {
    let file = File::open(path).map_err(|source| ParseError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    parse_reader(BufReader::new(file), policy).map_err(|source| ParseError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses every regular file directly inside `dir` and merges the results.
///
/// Files are visited in name order. A file that fails to read is logged and
/// skipped. The merged samples are stable-sorted by timestamp.
pub fn parse_directory(dir: &Path, policy: PairingPolicy) -> Result<DirectoryScan, ParseError> {
    if !dir.is_dir() {
        return Err(ParseError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    let paths = list_entries(dir).map_err(|source| ParseError::Open {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut scan = DirectoryScan::default();

    if paths.is_empty() {
        warn!("No files found in directory {}", dir.display());
        return Ok(scan);
    }

    for path in &paths {
        if path.is_dir() {
            debug!("Skipping subdirectory {}", path.display());
            continue;
        }

        let name = file_name(path);
        match parse_file(path, policy) {
            Ok(samples) if samples.is_empty() => {
                info!("No valid data in {}", name);
                scan.files_empty += 1;
            }
            Ok(samples) => {
                info!("Parsed {}: {} records", name, samples.len());
                scan.files_parsed += 1;
                scan.samples.extend(samples);
            }
            Err(e) => {
                warn!("Skipping {}: {}", name, e);
                scan.files_failed += 1;
            }
        }
    }

    sort_by_timestamp(&mut scan.samples);

    if !scan.samples.is_empty() {
        info!(
            "Parsed {} records from {} files",
            scan.samples.len(),
            scan.files_parsed
        );
    }

    Ok(scan)
}

fn list_entries(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir)? {
        paths.push(entry?.path());
    }
    paths.sort();
    Ok(paths)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
