//! atop text log line matcher.
//!
//! Recognizes the three line shapes the memory report needs:
//!
//! ```text
//! ATOP - myhost  2024/01/01  00:00:00  ...
//! MEM | tot   15.5G | free    1.2G | ...
//! SWP | tot    2.0G | free 2048.0M | ...
//! ```
//!
//! Patterns are anchored at the start of the line and anything after the
//! matched prefix is ignored. Lines that match none of them are skipped.

pub mod assembler;

pub use assembler::{PairingPolicy, RecordAssembler};

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use regex::{Captures, Regex};

use crate::model::{MemoryPair, SizeUnit};

// Host is any non-whitespace run, so `db-01.prod` matches where a `\w+` token would not.
static TIMESTAMP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^ATOP - \S+\s+([0-9]{4}/[0-9]{2}/[0-9]{2})\s+([0-9]{2}:[0-9]{2}:[0-9]{2})")
        .expect("Invalid timestamp regex")
});

static MEM_RE: LazyLock<Regex> = LazyLock::new(|| size_pair_regex("MEM"));

static SWP_RE: LazyLock<Regex> = LazyLock::new(|| size_pair_regex("SWP"));

fn size_pair_regex(label: &str) -> Regex {
    Regex::new(&format!(
        r"^{label} \| tot\s+([0-9.]+)([GM]) \| free\s+([0-9.]+)([GM])"
    ))
    .expect("Invalid size pair regex")
}

/// Fragment extracted from a single recognized line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineMatch {
    /// `ATOP - <host> <date> <time>` header.
    Timestamp(NaiveDateTime),
    /// `MEM` line, values in GiB.
    Memory(MemoryPair),
    /// `SWP` line, values in GiB.
    Swap(MemoryPair),
}

/// Classifies one line. Returns `None` for anything that is not a timestamp,
/// memory or swap line, including lines whose date or numbers don't parse.
pub fn match_line(line: &str) -> Option<LineMatch> {
    if let Some(caps) = TIMESTAMP_RE.captures(line) {
        return parse_timestamp(&caps[1], &caps[2]).map(LineMatch::Timestamp);
    }
    if let Some(caps) = MEM_RE.captures(line) {
        return parse_size_pair(&caps).map(LineMatch::Memory);
    }
    if let Some(caps) = SWP_RE.captures(line) {
        return parse_size_pair(&caps).map(LineMatch::Swap);
    }
    None
}

fn parse_timestamp(date: &str, time: &str) -> Option<NaiveDateTime> {
    let date = NaiveDate::parse_from_str(date, "%Y/%m/%d").ok()?;
    let time = NaiveTime::parse_from_str(time, "%H:%M:%S").ok()?;
    Some(date.and_time(time))
}

fn parse_size_pair(caps: &Captures<'_>) -> Option<MemoryPair> {
    Some(MemoryPair {
        total_gb: parse_size(&caps[1], &caps[2])?,
        free_gb: parse_size(&caps[3], &caps[4])?,
    })
}

/// `"2048"` + `"M"` -> `2.0`
fn parse_size(number: &str, suffix: &str) -> Option<f64> {
    let value: f64 = number.parse().ok().filter(|v: &f64| v.is_finite())?;
    Some(SizeUnit::from_suffix(suffix)?.to_gib(value))
}
