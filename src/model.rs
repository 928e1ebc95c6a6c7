//! Data types shared by the parser and the report generator.

use chrono::NaiveDateTime;

/// Mebibytes per gibibyte.
pub const MIB_PER_GIB: f64 = 1024.0;

/// Size unit suffix as printed by atop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeUnit {
    /// `M`: mebibytes.
    Mebi,
    /// `G`: gibibytes.
    Gibi,
}

impl SizeUnit {
    /// Maps the single-letter suffix to a unit.
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "M" => Some(SizeUnit::Mebi),
            "G" => Some(SizeUnit::Gibi),
            _ => None,
        }
    }

    /// Converts a value in this unit to GiB.
    pub fn to_gib(self, value: f64) -> f64 {
        match self {
            SizeUnit::Mebi => value / MIB_PER_GIB,
            SizeUnit::Gibi => value,
        }
    }
}

/// Total/free pair from a `MEM` or `SWP` line, already in GiB.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MemoryPair {
    pub total_gb: f64,
    pub free_gb: f64,
}

/// One fully assembled output row.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub timestamp: NaiveDateTime,
    pub mem_total_gb: f64,
    pub mem_free_gb: f64,
    pub swap_total_gb: f64,
    pub swap_free_gb: f64,
}

impl Sample {
    /// Combines a timestamp with its memory and swap fragments.
    pub fn new(timestamp: NaiveDateTime, mem: MemoryPair, swap: MemoryPair) -> Self {
        Self {
            timestamp,
            mem_total_gb: mem.total_gb,
            mem_free_gb: mem.free_gb,
            swap_total_gb: swap.total_gb,
            swap_free_gb: swap.free_gb,
        }
    }
}

/// Stable sort by timestamp; equal timestamps keep their relative order.
pub fn sort_by_timestamp(samples: &mut [Sample]) {
    samples.sort_by_key(|s| s.timestamp);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts(h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_unit_suffix() {
        assert_eq!(SizeUnit::from_suffix("M"), Some(SizeUnit::Mebi));
        assert_eq!(SizeUnit::from_suffix("G"), Some(SizeUnit::Gibi));
        assert_eq!(SizeUnit::from_suffix("K"), None);
        assert_eq!(SizeUnit::from_suffix("g"), None);
    }

    #[test]
    fn test_mebi_normalizes_to_gibi() {
        assert_eq!(SizeUnit::Mebi.to_gib(2048.0), 2.0);
        assert_eq!(SizeUnit::Gibi.to_gib(2.0), 2.0);
        let m = SizeUnit::Mebi.to_gib(1500.0);
        assert!((m - 1500.0 / 1024.0).abs() < 1e-12);
    }

    #[test]
    fn test_sort_is_stable() {
        let pair = |v: f64| MemoryPair {
            total_gb: v,
            free_gb: v,
        };
        let mut samples = vec![
            Sample::new(ts(2), pair(1.0), pair(1.0)),
            Sample::new(ts(1), pair(2.0), pair(2.0)),
            Sample::new(ts(2), pair(3.0), pair(3.0)),
            Sample::new(ts(0), pair(4.0), pair(4.0)),
        ];
        sort_by_timestamp(&mut samples);

        let order: Vec<f64> = samples.iter().map(|s| s.mem_total_gb).collect();
        assert_eq!(order, vec![4.0, 2.0, 1.0, 3.0]);
    }
}
