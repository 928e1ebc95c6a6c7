//! Pairs timestamp, memory and swap fragments into complete samples.

use chrono::NaiveDateTime;

use super::{LineMatch, match_line};
use crate::model::{MemoryPair, Sample};

/// What happens to the stored memory fragment once it has been used.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PairingPolicy {
    /// Keep the memory fragment after a sample is emitted. An extra `SWP`
    /// line after a complete block reuses the previous `MEM` values.
    #[default]
    Reuse,
    /// Clear the memory fragment after each sample and on every new
    /// timestamp, so each `MEM` line pairs with at most one `SWP` line.
    Strict,
}

/// Per-file parse state.
///
/// Create one per file; state never crosses file boundaries.
#[derive(Debug, Default)]
pub struct RecordAssembler {
    policy: PairingPolicy,
    last_timestamp: Option<NaiveDateTime>,
    last_mem: Option<MemoryPair>,
}

impl RecordAssembler {
    pub fn new(policy: PairingPolicy) -> Self {
        Self {
            policy,
            last_timestamp: None,
            last_mem: None,
        }
    }

    /// Matches a raw line and feeds the result, if any.
    pub fn push_line(&mut self, line: &str) -> Option<Sample> {
        self.feed(match_line(line)?)
    }

    /// Advances the state machine with one fragment.
    ///
    /// Returns a sample only for a swap fragment that arrives after both a
    /// timestamp and a memory fragment; a swap without them is dropped.
    pub fn feed(&mut self, fragment: LineMatch) -> Option<Sample> {
        match fragment {
            LineMatch::Timestamp(ts) => {
                self.last_timestamp = Some(ts);
                if self.policy == PairingPolicy::Strict {
                    self.last_mem = None;
                }
                None
            }
            LineMatch::Memory(mem) => {
                if self.last_timestamp.is_some() {
                    self.last_mem = Some(mem);
                }
                None
            }
            LineMatch::Swap(swap) => {
                let (Some(ts), Some(mem)) = (self.last_timestamp, self.last_mem) else {
                    return None;
                };
                if self.policy == PairingPolicy::Strict {
                    self.last_mem = None;
                }
                Some(Sample::new(ts, mem, swap))
            }
        }
    }
}
