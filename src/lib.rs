//! atopmem - memory and swap history from atop text logs.
//!
//! Parses `ATOP`/`MEM`/`SWP` lines out of one log file or a directory of
//! logs and writes the resulting time series as:
//! - `<prefix>.csv` - one row per sample
//! - `<prefix>_memory_swap.png` - static line chart
//! - `<prefix>_memory_swap.html` - interactive chart (optional)

pub mod error;
pub mod fmt;
pub mod model;
pub mod parser;
pub mod reader;
pub mod report;

pub use error::{ParseError, ReportError};
pub use model::Sample;
pub use parser::PairingPolicy;
pub use reader::{DirectoryScan, parse_directory, parse_file};
pub use report::{ReportOptions, ReportPaths, generate_report};
