//! atopmem - memory/swap report generator for atop text logs.
//!
//! Usage:
//!   atopmem -f /var/log/atop/atop_20240101.txt
//!   atopmem -d /var/log/atop -o host1 --html

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgGroup, Parser};
use tracing::{Level, error, info};
use tracing_subscriber::EnvFilter;

use atopmem::report::DEFAULT_OUTPUT_PREFIX;
use atopmem::{PairingPolicy, ReportOptions, generate_report, parse_directory, parse_file};

/// Parse atop logs and generate a memory usage report.
#[derive(Parser)]
#[command(name = "atopmem", about = "Memory/swap report from atop text logs", version)]
#[command(group(ArgGroup::new("input").required(true).args(["log_file", "dir"])))]
struct Args {
    /// Path to a single atop log file.
    #[arg(short = 'f', long = "log-file", visible_alias = "log_file", value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Directory containing several atop log files.
    #[arg(short, long, value_name = "PATH")]
    dir: Option<PathBuf>,

    /// Output file prefix.
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PREFIX, value_name = "PREFIX")]
    output: String,

    /// Also write an interactive HTML chart with per-timestamp hover values.
    #[arg(long)]
    html: bool,

    /// Pair each MEM line with at most one SWP line.
    /// By default a stray SWP line reuses the previous MEM values.
    #[arg(long)]
    strict_pairing: bool,

    /// Increase logging verbosity (-v for debug, -vv for trace). Default is info level.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode - only show errors.
    #[arg(short, long)]
    quiet: bool,
}

/// Initializes the tracing subscriber with the appropriate log level.
fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = format!("atopmem={}", level).parse() {
        filter = filter.add_directive(directive);
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose, args.quiet);

    let policy = if args.strict_pairing {
        PairingPolicy::Strict
    } else {
        PairingPolicy::Reuse
    };

    let parsed = if let Some(path) = &args.log_file {
        info!("Parsing log file: {}", path.display());
        parse_file(path, policy)
    } else if let Some(dir) = &args.dir {
        info!("Parsing all log files in directory: {}", dir.display());
        parse_directory(dir, policy).map(|scan| scan.samples)
    } else {
        error!("Either --log-file or --dir is required");
        return ExitCode::FAILURE;
    };

    let samples = match parsed {
        Ok(samples) => samples,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    if samples.is_empty() {
        info!("No valid memory data found");
        return ExitCode::SUCCESS;
    }

    let options = ReportOptions {
        prefix: args.output,
        html: args.html,
    };

    match generate_report(&samples, &options) {
        Ok(_) => {
            info!("Report complete: {} samples", samples.len());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Failed to generate report: {}", e);
            ExitCode::FAILURE
        }
    }
}
