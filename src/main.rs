//! CLI entry point for foldersize

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use foldersize::{DetailLevel, OutputConfig, OutputFormat, ScanConfig, SizeScale, report_folders};
use termcolor::{ColorChoice, StandardStream};
use tracing_subscriber::EnvFilter;

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

/// Units for formatted sizes
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum Units {
    /// Kilobytes, megabytes, etc., whichever reads best
    #[default]
    Auto,
    /// Bytes
    B,
    /// Kilobytes
    Kb,
    /// Megabytes
    Mb,
    /// Gigabytes
    Gb,
    /// Terabytes
    Tb,
}

impl From<Units> for SizeScale {
    fn from(units: Units) -> Self {
        match units {
            Units::Auto => SizeScale::Auto,
            Units::B => SizeScale::Bytes,
            Units::Kb => SizeScale::Kilobytes,
            Units::Mb => SizeScale::Megabytes,
            Units::Gb => SizeScale::Gigabytes,
            Units::Tb => SizeScale::Terabytes,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "foldersize")]
#[command(about = "Show file space used for folders and subfolders")]
#[command(version)]
#[command(after_help = "Search depth should be large. Subfolders beyond search depth are ignored \
(not counted, not reported). Report depth is less than or equal to search depth.\n\n\
Set RUST_LOG=foldersize=debug to log skipped folders on stderr.")]
struct Args {
    /// Folders to report, in the order given
    #[arg(required = true, value_name = "FOLDER")]
    folders: Vec<PathBuf>,

    /// Strict Unicode order for uppercase/lowercase in subfolder names
    #[arg(short = 'c', long = "case-sensitive")]
    case_sensitive: bool,

    /// Incremental left indent for subfolders, in spaces
    #[arg(
        short = 'i',
        long = "indent",
        default_value_t = 2,
        value_parser = clap::value_parser!(u8).range(0..=99)
    )]
    indent: u8,

    /// Detail level: 0 = each folder only, 1 = plus subfolders, 2 = excessive
    #[arg(
        short = 'm',
        long = "detail",
        default_value_t = 1,
        value_parser = clap::value_parser!(u8).range(0..=2)
    )]
    detail: u8,

    /// Maximum subfolder depth to report
    #[arg(
        short = 'r',
        long = "report-depth",
        default_value_t = 9,
        value_parser = clap::value_parser!(u16).range(0..=999)
    )]
    report_depth: u16,

    /// Maximum subfolder depth to search
    #[arg(
        short = 's',
        long = "search-depth",
        default_value_t = 99,
        value_parser = clap::value_parser!(u16).range(0..=999)
    )]
    search_depth: u16,

    /// Show sizes in these units
    #[arg(short = 'u', long = "units", value_enum, default_value = "auto")]
    units: Units,

    /// Output as raw comma-separated values
    #[arg(short = 'v', long = "csv", conflicts_with = "json")]
    csv: bool,

    /// Output as JSON
    #[arg(long = "json", conflicts_with = "csv")]
    json: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

fn setup_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("foldersize=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let args = Args::parse();
    setup_logging();

    let format = if args.csv {
        OutputFormat::Csv
    } else if args.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    let scan_config = ScanConfig::default()
        .with_search_depth(args.search_depth as usize)
        .with_case_sensitive(args.case_sensitive);

    let output_config = OutputConfig {
        use_color: format == OutputFormat::Text && should_use_color(args.color),
        ..OutputConfig::default()
            .with_indent_width(args.indent as usize)
            .with_report_depth(args.report_depth as usize)
            .with_detail(DetailLevel::from_level(args.detail))
            .with_scale(args.units.into())
            .with_format(format)
    };

    let choice = if output_config.use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);

    match report_folders(&args.folders, &scan_config, &output_config, &mut stdout) {
        Ok(()) => {}
        Err(e) if e.is_broken_pipe() => {}
        Err(e) => {
            eprintln!("foldersize: {}", e);
            process::exit(1);
        }
    }
}
