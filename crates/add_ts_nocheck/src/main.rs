use std::path::PathBuf;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;

use add_ts_nocheck::config::{ApplyConfig, DEFAULT_ROOT};
use add_ts_nocheck::report::{render_summary, ConsoleReporter, SEPARATOR};
use add_ts_nocheck::apply_markers_with;
use find_source_files::SuffixFilter;
use ts_nocheck_marker::TS_NOCHECK_MARKER;

#[derive(Parser, Debug)]
#[command(
    name = "add_ts_nocheck",
    version,
    about = "Prepends `// @ts-nocheck` to every TypeScript file that lacks it"
)]
struct Cli {
    /// Directories to scan recursively
    #[arg(value_name = "ROOT", default_value = DEFAULT_ROOT)]
    roots: Vec<PathBuf>,

    /// Marker line to ensure at the top of each file
    #[arg(long, env = "ADD_TS_NOCHECK_MARKER", default_value = TS_NOCHECK_MARKER)]
    marker: String,

    /// Recognized file suffix (repeatable, default: .ts and .tsx)
    #[arg(long = "ext", value_name = "SUFFIX")]
    extensions: Vec<String>,

    /// Suffix to skip even when recognized (repeatable, default: .d.ts)
    #[arg(long = "exclude-suffix", value_name = "SUFFIX")]
    exclude_suffixes: Vec<String>,

    /// Report what would change without writing anything
    #[arg(long)]
    dry_run: bool,

    /// Enable verbose logging
    #[arg(long)]
    verbose: bool,
}

impl Cli {
    fn into_config(self) -> ApplyConfig {
        let defaults = SuffixFilter::default();
        let include = if self.extensions.is_empty() {
            defaults.include
        } else {
            self.extensions
        };
        let exclude = if self.exclude_suffixes.is_empty() {
            defaults.exclude
        } else {
            self.exclude_suffixes
        };
        ApplyConfig {
            roots: self.roots,
            marker: self.marker,
            filter: SuffixFilter::new(include, exclude),
            dry_run: self.dry_run,
            verbose: self.verbose,
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

/// Parses the command line; usage errors exit with 1, `--help` and
/// `--version` with 0.
fn parse_cli() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            _ => {
                let _ = err.print();
                std::process::exit(1);
            }
        },
    }
}

fn run() -> Result<()> {
    let config = parse_cli().into_config();
    init_logging(config.verbose);
    config.validate()?;
    log::debug!("Configuration: {:?}", config);

    println!("{}", SEPARATOR);
    println!("Adding '{}' to {} file(s)", config.marker, config.filter.include.join(", "));
    println!("{}", SEPARATOR);

    let summary = apply_markers_with(&config, &mut ConsoleReporter)?;

    println!("{}", render_summary(&summary, config.dry_run));
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
