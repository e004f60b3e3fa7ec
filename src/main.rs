//! CLI entry point for dirtree

use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use dirtree::{
    GrandTotal, IdentityResolver, JsonReport, JsonRoot, NumericResolver, OutputConfig,
    SystemResolver, TreeWalker, WalkerConfig, print_json,
};
use termcolor::{NoColor, StandardStream};

/// Maximum number of root paths analyzed in one run.
const MAX_ROOTS: usize = 64;

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

#[derive(Parser, Debug)]
#[command(name = "dirtree")]
#[command(about = "Gather information about directory trees. If no path is given, the current directory is analyzed.")]
#[command(version)]
struct Args {
    /// List of paths to analyze (max 64). Default is the current directory.
    paths: Vec<PathBuf>,

    /// Print directories only
    #[arg(short = 'd', long = "dirs-only")]
    dirs_only: bool,

    /// Print summary of directories (total number of files, total file size, etc)
    #[arg(short = 's', long = "summary")]
    summary: bool,

    /// Print detailed information for each file
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,

    /// Show numeric user and group ids instead of names
    #[arg(short = 'n', long = "numeric-ids")]
    numeric_ids: bool,

    /// Number of parallel workers for subtree traversal
    /// (0 = auto-detect, 1 = sequential, N = use N workers)
    #[arg(short = 'j', long = "jobs", default_value = "1")]
    jobs: usize,

    /// List at most N entries per directory; the rest are reported as omitted
    #[arg(long = "max-entries", value_name = "N")]
    max_entries: Option<usize>,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Print counts as JSON instead of listing entries
    #[arg(long = "json")]
    json: bool,
}

/// Apply the root-count limit, warning about every ignored path.
fn select_roots(mut paths: Vec<PathBuf>) -> Vec<PathBuf> {
    if paths.is_empty() {
        return vec![PathBuf::from(".")];
    }
    if paths.len() > MAX_ROOTS {
        for ignored in paths.drain(MAX_ROOTS..) {
            eprintln!(
                "dirtree: warning: maximum number of directories exceeded, ignoring '{}'",
                ignored.display()
            );
        }
    }
    paths
}

fn main() {
    let args = Args::parse();
    let roots = select_roots(args.paths.clone());

    let walker_config = WalkerConfig {
        dirs_only: args.dirs_only,
        summary: args.summary && !args.json,
        verbose: args.verbose,
        parallel_workers: args.jobs,
        max_entries: args.max_entries,
    };

    let output_config = OutputConfig {
        use_color: !args.json && should_use_color(args.color),
        ..Default::default()
    };

    let resolver: Box<dyn IdentityResolver> = if args.numeric_ids {
        Box::new(NumericResolver)
    } else {
        Box::new(SystemResolver::new())
    };

    let result = if args.json {
        run_json(&roots, walker_config, output_config, resolver.as_ref())
    } else {
        run_listing(&roots, walker_config, output_config, resolver.as_ref())
    };

    if let Err(e) = result {
        eprintln!("dirtree: error writing output: {}", e);
        process::exit(1);
    }
}

/// Walk every root to stdout, then print the grand total if it applies.
fn run_listing(
    roots: &[PathBuf],
    walker_config: WalkerConfig,
    output_config: OutputConfig,
    resolver: &dyn IdentityResolver,
) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(output_config.color_choice());
    let walker = TreeWalker::new(walker_config, output_config, resolver);

    let mut total = GrandTotal::new();
    for root in roots {
        let result = walker.walk(root, &mut stdout)?;
        if !result.is_clean() {
            tracing::info!(
                root = %root.display(),
                issues = result.issues.len(),
                "walk finished with unreadable entries"
            );
        }
        total.add_root(result.summary);
    }

    if walker.config().summary && total.should_report() {
        walker.report().write_grand_total(&mut stdout, &total)?;
    }
    stdout.flush()
}

/// Walk every root without listing output and print the counts as JSON.
fn run_json(
    roots: &[PathBuf],
    walker_config: WalkerConfig,
    output_config: OutputConfig,
    resolver: &dyn IdentityResolver,
) -> io::Result<()> {
    let walker = TreeWalker::new(walker_config, output_config, resolver);
    let mut sink = NoColor::new(io::sink());

    let mut total = GrandTotal::new();
    let mut report = JsonReport::default();
    for root in roots {
        let result = walker.walk(root, &mut sink)?;
        total.add_root(result.summary);
        report.push(JsonRoot::new(root, &result));
    }
    report.finish(&total);
    print_json(&report)
}
