//! Demo of for-each driven parsing of file paths.
//!
//! Usage:
//!   demo-two [PATHS...] [--json] [--verbose]

#[path = "../common/logging.rs"]
mod logging;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use seqops::{find, for_each, for_each_mut, FileEntry};

const DEFAULT_PATHS: [&str; 4] = [
    "index.html",
    "scripts/main.js",
    "styles/main.css",
    "styles/responsive.css",
];

#[derive(Parser, Debug)]
#[command(
    name = "demo-two",
    about = "Split file paths into names and extensions",
    version
)]
struct Args {
    /// Slash-separated paths (defaults to a built-in sample)
    paths: Vec<String>,

    /// Print the parsed entries as a JSON array
    #[arg(long, default_value = "false")]
    json: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::setup_logging(args.verbose)?;

    let paths: Vec<String> = if args.paths.is_empty() {
        debug!("no paths given, using the built-in sample");
        DEFAULT_PATHS.iter().map(|p| p.to_string()).collect()
    } else {
        args.paths
    };

    // Convert to file entries.
    let mut files = Vec::with_capacity(paths.len());
    for_each(&paths, |path| files.push(FileEntry::new(path.as_str())));

    // Parse names, then extensions.
    for_each_mut(&mut files, FileEntry::parse_name);
    for_each_mut(&mut files, FileEntry::parse_ext);

    let (invalid, found) = find(&files, |f| f.validate().is_err());
    if found {
        invalid
            .validate()
            .with_context(|| format!("Invalid path {:?}", invalid.path))?;
    }
    info!(count = files.len(), "parsed file entries");

    if args.json {
        let json = serde_json::to_string_pretty(&files).context("Failed to serialize entries")?;
        println!("{}", json);
    } else {
        for_each(&files, display);
    }

    Ok(())
}

fn display(file: &FileEntry) {
    println!("{}", file);
}
