// Command-line bridge between JSON feature collections and hash strings.
//
// `encode` reads a JSON array of features and prints the collection hash;
// `decode` reads a hash string (a single feature or an `F` collection) and
// prints the JSON array.  Both default to stdin/stdout.

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Args, Parser, Subcommand, ValueHint};

use crate::format::FeatureHash;
use crate::model::Feature;

// ---------------------------------------------------------------------------
// Clap CLI definition
// ---------------------------------------------------------------------------

/// Compact reversible text codec for map-feature permalinks.
#[derive(Parser, Debug)]
#[command(
    name = "featurehash",
    version,
    about = "Feature permalink encoder/decoder",
    arg_required_else_help = true
)]
struct Cli {
    #[command(subcommand)]
    command: Cmd,

    /// Quiet mode (suppress non-error output).
    #[arg(short = 'q', long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Verbose mode (use multiple times for more detail).
    #[arg(short = 'v', long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Encode a JSON feature array into a hash string.
    Encode(CodecArgs),
    /// Decode a hash string into a JSON feature array.
    Decode(CodecArgs),
}

#[derive(Args, Debug)]
struct CodecArgs {
    /// Input file (defaults to stdin).
    #[arg(value_hint = ValueHint::FilePath)]
    input: Option<PathBuf>,

    /// Output file (defaults to stdout).
    #[arg(short = 'o', long, value_hint = ValueHint::FilePath)]
    output: Option<PathBuf>,

    /// Coordinate scale factor; accuracies above 1 are lossy.
    #[arg(long, default_value_t = 1.0)]
    accuracy: f64,

    /// Skip style tokens when encoding.
    #[arg(long)]
    no_styles: bool,

    /// Apply the legacy key-rename table to attribute keys when decoding.
    #[arg(long)]
    legacy_keys: bool,
}

impl CodecArgs {
    fn hash(&self) -> FeatureHash {
        FeatureHash {
            accuracy: self.accuracy,
            write_styles: !self.no_styles,
            legacy_keys: self.legacy_keys,
        }
    }
}

// ---------------------------------------------------------------------------
// I/O helpers
// ---------------------------------------------------------------------------

fn read_input(path: Option<&PathBuf>) -> io::Result<String> {
    let mut text = String::new();
    match path {
        Some(path) => {
            File::open(path)?.read_to_string(&mut text)?;
        }
        None => {
            io::stdin().read_to_string(&mut text)?;
        }
    }
    Ok(text)
}

fn write_output(path: Option<&PathBuf>, text: &str) -> io::Result<()> {
    match path {
        Some(path) => {
            let mut file = File::create(path)?;
            file.write_all(text.as_bytes())?;
            file.write_all(b"\n")
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            out.write_all(text.as_bytes())?;
            out.write_all(b"\n")
        }
    }
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_encode(args: &CodecArgs, quiet: bool) -> i32 {
    let input = match read_input(args.input.as_ref()) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("featurehash: read failed: {e}");
            return 1;
        }
    };
    let features: Vec<Feature> = match serde_json::from_str(&input) {
        Ok(features) => features,
        Err(e) => {
            eprintln!("featurehash: invalid feature JSON: {e}");
            return 1;
        }
    };

    let text = args.hash().write_features(&features);
    if let Err(e) = write_output(args.output.as_ref(), &text) {
        eprintln!("featurehash: write failed: {e}");
        return 1;
    }
    if !quiet {
        eprintln!(
            "featurehash: encoded {} features into {} characters",
            features.len(),
            text.len()
        );
    }
    0
}

fn cmd_decode(args: &CodecArgs, quiet: bool) -> i32 {
    let input = match read_input(args.input.as_ref()) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("featurehash: read failed: {e}");
            return 1;
        }
    };
    let text = input.trim();

    let hash = args.hash();
    // A collection starts with the literal `F`; anything else is read as
    // one feature.
    let features = if text.starts_with('F') {
        hash.read_features(text)
    } else {
        hash.read_feature(text).map(|feature| vec![feature])
    };
    let features = match features {
        Ok(features) => features,
        Err(e) => {
            eprintln!("featurehash: decode failed: {e}");
            return 1;
        }
    };

    let json = match serde_json::to_string_pretty(&features) {
        Ok(json) => json,
        Err(e) => {
            eprintln!("featurehash: JSON serialization failed: {e}");
            return 1;
        }
    };
    if let Err(e) = write_output(args.output.as_ref(), &json) {
        eprintln!("featurehash: write failed: {e}");
        return 1;
    }
    if !quiet {
        eprintln!("featurehash: decoded {} features", features.len());
    }
    0
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Main CLI entry point. Parses arguments via clap, dispatches commands.
pub fn run() -> ! {
    let cli = Cli::parse();

    let default_filter = match (cli.quiet, cli.verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let exit_code = match &cli.command {
        Cmd::Encode(args) => cmd_encode(args, cli.quiet),
        Cmd::Decode(args) => cmd_decode(args, cli.quiet),
    };

    process::exit(exit_code);
}
