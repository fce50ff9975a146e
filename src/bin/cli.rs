//! symlib CLI
//!
//! Command-line interface for inspecting and editing a symbol library.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use symlib::{Config, SymbolLibrary};
use tracing_subscriber::{fmt, EnvFilter};

/// symlib CLI
#[derive(Parser, Debug)]
#[command(name = "symlib-cli")]
#[command(about = "Add and update symbols in a KiCad symbol library")]
#[command(version)]
struct Args {
    /// Library directory
    #[arg(short = 'r', long, default_value = "./library")]
    lib_root: PathBuf,

    /// Library name (file stem of the .kicad_sym file)
    #[arg(short, long, default_value = "lcsc")]
    name: String,

    /// Skip the check for extra symbol opening lines in payloads
    #[arg(long)]
    no_check: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check whether a symbol exists (exit status 0 if it does)
    Exists {
        /// The symbol name
        symbol: String,
    },

    /// Add a symbol from a file ("-" reads stdin)
    Add {
        /// The symbol name
        symbol: String,

        /// File holding the symbol definition
        file: String,

        /// Replace the symbol if it already exists
        #[arg(short, long)]
        update: bool,
    },

    /// List all symbol names
    List,
}

fn main() -> ExitCode {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,symlib=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> symlib::Result<ExitCode> {
    let config = Config::builder()
        .lib_root(&args.lib_root)
        .lib_name(&args.name)
        .check_payloads(!args.no_check)
        .build()?;

    tracing::debug!("symlib v{}", symlib::VERSION);
    tracing::debug!("Library file: {}", config.library_path().display());

    let mut library = SymbolLibrary::open(config)?;

    match args.command {
        Commands::Exists { symbol } => {
            let found = library.exists(&symbol)?;
            println!("{}", if found { "yes" } else { "no" });
            Ok(if found { ExitCode::SUCCESS } else { ExitCode::from(1) })
        }
        Commands::Add { symbol, file, update } => {
            let payload = read_payload(&file)?;
            library.add(&symbol, &payload, update)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::List => {
            for name in library.names()? {
                println!("{}", name);
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Read a payload from a file, or stdin for "-"
///
/// A single trailing newline is dropped; the library adds its own separator.
fn read_payload(source: &str) -> symlib::Result<Vec<u8>> {
    let mut payload = if source == "-" {
        let mut buf = Vec::new();
        io::stdin().read_to_end(&mut buf)?;
        buf
    } else {
        fs::read(source)?
    };

    if payload.last() == Some(&b'\n') {
        payload.pop();
    }
    Ok(payload)
}
