//! obj2vtk: convert Wavefront OBJ polygon meshes to legacy VTK.
//!
//! Reads the input mesh, prints a summary of its polygon faces and bounds,
//! fan-triangulates every polygon with more than three vertices, prints the
//! summary again and writes the result as ASCII VTK polydata.
//!
//! # Logging
//!
//! Set the `RUST_LOG` environment variable to control log output:
//! - `RUST_LOG=mesh_convert=info` - Basic operation logging
//! - `RUST_LOG=mesh_convert=debug` - Detailed progress logging
//! - `RUST_LOG=mesh_convert::timing=info` - Performance timing
//!
//! # Example
//!
//! ```bash
//! # Convert into ./bunny.vtk
//! obj2vtk meshes/bunny.obj
//!
//! # Clear the terminal first, keep dangling face references
//! obj2vtk -c --permissive scan.obj -o out/scan.vtk
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use colored::Colorize;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod convert;
mod output;

/// obj2vtk - Convert Wavefront OBJ meshes to legacy VTK polydata.
///
/// Polygons with more than three vertices are fan-triangulated from their
/// first vertex before export.
#[derive(Parser)]
#[command(name = "obj2vtk")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input mesh file (.obj)
    input: PathBuf,

    /// Output file path [default: input name with .vtk, in the current directory]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Clear the terminal before converting
    #[arg(short, long)]
    clear: bool,

    /// Load conversion parameters from a TOML file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Accept faces that reference vertices missing from the file
    #[arg(long)]
    permissive: bool,

    /// Export polygons as read, without triangulating
    #[arg(long)]
    no_triangulate: bool,

    /// Output format for results
    #[arg(long, default_value = "text")]
    format: OutputFormat,

    /// Suppress all non-error output
    #[arg(long, short)]
    quiet: bool,

    /// Increase output verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(long, short, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output for scripting
    Json,
}

/// Initialize the tracing subscriber based on verbosity level.
fn init_tracing(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    // RUST_LOG takes precedence over -v flags
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        let level = match verbose {
            0 => "warn",
            1 => "mesh_convert=info",
            2 => "mesh_convert=debug",
            _ => "trace",
        };
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    #[cfg(debug_assertions)]
    miette::set_panic_hook();

    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.quiet);

    let result = convert::run(&cli);

    if let Err(e) = &result {
        if !cli.quiet {
            if let Some(mesh_err) = e.downcast_ref::<mesh_convert::MeshError>() {
                eprintln!("{}: {}", "Error".red().bold(), mesh_err);
                eprintln!("  {}: {}", "Code".cyan(), mesh_err.code());
                eprintln!(
                    "  {}: {}",
                    "Suggestion".green(),
                    mesh_err.recovery_suggestion()
                );
                if let Some(location) = mesh_err.location() {
                    eprintln!("  {}: {}", "Location".yellow(), location);
                }
            } else {
                eprintln!("{}: {}", "Error".red().bold(), e);
                for cause in e.chain().skip(1) {
                    eprintln!("  {}: {}", "Caused by".yellow(), cause);
                }
            }
        }
        std::process::exit(1);
    }

    Ok(())
}
