//! Dominoes CLI - render domino tile sets as transparent PNGs
//!
//! This binary renders the faces and backs of a double-six set, lists the
//! tiles of a set, and works with style files.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use dominoes_cli::commands;
use dominoes_cli::commands::generate::GenerateOptions;

/// Dominoes - procedural domino tile renderer
#[derive(Parser)]
#[command(name = "dominoes")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a tile set into a directory
    Generate {
        /// Output directory (default: current directory)
        #[arg(short, long)]
        out_dir: Option<String>,

        /// Path to a JSON style file (default: built-in style)
        #[arg(short, long)]
        style: Option<String>,

        /// Render all 49 ordered value pairs instead of the 28 unique tiles
        #[arg(long)]
        ordered: bool,

        /// Which part of the set to render
        #[arg(long, default_value = "all", value_parser = commands::SELECTION_VALUES)]
        only: String,

        /// Do not write manifest.json
        #[arg(long)]
        no_manifest: bool,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,

        /// Show dimensions and hashes for each tile
        #[arg(short, long)]
        verbose: bool,
    },

    /// List the files a generate run would write
    List {
        /// List all 49 ordered value pairs instead of the 28 unique tiles
        #[arg(long)]
        ordered: bool,

        /// Which part of the set to list
        #[arg(long, default_value = "all", value_parser = commands::SELECTION_VALUES)]
        only: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print the built-in style as JSON
    Style {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Validate a style file without rendering
    Validate {
        /// Path to the JSON style file
        #[arg(short, long)]
        style: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            out_dir,
            style,
            ordered,
            only,
            no_manifest,
            json,
            verbose,
        } => commands::parse_selection(&only).and_then(|selection| {
            let options = GenerateOptions {
                out_dir: PathBuf::from(out_dir.unwrap_or_else(|| ".".to_string())),
                style_path: style.map(PathBuf::from),
                mode: commands::set_mode(ordered),
                selection,
                write_manifest: !no_manifest,
            };
            commands::generate::run(&options, json, verbose)
        }),
        Commands::List {
            ordered,
            only,
            json,
        } => commands::parse_selection(&only).and_then(|selection| {
            commands::list::run(commands::set_mode(ordered), selection, json)
        }),
        Commands::Style { output } => commands::style::run(output.as_deref()),
        Commands::Validate { style, json } => commands::validate::run(&style, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
