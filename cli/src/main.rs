// lints
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod report;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use quadtree::{format_tokens, parse_tokens, Node, PixelGrid};
use report::{CompressReport, Failure, TreeReport, UncompressReport};
use tracing::{debug, info};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

/// Lossless quadtree compression for square grayscale images
///
/// Raw images are one pixel value (0-255) per line, row by row, with a power of
/// two number of pixels on each side. Compressed (.rit) files are the pixel
/// count followed by the quadtree in preorder, -1 marking a split.
#[derive(Parser, Debug)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Subcommands,
}

#[derive(Debug, Subcommand)]
enum Subcommands {
    /// Compress a raw image into a .rit file
    Compress(ConvertArgs),

    /// Uncompress a .rit file into a raw image
    Uncompress(ConvertArgs),

    /// Show the quadtree stored in a .rit file
    Tree(TreeArgs),
}

#[derive(Debug, Args)]
struct ConvertArgs {
    /// File to read
    input: PathBuf,
    /// File to write, replaced if it exists
    output: PathBuf,
}

#[derive(Debug, Args)]
struct TreeArgs {
    /// Compressed .rit file
    input: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_target(true)
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .with_span_events(FmtSpan::CLOSE)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version end up here too
            let _ = err.print();
            return if err.exit_code() == 0 {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(report::EXIT_USAGE)
            };
        }
    };

    match run(cli) {
        Ok(report) => {
            print!("{report}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            debug!(?err, "failed");
            eprintln!("{err:#}");
            ExitCode::from(report::exit_code(&err))
        }
    }
}

/// runs one subcommand, returning the report for stdout
fn run(cli: Cli) -> Result<String> {
    match cli.command {
        Subcommands::Compress(args) => compress(&args),
        Subcommands::Uncompress(args) => uncompress(&args),
        Subcommands::Tree(args) => tree(&args),
    }
}

fn compress(args: &ConvertArgs) -> Result<String> {
    let text = read(&args.input)?;
    let grid = parse_tokens(&text)
        .and_then(|tokens| PixelGrid::from_tokens(&tokens))
        .map_err(|e| Failure::Contents(args.input.clone(), e))?;
    info!(input = ?args.input, dim = grid.dim(), "read raw image");

    let tree = Node::build(&grid)
        .map_err(|e| Failure::Contents(args.input.clone(), e))?
        .reduce();
    let tokens = tree.encode(grid.dim());
    write(&args.output, &format_tokens(&tokens))?;

    let report = CompressReport {
        input: &args.input,
        output: &args.output,
        preorder: &tokens[1..],
        raw_size: grid.dim() * grid.dim(),
        compressed_size: tokens.len(),
    };
    Ok(report.to_string())
}

fn uncompress(args: &ConvertArgs) -> Result<String> {
    let text = read(&args.input)?;
    let decoded = Node::decode_str(&text).map_err(|e| Failure::Contents(args.input.clone(), e))?;
    info!(input = ?args.input, dim = decoded.dim, "read compressed image");

    let grid = decoded
        .render()
        .map_err(|e| Failure::Contents(args.input.clone(), e))?;
    write(&args.output, &format_tokens(&grid.to_tokens()))?;

    let report = UncompressReport {
        input: &args.input,
        output: &args.output,
        preorder: &decoded.tree.preorder_tokens(),
    };
    Ok(report.to_string())
}

fn tree(args: &TreeArgs) -> Result<String> {
    let text = read(&args.input)?;
    let decoded = Node::decode_str(&text).map_err(|e| Failure::Contents(args.input.clone(), e))?;

    let report = TreeReport {
        dim: decoded.dim,
        tree: &decoded.tree,
    };
    Ok(report.to_string())
}

fn read(path: &Path) -> Result<String, Failure> {
    fs::read_to_string(path).map_err(|e| Failure::Read(path.to_owned(), e))
}
fn write(path: &Path, contents: &str) -> Result<(), Failure> {
    fs::write(path, contents).map_err(|e| Failure::Write(path.to_owned(), e))?;
    info!(output = ?path, bytes = contents.len(), "wrote");
    Ok(())
}
