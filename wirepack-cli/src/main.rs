//! Wirepack CLI - MPPC stream compression
//!
//! Compresses and decompresses MPPC streams from files or pipes.

mod utils;

use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use utils::{create_progress_bar, format_bytes};
use wirepack_core::error::Result;
use wirepack_core::traits::StreamCodec;
use wirepack_mppc::{MppcCompressor, MppcDecompressor};

#[derive(Parser)]
#[command(name = "wirepack")]
#[command(author, version, about = "MPPC stream compression utility")]
#[command(long_about = "
Wirepack is a Pure Rust implementation of MPPC-style sliding-window
stream compression (8192-byte history, bit-packed tokens).

Use '-' to read from stdin or write to stdout.

Examples:
  wirepack compress input.bin -o input.mppc
  wirepack decompress input.mppc -o input.bin
  wirepack compress - -o - < input.bin > input.mppc
  tail -f log | wirepack compress - -o - | nc peer 9000
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a file or stream
    #[command(alias = "c")]
    Compress {
        /// Input file, or '-' for stdin
        input: PathBuf,

        /// Output file, or '-' for stdout
        #[arg(short, long, default_value = "-")]
        output: PathBuf,

        /// Bytes fed to the codec per update call
        #[arg(long, default_value_t = 65536)]
        chunk_size: usize,

        /// Show progress bar (file inputs only)
        #[arg(short = 'P', long)]
        progress: bool,

        /// Print a summary to stderr when done
        #[arg(short, long)]
        verbose: bool,
    },

    /// Decompress a file or stream
    #[command(alias = "d")]
    Decompress {
        /// Input file, or '-' for stdin
        input: PathBuf,

        /// Output file, or '-' for stdout
        #[arg(short, long, default_value = "-")]
        output: PathBuf,

        /// Bytes fed to the codec per update call
        #[arg(long, default_value_t = 65536)]
        chunk_size: usize,

        /// Show progress bar (file inputs only)
        #[arg(short = 'P', long)]
        progress: bool,

        /// Print a summary to stderr when done
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compress {
            input,
            output,
            chunk_size,
            progress,
            verbose,
        } => {
            let mut codec = MppcCompressor::new();
            run_stream(
                &mut codec, &input, &output, chunk_size, progress, verbose, "compressed",
            )
        }
        Commands::Decompress {
            input,
            output,
            chunk_size,
            progress,
            verbose,
        } => {
            let mut codec = MppcDecompressor::new();
            run_stream(
                &mut codec, &input, &output, chunk_size, progress, verbose, "decompressed",
            )
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == "-"
}

fn open_input(path: &Path) -> Result<(Box<dyn Read>, Option<u64>)> {
    if is_stdio(path) {
        Ok((Box::new(io::stdin().lock()), None))
    } else {
        let file = File::open(path)?;
        let len = file.metadata()?.len();
        Ok((Box::new(BufReader::new(file)), Some(len)))
    }
}

fn open_output(path: &Path) -> Result<Box<dyn Write>> {
    if is_stdio(path) {
        Ok(Box::new(io::stdout().lock()))
    } else {
        Ok(Box::new(BufWriter::new(File::create(path)?)))
    }
}

/// Pump bytes through a codec in fixed-size chunks.
fn run_stream(
    codec: &mut dyn StreamCodec,
    input: &Path,
    output: &Path,
    chunk_size: usize,
    progress: bool,
    verbose: bool,
    verb: &str,
) -> Result<()> {
    let (mut reader, input_len) = open_input(input)?;
    let mut writer = open_output(output)?;

    let pb = create_progress_bar(input_len, progress);

    let mut buf = vec![0u8; chunk_size.max(1)];
    let mut bytes_in: u64 = 0;
    let mut bytes_out: u64 = 0;

    loop {
        let n = reader.read(&mut buf)?;
        if n == 0 {
            break;
        }
        let produced = codec.update(&buf[..n])?;
        writer.write_all(&produced)?;
        bytes_in += n as u64;
        bytes_out += produced.len() as u64;
        pb.set_position(bytes_in);
    }
    writer.flush()?;
    pb.finish_and_clear();

    if verbose {
        let ratio = if bytes_in > 0 {
            bytes_out as f64 / bytes_in as f64 * 100.0
        } else {
            0.0
        };
        eprintln!(
            "{} {} -> {} ({:.1}%)",
            verb,
            format_bytes(bytes_in),
            format_bytes(bytes_out),
            ratio
        );
    }

    Ok(())
}
