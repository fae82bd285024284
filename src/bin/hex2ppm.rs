//! hex2ppm: render a 320x240 RGB565 hex file as a PPM for inspection.
//!
//! Tolerates comments, blank lines, `xxxx` placeholders and garbage; a short
//! file is padded with its last valid pixel. Run without arguments it reads
//! `blurred.hex` and writes `output.ppm` in the current directory.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};
use zenrgb565::{FRAME_HEIGHT, FRAME_WIDTH, TOTAL_PIXELS, Unstoppable};

#[derive(Parser, Debug)]
#[command(name = "hex2ppm")]
#[command(about = "Render a 320x240 RGB565 hex file as a binary PPM", long_about = None)]
struct Args {
    /// Hex file to read
    #[arg(default_value = "blurred.hex")]
    input: PathBuf,

    /// PPM file to write
    #[arg(default_value = "output.ppm")]
    output: PathBuf,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let input = File::open(&args.input)
        .with_context(|| format!("cannot open {}", args.input.display()))?;
    let output = File::create(&args.output)
        .with_context(|| format!("cannot create {}", args.output.display()))?;

    let decoded = zenrgb565::read_hex(BufReader::new(input))
        .with_context(|| format!("cannot read {}", args.input.display()))?;

    // Skipped lines and padding are logged as warnings by the decoder.
    let stats = decoded.stats();
    info!(
        "Read {} data lines, skipped {} lines",
        stats.data_lines,
        stats.skipped_lines()
    );

    let frame = decoded.to_pixel_buffer(FRAME_WIDTH, FRAME_HEIGHT)?;
    zenrgb565::write_ppm(&frame, BufWriter::new(output), Unstoppable)
        .with_context(|| format!("cannot write {}", args.output.display()))?;

    info!(
        "Wrote {} ({TOTAL_PIXELS} pixels)",
        args.output.display()
    );
    Ok(())
}
