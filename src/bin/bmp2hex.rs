//! bmp2hex: convert any 24-bit BMP into a 320x240 RGB565 hex file for
//! Verilog `$readmemh`.
//!
//! ```bash
//! bmp2hex photo.bmp frame.hex
//! ```

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};
use zenrgb565::{FRAME_HEIGHT, FRAME_WIDTH, TOTAL_PIXELS, Unstoppable};

#[derive(Parser, Debug)]
#[command(name = "bmp2hex")]
#[command(about = "Convert a 24-bit BMP into a 320x240 RGB565 hex file", long_about = None)]
struct Args {
    /// Input image: any uncompressed 24-bit BMP, any resolution
    input: PathBuf,

    /// Output file: one RGB565 hex word per line, for $readmemh
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
    let data = fs::read(&args.input)
        .with_context(|| format!("cannot open input BMP {}", args.input.display()))?;

    let header = zenrgb565::probe_bmp(&data)
        .with_context(|| format!("{} is not a usable BMP", args.input.display()))?;
    info!(
        "Input image: {}x{} pixels (24-bit BMP)",
        header.width(),
        header.height()
    );

    let src = zenrgb565::decode_bmp(&data, Unstoppable)
        .with_context(|| format!("cannot decode {}", args.input.display()))?;
    drop(data);

    if src.has_dimensions(FRAME_WIDTH, FRAME_HEIGHT) {
        info!("Image already {FRAME_WIDTH}x{FRAME_HEIGHT}, skipping resize.");
    } else {
        info!("Resizing to {FRAME_WIDTH}x{FRAME_HEIGHT} using bilinear interpolation...");
    }
    let frame = zenrgb565::resize_to_frame(src, Unstoppable).context("resize failed")?;

    let file = File::create(&args.output)
        .with_context(|| format!("cannot open output file {}", args.output.display()))?;
    zenrgb565::write_hex(&frame, BufWriter::new(file), Unstoppable)
        .with_context(|| format!("cannot write {}", args.output.display()))?;

    info!(
        "Done. Wrote {TOTAL_PIXELS} pixels to {}",
        args.output.display()
    );
    info!(
        "Load in Verilog with: $readmemh(\"{}\", frame_buffer);",
        args.output.display()
    );
    Ok(())
}
