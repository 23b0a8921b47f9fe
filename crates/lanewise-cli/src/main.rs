//! Lanewise command-line interface.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use lanewise_simd::{FloatVector, Mode, add_scalar, demo_operands, dispatch};

#[derive(Parser)]
#[command(name = "lanewise")]
#[command(about = "Element-wise f32 addition with 128, 256 and 512-bit SIMD kernels", long_about = None)]
#[command(version)]
struct Cli {
    /// Kernel width: narrow (sse), medium (avx2) or wide (avx512)
    #[arg(value_name = "MODE")]
    mode: Option<String>,

    /// List the available modes and exit
    #[arg(short, long)]
    list_modes: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let mode = match cli.mode.as_deref() {
        Some(token) => token.parse::<Mode>()?,
        None => Mode::default(),
    };

    if cli.list_modes {
        return list_modes();
    }

    run(mode, cli.verbose)
}

fn list_modes() -> Result<()> {
    let mut out = io::stdout().lock();
    for mode in Mode::ALL {
        let backend = mode.backend();
        writeln!(
            out,
            "{:<8} {:<8} {:>2} lanes  {}{}",
            mode.name(),
            mode.aliases().join(", "),
            mode.width(),
            backend,
            if backend.is_simd() { "" } else { " [not compiled in]" }
        )?;
    }
    Ok(())
}

fn run(mode: Mode, verbose: bool) -> Result<()> {
    let (a, b) = demo_operands();
    let mut result = FloatVector::zeroed();

    let calls = dispatch(mode, &mut result, &a, &b);
    log::info!("{} kernel ran {} times", mode, calls);

    let mut expected = [0.0f32; 16];
    add_scalar(&mut expected, &a, &b);

    let mut out = io::stdout().lock();
    if verbose {
        writeln!(out, "Mode: {}", mode)?;
        writeln!(out, "Width: {} lanes", mode.width())?;
        writeln!(out, "Backend: {}", mode.backend())?;
        writeln!(out, "Kernel calls: {}", calls)?;
        writeln!(out)?;
    }

    for (i, (value, want)) in result.iter().zip(expected.iter()).enumerate() {
        writeln!(out, "result[{}] = {:.2} == {}", i, value, want)
            .context("Failed to write results")?;
    }

    Ok(())
}
