//! Baugh-Wooley multiplier CLI.
//!
//! This binary is the external driving harness for the multiplier model. It provides:
//! 1. **Single multiply:** Drive one operand pair, print the product, and optionally dump a VCD waveform.
//! 2. **Sweep:** Exhaustively check every operand pair of a small configuration against the reference oracle.
//!
//! `result = operand_A * operand_B` is available on the tick `result_valid`
//! pulses, `ceil(log2(min(A_WIDTH, B_WIDTH)))` ticks after `start`.

use std::path::{Path, PathBuf};
use std::{fs, process};

use clap::{Args, Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use bwmul_core::common::bits::signed_range;
use bwmul_core::common::constants::MAX_SWEEP_PRODUCT_WIDTH;
use bwmul_core::config::Config;
use bwmul_core::sim::oracle::reference_product;
use bwmul_core::Harness;

#[derive(Parser, Debug)]
#[command(
    name = "bwmul",
    author,
    version,
    about = "Cycle-accurate Baugh-Wooley signed multiplier",
    long_about = "Drive a pipelined Baugh-Wooley multiplier model tick by tick.\n\nThe result of operand_A * operand_B appears on the tick result_valid pulses.\n\nExamples:\n  bwmul mul 3 -30\n  bwmul mul -128 127 --a-width 8 --b-width 8 --vcd mul.vcd\n  bwmul sweep --a-width 4 --b-width 5"
)]
struct Cli {
    /// Log every tick (overrides RUST_LOG).
    #[arg(long, global = true)]
    trace: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
struct WidthArgs {
    /// Operand width of port A in bits.
    #[arg(long)]
    a_width: Option<u32>,

    /// Operand width of port B in bits.
    #[arg(long)]
    b_width: Option<u32>,

    /// JSON configuration file; width flags override it.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Multiply one operand pair.
    Mul {
        /// Operand driven on port A.
        #[arg(allow_hyphen_values = true)]
        a: i128,

        /// Operand driven on port B.
        #[arg(allow_hyphen_values = true)]
        b: i128,

        #[command(flatten)]
        widths: WidthArgs,

        /// Write the tick-by-tick waveform to this VCD file.
        #[arg(long)]
        vcd: Option<PathBuf>,

        /// Print the statistics report after the multiply.
        #[arg(long)]
        stats: bool,

        /// Print the product as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Check every operand pair of the configured widths against the oracle.
    Sweep {
        #[command(flatten)]
        widths: WidthArgs,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.trace);

    match cli.command {
        Commands::Mul {
            a,
            b,
            widths,
            vcd,
            stats,
            json,
        } => cmd_mul(a, b, &widths, vcd.as_deref(), stats, json),
        Commands::Sweep { widths } => cmd_sweep(&widths),
    }
}

fn init_tracing(trace: bool) {
    let filter = if trace {
        EnvFilter::new("trace")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Loads the configuration file (if any) and applies width overrides.
fn load_config(args: &WidthArgs) -> Config {
    let mut config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path).unwrap_or_else(|e| {
                eprintln!("Error reading config {}: {}", path.display(), e);
                process::exit(1);
            });
            Config::from_json(&text).unwrap_or_else(|e| {
                eprintln!("Error: {e}");
                process::exit(1);
            })
        }
        None => Config::default(),
    };
    if let Some(width) = args.a_width {
        config.widths.a_width = width;
    }
    if let Some(width) = args.b_width {
        config.widths.b_width = width;
    }
    config
}

fn build_harness(config: &Config) -> Harness {
    Harness::new(config).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        process::exit(1);
    })
}

/// Drives one multiply and reports the product.
fn cmd_mul(a: i128, b: i128, widths: &WidthArgs, vcd: Option<&Path>, stats: bool, json: bool) {
    let mut config = load_config(widths);
    config.general.trace_ticks |= vcd.is_some();
    let mut harness = build_harness(&config);
    let geometry = *harness.multiplier().geometry();

    let product = harness.multiply(a, b).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        process::exit(1);
    });

    if json {
        let value = serde_json::json!({
            "a_width": geometry.a_width(),
            "b_width": geometry.b_width(),
            // i128 is emitted as a string to survive JSON number limits.
            "operand_a": product.operand_a.to_string(),
            "operand_b": product.operand_b.to_string(),
            "result": product.result.to_string(),
            "latency": product.latency,
            "tick": product.tick,
        });
        println!("{value}");
    } else {
        println!(
            "{} * {} = {}  ({}x{} bits, valid after {} ticks)",
            product.operand_a,
            product.operand_b,
            product.result,
            geometry.a_width(),
            geometry.b_width(),
            product.latency
        );
    }

    if let Some(path) = vcd {
        let written = fs::File::create(path)
            .map_err(Into::into)
            .and_then(|mut file| harness.write_vcd(&mut file));
        match written {
            Ok(()) => info!(path = %path.display(), "waveform written"),
            Err(e) => {
                eprintln!("Error writing {}: {}", path.display(), e);
                process::exit(1);
            }
        }
    }

    if stats {
        harness.multiplier().stats().print();
    }
}

/// Multiplies every representable operand pair and compares against the oracle.
fn cmd_sweep(widths: &WidthArgs) {
    let config = load_config(widths);
    let mut harness = build_harness(&config);
    let geometry = *harness.multiplier().geometry();

    if geometry.product_width() > MAX_SWEEP_PRODUCT_WIDTH {
        eprintln!(
            "Error: sweep is limited to products of at most {MAX_SWEEP_PRODUCT_WIDTH} bits ({}x{} requested)",
            geometry.a_width(),
            geometry.b_width()
        );
        process::exit(1);
    }

    let (a_min, a_max) = signed_range(geometry.a_width());
    let (b_min, b_max) = signed_range(geometry.b_width());
    let mut checked: u64 = 0;
    let mut failures: u64 = 0;

    for a in a_min..=a_max {
        for b in b_min..=b_max {
            checked += 1;
            let expected = reference_product(&geometry, a, b);
            match harness.multiply(a, b) {
                Ok(p) if p.result == expected && u64::from(geometry.latency()) == p.latency => {}
                Ok(p) => {
                    failures += 1;
                    warn!(a, b, expected, got = p.result, latency = p.latency, "mismatch");
                    eprintln!("FAIL {a} * {b}: expected {expected}, got {} after {} ticks", p.result, p.latency);
                }
                Err(e) => {
                    failures += 1;
                    eprintln!("FAIL {a} * {b}: {e}");
                }
            }
        }
    }

    println!(
        "{}x{} sweep: {} pairs, {} failures, latency {} ticks",
        geometry.a_width(),
        geometry.b_width(),
        checked,
        failures,
        geometry.latency()
    );
    harness.multiplier().stats().print();
    if failures > 0 {
        process::exit(1);
    }
}
