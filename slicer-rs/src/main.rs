use anyhow::Context;
use clap::{Parser, ValueEnum};
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use slicer_rs::cli::{self, SliceArgs};
use slicer_rs::SliceError;

#[derive(Parser)]
#[command(
    name = "slicer",
    version,
    about = "slicer is a simple tool for slicing streams of bytes.",
    long_about = "slicer is a simple tool for slicing streams of bytes.\n\
        START and END support negative indices (as subtracted from the total length).\n\
        Without --strict, out-of-range indices are clamped to the input."
)]
struct Cli {
    #[command(flatten)]
    args: SliceArgs,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,

    /// How failures are reported on stderr
    #[arg(long, value_enum, default_value_t = ErrorFormat::Human, env = "SLICER_ERROR_FORMAT")]
    error_format: ErrorFormat,
}

#[derive(Clone, Copy, ValueEnum)]
enum ErrorFormat {
    Human,
    Json,
}

fn report(err: &anyhow::Error, format: ErrorFormat) {
    match format {
        ErrorFormat::Human => {
            eprintln!("slicer: {:#}", err);
            eprintln!("Try slicer --help for more information.");
        }
        ErrorFormat::Json => {
            let kind = err.downcast_ref::<SliceError>().map(SliceError::kind);
            let causes: Vec<String> = err.chain().skip(1).map(|c| c.to_string()).collect();
            let _ = writeln!(
                io::stderr(),
                "{}",
                serde_json::json!({"error": format!("{:#}", err), "kind": kind, "causes": causes})
            );
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "slicer_rs=debug"
    } else {
        "slicer_rs=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let mut out = BufWriter::new(io::stdout().lock());
    let result = cli::run(&cli.args, &mut out)
        .and_then(|_| out.flush().context("error flushing output"));

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err, cli.error_format);
            ExitCode::FAILURE
        }
    }
}
