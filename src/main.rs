use std::{
    error::Error,
    io::{self, IsTerminal, Write},
    process::ExitCode,
};

use clap::Parser;
use tempconv::{Formatted, Precision, Scale, Temperature, convert, list_scales};
use tracing::debug;
use tracing_subscriber::EnvFilter;

const USAGE_HINT: &str = "try 'tempconv -h' for more information";

/// Converts temperatures between different temperature scales.
#[derive(Parser, Debug)]
#[command(name = "tempconv", version, about, after_help = scales_help())]
struct Args {
    /// Temperature to convert
    #[arg(allow_negative_numbers = true)]
    temp: f64,

    /// Scale to convert temperature from
    from_scale: Scale,

    /// Scale to convert temperature to
    to_scale: Scale,

    /// Number of decimal places [min: 0, max: 12]
    #[arg(short, long, default_value_t = Precision::default())]
    decimals: Precision,

    /// Include temperature unit
    #[arg(short, long)]
    unit: bool,
}

fn scales_help() -> String {
    let scales: Vec<String> = list_scales()
        .iter()
        .map(|(name, alias)| match alias {
            Some(alias) => format!("  {name}, {alias}"),
            None => format!("  {name}"),
        })
        .collect();

    format!(
        "Scales:\n{}\n\n\
         It is possible to use abbreviations as long as it uniquely identifies a scale.\n\n\
         Examples:\n  \
         tempconv 0 celsius kelvin\n  \
         tempconv 0 c k\n  \
         tempconv -u -d 4 0 celsius kelvin\n  \
         tempconv -u -- -10 celsius kelvin",
        scales.join("\n")
    )
}

fn run(args: &Args) -> Result<Formatted, Box<dyn Error>> {
    let source = Temperature::new(args.from_scale, args.temp)?;
    let converted = convert(source, args.to_scale)?;
    Ok(Formatted::new(converted, args.decimals).with_unit(args.unit))
}

/// Writes a failed conversion as one message followed by the usage hint.
fn report(err: &dyn Error, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{err}\n{USAGE_HINT}")
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            debug!(%err, "conversion failed");
            // Nothing left to report to if stderr itself is gone.
            let _ = report(err.as_ref(), &mut io::stderr().lock());
            ExitCode::from(2)
        }
    }
}
