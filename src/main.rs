use std::io::{self, BufRead, Write};
use std::process;

use corridor_tiling::input::{read_corridor_length, InputError};
use corridor_tiling::tiling::count_ways;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn run<R: BufRead, W: Write>(input: R, out: &mut W) -> Result<(), InputError> {
    write!(out, "Enter value of N: ")?;
    out.flush()?;

    let n = read_corridor_length(input)?;
    info!(n, "counting tilings");

    writeln!(out, "Ways to tile 2x{} corridor: {}", n, count_ways(n))?;
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(io::stdin().lock(), &mut io::stdout()) {
        debug!(error = ?e, "rejected input");
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
