use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;
use triangle::{write_triangle, RowCount};

#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Number of rows in each triangle to print
    ///
    /// Several counts may be given, for example `triangle 3 4 5`.
    /// Counts must be non-negative integers.
    #[arg(required = true, id = "ROWS", allow_negative_numbers = true)]
    rows: Vec<RowCount>,

    /// Print an empty line between triangles
    #[arg(short, long)]
    separate: bool,

    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .init();

    debug!("CLI: {:?}", cli);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for (index, rows) in cli.rows.iter().enumerate() {
        if cli.separate && index > 0 {
            writeln!(out).context("Unable to write to standard output")?;
        }
        debug!("Rows: {}", rows);
        write_triangle(&mut out, *rows)
            .with_context(|| format!("Unable to write triangle with {} rows", rows))?;
    }
    out.flush().context("Unable to flush standard output")?;

    Ok(())
}
