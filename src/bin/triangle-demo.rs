use std::io::{self, IsTerminal, Write};

use anyhow::{Context, Result};
use log::debug;
use triangle::{print_triangle, write_triangle, write_triangle_incremental, RowCount};
use yansi::Paint;

fn main() -> Result<()> {
    env_logger::init();

    if !io::stdout().is_terminal() {
        Paint::disable();
    }

    println!("{}", Paint::new("=== N-Triangle Pattern ===").bold());
    for rows in [3, 4, 5].map(RowCount::new) {
        println!("\nTriangle pattern for n={}:", rows);
        print_triangle(rows).with_context(|| format!("Unable to print triangle for n={}", rows))?;
    }

    let rows = RowCount::new(4);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    debug!("Join method, rows: {}", rows);
    writeln!(out, "\n{}", Paint::new("=== Using Join Method ===").bold())?;
    writeln!(out, "\nTriangle pattern for n={} (join):", rows)?;
    write_triangle(&mut out, rows).context("Join method failed")?;

    debug!("Incremental method, rows: {}", rows);
    writeln!(out, "\n{}", Paint::new("=== Using Incremental Method ===").bold())?;
    writeln!(out, "\nTriangle pattern for n={} (incremental):", rows)?;
    write_triangle_incremental(&mut out, rows).context("Incremental method failed")?;

    out.flush()?;
    Ok(())
}
