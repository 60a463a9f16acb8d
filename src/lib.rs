use std::{
    error::Error,
    fmt,
    io::{self, Write},
    str::FromStr,
};

use log::trace;

/// Number of rows in a triangle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct RowCount(usize);

impl RowCount {
    pub fn new(rows: usize) -> RowCount {
        RowCount(rows)
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl FromStr for RowCount {
    type Err = InvalidRowCount;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        // Parse as signed so `-3` is reported as negative rather than malformed
        let rows: i64 = input
            .trim()
            .parse()
            .map_err(|_| InvalidRowCount::new(input))?;
        RowCount::try_from(rows).map_err(|_| InvalidRowCount::new(input))
    }
}

impl TryFrom<i64> for RowCount {
    type Error = InvalidRowCount;

    fn try_from(rows: i64) -> Result<Self, Self::Error> {
        usize::try_from(rows)
            .map(RowCount)
            .map_err(|_| InvalidRowCount::new(rows.to_string()))
    }
}

impl fmt::Display for RowCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Row count that is negative or not an integer at all
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvalidRowCount {
    input: String,
}

impl InvalidRowCount {
    fn new(input: impl Into<String>) -> InvalidRowCount {
        InvalidRowCount {
            input: input.into(),
        }
    }

    /// The rejected input, as given
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for InvalidRowCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid row count `{}`, expected a non-negative integer",
            self.input
        )
    }
}

impl Error for InvalidRowCount {}

/// Rows of the triangle, without line terminators
///
/// Row `i` (1-indexed) holds the numbers `1..=i` joined by single spaces.
pub fn triangle_rows(rows: RowCount) -> impl Iterator<Item = String> {
    (1..=rows.get()).map(|i| {
        (1..=i)
            .map(|j| j.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    })
}

/// Write a triangle of `rows` lines to `out`
pub fn write_triangle<W: Write>(out: &mut W, rows: RowCount) -> io::Result<()> {
    for row in triangle_rows(rows) {
        trace!("Row: {}", row);
        writeln!(out, "{}", row)?;
    }
    Ok(())
}

/// Write a triangle one number at a time
///
/// Produces the same bytes as [`write_triangle`] without building each row
/// first. Kept as a reference for the join-based version.
pub fn write_triangle_incremental<W: Write>(out: &mut W, rows: RowCount) -> io::Result<()> {
    for i in 1..=rows.get() {
        for j in 1..=i {
            if j > 1 {
                write!(out, " ")?;
            }
            write!(out, "{}", j)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Print a triangle of `rows` lines to standard output
pub fn print_triangle(rows: RowCount) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_triangle(&mut out, rows)?;
    out.flush()
}
