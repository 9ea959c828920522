//! File processing: read tokens line by line, expand, write the result.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use color_eyre::eyre::Result;

use crate::expand::expand;

/// Read `input` and expand every line into individual addresses,
/// preserving input order.
///
/// Lines are trimmed before expansion. A blank line trims to the empty
/// string, which fails to parse and is carried through as an empty
/// entry, so blank input lines reappear as blank output lines.
pub fn process(input: &Path) -> Result<Vec<String>> {
    let file = File::open(input)?;
    let reader = BufReader::new(file);

    let mut expanded = Vec::new();
    for line in reader.lines() {
        let line = line?;
        expanded.extend(expand(line.trim()));
    }

    log::debug!("Expanded {} into {} addresses", input.display(), expanded.len());
    Ok(expanded)
}

/// Write the expanded list to `output`, one address per line, newline
/// after every entry including the last. Overwrites any existing file.
pub fn write_list(output: &Path, ips: &[String]) -> Result<()> {
    let mut w = BufWriter::new(File::create(output)?);
    for ip in ips {
        writeln!(w, "{}", ip)?;
    }
    w.flush()?;

    Ok(())
}
