use anyhow::{Context, Result};
use ndarray::prelude::*;
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Print the table of the potential scan to `file_path`. The columns are the
/// position, the two adiabatic energies, the nonadiabatic coupling d_12 and
/// the forces on both surfaces.
pub fn write_potential_scan(table: ArrayView2<f64>, file_path: &Path) -> Result<()> {
    let mut string: String =
        String::from("# position\tenergy_1\tenergy_2\tcoupling_12\tforce_1\tforce_2\n");
    for row in table.outer_iter() {
        let line: Vec<String> = row.iter().map(|val| format!("{:.10e}", val)).collect();
        string.push_str(&line.join("\t"));
        string.push('\n');
    }

    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(file_path)
        .with_context(|| format!("unable to open {}", file_path.display()))?;
    let mut stream = BufWriter::new(file);
    stream
        .write_fmt(format_args!("{}", string))
        .with_context(|| format!("unable to write to {}", file_path.display()))?;
    stream.flush()?;
    Ok(())
}
