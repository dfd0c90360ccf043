//! Table printing command

use anyhow::{Context, Result};
use kibo::{Alignment, Table};

const CELL_SEPARATOR: char = ',';

pub fn run(headers: Vec<String>, rows: &[String], vlines: bool, align: &str) -> Result<()> {
    let alignment: Alignment = align.parse()?;

    let mut table = Table::new();
    table.set_show_vlines(vlines);
    table.set_alignment(alignment);
    table.set_headers(headers)?;

    for (i, row) in rows.iter().enumerate() {
        let cells = row
            .split(CELL_SEPARATOR)
            .map(|cell| cell.trim().to_string())
            .collect();
        table
            .append_row(cells)
            .with_context(|| format!("Row {} doesn't fit the table", i + 1))?;
    }

    print!("{table}");
    Ok(())
}
