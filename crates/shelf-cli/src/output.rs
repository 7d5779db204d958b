//! Output formatting helpers.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use shelf_core::record::display_heading;
use shelf_core::{Page, Resource};

/// Print a success message.
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Print an error message.
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Print a labeled field.
pub fn field(label: &str, value: &str) {
    println!("{}: {}", label.dimmed(), value);
}

/// Print a value as compact JSON.
pub fn json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string(value)?;
    println!("{}", json);
    Ok(())
}

/// Print a value as pretty-printed JSON.
pub fn json_pretty<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

/// Print records as an aligned table of the type's displayed columns.
pub fn table<R: Resource>(rows: &[&R]) {
    let columns = R::columns();
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            columns
                .iter()
                .map(|column| row.column_text(column).unwrap_or_default())
                .collect()
        })
        .collect();

    let headings: Vec<String> = columns.iter().map(|c| display_heading(c)).collect();
    let widths: Vec<usize> = headings
        .iter()
        .enumerate()
        .map(|(i, heading)| {
            cells
                .iter()
                .map(|row| row[i].chars().count())
                .chain(std::iter::once(heading.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let heading_line = headings
        .iter()
        .zip(&widths)
        .map(|(heading, width)| format!("{:<width$}", heading, width = width))
        .collect::<Vec<_>>()
        .join("  ");
    println!("{}", heading_line.trim_end().bold());

    for row in cells {
        let line = row
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = width))
            .collect::<Vec<_>>()
            .join("  ");
        println!("{}", line.trim_end());
    }
}

/// Print the page position below a table.
pub fn page_footer<T>(page: &Page<T>, shown: usize) {
    eprintln!();
    eprintln!(
        "{}",
        format!(
            "Page {} of {} (total {}, showing {})",
            page.page_index + 1,
            page.page_count().max(1),
            page.total_elements,
            shown
        )
        .dimmed()
    );
}
