//! Printing a rendered cart.

use std::io::Write;

use cart_state::CartView;
use thiserror::Error;

/// Errors that can occur while printing.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to render HTML: {0}")]
    Render(#[from] askama::Error),
}

/// Output flavour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// One line per item plus a summary line.
    #[default]
    Text,
    /// The cart table as HTML.
    Html,
}

/// Write the view in the requested format.
///
/// # Errors
///
/// Returns `OutputError` if writing or HTML rendering fails.
pub fn write_view(out: &mut impl Write, view: &CartView, format: Format) -> Result<(), OutputError> {
    match format {
        Format::Text => write_text(out, view)?,
        Format::Html => writeln!(out, "{}", view.to_html()?)?,
    }
    Ok(())
}

fn write_text(out: &mut impl Write, view: &CartView) -> std::io::Result<()> {
    if view.rows.is_empty() {
        writeln!(out, "(cart is empty)")?;
    }
    for row in &view.rows {
        writeln!(
            out,
            "{}\t{}\t{}\t{} x {}\t{}",
            row.id, row.name, row.image_ref, row.unit_price, row.quantity, row.line_total
        )?;
    }
    writeln!(
        out,
        "Items: {}\tTotal: {}",
        view.summary.count, view.summary.total_display
    )
}
