use std::io;
use std::io::Write;

use thiserror::Error;

use ledgerview_core::{calculate, Amount, CurrencySummary, Transaction};

pub use style::{row_markers, AmountStyle, RowMarker};

pub mod style;

#[cfg(test)]
mod tests;

/// Renders journal entries as fixed-width text lines, the textual twin of the
/// viewer's journal table: time, flag, payee/narration, attachment and
/// balance markers, then the per-currency net amounts.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default, Debug)]
pub struct TableRenderer {}

impl TableRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Renders a page of journal entries, one line per entry.
pub fn render<W: Write>(w: &mut W, transactions: &[Transaction]) -> Result<(), TableRendererError> {
    let renderer = TableRenderer::default();
    for transaction in transactions {
        renderer.render(transaction, w)?;
        writeln!(w)?;
    }
    Ok(())
}

#[derive(Error, Debug)]
pub enum TableRendererError {
    #[error("an io error occurred")]
    Io(#[from] io::Error),
}

pub trait Renderer<T, W: Write> {
    type Error;
    fn render(&self, renderable: T, write: &mut W) -> Result<(), Self::Error>;
}

impl<'a, W: Write> Renderer<&'a Transaction, W> for TableRenderer {
    type Error = TableRendererError;
    fn render(&self, transaction: &'a Transaction, write: &mut W) -> Result<(), Self::Error> {
        write!(write, "{}  {}  ", transaction.datetime.format("%H:%M:%S"), transaction.flag)?;
        match &transaction.payee {
            Some(payee) => write!(write, "{} | {}", payee, transaction.narration)?,
            None => write!(write, "{}", transaction.narration)?,
        }
        if transaction.has_documents() {
            write!(write, " [doc]")?;
        }
        for marker in row_markers(transaction) {
            match marker {
                RowMarker::NotBalanced => write!(write, " [unbalanced]")?,
                RowMarker::NeedsReview => write!(write, " [review]")?,
            }
        }
        let summary = calculate(transaction);
        if !summary.is_empty() {
            write!(write, "  ")?;
            self.render(&summary, write)?;
        }
        Ok(())
    }
}

impl<'a, W: Write> Renderer<&'a CurrencySummary, W> for TableRenderer {
    type Error = TableRendererError;
    fn render(&self, summary: &'a CurrencySummary, write: &mut W) -> Result<(), Self::Error> {
        for (i, amount) in summary.values().enumerate() {
            if i > 0 {
                write!(write, ", ")?;
            }
            self.render(amount, write)?;
        }
        Ok(())
    }
}

impl<'a, W: Write> Renderer<&'a Amount, W> for TableRenderer {
    type Error = TableRendererError;
    fn render(&self, amount: &'a Amount, write: &mut W) -> Result<(), Self::Error> {
        // negative amounts already carry their sign in the decimal
        match AmountStyle::for_amount(amount) {
            AmountStyle::Positive => write!(write, "+{}", amount)?,
            AmountStyle::Negative => write!(write, "{}", amount)?,
        }
        Ok(())
    }
}
