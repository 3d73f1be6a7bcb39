use ledgerview_core::{Amount, Transaction};
use rust_decimal::Decimal;

/// Visual tone of a rendered amount, decided by sign alone.  Exactly zero is
/// non-negative and takes the positive tone.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum AmountStyle {
    Positive,
    Negative,
}

impl AmountStyle {
    pub fn for_number(num: &Decimal) -> Self {
        if *num < Decimal::ZERO {
            AmountStyle::Negative
        } else {
            AmountStyle::Positive
        }
    }

    pub fn for_amount(amount: &Amount) -> Self {
        Self::for_number(&amount.num)
    }
}

/// Row-level markers of a journal line.  The two are decided independently;
/// a line can carry both.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum RowMarker {
    /// The upstream ledger engine did not assert this entry as balanced.
    NotBalanced,
    /// The entry is flagged `!` and awaits review.
    NeedsReview,
}

pub fn row_markers(transaction: &Transaction) -> Vec<RowMarker> {
    let mut markers = Vec::new();
    if !transaction.is_balanced {
        markers.push(RowMarker::NotBalanced);
    }
    if transaction.flag.is_warning() {
        markers.push(RowMarker::NeedsReview);
    }
    markers
}
