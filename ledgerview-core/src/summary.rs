use indexmap::map::Iter;
use indexmap::IndexMap;
use rust_decimal::Decimal;

use super::amount::Amount;
use super::transaction::Transaction;
use super::Currency;

/// Net amount of a journal entry per currency.
///
/// One entry per distinct currency occurring among the postings, keyed in
/// first-occurrence order.  Currencies whose postings cancel out are kept at
/// zero rather than dropped: a zero net in one currency next to nonzero nets
/// in others is a legitimate partially-offsetting multi-currency entry.
///
/// A summary is a projection of one `Transaction` snapshot.  It is rebuilt
/// on every render and never mutated or persisted.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CurrencySummary {
    totals: IndexMap<Currency, Amount>,
}

impl CurrencySummary {
    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    /// Net amount in the given currency, if any posting used it.
    pub fn get(&self, currency: &str) -> Option<&Amount> {
        self.totals.get(currency)
    }

    /// `(currency, net amount)` pairs in first-occurrence order.
    pub fn iter(&self) -> Iter<'_, Currency, Amount> {
        self.totals.iter()
    }

    /// Net amounts in first-occurrence order.
    pub fn values(&self) -> impl Iterator<Item = &Amount> {
        self.totals.values()
    }
}

impl<'a> IntoIterator for &'a CurrencySummary {
    type Item = (&'a Currency, &'a Amount);
    type IntoIter = Iter<'a, Currency, Amount>;

    fn into_iter(self) -> Self::IntoIter {
        self.totals.iter()
    }
}

/// Reduces a journal entry's postings to their per-currency net.
///
/// Postings are folded in order: the first posting in a currency inserts
/// that currency with a zero total, then every posting in it (including the
/// first) adds its signed amount with exact decimal arithmetic.  Addition
/// keeps the maximum scale seen among the summed values, so fractional-cent
/// amounts accumulate without drift.  Entries are neither sorted nor
/// converted between currencies, and zero nets are retained.
///
/// An entry with no postings yields an empty summary.
pub fn calculate(transaction: &Transaction) -> CurrencySummary {
    let mut totals: IndexMap<Currency, Amount> = IndexMap::new();
    for posting in &transaction.postings {
        let units = &posting.units;
        let entry = totals.entry(units.currency.clone()).or_insert_with(|| Amount {
            num: Decimal::ZERO,
            currency: units.currency.clone(),
        });
        entry.num += units.num;
    }
    CurrencySummary { totals }
}
