use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use super::metadata::{Meta, DOCUMENT_KEY};
use super::posting::Posting;
use super::summary::{calculate, CurrencySummary};
use super::Flag;

/// A journal entry: a group of postings recorded at a point in time, as
/// delivered by the backend's journal endpoint.
///
/// ```text
/// 2018-02-26 * "Duane Reade" "Eye drops"
///     Expenses:Health:Eyes       10.20 USD
///     Liabilities:CreditCard    -10.20 USD
/// ```
///
/// Whether the postings actually net to zero per currency is asserted
/// upstream by the ledger engine and carried in `is_balanced`; it is never
/// recomputed on this side.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize, TypedBuilder)]
pub struct Transaction {
    /// Identifier assigned by the backend, unique within the journal.
    pub id: String,

    /// Timestamp of the entry.
    pub datetime: DateTime<Utc>,

    #[serde(default)]
    #[builder(default)]
    pub flag: Flag,

    #[serde(default)]
    #[builder(default)]
    pub payee: Option<String>,

    #[serde(default)]
    #[builder(default)]
    pub narration: String,

    #[serde(default)]
    #[builder(default)]
    pub tags: HashSet<String>,

    #[serde(default)]
    #[builder(default)]
    pub links: HashSet<String>,

    /// Asserted by the upstream ledger engine at recording time.
    pub is_balanced: bool,

    #[serde(default)]
    #[builder(default)]
    pub postings: Vec<Posting>,

    #[serde(default)]
    #[builder(default)]
    pub meta: Meta,
}

impl Transaction {
    /// Whether the entry or any of its postings carries an attached document.
    pub fn has_documents(&self) -> bool {
        self.meta.contains_key(DOCUMENT_KEY) || self.postings.iter().any(Posting::has_document)
    }

    /// Net amount of this entry per currency, in first-occurrence order.
    pub fn currency_summary(&self) -> CurrencySummary {
        calculate(self)
    }
}
