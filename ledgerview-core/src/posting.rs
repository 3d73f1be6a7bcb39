use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use super::amount::Amount;
use super::metadata::{Meta, DOCUMENT_KEY};
use super::Account;

/// Represents a transaction posting.  Postings represent a single amount being
/// deposited to or withdrawn from an account.
///
/// ```text
/// 2012-11-03 * "Transfer to account in Canada"
///     Assets:MyBank:Checking            -400.00 USD
///     Assets:FR:SocGen:Checking          436.01 CAD
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize, TypedBuilder)]
pub struct Posting {
    /// Account being posted to.
    pub account: Account,

    /// The amount being posted.
    pub units: Amount,

    #[serde(default)]
    #[builder(default)]
    pub meta: Meta,
}

impl Posting {
    /// Whether this posting carries an attached document in its metadata.
    pub fn has_document(&self) -> bool {
        self.meta.contains_key(DOCUMENT_KEY)
    }
}
