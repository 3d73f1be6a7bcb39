pub use amount::Amount;
pub use flags::Flag;
pub use metadata::{Meta, DOCUMENT_KEY};
pub use posting::Posting;
pub use summary::{calculate, CurrencySummary};
pub use transaction::Transaction;

pub mod amount;
pub mod flags;
pub mod metadata;
pub mod posting;
pub mod summary;
pub mod transaction;

/// Currency code of an amount, e.g. `USD` or `CNY`.
pub type Currency = String;

/// Full, colon-separated name of a ledger account, e.g. `Assets:Bank:Checking`.
/// The backend delivers account names already joined.
pub type Account = String;
