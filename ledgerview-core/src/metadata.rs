use std::collections::HashMap;

/// Metadata attached to journal entries and their postings.
///
/// In the journal text metadata appears as indented key/value lines below a
/// directive:
///
/// ```text
/// 2023-03-01 * "Cafe Select" "double espresso"
///     document: "receipts/2023-03-01-espresso.jpg"
///     Expenses:Food:Coffee    4.50 USD
///     Assets:Cash            -4.50 USD
/// ```
pub type Meta = HashMap<String, String>;

/// Meta key whose presence marks an attached document file.
pub const DOCUMENT_KEY: &str = "document";
