use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use super::Currency;

/// A number of units of a certain currency.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize, TypedBuilder)]
pub struct Amount {
    /// The value of the amount.
    pub num: Decimal,

    /// The currency of the amount.
    pub currency: Currency,
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.num, self.currency)
    }
}
