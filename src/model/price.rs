use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::price_parser::parse_price;
use crate::error::catalog::CatalogError;

/// Dollar price in cents.
///
/// The data files carry prices as display text (`"$49.99"`); that text is parsed once
/// when the catalog is loaded and written back out in the same form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Price {
    pub cents: u64,
}

impl Price {
    pub fn usd(cents: u64) -> Self {
        Price { cents }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.cents / 100, self.cents % 100)
    }
}

impl TryFrom<String> for Price {
    type Error = CatalogError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        parse_price(&value)
    }
}

impl From<Price> for String {
    fn from(price: Price) -> Self {
        price.to_string()
    }
}
