use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::catalog::CatalogError;
use crate::model::course::Category;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("all"),
            CategoryFilter::Only(category) => write!(f, "{category}"),
        }
    }
}

impl TryFrom<String> for CategoryFilter {
    type Error = CatalogError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        filter.to_string()
    }
}

impl FromStr for CategoryFilter {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(CategoryFilter::All);
        }
        s.parse().map(CategoryFilter::Only)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortOrder {
    #[default]
    Popular,
    PriceAsc,
    PriceDesc,
    NameAsc,
    NameDesc,
}

impl SortOrder {
    pub const ALL: [SortOrder; 5] = [
        SortOrder::Popular,
        SortOrder::PriceAsc,
        SortOrder::PriceDesc,
        SortOrder::NameAsc,
        SortOrder::NameDesc,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            SortOrder::Popular => "popular",
            SortOrder::PriceAsc => "priceAsc",
            SortOrder::PriceDesc => "priceDesc",
            SortOrder::NameAsc => "nameAsc",
            SortOrder::NameDesc => "nameDesc",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::Popular => "Most Popular",
            SortOrder::PriceAsc => "Price: Low to High",
            SortOrder::PriceDesc => "Price: High to Low",
            SortOrder::NameAsc => "Name: A to Z",
            SortOrder::NameDesc => "Name: Z to A",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SortOrder {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortOrder::ALL
            .into_iter()
            .find(|order| order.key() == s)
            .ok_or_else(|| CatalogError::UnknownSortOrder(s.to_string()))
    }
}

/// The user's current browsing choices.
///
/// Values are immutable; the holder swaps in a new value on every input event.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    pub search_query: String,
    pub category_filter: CategoryFilter,
    pub sort_order: SortOrder,
}

impl FilterCriteria {
    pub fn with_search(self, query: &str) -> Self {
        FilterCriteria {
            search_query: query.to_string(),
            ..self
        }
    }

    pub fn with_category(self, category_filter: CategoryFilter) -> Self {
        FilterCriteria {
            category_filter,
            ..self
        }
    }

    pub fn with_sort(self, sort_order: SortOrder) -> Self {
        FilterCriteria { sort_order, ..self }
    }

    /// Clears search text and category. Sort order is kept.
    pub fn reset_filters(self) -> Self {
        FilterCriteria {
            sort_order: self.sort_order,
            ..FilterCriteria::default()
        }
    }

    pub fn is_default(&self) -> bool {
        *self == FilterCriteria::default()
    }
}
