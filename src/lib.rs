pub mod core;
pub mod error;
pub mod model;
pub mod utils;

pub use crate::core::catalog::{Catalog, CatalogView};
pub use crate::core::posts::PostBoard;
pub use crate::error::catalog::CatalogError;
pub use crate::model::course::{Category, Course};
pub use crate::model::criteria::{CategoryFilter, FilterCriteria, SortOrder};
pub use crate::model::post::Post;
pub use crate::model::price::Price;
