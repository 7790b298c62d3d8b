use crate::core::catalog::Catalog;
use crate::error::catalog::CatalogError;

const COURSES_JSON: &str = include_str!("../../data/courses.json");

/// The bundled course list shown when no catalog file is given.
pub fn catalog() -> Result<Catalog, CatalogError> {
    Catalog::from_json(COURSES_JSON)
}
