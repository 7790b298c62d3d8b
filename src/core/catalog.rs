use log::debug;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashSet;
use std::path::Path;

use crate::core::collation::TitleOrder;
use crate::error::catalog::CatalogError;
use crate::model::course::Course;
use crate::model::criteria::{FilterCriteria, SortOrder};

/// A fixed list of courses for one browsing session.
#[derive(Clone, Debug)]
pub struct Catalog {
    courses: Vec<Course>,
}

/// Filtered and sorted courses for one set of criteria.
#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogView<'a> {
    pub courses: Vec<&'a Course>,
    pub match_count: usize,
    pub total_count: usize,
}

impl CatalogView<'_> {
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    pub fn summary(&self) -> String {
        format!("Showing {} of {} courses", self.match_count, self.total_count)
    }
}

impl Catalog {
    pub fn from_courses(courses: Vec<Course>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for course in &courses {
            if !seen.insert(course.id.as_str()) {
                return Err(CatalogError::DuplicateId(course.id.clone()));
            }
        }
        Ok(Catalog { courses })
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let courses: Vec<Course> = serde_json::from_str(json)?;
        Self::from_courses(courses)
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        debug!("loading catalog from {}", path.display());
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json(&json)?;
        debug!("loaded {} courses", catalog.len());
        Ok(catalog)
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&Course> {
        self.courses.iter().find(|course| course.id == id)
    }

    /// Derives the view for `criteria`.
    ///
    /// A course is kept when the lower-cased query occurs in its title or description
    /// and its category passes the filter. The survivors are then ordered by the sort
    /// order; the sort is stable, so courses with equal keys keep catalog order.
    pub fn derive_view(&self, criteria: &FilterCriteria) -> CatalogView<'_> {
        let query = criteria.search_query.to_lowercase();
        let mut courses: Vec<&Course> = self
            .courses
            .iter()
            .filter(|course| matches_query(course, &query))
            .filter(|course| criteria.category_filter.matches(course.category))
            .collect();

        let titles = TitleOrder::new();
        courses.sort_by(|a, b| compare(criteria.sort_order, &titles, a, b));

        debug!(
            "derived view: {} of {} courses (query={:?}, category={}, sort={})",
            courses.len(),
            self.courses.len(),
            criteria.search_query,
            criteria.category_filter,
            criteria.sort_order
        );

        CatalogView {
            match_count: courses.len(),
            total_count: self.courses.len(),
            courses,
        }
    }
}

fn matches_query(course: &Course, query: &str) -> bool {
    course.title.to_lowercase().contains(query) || course.description.to_lowercase().contains(query)
}

// Descending orders swap the operands instead of reversing, which keeps ties stable.
fn compare(order: SortOrder, titles: &TitleOrder, a: &Course, b: &Course) -> Ordering {
    match order {
        SortOrder::Popular => b.students.cmp(&a.students),
        SortOrder::PriceAsc => a.price.cents.cmp(&b.price.cents),
        SortOrder::PriceDesc => b.price.cents.cmp(&a.price.cents),
        SortOrder::NameAsc => titles.compare(&a.title, &b.title),
        SortOrder::NameDesc => titles.compare(&b.title, &a.title),
    }
}
