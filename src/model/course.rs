use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::catalog::CatalogError;
use crate::model::price::Price;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Programming,
    #[serde(rename = "Data Science")]
    DataScience,
    Design,
    Business,
    Marketing,
    #[serde(rename = "Personal Development")]
    PersonalDevelopment,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Programming,
        Category::DataScience,
        Category::Design,
        Category::Business,
        Category::Marketing,
        Category::PersonalDevelopment,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Programming => "Programming",
            Category::DataScience => "Data Science",
            Category::Design => "Design",
            Category::Business => "Business",
            Category::Marketing => "Marketing",
            Category::PersonalDevelopment => "Personal Development",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = CatalogError;

    /// Labels match exactly, as they are shown in the category selector.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.label() == s)
            .ok_or_else(|| CatalogError::UnknownCategory(s.to_string()))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: Price,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub duration: String,
    pub level: String,
    pub students: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_labels_round_trip_through_from_str() {
        for category in Category::ALL {
            assert_eq!(category.label().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn category_match_is_exact() {
        assert!("design".parse::<Category>().is_err());
        assert!("DataScience".parse::<Category>().is_err());
    }

    #[test]
    fn course_reads_camel_case_json() {
        let json = r#"{
            "id": "4",
            "title": "UX/UI Design Principles",
            "description": "Create beautiful and functional user interfaces.",
            "price": "$54.99",
            "category": "Design",
            "imageUrl": "https://example.com/ux.jpg",
            "duration": "7 weeks",
            "level": "Beginner",
            "students": 870
        }"#;
        let course: Course = serde_json::from_str(json).unwrap();
        assert_eq!(course.price, Price::usd(5499));
        assert_eq!(course.category, Category::Design);
        assert_eq!(course.image_url.as_deref(), Some("https://example.com/ux.jpg"));
    }

    #[test]
    fn image_url_is_optional() {
        let json = r#"{"id":"x","title":"t","description":"d","price":"$1",
            "category":"Business","duration":"1 week","level":"Beginner","students":0}"#;
        let course: Course = serde_json::from_str(json).unwrap();
        assert!(course.image_url.is_none());
    }
}
