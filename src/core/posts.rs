use chrono::{DateTime, Utc};
use log::debug;

use crate::error::catalog::CatalogError;
use crate::model::post::Post;

/// In-memory post list, newest first.
#[derive(Debug, Default)]
pub struct PostBoard {
    posts: Vec<Post>,
}

impl PostBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn add_post(&mut self, title: &str, content: &str) -> Result<&Post, CatalogError> {
        self.add_post_at(title, content, Utc::now())
    }

    /// Both fields must contain something other than whitespace. The text is stored as
    /// entered; trimming only applies to the check.
    pub fn add_post_at(
        &mut self,
        title: &str,
        content: &str,
        now: DateTime<Utc>,
    ) -> Result<&Post, CatalogError> {
        if title.trim().is_empty() || content.trim().is_empty() {
            return Err(CatalogError::BlankPostField);
        }

        let mut id = now.timestamp_millis();
        if let Some(newest) = self.posts.first().and_then(|p| p.id.parse::<i64>().ok()) {
            id = id.max(newest + 1);
        }

        self.posts.insert(
            0,
            Post {
                id: id.to_string(),
                title: title.to_string(),
                content: content.to_string(),
                date: now,
            },
        );
        debug!("added post {id}, {} on board", self.posts.len());
        Ok(&self.posts[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn newest_post_comes_first() {
        let mut board = PostBoard::new();
        assert!(board.is_empty());
        board.add_post_at("First", "hello", at(1_700_000_000)).unwrap();
        board.add_post_at("Second", "again", at(1_700_000_060)).unwrap();

        let titles: Vec<&str> = board.posts().iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["Second", "First"]);
        assert_eq!(board.posts()[1].id, "1700000000000");
    }

    #[test]
    fn blank_fields_are_rejected() {
        let mut board = PostBoard::new();
        let err = board.add_post_at("   ", "body", at(0)).unwrap_err();
        assert!(matches!(err, CatalogError::BlankPostField));
        assert_eq!(err.to_string(), "Please fill out all fields");
        assert!(board.add_post_at("Title", "\n\t", at(0)).is_err());
        assert!(board.is_empty());
    }

    #[test]
    fn ids_stay_unique_within_one_millisecond() {
        let mut board = PostBoard::new();
        let now = at(1_700_000_000);
        board.add_post_at("a", "a", now).unwrap();
        let second = board.add_post_at("b", "b", now).unwrap().id.clone();
        assert_eq!(second, "1700000000001");
    }

    #[test]
    fn text_is_stored_untrimmed() {
        let mut board = PostBoard::new();
        let post = board.add_post_at(" Title ", "Body", at(0)).unwrap();
        assert_eq!(post.title, " Title ");
    }
}
