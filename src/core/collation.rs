use icu_collator::{Collator, CollatorOptions, Strength};
use log::warn;
use std::cmp::Ordering;

/// Title ordering under the root-locale collation at tertiary strength.
///
/// Accents and case only break ties between otherwise equal letters, and on a case tie
/// lowercase comes first.
pub struct TitleOrder {
    collator: Option<Collator>,
}

impl TitleOrder {
    pub fn new() -> Self {
        let mut options = CollatorOptions::new();
        options.strength = Some(Strength::Tertiary);
        let collator = match Collator::try_new(&Default::default(), options) {
            Ok(collator) => Some(collator),
            Err(err) => {
                warn!("root collator unavailable, ordering titles by case-folded text: {err}");
                None
            }
        };
        TitleOrder { collator }
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        match &self.collator {
            Some(collator) => collator.compare(a, b),
            None => case_folded(a, b),
        }
    }
}

impl Default for TitleOrder {
    fn default() -> Self {
        Self::new()
    }
}

fn case_folded(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| b.cmp(a))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_is_secondary_to_letters() {
        let titles = TitleOrder::new();
        assert_eq!(titles.compare("apple", "Banana"), Ordering::Less);
        assert_eq!(titles.compare("Zebra", "apple"), Ordering::Greater);
        assert_eq!(titles.compare("web", "Web"), Ordering::Less);
        assert_eq!(titles.compare("Web", "Web"), Ordering::Equal);
    }

    #[test]
    fn accented_letters_sort_with_their_base_letter() {
        let titles = TitleOrder::new();
        assert_eq!(titles.compare("Écologie", "Fashion"), Ordering::Less);
        assert_eq!(titles.compare("Écologie", "Zoology"), Ordering::Less);
        assert_eq!(titles.compare("Écologie", "Ecology"), Ordering::Less);
        assert_eq!(titles.compare("resume", "résumé"), Ordering::Less);
    }

    #[test]
    fn fallback_folds_case() {
        assert_eq!(case_folded("apple", "Banana"), Ordering::Less);
        assert_eq!(case_folded("web", "Web"), Ordering::Less);
    }
}
