use std::collections::BTreeSet;

use event_types::{HistoricalItem, ItemKind};

use crate::rules::{CATEGORY_RULES, CategoryRule};

/// Assigns category labels to feed items from an immutable rule table.
///
/// Categorization is a pure derived view of (text, kind, rule table): no
/// side effects, no error states, and the output set is never empty.
pub struct Categorizer {
    rules: &'static [CategoryRule],
}

impl Categorizer {
    pub fn new() -> Self {
        Self::with_rules(CATEGORY_RULES)
    }

    pub fn with_rules(rules: &'static [CategoryRule]) -> Self {
        Categorizer { rules }
    }

    /// Map an item to its set of category labels.
    ///
    /// Births and deaths are seeded with their kind categories before any
    /// rule runs. A plain event that matches no rule falls back to
    /// "Miscellaneous" so the result is always non-empty.
    pub fn categorize(&self, item: &HistoricalItem) -> BTreeSet<String> {
        let mut categories = BTreeSet::new();

        match item.kind {
            ItemKind::Birth => {
                categories.insert("Births".to_string());
                categories.insert("Famous Persons".to_string());
            }
            ItemKind::Death => {
                categories.insert("Deaths".to_string());
                categories.insert("Famous Persons".to_string());
            }
            ItemKind::Event => {}
        }

        let lowered = item.text.to_lowercase();
        let mut any_rule_matched = false;
        for rule in self.rules {
            if rule.matches(&lowered) {
                categories.insert(rule.name.to_string());
                any_rule_matched = true;
            }
        }

        if !any_rule_matched && !categories.contains("Famous Persons") {
            categories.insert("Miscellaneous".to_string());
        }

        categories
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(text: &str, kind: ItemKind) -> HistoricalItem {
        HistoricalItem {
            text: text.to_string(),
            year: "1900".to_string(),
            kind,
        }
    }

    #[test]
    fn test_birth_seeds_kind_categories() {
        let c = Categorizer::new();
        let cats = c.categorize(&item("nothing matching any rule here", ItemKind::Birth));
        assert!(cats.contains("Births"));
        assert!(cats.contains("Famous Persons"));
        // Seeded births never fall back to Miscellaneous.
        assert!(!cats.contains("Miscellaneous"));
    }

    #[test]
    fn test_death_seeds_kind_categories() {
        let c = Categorizer::new();
        let cats = c.categorize(&item("", ItemKind::Death));
        assert!(cats.contains("Deaths"));
        assert!(cats.contains("Famous Persons"));
    }

    #[test]
    fn test_birth_text_still_gains_theme_categories() {
        let c = Categorizer::new();
        let cats = c.categorize(&item("born during the siege of the city", ItemKind::Birth));
        assert!(cats.contains("Births"));
        assert!(cats.contains("War & Conflict"));
    }

    #[test]
    fn test_exclude_dominance() {
        let c = Categorizer::new();
        let cats = c.categorize(&item("war on poverty funding increased", ItemKind::Event));
        assert!(!cats.contains("War & Conflict"));

        let cats = c.categorize(&item("the war began with an invasion", ItemKind::Event));
        assert!(cats.contains("War & Conflict"));
    }

    #[test]
    fn test_miscellaneous_fallback_for_plain_event() {
        let c = Categorizer::new();
        let cats = c.categorize(&item("quiet day with no notable keywords", ItemKind::Event));
        assert_eq!(cats.len(), 1);
        assert!(cats.contains("Miscellaneous"));
    }

    #[test]
    fn test_empty_text_degrades_to_fallback() {
        let c = Categorizer::new();
        let cats = c.categorize(&item("", ItemKind::Event));
        assert!(cats.contains("Miscellaneous"));
        assert!(!cats.is_empty());
    }

    #[test]
    fn test_multiple_rules_union() {
        let c = Categorizer::new();
        let cats = c.categorize(&item(
            "the expedition's telescope survey discovered a new comet",
            ItemKind::Event,
        ));
        assert!(cats.contains("Exploration & Discovery"));
        assert!(cats.contains("Science & Technology"));
        assert!(!cats.contains("Miscellaneous"));
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let c = Categorizer::new();
        let cats = c.categorize(&item("THE TREATY WAS SIGNED", ItemKind::Event));
        assert!(cats.contains("Politics & Government"));
    }

    #[test]
    fn test_output_never_empty() {
        let c = Categorizer::new();
        for kind in [ItemKind::Event, ItemKind::Birth, ItemKind::Death] {
            for text in ["", "x", "completely unrelated prose"] {
                assert!(!c.categorize(&item(text, kind)).is_empty());
            }
        }
    }
}
