//! Static taxonomy of topical category rules.
//!
//! Each rule is an include/exclude keyword set defining one category
//! bucket. The table is immutable configuration, fixed at process start;
//! the categorizer takes it as input rather than reaching into mutable
//! globals.

/// One topical bucket.
///
/// Keywords are lowercase substrings tested against the lowered item text.
/// An exclude hit always wins over an include hit for the same rule:
/// "war on poverty" must never land in War & Conflict even though it
/// contains "war".
pub struct CategoryRule {
    pub name: &'static str,
    pub include: &'static [&'static str],
    pub exclude: &'static [&'static str],
}

impl CategoryRule {
    /// Test this rule against an already-lowercased text. Exclude keywords
    /// are checked first and short-circuit the include check.
    pub fn matches(&self, lowered: &str) -> bool {
        if self.exclude.iter().any(|k| lowered.contains(k)) {
            return false;
        }
        self.include.iter().any(|k| lowered.contains(k))
    }
}

/// The configured taxonomy.
///
/// Evaluation order does not affect categorization (the result is a set
/// union); the order here only fixes how the `rules` inventory prints.
/// Several include entries are deliberate stems ("elect", "philosoph") so
/// one keyword covers the whole word family.
pub static CATEGORY_RULES: &[CategoryRule] = &[
    CategoryRule {
        name: "War & Conflict",
        include: &[
            "war", "battle", "siege", "invasion", "invade", "army", "troops", "military",
            "revolt", "rebellion", "uprising", "bombing", "armistice", "surrender",
        ],
        exclude: &[
            "war on poverty",
            "war on drugs",
            "price war",
            "trade war",
            "war of words",
        ],
    },
    CategoryRule {
        name: "Politics & Government",
        include: &[
            "elect", "president", "parliament", "congress", "treaty", "constitution",
            "prime minister", "government", "senate", "monarch", "coronation", "abdicat",
            "independence", "republic",
        ],
        exclude: &["club president", "company president"],
    },
    CategoryRule {
        name: "Science & Technology",
        include: &[
            "science", "discover", "invent", "patent", "physics", "chemistry", "astronom",
            "telescope", "vaccine", "computer", "laboratory", "spacecraft", "satellite",
        ],
        exclude: &["science fiction"],
    },
    CategoryRule {
        name: "Exploration & Discovery",
        include: &[
            "expedition", "explorer", "voyage", "circumnavigat", "north pole", "south pole",
            "summit", "new world", "uncharted",
        ],
        exclude: &[],
    },
    CategoryRule {
        name: "Religion & Philosophy",
        include: &[
            "pope", "church", "cathedral", "bishop", "saint", "monastery", "mosque",
            "temple", "islam", "buddhis", "philosoph", "theolog", "reformation", "crusade",
        ],
        exclude: &["temple university", "shirley temple"],
    },
    CategoryRule {
        name: "Arts & Culture",
        include: &[
            "painting", "opera", "symphony", "premiere", "novel", "poet", "theatre",
            "theater", "museum", "composer", "sculpture", "ballet", "literature",
        ],
        exclude: &["soap opera"],
    },
    CategoryRule {
        name: "Disasters & Accidents",
        include: &[
            "earthquake", "flood", "hurricane", "typhoon", "eruption", "tsunami", "famine",
            "plague", "epidemic", "pandemic", "shipwreck", "derail", "sank", "crash",
        ],
        exclude: &["market crash"],
    },
    CategoryRule {
        name: "Sports",
        include: &[
            "olympic", "world cup", "championship", "tournament", "marathon", "grand prix",
            "world record", "stadium",
        ],
        exclude: &[],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exclude_wins_over_include() {
        let rule = &CATEGORY_RULES[0];
        assert_eq!(rule.name, "War & Conflict");
        assert!(rule.matches("the war began with an invasion"));
        assert!(!rule.matches("war on poverty funding increased"));
    }

    #[test]
    fn test_empty_exclude_list_is_allowed() {
        let sports = CATEGORY_RULES
            .iter()
            .find(|r| r.name == "Sports")
            .unwrap();
        assert!(sports.exclude.is_empty());
        assert!(sports.matches("the first modern olympic games opened"));
    }

    #[test]
    fn test_every_exclude_overlaps_an_include() {
        // Sanity on the table itself: an exclude keyword that no include
        // keyword can ever fire on is dead configuration.
        for rule in CATEGORY_RULES {
            for ex in rule.exclude {
                assert!(
                    rule.include.iter().any(|inc| ex.contains(inc)),
                    "rule '{}': exclude '{}' overlaps no include keyword",
                    rule.name,
                    ex
                );
            }
        }
    }

    #[test]
    fn test_stem_keywords_cover_word_family() {
        let politics = CATEGORY_RULES
            .iter()
            .find(|r| r.name == "Politics & Government")
            .unwrap();
        assert!(politics.matches("she was elected to the senate"));
        assert!(politics.matches("the general election was held"));
    }
}
