//! Era- and theme-keyed commentary for feed items.
//!
//! Every item gets exactly one sentence. Births and deaths get an
//! era-keyed sentence unconditionally; other items are tested against a
//! fixed priority order of themes (war > science > exploration >
//! politics > religion > arts) where the first hit wins, and the generic
//! era sentence covers the rest.

use std::collections::BTreeSet;

use regex::Regex;

use event_types::{HistoricalItem, ItemKind};

// ── Era buckets ──────────────────────────────────────────────────────────

/// Coarse historical era, bucketed by year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Era {
    Ancient,
    Medieval,
    EarlyModern,
    Modern,
    Contemporary,
}

impl Era {
    /// Bucket a year. Negative (BC) years land in Ancient.
    pub fn from_year(year: i32) -> Self {
        if year < 500 {
            Self::Ancient
        } else if year < 1400 {
            Self::Medieval
        } else if year < 1700 {
            Self::EarlyModern
        } else if year < 1900 {
            Self::Modern
        } else {
            Self::Contemporary
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ancient => "ancient",
            Self::Medieval => "medieval",
            Self::EarlyModern => "early-modern",
            Self::Modern => "modern",
            Self::Contemporary => "contemporary",
        }
    }
}

// ── Year coercion ────────────────────────────────────────────────────────

/// How to treat feed years that are not plain numbers ("44 BC", "Unknown").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearPolicy {
    /// The original pipeline's behavior: unchecked parsing silently yields
    /// 0, so unknown years are commented as Ancient. Preserved as-is even
    /// though it is arguably a bug in the source material.
    Lenient,
    /// Unknown years get no era; commentary falls back to a neutral
    /// era-independent sentence.
    Strict,
}

/// Lenient coercion: anything that does not parse as an integer becomes 0.
pub fn coerce_year(raw: &str) -> i32 {
    raw.trim().parse().unwrap_or(0)
}

fn era_for(raw_year: &str, policy: YearPolicy) -> Option<Era> {
    match policy {
        YearPolicy::Lenient => Some(Era::from_year(coerce_year(raw_year))),
        YearPolicy::Strict => raw_year.trim().parse().ok().map(Era::from_year),
    }
}

/// Era label for reporting; "unknown" when the strict policy rejects the
/// year.
pub fn era_label(raw_year: &str, policy: YearPolicy) -> &'static str {
    era_for(raw_year, policy)
        .map(|e| e.as_str())
        .unwrap_or("unknown")
}

// ── Themes ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Theme {
    War,
    Science,
    Exploration,
    Politics,
    Religion,
    Arts,
}

/// Priority order: each theme pre-empts everything after it.
const THEME_ORDER: [Theme; 6] = [
    Theme::War,
    Theme::Science,
    Theme::Exploration,
    Theme::Politics,
    Theme::Religion,
    Theme::Arts,
];

impl Theme {
    /// Category labels whose presence triggers this theme.
    fn categories(&self) -> &'static [&'static str] {
        match self {
            Self::War => &["War & Conflict"],
            Self::Science => &["Science & Technology"],
            Self::Exploration => &["Exploration & Discovery"],
            Self::Politics => &["Politics & Government"],
            Self::Religion => &["Religion & Philosophy"],
            Self::Arts => &["Arts & Culture"],
        }
    }
}

// ── Sentence tables ──────────────────────────────────────────────────────

/// Used under the strict year policy when an item's year is unknown.
const UNKNOWN_YEAR_SENTENCE: &str = "A moment whose year the record does not firmly fix.";

fn birth_sentence(era: Era) -> &'static str {
    match era {
        Era::Ancient => "Born in antiquity, a name that has outlived empires.",
        Era::Medieval => "A medieval birth, into a world of courts, cloisters and castles.",
        Era::EarlyModern => "Born in the age of sail and print, when the world was widening.",
        Era::Modern => "Born into the century of steam and revolutions that remade the world.",
        Era::Contemporary => "A birth within living memory, in the world we still inhabit.",
    }
}

fn death_sentence(era: Era) -> &'static str {
    match era {
        Era::Ancient => "An ancient passing, mourned in a world we know only from fragments.",
        Era::Medieval => "A death in the medieval world, marked by bell, book and chronicle.",
        Era::EarlyModern => "An early modern passing, noted in the registers of a changing age.",
        Era::Modern => "A death in the modern age, reported by telegraph and newsprint.",
        Era::Contemporary => "A loss within living memory, still felt today.",
    }
}

/// Era-keyed sentence for a theme. Some tables are sparse; the caller
/// falls back to `theme_fallback` when the era has no entry.
fn theme_era_sentence(theme: Theme, era: Era) -> Option<&'static str> {
    match (theme, era) {
        (Theme::War, Era::Ancient) => {
            Some("Ancient armies met, and whole empires turned on the outcome.")
        }
        (Theme::War, Era::Medieval) => {
            Some("Siegecraft and steel decided the fate of medieval realms.")
        }
        (Theme::War, Era::EarlyModern) => {
            Some("Gunpowder and massed ranks were redrawing the world's borders.")
        }
        (Theme::War, Era::Modern) => {
            Some("Industrial warfare was remaking nations at a terrible price.")
        }
        (Theme::War, Era::Contemporary) => {
            Some("A conflict whose consequences still shape today's headlines.")
        }

        (Theme::Science, Era::EarlyModern) => {
            Some("The scientific revolution was overturning centuries of received wisdom.")
        }
        (Theme::Science, Era::Modern) => {
            Some("Laboratories and learned societies were changing what humans could know.")
        }
        (Theme::Science, Era::Contemporary) => {
            Some("A discovery from the era when science reshapes daily life.")
        }

        (Theme::Exploration, Era::EarlyModern) => {
            Some("The great voyages were stitching distant continents together.")
        }
        (Theme::Exploration, Era::Modern) => {
            Some("The last blank spaces on the map were being filled in.")
        }

        (Theme::Politics, Era::Ancient) => {
            Some("Power changed hands in a world of city-states and god-kings.")
        }
        (Theme::Politics, Era::Medieval) => {
            Some("Crowns, charters and councils shaped the medieval order.")
        }
        (Theme::Politics, Era::EarlyModern) => {
            Some("Dynasties and parliaments contended for a changing world.")
        }
        (Theme::Politics, Era::Modern) => {
            Some("Nations and constitutions were being forged and broken.")
        }
        (Theme::Politics, Era::Contemporary) => {
            Some("A political turn whose effects are still being argued over.")
        }

        (Theme::Religion, Era::Ancient) => {
            Some("Faith and empire were already inseparable in the ancient world.")
        }
        (Theme::Religion, Era::Medieval) => {
            Some("In the medieval centuries, matters of faith were matters of state.")
        }
        (Theme::Religion, Era::EarlyModern) => {
            Some("Reform and counter-reform were splitting the old religious order.")
        }

        (Theme::Arts, Era::EarlyModern) => {
            Some("Patrons and printing presses were carrying art to new audiences.")
        }
        (Theme::Arts, Era::Modern) => {
            Some("The arts were finding mass audiences for the first time.")
        }
        (Theme::Arts, Era::Contemporary) => {
            Some("A cultural moment from the age of recorded everything.")
        }

        _ => None,
    }
}

fn theme_fallback(theme: Theme) -> &'static str {
    match theme {
        Theme::War => "A clash of arms that left its mark on the historical record.",
        Theme::Science => "One more step in humanity's long effort to understand the world.",
        Theme::Exploration => "A journey beyond the edge of the known world.",
        Theme::Politics => "An exercise of power that echoed well beyond its day.",
        Theme::Religion => "A moment where belief bent the course of events.",
        Theme::Arts => "A work of human imagination that outlasted its makers.",
    }
}

fn generic_sentence(era: Era) -> &'static str {
    match era {
        Era::Ancient => "A day from the distant past, surviving in the historical record.",
        Era::Medieval => "A medieval day, preserved by the chroniclers.",
        Era::EarlyModern => "An early modern day, from a world becoming recognizably ours.",
        Era::Modern => "A day from the modern age of headlines and archives.",
        Era::Contemporary => "A recent day, already part of history.",
    }
}

// ── Commentator ──────────────────────────────────────────────────────────

/// Produces one commentary sentence per item.
///
/// Holds the compiled secondary-signal regexes: a theme fires on category
/// membership OR on its regex matching the lowered text, so an item can
/// reach a theme even when the categorizer put it in no matching bucket.
pub struct Commentator {
    policy: YearPolicy,
    re_war: Regex,
    re_science: Regex,
    re_exploration: Regex,
    re_politics: Regex,
    re_religion: Regex,
    re_arts: Regex,
}

impl Commentator {
    pub fn new(policy: YearPolicy) -> Self {
        let re_war =
            Regex::new(r"\b(war|battle|siege|invasion|armies|bombardment)\b").expect("war regex");
        let re_science = Regex::new(
            r"\b(discover(?:y|ed|ies)?|invent(?:ed|ion|or)?|experiment|theorem)\b",
        )
        .expect("science regex");
        let re_exploration = Regex::new(r"\b(expedition|voyage|explorer|circumnavigation)\b")
            .expect("exploration regex");
        let re_politics = Regex::new(r"\b(elected|election|treaty|parliament|president|throne)\b")
            .expect("politics regex");
        let re_religion =
            Regex::new(r"\b(pope|church|faith|pilgrimage|sacred)\b").expect("religion regex");
        let re_arts =
            Regex::new(r"\b(premiere|painting|symphony|novel|poem)\b").expect("arts regex");

        Commentator {
            policy,
            re_war,
            re_science,
            re_exploration,
            re_politics,
            re_religion,
            re_arts,
        }
    }

    fn theme_regex(&self, theme: Theme) -> &Regex {
        match theme {
            Theme::War => &self.re_war,
            Theme::Science => &self.re_science,
            Theme::Exploration => &self.re_exploration,
            Theme::Politics => &self.re_politics,
            Theme::Religion => &self.re_religion,
            Theme::Arts => &self.re_arts,
        }
    }

    fn theme_matches(&self, theme: Theme, categories: &BTreeSet<String>, lowered: &str) -> bool {
        theme
            .categories()
            .iter()
            .any(|c| categories.contains(*c))
            || self.theme_regex(theme).is_match(lowered)
    }

    /// One sentence for an item whose categories have already been
    /// computed. Always non-empty; malformed input degrades to the
    /// fallback branches instead of erroring.
    pub fn commentary(&self, item: &HistoricalItem, categories: &BTreeSet<String>) -> String {
        let era = era_for(&item.year, self.policy);

        // Kind check pre-empts every theme check.
        match item.kind {
            ItemKind::Birth => {
                return era
                    .map(birth_sentence)
                    .unwrap_or(UNKNOWN_YEAR_SENTENCE)
                    .to_string();
            }
            ItemKind::Death => {
                return era
                    .map(death_sentence)
                    .unwrap_or(UNKNOWN_YEAR_SENTENCE)
                    .to_string();
            }
            ItemKind::Event => {}
        }

        let lowered = item.text.to_lowercase();
        for theme in THEME_ORDER {
            if self.theme_matches(theme, categories, &lowered) {
                let sentence = era
                    .and_then(|e| theme_era_sentence(theme, e))
                    .unwrap_or(theme_fallback(theme));
                return sentence.to_string();
            }
        }

        era.map(generic_sentence)
            .unwrap_or(UNKNOWN_YEAR_SENTENCE)
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::categorize::Categorizer;

    fn item(text: &str, year: &str, kind: ItemKind) -> HistoricalItem {
        HistoricalItem {
            text: text.to_string(),
            year: year.to_string(),
            kind,
        }
    }

    fn comment(text: &str, year: &str, kind: ItemKind) -> String {
        let item = item(text, year, kind);
        let cats = Categorizer::new().categorize(&item);
        Commentator::new(YearPolicy::Lenient).commentary(&item, &cats)
    }

    // ── Era bucketing ────────────────────────────────────────────────

    #[test]
    fn test_era_breakpoints() {
        assert_eq!(Era::from_year(499), Era::Ancient);
        assert_eq!(Era::from_year(500), Era::Medieval);
        assert_eq!(Era::from_year(1399), Era::Medieval);
        assert_eq!(Era::from_year(1400), Era::EarlyModern);
        assert_eq!(Era::from_year(1699), Era::EarlyModern);
        assert_eq!(Era::from_year(1700), Era::Modern);
        assert_eq!(Era::from_year(1899), Era::Modern);
        assert_eq!(Era::from_year(1900), Era::Contemporary);
    }

    #[test]
    fn test_bc_years_are_ancient() {
        assert_eq!(Era::from_year(-44), Era::Ancient);
    }

    #[test]
    fn test_lenient_coercion_yields_zero() {
        assert_eq!(coerce_year("Unknown"), 0);
        assert_eq!(coerce_year("44 BC"), 0);
        assert_eq!(coerce_year(" 1969 "), 1969);
    }

    #[test]
    fn test_lenient_unknown_year_lands_in_ancient() {
        // The original pipeline's quirk, preserved on purpose: an
        // "Unknown" year coerces to 0 and reads as ancient.
        let s = comment("a quiet unremarkable entry", "Unknown", ItemKind::Event);
        assert_eq!(s, generic_sentence(Era::Ancient));
    }

    #[test]
    fn test_strict_unknown_year_gets_neutral_sentence() {
        let it = item("a quiet unremarkable entry", "Unknown", ItemKind::Event);
        let cats = Categorizer::new().categorize(&it);
        let s = Commentator::new(YearPolicy::Strict).commentary(&it, &cats);
        assert_eq!(s, UNKNOWN_YEAR_SENTENCE);
    }

    // ── Kind precedence ──────────────────────────────────────────────

    #[test]
    fn test_birth_preempts_theme() {
        // War signals in the text must not override the kind check.
        let s = comment("born during the great war", "1916", ItemKind::Birth);
        assert_eq!(s, birth_sentence(Era::Contemporary));
    }

    #[test]
    fn test_death_sentence_keyed_by_era() {
        let s = comment("died peacefully", "1850", ItemKind::Death);
        assert_eq!(s, death_sentence(Era::Modern));
    }

    // ── Theme priority ───────────────────────────────────────────────

    #[test]
    fn test_war_preempts_science() {
        let s = comment(
            "the war interrupted the laboratory's experiments",
            "1940",
            ItemKind::Event,
        );
        assert_eq!(s, theme_era_sentence(Theme::War, Era::Contemporary).unwrap());
    }

    #[test]
    fn test_science_preempts_politics() {
        let s = comment(
            "the president announced the discovery of a new element",
            "1898",
            ItemKind::Event,
        );
        assert_eq!(s, theme_era_sentence(Theme::Science, Era::Modern).unwrap());
    }

    #[test]
    fn test_secondary_regex_fires_without_category() {
        // "throne" is a politics regex signal but no rule keyword, so the
        // category set is just Miscellaneous; the theme still fires.
        let it = item("the heir took the throne", "1200", ItemKind::Event);
        let cats = Categorizer::new().categorize(&it);
        assert!(cats.contains("Miscellaneous"));
        let s = Commentator::new(YearPolicy::Lenient).commentary(&it, &cats);
        assert_eq!(s, theme_era_sentence(Theme::Politics, Era::Medieval).unwrap());
    }

    #[test]
    fn test_sparse_theme_table_falls_back() {
        // Science has no medieval entry.
        let s = comment(
            "a new science of optics was described",
            "1250",
            ItemKind::Event,
        );
        assert_eq!(s, theme_fallback(Theme::Science));
    }

    #[test]
    fn test_generic_sentence_when_no_theme() {
        let s = comment("a town fair was held", "1875", ItemKind::Event);
        assert_eq!(s, generic_sentence(Era::Modern));
    }

    #[test]
    fn test_commentary_never_empty() {
        let commentator = Commentator::new(YearPolicy::Lenient);
        let categorizer = Categorizer::new();
        for kind in [ItemKind::Event, ItemKind::Birth, ItemKind::Death] {
            for year in ["", "Unknown", "1969", "-44"] {
                let it = item("", year, kind);
                let cats = categorizer.categorize(&it);
                assert!(!commentator.commentary(&it, &cats).is_empty());
            }
        }
    }
}
