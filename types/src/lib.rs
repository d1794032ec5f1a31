use serde::{Deserialize, Serialize};

// ── Item kind ────────────────────────────────────────────────────────────

/// What sort of entry a feed item is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    #[default]
    Event,
    Birth,
    Death,
}

impl ItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Event => "event",
            Self::Birth => "birth",
            Self::Death => "death",
        }
    }
}

// ── Feed item ────────────────────────────────────────────────────────────

/// One historical entry from the "on this day" feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoricalItem {
    pub text: String,
    /// Year as delivered by the feed. Usually plain digits ("1969"), but
    /// the upstream data also carries forms like "44 BC" and "Unknown".
    pub year: String,
    #[serde(default)]
    pub kind: ItemKind,
}

// ── Parsed date ──────────────────────────────────────────────────────────

/// A date extracted from a free-text utterance.
///
/// Month is 0-based (0 = January). Absent fields were simply not present
/// in the utterance; defaulting them to "today" belongs to the validation
/// step, not the parser. Numeric surface forms can produce out-of-range
/// values (e.g. "0/5" yields month -1) which validation rejects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedDate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

impl ParsedDate {
    /// True if no field was populated.
    pub fn is_empty(&self) -> bool {
        self.month.is_none() && self.day.is_none() && self.year.is_none()
    }
}

/// A fully populated date, after absent fields were defaulted to "today".
/// Month stays 0-based; the 1-based conversion for URLs is the caller's
/// responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedDate {
    pub month: i32,
    pub day: u32,
    pub year: i32,
}

// ── Annotated output ─────────────────────────────────────────────────────

/// A feed item with its derived annotations attached. Categorization is a
/// computed view; the source item is never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotatedItem {
    pub text: String,
    pub year: String,
    pub kind: ItemKind,
    /// Derived category labels, sorted for stable output.
    pub categories: Vec<String>,
    pub commentary: String,
}

// ── Day feed containers ──────────────────────────────────────────────────

/// One calendar day's feed as it arrives on disk. Month and day are
/// 1-based in the file, matching the upstream feed convention.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayFeed {
    pub month: u32,
    pub day: u32,
    pub items: Vec<HistoricalItem>,
}

/// One calendar day after annotation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotatedDay {
    pub month: u32,
    pub day: u32,
    pub items: Vec<AnnotatedItem>,
}
