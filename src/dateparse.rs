use std::sync::LazyLock;

use regex::Regex;

use event_types::ParsedDate;

use crate::months::resolve_month_name;

// ── Input cleaning ─────────────────────────────────────────────────
//
// Real utterance examples from the chat widget:
//   "What happened on August 5?"
//   "events for 5 august 2020"
//   "2020-08-05"
//   "8/5"
//   "Agust 5"        (typo, still resolvable)
//   "march 15th"

static RE_STOP_WORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(on|the|of|in|at|for|about|what|happened|events|history|historical)\b")
        .expect("stop words regex")
});

static RE_ORDINAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{1,2})(?:st|nd|rd|th)\b").expect("ordinal regex"));

static RE_SPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("space regex"));

/// Lowercase, drop chat punctuation and stop words, strip ordinal
/// suffixes, collapse whitespace.
fn clean(input: &str) -> String {
    let lowered = input.trim().to_lowercase();
    let no_punct = lowered.replace(['?', '!'], "");
    let no_stop = RE_STOP_WORDS.replace_all(&no_punct, " ");
    let no_ordinal = RE_ORDINAL.replace_all(&no_stop, "$1");
    RE_SPACE.replace_all(&no_ordinal, " ").trim().to_string()
}

// ── Surface patterns ───────────────────────────────────────────────
//
// Tried in this exact order; the first surface match wins and later
// patterns are never consulted, even when month resolution then fails.
// Patterns overlap in what they can loosely match, so the order is
// load-bearing.

// a. {month-name} {day}[,] {year} — "august 5, 2020", "aug. 5 2020"
static RE_MONTH_DAY_YEAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([a-z]+)\.?\s+(\d{1,2})(?:\s*,\s*|\s+)(\d{4})\b").expect("month-day-year regex")
});

// b. {day} {month-name} {year} — "5 august 2020"
static RE_DAY_MONTH_YEAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(\d{1,2})\s+([a-z]+)\.?\s+(\d{4})\b").expect("day-month-year regex")
});

// c. {month-name} {day} — "august 5"
static RE_MONTH_DAY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([a-z]+)\.?\s+(\d{1,2})\b").expect("month-day regex"));

// d. {day} {month-name} — "5 august"
static RE_DAY_MONTH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{1,2})\s+([a-z]+)\b").expect("day-month regex"));

// e. ISO {year}-{month}-{day} — "2020-08-05"
static RE_ISO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{4})-(\d{1,2})-(\d{1,2})\b").expect("iso regex"));

// f. numeric {month}/{day}[/{year}] — "8/5", "8/5/2020"
static RE_NUMERIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(\d{1,2})/(\d{1,2})(?:/(\d{4}))?\b").expect("numeric regex")
});

// g. bare month name — "august"
static RE_BARE_MONTH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([a-z]+)$").expect("bare month regex"));

// h. bare year — "1969"
static RE_BARE_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})$").expect("bare year regex"));

/// Which surface shape a pattern attempt targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pattern {
    MonthDayYear,
    DayMonthYear,
    MonthDay,
    DayMonth,
    IsoYmd,
    NumericMdy,
    BareMonth,
    BareYear,
}

const PATTERN_ORDER: [Pattern; 8] = [
    Pattern::MonthDayYear,
    Pattern::DayMonthYear,
    Pattern::MonthDay,
    Pattern::DayMonth,
    Pattern::IsoYmd,
    Pattern::NumericMdy,
    Pattern::BareMonth,
    Pattern::BareYear,
];

/// Outcome of one pattern attempt. `Invalid` means the surface shape
/// matched but a month token failed to resolve; per the matching rules
/// that ends the whole parse rather than falling through to later
/// patterns.
enum Attempt {
    Miss,
    Invalid,
    Hit(ParsedDate),
}

fn try_pattern(pattern: Pattern, cleaned: &str) -> Attempt {
    match pattern {
        Pattern::MonthDayYear => match RE_MONTH_DAY_YEAR.captures(cleaned) {
            None => Attempt::Miss,
            Some(caps) => match resolve_month_name(&caps[1]) {
                None => Attempt::Invalid,
                Some(month) => Attempt::Hit(ParsedDate {
                    month: Some(month),
                    day: caps[2].parse().ok(),
                    year: caps[3].parse().ok(),
                }),
            },
        },
        Pattern::DayMonthYear => match RE_DAY_MONTH_YEAR.captures(cleaned) {
            None => Attempt::Miss,
            Some(caps) => match resolve_month_name(&caps[2]) {
                None => Attempt::Invalid,
                Some(month) => Attempt::Hit(ParsedDate {
                    month: Some(month),
                    day: caps[1].parse().ok(),
                    year: caps[3].parse().ok(),
                }),
            },
        },
        Pattern::MonthDay => match RE_MONTH_DAY.captures(cleaned) {
            None => Attempt::Miss,
            Some(caps) => match resolve_month_name(&caps[1]) {
                None => Attempt::Invalid,
                Some(month) => Attempt::Hit(ParsedDate {
                    month: Some(month),
                    day: caps[2].parse().ok(),
                    year: None,
                }),
            },
        },
        Pattern::DayMonth => match RE_DAY_MONTH.captures(cleaned) {
            None => Attempt::Miss,
            Some(caps) => match resolve_month_name(&caps[2]) {
                None => Attempt::Invalid,
                Some(month) => Attempt::Hit(ParsedDate {
                    month: Some(month),
                    day: caps[1].parse().ok(),
                    year: None,
                }),
            },
        },
        Pattern::IsoYmd => match RE_ISO.captures(cleaned) {
            None => Attempt::Miss,
            Some(caps) => Attempt::Hit(ParsedDate {
                month: caps[2].parse::<i32>().ok().map(|m| m - 1),
                day: caps[3].parse().ok(),
                year: caps[1].parse().ok(),
            }),
        },
        Pattern::NumericMdy => match RE_NUMERIC.captures(cleaned) {
            None => Attempt::Miss,
            Some(caps) => Attempt::Hit(ParsedDate {
                month: caps[1].parse::<i32>().ok().map(|m| m - 1),
                day: caps[2].parse().ok(),
                year: caps.get(3).and_then(|y| y.as_str().parse().ok()),
            }),
        },
        Pattern::BareMonth => match RE_BARE_MONTH.captures(cleaned) {
            None => Attempt::Miss,
            Some(caps) => match resolve_month_name(&caps[1]) {
                None => Attempt::Invalid,
                Some(month) => Attempt::Hit(ParsedDate {
                    month: Some(month),
                    day: None,
                    year: None,
                }),
            },
        },
        Pattern::BareYear => match RE_BARE_YEAR.captures(cleaned) {
            None => Attempt::Miss,
            Some(caps) => Attempt::Hit(ParsedDate {
                month: None,
                day: None,
                year: caps[1].parse().ok(),
            }),
        },
    }
}

/// Parse a free-text utterance into a ParsedDate.
///
/// Returns None when no pattern matched, when a matched month token could
/// not be resolved, or when a match populated no field. "No date found"
/// is an expected outcome for the caller to branch on, not an error.
pub fn parse(input: &str) -> Option<ParsedDate> {
    let cleaned = clean(input);
    if cleaned.is_empty() {
        return None;
    }

    for pattern in PATTERN_ORDER {
        match try_pattern(pattern, &cleaned) {
            Attempt::Miss => continue,
            Attempt::Invalid => return None,
            Attempt::Hit(date) => {
                return if date.is_empty() { None } else { Some(date) };
            }
        }
    }

    None
}
