mod categorize;
mod commentary;
mod dateparse;
mod feed;
mod months;
mod rules;
mod validate;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use event_types::{AnnotatedDay, AnnotatedItem, ParsedDate, ResolvedDate};

use categorize::Categorizer;
use commentary::{Commentator, YearPolicy};

const OUTPUT_DIR: &str = "output";

#[derive(Parser)]
#[command(name = "event_annotate", about = "On-this-day historical events annotator")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Annotate a day-feed file or directory → output/annotated.json
    Annotate {
        /// Path to a day-feed .json file or a directory of them
        #[arg(default_value = "data")]
        path: PathBuf,
        /// Treat non-numeric feed years as unknown instead of year 0
        #[arg(long)]
        strict_years: bool,
    },
    /// Parse a free-text date utterance, e.g. "what happened on August 5"
    Parse {
        utterance: Vec<String>,
    },
    /// Print the configured category rule inventory
    Rules,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Annotate { path, strict_years }) => run_annotate(&path, strict_years),
        Some(Command::Parse { utterance }) => run_parse(&utterance),
        Some(Command::Rules) => run_rules(),
        // Default: annotate the conventional feed directory
        None => run_annotate(Path::new("data"), false),
    }
}

// ═══════════════════════════════════════════════════════════════════════
//  OUTPUT FILE HELPERS
// ═══════════════════════════════════════════════════════════════════════

fn write_json<T: serde::Serialize>(name: &str, data: &T) {
    let path = Path::new(OUTPUT_DIR).join(name);
    let json = serde_json::to_string_pretty(data).expect("JSON serialization failed");
    std::fs::write(&path, &json).unwrap_or_else(|e| panic!("cannot write {}: {e}", path.display()));
    eprintln!("  {} ({} bytes)", path.display(), json.len());
}

// ═══════════════════════════════════════════════════════════════════════
//  PARSE MODE: one utterance → structured date on stdout
// ═══════════════════════════════════════════════════════════════════════

fn run_parse(args: &[String]) {
    let raw = args.join(" ");

    let parsed = match dateparse::parse(&raw) {
        Some(p) => p,
        None => {
            // Expected outcome, not an error: the chat layer answers
            // "couldn't understand" off this.
            eprintln!("No date found in: {raw}");
            return;
        }
    };

    let today = chrono::Local::now().date_naive();
    let resolved = validate::resolve(&parsed, today);
    let valid = validate::is_valid(&resolved, today);

    #[derive(serde::Serialize)]
    struct ParseOutput {
        input: String,
        parsed: ParsedDate,
        resolved: ResolvedDate,
        /// 1-based month for building redirect URLs.
        url_month: i32,
        display: String,
        valid: bool,
    }

    let display = format!(
        "{} {}, {}",
        months::month_full_name(resolved.month).unwrap_or("?"),
        resolved.day,
        resolved.year
    );

    let output = ParseOutput {
        input: raw,
        parsed,
        url_month: resolved.month + 1,
        resolved,
        display,
        valid,
    };

    let json = serde_json::to_string_pretty(&output).expect("JSON serialization");
    println!("{json}");
}

// ═══════════════════════════════════════════════════════════════════════
//  RULES MODE: print the configured taxonomy
// ═══════════════════════════════════════════════════════════════════════

fn run_rules() {
    println!("Category rules ({}):", rules::CATEGORY_RULES.len());
    for rule in rules::CATEGORY_RULES {
        println!(
            "  {}: {} include / {} exclude keywords",
            rule.name,
            rule.include.len(),
            rule.exclude.len()
        );
    }
    println!("\nMonth table: {} entries", months::MONTH_TABLE.len());
}

// ═══════════════════════════════════════════════════════════════════════
//  ANNOTATE MODE: full feed processing → output/annotated.json
// ═══════════════════════════════════════════════════════════════════════

fn run_annotate(path: &Path, strict_years: bool) {
    eprintln!("Loading day feeds from: {}", path.display());

    let feeds = feed::load_feeds(path);
    if feeds.is_empty() {
        eprintln!("No day feeds found under {}", path.display());
        std::process::exit(1);
    }
    eprintln!("Found {} day feed(s)", feeds.len());
    for f in &feeds {
        eprintln!(
            "  {:02}-{:02}: {} ({} items)",
            f.feed.month,
            f.feed.day,
            f.path.display(),
            f.feed.items.len()
        );
    }

    let policy = if strict_years {
        YearPolicy::Strict
    } else {
        YearPolicy::Lenient
    };
    let categorizer = Categorizer::new();
    let commentator = Commentator::new(policy);

    let mut annotated_days = Vec::new();
    let mut by_kind: std::collections::HashMap<&'static str, usize> =
        std::collections::HashMap::new();
    let mut by_category: std::collections::HashMap<String, usize> =
        std::collections::HashMap::new();
    let mut by_era: std::collections::HashMap<&'static str, usize> =
        std::collections::HashMap::new();
    let mut total_items = 0usize;

    for f in &feeds {
        let mut items = Vec::new();
        for item in &f.feed.items {
            let categories = categorizer.categorize(item);
            let commentary_text = commentator.commentary(item, &categories);

            total_items += 1;
            *by_kind.entry(item.kind.as_str()).or_insert(0) += 1;
            *by_era
                .entry(commentary::era_label(&item.year, policy))
                .or_insert(0) += 1;
            for c in &categories {
                *by_category.entry(c.clone()).or_insert(0) += 1;
            }

            items.push(AnnotatedItem {
                text: item.text.clone(),
                year: item.year.clone(),
                kind: item.kind,
                categories: categories.into_iter().collect(),
                commentary: commentary_text,
            });
        }
        annotated_days.push(AnnotatedDay {
            month: f.feed.month,
            day: f.feed.day,
            items,
        });
    }

    // ── Print statistics ───────────────────────────────────────────
    eprintln!("\n══════════════════════════════════════════");
    eprintln!("  FEED STATISTICS");
    eprintln!("══════════════════════════════════════════");

    eprintln!("\n{} items across {} day(s)", total_items, feeds.len());

    eprintln!("\nBy kind:");
    for kind in ["event", "birth", "death"] {
        if let Some(count) = by_kind.get(kind) {
            eprintln!("  {kind}: {count}");
        }
    }

    let mut category_counts: Vec<_> = by_category.iter().collect();
    category_counts.sort_by_key(|(_, c)| std::cmp::Reverse(**c));
    eprintln!("\nBy category:");
    for (category, count) in &category_counts {
        eprintln!("  {category}: {count}");
    }

    let mut era_counts: Vec<_> = by_era.iter().collect();
    era_counts.sort_by_key(|(_, c)| std::cmp::Reverse(**c));
    eprintln!("\nBy era:");
    for (era, count) in &era_counts {
        eprintln!("  {era}: {count}");
    }

    // Sample annotations
    eprintln!("\nSample annotations (first 10):");
    for item in annotated_days.iter().flat_map(|d| &d.items).take(10) {
        eprintln!(
            "  [{}] {} — {}",
            item.categories.join(", "),
            item.text,
            item.commentary
        );
    }

    // ── Write output ───────────────────────────────────────────────
    eprintln!("\n══════════════════════════════════════════");
    eprintln!("  WRITING OUTPUT FILES");
    eprintln!("══════════════════════════════════════════\n");

    std::fs::create_dir_all(OUTPUT_DIR).expect("cannot create output/");
    write_json("annotated.json", &annotated_days);

    eprintln!("\nDone. Try:");
    eprintln!("  cargo run -- parse \"what happened on august 5\"");
    eprintln!("  cargo run -- rules");
}
