use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use event_types::DayFeed;

/// A day-feed file discovered on disk.
#[derive(Debug)]
pub struct FeedFile {
    pub path: PathBuf,
    pub feed: DayFeed,
}

/// Load day feeds from `path`: either a single `.json` file or a
/// directory tree of them (one file per calendar day, e.g. `08-05.json`).
///
/// Unreadable or non-conforming files get a stderr note and are skipped;
/// a partial corpus is better than no run.
pub fn load_feeds(path: &Path) -> Vec<FeedFile> {
    let mut feeds = Vec::new();

    if path.is_file() {
        if let Some(feed) = load_feed_file(path) {
            feeds.push(feed);
        }
        return feeds;
    }

    for entry in WalkDir::new(path).into_iter().filter_map(|e| e.ok()) {
        let p = entry.path();
        if p.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }
        if let Some(feed) = load_feed_file(p) {
            feeds.push(feed);
        }
    }

    // Calendar order, independent of directory traversal order.
    feeds.sort_by_key(|f| (f.feed.month, f.feed.day));
    feeds
}

fn load_feed_file(path: &Path) -> Option<FeedFile> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Cannot read {}: {e}", path.display());
            return None;
        }
    };

    match serde_json::from_str::<DayFeed>(&content) {
        Ok(feed) => Some(FeedFile {
            path: path.to_path_buf(),
            feed,
        }),
        Err(e) => {
            eprintln!("Skipping {} (not a day feed: {e})", path.display());
            None
        }
    }
}
