//! Navigation tab injection for generated HTML.
//!
//! The generator's stock navigation bar only knows about the index page.
//! This pass rewrites every `*.html` file in a target directory, appending
//! a fixed set of `<li>` tab lines immediately after each line that anchors
//! to `index.html`. Which tab (if any) gets `class="current"` is decided
//! solely by the file's own name, so at most one tab is highlighted per
//! page.
//!
//! Matching is a plain per-line regex test. If a file carries the anchor
//! line more than once, the tabs are injected after every occurrence — that
//! is the contract, not an accident to guard against. Only the named
//! directory is visited; subdirectories are someone else's problem (the
//! API subtree gets its own pass with its own tab table).

use crate::layout::NavEntry;
use regex::Regex;
use std::fs;
use std::path::Path;
use thiserror::Error;

const ANCHOR_PATTERN: &str = r#"a href="index\.html""#;

#[derive(Error, Debug)]
pub enum NavError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid anchor pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Render one tab line. The current tab carries the marker class.
fn nav_line(entry: &NavEntry, current: bool) -> String {
    let tag = if current { " class=\"current\"" } else { "" };
    format!(
        "      <li{tag}><a href=\"{}\"><span>{}</span></a></li>\n",
        entry.href, entry.label
    )
}

/// Inject `entries` after every anchor line of `content`. `filename` is the
/// HTML file's own name and decides the current tab.
pub fn inject(content: &str, filename: &str, entries: &[NavEntry], anchor: &Regex) -> String {
    let mut patched = String::with_capacity(content.len());
    for line in content.split_inclusive('\n') {
        patched.push_str(line);
        if anchor.is_match(line) {
            for entry in entries {
                let current = entry.current_when == Some(filename);
                patched.push_str(&nav_line(entry, current));
            }
        }
    }
    patched
}

/// Rewrite every `*.html` file directly inside `dir`. Returns the number of
/// files rewritten. Non-HTML entries and subdirectories are skipped; a
/// missing `dir` (the generator never ran) is fatal.
pub fn patch_dir(dir: &Path, entries: &[NavEntry]) -> Result<usize, NavError> {
    let anchor = Regex::new(ANCHOR_PATTERN)?;
    let mut names: Vec<_> = fs::read_dir(dir)?
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .filter(|e| e.path().is_file())
        .map(|e| e.file_name())
        .collect();
    names.sort();

    let mut patched = 0;
    for name in names {
        let Some(filename) = name.to_str() else {
            continue;
        };
        if !filename.ends_with(".html") {
            continue;
        }
        let path = dir.join(filename);
        let content = fs::read_to_string(&path)?;
        fs::write(&path, inject(&content, filename, entries, &anchor))?;
        patched += 1;
    }
    Ok(patched)
}
