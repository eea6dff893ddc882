//! Config patching: adapt the generator configs to the local environment.
//!
//! Doxygen configs are line-oriented `KEY = VALUE` text. The patcher only
//! ever rewrites lines matching two keys by exact prefix (column padding
//! included); every other line passes through byte-for-byte. The rewrite
//! streams into a temp file created next to the original and replaces it
//! with a rename, so an interrupted run leaves the config untouched — these
//! files have prior valid state worth protecting, unlike the synthesized
//! pages.
//!
//! Rules:
//! - `FILTER_PATTERNS` lines not already referencing the filter tool are
//!   replaced with a pattern invoking the resolved filter path. The path is
//!   resolved lazily, once, and the first pass hands it to the second
//!   explicitly so both configs agree on the same tool.
//! - In `api.cfg` only, `INPUT` lines are unconditionally repointed at the
//!   synthesized API page plus the documented package's install directory.

use crate::console::Console;
use crate::layout;
use crate::locate::{self, LocateError};
use crate::runner::CommandRunner;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatchError {
    #[error("cannot read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot replace config: {0}")]
    Persist(#[from] tempfile::PersistError),
    #[error(transparent)]
    Locate(#[from] LocateError),
}

fn filter_line(tool: &str) -> String {
    format!("{} \"*.py={}\"\n", layout::FILTER_KEY, tool)
}

fn input_line(package_dir: &str) -> String {
    format!("{} {} {}\n", layout::INPUT_KEY, layout::API_PAGE, package_dir)
}

/// Stream `path` through `rule` into a sibling temp file, then rename over
/// the original. `rule` returns `Some(replacement)` for lines it rewrites;
/// everything else is copied verbatim. Any rule error aborts before the
/// rename, leaving the original byte-identical.
fn rewrite<F>(path: &Path, mut rule: F) -> Result<(), PatchError>
where
    F: FnMut(&str) -> Result<Option<String>, PatchError>,
{
    let text = fs::read_to_string(path).map_err(|source| PatchError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;

    for line in text.split_inclusive('\n') {
        match rule(line)? {
            Some(replacement) => tmp.write_all(replacement.as_bytes())?,
            None => tmp.write_all(line.as_bytes())?,
        }
    }

    tmp.persist(path)?;
    Ok(())
}

/// Patch `doxygen.cfg`. Returns the filter path if one was resolved, so the
/// caller can thread it into [`patch_api_cfg`] instead of resolving twice.
pub fn patch_doxygen_cfg(
    root: &Path,
    console: &mut dyn Console,
    runner: &mut dyn CommandRunner,
) -> Result<Option<String>, PatchError> {
    let path = root.join(layout::DOXYGEN_CFG);
    let mut filter: Option<String> = None;

    rewrite(&path, |line| {
        if line.starts_with(layout::FILTER_KEY) && !line.contains(layout::FILTER_TOOL) {
            let tool = match &filter {
                Some(t) => t.clone(),
                None => {
                    let t = locate::filter_tool(root, console, runner)?;
                    filter = Some(t.clone());
                    t
                }
            };
            Ok(Some(filter_line(&tool)))
        } else {
            Ok(None)
        }
    })?;

    Ok(filter)
}

/// Patch `api.cfg`: same filter rule (reusing `filter` when the first pass
/// already resolved it), plus the unconditional `INPUT` repointing. The
/// package lookup is fatal when it fails — the API run has nothing to
/// document without it.
pub fn patch_api_cfg(
    root: &Path,
    filter: Option<String>,
    package: &str,
    console: &mut dyn Console,
    runner: &mut dyn CommandRunner,
) -> Result<(), PatchError> {
    let path = root.join(layout::API_CFG);
    let mut filter = filter;
    let mut package_path: Option<String> = None;

    rewrite(&path, |line| {
        if line.starts_with(layout::INPUT_KEY) {
            let dir = match &package_path {
                Some(d) => d.clone(),
                None => {
                    let d = locate::package_dir(package, root, runner)?;
                    println!("{package} directory is: {d}");
                    package_path = Some(d.clone());
                    d
                }
            };
            Ok(Some(input_line(&dir)))
        } else if line.starts_with(layout::FILTER_KEY) && !line.contains(layout::FILTER_TOOL) {
            let tool = match &filter {
                Some(t) => t.clone(),
                None => {
                    let t = locate::filter_tool(root, console, runner)?;
                    filter = Some(t.clone());
                    t
                }
            };
            Ok(Some(filter_line(&tool)))
        } else {
            Ok(None)
        }
    })
}
