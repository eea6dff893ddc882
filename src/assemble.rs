//! Page assembly: fragments → synthesized `.dox` pages.
//!
//! The generator only sees two synthetic input pages, `mainpage.dox` and
//! `api.dox`. Each is built by concatenating plain-text fragment files in a
//! declared order and wrapping the result in a Doxygen comment block. The
//! pages are pure outputs — they are overwritten on every build, so no
//! temp-file dance is needed here (unlike the config patcher, which rewrites
//! files that have prior valid state to protect).
//!
//! A missing fragment is fatal: the page would silently lose a chapter, so
//! the error propagates and aborts the run.

use crate::layout;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssembleError {
    #[error("cannot read fragment {path}: {source}")]
    Fragment {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Concatenate `fragments` (resolved against `root`, in order) between
/// `open` and `trailer` + the shared closing marker.
pub fn assemble(
    root: &Path,
    fragments: &[&str],
    open: &str,
    trailer: &str,
) -> Result<String, AssembleError> {
    let mut page = String::from(open);
    for name in fragments {
        let path = root.join(name);
        let body = fs::read_to_string(&path)
            .map_err(|source| AssembleError::Fragment { path, source })?;
        page.push_str(&body);
    }
    page.push_str(trailer);
    page.push_str(layout::PAGE_CLOSE);
    Ok(page)
}

/// Build and overwrite `mainpage.dox` from the six main fragments, with the
/// logo image directive appended for the LaTeX manual.
pub fn write_main_page(root: &Path) -> Result<(), AssembleError> {
    let page = assemble(
        root,
        &layout::MAIN_FRAGMENTS,
        layout::MAIN_OPEN,
        layout::MAIN_TRAILER,
    )?;
    fs::write(root.join(layout::MAIN_PAGE), page)?;
    Ok(())
}

/// Build and overwrite `api.dox` from the API fragments.
pub fn write_api_page(root: &Path) -> Result<(), AssembleError> {
    let page = assemble(
        root,
        &layout::API_FRAGMENTS,
        layout::API_OPEN,
        layout::API_TRAILER,
    )?;
    fs::write(root.join(layout::API_PAGE), page)?;
    Ok(())
}
