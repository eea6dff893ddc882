//! Environment resolvers: locate the source filter and the documented
//! package on the local machine.
//!
//! Both lookups feed the one-time config patch. They recover differently:
//! a missing filter tool falls back to asking the user for the script's
//! path (with a fail-fast sanity check on the answer), while a missing
//! package is fatal — there is nothing useful to generate API docs from,
//! so the error carries the remediation hint and the run ends.

use crate::console::Console;
use crate::layout;
use crate::runner::CommandRunner;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LocateError {
    #[error("invalid path to doxypy: {given}")]
    InvalidFilterPath { given: String },
    #[error(
        "unable to find package '{package}' on the python path (is it installed?)\n\
         Try running the package's setup.py, or set the INPUT option in api.cfg manually"
    )]
    PackageNotFound { package: String },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Resolve the filter executable to put into `FILTER_PATTERNS`.
///
/// First probes the system path by running the tool against an existing
/// file (the main config serves as a harmless input). On any failure —
/// non-zero exit or the binary not existing at all — the user is asked for
/// the script's location. The answer must point at an existing file named
/// `doxypy.py`; anything else fails fast, no retry loop.
pub fn filter_tool(
    root: &Path,
    console: &mut dyn Console,
    runner: &mut dyn CommandRunner,
) -> Result<String, LocateError> {
    let probe = runner.capture(layout::FILTER_TOOL, &[layout::DOXYGEN_CFG], root);
    if let Ok(outcome) = probe {
        if outcome.success() {
            return Ok(layout::FILTER_TOOL.to_string());
        }
    }

    let answer = console.ask("Enter location of doxypy.py: ")?;
    let answer = answer.trim().to_string();
    if !Path::new(&answer).exists() || !answer.ends_with(layout::FILTER_SCRIPT_SUFFIX) {
        return Err(LocateError::InvalidFilterPath { given: answer });
    }
    Ok(answer)
}

/// Resolve the installed package's directory by asking the interpreter for
/// its `__path__[0]`. Captured stdout is the answer; a non-zero exit or an
/// empty answer means the package is not importable.
pub fn package_dir(
    package: &str,
    root: &Path,
    runner: &mut dyn CommandRunner,
) -> Result<String, LocateError> {
    let probe = format!("import {package}; print({package}.__path__[0])");
    let outcome = runner.capture("python", &["-c", &probe], root)?;
    let dir = outcome.stdout.trim();
    if !outcome.success() || dir.is_empty() {
        return Err(LocateError::PackageNotFound {
            package: package.to_string(),
        });
    }
    Ok(dir.to_string())
}
