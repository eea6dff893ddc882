//! # doxbuild
//!
//! Automation for a Doxygen-based documentation build. The documentation
//! tree holds plain-text fragment files, two generator configs, and a logo
//! asset; doxbuild stitches the fragments into synthesized pages, drives
//! the external generator, fixes up its HTML navigation, compiles the PDF
//! manuals, and can commit the whole result to a `gh-pages` branch.
//!
//! # The Build Pipeline
//!
//! ```text
//! 1. Option index   external command → option_index.txt
//! 2. Page assembly  fragments → mainpage.dox, api.dox
//! 3. Generator      doxygen doxygen.cfg; doxygen api.cfg → html/, latex/
//! 4. Nav tabs       inject tab links into html/ and html/api/
//! 5. PDF manuals    make in latex/ and latex/api/ → Manual.pdf, API-Manual.pdf
//! ```
//!
//! A separate one-time `setup` path patches the generator configs to the
//! local environment (filter tool location, package source directory), and
//! `publish` is an independent follow-up step.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`layout`] | Every fixed filename, marker, config key, and nav table |
//! | [`assemble`] | Fragment concatenation into the synthesized `.dox` pages |
//! | [`navtabs`] | Navigation tab injection into generated HTML |
//! | [`confpatch`] | Config rewriting via temp file + atomic rename |
//! | [`locate`] | Environment resolvers: filter tool, package directory |
//! | [`pipeline`] | Build orchestration and `--clean` |
//! | [`publish`] | The gh-pages git session |
//! | [`runner`] | External-command capability (structured outcome) |
//! | [`console`] | User-interaction capability (echo, pause, prompt) |
//!
//! # Design Decisions
//!
//! ## Best-Effort External Commands
//!
//! Exit statuses of the generator, `make`, and every `git` step are
//! deliberately not checked. The pipeline mirrors a hand-driven shell
//! session: a warning-exit from the generator should not stop the PDF
//! build, and a conflicted pull during publishing is left for the user to
//! resolve. [`runner::RunOutcome`] carries the status anyway, so stricter
//! policies have a seam to hook into. A binary that is missing outright
//! still aborts the run with the spawn error.
//!
//! ## Capabilities Over Globals
//!
//! Everything interactive or process-spawning goes through the
//! [`console::Console`] and [`runner::CommandRunner`] traits. The resolved
//! filter path and the branch to return to after publishing are threaded
//! through as explicit parameters, never ambient state. This keeps the
//! whole orchestration unit-testable with scripted doubles.
//!
//! ## Atomic Config Replacement
//!
//! Config patching streams into a temp file next to the original and
//! renames over it. The synthesized pages skip that dance: they are pure
//! outputs with no prior state to protect, so plain overwrite is enough.

pub mod assemble;
pub mod confpatch;
pub mod console;
pub mod layout;
pub mod locate;
pub mod navtabs;
pub mod pipeline;
pub mod publish;
pub mod runner;

#[cfg(test)]
pub(crate) mod test_helpers;
