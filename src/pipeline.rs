//! Build orchestration: the five-step documentation pipeline.
//!
//! Steps run strictly in sequence, each depending on the previous step's
//! files being on disk:
//!
//! ```text
//! 1. option index   python make-option-index.py → option_index.txt
//! 2. pages          fragments → mainpage.dox, api.dox
//! 3. generator      doxygen doxygen.cfg; doxygen api.cfg
//! 4. nav tabs       patch html/ and html/api/
//! 5. PDFs           make in latex/ and latex/api/ → Manual.pdf, API-Manual.pdf
//! ```
//!
//! External exit codes are deliberately not checked: the pipeline is
//! best-effort, and a generator warning-exit should not kill the PDF step.
//! A binary that cannot be spawned at all still aborts the run. Each
//! external step is announced through the console first, which in
//! interactive mode doubles as a pause point.

use crate::assemble::{self, AssembleError};
use crate::console::Console;
use crate::layout;
use crate::navtabs::{self, NavError};
use crate::runner::CommandRunner;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Assemble(#[from] AssembleError),
    #[error(transparent)]
    Nav(#[from] NavError),
}

/// Run the full pipeline under `root`.
pub fn build(
    root: &Path,
    console: &mut dyn Console,
    runner: &mut dyn CommandRunner,
) -> Result<(), BuildError> {
    // 1. Option index: captured stdout becomes the last main-page fragment.
    console.step(&format!(
        "{} {} > {}",
        layout::OPTION_INDEX_PROGRAM,
        layout::OPTION_INDEX_ARGS.join(" "),
        layout::OPTION_INDEX
    ))?;
    let index = runner.capture(layout::OPTION_INDEX_PROGRAM, &layout::OPTION_INDEX_ARGS, root)?;
    fs::write(root.join(layout::OPTION_INDEX), index.stdout)?;

    // 2. Synthesized pages.
    assemble::write_main_page(root)?;
    assemble::write_api_page(root)?;

    // 3. Generator, once per config.
    console.step(&format!("doxygen {}", layout::DOXYGEN_CFG))?;
    runner.run("doxygen", &[layout::DOXYGEN_CFG], root)?;
    console.step(&format!("doxygen {}", layout::API_CFG))?;
    runner.run("doxygen", &[layout::API_CFG], root)?;

    // 4. Navigation tabs, main tier then API tier.
    console.step("inject navigation tabs into html/ and html/api/")?;
    let html = root.join(layout::HTML_DIR);
    let mut patched = navtabs::patch_dir(&html, &layout::MAIN_NAV)?;
    patched += navtabs::patch_dir(&html.join(layout::API_SUBDIR), &layout::API_NAV)?;
    println!("patched tabs into {patched} pages");

    // 5. PDF manuals out of both LaTeX trees.
    let latex = root.join(layout::LATEX_DIR);
    compile_manual(root, &latex, layout::MANUAL_PDF, console, runner)?;
    compile_manual(
        root,
        &latex.join(layout::API_SUBDIR),
        layout::API_MANUAL_PDF,
        console,
        runner,
    )?;

    Ok(())
}

/// Copy the logo into `latex_dir`, run `make` there, and copy the resulting
/// `refman.pdf` to `dest` under `root`.
fn compile_manual(
    root: &Path,
    latex_dir: &Path,
    dest: &str,
    console: &mut dyn Console,
    runner: &mut dyn CommandRunner,
) -> Result<(), BuildError> {
    let rel = latex_dir.strip_prefix(root).unwrap_or(latex_dir);

    console.step(&format!("cp {} {}/", layout::LOGO, rel.display()))?;
    fs::copy(root.join(layout::LOGO), latex_dir.join(layout::LOGO_NAME))?;

    console.step(&format!("cd {} && make", rel.display()))?;
    runner.run("make", &[], latex_dir)?;

    console.step(&format!("cp {}/{} {dest}", rel.display(), layout::REFMAN))?;
    fs::copy(latex_dir.join(layout::REFMAN), root.join(dest))?;
    Ok(())
}

/// Remove exactly the intermediates a build leaves behind: the LaTeX tree,
/// the option index, and the two synthesized pages. Fragments, configs, and
/// the HTML tree stay. Already-absent entries are fine.
pub fn clean(root: &Path) -> std::io::Result<()> {
    match fs::remove_dir_all(root.join(layout::LATEX_DIR)) {
        Err(e) if e.kind() != std::io::ErrorKind::NotFound => return Err(e),
        _ => {}
    }
    for name in [layout::OPTION_INDEX, layout::MAIN_PAGE, layout::API_PAGE] {
        match fs::remove_file(root.join(name)) {
            Err(e) if e.kind() != std::io::ErrorKind::NotFound => return Err(e),
            _ => {}
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{seed_build_tree, RecordingRunner, ScriptedConsole};
    use tempfile::TempDir;

    #[test]
    fn pipeline_runs_steps_in_order() {
        let tmp = TempDir::new().unwrap();
        seed_build_tree(tmp.path());
        let mut console = ScriptedConsole::new(&[]);
        let mut runner =
            RecordingRunner::new().with_outcome("python", Some(0), "OPTIONS\n");

        build(tmp.path(), &mut console, &mut runner).unwrap();

        assert_eq!(
            runner.calls,
            vec![
                "python make-option-index.py",
                "doxygen doxygen.cfg",
                "doxygen api.cfg",
                "make",
                "make",
            ]
        );
    }

    #[test]
    fn option_index_captures_command_stdout() {
        let tmp = TempDir::new().unwrap();
        seed_build_tree(tmp.path());
        let mut console = ScriptedConsole::new(&[]);
        let mut runner =
            RecordingRunner::new().with_outcome("python", Some(0), "--alpha\n--beta\n");

        build(tmp.path(), &mut console, &mut runner).unwrap();

        let index = fs::read_to_string(tmp.path().join(layout::OPTION_INDEX)).unwrap();
        assert_eq!(index, "--alpha\n--beta\n");
        // And it was picked up by the page assembly that followed.
        let page = fs::read_to_string(tmp.path().join(layout::MAIN_PAGE)).unwrap();
        assert!(page.contains("--alpha"));
    }

    #[test]
    fn generator_failure_does_not_stop_the_build() {
        let tmp = TempDir::new().unwrap();
        seed_build_tree(tmp.path());
        let mut console = ScriptedConsole::new(&[]);
        let mut runner = RecordingRunner::new()
            .with_outcome("python", Some(0), "")
            .with_outcome("doxygen", Some(1), "");

        // Exit status is ignored by design: the run continues to the PDFs.
        build(tmp.path(), &mut console, &mut runner).unwrap();
        assert!(tmp.path().join(layout::MANUAL_PDF).exists());
        assert!(tmp.path().join(layout::API_MANUAL_PDF).exists());
    }

    #[test]
    fn both_html_tiers_get_tabs() {
        let tmp = TempDir::new().unwrap();
        seed_build_tree(tmp.path());
        let mut console = ScriptedConsole::new(&[]);
        let mut runner = RecordingRunner::new().with_outcome("python", Some(0), "");

        build(tmp.path(), &mut console, &mut runner).unwrap();

        let usage =
            fs::read_to_string(tmp.path().join("html").join("usage.html")).unwrap();
        assert!(usage.contains(
            "<li class=\"current\"><a href=\"usage.html\"><span>Usage</span></a></li>"
        ));
        let roadmap =
            fs::read_to_string(tmp.path().join("html/api").join("roadmap.html")).unwrap();
        assert!(roadmap.contains("<span>Main Page</span>"));
        assert!(roadmap.contains(
            "<li class=\"current\"><a href=\"roadmap.html\"><span>Project Roadmap</span></a></li>"
        ));
    }

    #[test]
    fn manuals_are_copied_out_of_both_latex_trees() {
        let tmp = TempDir::new().unwrap();
        seed_build_tree(tmp.path());
        let mut console = ScriptedConsole::new(&[]);
        let mut runner = RecordingRunner::new().with_outcome("python", Some(0), "");

        build(tmp.path(), &mut console, &mut runner).unwrap();

        assert_eq!(
            fs::read_to_string(tmp.path().join(layout::MANUAL_PDF)).unwrap(),
            "main refman"
        );
        assert_eq!(
            fs::read_to_string(tmp.path().join(layout::API_MANUAL_PDF)).unwrap(),
            "api refman"
        );
        // Logo copied into both trees for the LaTeX run.
        assert!(tmp.path().join("latex/logo.pdf").exists());
        assert!(tmp.path().join("latex/api/logo.pdf").exists());
    }

    #[test]
    fn every_external_step_is_announced() {
        let tmp = TempDir::new().unwrap();
        seed_build_tree(tmp.path());
        let mut console = ScriptedConsole::new(&[]);
        let mut runner = RecordingRunner::new().with_outcome("python", Some(0), "");

        build(tmp.path(), &mut console, &mut runner).unwrap();

        assert_eq!(
            console.steps,
            vec![
                "python make-option-index.py > option_index.txt",
                "doxygen doxygen.cfg",
                "doxygen api.cfg",
                "inject navigation tabs into html/ and html/api/",
                "cp images/logo.pdf latex/",
                "cd latex && make",
                "cp latex/refman.pdf Manual.pdf",
                "cp images/logo.pdf latex/api/",
                "cd latex/api && make",
                "cp latex/api/refman.pdf API-Manual.pdf",
            ]
        );
    }

    #[test]
    fn clean_removes_exactly_the_intermediates() {
        let tmp = TempDir::new().unwrap();
        seed_build_tree(tmp.path());
        let mut console = ScriptedConsole::new(&[]);
        let mut runner = RecordingRunner::new().with_outcome("python", Some(0), "");
        build(tmp.path(), &mut console, &mut runner).unwrap();

        clean(tmp.path()).unwrap();

        assert!(!tmp.path().join(layout::LATEX_DIR).exists());
        assert!(!tmp.path().join(layout::OPTION_INDEX).exists());
        assert!(!tmp.path().join(layout::MAIN_PAGE).exists());
        assert!(!tmp.path().join(layout::API_PAGE).exists());
        // Inputs and deliverables survive.
        assert!(tmp.path().join("introduction.txt").exists());
        assert!(tmp.path().join(layout::DOXYGEN_CFG).exists());
        assert!(tmp.path().join(layout::HTML_DIR).exists());
        assert!(tmp.path().join(layout::MANUAL_PDF).exists());
    }

    #[test]
    fn clean_tolerates_a_tree_never_built() {
        let tmp = TempDir::new().unwrap();
        clean(tmp.path()).unwrap();
    }
}
