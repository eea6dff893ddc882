//! Shared test utilities for the doxbuild test suite.
//!
//! Provides the scripted console (pre-seeded answers, recorded steps), the
//! recording command runner (scripted outcomes per program, invocation
//! log), and fixture builders that lay out a documentation tree inside a
//! `tempfile::TempDir`.

use crate::console::Console;
use crate::runner::{CommandRunner, RunOutcome};
use std::collections::{HashMap, VecDeque};
use std::fs;
use std::io;
use std::path::Path;

// =========================================================================
// Console double
// =========================================================================

/// A console with every answer decided up front. `step` never blocks; it
/// just records what would have been announced.
pub struct ScriptedConsole {
    answers: VecDeque<String>,
    pub steps: Vec<String>,
}

impl ScriptedConsole {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|a| a.to_string()).collect(),
            steps: Vec::new(),
        }
    }
}

impl Console for ScriptedConsole {
    fn step(&mut self, cmd: &str) -> io::Result<()> {
        self.steps.push(cmd.to_string());
        Ok(())
    }

    fn ask(&mut self, _prompt: &str) -> io::Result<String> {
        Ok(self
            .answers
            .pop_front()
            .expect("ScriptedConsole ran out of answers"))
    }
}

// =========================================================================
// Runner double
// =========================================================================

/// A runner that never spawns anything. Outcomes are scripted per program
/// name; unscripted programs succeed with empty output. Every invocation is
/// logged as `program arg1 arg2 ...`.
pub struct RecordingRunner {
    outcomes: HashMap<String, RunOutcome>,
    pub calls: Vec<String>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self {
            outcomes: HashMap::new(),
            calls: Vec::new(),
        }
    }

    pub fn with_outcome(mut self, program: &str, status: Option<i32>, stdout: &str) -> Self {
        self.outcomes.insert(
            program.to_string(),
            RunOutcome {
                status,
                stdout: stdout.to_string(),
            },
        );
        self
    }

    fn record(&mut self, program: &str, args: &[&str]) -> RunOutcome {
        let mut call = program.to_string();
        for arg in args {
            call.push(' ');
            call.push_str(arg);
        }
        self.calls.push(call);
        self.outcomes.get(program).cloned().unwrap_or(RunOutcome {
            status: Some(0),
            stdout: String::new(),
        })
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&mut self, program: &str, args: &[&str], _cwd: &Path) -> io::Result<RunOutcome> {
        let mut outcome = self.record(program, args);
        outcome.stdout = String::new();
        Ok(outcome)
    }

    fn capture(&mut self, program: &str, args: &[&str], _cwd: &Path) -> io::Result<RunOutcome> {
        Ok(self.record(program, args))
    }
}

// =========================================================================
// Fixture builders
// =========================================================================

/// Write every fragment file the page assembler reads, each with a
/// recognizable `[name]` body.
pub fn seed_fragments(root: &Path) {
    for name in [
        "introduction.txt",
        "installation.txt",
        "usage.txt",
        "tutorial.txt",
        "glossary.txt",
        "option_index.txt",
        "roadmap.txt",
    ] {
        let stem = name.trim_end_matches(".txt");
        fs::write(root.join(name), format!("[{stem}]\n")).unwrap();
    }
}

/// A minimal HTML page carrying one `index.html` anchor line.
pub fn anchor_page() -> &'static str {
    "<html>\n  <li><a href=\"index.html\"><span>Main</span></a></li>\n</html>\n"
}

/// Lay out everything a full pipeline run touches: fragments, configs, the
/// logo asset, pre-generated HTML tiers, and LaTeX trees with a fake
/// `refman.pdf` each (the external generator and `make` are doubles in
/// tests, so their outputs must pre-exist).
pub fn seed_build_tree(root: &Path) {
    seed_fragments(root);
    fs::write(root.join("doxygen.cfg"), "PROJECT_NAME           = docs\n").unwrap();
    fs::write(root.join("api.cfg"), "PROJECT_NAME           = api\n").unwrap();

    fs::create_dir_all(root.join("images")).unwrap();
    fs::write(root.join("images/logo.pdf"), "logo").unwrap();

    fs::create_dir_all(root.join("html/api")).unwrap();
    fs::write(root.join("html/index.html"), anchor_page()).unwrap();
    fs::write(root.join("html/usage.html"), anchor_page()).unwrap();
    fs::write(root.join("html/api/roadmap.html"), anchor_page()).unwrap();

    fs::create_dir_all(root.join("latex/api")).unwrap();
    fs::write(root.join("latex/refman.pdf"), "main refman").unwrap();
    fs::write(root.join("latex/api/refman.pdf"), "api refman").unwrap();
}
