//! External command capability.
//!
//! Every external tool (doxygen, make, git, python, the source filter) is
//! invoked through the [`CommandRunner`] trait so that orchestration code
//! can be exercised without a real toolchain. The runner reports a
//! structured [`RunOutcome`]; note that the build and publish paths
//! deliberately discard the exit status — the pipeline is best-effort by
//! design, and the structured result exists as the seam for anyone who
//! wants stricter checking. A binary that is missing outright still fails
//! the run: the spawn error propagates as `io::Error`.

use std::io;
use std::path::Path;
use std::process::Command;

/// What an external command did: its exit code (None when killed by a
/// signal) and, for captured runs, its stdout.
#[derive(Debug, Clone, Default)]
pub struct RunOutcome {
    pub status: Option<i32>,
    pub stdout: String,
}

impl RunOutcome {
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }
}

pub trait CommandRunner {
    /// Run with inherited stdio: the child writes to (and prompts on) the
    /// user's terminal. `stdout` in the outcome is empty.
    fn run(&mut self, program: &str, args: &[&str], cwd: &Path) -> io::Result<RunOutcome>;

    /// Run with stdout captured and returned in the outcome.
    fn capture(&mut self, program: &str, args: &[&str], cwd: &Path) -> io::Result<RunOutcome>;
}

/// The real thing: `std::process::Command`, blocking until exit.
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&mut self, program: &str, args: &[&str], cwd: &Path) -> io::Result<RunOutcome> {
        let status = Command::new(program).args(args).current_dir(cwd).status()?;
        Ok(RunOutcome {
            status: status.code(),
            stdout: String::new(),
        })
    }

    fn capture(&mut self, program: &str, args: &[&str], cwd: &Path) -> io::Result<RunOutcome> {
        let output = Command::new(program).args(args).current_dir(cwd).output()?;
        Ok(RunOutcome {
            status: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        })
    }
}
