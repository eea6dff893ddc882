//! User interaction provider.
//!
//! Two touch points need a human: the interactive build mode pauses before
//! each external command, and the config patcher asks for the filter
//! script's location when it cannot be found on the path. Both go through
//! the [`Console`] trait so tests can script the whole exchange (see
//! `test_helpers::ScriptedConsole`).

use std::io::{self, BufRead, Write};

pub trait Console {
    /// Announce the shell-equivalent of the next step. Interactive consoles
    /// block here until the user confirms.
    fn step(&mut self, cmd: &str) -> io::Result<()>;

    /// Ask the user a question and return their answer (newline stripped).
    fn ask(&mut self, prompt: &str) -> io::Result<String>;
}

/// Real terminal console. In interactive mode each step waits for Enter,
/// mirroring a shell session the user drives one command at a time.
pub struct StdConsole {
    pub interactive: bool,
}

impl Console for StdConsole {
    fn step(&mut self, cmd: &str) -> io::Result<()> {
        if self.interactive {
            print!("\n$ {cmd} ");
            io::stdout().flush()?;
            let mut ack = String::new();
            io::stdin().lock().read_line(&mut ack)?;
        } else {
            println!("$ {cmd}");
        }
        Ok(())
    }

    fn ask(&mut self, prompt: &str) -> io::Result<String> {
        print!("{prompt}");
        io::stdout().flush()?;
        let mut answer = String::new();
        io::stdin().lock().read_line(&mut answer)?;
        Ok(answer.trim_end_matches(['\r', '\n']).to_string())
    }
}
