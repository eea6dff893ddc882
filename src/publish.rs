//! Publishing: commit the generated documentation to the gh-pages branch.
//!
//! A strictly sequential git session: stash whatever is in flight, switch
//! to the publishing branch, pull, stage the HTML tree and both PDF
//! manuals, commit, push, then restore the original branch and the stash.
//!
//! No step checks the previous step's exit status. This is inherited
//! best-effort behavior, preserved on purpose: a conflicting pull or a
//! failing stash pop leaves the repository partially migrated for the user
//! to untangle by hand. The push inherits the terminal, so a credentials
//! prompt from the remote passes straight through.
//!
//! The branch to return to is an explicit required parameter — there is no
//! ambient "current branch" state in this module.

use crate::layout;
use crate::runner::CommandRunner;
use chrono::{DateTime, Local};
use std::env;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PublishError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Commit message embedding the building host and a local timestamp.
pub fn commit_message(host: &str, when: &DateTime<Local>) -> String {
    format!(
        "Automatic documentation generation at {} on {}",
        host,
        when.format("%m-%d-%Y %H:%M")
    )
}

/// Host name for the commit message. Display detail only, so an unset
/// variable degrades to a placeholder instead of failing the publish.
fn host_name() -> String {
    env::var("HOSTNAME").unwrap_or_else(|_| "unknown-host".to_string())
}

/// Publish the generated documentation, then return to `original_branch`.
pub fn publish(
    root: &Path,
    original_branch: &str,
    runner: &mut dyn CommandRunner,
) -> Result<(), PublishError> {
    runner.run("git", &["stash"], root)?;

    println!("Switching to the {} branch...", layout::PUBLISH_BRANCH);
    runner.run("git", &["checkout", layout::PUBLISH_BRANCH], root)?;
    runner.run("git", &["pull", "origin", layout::PUBLISH_BRANCH], root)?;

    println!("Staging generated documentation...");
    runner.run(
        "git",
        &[
            "add",
            layout::HTML_DIR,
            layout::MANUAL_PDF,
            layout::API_MANUAL_PDF,
        ],
        root,
    )?;
    let message = commit_message(&host_name(), &Local::now());
    runner.run("git", &["commit", "-m", &message], root)?;

    println!("\n---- Enter credentials to push to the remote, or Ctrl-C to abort\n");
    runner.run("git", &["push", "origin", layout::PUBLISH_BRANCH], root)?;

    println!("Returning to branch '{original_branch}'...");
    runner.run("git", &["reset", "--hard", "HEAD"], root)?;
    runner.run("git", &["checkout", original_branch], root)?;

    println!("Restoring stashed changes if any...");
    runner.run("git", &["stash", "pop"], root)?;

    Ok(())
}
