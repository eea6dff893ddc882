use clap::{Parser, Subcommand};
use doxbuild::console::StdConsole;
use doxbuild::runner::SystemRunner;
use doxbuild::{confpatch, pipeline, publish};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "doxbuild")]
#[command(about = "Doxygen documentation build orchestrator")]
#[command(long_about = "\
Doxygen documentation build orchestrator

The working directory is the documentation tree. Plain-text fragments are
stitched into synthesized pages, the generator runs once per config, the
generated HTML gets navigation tabs, and the LaTeX output is compiled into
the PDF manuals.

Expected tree:

  doc/
  ├── doxygen.cfg          # Generator config, user docs → html/, latex/
  ├── api.cfg              # Generator config, API docs → html/api/, latex/api/
  ├── introduction.txt     # Fragments, concatenated in fixed order
  ├── installation.txt
  ├── usage.txt
  ├── tutorial.txt
  ├── glossary.txt
  ├── roadmap.txt          # Sole fragment of the API page
  ├── images/logo.pdf      # Embedded into the LaTeX manuals
  └── make-option-index.py # Prints the option index on stdout

Run 'doxbuild setup' once per machine to point the configs at the local
filter tool and package sources, 'doxbuild build' for the pipeline, and
'doxbuild publish' to commit the result to gh-pages.

External commands run best-effort: their exit codes are not checked, so a
generator warning-exit does not stop the PDF step, and a conflicted pull
during publishing is yours to resolve.")]
#[command(version)]
struct Cli {
    /// Documentation working directory
    #[arg(long, default_value = ".", global = true)]
    root: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the full pipeline: option index → pages → generator → tabs → PDFs
    Build {
        /// Pause for confirmation before each external command
        #[arg(long)]
        interactive: bool,

        /// Remove intermediate outputs (latex/, option index, pages) afterwards
        #[arg(long)]
        clean: bool,
    },
    /// Patch doxygen.cfg and api.cfg for the local environment
    Setup {
        /// Python package whose sources feed the API documentation
        #[arg(long)]
        package: String,
    },
    /// Commit and push the generated documentation to the gh-pages branch
    Publish {
        /// Branch to return to after publishing
        #[arg(long)]
        branch: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut runner = SystemRunner;

    match cli.command {
        Command::Build { interactive, clean } => {
            let mut console = StdConsole { interactive };
            pipeline::build(&cli.root, &mut console, &mut runner)?;
            if clean {
                println!("Cleaning up...");
                pipeline::clean(&cli.root)?;
            }
            println!("Documentation successfully generated");
        }
        Command::Setup { package } => {
            let mut console = StdConsole { interactive: true };
            let filter = confpatch::patch_doxygen_cfg(&cli.root, &mut console, &mut runner)?;
            confpatch::patch_api_cfg(&cli.root, filter, &package, &mut console, &mut runner)?;
            println!("Configuration updated");
        }
        Command::Publish { branch } => {
            publish::publish(&cli.root, &branch, &mut runner)?;
        }
    }

    Ok(())
}
