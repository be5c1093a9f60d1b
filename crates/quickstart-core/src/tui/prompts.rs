//! Terminal front end: banner, question flow, generation and summary

use crate::config::AnswerDefaults;
use crate::error::QuickstartError;
use crate::project::{self, GeneratedProject};
use crate::prompt::Prompter;
use crate::session::Derived;
use crate::terminal::{write_interrupted, TermEncoding, TerminalOptions};
use crate::wizard;
use anyhow::Result;
use chrono::Local;
use std::io::{BufRead, Stdout};
use std::path::PathBuf;

/// Options for one quickstart session
#[derive(Debug, Clone, Default)]
pub struct QuickstartArgs {
    /// YAML file with default answers
    pub answers: Option<PathBuf>,

    /// Disable colored output
    pub no_color: bool,

    /// Terminal encoding override; detected from the locale when unset
    pub encoding: Option<TermEncoding>,
}

/// Prompter writing to an unlocked stdout.
///
/// Stdout is only locked per write, so the Ctrl+C handler can print while the
/// prompter is blocked reading input.
fn session_prompter<R: BufRead>(input: R, terminal: TerminalOptions) -> Prompter<R, Stdout> {
    Prompter::new(input, std::io::stdout(), terminal)
}

/// Print the interruption notice on stderr.
///
/// Shared by the Ctrl+C handler and the end-of-input path.
pub fn notify_interrupted() {
    let _ = write_interrupted(&mut console::Term::stderr());
}

/// Run the quickstart with interactive prompts
pub async fn run(args: QuickstartArgs) -> Result<()> {
    let terminal = TerminalOptions {
        color: !args.no_color && console::colors_enabled(),
        encoding: args.encoding.unwrap_or_else(TermEncoding::detect),
    };

    cliclack::intro("sphinx-quickstart")?;

    let defaults = match &args.answers {
        Some(path) => {
            let defaults = AnswerDefaults::load(path)?;
            cliclack::log::info(format!("Using default answers from {}", path.display()))?;
            defaults
        }
        None => AnswerDefaults::default(),
    };

    let answers = {
        let stdin = std::io::stdin();
        let mut prompter = session_prompter(stdin.lock(), terminal);

        match wizard::collect_answers(&mut prompter, &defaults) {
            Ok(answers) => answers,
            Err(QuickstartError::Interrupted) => {
                notify_interrupted();
                return Ok(());
            }
            Err(QuickstartError::Aborted) => {
                cliclack::outro_cancel("No new root path given, nothing was created.")?;
                return Err(QuickstartError::Aborted.into());
            }
            Err(e) => return Err(e.into()),
        }
    };

    let derived = Derived::compute(&answers, &Local::now());

    let spinner = cliclack::spinner();
    spinner.start("Creating project...");
    let project = match project::generate(&answers, &derived).await {
        Ok(project) => project,
        Err(e) => {
            spinner.error("Failed to create project");
            return Err(e);
        }
    };
    spinner.stop("Finished: An initial directory structure has been created.");

    print_next_steps(&project)?;

    Ok(())
}

fn print_next_steps(project: &GeneratedProject) -> Result<()> {
    let steps = project::next_steps(project);

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro(format!(
        "Created {} files in {}",
        project.files.len(),
        project.layout.root.display()
    ))?;

    Ok(())
}
