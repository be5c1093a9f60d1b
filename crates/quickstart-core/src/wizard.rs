//! The quickstart question flow
//!
//! Asks every question in order and returns the completed [`Answers`]. Nothing
//! is written to disk here; the only filesystem access is the check for an
//! existing project at the chosen root.

use crate::config::{yes_no, AnswerDefaults};
use crate::error::{QuickstartError, Result};
use crate::project::{has_existing_conf, has_existing_master};
use crate::prompt::validate;
use crate::prompt::Prompter;
use crate::session::{resolve_math_conflict, Answers, Extension};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

const INTRO: &str = "
Please enter values for the following settings (just press Enter to
accept a default value, if one is given in brackets).";

const ROOT_HELP: &str = "
Enter the root path for documentation.";

const SEP_HELP: &str = "
You have two options for placing the build directory for Sphinx output.
Either, you use a directory \"_build\" within the root path, or you separate
\"source\" and \"build\" directories within the root path.";

const DOT_HELP: &str = "
Inside the root directory, two more directories will be created; \"_templates\"
for custom HTML templates and \"_static\" for custom stylesheets and other static
files. You can enter another prefix (such as \".\") to replace the underscore.";

const PROJECT_HELP: &str = "
The project name will occur in several places in the built documentation.";

const VERSION_HELP: &str = "
Sphinx has the notion of a \"version\" and a \"release\" for the
software. Each version can have multiple releases. For example, for
Python the version is something like 2.5 or 3.0, while the release is
something like 2.5.1 or 3.0a1.  If you don't need this dual structure,
just set both to the same value.";

const SUFFIX_HELP: &str = "
The file name suffix for source files. Commonly, this is either \".txt\"
or \".rst\".  Only files with this suffix are considered documents.";

const MASTER_HELP: &str = "
One document is special in that it is considered the top node of the
\"contents tree\", that is, it is the root of the hierarchical structure
of the documents. Normally, this is \"index\", but if your \"index\"
document is a custom template, you can also set this to another filename.";

const EXTENSIONS_HELP: &str = "
Please indicate if you want to use one of the following Sphinx extensions:";

const MATH_CONFLICT_NOTE: &str = "Note: pngmath and jsmath cannot be enabled at the same time.
pngmath has been deselected.";

const MAKE_HELP: &str = "
A Makefile and a Windows command file can be generated for you so that you
only have to run e.g. `make html' instead of invoking sphinx-build
directly.";

/// Ask every quickstart question.
///
/// Fails with [`QuickstartError::Aborted`] when the user gives up on finding a
/// root path without an existing `conf.py`, and with
/// [`QuickstartError::Interrupted`] when input ends.
pub fn collect_answers<R, W>(p: &mut Prompter<R, W>, defaults: &AnswerDefaults) -> Result<Answers>
where
    R: BufRead,
    W: Write,
{
    p.say_bold("Welcome to the Sphinx quickstart utility.")?;
    p.say(INTRO)?;

    p.say(ROOT_HELP)?;
    let path = ask_root_path(p, defaults.path.as_deref().unwrap_or("."))?;

    p.say(SEP_HELP)?;
    let sep = ask_yes_no(
        p,
        "Separate source and build directories",
        defaults.sep.unwrap_or(false),
    )?;

    p.say(DOT_HELP)?;
    let dot = p.ask(
        "Name prefix for templates and static dir",
        Some(defaults.dot.as_deref().unwrap_or("_")),
        validate::ok,
    )?;

    p.say(PROJECT_HELP)?;
    let project = p.ask("Project name", defaults.project.as_deref(), validate::nonempty)?;
    let author = p.ask("Author name(s)", defaults.author.as_deref(), validate::nonempty)?;

    p.say(VERSION_HELP)?;
    let version = p.ask("Project version", defaults.version.as_deref(), validate::nonempty)?;
    let release = p.ask(
        "Project release",
        Some(defaults.release.as_deref().unwrap_or(&version)),
        validate::nonempty,
    )?;

    p.say(SUFFIX_HELP)?;
    let suffix = p.ask(
        "Source file suffix",
        Some(defaults.suffix.as_deref().unwrap_or(".rst")),
        validate::suffix,
    )?;

    p.say(MASTER_HELP)?;
    let master = p.ask(
        "Name of your master document (without suffix)",
        Some(defaults.master.as_deref().unwrap_or("index")),
        validate::nonempty,
    )?;
    let master = ensure_free_master(p, &path, master, &suffix)?;

    p.say(EXTENSIONS_HELP)?;
    let mut extensions = Vec::new();
    for ext in Extension::ALL {
        let question = format!("{}: {}", ext.name(), ext.description());
        if ask_yes_no(p, &question, defaults.extension(ext))? {
            extensions.push(ext);
        }
        // Checked right after the last math question, before ifconfig
        if ext == Extension::Jsmath && resolve_math_conflict(&mut extensions) {
            p.say(MATH_CONFLICT_NOTE)?;
        }
    }

    p.say(MAKE_HELP)?;
    let makefile = ask_yes_no(p, "Create Makefile?", defaults.makefile.unwrap_or(true))?;
    let batchfile = ask_yes_no(
        p,
        "Create Windows command file?",
        defaults.batchfile.unwrap_or(true),
    )?;

    Ok(Answers {
        path: PathBuf::from(path),
        sep,
        dot,
        project,
        author,
        version,
        release,
        suffix,
        master,
        extensions,
        makefile,
        batchfile,
    })
}

/// Ask for the root path until one without an existing `conf.py` is given
fn ask_root_path<R, W>(p: &mut Prompter<R, W>, default: &str) -> Result<String>
where
    R: BufRead,
    W: Write,
{
    let mut path = p.ask("Root path for the documentation", Some(default), validate::is_path)?;

    while has_existing_conf(Path::new(&path)) {
        p.say("")?;
        p.say_bold("Error: an existing conf.py has been found in the selected root path.")?;
        p.say("sphinx-quickstart will not overwrite existing Sphinx projects.")?;
        p.say("")?;
        path = p.ask(
            "Please enter a new root path (or just Enter to exit)",
            None,
            validate::is_path,
        )?;
        if path.is_empty() {
            return Err(QuickstartError::Aborted);
        }
    }

    Ok(path)
}

/// Re-ask for the master document name while that file already exists
fn ensure_free_master<R, W>(
    p: &mut Prompter<R, W>,
    root: &str,
    mut master: String,
    suffix: &str,
) -> Result<String>
where
    R: BufRead,
    W: Write,
{
    loop {
        let file_name = format!("{}{}", master, suffix);
        if !has_existing_master(Path::new(root), &file_name) {
            return Ok(master);
        }

        p.say("")?;
        p.say_bold(&format!(
            "Error: the master file {} has already been found in the selected root path.",
            file_name
        ))?;
        p.say("sphinx-quickstart will not overwrite the existing file.")?;
        p.say("")?;
        master = p.ask(
            "Please enter a new file name, or rename the existing file and press Enter",
            Some(master.as_str()),
            validate::nonempty,
        )?;
    }
}

fn ask_yes_no<R, W>(p: &mut Prompter<R, W>, text: &str, default: bool) -> Result<bool>
where
    R: BufRead,
    W: Write,
{
    let hint = if default { "(Y/n)" } else { "(y/N)" };
    p.ask(&format!("{} {}", text, hint), Some(yes_no(default)), validate::boolean)
}
