//! sphinx-quickstart - set up a new Sphinx documentation project

use anyhow::Result;
use clap::Parser;
use quickstart_core::tui::QuickstartArgs;
use quickstart_core::{QuickstartError, TermEncoding};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sphinx-quickstart")]
#[command(about = "Interactive setup for new Sphinx documentation projects")]
#[command(version)]
pub struct Args {
    /// YAML file with default answers shown in brackets at each prompt
    #[arg(long)]
    pub answers: Option<PathBuf>,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Terminal input encoding label (utf-8, latin-1, cp1252, euc-jp, ...); detected from the locale by default
    #[arg(long, value_parser = parse_encoding)]
    pub encoding: Option<TermEncoding>,
}

fn parse_encoding(s: &str) -> Result<TermEncoding, String> {
    s.parse()
}

impl From<Args> for QuickstartArgs {
    fn from(args: Args) -> Self {
        QuickstartArgs {
            answers: args.answers,
            no_color: args.no_color,
            encoding: args.encoding,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Ctrl+C at a prompt is a normal way out, not a failure
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        quickstart_core::tui::notify_interrupted();
        std::process::exit(0);
    })
    .ok();

    let args = Args::parse();
    let result = quickstart_core::run(args.into()).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    match result {
        Err(e) if matches!(e.downcast_ref::<QuickstartError>(), Some(QuickstartError::Aborted)) => {
            std::process::exit(1);
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_required() {
        let args = Args::try_parse_from(["sphinx-quickstart"]).unwrap();
        assert!(args.answers.is_none());
        assert!(!args.no_color);
        assert!(args.encoding.is_none());
    }

    #[test]
    fn test_parse_flags() {
        let args = Args::try_parse_from([
            "sphinx-quickstart",
            "--answers",
            "answers.yaml",
            "--no-color",
            "--encoding",
            "iso-8859-15",
        ])
        .unwrap();
        let quickstart: QuickstartArgs = args.into();
        assert_eq!(quickstart.answers, Some(PathBuf::from("answers.yaml")));
        assert!(quickstart.no_color);
        assert_eq!(
            quickstart.encoding.map(|encoding| encoding.to_string()),
            Some("ISO-8859-15".to_string())
        );
    }

    #[test]
    fn test_unknown_encoding_is_rejected() {
        assert!(Args::try_parse_from(["sphinx-quickstart", "--encoding", "klingon"]).is_err());
    }
}
