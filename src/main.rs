//! mdline CLI - convert a Markdown subset file to HTML

use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{ArgAction, Parser};

use mdline::{Error, Options, ParagraphMode};

const USAGE: &str = "Usage: mdline <markdown_file> <html_file>";

#[derive(Parser)]
#[command(name = "mdline")]
#[command(version, about = "Convert headings, lists and paragraphs from Markdown to HTML", long_about = None)]
#[command(after_help = "EXAMPLES:
    mdline README.md README.html    Convert a file
    mdline - out.html < notes.md    Read Markdown from stdin
    mdline notes.md -               Print HTML to stdout")]
struct Cli {
    /// Markdown file to read (`-` for stdin)
    #[arg(value_name = "markdown_file")]
    input: PathBuf,

    /// HTML file to write, replaced if it exists (`-` for stdout)
    #[arg(value_name = "html_file")]
    output: PathBuf,

    /// Emit plain lines as trimmed text instead of `<p>` elements
    #[arg(long)]
    raw_paragraphs: bool,

    /// Escape `<`, `>`, `&` and `"` in text
    #[arg(long)]
    escape_html: bool,

    /// More log output: -v info, -vv debug, -vvv trace
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn options(&self) -> Options {
        Options {
            paragraphs: if self.raw_paragraphs {
                ParagraphMode::Raw
            } else {
                ParagraphMode::Wrap
            },
            escape_html: self.escape_html,
        }
    }

    fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(_) => {
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_level()))
        .format_timestamp(None)
        .init();

    match mdline::convert_file(&cli.input, &cli.output, &cli.options()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e @ Error::MissingInput { .. }) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
