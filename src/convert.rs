//! File-level conversion.
//!
//! A path of `-` means stdin for input and stdout for output.

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use crate::error::{Error, Result};
use crate::limits::MAX_INPUT_LEN;
use crate::{to_html_with_options, Options};

/// Path that selects the standard streams.
pub const STDIO_PATH: &str = "-";

fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == STDIO_PATH
}

/// Convert the Markdown file at `input` and write the HTML to `output`.
///
/// `input` must be an existing regular file (or `-`); otherwise
/// [`Error::MissingInput`] is returned and `output` is left untouched.
/// An existing `output` is overwritten.
pub fn convert_file(input: &Path, output: &Path, options: &Options) -> Result<()> {
    let markdown = read_markdown(input)?;
    let html = to_html_with_options(&markdown, options);
    log::debug!(
        "converted {} ({} bytes) into {} bytes of HTML",
        input.display(),
        markdown.len(),
        html.len()
    );
    write_html(output, &html)?;
    log::info!("wrote {}", output.display());
    Ok(())
}

/// Read a Markdown document from a file or, for `-`, from stdin.
pub fn read_markdown(path: &Path) -> Result<String> {
    let read_error = |source| Error::Read {
        path: path.to_path_buf(),
        source,
    };

    let markdown = if is_stdio(path) {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).map_err(read_error)?;
        buf
    } else {
        if !path.is_file() {
            return Err(Error::MissingInput {
                path: path.to_path_buf(),
            });
        }
        fs::read_to_string(path).map_err(read_error)?
    };

    if markdown.len() > MAX_INPUT_LEN {
        return Err(Error::InputTooLarge {
            path: path.to_path_buf(),
            len: markdown.len(),
        });
    }
    Ok(markdown)
}

/// Write HTML to a file, replacing it, or for `-` to stdout.
pub fn write_html(path: &Path, html: &str) -> Result<()> {
    let write_error = |source| Error::Write {
        path: path.to_path_buf(),
        source,
    };

    if is_stdio(path) {
        let mut stdout = io::stdout().lock();
        stdout.write_all(html.as_bytes()).map_err(write_error)?;
        stdout.flush().map_err(write_error)
    } else {
        fs::write(path, html).map_err(write_error)
    }
}
