//! User-facing terminal output.
//!
//! Diagnostics go through `log`; this is what the user reads. Verbose lines
//! only appear with `--verbose`, and `--quiet` silences everything but errors.

use cyrup_termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};
use std::io::{self, Write};

/// Verbosity-aware, colored writer for stdout/stderr.
#[derive(Debug, Clone)]
pub struct OutputManager {
    verbose: bool,
    quiet: bool,
    color: ColorChoice,
}

impl OutputManager {
    /// Creates a manager; `quiet` wins over `verbose`.
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose: verbose && !quiet,
            quiet,
            color: ColorChoice::Auto,
        }
    }

    /// Whether only errors are printed.
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    fn stdout(&self, color: Option<Color>, prefix: &str, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let mut stream = StandardStream::stdout(self.color);
        write_line(&mut stream, color, prefix, message)
    }

    /// Detail line, verbose mode only.
    pub fn verbose(&self, message: &str) -> io::Result<()> {
        if self.verbose {
            self.stdout(None, "", message)?;
        }
        Ok(())
    }

    /// Plain line.
    pub fn println(&self, message: &str) -> io::Result<()> {
        self.stdout(None, "", message)
    }

    pub fn progress(&self, message: &str) -> io::Result<()> {
        self.stdout(Some(Color::Cyan), "→ ", message)
    }

    pub fn success(&self, message: &str) -> io::Result<()> {
        self.stdout(Some(Color::Green), "✓ ", message)
    }

    pub fn section(&self, title: &str) -> io::Result<()> {
        self.stdout(None, "", "")?;
        self.stdout(Some(Color::Blue), "", title)?;
        self.stdout(Some(Color::Blue), "", &"=".repeat(title.chars().count()))
    }

    pub fn indent(&self, message: &str) -> io::Result<()> {
        self.stdout(None, "   ", message)
    }

    /// Warning on stderr, unless quiet.
    pub fn warn(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let mut stream = StandardStream::stderr(self.color);
        write_line(&mut stream, Some(Color::Yellow), "⚠ ", message)
    }

    /// Error on stderr, always printed.
    pub fn error(&self, message: &str) -> io::Result<()> {
        let mut stream = StandardStream::stderr(self.color);
        write_line(&mut stream, Some(Color::Red), "✗ ", message)
    }
}

/// Writes `prefix` in `color` (bold) followed by `message` and a newline.
fn write_line<W: WriteColor>(
    out: &mut W,
    color: Option<Color>,
    prefix: &str,
    message: &str,
) -> io::Result<()> {
    if let Some(color) = color {
        out.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
        write!(out, "{prefix}")?;
        out.reset()?;
    } else {
        write!(out, "{prefix}")?;
    }
    writeln!(out, "{message}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use cyrup_termcolor::Buffer;

    #[test]
    fn quiet_overrides_verbose() {
        let output = OutputManager::new(true, true);
        assert!(output.is_quiet());
        assert!(!output.verbose);
    }

    #[test]
    fn colored_prefix_is_reset_before_message() {
        let mut buf = Buffer::ansi();
        write_line(&mut buf, Some(Color::Green), "✓ ", "done").unwrap();

        let text = String::from_utf8(buf.into_inner()).unwrap();
        assert!(text.starts_with("\x1b["));
        assert!(text.ends_with("done\n"));
        let reset = text.rfind("\x1b[0m").unwrap();
        assert!(reset < text.find("done").unwrap());
    }

    #[test]
    fn plain_line_has_no_escapes() {
        let mut buf = Buffer::no_color();
        write_line(&mut buf, Some(Color::Red), "✗ ", "failed").unwrap();

        assert_eq!(String::from_utf8(buf.into_inner()).unwrap(), "✗ failed\n");
    }
}
