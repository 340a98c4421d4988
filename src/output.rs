//! Terminal output: key/value lines and the layout lines around them.
//!
//! Every line is written through [`Printer`], which owns the writer and the
//! display settings. Write failures (a closed pipe, a full disk) are logged
//! and otherwise ignored; there is nobody left to show them to.

use std::io::Write;

use colored::{Color, Colorize};

use crate::constants::DEFAULT_SEPARATOR;
use crate::format::{FormatArg, render};

/// Writes module lines to `W`.
#[derive(Debug)]
pub struct Printer<W: Write> {
    out: W,
    separator: String,
    key_color: Option<Color>,
    styled: bool,
}

impl<W: Write> Printer<W> {
    /// Unstyled printer with the default separator.
    pub fn new(out: W) -> Self {
        Self {
            out,
            separator: DEFAULT_SEPARATOR.to_string(),
            key_color: None,
            styled: false,
        }
    }

    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    #[must_use]
    pub fn with_key_color(mut self, color: Option<Color>) -> Self {
        self.key_color = color;
        self
    }

    /// Enable ANSI styling (bold colored keys, error color, color blocks).
    #[must_use]
    pub fn with_styled(mut self, styled: bool) -> Self {
        self.styled = styled;
        self
    }

    /// Print `text` as the value of module `name`.
    pub fn print_value(&mut self, name: &str, index: u8, key_format: Option<&str>, text: &str) {
        let line = format!("{}{}{text}", self.key(name, index, key_format), self.separator);
        self.line(&line);
    }

    /// Render `format` with `args` and print the result as the value.
    ///
    /// Prints nothing at all, key included, when the rendering is empty.
    pub fn print_format(
        &mut self,
        name: &str,
        index: u8,
        key_format: Option<&str>,
        format: &str,
        error: Option<&str>,
        args: &[FormatArg],
    ) {
        let text = render(format, error, args);
        if text.is_empty() {
            return;
        }
        self.print_value(name, index, key_format, &text);
    }

    /// Print `message` in place of the value of module `name`.
    ///
    /// With a custom `format` the message replaces the rendered value, which
    /// keeps the empty-output rule of [`Printer::print_format`].
    pub fn print_error(
        &mut self,
        name: &str,
        index: u8,
        key_format: Option<&str>,
        format: Option<&str>,
        message: &str,
    ) {
        let text = match format {
            Some(format) => render(format, Some(message), &[]),
            None => message.to_string(),
        };
        if text.is_empty() {
            return;
        }

        let key = self.key(name, index, key_format);
        let line = if self.styled {
            format!("{key}{}{}", self.separator, text.red())
        } else {
            format!("{key}{}{text}", self.separator)
        };
        self.line(&line);
    }

    /// Print `user@host` and return its display width.
    pub fn print_title(&mut self, user: &str, host: &str) -> usize {
        let width = user.chars().count() + 1 + host.chars().count();
        let line = if self.styled {
            format!("{}@{}", self.style_key(user), self.style_key(host))
        } else {
            format!("{user}@{host}")
        };
        self.line(&line);
        width
    }

    /// Print a line of dashes as wide as the title.
    pub fn print_separator_line(&mut self, width: usize) {
        self.line(&"-".repeat(width));
    }

    pub fn print_break(&mut self) {
        self.line("");
    }

    /// Two rows of the 8 normal and 8 bright background colors. Skipped
    /// entirely when unstyled.
    pub fn print_colors(&mut self) {
        if !self.styled {
            return;
        }
        let normal: String = (0..8).map(|i| format!("\x1b[4{i}m   ")).collect();
        let bright: String = (0..8).map(|i| format!("\x1b[10{i}m   ")).collect();
        self.line(&format!("{normal}\x1b[0m"));
        self.line(&format!("{bright}\x1b[0m"));
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn key(&self, name: &str, index: u8, key_format: Option<&str>) -> String {
        let text = key_text(name, index, key_format);
        if self.styled {
            self.style_key(&text).to_string()
        } else {
            text
        }
    }

    fn style_key(&self, text: &str) -> colored::ColoredString {
        match self.key_color {
            Some(color) => text.bold().color(color),
            None => text.bold(),
        }
    }

    fn line(&mut self, text: &str) {
        if let Err(err) = writeln!(self.out, "{text}") {
            tracing::debug!("Failed to write output line: {err}");
        }
    }
}

/// Key shown for instance `index` of module `name`.
///
/// Without a key format this is the name, suffixed with the index when it is
/// non-zero. A key format is rendered with the index as its only argument.
#[must_use]
pub fn key_text(name: &str, index: u8, key_format: Option<&str>) -> String {
    match key_format {
        Some(format) => render(format, None, &[FormatArg::UInt8(index)]),
        None if index > 0 => format!("{name} {index}"),
        None => name.to_string(),
    }
}

/// Parse a key color given as a name (`blue`, `bright magenta`) or an ANSI
/// foreground code (`34`, `94`).
#[must_use]
pub fn parse_color(value: &str) -> Option<Color> {
    let value = value.trim();
    if let Ok(code) = value.parse::<u8>() {
        let color = match code {
            30 => Color::Black,
            31 => Color::Red,
            32 => Color::Green,
            33 => Color::Yellow,
            34 => Color::Blue,
            35 => Color::Magenta,
            36 => Color::Cyan,
            37 => Color::White,
            90 => Color::BrightBlack,
            91 => Color::BrightRed,
            92 => Color::BrightGreen,
            93 => Color::BrightYellow,
            94 => Color::BrightBlue,
            95 => Color::BrightMagenta,
            96 => Color::BrightCyan,
            97 => Color::BrightWhite,
            _ => return None,
        };
        return Some(color);
    }
    value.parse::<Color>().ok()
}
