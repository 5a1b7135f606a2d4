//! Status lines for the tilemerge CLI.
//!
//! Progress, warnings and errors go to stderr as a right-aligned verb
//! followed by a message, coloured when stderr is a terminal. Stdout is left
//! to the usage banner and `kind:message` error lines.

use std::io::{self, IsTerminal, Write};
use std::path::Path;

const VERB_WIDTH: usize = 12;

/// Colour of a status verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Progress,
    Warning,
    Error,
}

impl Tone {
    fn ansi(self) -> &'static str {
        match self {
            Tone::Progress => "\x1b[1;32m",
            Tone::Warning => "\x1b[1;33m",
            Tone::Error => "\x1b[1;31m",
        }
    }
}

const HIGHLIGHT: &str = "\x1b[36m";
const RESET: &str = "\x1b[0m";

/// Writes status lines to stderr.
pub struct Printer {
    color: bool,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

impl Printer {
    /// Colour follows whether stderr is a terminal.
    pub fn new() -> Self {
        Self {
            color: io::stderr().is_terminal(),
        }
    }

    pub fn status(&self, verb: &str, message: &str) {
        self.emit(Tone::Progress, verb, message);
    }

    pub fn warning(&self, verb: &str, message: &str) {
        self.emit(Tone::Warning, verb, message);
    }

    pub fn error(&self, verb: &str, message: &str) {
        self.emit(Tone::Error, verb, message);
    }

    /// Mark up a path or name so it stands out in a message.
    pub fn highlight(&self, text: &str) -> String {
        if self.color {
            format!("{HIGHLIGHT}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    /// Render one status line without the trailing newline.
    pub fn line(&self, tone: Tone, verb: &str, message: &str) -> String {
        let verb = format!("{verb:>VERB_WIDTH$}");
        if self.color {
            format!("{}{verb}{RESET} {message}", tone.ansi())
        } else {
            format!("{verb} {message}")
        }
    }

    fn emit(&self, tone: Tone, verb: &str, message: &str) {
        let line = self.line(tone, verb, message);
        let _ = writeln!(io::stderr().lock(), "{line}");
    }
}

/// `count(2, "tileset")` is "2 tilesets"; nouns take a plain `s` plural.
pub fn count(n: usize, noun: &str) -> String {
    match n {
        1 => format!("1 {noun}"),
        _ => format!("{n} {noun}s"),
    }
}

/// Pixel dimensions as `WxH`.
pub fn dimensions(width: u32, height: u32) -> String {
    format!("{width}x{height}")
}

/// `path` relative to the working directory when it lies beneath it.
pub fn relative_path(path: &Path) -> String {
    let relative = std::env::current_dir()
        .ok()
        .and_then(|cwd| path.strip_prefix(cwd).ok().map(Path::to_path_buf));

    match relative {
        Some(rel) if rel.as_os_str().is_empty() => ".".to_string(),
        Some(rel) => rel.display().to_string(),
        None => path.display().to_string(),
    }
}
