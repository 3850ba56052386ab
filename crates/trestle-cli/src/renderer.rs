//! Terminal rendering module for rich markdown output
//!
//! Uses termimad for rich markdown display, with a plain-text fallback for
//! `--no-color` and scripted use.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            print!("{markdown}");
            return Ok(());
        }

        for line in markdown.lines() {
            match line_color(line) {
                Some(color) => println!("{color}{line}\x1b[0m"),
                None => {
                    self.skin.print_inline(line);
                    println!();
                }
            }
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

/// ANSI color for lines printed verbatim: headers keep their hash marks,
/// notices are colored by severity.
fn line_color(line: &str) -> Option<&'static str> {
    if line.starts_with('#') {
        Some("\x1b[34m")
    } else if line.starts_with("Error:") {
        Some("\x1b[31m")
    } else if line.starts_with("Warning:") {
        Some("\x1b[33m")
    } else if line.starts_with("Success:") {
        Some("\x1b[32m")
    } else {
        None
    }
}
