//! Markdown rendering for the terminal.
//!
//! Core types format themselves as markdown. With color enabled the text goes
//! through a termimad skin line by line; headers keep their `#` markers so the
//! structure stays visible. Plain mode prints the markdown untouched.

use termimad::{crossterm::style::Color, MadSkin};

pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Cyan);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::DarkGrey);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    pub fn is_rich(&self) -> bool {
        self.rich_enabled
    }

    /// Prints a markdown document to stdout.
    pub fn render(&self, markdown: &str) {
        if !self.rich_enabled {
            print!("{markdown}");
            return;
        }
        for line in markdown.lines() {
            if line.starts_with('#') {
                println!("\x1b[36m{line}\x1b[0m");
            } else if let Some(quote) = line.strip_prefix("> ") {
                // Excerpts of log bodies
                self.skin.print_inline(&format!("  *{quote}*"));
                println!();
            } else {
                self.skin.print_inline(line);
                println!();
            }
        }
    }

    /// Prints a one-line progress note to stderr so stdout stays parseable.
    pub fn note(&self, message: &str) {
        if self.rich_enabled {
            eprintln!("\x1b[2m{message}\x1b[0m");
        } else {
            eprintln!("{message}");
        }
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
