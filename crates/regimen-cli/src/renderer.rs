//! Terminal output for the markdown produced by the core display types.
//!
//! Rich mode styles the markdown with termimad; plain mode prints it as is,
//! which is also what the tests and pipes see with `--no-color`.

use anyhow::Result;
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
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Prints markdown, styled when rich output is enabled.
    pub fn render(&self, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            print!("{markdown}");
            return Ok(());
        }

        for line in markdown.lines() {
            match line {
                // Keep the hashes visible; termimad would strip them.
                header if header.starts_with('#') => println!("\x1b[36m{header}\x1b[0m"),
                checked if checked.starts_with("- [x]") => {
                    println!("\x1b[32m{checked}\x1b[0m")
                }
                other => {
                    self.skin.print_inline(other);
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
