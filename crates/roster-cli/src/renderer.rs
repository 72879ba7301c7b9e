//! Terminal rendering for menu and listing blocks.
//!
//! Multi-line output blocks (the menu, listing pages, the school chooser) are
//! composed as text by the core display wrappers and printed through this
//! renderer, which applies a termimad skin in rich mode and prints verbatim
//! under `--no-color`.

use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between styled and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Cyan);
        skin.bold.set_fg(Color::Green);
        skin.italic.set_fg(Color::Magenta);

        Self { rich_enabled, skin }
    }

    /// Render a text block to the terminal
    pub fn render(&self, text: &str) {
        if self.rich_enabled {
            self.skin.print_text(text);
        } else {
            print!("{text}");
        }
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
