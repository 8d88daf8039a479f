//! Glyph themes for the todo list
//!
//! Terminals differ wildly in what they can draw, so every glyph the list uses
//! comes from here in three flavours: emoji, Unicode symbols and plain ASCII.

use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    Unicode,
    /// ASCII characters (maximum compatibility)
    #[default]
    Ascii,
}

/// Complete glyph set for a specific theme
#[derive(Debug, Clone)]
pub struct IconSet {
    pub unchecked: &'static str,
    pub checked: &'static str,
    pub toggle_all: &'static str,
    pub destroy: &'static str,
    pub selected: &'static str,
}

#[derive(Debug, Clone)]
pub struct IconService {
    current_theme: IconTheme,
}

impl Default for IconService {
    fn default() -> Self {
        Self::new(IconTheme::default())
    }
}

impl IconService {
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    /// Cycle to the next icon theme in the sequence: Ascii -> Unicode -> Emoji -> Ascii
    pub fn cycle_icon_theme(&mut self) {
        self.current_theme = match self.current_theme {
            IconTheme::Ascii => IconTheme::Unicode,
            IconTheme::Unicode => IconTheme::Emoji,
            IconTheme::Emoji => IconTheme::Ascii,
        };
    }

    #[must_use]
    pub fn icons(&self) -> IconSet {
        match self.current_theme {
            IconTheme::Emoji => IconSet {
                unchecked: "🔳",
                checked: "✅",
                toggle_all: "⏬",
                destroy: "❌",
                selected: "👉",
            },
            IconTheme::Unicode => IconSet {
                unchecked: "□",
                checked: "✓",
                toggle_all: "❯",
                destroy: "×",
                selected: "▶",
            },
            IconTheme::Ascii => IconSet {
                unchecked: "[ ]",
                checked: "[x]",
                toggle_all: "v",
                destroy: "x",
                selected: ">",
            },
        }
    }

    /// Checkbox glyph for a task's completion state
    #[must_use]
    pub fn checkbox(&self, completed: bool) -> &'static str {
        let icons = self.icons();
        if completed {
            icons.checked
        } else {
            icons.unchecked
        }
    }

    #[must_use]
    pub fn toggle_all(&self) -> &'static str {
        self.icons().toggle_all
    }

    #[must_use]
    pub fn destroy(&self) -> &'static str {
        self.icons().destroy
    }

    #[must_use]
    pub fn selected(&self) -> &'static str {
        self.icons().selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme() {
        assert_eq!(IconService::default().theme(), IconTheme::Ascii);
    }

    #[test]
    fn test_checkbox_follows_completion() {
        let service = IconService::new(IconTheme::Unicode);
        assert_eq!(service.checkbox(false), "□");
        assert_eq!(service.checkbox(true), "✓");
    }

    #[test]
    fn test_cycle_wraps_around() {
        let mut service = IconService::default();
        service.cycle_icon_theme();
        assert_eq!(service.theme(), IconTheme::Unicode);
        service.cycle_icon_theme();
        assert_eq!(service.theme(), IconTheme::Emoji);
        service.cycle_icon_theme();
        assert_eq!(service.theme(), IconTheme::Ascii);
        assert_eq!(service.destroy(), "x");
    }
}
