use crossterm::style::{style, Color, Stylize};

/// How a line of console text should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Header,
    Success,
    Error,
    Muted,
}

pub struct Theme {
    pub header: Color,
    pub success: Color, // Green
    pub error: Color,   // Red
    pub muted: Color,   // Grey
}

pub const DEFAULT_THEME: Theme = Theme {
    header: Color::Rgb { r: 137, g: 180, b: 250 }, // Blue
    success: Color::Rgb { r: 166, g: 227, b: 161 },
    error: Color::Rgb { r: 243, g: 139, b: 168 },
    muted: Color::Rgb { r: 108, g: 112, b: 134 },
};

impl Theme {
    /// Render `text` in `tone`; returns it untouched when `styled` is false
    pub fn paint(&self, text: &str, tone: Tone, styled: bool) -> String {
        if !styled {
            return text.to_string();
        }
        match tone {
            Tone::Header => style(text).with(self.header).bold().to_string(),
            Tone::Success => style(text).with(self.success).to_string(),
            Tone::Error => style(text).with(self.error).to_string(),
            Tone::Muted => style(text).with(self.muted).to_string(),
        }
    }
}
