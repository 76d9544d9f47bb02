use crossterm::style::Color;

/// Semantic colors for console output.
pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const INFO: Color = Color::Cyan;
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const ARROW: &str = "→";
    pub const REMOTE: &str = "📡";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const ARROW: &str = "->";
    pub const REMOTE: &str = "[KV]";
}

/// Icon set picked once per run
#[derive(Debug, Clone, Copy)]
pub struct Icons {
    pub success: &'static str,
    pub error: &'static str,
    pub warning: &'static str,
    pub arrow: &'static str,
    pub remote: &'static str,
}

impl Icons {
    pub fn new(supports_unicode: bool) -> Self {
        if supports_unicode {
            Self {
                success: icons::SUCCESS,
                error: icons::ERROR,
                warning: icons::WARNING,
                arrow: icons::ARROW,
                remote: icons::REMOTE,
            }
        } else {
            Self {
                success: icons_ascii::SUCCESS,
                error: icons_ascii::ERROR,
                warning: icons_ascii::WARNING,
                arrow: icons_ascii::ARROW,
                remote: icons_ascii::REMOTE,
            }
        }
    }
}

/// Wrap `text` in `color` when color output is enabled
pub fn paint(text: &str, color: Color, enabled: bool) -> String {
    use crossterm::style::Stylize;

    if enabled {
        crossterm::style::style(text).with(color).to_string()
    } else {
        text.to_string()
    }
}
