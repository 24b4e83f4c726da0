use std::io::IsTerminal;

use colored::Color;

/// Role of a painted string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Section titles and the syncing label.
    Title,
    /// The health check banner.
    Banner,
    /// A state worth attention (node still syncing).
    Warn,
    /// A healthy state.
    Normal,
}

impl Tone {
    fn color(self) -> Color {
        match self {
            Tone::Title | Tone::Normal => Color::Green,
            Tone::Banner => Color::Cyan,
            Tone::Warn => Color::Yellow,
        }
    }
}

/// Per-call color setting. Painting is a pure function of text, tone and
/// palette; nothing is initialized or consulted process-wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn colored() -> Self {
        Self { enabled: true }
    }

    pub fn plain() -> Self {
        Self { enabled: false }
    }

    /// Colored when stdout is a terminal and `NO_COLOR` is unset.
    pub fn detect() -> Self {
        if std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal() {
            Self::colored()
        } else {
            Self::plain()
        }
    }

    pub fn is_enabled(self) -> bool {
        self.enabled
    }

    pub fn paint(self, text: &str, tone: Tone) -> String {
        if !self.enabled {
            return text.to_string();
        }
        format!("\x1b[{}m{text}\x1b[0m", tone.color().to_fg_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_palette_leaves_text_alone() {
        assert_eq!(Palette::plain().paint("Validators:", Tone::Title), "Validators:");
    }

    #[test]
    fn tones_map_to_ansi_colors() {
        let p = Palette::colored();
        assert_eq!(p.paint("Syncing", Tone::Warn), "\x1b[33mSyncing\x1b[0m");
        assert_eq!(p.paint("Not Syncing", Tone::Normal), "\x1b[32mNot Syncing\x1b[0m");
        assert_eq!(p.paint("Validators:", Tone::Title), "\x1b[32mValidators:\x1b[0m");
        assert_eq!(
            p.paint("Running Health Check...", Tone::Banner),
            "\x1b[36mRunning Health Check...\x1b[0m"
        );
    }
}
