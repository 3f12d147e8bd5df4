//! Styling for eligibility reports

use owo_colors::{OwoColorize, Style};

/// Below this many columns, reports switch to a stacked layout.
const NARROW_COLUMNS: u16 = 60;

/// The role a piece of report text plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// A company the candidate can work for, or a successful check.
    Eligible,
    /// A company the candidate cannot work for.
    Ineligible,
    /// A section heading or company name.
    Heading,
    /// Requirement descriptions and separators.
    Muted,
}

impl Tone {
    const fn style(self) -> Style {
        match self {
            Self::Eligible => Style::new().green(),
            Self::Ineligible => Style::new().red(),
            Self::Heading => Style::new().bright_blue().bold(),
            Self::Muted => Style::new().dimmed(),
        }
    }

    /// Render `text` in this tone, or unchanged when stdout has no color
    /// support.
    #[must_use]
    pub fn paint(self, text: &str) -> String {
        if supports_color::on_cached(supports_color::Stream::Stdout).is_some() {
            text.style(self.style()).to_string()
        } else {
            text.to_string()
        }
    }
}

/// Whether stdout is a terminal too narrow for column layout.
#[must_use]
pub fn is_narrow() -> bool {
    terminal_size::terminal_size().is_some_and(|(width, _)| width.0 < NARROW_COLUMNS)
}
