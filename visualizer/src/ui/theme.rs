use ratatui::style::{Color, Modifier, Style};

/// Neon-green cyber theme, with one accent per side of the line.
pub struct Theme;

impl Theme {
    pub const BG: Color = Color::Rgb(0, 0, 0);
    pub const FG_NEON: Color = Color::Rgb(57, 255, 20);
    pub const FG_DIM: Color = Color::Rgb(0, 190, 0);
    pub const FG_MUTED: Color = Color::Rgb(80, 90, 80);

    /// Points the perceptron puts over the line.
    pub const OVER: Color = Color::Rgb(255, 0, 255);
    /// Points the perceptron puts under the line.
    pub const UNDER: Color = Color::Rgb(0, 255, 255);
    pub const ACCENT_YELLOW: Color = Color::Rgb(255, 255, 0);

    /// Default full-screen style.
    pub fn base() -> Style {
        Style::default().fg(Self::FG_NEON).bg(Self::BG)
    }

    pub fn border() -> Style {
        Style::default().fg(Self::FG_NEON).bg(Self::BG)
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Self::FG_NEON)
            .add_modifier(Modifier::BOLD)
    }

    pub fn dim() -> Style {
        Style::default().fg(Self::FG_DIM)
    }

    pub fn muted() -> Style {
        Style::default().fg(Self::FG_MUTED)
    }

    pub fn warn() -> Style {
        Style::default()
            .fg(Self::ACCENT_YELLOW)
            .add_modifier(Modifier::BOLD)
    }

    pub fn over() -> Style {
        Style::default().fg(Self::OVER).add_modifier(Modifier::BOLD)
    }

    pub fn under() -> Style {
        Style::default()
            .fg(Self::UNDER)
            .add_modifier(Modifier::BOLD)
    }
}
