use ratatui::style::{Color, Modifier, Style};

/// Color theme for the TUI. Two variants — dark and light — with dark as
/// the default; the active one is persisted across sessions.
pub struct Theme {
    pub text: Color,
    pub dim: Color,
    pub border: Color,
    pub accent: Color,
    pub header_fg: Color,
    pub header_bg: Color,
    pub highlight_bg: Color,
    pub warn: Color,

    pub score_high: Color,
    pub score_mid: Color,
    pub score_low: Color,

    pub footer_fg: Color,
    pub footer_bg: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            text: Color::White,
            dim: Color::DarkGray,
            border: Color::Rgb(60, 60, 80),
            accent: Color::Rgb(60, 140, 255),
            header_fg: Color::White,
            header_bg: Color::Rgb(30, 60, 120),
            highlight_bg: Color::Rgb(30, 40, 80),
            warn: Color::Rgb(255, 200, 0),

            score_high: Color::Rgb(0, 200, 80),
            score_mid: Color::Rgb(255, 200, 0),
            score_low: Color::Rgb(255, 80, 80),

            footer_fg: Color::Rgb(120, 120, 140),
            footer_bg: Color::Reset,
        }
    }

    pub fn light() -> Self {
        Self {
            text: Color::Black,
            dim: Color::Gray,
            border: Color::Rgb(170, 170, 185),
            accent: Color::Rgb(20, 80, 200),
            header_fg: Color::White,
            header_bg: Color::Rgb(20, 80, 200),
            highlight_bg: Color::Rgb(200, 215, 245),
            warn: Color::Rgb(180, 120, 0),

            score_high: Color::Rgb(0, 140, 60),
            score_mid: Color::Rgb(180, 120, 0),
            score_low: Color::Rgb(200, 40, 40),

            footer_fg: Color::Rgb(90, 90, 105),
            footer_bg: Color::Reset,
        }
    }

    /// Look up a theme by its persisted name; unknown names fall back to
    /// dark.
    pub fn by_name(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Color a Metacritic score the way review aggregators do.
    pub fn score_style(&self, score: Option<i32>) -> Style {
        match score {
            Some(s) if s >= 75 => Style::default().fg(self.score_high),
            Some(s) if s >= 50 => Style::default().fg(self.score_mid),
            Some(_) => Style::default().fg(self.score_low),
            None => Style::default().fg(self.dim),
        }
    }

    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.header_fg)
            .bg(self.header_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn highlight_style(&self) -> Style {
        Style::default()
            .bg(self.highlight_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn footer_style(&self) -> Style {
        Style::default().fg(self.footer_fg).bg(self.footer_bg)
    }
}
