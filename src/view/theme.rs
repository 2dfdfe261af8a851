//! Color palettes for the two visual themes

use ratatui::style::{Color, Modifier, Style};

use crate::config::Theme;

#[derive(Clone, Copy, Debug)]
pub struct Palette {
    pub accent: Color,
    pub accent_alt: Color,
    pub text: Color,
    pub muted: Color,
    pub background: Color,
    pub danger: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Midnight => Self {
                accent: Color::Rgb(168, 85, 247),
                accent_alt: Color::Rgb(34, 211, 238),
                text: Color::White,
                muted: Color::Rgb(100, 116, 139),
                background: Color::Rgb(2, 6, 23),
                danger: Color::Rgb(251, 113, 133),
            },
            Theme::Zinc => Self {
                accent: Color::Rgb(74, 222, 128),
                accent_alt: Color::Rgb(161, 161, 170),
                text: Color::Rgb(244, 244, 245),
                muted: Color::Rgb(113, 113, 122),
                background: Color::Rgb(9, 9, 11),
                danger: Color::Rgb(248, 113, 113),
            },
        }
    }

    pub fn border(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.accent)
        } else {
            Style::default().fg(self.muted)
        }
    }

    pub fn row(&self, selected: bool) -> Style {
        if selected {
            Style::default()
                .fg(self.background)
                .bg(self.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.text)
        }
    }

    pub fn title(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }
}

/// Terminal color for a catalog gradient token
pub fn gradient_color(token: &str) -> Color {
    match token {
        "purple" => Color::Rgb(168, 85, 247),
        "amber" => Color::Rgb(251, 191, 36),
        "blue" => Color::Rgb(96, 165, 250),
        "indigo" => Color::Rgb(129, 140, 248),
        "emerald" => Color::Rgb(52, 211, 153),
        "rose" => Color::Rgb(251, 113, 133),
        _ => Color::Gray,
    }
}
