//! Layout rendering (header, bottom navigation)

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

use crate::model::Tab;
use super::theme::Palette;

pub fn render_header(frame: &mut Frame, area: Rect, palette: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(16), // Logo
            Constraint::Min(0),     // Search prompt
            Constraint::Length(14), // Profile shortcut
        ])
        .split(area);

    let logo = Paragraph::new(Line::from(vec![
        Span::styled(" S ", Style::default().fg(palette.background).bg(palette.accent)),
        Span::styled(" Sublyme", palette.title()),
    ]))
    .block(Block::default().borders(Borders::ALL).border_style(palette.border(false)));
    frame.render_widget(logo, chunks[0]);

    let search = Paragraph::new("/  What do you want to manifest?")
        .style(Style::default().fg(palette.muted))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .padding(Padding::horizontal(1))
                .border_style(palette.border(false)),
        );
    frame.render_widget(search, chunks[1]);

    let profile = Paragraph::new("p  Creator")
        .style(Style::default().fg(palette.accent_alt))
        .block(Block::default().borders(Borders::ALL).border_style(palette.border(false)));
    frame.render_widget(profile, chunks[2]);
}

pub fn render_bottom_nav(frame: &mut Frame, area: Rect, active: Tab, palette: &Palette) {
    let mut spans = Vec::new();
    for (i, tab) in Tab::ALL.iter().enumerate() {
        let style = if *tab == active {
            Style::default().fg(palette.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.muted)
        };
        spans.push(Span::styled(format!(" {} {} ", i + 1, tab.label()), style));
        if i + 1 < Tab::ALL.len() {
            spans.push(Span::styled("│", Style::default().fg(palette.muted)));
        }
    }

    let nav = Paragraph::new(Line::from(spans).centered())
        .block(Block::default().borders(Borders::ALL).border_style(palette.border(false)));
    frame.render_widget(nav, area);
}
