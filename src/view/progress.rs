//! Mini-player and progress gauge rendering

use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Gauge},
    Frame,
};

use crate::model::{PlaybackSession, PROGRESS_MAX};
use super::theme::Palette;

pub fn progress_gauge<'a>(playback: &PlaybackSession, duration: &str, palette: &Palette) -> Gauge<'a> {
    let ratio = (playback.progress() / PROGRESS_MAX).clamp(0.0, 1.0);
    Gauge::default()
        .gauge_style(Style::default().fg(palette.accent).bg(palette.background))
        .ratio(ratio)
        .label(format!("{} / {}", playback.elapsed_label(), duration))
}

/// Collapsed player shown above the tab bar while the full player is closed
pub fn render_mini_player(frame: &mut Frame, area: Rect, playback: &PlaybackSession, palette: &Palette) {
    let Some(track) = playback.current_track() else {
        return;
    };

    let status = if playback.is_playing() { "▶" } else { "⏸" };
    let title = format!(" {} {} | {} ", status, track.title, track.artist);

    let gauge = progress_gauge(playback, &track.duration, palette).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(palette.border(true))
            .title(title)
            .title_bottom(Line::from(" Space play/pause · m expand ").right_aligned()),
    );

    frame.render_widget(gauge, area);
}
