//! Overlay rendering (player, search, detail screens, help popup, notices)

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, ListItem, Padding, Paragraph, Wrap},
    Frame,
};

use crate::model::{AppModel, Detail, Track};
use super::progress::progress_gauge;
use super::theme::{gradient_color, Palette};
use super::utils::{centered_rect, format_count, render_scrollable_list, truncate_string};

fn track_rows<'a>(model: &AppModel, tracks: &[Track], selected: usize, width: usize, palette: &Palette) -> Vec<ListItem<'a>> {
    let title_width = width.saturating_sub(42).max(10);
    tracks
        .iter()
        .enumerate()
        .map(|(i, track)| {
            let playing = model
                .playback
                .current_track()
                .is_some_and(|t| t.id == track.id);
            let marker = if playing { "▶" } else { " " };
            let likes = track.likes.as_deref().map(|l| format!("♥ {}", l)).unwrap_or_default();
            let text = format!(
                " {} {:>2}  {} {:<18} {:>6} {:>7}",
                marker,
                i + 1,
                truncate_string(&track.title, title_width),
                truncate_string(&track.artist, 18),
                track.duration,
                likes
            );
            ListItem::new(text).style(palette.row(i == selected))
        })
        .collect()
}

pub fn render_player(frame: &mut Frame, model: &AppModel, palette: &Palette) {
    let Some(track) = model.playback.current_track() else {
        return;
    };
    let area = frame.area();
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.border(true))
        .title(" NOW PLAYING ")
        .title_style(palette.title())
        .title_bottom(Line::from(" Space play/pause · l like · Esc close ").right_aligned())
        .style(Style::default().bg(palette.background));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Min(3),    // Artwork / visualizer
            Constraint::Length(3), // Title + artist
            Constraint::Length(1), // Progress
            Constraint::Length(2), // Controls
            Constraint::Length(1), // Background hint
        ])
        .split(inner);

    let artwork = if model.playback.is_playing() {
        "▂ ▅ ▃ ▇ ▄"
    } else {
        "▁ ▁ ▁ ▁ ▁"
    };
    frame.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled(artwork, Style::default().fg(palette.accent_alt))),
            Line::from(Span::styled(track.image_url.clone(), Style::default().fg(palette.muted))),
        ])
        .alignment(Alignment::Center),
        chunks[0],
    );

    let liked = model.playback.is_liked(&track.id);
    let heart = if liked {
        Span::styled("♥", Style::default().fg(palette.danger))
    } else {
        Span::styled("♡", Style::default().fg(palette.muted))
    };
    frame.render_widget(
        Paragraph::new(vec![
            Line::from(vec![
                Span::styled(track.title.clone(), palette.title()),
                Span::raw("  "),
                heart,
            ]),
            Line::from(Span::styled(track.artist.clone(), Style::default().fg(palette.muted))),
        ]),
        chunks[1],
    );

    frame.render_widget(progress_gauge(&model.playback, &track.duration, palette), chunks[2]);

    let toggle = if model.playback.is_playing() { "⏸" } else { "▶" };
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("⏮    ", Style::default().fg(palette.muted)),
            Span::styled(toggle, palette.title().add_modifier(Modifier::BOLD)),
            Span::styled("    ⏭", Style::default().fg(palette.muted)),
        ]))
        .alignment(Alignment::Center),
        chunks[3],
    );

    frame.render_widget(
        Paragraph::new("● Playing in background enabled")
            .alignment(Alignment::Center)
            .style(Style::default().fg(palette.accent)),
        chunks[4],
    );
}

pub fn render_search(frame: &mut Frame, model: &AppModel, palette: &Palette) {
    let area = frame.area();
    frame.render_widget(Clear, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Query input
            Constraint::Length(5), // Popular, categories, artists
            Constraint::Min(0),    // Results
        ])
        .split(area);

    let query_text = if model.ui.search_query.is_empty() {
        Span::styled("Search...", Style::default().fg(palette.muted))
    } else {
        Span::styled(model.ui.search_query.clone(), Style::default().fg(palette.text))
    };
    frame.render_widget(
        Paragraph::new(Line::from(query_text)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Search (Esc to close) ")
                .title_style(palette.title())
                .padding(Padding::horizontal(1))
                .border_style(palette.border(true)),
        ),
        chunks[0],
    );

    let suggestions = vec![
        Line::from(vec![
            Span::styled("Popular now: ", Style::default().fg(palette.muted)),
            Span::raw(model.catalog.popular_searches.join(" · ")),
        ]),
        Line::from(vec![
            Span::styled("Categories: ", Style::default().fg(palette.muted)),
            Span::raw(model.catalog.search_categories.join(" · ")),
        ]),
        suggested_artists_line(model, palette),
    ];
    frame.render_widget(
        Paragraph::new(suggestions)
            .wrap(Wrap { trim: true })
            .block(Block::default().padding(Padding::horizontal(1))),
        chunks[1],
    );

    let results = model.search_results();
    let title = if model.ui.search_query.trim().is_empty() {
        " Trending ".to_string()
    } else {
        format!(" {} results ", results.len())
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(palette.border(false));
    if results.is_empty() {
        frame.render_widget(
            Paragraph::new("No matches")
                .alignment(Alignment::Center)
                .style(Style::default().fg(palette.muted))
                .block(block),
            chunks[2],
        );
    } else {
        let width = chunks[2].width.saturating_sub(4) as usize;
        let rows = track_rows(model, &results, model.ui.search_selected, width, palette);
        render_scrollable_list(frame, chunks[2], rows, model.ui.search_selected, block);
    }
}

fn suggested_artists_line<'a>(model: &AppModel, palette: &Palette) -> Line<'a> {
    let mut spans = vec![Span::styled("You might like: ", Style::default().fg(palette.muted))];
    for (i, artist) in model.catalog.suggested_artists.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" · "));
        }
        spans.push(Span::styled(artist.name.clone(), Style::default().fg(gradient_color(&artist.gradient))));
        if let Some(viewers) = &artist.viewers {
            spans.push(Span::styled(format!(" ({})", viewers), Style::default().fg(palette.muted)));
        }
    }
    Line::from(spans)
}

pub fn render_detail(frame: &mut Frame, model: &AppModel, detail: &Detail, palette: &Palette) {
    let area = frame.area();
    frame.render_widget(Clear, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(0)])
        .split(area);

    let tracks = model.detail_tracks();

    let (header, accent) = match detail {
        Detail::Playlist(id) => {
            let category = model.catalog.category(id);
            let name = category.map(|c| c.name.clone()).unwrap_or_else(|| "Playlist".to_string());
            let accent = category.map(|c| gradient_color(&c.gradient)).unwrap_or(palette.accent);
            let count = category.map(|c| c.track_count).unwrap_or(0);
            (
                vec![
                    Line::from(Span::styled(name, Style::default().fg(accent).add_modifier(Modifier::BOLD))),
                    Line::from(Span::styled(format!("Playlist · {} tracks", count), Style::default().fg(palette.muted))),
                    Line::from(""),
                    Line::from(Span::styled("Enter play · Esc back", Style::default().fg(palette.muted))),
                ],
                accent,
            )
        }
        Detail::Creator(id) => match model.catalog.creator(id) {
            Some(creator) => (
                vec![
                    Line::from(vec![
                        Span::styled(creator.name.clone(), palette.title()),
                        Span::styled(" ✔", Style::default().fg(palette.accent_alt)),
                        Span::styled(
                            creator
                                .viewers
                                .as_ref()
                                .map(|v| format!("  ● {} live", v))
                                .unwrap_or_default(),
                            Style::default().fg(palette.danger),
                        ),
                    ]),
                    Line::from(Span::styled(creator.handle.clone(), Style::default().fg(palette.muted))),
                    Line::from(creator.bio.clone()),
                    Line::from(format!(
                        "{} followers · {} following · {}",
                        creator.followers,
                        creator.following,
                        creator.tags.join(", ")
                    )),
                    Line::from(Span::styled(
                        format!(
                            "Library {} · Total: {} plays",
                            tracks.len(),
                            format_count(tracks.iter().filter_map(|t| t.plays).sum())
                        ),
                        Style::default().fg(palette.muted),
                    )),
                ],
                gradient_color(&creator.gradient),
            ),
            None => (vec![Line::from("Unknown creator")], palette.accent),
        },
    };

    frame.render_widget(
        Paragraph::new(header).wrap(Wrap { trim: true }).block(
            Block::default()
                .borders(Borders::ALL)
                .padding(Padding::horizontal(1))
                .border_style(Style::default().fg(accent))
                .style(Style::default().bg(palette.background)),
        ),
        chunks[0],
    );

    let width = chunks[1].width.saturating_sub(4) as usize;
    let rows = track_rows(model, &tracks, model.ui.detail_selected, width, palette);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Tracks ")
        .border_style(palette.border(true))
        .style(Style::default().bg(palette.background));
    render_scrollable_list(frame, chunks[1], rows, model.ui.detail_selected, block);
}

pub fn render_notice(frame: &mut Frame, message: &str, palette: &Palette) {
    let area = frame.area();
    let width = (message.chars().count() as u16 + 4).min(area.width);
    let popup_area = Rect {
        x: area.width.saturating_sub(width) / 2,
        y: area.height.saturating_sub(4),
        width,
        height: 3.min(area.height),
    };
    frame.render_widget(Clear, popup_area);
    frame.render_widget(
        Paragraph::new(message.to_string())
            .style(Style::default().fg(palette.text))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(palette.accent))
                    .style(Style::default().bg(palette.background)),
            ),
        popup_area,
    );
}

pub fn render_help_popup(frame: &mut Frame, palette: &Palette) {
    let keybindings = vec![
        ("", "── Navigation ──"),
        ("Tab / Shift+Tab", "Cycle tabs"),
        ("1-4", "Jump to tab"),
        ("↑ / ↓", "Move selection"),
        ("← / →", "Library section"),
        ("Enter", "Play / Open"),
        ("/", "Search"),
        ("P", "Creator profile"),
        ("Esc / Backspace", "Close overlay"),
        ("", ""),
        ("", "── Playback ──"),
        ("Space", "Play / Pause"),
        ("M", "Expand mini-player"),
        ("L", "Like (in player)"),
        ("", ""),
        ("", "── General ──"),
        ("H / ?", "Toggle this help"),
        ("Q", "Quit"),
    ];

    let popup_area = centered_rect(frame.area(), 50, keybindings.len() as u16 + 2);
    frame.render_widget(Clear, popup_area);

    let lines: Vec<Line> = keybindings
        .iter()
        .map(|(key, desc)| {
            if key.is_empty() {
                Line::from(Span::styled(
                    format!("{:^44}", desc),
                    palette.title(),
                ))
            } else {
                Line::from(vec![
                    Span::styled(
                        format!("{:>18}", key),
                        Style::default().fg(palette.accent_alt).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::styled(desc.to_string(), Style::default().fg(palette.text)),
                ])
            }
        })
        .collect();

    let help_text = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(palette.border(true))
            .title(" Help (H or Esc to close) ")
            .title_style(palette.title())
            .style(Style::default().bg(palette.background)),
    );

    frame.render_widget(help_text, popup_area);
}
