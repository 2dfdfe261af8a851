//! Full-screen views: splash, onboarding and the four tab bodies

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, ListItem, Padding, Paragraph, Wrap},
    Frame,
};

use crate::model::{AppModel, LibrarySection, SelectedItem, Tab, INTERESTS, ONBOARDING_STEPS};
use super::theme::{gradient_color, Palette};
use super::utils::{centered_rect, format_count, render_scrollable_list, truncate_string};

pub fn render_splash(frame: &mut Frame, palette: &Palette) {
    let area = centered_rect(frame.area(), 40, 7);
    let lines = vec![
        Line::from(Span::styled("✦", Style::default().fg(palette.accent_alt))),
        Line::from(""),
        Line::from(Span::styled(
            "Sublyme",
            palette.title().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "LAYER YOUR INTENTIONS",
            Style::default().fg(palette.muted),
        )),
        Line::from(""),
        Line::from(Span::styled("…", Style::default().fg(palette.accent))),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

pub fn render_onboarding(frame: &mut Frame, model: &AppModel, palette: &Palette) {
    let onboarding = &model.ui.onboarding;
    let area = centered_rect(frame.area(), 60, 20);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Skip hint
            Constraint::Min(0),    // Step body
            Constraint::Length(1), // Step dots
            Constraint::Length(1), // Continue hint
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new("s  Skip")
            .alignment(Alignment::Right)
            .style(Style::default().fg(palette.muted)),
        chunks[0],
    );

    let mut body = Vec::new();
    match onboarding.step {
        0 => {
            body.push(Line::from(Span::styled("Subliminals under", palette.title())));
            body.push(Line::from(Span::styled("your favorite music", palette.title())));
            body.push(Line::from(""));
            body.push(Line::from(Span::styled(
                "Listen to your favorite songs while absorbing powerful affirmations in the background. Manifest while you vibe.",
                Style::default().fg(palette.muted),
            )));
        }
        1 => {
            body.push(Line::from(Span::styled("What do you want to work on?", palette.title())));
            body.push(Line::from(""));
            for (i, interest) in INTERESTS.iter().enumerate() {
                let picked = onboarding.interests.contains(interest);
                let marker = if picked { "[x]" } else { "[ ]" };
                body.push(Line::from(Span::styled(
                    format!("{} {}", marker, interest),
                    palette.row(i == onboarding.cursor),
                )));
            }
            body.push(Line::from(""));
            body.push(Line::from(Span::styled(
                "↑↓ move · Space pick",
                Style::default().fg(palette.muted),
            )));
        }
        _ => {
            body.push(Line::from(Span::styled("Stay consistent", palette.title())));
            body.push(Line::from(""));
            body.push(Line::from(Span::styled(
                "Subliminals work best with repetition. Allow notifications to get daily reminders and track your streaks.",
                Style::default().fg(palette.muted),
            )));
        }
    }
    frame.render_widget(
        Paragraph::new(body)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        chunks[1],
    );

    let dots: Vec<Span> = (0..ONBOARDING_STEPS)
        .map(|i| {
            if i == onboarding.step {
                Span::styled(" ━━ ", Style::default().fg(palette.accent))
            } else {
                Span::styled(" ─ ", Style::default().fg(palette.muted))
            }
        })
        .collect();
    frame.render_widget(Paragraph::new(Line::from(dots).centered()), chunks[2]);

    let cta = if onboarding.is_last_step() { "Enter  Get Started" } else { "Enter  Continue" };
    frame.render_widget(
        Paragraph::new(cta)
            .alignment(Alignment::Center)
            .style(palette.title()),
        chunks[3],
    );
}

/// One list row for any selectable item
fn item_row<'a>(model: &AppModel, item: &SelectedItem, selected: bool, width: usize, palette: &Palette) -> ListItem<'a> {
    let text = match item {
        SelectedItem::Track(track) => {
            let liked = if model.playback.is_liked(&track.id) { "♥" } else { " " };
            let plays = track.plays.map(format_count).unwrap_or_default();
            let title_width = width.saturating_sub(30).max(10);
            format!(
                " {} {} {:<18} {:>6} {:>6}",
                liked,
                truncate_string(&track.title, title_width),
                truncate_string(&track.artist, 18),
                track.duration,
                plays
            )
        }
        SelectedItem::Category { id } => match model.catalog.category(id) {
            Some(category) => format!(" ■ {:<20} {} tracks", category.name, category.track_count),
            None => format!(" ■ {}", id),
        },
        SelectedItem::Creator { id } => match model.catalog.creator(id) {
            Some(creator) => format!(" ◉ {:<20} {}  {} followers", creator.name, creator.handle, creator.followers),
            None => format!(" ◉ {}", id),
        },
    };

    let mut style = palette.row(selected);
    if !selected {
        if let SelectedItem::Category { id } = item {
            if let Some(category) = model.catalog.category(id) {
                style = style.fg(gradient_color(&category.gradient));
            }
        }
    }
    ListItem::new(text).style(style)
}

pub fn render_tab_body(frame: &mut Frame, area: Rect, model: &AppModel, tab: Tab, palette: &Palette) {
    match tab {
        Tab::Home => render_home(frame, area, model, palette),
        Tab::Explore => render_item_list(frame, area, model, " Explore ", palette),
        Tab::Library => render_library(frame, area, model, palette),
        Tab::Profile => render_profile_tab(frame, area, model, palette),
    }
}

fn render_item_list(frame: &mut Frame, area: Rect, model: &AppModel, title: &str, palette: &Palette) {
    let width = area.width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = model
        .tab_items()
        .iter()
        .enumerate()
        .map(|(i, item)| item_row(model, item, i == model.ui.selected, width, palette))
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title.to_string())
        .title_style(palette.title())
        .padding(Padding::horizontal(1))
        .border_style(palette.border(true));

    render_scrollable_list(frame, area, items, model.ui.selected, block);
}

fn render_home(frame: &mut Frame, area: Rect, model: &AppModel, palette: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Featured hero
            Constraint::Min(0),    // Categories + trending
        ])
        .split(area);

    let hero_lines = match model.catalog.featured() {
        Some(track) => vec![
            Line::from(Span::styled(" FEATURED ", Style::default().fg(palette.background).bg(palette.accent_alt))),
            Line::from(Span::styled(track.title.clone(), palette.title())),
            Line::from(Span::styled(
                "Reprogram your subconscious for limitless possibilities while you sleep.",
                Style::default().fg(palette.muted),
            )),
        ],
        None => vec![Line::from("Nothing featured")],
    };
    frame.render_widget(
        Paragraph::new(hero_lines)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .padding(Padding::horizontal(1))
                    .border_style(palette.border(model.ui.selected == 0)),
            ),
        chunks[0],
    );

    render_item_list(frame, chunks[1], model, " Explore Categories · Trending Now ", palette);
}

fn render_library(frame: &mut Frame, area: Rect, model: &AppModel, palette: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    let sections = [LibrarySection::Favorites, LibrarySection::Playlists, LibrarySection::History];
    let spans: Vec<Span> = sections
        .iter()
        .map(|s| {
            if *s == model.ui.library_section {
                Span::styled(format!(" {} ", s.label()), palette.row(true))
            } else {
                Span::styled(format!(" {} ", s.label()), Style::default().fg(palette.muted))
            }
        })
        .collect();
    frame.render_widget(Paragraph::new(Line::from(spans)), chunks[0]);

    if model.tab_items().is_empty() {
        frame.render_widget(
            Paragraph::new("Nothing here yet. Play something!")
                .style(Style::default().fg(palette.muted))
                .block(Block::default().borders(Borders::ALL).border_style(palette.border(true))),
            chunks[1],
        );
    } else {
        render_item_list(frame, chunks[1], model, " Library  ←→ section ", palette);
    }
}

fn render_profile_tab(frame: &mut Frame, area: Rect, model: &AppModel, palette: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(0)])
        .split(area);

    let stats = &model.catalog.user_stats;
    let interests = if model.ui.onboarding.interests.is_empty() {
        "No focus areas picked".to_string()
    } else {
        model.ui.onboarding.interests.join(" · ")
    };
    let lines = vec![
        Line::from(Span::styled("Alex Doe", palette.title())),
        Line::from(Span::styled("Premium Member", Style::default().fg(palette.muted))),
        Line::from(format!(
            "{} days active · {} hours listened · {} day streak",
            stats.days_active, stats.hours_listened, stats.streak
        )),
        Line::from(Span::styled(interests, Style::default().fg(palette.accent_alt))),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(palette.border(false))),
        chunks[0],
    );

    render_item_list(frame, chunks[1], model, " Creators you follow ", palette);
}
