//! UI rendering helpers for the terminal user interface.
//!
//! This module contains functions to render the mixer screen using `ratatui`.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph, Tabs, Wrap},
};
use std::{collections::BTreeMap, sync::LazyLock, time::Duration, time::Instant};

use crate::app::{App, Track};
use crate::catalog::Category;
use crate::config::UiSettings;

const ACCENT: Color = Color::Rgb(139, 122, 255);

/// Bar heights of the "playing" visualization, in eighths of a cell.
const WAVE_HEIGHTS: [usize; 15] = [12, 18, 24, 30, 20, 35, 28, 40, 25, 32, 22, 38, 26, 20, 16];
const WAVE_GLYPHS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

static CONTROLS_MAP: LazyLock<BTreeMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut map = BTreeMap::new();
    map.insert("h/l", "tab");
    map.insert("j/k", "up/down");
    map.insert("enter/space", "play/pause");
    map.insert("f", "favorite");
    map.insert("-/+", "volume");
    map.insert("m", "mix mode");
    map.insert("1-4", "preset");
    map.insert("x", "stop all");
    map.insert("[/]", "timer -/+");
    map.insert("t", "start timer");
    map.insert("q", "quit");
    map
});

/// Render the controls help text.
fn controls_text() -> String {
    // Keep the rendered order stable and human-friendly.
    let order = [
        "h/l", "j/k", "enter/space", "-/+", "f", "m", "1-4", "x", "[/]", "t", "q",
    ];
    order
        .iter()
        .filter_map(|k| CONTROLS_MAP.get(k).map(|v| format!("[{}] {}", k, v)))
        .collect::<Vec<String>>()
        .join(" | ")
}

/// Format a `Duration` as `MM:SS`, or `H:MM:SS` past the hour.
fn format_remaining(d: Duration) -> String {
    let secs = d.as_secs();
    if secs >= 3600 {
        format!("{}:{:02}:{:02}", secs / 3600, (secs / 60) % 60, secs % 60)
    } else {
        format!("{:02}:{:02}", secs / 60, secs % 60)
    }
}

/// Ten-cell gauge for a 0-100 volume.
fn volume_bar(volume: u8) -> String {
    let filled = usize::from(volume.min(100)).div_ceil(10);
    format!("{}{}", "█".repeat(filled), "░".repeat(10 - filled))
}

/// Wave visualization for a playing track; `phase` rotates the bars.
fn wave(phase: usize) -> String {
    (0..WAVE_HEIGHTS.len())
        .map(|i| {
            let h = WAVE_HEIGHTS[(i + phase) % WAVE_HEIGHTS.len()];
            WAVE_GLYPHS[(h * WAVE_GLYPHS.len() / 41).min(WAVE_GLYPHS.len() - 1)]
        })
        .collect()
}

fn card(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .padding(Padding {
            left: 1,
            right: 1,
            top: 0,
            bottom: 0,
        })
}

fn draw_presets(frame: &mut Frame, app: &App, area: Rect) {
    let n = app.presets.len().max(1) as u32;
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints((0..n).map(|_| Constraint::Ratio(1, n)))
        .split(area);

    for (i, (preset, col)) in app.presets.iter().zip(cols.iter()).enumerate() {
        let active = app.active_preset == Some(preset.id);
        let status = if active {
            Line::from(Span::styled("● active", Style::default().fg(Color::Green)))
        } else {
            Line::from(format!("[{}] start", i + 1)).dim()
        };
        let body = vec![Line::from(preset.description).dim(), status];

        let mut block = card(preset.name).title_alignment(Alignment::Center);
        if active {
            block = block.border_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD));
        }
        let p = Paragraph::new(body)
            .alignment(Alignment::Center)
            .block(block)
            .wrap(Wrap { trim: true });
        frame.render_widget(p, *col);
    }
}

fn draw_controls(frame: &mut Frame, app: &App, now: Instant, area: Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    // Sleep timer
    let timer_status = match app.timer.remaining(now) {
        Some(left) => Span::styled(
            format!("Active: {} left", format_remaining(left)),
            Style::default().fg(Color::Green),
        ),
        None if app.timer.minutes() == 0 => Span::raw("Off: pick a duration with [ ]").dim(),
        None => Span::raw("Ready: press t to start").dim(),
    };
    let timer = Paragraph::new(vec![
        Line::from(vec![
            Span::raw("Duration: "),
            Span::styled(
                format!("{} min", app.timer.minutes()),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("  (0-{})", app.timer.max_minutes())).dim(),
        ]),
        Line::from(timer_status),
    ])
    .block(card(" sleep timer "));
    frame.render_widget(timer, cols[0]);

    // Mix mode
    let badge = if app.mix_mode {
        Span::styled("ON", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
    } else {
        Span::styled("OFF", Style::default().fg(Color::Gray))
    };
    let hint = if app.any_playing() {
        Line::from("[x] stop all").red()
    } else {
        Line::from("Play several tracks at once").dim()
    };
    let mix = Paragraph::new(vec![Line::from(vec![Span::raw("Mix mode: "), badge]), hint])
        .block(card(" mix mode "));
    frame.render_widget(mix, cols[1]);
}

fn track_line(app: &App, index: usize, track: &Track, phase: usize) -> Line<'static> {
    let spec = &track.spec;
    let play = if track.playing { "▶" } else { "‖" };
    let heart = if app.is_favorite(spec.id) {
        Span::styled("♥", Style::default().fg(Color::LightRed))
    } else {
        Span::raw("♡").dim()
    };

    let mut spans = vec![
        Span::raw(format!("{play} {} ", spec.icon)),
        Span::raw(format!("{:<26}", spec.name)),
        Span::raw(format!("{:>7}  ", spec.duration)).dim(),
        heart,
        Span::raw(format!("  {} {:>3}%", volume_bar(track.volume), track.volume)),
    ];
    if !app.source_ready(index) {
        spans.push(Span::raw("  loading…").dim());
    } else if track.playing {
        spans.push(Span::styled(format!("  {}", wave(phase)), Style::default().fg(ACCENT)));
    }
    Line::from(spans)
}

fn draw_tracks(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    let titles: Vec<Line> = Category::ALL
        .iter()
        .map(|c| Line::from(format!("{} {}", c.icon(), c.label())))
        .collect();
    let tabs = Tabs::new(titles)
        .select(app.tab.index())
        .highlight_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL).title(" categories "));
    frame.render_widget(tabs, chunks[0]);

    let phase = frame.count() / 4;
    let display = app.display_indices();
    let items: Vec<ListItem> = display
        .iter()
        .map(|&i| ListItem::new(track_line(app, i, &app.tracks[i], phase)))
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" tracks "))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut state = ListState::default();
    state.select(display.iter().position(|&i| i == app.selected));
    frame.render_stateful_widget(list, chunks[1], &mut state);
}

fn draw_now_playing(frame: &mut Frame, app: &App, playing: &[usize], area: Rect) {
    let lines: Vec<Line> = playing
        .iter()
        .map(|&i| {
            let t = &app.tracks[i];
            Line::from(vec![
                Span::raw(format!("{} {:<26}", t.spec.icon, t.spec.name)),
                Span::raw(format!("{:>7}", t.spec.duration)).dim(),
                Span::raw(format!("  vol {:>3}%", t.volume)),
            ])
        })
        .collect();
    let title = match playing.len() {
        1 => " now playing (1 track) ".to_string(),
        n => format!(" now playing ({n} tracks) "),
    };
    let p = Paragraph::new(lines).block(card(&title));
    frame.render_widget(p, area);
}

/// Status line: synthesis progress, device problems and the last notice.
fn status_text(app: &App, notice: Option<&str>) -> String {
    let mut parts: Vec<String> = Vec::new();

    if let Some(ref h) = app.source_handle {
        if let Ok(info) = h.lock() {
            if let Some(err) = &info.device_error {
                parts.push(format!("No audio device: {err}"));
            } else if info.ready_count() < app.tracks.len() {
                parts.push(format!(
                    "Preparing sounds {}/{}",
                    info.ready_count(),
                    app.tracks.len()
                ));
            } else if let Some(rate) = info.sample_rate {
                parts.push(format!("Output {rate} Hz"));
            }
        }
    }

    parts.push(format!("Favorites: {}", app.favorites.len()));

    if let Some(n) = notice {
        parts.push(n.to_string());
    }

    parts.join(" • ")
}

/// Render the entire UI into the provided `frame` using `app` state and settings.
pub fn draw(frame: &mut Frame, app: &App, now: Instant, notice: Option<&str>, ui_settings: &UiSettings) {
    let playing = app.playing_indices();
    let now_playing_height = if playing.is_empty() {
        0
    } else {
        playing.len() as u16 + 2
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Min(6),
            Constraint::Length(now_playing_height),
            Constraint::Length(3),
            Constraint::Length(4),
        ])
        .split(frame.area());

    // Header
    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" lull ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    draw_presets(frame, app, chunks[1]);
    draw_controls(frame, app, now, chunks[2]);
    draw_tracks(frame, app, chunks[3]);

    if !playing.is_empty() {
        draw_now_playing(frame, app, &playing, chunks[4]);
    }

    let status = Paragraph::new(status_text(app, notice))
        .block(card(" status "))
        .wrap(Wrap { trim: true });
    frame.render_widget(status, chunks[5]);

    let footer = Paragraph::new(controls_text())
        .block(card(" controls "))
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[6]);
}
