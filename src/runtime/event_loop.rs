use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::audio::AudioPlayer;
use crate::config;
use crate::error::MixerError;
use crate::ui;

/// State tracked by the runtime event loop across iterations.
pub struct EventLoopState {
    /// One-line message shown in the status box until the next key press.
    pub notice: Option<String>,
}

impl EventLoopState {
    pub fn new() -> Self {
        Self { notice: None }
    }

    fn report(&mut self, result: Result<(), MixerError>) {
        if let Err(e) = result {
            tracing::debug!("ignored action: {e}");
            self.notice = Some(e.to_string());
        }
    }
}

/// Main terminal event loop: handles input, the sleep timer and UI drawing.
/// Returns `Ok(())` when shutdown is requested.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App,
    audio_player: &AudioPlayer,
    state: &mut EventLoopState,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        let now = Instant::now();
        if app.tick(now, audio_player) {
            state.notice = Some("Sleep timer elapsed, all sounds stopped".to_string());
        }

        terminal.draw(|f| ui::draw(f, app, now, state.notice.as_deref(), &settings.ui))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(key, settings, app, audio_player, state)? {
                    break;
                }
            }
        }
    }

    Ok(())
}

fn handle_key_event(
    key: KeyEvent,
    settings: &config::Settings,
    app: &mut App,
    audio_player: &AudioPlayer,
    state: &mut EventLoopState,
) -> Result<bool, Box<dyn std::error::Error>> {
    state.notice = None;
    let step = i32::from(settings.controls.volume_step);

    match key.code {
        KeyCode::Char('q') => {
            audio_player.quit_softly(Duration::from_millis(settings.audio.quit_fade_out_ms));
            return Ok(true);
        }
        KeyCode::Char('h') | KeyCode::Left | KeyCode::BackTab => app.prev_tab(),
        KeyCode::Char('l') | KeyCode::Right | KeyCode::Tab => app.next_tab(),
        KeyCode::Char('j') | KeyCode::Down => app.next(),
        KeyCode::Char('k') | KeyCode::Up => app.prev(),
        KeyCode::Enter | KeyCode::Char(' ') => {
            if let Some(id) = app.selected_id() {
                state.report(app.toggle(id, audio_player));
            }
        }
        KeyCode::Char('f') => {
            if let Some(id) = app.selected_id() {
                state.report(app.toggle_favorite(id).map(|_| ()));
            }
        }
        KeyCode::Char('-') => {
            if let Some(id) = app.selected_id() {
                state.report(app.adjust_volume(id, -step, audio_player).map(|_| ()));
            }
        }
        KeyCode::Char('+') | KeyCode::Char('=') => {
            if let Some(id) = app.selected_id() {
                state.report(app.adjust_volume(id, step, audio_player).map(|_| ()));
            }
        }
        KeyCode::Char('m') => app.toggle_mix_mode(audio_player),
        KeyCode::Char(c @ '1'..='9') => {
            let n = c as usize - '1' as usize;
            state.report(app.apply_preset_at(n, audio_player));
        }
        KeyCode::Char('x') => app.stop_all(audio_player),
        KeyCode::Char('[') => app.timer.decrease(),
        KeyCode::Char(']') => app.timer.increase(),
        KeyCode::Char('t') => state.report(app.start_timer(Instant::now())),
        _ => {}
    }

    Ok(false)
}
