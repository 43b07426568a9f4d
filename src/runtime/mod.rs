use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::audio::AudioPlayer;
use crate::catalog::{PRESETS, TRACKS};
use crate::config;

mod event_loop;
mod logging;
mod settings;
mod startup;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let loaded = config::Settings::load();
    // The log file comes from the config, so the subscriber is installed
    // before the rest of the settings are validated.
    let log_settings = loaded
        .as_ref()
        .map(|s| s.logging.clone())
        .unwrap_or_default();
    logging::init(&log_settings);
    let settings = settings::resolve_settings(loaded);
    tracing::info!("lull starting");

    let audio_player = AudioPlayer::new(TRACKS.to_vec(), settings.audio.clone());
    let mut app = App::new(&TRACKS, &PRESETS);
    app.set_source_handle(audio_player.source_handle());

    startup::apply_session_defaults(&mut app, &audio_player, &settings);

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result: Result<(), Box<dyn std::error::Error>> = (|| {
        let mut state = event_loop::EventLoopState::new();
        event_loop::run(&mut terminal, &settings, &mut app, &audio_player, &mut state)
    })();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!("lull exiting");
    run_result
}
