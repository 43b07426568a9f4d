use crate::app::{App, SleepTimer};
use crate::audio::Playback;
use crate::catalog::Category;
use crate::config;

pub fn apply_session_defaults(app: &mut App, playback: &impl Playback, settings: &config::Settings) {
    app.set_tab(match settings.ui.start_tab {
        config::TabSetting::Nature => Category::Nature,
        config::TabSetting::Frequencies => Category::Frequencies,
        config::TabSetting::Stories => Category::Stories,
    });

    app.set_mix_mode(settings.mixer.mix_mode, playback);

    app.timer = SleepTimer::new(
        settings.timer.default_minutes,
        settings.timer.step_minutes,
        settings.timer.max_minutes,
    );
}
