use super::*;
use crate::audio::Playback;
use crate::catalog::{Category, PRESETS, TRACKS};
use crate::error::MixerError;
use std::cell::RefCell;
use std::collections::BTreeSet;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Play(usize, f32),
    Pause(usize),
    Volume(usize, f32),
}

#[derive(Default)]
struct Recorder {
    calls: RefCell<Vec<Call>>,
}

impl Recorder {
    fn take(&self) -> Vec<Call> {
        self.calls.borrow_mut().drain(..).collect()
    }
}

impl Playback for Recorder {
    fn play(&self, index: usize, volume: f32) {
        self.calls.borrow_mut().push(Call::Play(index, volume));
    }

    fn pause(&self, index: usize) {
        self.calls.borrow_mut().push(Call::Pause(index));
    }

    fn set_volume(&self, index: usize, volume: f32) {
        self.calls.borrow_mut().push(Call::Volume(index, volume));
    }
}

fn app() -> App {
    App::new(&TRACKS, &PRESETS)
}

fn playing_ids(app: &App) -> BTreeSet<&'static str> {
    app.tracks.iter().filter(|t| t.playing).map(|t| t.id()).collect()
}

#[test]
fn new_app_is_idle_with_catalog_defaults() {
    let app = app();
    assert!(!app.any_playing());
    assert!(!app.mix_mode);
    assert_eq!(app.active_preset, None);
    assert_eq!(app.track("rain").unwrap().volume, 70);
    assert_eq!(app.track("story1").unwrap().volume, 80);
    assert_eq!(app.tab, Category::Nature);
    assert_eq!(app.selected_id(), Some("rain"));
}

#[test]
fn start_invokes_playback_at_track_volume() {
    let p = Recorder::default();
    let mut app = app();
    app.start("rain", &p).unwrap();
    assert!(app.track("rain").unwrap().playing);
    assert_eq!(p.take(), vec![Call::Play(0, 0.7)]);
}

#[test]
fn exclusive_play_when_mix_mode_off() {
    let p = Recorder::default();
    let mut app = app();
    app.start("rain", &p).unwrap();
    app.start("ocean", &p).unwrap();

    assert_eq!(playing_ids(&app), BTreeSet::from(["ocean"]));
    let calls = p.take();
    assert!(calls.contains(&Call::Pause(0)));
    assert_eq!(calls.last(), Some(&Call::Play(1, 0.7)));
}

#[test]
fn mix_mode_on_keeps_both_playing() {
    let p = Recorder::default();
    let mut app = app();
    app.set_mix_mode(true, &p);
    app.start("rain", &p).unwrap();
    app.start("ocean", &p).unwrap();

    assert_eq!(playing_ids(&app), BTreeSet::from(["rain", "ocean"]));
    assert!(!p.take().iter().any(|c| matches!(c, Call::Pause(_))));
}

#[test]
fn stop_only_touches_one_track() {
    let p = Recorder::default();
    let mut app = app();
    app.set_mix_mode(true, &p);
    app.start("rain", &p).unwrap();
    app.start("fire", &p).unwrap();
    p.take();

    app.stop("rain", &p).unwrap();
    assert_eq!(playing_ids(&app), BTreeSet::from(["fire"]));
    assert_eq!(p.take(), vec![Call::Pause(0)]);
}

#[test]
fn toggle_flips_play_state() {
    let p = Recorder::default();
    let mut app = app();
    app.toggle("wind", &p).unwrap();
    assert!(app.track("wind").unwrap().playing);
    app.toggle("wind", &p).unwrap();
    assert!(!app.track("wind").unwrap().playing);
}

#[test]
fn set_volume_clamps_and_mirrors_unit_scale() {
    let p = Recorder::default();
    let mut app = app();

    assert_eq!(app.set_volume("rain", 150, &p), Ok(100));
    assert_eq!(app.track("rain").unwrap().volume, 100);
    assert_eq!(app.set_volume("rain", -20, &p), Ok(0));
    assert_eq!(app.track("rain").unwrap().volume, 0);
    assert_eq!(app.set_volume("rain", 42, &p), Ok(42));

    assert_eq!(
        p.take(),
        vec![
            Call::Volume(0, 1.0),
            Call::Volume(0, 0.0),
            Call::Volume(0, 0.42)
        ]
    );
}

#[test]
fn adjust_volume_saturates_at_bounds() {
    let p = Recorder::default();
    let mut app = app();
    for _ in 0..30 {
        app.adjust_volume("birds", 5, &p).unwrap();
    }
    assert_eq!(app.track("birds").unwrap().volume, 100);
    for _ in 0..30 {
        app.adjust_volume("birds", -5, &p).unwrap();
    }
    assert_eq!(app.track("birds").unwrap().volume, 0);
}

#[test]
fn apply_forest_rain_preset() {
    let p = Recorder::default();
    let mut app = app();
    app.start("ocean", &p).unwrap();
    p.take();

    app.apply_preset("forest_rain", &p).unwrap();

    assert!(app.mix_mode);
    assert_eq!(app.active_preset, Some("forest_rain"));
    assert_eq!(
        playing_ids(&app),
        BTreeSet::from(["rain", "forest", "birds"])
    );
    assert_eq!(app.track("rain").unwrap().volume, 70);
    assert_eq!(app.track("forest").unwrap().volume, 50);
    assert_eq!(app.track("birds").unwrap().volume, 30);

    let calls = p.take();
    assert_eq!(calls[0], Call::Pause(1));
    assert!(calls.contains(&Call::Play(0, 0.7)));
    assert!(calls.contains(&Call::Play(2, 0.5)));
    assert!(calls.contains(&Call::Play(5, 0.3)));
}

#[test]
fn apply_preset_replaces_previous_mix() {
    let p = Recorder::default();
    let mut app = app();
    app.apply_preset("forest_rain", &p).unwrap();
    app.apply_preset("relaxation", &p).unwrap();

    assert_eq!(playing_ids(&app), BTreeSet::from(["theta", "story1"]));
    assert_eq!(app.active_preset, Some("relaxation"));
}

#[test]
fn apply_preset_by_position() {
    let p = Recorder::default();
    let mut app = app();
    app.apply_preset_at(1, &p).unwrap();
    assert_eq!(app.active_preset, Some("ocean_meditation"));
    assert!(matches!(
        app.apply_preset_at(9, &p),
        Err(MixerError::UnknownPreset(_))
    ));
}

#[test]
fn unknown_ids_are_rejected() {
    let p = Recorder::default();
    let mut app = app();
    assert_eq!(
        app.start("thunder", &p),
        Err(MixerError::UnknownTrack("thunder".into()))
    );
    assert_eq!(
        app.apply_preset("nope", &p),
        Err(MixerError::UnknownPreset("nope".into()))
    );
    assert!(app.toggle_favorite("thunder").is_err());
    assert!(p.take().is_empty());
}

#[test]
fn stop_all_clears_flags_and_preset() {
    let p = Recorder::default();
    let mut app = app();
    app.apply_preset("nature_mix", &p).unwrap();
    p.take();

    app.stop_all(&p);
    assert!(!app.any_playing());
    assert_eq!(app.active_preset, None);
    // mix-mode is a user preference and survives stop-all
    assert!(app.mix_mode);

    let calls = p.take();
    assert_eq!(calls.len(), 3);
    assert!(calls.iter().all(|c| matches!(c, Call::Pause(_))));
}

#[test]
fn disabling_mix_mode_keeps_last_started_track() {
    let p = Recorder::default();
    let mut app = app();
    app.set_mix_mode(true, &p);
    app.start("rain", &p).unwrap();
    app.start("fire", &p).unwrap();
    app.start("ocean", &p).unwrap();

    app.set_mix_mode(false, &p);
    assert!(!app.mix_mode);
    assert_eq!(playing_ids(&app), BTreeSet::from(["ocean"]));
}

#[test]
fn disabling_mix_mode_breaks_active_preset() {
    let p = Recorder::default();
    let mut app = app();
    app.apply_preset("ocean_meditation", &p).unwrap();
    app.toggle_mix_mode(&p);

    assert!(!app.mix_mode);
    assert_eq!(app.playing_indices().len(), 1);
    assert_eq!(app.active_preset, None);
}

#[test]
fn favorite_toggle_round_trip() {
    let mut app = app();
    app.toggle_favorite("birds").unwrap();
    let before = app.favorites.clone();

    assert_eq!(app.toggle_favorite("rain"), Ok(true));
    assert!(app.is_favorite("rain"));
    assert_eq!(app.toggle_favorite("rain"), Ok(false));
    assert_eq!(app.favorites, before);
}

#[test]
fn favorites_do_not_affect_play_state() {
    let p = Recorder::default();
    let mut app = app();
    app.start("rain", &p).unwrap();
    app.toggle_favorite("rain").unwrap();
    assert!(app.track("rain").unwrap().playing);
    app.stop_all(&p);
    assert!(app.is_favorite("rain"));
}

#[test]
fn sleep_timer_stops_everything_once() {
    let p = Recorder::default();
    let mut app = app();
    app.timer = SleepTimer::new(15, 15, 120);
    app.apply_preset("forest_rain", &p).unwrap();

    let t0 = Instant::now();
    app.start_timer(t0).unwrap();
    assert!(app.timer.is_active());

    assert!(!app.tick(t0 + Duration::from_secs(14 * 60), &p));
    assert!(app.any_playing());

    assert!(app.tick(t0 + Duration::from_secs(15 * 60), &p));
    assert!(!app.any_playing());
    assert_eq!(app.active_preset, None);
    assert!(!app.timer.is_active());

    assert!(!app.tick(t0 + Duration::from_secs(60 * 60), &p));
}

#[test]
fn sleep_timer_rejects_restart_and_zero() {
    let mut app = app();
    let t0 = Instant::now();
    assert_eq!(app.start_timer(t0), Err(MixerError::TimerUnset));

    app.timer.increase();
    assert_eq!(app.timer.minutes(), 15);
    app.start_timer(t0).unwrap();
    assert_eq!(app.start_timer(t0), Err(MixerError::TimerActive));
}

#[test]
fn sleep_timer_minutes_step_within_bounds() {
    let mut timer = SleepTimer::new(0, 15, 120);
    timer.decrease();
    assert_eq!(timer.minutes(), 0);
    for _ in 0..20 {
        timer.increase();
    }
    assert_eq!(timer.minutes(), 120);
    timer.decrease();
    assert_eq!(timer.minutes(), 105);
}

#[test]
fn sleep_timer_reports_remaining() {
    let mut timer = SleepTimer::new(30, 15, 120);
    let t0 = Instant::now();
    assert_eq!(timer.remaining(t0), None);
    timer.start(t0).unwrap();
    assert_eq!(
        timer.remaining(t0 + Duration::from_secs(60)),
        Some(Duration::from_secs(29 * 60))
    );
    // Changing the selection does not move the running deadline.
    timer.increase();
    assert_eq!(
        timer.remaining(t0 + Duration::from_secs(60)),
        Some(Duration::from_secs(29 * 60))
    );
}

#[test]
fn tabs_filter_tracks_and_reset_selection() {
    let mut app = app();
    app.set_tab(Category::Frequencies);
    let visible: Vec<&str> = app
        .display_indices()
        .into_iter()
        .map(|i| app.tracks[i].id())
        .collect();
    assert_eq!(visible, vec!["alpha", "theta"]);
    assert_eq!(app.selected_id(), Some("alpha"));

    app.next_tab();
    assert_eq!(app.tab, Category::Stories);
    assert_eq!(app.selected_id(), Some("story1"));
    app.next_tab();
    assert_eq!(app.tab, Category::Nature);
}

#[test]
fn next_prev_wrap_within_tab() {
    let mut app = app();
    app.set_tab(Category::Stories);
    app.next();
    assert_eq!(app.selected_id(), Some("meditation"));
    app.next();
    assert_eq!(app.selected_id(), Some("story1"));
    app.prev();
    assert_eq!(app.selected_id(), Some("meditation"));
}

#[test]
fn source_ready_without_handle_is_false() {
    let app = app();
    assert!(!app.source_ready(0));
}

#[test]
fn sleep_timer_increase_saturates_with_huge_steps() {
    let mut timer = SleepTimer::new(u32::MAX - 1, u32::MAX, u32::MAX);
    timer.increase();
    assert_eq!(timer.minutes(), u32::MAX);
}
