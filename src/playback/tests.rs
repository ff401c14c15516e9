use std::time::Duration;

use super::*;
use crate::{config::PlayerConfig, event::events::Event};

fn track(id: &str, duration_secs: u32) -> Track {
    Track::new(id, format!("Track {id}"), "Artist", "", duration_secs)
}

fn playing(duration_secs: u32) -> PlaybackSession {
    let mut session = PlaybackSession::default();
    session.load_and_play(track("t", duration_secs));
    session
}

#[test]
fn new_session_is_idle() {
    let session = PlaybackSession::default();
    assert_eq!(session.state(), PlaybackState::Idle);
    assert!(!session.is_playing());
    assert_eq!(session.progress(), 0.0);
    assert_eq!(session.volume(), 50.0);
}

#[test]
fn seek_clamps_to_percent_range() {
    let mut session = playing(100);
    let cases = [(-20.0, 0.0), (0.0, 0.0), (42.5, 42.5), (100.0, 100.0), (180.0, 100.0)];
    for (input, expected) in cases {
        session.seek(input);
        assert_eq!(session.progress(), expected, "seek({input})");
    }
    session.seek(f64::NAN);
    assert_eq!(session.progress(), 0.0);
}

#[test]
fn volume_clamps_to_percent_range() {
    let mut session = PlaybackSession::default();
    for (input, expected) in [(-1.0, 0.0), (73.0, 73.0), (101.0, 100.0)] {
        session.set_volume(input);
        assert_eq!(session.volume(), expected, "set_volume({input})");
    }
}

#[test]
fn volume_is_independent_of_play_state() {
    let mut session = playing(100);
    session.toggle_play_pause();
    session.set_volume(20.0);
    assert_eq!(session.volume(), 20.0);
    assert_eq!(session.state(), PlaybackState::Paused);
}

#[test]
fn toggle_play_pause_without_track_changes_nothing() {
    let mut session = PlaybackSession::default();
    let before = session.clone();
    assert!(!session.toggle_play_pause());
    assert_eq!(session, before);
}

#[test]
fn toggle_play_pause_flips_loaded_track() {
    let mut session = playing(100);
    session.toggle_play_pause();
    assert_eq!(session.state(), PlaybackState::Paused);
    session.toggle_play_pause();
    assert_eq!(session.state(), PlaybackState::Playing);
}

#[test]
fn load_and_play_resets_regardless_of_prior_state() {
    let mut session = playing(100);
    session.seek(64.0);
    session.toggle_play_pause();

    let next = track("n", 300);
    session.load_and_play(next.clone());
    assert_eq!(session.current_track(), Some(&next));
    assert!(session.is_playing());
    assert_eq!(session.progress(), 0.0);
}

#[test]
fn playing_a_card_from_idle() {
    let mut session = PlaybackSession::default();
    let item = crate::catalog::MediaItem::Album(crate::catalog::CardInfo::new(
        "album1",
        "Synth Dreams",
        "ElectroMaestro",
        "",
    ));
    session.load_and_play(item.to_track(&PlayerConfig::default().home_card));
    assert_eq!(session.state(), PlaybackState::Playing);
    assert_eq!(session.current_track().unwrap().title, "Synth Dreams");
    assert_eq!(session.progress(), 0.0);
}

#[test]
fn toggle_like_twice_restores_membership() {
    let mut session = PlaybackSession::default();
    assert!(session.toggle_like("s2"));
    assert!(session.is_liked("s2"));
    assert_eq!(session.liked_ids().len(), 1);
    assert!(!session.toggle_like("s2"));
    assert!(session.liked_ids().is_empty());

    let mut seeded = PlaybackSession::default().with_liked(["s4"]);
    seeded.toggle_like("s4");
    seeded.toggle_like("s4");
    assert!(seeded.is_liked("s4"));
}

#[test]
fn current_is_liked_follows_loaded_track() {
    let mut session = PlaybackSession::default().with_liked(["t"]);
    assert!(!session.current_is_liked());
    session.load_and_play(track("t", 10));
    assert!(session.current_is_liked());
}

#[test]
fn ninety_ticks_of_a_225_second_track() {
    let mut session = playing(225);
    for _ in 0..90 {
        assert!(matches!(session.tick(), TickOutcome::Advanced(_)));
    }
    assert!((session.progress() - 40.0).abs() < 1e-9);
    assert!((session.elapsed_secs() - 90.0).abs() < 1e-6);
}

#[test]
fn ticks_saturate_at_exactly_one_hundred() {
    let mut session = playing(225);
    let mut finished_after = None;
    for i in 1..=300 {
        if session.tick() == TickOutcome::Finished {
            finished_after = Some(i);
            break;
        }
    }
    assert!(finished_after.is_some_and(|n| (225..=226).contains(&n)));
    assert_eq!(session.progress(), 100.0);
    assert_eq!(session.tick(), TickOutcome::Finished);
    assert_eq!(session.progress(), 100.0);
    assert_eq!(session.state(), PlaybackState::Playing);
}

#[test]
fn one_tick_near_the_end_keeps_playing() {
    let mut session = playing(180);
    session.seek(98.0);
    let outcome = session.tick();
    assert!(matches!(outcome, TickOutcome::Advanced(p) if (p - 98.5556).abs() < 1e-3));
    assert_eq!(session.state(), PlaybackState::Playing);
}

#[test]
fn tick_does_nothing_when_paused_or_idle() {
    let mut idle = PlaybackSession::default();
    assert_eq!(idle.tick(), TickOutcome::Inactive);

    let mut paused = playing(100);
    paused.toggle_play_pause();
    assert_eq!(paused.tick(), TickOutcome::Inactive);
    assert_eq!(paused.progress(), 0.0);
}

#[test]
fn zero_duration_track_finishes_on_first_tick() {
    let mut session = playing(0);
    assert_eq!(session.tick(), TickOutcome::Finished);
    assert_eq!(session.progress(), 100.0);
}

#[test]
fn stale_tick_leaves_a_newly_loaded_track_alone() {
    let mut session = playing(10);
    let first_run = session.epoch();

    session.load_and_play(track("next", 10));
    assert_eq!(session.tick_for(first_run), TickOutcome::Inactive);
    assert_eq!(session.progress(), 0.0);

    let second_run = session.epoch();
    assert!(matches!(session.tick_for(second_run), TickOutcome::Advanced(p) if p == 10.0));
}

#[test]
fn play_pause_starts_a_new_tick_run() {
    let mut session = playing(10);
    let before = session.epoch();
    session.toggle_play_pause();
    session.toggle_play_pause();
    assert_ne!(session.epoch(), before);
    assert_eq!(session.tick_for(before), TickOutcome::Inactive);
}

#[test]
fn cue_only_applies_when_idle() {
    let mut session = PlaybackSession::default();
    assert!(session.cue(track("welcome", 180)));
    assert_eq!(session.state(), PlaybackState::Paused);

    session.load_and_play(track("other", 10));
    assert!(!session.cue(track("welcome", 180)));
    assert_eq!(session.current_track().unwrap().id, "other");
}

#[test]
fn unmute_always_returns_to_the_default_level() {
    let mut session = PlaybackSession::default();
    session.set_volume(70.0);
    session.toggle_mute();
    assert!(session.is_muted());
    session.toggle_mute();
    assert_eq!(session.volume(), session::DEFAULT_VOLUME);

    let mut silent = PlaybackSession::new(0.0);
    silent.toggle_mute();
    assert_eq!(silent.volume(), 50.0);
}

#[test]
fn seek_by_converts_seconds_to_percent() {
    let mut session = playing(200);
    assert_eq!(session.seek_by(50), Ok(25.0));
    assert_eq!(session.seek_by(-80), Ok(0.0));

    let mut idle = PlaybackSession::default();
    assert_eq!(idle.seek_by(5), Err(PlaybackError::NoTrack));

    let mut empty = playing(0);
    assert!(matches!(empty.seek_by(5), Err(PlaybackError::ZeroDuration(_))));
}

fn system(tick_ms: u64) -> (PlaybackSystem, flume::Receiver<Event>) {
    let (tx, rx) = flume::unbounded();
    let config = PlayerConfig {
        tick_interval: Duration::from_millis(tick_ms),
        ..PlayerConfig::default()
    };
    (PlaybackSystem::new(&config, tx, vec!["s2".into()]), rx)
}

#[tokio::test(start_paused = true)]
async fn ticker_advances_while_playing() {
    let (mut system, rx) = system(1000);
    system.load_and_play(track("t", 4));
    assert!(system.is_ticking());

    tokio::time::sleep(Duration::from_millis(2500)).await;
    assert_eq!(system.snapshot().progress(), 50.0);

    let progress: Vec<f64> = rx
        .try_iter()
        .filter_map(|e| match e {
            Event::PlaybackProgress(p) => Some(p),
            _ => None,
        })
        .collect();
    assert_eq!(progress, vec![25.0, 50.0]);
}

#[tokio::test(start_paused = true)]
async fn ticker_stops_at_one_hundred() {
    let (mut system, rx) = system(1000);
    system.load_and_play(track("t", 2));

    tokio::time::sleep(Duration::from_millis(5500)).await;
    assert_eq!(system.snapshot().progress(), 100.0);
    assert!(!system.is_ticking());
    assert!(
        rx.try_iter()
            .any(|e| matches!(e, Event::PlaybackFinished(ref id) if id == "t"))
    );
}

#[tokio::test(start_paused = true)]
async fn pausing_tears_down_the_ticker() {
    let (mut system, _rx) = system(1000);
    system.load_and_play(track("t", 10));
    tokio::time::sleep(Duration::from_millis(1500)).await;

    system.play_pause();
    assert!(!system.is_ticking());
    let frozen = system.snapshot().progress();

    tokio::time::sleep(Duration::from_secs(5)).await;
    assert_eq!(system.snapshot().progress(), frozen);

    system.play_pause();
    assert!(system.is_ticking());
    tokio::time::sleep(Duration::from_millis(1500)).await;
    assert!(system.snapshot().progress() > frozen);
}

#[tokio::test(start_paused = true)]
async fn dropping_the_store_stops_the_ticker() {
    let (mut system, rx) = system(1000);
    system.load_and_play(track("t", 10));
    drop(system);

    tokio::time::sleep(Duration::from_secs(3)).await;
    assert!(!rx.try_iter().any(|e| matches!(e, Event::PlaybackProgress(_))));
}

#[tokio::test(start_paused = true)]
async fn reloading_keeps_a_single_ticker_on_the_new_track() {
    let (mut system, rx) = system(1000);
    system.load_and_play(track("a", 10));
    tokio::time::sleep(Duration::from_millis(1500)).await;
    system.load_and_play(track("b", 10));
    let _ = rx.try_iter().count();

    tokio::time::sleep(Duration::from_millis(1500)).await;
    assert_eq!(system.snapshot().progress(), 10.0);
    assert_eq!(rx.try_iter().count(), 1);
}

#[tokio::test(start_paused = true)]
async fn seeking_back_after_the_end_resumes_ticking() {
    let (mut system, _rx) = system(1000);
    system.load_and_play(track("t", 1));
    tokio::time::sleep(Duration::from_millis(1500)).await;
    assert!(!system.is_ticking());

    system.seek(0.0);
    assert!(system.is_ticking());
}

#[tokio::test(start_paused = true)]
async fn play_pause_without_track_schedules_nothing() {
    let (mut system, _rx) = system(1000);
    system.play_pause();
    assert!(!system.is_ticking());
    assert_eq!(system.snapshot().state(), PlaybackState::Idle);
}

#[tokio::test]
async fn store_is_seeded_with_liked_ids() {
    let (mut system, _rx) = system(1000);
    assert!(system.snapshot().is_liked("s2"));
    assert!(!system.toggle_like("s2"));
    assert!(!system.snapshot().is_liked("s2"));
}

#[tokio::test]
async fn volume_steps_clamp() {
    let (mut system, _rx) = system(1000);
    for _ in 0..20 {
        system.volume_up();
    }
    assert_eq!(system.snapshot().volume(), 100.0);
    system.toggle_mute();
    assert_eq!(system.snapshot().volume(), 0.0);
    system.volume_down();
    assert_eq!(system.snapshot().volume(), 0.0);
}
