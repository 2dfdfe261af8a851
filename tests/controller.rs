use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::Mutex;

use sublyme::config::Config;
use sublyme::controller::{AppController, AppEvent};
use sublyme::model::{AppModel, Catalog, Overlay, Screen, Tab, Track};

fn setup(skip_intro: bool) -> (AppController, UnboundedReceiver<AppEvent>) {
    let model = Arc::new(Mutex::new(AppModel::new(Catalog::default(), skip_intro)));
    AppController::new(model, &Config::default())
}

/// Stand-in for the UI loop: apply every queued timer event
async fn pump(controller: &AppController, rx: &mut UnboundedReceiver<AppEvent>) {
    while let Ok(event) = rx.try_recv() {
        controller.handle_app_event(event).await;
    }
}

async fn advance(controller: &AppController, rx: &mut UnboundedReceiver<AppEvent>, ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
    pump(controller, rx).await;
}

async fn progress(controller: &AppController) -> f64 {
    controller.model().lock().await.playback.progress()
}

fn sample_track() -> Track {
    Track {
        id: "t1".to_string(),
        title: "Any Shape Works".to_string(),
        artist: "Nobody".to_string(),
        duration: "3:52".to_string(),
        category: "Uncatalogued".to_string(),
        image_url: String::new(),
        plays: None,
        likes: None,
    }
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[tokio::test(start_paused = true)]
async fn splash_hands_over_to_onboarding_after_delay() {
    let (controller, mut rx) = setup(false);
    controller.start_splash_timer().await;

    advance(&controller, &mut rx, 2400).await;
    assert_eq!(controller.model().lock().await.nav.screen(), Screen::Splash);

    advance(&controller, &mut rx, 200).await;
    assert_eq!(controller.model().lock().await.nav.screen(), Screen::Onboarding);
}

#[tokio::test(start_paused = true)]
async fn onboarding_completes_after_three_continues() {
    let (controller, mut rx) = setup(false);
    controller.start_splash_timer().await;
    advance(&controller, &mut rx, 2600).await;

    controller.handle_key_event(key(KeyCode::Enter)).await.unwrap();
    // Pick the first interest on step two
    controller.handle_key_event(key(KeyCode::Char(' '))).await.unwrap();
    controller.handle_key_event(key(KeyCode::Enter)).await.unwrap();
    assert_eq!(controller.model().lock().await.nav.screen(), Screen::Onboarding);
    controller.handle_key_event(key(KeyCode::Enter)).await.unwrap();

    let model = controller.model();
    let model = model.lock().await;
    assert_eq!(model.nav.screen(), Screen::Main);
    assert_eq!(model.nav.active_tab(), Some(Tab::Home));
    assert_eq!(model.ui.onboarding.interests, vec!["Manifest"]);
}

#[tokio::test(start_paused = true)]
async fn skip_leaves_onboarding_from_any_step() {
    let (controller, mut rx) = setup(false);
    controller.start_splash_timer().await;
    advance(&controller, &mut rx, 2600).await;
    controller.handle_key_event(key(KeyCode::Char('s'))).await.unwrap();
    assert_eq!(controller.model().lock().await.nav.screen(), Screen::Main);
}

#[tokio::test(start_paused = true)]
async fn skip_intro_never_arms_splash() {
    let (controller, mut rx) = setup(true);
    controller.start_splash_timer().await;
    advance(&controller, &mut rx, 5000).await;
    assert_eq!(controller.model().lock().await.nav.screen(), Screen::Main);
}

#[tokio::test(start_paused = true)]
async fn play_scenario_from_idle() {
    let (controller, mut rx) = setup(true);
    controller.play(sample_track()).await;

    {
        let model = controller.model();
        let model = model.lock().await;
        assert_eq!(model.playback.current_track().map(|t| t.id.as_str()), Some("t1"));
        assert!(model.playback.is_playing());
        assert_eq!(model.presentation().top(), Some(&Overlay::Player));
        assert_eq!(model.playback.progress(), 30.0);
    }
    assert!(controller.ticker_running().await);

    advance(&controller, &mut rx, 1500).await;
    assert_eq!(progress(&controller).await, 30.5);
    advance(&controller, &mut rx, 1000).await;
    assert_eq!(progress(&controller).await, 31.0);
}

#[tokio::test(start_paused = true)]
async fn pause_freezes_progress_and_releases_ticker() {
    let (controller, mut rx) = setup(true);
    controller.play(sample_track()).await;
    advance(&controller, &mut rx, 1500).await;

    controller.toggle_play().await;
    assert!(!controller.ticker_running().await);
    let frozen = progress(&controller).await;
    advance(&controller, &mut rx, 10_000).await;
    assert_eq!(progress(&controller).await, frozen);

    controller.toggle_play().await;
    assert!(controller.ticker_running().await);
    advance(&controller, &mut rx, 1500).await;
    assert_eq!(progress(&controller).await, frozen + 0.5);
}

#[tokio::test(start_paused = true)]
async fn no_tick_after_close_until_resume() {
    let (controller, mut rx) = setup(true);
    controller.play(sample_track()).await;

    // A tick is queued but not yet applied when the player closes
    tokio::time::sleep(Duration::from_millis(1500)).await;
    controller.close_player().await;
    pump(&controller, &mut rx).await;
    assert_eq!(progress(&controller).await, 30.0);
    assert!(!controller.ticker_running().await);

    advance(&controller, &mut rx, 5000).await;
    assert_eq!(progress(&controller).await, 30.0);
    {
        let model = controller.model();
        let model = model.lock().await;
        assert!(model.playback.current_track().is_some());
        assert!(model.presentation().mini_player);
    }

    controller.toggle_play().await;
    advance(&controller, &mut rx, 1500).await;
    assert_eq!(progress(&controller).await, 30.5);
}

#[tokio::test(start_paused = true)]
async fn replaying_restarts_ticker_generation() {
    let (controller, mut rx) = setup(true);
    let catalog = Catalog::default();
    controller.play(catalog.trending[0].clone()).await;

    tokio::time::sleep(Duration::from_millis(1500)).await;
    // The queued tick belongs to the first ticker
    controller.play(catalog.trending[1].clone()).await;
    pump(&controller, &mut rx).await;

    let model = controller.model();
    let model = model.lock().await;
    assert_eq!(model.playback.current_track().map(|t| t.id.as_str()), Some("t2"));
    assert_eq!(model.playback.progress(), 30.0);
}

#[tokio::test(start_paused = true)]
async fn toggle_with_nothing_loaded_is_a_no_op() {
    let (controller, mut rx) = setup(true);
    controller.toggle_play().await;
    controller.open_player().await;
    controller.toggle_like().await;
    advance(&controller, &mut rx, 3000).await;

    assert!(!controller.ticker_running().await);
    let model = controller.model();
    let model = model.lock().await;
    assert!(!model.playback.is_playing());
    assert!(model.presentation().overlays.is_empty());
}

#[tokio::test(start_paused = true)]
async fn switching_tab_closes_player_and_stops_ticker() {
    let (controller, mut rx) = setup(true);
    controller.play(sample_track()).await;
    controller.select_tab(Tab::Library).await;
    assert!(!controller.ticker_running().await);

    advance(&controller, &mut rx, 3000).await;
    let model = controller.model();
    let model = model.lock().await;
    assert_eq!(model.nav.active_tab(), Some(Tab::Library));
    assert!(!model.playback.player_visible());
    assert_eq!(model.playback.current_track().map(|t| t.id.as_str()), Some("t1"));
    assert_eq!(model.playback.progress(), 30.0);
}

#[tokio::test(start_paused = true)]
async fn search_then_play_then_back_out() {
    let (controller, _rx) = setup(true);
    controller.handle_key_event(key(KeyCode::Char('/'))).await.unwrap();
    for c in "delta".chars() {
        controller.handle_key_event(key(KeyCode::Char(c))).await.unwrap();
    }
    controller.handle_key_event(key(KeyCode::Enter)).await.unwrap();

    {
        let model = controller.model();
        let model = model.lock().await;
        assert_eq!(model.playback.current_track().map(|t| t.id.as_str()), Some("t2"));
        assert_eq!(model.presentation().overlays, vec![Overlay::Search, Overlay::Player]);
    }

    // Esc peels one layer at a time, player first
    controller.handle_key_event(key(KeyCode::Esc)).await.unwrap();
    assert_eq!(
        controller.model().lock().await.presentation().top(),
        Some(&Overlay::Search)
    );
    controller.handle_key_event(key(KeyCode::Esc)).await.unwrap();
    let model = controller.model();
    let model = model.lock().await;
    assert!(model.presentation().overlays.is_empty());
    assert!(model.presentation().mini_player);
}

#[tokio::test(start_paused = true)]
async fn category_opens_playlist_detail() {
    let (controller, _rx) = setup(true);
    controller.handle_key_event(key(KeyCode::Char('2'))).await.unwrap();
    // Explore lists categories; the fourth is Sleep
    for _ in 0..3 {
        controller.handle_key_event(key(KeyCode::Down)).await.unwrap();
    }
    controller.handle_key_event(key(KeyCode::Enter)).await.unwrap();

    let model = controller.model();
    let mut model = model.lock().await;
    let ids: Vec<String> = model.detail_tracks().into_iter().map(|t| t.id).collect();
    assert_eq!(ids, vec!["t2", "p4"]);
    model.move_selection_down();
    assert_eq!(model.ui.detail_selected, 1);
}

#[tokio::test(start_paused = true)]
async fn like_in_player_shows_notice() {
    let (controller, _rx) = setup(true);
    controller.play(sample_track()).await;
    controller.handle_key_event(key(KeyCode::Char('l'))).await.unwrap();

    let model = controller.model();
    let model = model.lock().await;
    assert!(model.playback.is_liked("t1"));
    assert_eq!(model.notice(), Some("Added \"Any Shape Works\" to Favorites"));
}

#[tokio::test(start_paused = true)]
async fn quit_releases_timers() {
    let (controller, _rx) = setup(true);
    controller.play(sample_track()).await;
    controller.handle_key_event(key(KeyCode::Char('q'))).await.unwrap();
    assert!(!controller.ticker_running().await);
    assert!(controller.model().lock().await.should_quit());
}

#[tokio::test(start_paused = true)]
async fn help_popup_swallows_keys() {
    let (controller, _rx) = setup(true);
    controller.handle_key_event(key(KeyCode::Char('?'))).await.unwrap();
    controller.handle_key_event(key(KeyCode::Char('q'))).await.unwrap();
    assert!(!controller.model().lock().await.should_quit());
    controller.handle_key_event(key(KeyCode::Esc)).await.unwrap();
    assert!(!controller.model().lock().await.ui.show_help);
}
