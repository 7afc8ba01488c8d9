//! Integration test: profile persistence across launches
//!
//! Plays a game, saves the profile, and restores it the way the binary does
//! on the next launch.

use edutainment::config::Options;
use edutainment::profile::{Profile, ProfileStore};
use edutainment::Game;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::fs;

fn temp_store() -> ProfileStore {
    let dir = std::env::temp_dir().join(format!(
        "edutainment-it-{}",
        uuid::Uuid::new_v4()
    ));
    ProfileStore::with_dir(dir).expect("temp store")
}

fn play_perfect_game(game: &mut Game) {
    game.start_game(&mut ChaCha8Rng::seed_from_u64(11));
    while let Some(answer) = game.current_question().map(|q| q.answer) {
        game.pending_input = answer.to_string();
        game.submit_answer();
    }
}

#[test]
fn test_profile_survives_relaunch() {
    let store = temp_store();

    // First launch
    let mut game = store.load().unwrap().into_game();
    game.set_max_multiplier(9);
    game.set_question_count(10);
    play_perfect_game(&mut game);
    game.play_again();
    store.save(&Profile::from_game(&game, 1_234)).unwrap();

    // Second launch
    let restored = store.load().unwrap().into_game();
    assert_eq!(restored.high_score, 10);
    assert_eq!(restored.max_multiplier, 9);
    assert_eq!(restored.question_count, 10);
    assert_eq!(restored.stats.games_played, 1);
    assert_eq!(restored.stats.perfect_games, 1);

    fs::remove_dir_all(store.data_dir()).ok();
}

#[test]
fn test_command_line_overrides_saved_setup() {
    let store = temp_store();
    let mut game = Game::new();
    game.set_max_multiplier(4);
    store.save(&Profile::from_game(&game, 0)).unwrap();

    let options = Options::parse(["--max", "11", "--questions", "30"]).unwrap();
    let mut game = store.load().unwrap().into_game();
    options.apply_to(&mut game);
    assert_eq!(game.max_multiplier, 11);
    assert_eq!(game.question_count, 30);

    fs::remove_dir_all(store.data_dir()).ok();
}

#[test]
fn test_reset_starts_fresh() {
    let store = temp_store();
    let mut game = Game::new();
    play_perfect_game(&mut game);
    game.play_again();
    store.save(&Profile::from_game(&game, 0)).unwrap();

    store.reset().unwrap();
    let fresh = store.load().unwrap();
    assert_eq!(fresh, Profile::default());

    fs::remove_dir_all(store.data_dir()).ok();
}
