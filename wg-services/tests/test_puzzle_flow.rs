//! End-to-end puzzle generation flow tests.
//!
//! Drives the PuzzleService the way the app does: theme in, finished
//! puzzle out, with the generated grid checked against the properties the
//! game relies on (all words locatable, grid fully filled, dimension
//! derived from the longest word).

mod common;

use wg_core::error::WgError;
use wg_puzzle::verify_grid;
use wg_services::AppEvent;

#[tokio::test]
async fn theme_round_produces_verifiable_puzzle() {
    let (service, _bus) = common::builtin_puzzle_service();

    let generated = service
        .generate_from_theme("nature", Some(6), None, Some(101))
        .await
        .unwrap();

    assert_eq!(generated.theme.as_deref(), Some("nature"));
    assert_eq!(generated.puzzle.words.len(), 6);
    assert!(generated.puzzle.grid.is_filled());
    assert!(verify_grid(&generated.puzzle.grid, &generated.puzzle.words).is_ok());
}

#[tokio::test]
async fn every_builtin_theme_generates() {
    let (service, _bus) = common::builtin_puzzle_service();

    for (i, theme) in wg_services::BuiltinProvider::themes().iter().enumerate() {
        let generated = service
            .generate_from_theme(theme, Some(5), None, Some(500 + i as u64))
            .await
            .unwrap_or_else(|e| panic!("theme '{theme}' failed: {e}"));
        assert!(generated.puzzle.size() >= 8 && generated.puzzle.size() <= 16);
    }
}

#[tokio::test]
async fn custom_words_drive_grid_dimension() {
    let (service, _bus) = common::builtin_puzzle_service();

    // Longest word is 4 letters; the grid clamps up to 8x8
    let words: Vec<String> = ["CAT", "DOG", "BIRD"].iter().map(|s| s.to_string()).collect();
    let small = service.generate_from_words(&words, None, Some(3)).await.unwrap();
    assert_eq!(small.puzzle.size(), 8);

    // An 11-letter word pushes the dimension to 11
    let words: Vec<String> = ["TEMPERATURE", "SUN"].iter().map(|s| s.to_string()).collect();
    let large = service.generate_from_words(&words, None, Some(3)).await.unwrap();
    assert_eq!(large.puzzle.size(), 11);
}

#[tokio::test]
async fn distinct_seeds_both_satisfy_locatable_property() {
    let (service, _bus) = common::builtin_puzzle_service();
    let words: Vec<String> = ["RIVER", "STONE", "CLOUD", "FROST"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let a = service.generate_from_words(&words, None, Some(1)).await.unwrap();
    let b = service.generate_from_words(&words, None, Some(2)).await.unwrap();

    assert!(verify_grid(&a.puzzle.grid, &a.puzzle.words).is_ok());
    assert!(verify_grid(&b.puzzle.grid, &b.puzzle.words).is_ok());
}

#[tokio::test]
async fn impossible_round_reports_failure_and_no_puzzle() {
    let (service, bus) = common::builtin_puzzle_service();
    let mut rx = bus.subscribe();

    let words = vec!["EXTRAORDINARY".to_string()]; // 13 letters
    let err = service
        .generate_from_words(&words, Some(8), Some(9))
        .await
        .unwrap_err();
    assert!(matches!(err, WgError::GenerationFailed { .. }));

    match rx.recv().await.unwrap() {
        AppEvent::GenerationFailed { theme, .. } => assert!(theme.is_none()),
        other => panic!("unexpected event: {other:?}"),
    }
}

#[tokio::test]
async fn generated_puzzle_serializes_for_saving() {
    let (service, _bus) = common::builtin_puzzle_service();

    let generated = service
        .generate_from_theme("travel", Some(4), None, Some(77))
        .await
        .unwrap();

    let json = serde_json::to_string_pretty(&generated).unwrap();
    let loaded: wg_services::GeneratedPuzzle = serde_json::from_str(&json).unwrap();

    assert_eq!(loaded.id, generated.id);
    assert_eq!(loaded.puzzle.grid, generated.puzzle.grid);
    assert!(verify_grid(&loaded.puzzle.grid, &loaded.puzzle.words).is_ok());
}
