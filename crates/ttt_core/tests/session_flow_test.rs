//! Tests for the session service.

use std::sync::Arc;
use std::thread;
use ttt_core::{
    Difficulty, GameService, InMemorySessionStore, Mark, Mode, Move, SessionErrorKind,
    SessionId, SessionStore,
};

#[test]
fn test_pve_flow() {
    let service = GameService::in_memory();
    let game = service
        .create_session(Mode::HumanVsComputer, Some(Mark::O))
        .unwrap();
    assert_eq!(game.mode, "PVE");
    assert_eq!(game.ai_plays, "O");

    let after_human = service.apply_human_move(&game.game_id, 4).unwrap();
    assert_eq!(after_human.to_move, "O");
    assert_eq!(after_human.board, "....X....");

    let after_computer = service.apply_computer_move(&game.game_id).unwrap();
    assert_ne!(after_computer.board, after_human.board);
    assert_eq!(after_computer.to_move, "X");

    let err = service.apply_computer_move(&game.game_id).unwrap_err();
    assert_eq!(
        err.kind(),
        &SessionErrorKind::InvalidOperation("not AI's turn".to_string())
    );
    assert_eq!(service.get_session(&game.game_id).unwrap(), after_computer);
}

#[test]
fn test_hint_does_not_mutate() {
    let service = GameService::in_memory();
    let game = service.create_session(Mode::HumanVsHuman, None).unwrap();
    let before = service.get_session(&game.game_id).unwrap();
    let hint = service.hint(&game.game_id).unwrap();
    assert_eq!(hint, Move::CENTER);
    assert_eq!(service.get_session(&game.game_id).unwrap(), before);
}

#[test]
fn test_hint_for_either_side() {
    let service = GameService::in_memory();
    let game = service
        .create_session(Mode::HumanVsComputer, Some(Mark::X))
        .unwrap();
    // X (computer side) holds the turn; the hint is still served
    assert_eq!(service.hint(&game.game_id).unwrap(), Move::CENTER);
    service.apply_human_move(&game.game_id, 0).unwrap();
    service.apply_human_move(&game.game_id, 3).unwrap();
    service.apply_human_move(&game.game_id, 1).unwrap();
    // O to move must block at 2
    assert_eq!(service.hint(&game.game_id).unwrap().index(), 2);
}

#[test]
fn test_pvp_game_to_completion() {
    let service = GameService::in_memory();
    let game = service.create_session(Mode::HumanVsHuman, None).unwrap();
    let mut view = game.clone();
    for i in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
        view = service.apply_human_move(&game.game_id, i).unwrap();
    }
    assert_eq!(view.status, "DRAW");
    assert_eq!(view.winner, "");

    let err = service.apply_human_move(&game.game_id, 0).unwrap_err();
    assert_eq!(
        err.kind(),
        &SessionErrorKind::InvalidOperation("game over".to_string())
    );
    let err = service.hint(&game.game_id).unwrap_err();
    assert!(matches!(err.kind(), SessionErrorKind::InvalidOperation(_)));
    let err = service.apply_computer_move(&game.game_id).unwrap_err();
    assert!(matches!(err.kind(), SessionErrorKind::InvalidOperation(_)));
}

#[test]
fn test_computer_finishes_game_against_naive_human() {
    let service = GameService::in_memory();
    let game = service
        .create_session_with(Mode::HumanVsComputer, Some(Mark::X), Difficulty::Hard)
        .unwrap();
    let mut view = service.apply_computer_move(&game.game_id).unwrap();
    while view.status == "IN_PROGRESS" {
        view = if view.to_move == "X" {
            service.apply_computer_move(&game.game_id).unwrap()
        } else {
            let first_free = view.board.find('.').unwrap();
            service.apply_human_move(&game.game_id, first_free).unwrap()
        };
    }
    assert_eq!(view.status, "X_WIN");
    assert_eq!(view.winner, "X");
}

#[test]
fn test_difficulty_is_recorded() {
    let service = GameService::in_memory();
    let game = service
        .create_session_with(Mode::HumanVsComputer, Some(Mark::O), Difficulty::Easy)
        .unwrap();
    assert_eq!(game.difficulty, "easy");
    service.apply_human_move(&game.game_id, 0).unwrap();
    let view = service.apply_computer_move(&game.game_id).unwrap();
    assert_eq!(view.board.matches('O').count(), 1);
}

#[test]
fn test_unknown_and_malformed_ids() {
    let service = GameService::in_memory();
    let missing = SessionId::generate().to_string();
    for id in [missing.as_str(), "not-a-uuid", ""] {
        let err = service.get_session(id).unwrap_err();
        assert!(matches!(err.kind(), SessionErrorKind::NotFound(_)), "{}", id);
        let err = service.apply_human_move(id, 4).unwrap_err();
        assert!(matches!(err.kind(), SessionErrorKind::NotFound(_)), "{}", id);
        assert!(service.apply_computer_move(id).is_err());
        assert!(service.hint(id).is_err());
    }
}

#[test]
fn test_invalid_creation() {
    let service = GameService::in_memory();
    let err = service
        .create_session(Mode::HumanVsComputer, None)
        .unwrap_err();
    assert!(matches!(err.kind(), SessionErrorKind::InvalidInput(_)));
    let err = service
        .create_session(Mode::HumanVsHuman, Some(Mark::X))
        .unwrap_err();
    assert!(matches!(err.kind(), SessionErrorKind::InvalidInput(_)));
    assert!(service.store().is_empty().unwrap());
}

#[test]
fn test_concurrent_moves_from_same_snapshot() {
    let service = Arc::new(GameService::new(InMemorySessionStore::new()));
    let game = service.create_session(Mode::HumanVsHuman, None).unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let service = Arc::clone(&service);
            let id = game.game_id.clone();
            thread::spawn(move || service.apply_human_move(&id, 4).is_ok())
        })
        .collect();
    let successes = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(|ok| *ok)
        .count();

    assert_eq!(successes, 1);
    let view = service.get_session(&game.game_id).unwrap();
    assert_eq!(view.board, "....X....");
    assert_eq!(view.to_move, "O");
}
