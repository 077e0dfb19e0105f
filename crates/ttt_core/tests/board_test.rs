//! Tests for the board model.

use ttt_core::{Board, GameErrorKind, GameOutcome, GameState, Mark, Move, rules};

fn play(moves: &[usize]) -> Board {
    moves
        .iter()
        .try_fold(Board::new(), |b, &i| b.apply(i))
        .unwrap()
}

/// Every position reachable from the empty board with X to move.
fn reachable() -> Vec<Board> {
    let mut seen = std::collections::HashSet::new();
    let mut stack = vec![Board::new()];
    let mut out = Vec::new();
    while let Some(board) = stack.pop() {
        if !seen.insert(board) {
            continue;
        }
        out.push(board);
        if rules::is_terminal(&board) {
            continue;
        }
        for i in board.legal_moves() {
            stack.push(board.apply(i).unwrap());
        }
    }
    out
}

#[test]
fn test_initial_board_has_nine_legal_moves() {
    let board = Board::initial(Mark::X).unwrap();
    assert_eq!(board.legal_moves(), (0..9).collect::<Vec<_>>());
    assert_eq!(board.to_move(), Mark::X);
    assert_eq!(Board::initial(Mark::O).unwrap().to_move(), Mark::O);
}

#[test]
fn test_initial_rejects_empty_mark() {
    let err = Board::initial(Mark::Empty).unwrap_err();
    assert!(matches!(err.kind(), GameErrorKind::InvalidArgument(_)));
}

#[test]
fn test_apply_flips_turn_and_reduces_legal_moves() {
    let board = Board::new();
    let next = board.apply(4).unwrap();
    assert_eq!(next.to_move(), Mark::O);
    assert!(!next.is_legal(4));
    assert_eq!(next.legal_moves().len(), 8);
    // receiver untouched
    assert_eq!(board, Board::new());
}

#[test]
fn test_apply_properties_hold_everywhere() {
    for board in reachable() {
        assert_eq!(board.legal_moves().len() + board.occupied_count(), 9);
        if rules::is_terminal(&board) {
            continue;
        }
        for i in board.legal_moves() {
            let next = board.apply(i).unwrap();
            assert_eq!(next.to_move(), board.to_move().opponent());
            assert_eq!(next.cell(i).unwrap(), board.to_move());
        }
    }
}

#[test]
fn test_illegal_move_is_illegal_move() {
    let board = play(&[0]);
    let err = board.apply(0).unwrap_err();
    assert_eq!(err.kind(), &GameErrorKind::IllegalMove(0));
    let err = board.apply(9).unwrap_err();
    assert_eq!(err.kind(), &GameErrorKind::IllegalMove(9));
}

#[test]
fn test_terminal_board_rejects_moves() {
    let board = play(&[0, 3, 1, 4, 2]);
    let err = board.apply(8).unwrap_err();
    assert!(matches!(err.kind(), GameErrorKind::IllegalState(_)));
    // legality is checked before terminality
    let err = board.apply(0).unwrap_err();
    assert_eq!(err.kind(), &GameErrorKind::IllegalMove(0));
}

#[test]
fn test_cell_out_of_range() {
    let err = Board::new().cell(9).unwrap_err();
    assert_eq!(err.kind(), &GameErrorKind::OutOfRange(9));
    assert!(!Board::new().is_legal(42));
}

#[test]
fn test_move_range() {
    assert_eq!(Move::new(8).unwrap().index(), 8);
    let err = Move::new(9).unwrap_err();
    assert!(matches!(err.kind(), GameErrorKind::InvalidArgument(_)));
    assert!(Move::try_from(100usize).is_err());
}

#[test]
fn test_equality_includes_turn() {
    let x = Board::parse("X........", Mark::O).unwrap();
    let o = Board::parse("X........", Mark::X).unwrap();
    assert_ne!(x, o);
    assert_eq!(x, play(&[0]));
}

#[test]
fn test_from_cells_validates_length() {
    let err = Board::from_cells(&[Mark::Empty; 8], Mark::X).unwrap_err();
    assert!(matches!(err.kind(), GameErrorKind::InvalidArgument(_)));
    assert!(Board::parse("XO", Mark::X).is_err());
    assert!(Board::parse("XO.?.....", Mark::X).is_err());
}

#[test]
fn test_encode_and_display() {
    let board = play(&[0, 4, 6]);
    assert_eq!(board.encode(), "X...O.X..");
    assert_eq!(board.to_string(), "X../.O./X.. turn=O");
    assert_eq!(board.display(), "X|1|2\n-+-+-\n3|O|5\n-+-+-\nX|7|8");
}

#[test]
fn test_game_state_projection() {
    let state = GameState::of(play(&[0, 3, 1, 4, 2]));
    assert_eq!(*state.outcome(), GameOutcome::FirstWins);
    assert!(state.is_terminal());
    assert!(!GameState::new_game_x_starts().is_terminal());
    assert_eq!(GameState::new_game_o_starts().board().to_move(), Mark::O);
}
