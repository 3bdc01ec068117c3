//! Rules-layer scenarios through the public API.
//!
//! States are built the way a host would build them: `apply_move` with
//! host-supplied rolls (the generator accepts any roll value, the dice
//! merely never produce more than 4), plus explicit turn switches.

use ur_engine::{
    apply_move, legal_moves, GameError, GameState, Move, PlayerId, EXIT_POSITION,
    PIECES_PER_PLAYER,
};

/// Enter a piece for the current player at `dest` using a synthetic roll.
fn enter(state: &mut GameState, dest: i8) {
    apply_move(state, &Move::Enter { dest }, dest as u8).expect("enter must be legal");
}

/// Walk one piece of the current player through the full path and off the
/// board: enter at 13, then exit with a 4.
fn run_piece_home(state: &mut GameState) {
    enter(state, 13);
    let exit = legal_moves(state, 4)
        .into_iter()
        .find(|m| matches!(m, Move::Exit { .. }))
        .expect("exact 17 must offer an exit");
    apply_move(state, &exit, 4).unwrap();
}

/// Empty board, roll 5: exactly one move, an enter to position 5, and
/// applying it puts a piece there.
#[test]
fn test_empty_board_roll_five_enters() {
    let mut state = GameState::new();

    let moves = legal_moves(&state, 5);
    assert_eq!(moves.as_slice(), &[Move::Enter { dest: 5 }]);

    apply_move(&mut state, &moves[0], 5).unwrap();

    let pieces = state.player(PlayerId::ONE).pieces();
    assert_eq!(pieces.iter().filter(|p| p.position() == 5).count(), 1);
    assert_eq!(state.player(PlayerId::ONE).on_board_count(), 1);
}

/// A safe-zone piece is unreachable by the opponent: their position 3 is a
/// different physical cell, so no candidate move of theirs touches it.
#[test]
fn test_safe_zone_piece_is_unreachable() {
    let mut state = GameState::new();
    enter(&mut state, 3);
    state.switch_player();

    // Player two's own entry at 3 is open (their private lane) and
    // capture-free.
    let moves = legal_moves(&state, 3);
    assert_eq!(moves.as_slice(), &[Move::Enter { dest: 3 }]);

    let outcome = apply_move(&mut state, &moves[0], 3).unwrap();
    assert!(!outcome.captured);
    assert_eq!(state.player(PlayerId::ONE).on_board_count(), 1);
    assert_eq!(state.player(PlayerId::TWO).on_board_count(), 1);
}

/// Landing on an opponent piece on the shared lane captures it: the piece
/// is off-board afterwards and the opponent's on-board count drops by one.
#[test]
fn test_shared_lane_capture() {
    let mut state = GameState::new();
    enter(&mut state, 7);
    state.switch_player();

    // Position 7 is the same physical cell for both players.
    let moves = legal_moves(&state, 7);
    assert_eq!(moves.as_slice(), &[Move::Enter { dest: 7 }]);

    let outcome = apply_move(&mut state, &moves[0], 7).unwrap();

    assert!(outcome.captured);
    assert_eq!(state.player(PlayerId::ONE).on_board_count(), 0);
    assert_eq!(state.player(PlayerId::ONE).off_board_count(), PIECES_PER_PLAYER);
    assert_eq!(state.player(PlayerId::TWO).on_board_count(), 1);
}

/// An opponent on the shared rosette can neither be captured nor landed on.
#[test]
fn test_shared_rosette_blocks_instead_of_capturing() {
    let mut state = GameState::new();
    enter(&mut state, 8);
    state.switch_player();

    let moves = legal_moves(&state, 8);
    assert!(
        moves.is_empty(),
        "the only reachable destination is the occupied rosette"
    );
}

/// Exit needs an exact sum of 17; one short advances to 16 instead.
#[test]
fn test_exit_exact_roll_only() {
    let mut state = GameState::new();
    enter(&mut state, 13);

    let moves = legal_moves(&state, 4);
    assert!(moves.iter().any(|m| matches!(m, Move::Exit { from: 13, .. })));

    let moves = legal_moves(&state, 3);
    assert!(!moves.iter().any(|m| matches!(m, Move::Exit { .. })));
    let advance = moves
        .iter()
        .find(|m| matches!(m, Move::Advance { from: 13, dest: 16, .. }))
        .expect("advance to 16 must be offered");

    apply_move(&mut state, advance, 3).unwrap();
    assert_eq!(state.player(PlayerId::ONE).pieces()[0].position(), 16);
}

/// Applying an exit marks the piece exited and bumps the count.
#[test]
fn test_exit_increments_completed_count() {
    let mut state = GameState::new();
    run_piece_home(&mut state);

    let player = state.player(PlayerId::ONE);
    assert_eq!(player.exited_count(), 1);
    assert!(player.pieces().iter().any(|p| p.has_exited()));
    assert_eq!(
        player.off_board_count() + player.on_board_count() + player.exited_count(),
        PIECES_PER_PLAYER
    );
}

/// Seven pieces home wins, and the finished game rejects all mutation.
#[test]
fn test_win_and_post_terminal_rejection() {
    let mut state = GameState::new();

    for brought_home in 1..=PIECES_PER_PLAYER {
        assert_eq!(state.winner(), None);
        run_piece_home(&mut state);
        assert_eq!(state.player(PlayerId::ONE).exited_count(), brought_home);
    }

    assert_eq!(state.winner(), Some(PlayerId::ONE));

    let snapshot = state.clone();
    assert_eq!(
        apply_move(&mut state, &Move::Enter { dest: 2 }, 2),
        Err(GameError::GameOver)
    );
    assert_eq!(state, snapshot);
}

/// Moves outside the generated set are rejected without touching the state.
#[test]
fn test_invalid_selection_rejected() {
    let mut state = GameState::new();
    enter(&mut state, 5);
    let snapshot = state.clone();

    // Wrong destination for the roll.
    let bogus = Move::Advance { slot: 0, from: 5, dest: 9 };
    assert_eq!(apply_move(&mut state, &bogus, 2), Err(GameError::IllegalMove));

    // Wrong slot.
    let bogus = Move::Advance { slot: 3, from: 5, dest: 7 };
    assert_eq!(apply_move(&mut state, &bogus, 2), Err(GameError::IllegalMove));

    // Roll 0 generates nothing at all.
    assert_eq!(
        apply_move(&mut state, &Move::Enter { dest: 2 }, 0),
        Err(GameError::IllegalMove)
    );

    assert_eq!(state, snapshot);
}

/// The board queries renderers rely on: cell kinds and piece lookup.
#[test]
fn test_render_queries() {
    let mut state = GameState::new();
    enter(&mut state, 4);

    // Player one's position 4 is the private rosette at (2,0).
    assert!(state.cell(2, 0).is_rosette());
    let (owner, piece) = state.piece_at(2, 0).expect("piece just entered");
    assert_eq!(owner, PlayerId::ONE);
    assert_eq!(piece.position(), 4);

    assert_eq!(state.piece_at(0, 0), None);
    assert_eq!(state.piece_at(9, 9), None);
}

/// A captured piece can re-enter later; EXIT_POSITION pieces never return.
#[test]
fn test_captured_piece_reenters() {
    let mut state = GameState::new();
    enter(&mut state, 7);
    state.switch_player();
    enter(&mut state, 7); // captures

    state.switch_player();
    assert_eq!(state.player(PlayerId::ONE).off_board_count(), PIECES_PER_PLAYER);

    // The captured side can enter again immediately.
    let moves = legal_moves(&state, 2);
    assert!(moves.contains(&Move::Enter { dest: 2 }));

    apply_move(&mut state, &Move::Enter { dest: 2 }, 2).unwrap();
    assert_eq!(state.player(PlayerId::ONE).on_board_count(), 1);
    assert!(state
        .player(PlayerId::ONE)
        .pieces()
        .iter()
        .all(|p| p.position() < EXIT_POSITION));
}
