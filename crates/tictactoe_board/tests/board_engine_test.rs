//! Tests for the board engine state machine.

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tictactoe_board::{
    Actor, Cell, GameState, GameStatus, InvalidMove, Line, MoveError, Position, Symbol,
};

fn play(moves: &[usize]) -> GameState {
    let mut state = GameState::new();
    for &index in moves {
        state.apply_move(index).expect("scripted move is legal");
    }
    state
}

#[test]
fn test_x_wins_top_row() {
    let mut state = GameState::new();
    let symbols: Vec<Symbol> = [0, 4, 1, 3, 2]
        .into_iter()
        .map(|index| state.apply_move(index).expect("legal move").symbol)
        .collect();

    assert_eq!(symbols, vec![Symbol::X, Symbol::O, Symbol::X, Symbol::O, Symbol::X]);
    assert_eq!(
        state.status(),
        GameStatus::Won {
            symbol: Symbol::X,
            line: Line::ALL[0],
        }
    );
    assert_eq!(state.status().winning_line().map(|l| l.indices()), Some([0, 1, 2]));
    assert_eq!(state.next_actor(), None);
}

#[test]
fn test_full_board_without_line_is_drawn() {
    let state = play(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert_eq!(state.status(), GameStatus::Drawn);
    assert_eq!(state.status().winner(), None);
    assert_eq!(state.move_count(), 9);
    assert_eq!(state.available_moves().count(), 0);
}

#[test]
fn test_occupied_cell_is_rejected_without_change() {
    let mut state = play(&[4]);
    let before = state.clone();

    let result = state.apply_move(4);

    assert_eq!(
        result,
        Err(MoveError::InvalidMove(InvalidMove::Occupied(Position::Center)))
    );
    assert_eq!(state, before);
}

#[test]
fn test_move_after_win_is_rejected() {
    let mut state = play(&[0, 4, 1, 3, 2]);
    let before = state.clone();

    assert_eq!(
        state.apply_move(8),
        Err(MoveError::InvalidMove(InvalidMove::GameOver))
    );
    assert_eq!(state, before);
}

#[test]
fn test_available_moves_is_restartable() {
    let state = play(&[0, 8]);
    let first: Vec<Position> = state.available_moves().collect();
    let second: Vec<Position> = state.available_moves().collect();
    assert_eq!(first, second);
    assert_eq!(first.len(), 7);
    assert!(!first.contains(&Position::TopLeft));
    assert!(!first.contains(&Position::BottomRight));
}

#[test]
fn test_random_move_fails_on_terminal_board() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let won = play(&[0, 4, 1, 3, 2]);
    assert_eq!(won.choose_random_move(&mut rng), Err(MoveError::NoMovesAvailable));

    let drawn = play(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert_eq!(drawn.choose_random_move(&mut rng), Err(MoveError::NoMovesAvailable));
}

#[test]
fn test_random_move_is_deterministic_under_seed() {
    let state = play(&[4]);
    let pick = |seed| {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        state.choose_random_move(&mut rng).expect("moves remain")
    };
    assert_eq!(pick(42), pick(42));
}

#[test]
fn test_random_move_reaches_every_empty_cell() {
    let state = play(&[4]);
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut seen = [false; 9];
    for _ in 0..500 {
        let pos = state.choose_random_move(&mut rng).expect("moves remain");
        seen[pos.to_index()] = true;
    }
    let expected: Vec<bool> = (0..9).map(|i| i != 4).collect();
    assert_eq!(seen.to_vec(), expected);
}

#[test]
fn test_reset_from_terminal_state() {
    let mut state = play(&[0, 4, 1, 3, 2]);
    state.reset();
    assert!(state.board().cells().iter().all(|c| *c == Cell::Empty));
    assert_eq!(state.status(), GameStatus::InProgress);
    assert_eq!(state.current_turn(), Symbol::X);
    assert_eq!(state.next_actor(), Some(Actor::Human));
}

proptest! {
    #[test]
    fn prop_every_line_wins(
        line_index in 0..8usize,
        o_wins in any::<bool>(),
        order in Just((0..9usize).collect::<Vec<_>>()).prop_shuffle(),
    ) {
        let line = Line::ALL[line_index];
        let on_line: Vec<usize> = order.iter().copied().filter(|i| line.indices().contains(i)).collect();
        let off_line: Vec<usize> = order.iter().copied().filter(|i| !line.indices().contains(i)).collect();

        // The loser places its three cells first when O is the winner; skip
        // orders where those cells happen to form a line of their own.
        if o_wins {
            let x_cells = &off_line[..3];
            prop_assume!(!Line::ALL.iter().any(|l| l.indices().iter().all(|i| x_cells.contains(i))));
        }

        let (winner_cells, loser_cells) = (&on_line, &off_line);
        let mut moves = Vec::new();
        for turn in 0..3 {
            if o_wins {
                moves.push(loser_cells[turn]);
                moves.push(winner_cells[turn]);
            } else {
                moves.push(winner_cells[turn]);
                if turn < 2 {
                    moves.push(loser_cells[turn]);
                }
            }
        }

        let mut state = GameState::new();
        let mut last = None;
        for index in moves {
            prop_assert!(!state.is_terminal());
            last = Some(state.apply_move(index).expect("legal move"));
        }

        let expected = if o_wins { Symbol::O } else { Symbol::X };
        let outcome = last.expect("at least one move");
        prop_assert_eq!(outcome.status, GameStatus::Won { symbol: expected, line });
        prop_assert_eq!(outcome.winning_line(), Some(line));
        prop_assert_eq!(outcome.next_actor, None);
    }

    #[test]
    fn prop_turns_alternate_and_rejections_leave_state_unchanged(
        requests in proptest::collection::vec(0..11usize, 1..30),
    ) {
        let mut state = GameState::new();
        for index in requests {
            let before = state.clone();
            match state.apply_move(index) {
                Ok(outcome) => {
                    prop_assert_eq!(outcome.symbol, before.current_turn());
                    prop_assert_eq!(state.move_count(), before.move_count() + 1);
                    prop_assert_ne!(state.current_turn(), before.current_turn());
                }
                Err(_) => prop_assert_eq!(&state, &before),
            }
        }
    }

    #[test]
    fn prop_random_play_terminates_and_resets(seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut state = GameState::new();
        while let Ok(position) = state.choose_random_move(&mut rng) {
            prop_assert!(state.board().is_empty(position));
            state.apply_move(position.to_index()).expect("random pick is legal");
        }
        prop_assert!(state.is_terminal());
        prop_assert!(state.move_count() >= 5);

        state.reset();
        prop_assert_eq!(state.available_moves().count(), 9);
        prop_assert!(!state.is_terminal());
    }
}
