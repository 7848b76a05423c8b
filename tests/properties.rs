//! Property tests for the rules engine invariants

use gomoku::rules::has_five_at_pos;
use gomoku::{GameEngine, GameStatus, Mark, Pos, ScriptedPicker, Turn};
use proptest::prelude::*;

/// A raw move request, possibly off the board or for the wrong side
fn request() -> impl Strategy<Value = (i32, i32, Mark)> {
    (
        -2i32..9,
        -2i32..9,
        prop_oneof![Just(Mark::Player), Just(Mark::Computer), Just(Mark::Empty)],
    )
}

proptest! {
    #[test]
    fn fresh_engine_is_empty(size in 1u8..=19) {
        let engine = GameEngine::with_picker(size, ScriptedPicker::first());
        prop_assert!(engine.board().is_board_empty());
        prop_assert_eq!(engine.status(), GameStatus::InProgress);
        prop_assert!(engine.is_player_turn());
    }

    #[test]
    fn every_request_respects_invariants(
        size in 1u8..=7,
        requests in proptest::collection::vec(request(), 1..120),
    ) {
        let mut engine = GameEngine::with_picker(size, ScriptedPicker::first());

        for (row, col, mark) in requests {
            let before = engine.board();
            let turn = engine.turn();
            let status = engine.status();

            let accepted = engine.apply_move(row, col, mark);
            let after = engine.board();

            if !accepted {
                prop_assert_eq!(&after, &before);
                prop_assert_eq!(engine.turn(), turn);
                prop_assert_eq!(engine.status(), status);
                continue;
            }

            // Only a legal move by the side to move on an open cell lands
            prop_assert!(!status.is_terminal());
            prop_assert_eq!(mark, turn.mark());
            prop_assert_eq!(after.stone_count(), before.stone_count() + 1);

            if engine.is_game_over() {
                prop_assert_eq!(engine.turn(), turn);
                if engine.status() == GameStatus::Draw {
                    prop_assert!(after.is_full());
                    // A full board only counts as a draw when the last move made no five
                    let last = Pos::new(row as u8, col as u8);
                    prop_assert!(!has_five_at_pos(&after, last, mark));
                } else {
                    prop_assert_eq!(engine.status().winner(), Some(mark));
                    prop_assert!(engine.winning_line().is_some_and(|l| l.len() >= 5));
                }
            } else {
                prop_assert_eq!(engine.turn(), turn.other());
            }
        }
    }

    #[test]
    fn random_games_always_finish(seed in any::<u64>(), size in 1u8..=8) {
        let mut engine = GameEngine::with_picker(size, gomoku::RandomPicker::seeded(seed));
        let mut player = gomoku::RandomPicker::seeded(seed ^ 0x5eed);
        let cells = size as usize * size as usize;

        for _ in 0..cells {
            if engine.is_game_over() {
                break;
            }
            match engine.turn() {
                Turn::Player => {
                    let open = engine.board().empty_cells();
                    let pos = gomoku::MovePicker::pick(&mut player, &open).unwrap();
                    prop_assert!(engine.apply_move(pos.row as i32, pos.col as i32, Mark::Player));
                }
                Turn::Computer => {
                    prop_assert!(engine.apply_random_computer_move().is_some());
                }
            }
        }

        prop_assert!(engine.is_game_over());
        prop_assert!(!engine.result_message().is_empty());
        if size < 5 {
            prop_assert_eq!(engine.status(), GameStatus::Draw);
        }
        // Nothing is accepted once the game has ended
        for pos in engine.board().positions() {
            prop_assert!(!engine.apply_move(pos.row as i32, pos.col as i32, engine.turn().mark()));
        }
    }
}
