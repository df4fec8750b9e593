//! End-to-end checks of the payload protocol: every state is carried as a
//! string and decoded again before each move.

use chat_connect_four::callback::{invite_button, move_payload, Reply, Router};
use chat_connect_four::error::{GameError, MalformedReason};
use chat_connect_four::game::{decode, encode, Board, Cell, Game, GameOutcome, Seat, COLS, ROWS};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn assert_gravity(board: &Board) {
    for col in 0..COLS {
        let mut seen_piece = false;
        for row in 0..ROWS {
            let filled = board.get(row, col) != Cell::Empty;
            assert!(
                filled || !seen_piece,
                "gap under a piece in column {col} at row {row}"
            );
            seen_piece |= filled;
        }
    }
    assert!(board.is_settled());
}

#[test]
fn test_concrete_opening() {
    let state = encode(&Game::create(111, 222));
    assert_eq!(state, "111:222:0,0,0,0,0,0");

    let game = decode(&state).unwrap().apply_move(3).unwrap();
    assert_eq!(game.board().get(5, 3), Cell::Blue);
    assert_eq!(encode(&game), "111:222:0,0,0,0,0,27");
    assert_eq!(game.evaluate(), GameOutcome::Unfinished);

    let game = decode("111:222:0,0,0,0,0,27").unwrap();
    assert_eq!(game.turn(), Seat::Red);
    let game = game.apply_move(3).unwrap();
    assert_eq!(game.board().get(4, 3), Cell::Red);
    assert_eq!(encode(&game), "111:222:0,0,0,0,54,27");
}

#[test]
fn test_wrong_row_count_is_malformed() {
    assert!(matches!(
        decode("111:222:0,0,0"),
        Err(GameError::MalformedState {
            reason: MalformedReason::RowCount(3),
            ..
        })
    ));
}

#[test]
fn test_random_playouts_through_payloads() {
    let mut rng = StdRng::seed_from_u64(0x00c0_4ec7);
    let router = Router::default();

    for _ in 0..200 {
        let blue: i64 = rng.random_range(-1_000_000..1_000_000);
        let red = blue + rng.random_range(1..1_000);

        let mut update = match router.handle(red, &invite_button(blue).payload).unwrap() {
            Reply::Update(update) => update,
            other => panic!("join failed: {:?}", other),
        };
        let mut moves = 0;

        while !update.outcome.is_terminal() {
            let game = update.game;
            assert_eq!(game.board().filled_count(), moves);
            assert_eq!(game.turn().index(), moves % 2);
            assert_eq!(decode(&encode(&game)).unwrap(), game);

            let column = rng.random_range(0..COLS);
            let payload = move_payload(&game, column);

            // The seat not on turn is always turned away
            let waiting = game.player_id(game.turn().other());
            assert!(matches!(
                router.handle(waiting, &payload).unwrap(),
                Reply::Rejected(_)
            ));

            match router.handle(game.player_to_move(), &payload).unwrap() {
                Reply::Update(next) => {
                    update = next;
                    moves += 1;
                }
                Reply::Rejected(_) => {
                    assert!(game.board().is_column_full(column));
                }
                Reply::Ignored => panic!("move payload ignored"),
            }
            assert_gravity(update.game.board());
        }

        match update.outcome {
            GameOutcome::Win(seat) => {
                assert_eq!(Some(seat), update.game.mover());
                assert!(update.game.board().find_four(seat).is_some());
            }
            GameOutcome::Draw => assert!(update.game.board().is_full()),
            GameOutcome::Unfinished => unreachable!(),
        }
        assert!(update.buttons.is_empty());
    }
}

#[test]
fn test_full_column_leaves_state_unchanged() {
    let mut game = Game::create(5, 6);
    for _ in 0..ROWS {
        game = game.apply_move(2).unwrap();
    }
    let state = encode(&game);
    let reloaded = decode(&state).unwrap();

    assert_eq!(
        reloaded.apply_move(2),
        Err(GameError::InvalidMove { column: 2 })
    );
    assert_eq!(encode(&reloaded), state);
}

#[test]
fn test_each_direction_wins_for_mover() {
    // (rows top to bottom, final column, expected seat)
    let cases = [
        // Vertical: blue three in column 0, red three in column 1
        ("1:2:0,0,0,7,7,7", 0, Seat::Blue),
        // Horizontal: blue 0-2 bottom, red 0-2 above
        ("1:2:0,0,0,0,26,13", 3, Seat::Blue),
    ];
    for (state, column, seat) in cases {
        let game = decode(state).unwrap().apply_move(column).unwrap();
        assert_eq!(game.evaluate(), GameOutcome::Win(seat), "state {state}");
    }

    // Diagonals are built move by move
    let up_right = [0, 1, 1, 2, 3, 2, 2, 3, 3, 6, 3];
    let down_right = [6, 5, 5, 4, 3, 4, 4, 3, 3, 0, 3];
    for moves in [up_right, down_right] {
        let mut game = Game::create(1, 2);
        for (k, col) in moves.into_iter().enumerate() {
            game = decode(&encode(&game)).unwrap().apply_move(col).unwrap();
            let expected = if k + 1 == moves.len() {
                GameOutcome::Win(Seat::Blue)
            } else {
                GameOutcome::Unfinished
            };
            assert_eq!(game.evaluate(), expected, "moves {moves:?} step {k}");
        }
    }
}

#[test]
fn test_draw_on_last_cell() {
    let game = decode("1:2:400,1421,1858,1421,1858,1421").unwrap();
    assert_eq!(game.evaluate(), GameOutcome::Unfinished);
    assert_eq!(game.legal_columns(), vec![6]);

    let game = game.apply_move(6).unwrap();
    assert_eq!(encode(&game), "1:2:1858,1421,1858,1421,1858,1421");
    assert_eq!(game.evaluate(), GameOutcome::Draw);
}
