//! Plain-text rendering of boards and game messages.

use crate::callback::BoardUpdate;
use crate::config::RenderConfig;
use crate::game::{Board, Cell, GameOutcome, Seat, COLS, ROWS};
use crate::names::NameStore;

fn glyph(cell: Cell, glyphs: &RenderConfig) -> &str {
    match cell {
        Cell::Empty => &glyphs.empty,
        Cell::Blue => &glyphs.blue,
        Cell::Red => &glyphs.red,
    }
}

fn seat_glyph(seat: Seat, glyphs: &RenderConfig) -> &str {
    glyph(seat.to_cell(), glyphs)
}

/// One line per row, top row first, then the column labels.
pub fn render_board(board: &Board, glyphs: &RenderConfig) -> String {
    let mut lines = Vec::with_capacity(ROWS + 1);
    for row in 0..ROWS {
        let line: String = (0..COLS)
            .map(|col| glyph(board.get(row, col), glyphs))
            .collect();
        lines.push(line);
    }
    lines.push(glyphs.column_labels.concat());
    lines.join("\n")
}

/// Full message for a game: title, one header per seat, then the board.
///
/// The seat to move is marked with `> `; the winner gets a trophy and a draw
/// gives both seats a handshake.
pub fn render_update(update: &BoardUpdate, names: &NameStore, glyphs: &RenderConfig) -> String {
    let game = &update.game;
    let mut header = [Seat::Blue, Seat::Red].map(|seat| {
        format!(
            "{} {}",
            seat_glyph(seat, glyphs),
            names.display(game.player_id(seat))
        )
    });

    match update.outcome {
        GameOutcome::Win(seat) => {
            let line = &mut header[seat.index()];
            line.push(' ');
            line.push_str(&glyphs.trophy);
        }
        GameOutcome::Draw => {
            for line in header.iter_mut() {
                line.push(' ');
                line.push_str(&glyphs.handshake);
            }
        }
        GameOutcome::Unfinished => {
            let next = game.turn().index();
            header[next] = format!("> {}", header[next]);
        }
    }

    let [first, second] = header;
    [
        glyphs.title.clone(),
        first,
        second,
        String::new(),
        render_board(game.board(), glyphs),
    ]
    .join("\n")
}

/// Message posted with the invitation button, before anyone has joined.
pub fn render_invite(host_name: &str, glyphs: &RenderConfig) -> String {
    format!(
        "Play {}\n{} {}\n{} Waiting for opponent\nConnect 4 of your tokens in a row to win.",
        glyphs.title, glyphs.blue, host_name, glyphs.red
    )
}
