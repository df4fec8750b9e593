//! Flat text form of a [`Game`], small enough for a button callback payload.
//!
//! Layout: `<player0>:<player1>:<row0>,<row1>,<row2>,<row3>,<row4>,<row5>`.
//! Each row is a base-3 numeral with column 0 as the least-significant digit
//! (empty = 0, blue = 1, red = 2), so a row never exceeds `3^7 - 1`.
//! The turn is not part of the text; it is re-derived from the pieces.

use std::str::FromStr;

use super::{Board, Cell, Game, COLS, ROWS};
use crate::error::{GameError, MalformedReason};

/// Largest value a packed row can take
pub const MAX_PACKED_ROW: u32 = 3u32.pow(COLS as u32) - 1;

/// Pack one row into its base-3 value
pub fn pack_row(row: &[Cell; COLS]) -> u32 {
    row.iter()
        .rev()
        .fold(0, |acc, cell| acc * 3 + u32::from(cell.digit()))
}

/// Unpack a base-3 row value, column 0 first. `None` if it has more than seven digits.
pub fn unpack_row(mut packed: u32) -> Option<[Cell; COLS]> {
    if packed > MAX_PACKED_ROW {
        return None;
    }
    let mut row = [Cell::Empty; COLS];
    for cell in row.iter_mut() {
        *cell = Cell::from_digit((packed % 3) as u16)?;
        packed /= 3;
    }
    Some(row)
}

/// Serialize a game to its payload string
pub fn encode(game: &Game) -> String {
    let board = game.board();
    let state = (0..ROWS)
        .map(|row| pack_row(board.row(row)).to_string())
        .collect::<Vec<_>>()
        .join(",");
    let [first, second] = game.player_ids();
    format!("{first}:{second}:{state}")
}

/// Parse a payload string back into a game.
///
/// Anything that does not match the layout exactly is rejected; nothing is
/// repaired or defaulted.
pub fn decode(payload: &str) -> Result<Game, GameError> {
    let malformed = |reason| GameError::MalformedState {
        payload: payload.to_string(),
        reason,
    };

    let fields: Vec<&str> = payload.split(':').collect();
    let [first, second, state] = fields.as_slice() else {
        return Err(malformed(MalformedReason::FieldCount(fields.len())));
    };

    let parse_id = |field: &str| {
        field
            .parse::<i64>()
            .map_err(|_| malformed(MalformedReason::PlayerId(field.to_string())))
    };
    let player_ids = [parse_id(*first)?, parse_id(*second)?];

    let rows: Vec<&str> = state.split(',').collect();
    if rows.len() != ROWS {
        return Err(malformed(MalformedReason::RowCount(rows.len())));
    }

    let mut cells = [[Cell::Empty; COLS]; ROWS];
    for (index, (text, slot)) in rows.iter().zip(cells.iter_mut()).enumerate() {
        let value = text.parse::<u32>().map_err(|_| {
            malformed(MalformedReason::RowValue {
                index,
                value: text.to_string(),
            })
        })?;
        *slot = unpack_row(value)
            .ok_or_else(|| malformed(MalformedReason::RowRange { index, value }))?;
    }

    Ok(Game::from_parts(player_ids, Board::from_rows(cells)))
}

impl Game {
    pub fn encode(&self) -> String {
        encode(self)
    }

    pub fn decode(payload: &str) -> Result<Game, GameError> {
        decode(payload)
    }
}

impl FromStr for Game {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode(s)
    }
}
