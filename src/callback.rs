//! Routing of button callback payloads.
//!
//! Two payload shapes exist:
//!
//! - `join:<host_id>` on the invitation. Pressing it seats the host first and
//!   the presser second.
//! - `game:<encoded state>:<column>` on each column button of a running game.
//!
//! Every move payload is decoded from scratch, the presser is checked against
//! the seat whose turn the board says it is, and exactly one piece is dropped.
//! Two presses on the same displayed state may both succeed; whichever reply
//! is shown last wins. There is no compare-and-swap to prevent that.

use tracing::{debug, instrument, warn};

use crate::config::TransportConfig;
use crate::error::{GameError, MalformedReason};
use crate::game::{Game, GameOutcome, Seat, COLS};

const JOIN_PREFIX: &str = "join:";
const GAME_PREFIX: &str = "game:";

/// An inline button: what it shows and what it sends back when pressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: String,
    pub payload: String,
}

/// Why a press was turned down. The displayed state stays as it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    SelfChallenge,
    NotYourTurn,
    InvalidMove,
}

impl Rejection {
    /// Short notice shown only to the presser
    pub fn notice(self) -> &'static str {
        match self {
            Rejection::SelfChallenge => "You cannot join your own game",
            Rejection::NotYourTurn => "It is not your turn",
            Rejection::InvalidMove => "Invalid move!",
        }
    }
}

/// New state to display after an accepted press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardUpdate {
    pub game: Game,
    pub outcome: GameOutcome,
    /// Column buttons, empty once the game is over
    pub buttons: Vec<Button>,
}

impl BoardUpdate {
    /// Seat expected to press next, none when the game is over
    pub fn next_to_move(&self) -> Option<Seat> {
        if self.outcome.is_terminal() {
            None
        } else {
            Some(self.game.turn())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Not a payload this router understands; acknowledge and move on
    Ignored,
    Rejected(Rejection),
    Update(BoardUpdate),
}

/// Button that lets anyone but `host` accept the challenge
pub fn invite_button(host: i64) -> Button {
    Button {
        label: "Join".to_string(),
        payload: format!("{JOIN_PREFIX}{host}"),
    }
}

/// Payload for dropping a piece into `column` of `game`
pub fn move_payload(game: &Game, column: usize) -> String {
    format!("{GAME_PREFIX}{}:{column}", game.encode())
}

pub struct Router {
    max_callback_bytes: usize,
}

impl Router {
    pub fn new(config: &TransportConfig) -> Self {
        Router {
            max_callback_bytes: config.max_callback_bytes,
        }
    }

    /// Handle one button press by `actor`.
    ///
    /// Malformed payloads are errors: nothing is repaired and no update is
    /// produced. Rejections are ordinary replies.
    #[instrument(skip(self))]
    pub fn handle(&self, actor: i64, data: &str) -> Result<Reply, GameError> {
        if let Some(host) = data.strip_prefix(JOIN_PREFIX) {
            let host = host.parse::<i64>().map_err(|_| GameError::MalformedState {
                payload: data.to_string(),
                reason: MalformedReason::PlayerId(host.to_string()),
            })?;
            if host == actor {
                debug!("host pressed their own invitation");
                return Ok(Reply::Rejected(Rejection::SelfChallenge));
            }
            let game = Game::create(host, actor);
            debug!(host, guest = actor, "challenge accepted");
            return Ok(Reply::Update(self.board_update(game)));
        }

        if let Some(rest) = data.strip_prefix(GAME_PREFIX) {
            let Some((state, column)) = rest.rsplit_once(':') else {
                return Err(GameError::MalformedState {
                    payload: rest.to_string(),
                    reason: MalformedReason::FieldCount(1),
                });
            };
            let mut game = Game::decode(state)?;

            if actor != game.player_to_move() {
                debug!(expected = game.player_to_move(), "press out of turn");
                return Ok(Reply::Rejected(Rejection::NotYourTurn));
            }

            let Ok(column) = column.parse::<usize>() else {
                debug!(column, "column is not a number");
                return Ok(Reply::Rejected(Rejection::InvalidMove));
            };
            if let Err(e) = game.apply_move_mut(column) {
                debug!(error = %e, "move refused");
                return Ok(Reply::Rejected(Rejection::InvalidMove));
            }

            return Ok(Reply::Update(self.board_update(game)));
        }

        debug!("unrecognised payload");
        Ok(Reply::Ignored)
    }

    fn board_update(&self, game: Game) -> BoardUpdate {
        let outcome = game.evaluate();
        let buttons = if outcome.is_terminal() {
            Vec::new()
        } else {
            (0..COLS)
                .map(|column| Button {
                    label: (column + 1).to_string(),
                    payload: move_payload(&game, column),
                })
                .collect()
        };

        for button in &buttons {
            if button.payload.len() > self.max_callback_bytes {
                warn!(
                    len = button.payload.len(),
                    limit = self.max_callback_bytes,
                    payload = %button.payload,
                    "callback payload exceeds platform limit"
                );
            }
        }

        debug!(state = %game.encode(), ?outcome, "board updated");
        BoardUpdate {
            game,
            outcome,
            buttons,
        }
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new(&TransportConfig::default())
    }
}
