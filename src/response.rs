//! Protocol responses and the single-slot pending-response mailbox.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// A reply produced by command dispatch, consumed by the next read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Response {
    /// Multi-line board snapshot.
    Board(String),
    /// Command accepted, game continues.
    Ok,
    /// A drop was attempted with no active game.
    NoGame,
    /// The player's drop won the game.
    Win,
    /// The triggering drop filled the board with no winner.
    Tie,
    /// The computer's drop won the game.
    Lose,
    /// A drop was attempted by the side that does not hold the turn.
    OutOfTurn,
}

impl Response {
    /// Renders the literal wire text, newline-terminated.
    pub fn render(&self) -> String {
        match self {
            Response::Board(text) => text.clone(),
            Response::Ok => "OK\n".to_string(),
            Response::NoGame => "NOGAME\n".to_string(),
            Response::Win => "WIN\n".to_string(),
            Response::Tie => "TIE\n".to_string(),
            Response::Lose => "LOSE\n".to_string(),
            Response::OutOfTurn => "OOT\n".to_string(),
        }
    }
}

/// Holds at most one pending response.
///
/// Not a queue: setting a new response discards any unread previous one.
/// Callers that skip reads lose replies, which is the documented protocol
/// behavior.
#[derive(Debug, Default)]
pub struct ResponseSlot {
    pending: Option<Response>,
}

impl ResponseSlot {
    /// Creates an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the pending response, replacing any unread one.
    pub fn set(&mut self, response: Response) {
        if let Some(dropped) = self.pending.replace(response) {
            debug!(?dropped, "unread response overwritten");
        }
    }

    /// Returns the pending response without consuming it.
    pub fn peek(&self) -> Option<&Response> {
        self.pending.as_ref()
    }

    /// Drains the pending response, leaving the slot empty.
    pub fn take(&mut self) -> Option<Response> {
        self.pending.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_renderings() {
        assert_eq!(Response::Ok.render(), "OK\n");
        assert_eq!(Response::NoGame.render(), "NOGAME\n");
        assert_eq!(Response::Win.render(), "WIN\n");
        assert_eq!(Response::Tie.render(), "TIE\n");
        assert_eq!(Response::Lose.render(), "LOSE\n");
        assert_eq!(Response::OutOfTurn.render(), "OOT\n");
    }

    #[test]
    fn test_empty_slot_yields_nothing() {
        let mut slot = ResponseSlot::new();
        assert_eq!(slot.take(), None);
    }

    #[test]
    fn test_take_drains_the_slot() {
        let mut slot = ResponseSlot::new();
        slot.set(Response::Ok);
        assert_eq!(slot.take(), Some(Response::Ok));
        assert_eq!(slot.take(), None);
    }

    #[test]
    fn test_last_write_wins() {
        let mut slot = ResponseSlot::new();
        slot.set(Response::Ok);
        slot.set(Response::Win);
        assert_eq!(slot.take(), Some(Response::Win));
        assert_eq!(slot.take(), None);
    }

    #[test]
    fn test_peek_does_not_consume() {
        let mut slot = ResponseSlot::new();
        slot.set(Response::Tie);
        assert_eq!(slot.peek(), Some(&Response::Tie));
        assert_eq!(slot.take(), Some(Response::Tie));
    }
}
