//! Turn state machine and color assignment for the single game session.

use crate::board::Color;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Which side currently holds the turn in an active game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// The human player.
    Player,
    /// The computer opponent.
    Cpu,
}

/// Caller-facing view of the session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnState {
    /// No game is active; no drop is accepted from anyone.
    NoGame,
    /// The human player may drop.
    PlayerTurn,
    /// The computer may drop.
    CpuTurn,
}

/// The game session state machine.
///
/// Colors only exist while a game is active, and the cpu color is always
/// the opponent of the player's, so "colored but no game" and "both sides
/// the same color" cannot be represented.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameSession {
    /// Initial state, and terminal state after any game-ending event.
    NoGame,
    /// A game is in progress.
    Active {
        /// The human player's color.
        player: Color,
        /// The computer's color, always `player.opponent()`.
        cpu: Color,
        /// Side that holds the turn.
        turn: Side,
    },
}

impl GameSession {
    /// Creates a session with no active game.
    pub fn new() -> Self {
        GameSession::NoGame
    }

    /// Starts a fresh game with the player holding `color` and the first
    /// turn. Valid from any state.
    #[instrument(skip(self))]
    pub fn start(&mut self, color: Color) {
        info!(player = ?color, cpu = ?color.opponent(), "starting new game");
        *self = GameSession::Active {
            player: color,
            cpu: color.opponent(),
            turn: Side::Player,
        };
    }

    /// Passes the turn to the other side. No effect when no game is active.
    pub fn pass_turn(&mut self) {
        if let GameSession::Active { turn, .. } = self {
            *turn = match turn {
                Side::Player => Side::Cpu,
                Side::Cpu => Side::Player,
            };
        }
    }

    /// Ends the current game. The board keeps its final position until the
    /// next start.
    #[instrument(skip(self))]
    pub fn finish(&mut self) {
        info!("game over");
        *self = GameSession::NoGame;
    }

    /// Returns the caller-facing turn state.
    pub fn turn_state(&self) -> TurnState {
        match self {
            GameSession::NoGame => TurnState::NoGame,
            GameSession::Active {
                turn: Side::Player, ..
            } => TurnState::PlayerTurn,
            GameSession::Active { turn: Side::Cpu, .. } => TurnState::CpuTurn,
        }
    }

    /// Returns the player's color, if a game is active.
    pub fn player_color(&self) -> Option<Color> {
        match self {
            GameSession::Active { player, .. } => Some(*player),
            GameSession::NoGame => None,
        }
    }

    /// Returns the computer's color, if a game is active.
    pub fn cpu_color(&self) -> Option<Color> {
        match self {
            GameSession::Active { cpu, .. } => Some(*cpu),
            GameSession::NoGame => None,
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_no_game() {
        let session = GameSession::new();
        assert_eq!(session.turn_state(), TurnState::NoGame);
        assert_eq!(session.player_color(), None);
        assert_eq!(session.cpu_color(), None);
    }

    #[test]
    fn test_start_assigns_opposing_colors() {
        let mut session = GameSession::new();
        session.start(Color::Red);
        assert_eq!(session.turn_state(), TurnState::PlayerTurn);
        assert_eq!(session.player_color(), Some(Color::Red));
        assert_eq!(session.cpu_color(), Some(Color::Yellow));

        session.start(Color::Yellow);
        assert_eq!(session.player_color(), Some(Color::Yellow));
        assert_eq!(session.cpu_color(), Some(Color::Red));
    }

    #[test]
    fn test_restart_allowed_mid_game() {
        let mut session = GameSession::new();
        session.start(Color::Red);
        session.pass_turn();
        assert_eq!(session.turn_state(), TurnState::CpuTurn);

        session.start(Color::Yellow);
        assert_eq!(session.turn_state(), TurnState::PlayerTurn);
    }

    #[test]
    fn test_pass_turn_alternates() {
        let mut session = GameSession::new();
        session.start(Color::Red);
        session.pass_turn();
        assert_eq!(session.turn_state(), TurnState::CpuTurn);
        session.pass_turn();
        assert_eq!(session.turn_state(), TurnState::PlayerTurn);
    }

    #[test]
    fn test_pass_turn_without_game_is_noop() {
        let mut session = GameSession::new();
        session.pass_turn();
        assert_eq!(session.turn_state(), TurnState::NoGame);
    }

    #[test]
    fn test_finish_returns_to_no_game() {
        let mut session = GameSession::new();
        session.start(Color::Red);
        session.finish();
        assert_eq!(session.turn_state(), TurnState::NoGame);
        assert_eq!(session.player_color(), None);
    }
}
