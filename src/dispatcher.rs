//! Command routing: parse, apply the turn machine, set the pending reply.

use crate::board::{Board, Color, Column};
use crate::command::{Command, ParseError};
use crate::response::{Response, ResponseSlot};
use crate::rules::{check_tie, check_win};
use crate::selector::{ColumnSelector, RandomSelector};
use crate::session::{GameSession, Side, TurnState};
use tracing::{info, instrument, warn};

/// Outcome of resolving one legal drop.
enum DropOutcome {
    /// Game continues; turn passes to the other side.
    Continue,
    /// The dropped color completed four in a row.
    Win,
    /// The drop filled the last empty cell.
    Tie,
    /// The column was full; nothing changed.
    ColumnFull,
}

/// Routes decoded commands through the session and board, leaving at most
/// one pending response per command.
///
/// Silent paths set no response at all: unrecognized or malformed input,
/// a player drop into a full column, and a computer draw of a full column.
/// The caller observes those only as an empty read.
pub struct Dispatcher {
    board: Board,
    session: GameSession,
    slot: ResponseSlot,
    selector: Box<dyn ColumnSelector + Send>,
}

impl Dispatcher {
    /// Creates a dispatcher with an OS-seeded random computer opponent.
    pub fn new() -> Self {
        Self::with_selector(Box::new(RandomSelector::new()))
    }

    /// Creates a dispatcher with the given column selector.
    pub fn with_selector(selector: Box<dyn ColumnSelector + Send>) -> Self {
        Self {
            board: Board::new(),
            session: GameSession::new(),
            slot: ResponseSlot::new(),
            selector,
        }
    }

    /// Parses and executes one command line.
    ///
    /// Parse failures are logged and leave the response slot untouched.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, line: &str) {
        match Command::parse(line) {
            Ok(command) => self.execute(command),
            Err(error) => self.reject(error),
        }
    }

    /// Executes a decoded command.
    pub fn execute(&mut self, command: Command) {
        match command {
            Command::Board => self.handle_board(),
            Command::Reset(color) => self.handle_reset(color),
            Command::Dropc(column) => self.handle_dropc(column),
            Command::Cturn => self.handle_cturn(),
        }
    }

    /// Drains the pending response, if any.
    pub fn take_response(&mut self) -> Option<Response> {
        self.slot.take()
    }

    /// Returns the pending response without draining it.
    pub fn peek_response(&self) -> Option<&Response> {
        self.slot.peek()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    fn handle_board(&mut self) {
        self.slot.set(Response::Board(self.board.render()));
    }

    fn handle_reset(&mut self, color: Color) {
        self.board.reset();
        self.session.start(color);
        self.slot.set(Response::Ok);
    }

    fn handle_dropc(&mut self, column: Column) {
        match self.session.turn_state() {
            TurnState::NoGame => {
                warn!(?column, "drop with no active game");
                self.slot.set(Response::NoGame);
            }
            TurnState::CpuTurn => {
                warn!(?column, "player drop out of turn");
                self.slot.set(Response::OutOfTurn);
            }
            TurnState::PlayerTurn => match self.resolve_drop(column, Side::Player) {
                DropOutcome::Continue => self.slot.set(Response::Ok),
                DropOutcome::Win => self.slot.set(Response::Win),
                DropOutcome::Tie => self.slot.set(Response::Tie),
                // Full column: no response, the player keeps the turn.
                DropOutcome::ColumnFull => warn!(?column, "player drop into full column"),
            },
        }
    }

    fn handle_cturn(&mut self) {
        match self.session.turn_state() {
            TurnState::NoGame => {
                warn!("computer turn with no active game");
                self.slot.set(Response::NoGame);
            }
            TurnState::PlayerTurn => {
                warn!("computer turn requested while player holds the turn");
                self.slot.set(Response::OutOfTurn);
            }
            TurnState::CpuTurn => {
                let column = self.selector.choose();
                match self.resolve_drop(column, Side::Cpu) {
                    DropOutcome::Continue => self.slot.set(Response::Ok),
                    DropOutcome::Win => self.slot.set(Response::Lose),
                    DropOutcome::Tie => self.slot.set(Response::Tie),
                    // One attempt only: a full draw wastes the turn with no
                    // response, and the computer still holds the turn.
                    DropOutcome::ColumnFull => warn!(?column, "computer drew a full column"),
                }
            }
        }
    }

    /// Drops for `side`, then settles win, tie, or turn passing.
    fn resolve_drop(&mut self, column: Column, side: Side) -> DropOutcome {
        let color = match side {
            Side::Player => self.session.player_color(),
            Side::Cpu => self.session.cpu_color(),
        };
        // Callers only resolve drops for an active game.
        let Some(color) = color else {
            return DropOutcome::ColumnFull;
        };
        if !self.board.drop_piece(column, color) {
            return DropOutcome::ColumnFull;
        }
        if check_win(&self.board, color) {
            info!(?side, ?color, "four in a row");
            self.session.finish();
            DropOutcome::Win
        } else if check_tie(&self.board) {
            info!("board full with no winner");
            self.session.finish();
            DropOutcome::Tie
        } else {
            self.session.pass_turn();
            DropOutcome::Continue
        }
    }

    fn reject(&mut self, error: ParseError) {
        // Deliberate silent path: diagnostics only, no response set.
        warn!(%error, "command rejected");
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}
