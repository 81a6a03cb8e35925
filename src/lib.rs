//! Four in a Row - a connect-four style game engine behind a text channel.
//!
//! One human plays one computer opponent on an 8x8 board; four contiguous
//! same-colored pieces in any direction win. The whole game is driven
//! through a duplex byte channel: short text commands go in, literal text
//! replies come back out.
//!
//! # Architecture
//!
//! - **Board**: 8x8 grid with gravity drops and a fixed-format snapshot
//! - **Rules**: win and tie detection
//! - **Session**: turn arbitration and color assignment
//! - **Dispatcher**: command routing onto the single global game
//! - **Channel**: write/read byte surface with a single-slot reply mailbox
//!
//! # Example
//!
//! ```
//! use fourinarow::GameChannel;
//!
//! let channel = GameChannel::new();
//! channel.write(b"RESET R\n")?;
//! assert_eq!(channel.read_string(), Some("OK\n".to_string()));
//!
//! channel.write(b"DROPC D\n")?;
//! assert_eq!(channel.read_string(), Some("OK\n".to_string()));
//! # Ok::<(), fourinarow::ChannelError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod channel;
mod command;
mod dispatcher;
mod response;
mod rules;
mod selector;
mod session;

// Crate-level exports - board domain
pub use board::{Board, COLS, Cell, Color, Column, ROWS};

// Crate-level exports - rules
pub use rules::{check_tie, check_win};

// Crate-level exports - session state machine
pub use session::{GameSession, Side, TurnState};

// Crate-level exports - computer move selection
pub use selector::{ColumnSelector, RandomSelector};

// Crate-level exports - command grammar
pub use command::{Command, MAX_CMD_LEN, ParseError};

// Crate-level exports - responses
pub use response::{Response, ResponseSlot};

// Crate-level exports - dispatch and channel surface
pub use channel::{ChannelError, GameChannel};
pub use dispatcher::Dispatcher;
