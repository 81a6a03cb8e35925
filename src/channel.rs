//! Duplex byte channel over the dispatcher.
//!
//! This is the surface the host wires to its endpoint: commands come in as
//! raw bytes through [`GameChannel::write`], replies drain out through
//! [`GameChannel::read`]. One mutex guards the whole board/session/slot
//! aggregate, so concurrent callers always observe a consistent prior
//! state and command ordering follows lock acquisition order.

use crate::command::MAX_CMD_LEN;
use crate::dispatcher::Dispatcher;
use derive_more::{Display, Error};
use std::sync::{Arc, Mutex};
use tracing::{instrument, warn};

/// Transport faults surfaced by [`GameChannel::write`] and
/// [`GameChannel::read`].
///
/// Semantic errors (unknown commands, out-of-turn drops, and so on) never
/// appear here; they come back as protocol replies or as silent empty
/// reads.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ChannelError {
    /// Write rejected before parsing: input exceeds the command length cap.
    #[display("command too long: {len} bytes (max {MAX_CMD_LEN})")]
    TooLong {
        /// Length of the rejected input.
        len: usize,
    },
    /// The caller's buffer cannot hold the pending reply.
    #[display("copy fault: response needs {needed} bytes, buffer holds {capacity}")]
    CopyFault {
        /// Bytes the rendered reply requires.
        needed: usize,
        /// Bytes available in the caller's buffer.
        capacity: usize,
    },
}

/// The command/response channel: a shared handle to the single global
/// game.
///
/// Handles are cheap to clone; all clones address the same board, session,
/// and pending-response slot.
#[derive(Clone)]
pub struct GameChannel {
    inner: Arc<Mutex<Dispatcher>>,
}

impl GameChannel {
    /// Creates a channel around a fresh dispatcher.
    pub fn new() -> Self {
        Self::with_dispatcher(Dispatcher::new())
    }

    /// Creates a channel around the given dispatcher.
    pub fn with_dispatcher(dispatcher: Dispatcher) -> Self {
        Self {
            inner: Arc::new(Mutex::new(dispatcher)),
        }
    }

    /// Accepts one command as bytes and returns the number consumed.
    ///
    /// Oversized input is the only write fault. Everything else, including
    /// bytes that are not valid UTF-8 or match no command, is consumed and
    /// handled on the silent-failure path: logged, no response set.
    #[instrument(skip(self, bytes), fields(len = bytes.len()))]
    pub fn write(&self, bytes: &[u8]) -> Result<usize, ChannelError> {
        if bytes.len() > MAX_CMD_LEN {
            warn!(len = bytes.len(), "command too long");
            return Err(ChannelError::TooLong { len: bytes.len() });
        }
        let mut dispatcher = self.lock();
        match std::str::from_utf8(bytes) {
            Ok(line) => dispatcher.dispatch(line),
            Err(error) => warn!(%error, "command is not valid UTF-8"),
        }
        Ok(bytes.len())
    }

    /// Drains the pending reply into `buf`, returning the bytes produced.
    ///
    /// Returns 0 when nothing is pending. When `buf` is too small the
    /// reply stays pending and a [`ChannelError::CopyFault`] is returned,
    /// so a later read with enough room still gets it.
    #[instrument(skip(self, buf), fields(capacity = buf.len()))]
    pub fn read(&self, buf: &mut [u8]) -> Result<usize, ChannelError> {
        let mut dispatcher = self.lock();
        let Some(response) = dispatcher.peek_response() else {
            return Ok(0);
        };
        let text = response.render();
        let needed = text.len();
        if needed > buf.len() {
            warn!(needed, capacity = buf.len(), "reply does not fit caller buffer");
            return Err(ChannelError::CopyFault {
                needed,
                capacity: buf.len(),
            });
        }
        buf[..needed].copy_from_slice(text.as_bytes());
        dispatcher.take_response();
        Ok(needed)
    }

    /// Drains the pending reply as an owned string, for hosts that do not
    /// manage their own buffers. Returns `None` when nothing is pending.
    pub fn read_string(&self) -> Option<String> {
        self.lock().take_response().map(|response| response.render())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Dispatcher> {
        // Dispatch never panics while holding the lock; recover the guard
        // anyway rather than poisoning the whole game.
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl Default for GameChannel {
    fn default() -> Self {
        Self::new()
    }
}
