//! Command inbox.
//!
//! Commands are produced by:
//! - Scenario script fires (scripted mode changes)
//! - Host wiring (crew actions from a UI or feed consumer)
//!
//! Commands are consumed by the simulation loop, which drains the
//! inbox before each tick so every command lands on a tick boundary.
//!
//! ```text
//! ┌──────────────┐     ┌────────────────┐     ┌────────────────┐
//! │ Scenario     │────▶│                │     │                │
//! │ Host / UI    │────▶│  CommandInbox  │────▶│  Simulation    │
//! │              │     │ (bounded FIFO) │     │ loop (consumer)│
//! └──────────────┘     └────────────────┘     └────────────────┘
//! ```

use heapless::Deque;
use log::warn;

use crate::app::commands::SimCommand;

/// Maximum number of pending commands.
pub const INBOX_CAP: usize = 32;

/// Bounded FIFO between command producers and the simulation loop.
pub struct CommandInbox {
    queue: Deque<SimCommand, INBOX_CAP>,
}

impl CommandInbox {
    pub fn new() -> Self {
        Self {
            queue: Deque::new(),
        }
    }

    /// Push a command.
    /// Returns `false` if the inbox is full (command dropped).
    pub fn push(&mut self, command: SimCommand) -> bool {
        match self.queue.push_back(command) {
            Ok(()) => true,
            Err(dropped) => {
                warn!("command inbox full, dropping {dropped:?}");
                false
            }
        }
    }

    /// Drain all pending commands into a callback.
    /// Processes commands in FIFO order.
    pub fn drain(&mut self, mut handler: impl FnMut(SimCommand)) {
        while let Some(command) = self.queue.pop_front() {
            handler(command);
        }
    }

    /// Check if the inbox is empty.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Number of pending commands.
    pub fn len(&self) -> usize {
        self.queue.len()
    }
}

impl Default for CommandInbox {
    fn default() -> Self {
        Self::new()
    }
}
