//! Record store: canonical employee list plus view parameters.

mod command;
mod reducer;
mod state;

pub use command::*;
pub use reducer::*;
pub use state::*;

use tracing::debug;

/// Owns a [`DirectoryState`] and advances it one command at a time.
#[derive(Debug, Clone, Default)]
pub struct DirectoryStore {
    state: DirectoryState,
}

impl DirectoryStore {
    pub fn new(state: DirectoryState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &DirectoryState {
        &self.state
    }

    pub fn dispatch(&mut self, command: Command) -> Outcome {
        let kind = command.kind();
        let (next, outcome) = apply_with_outcome(std::mem::take(&mut self.state), command);
        self.state = next;
        debug!(command = kind, employee_count = self.state.len(), "Command applied");
        outcome
    }
}
