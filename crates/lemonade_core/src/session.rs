//! A single screen's worth of lemonade state.

use super::{LemonadeStateMachine, RandomSqueeze, SessionState, SqueezeSource, ViewModel};
use tracing::{info, instrument};

/// Owns one [`SessionState`] and the machine that advances it.
///
/// The renderer borrows the state (or its [`ViewModel`]) after every tap.
/// Dropping the session discards all progress.
#[derive(Debug, Clone)]
pub struct Session<S = RandomSqueeze> {
    machine: LemonadeStateMachine<S>,
    state: SessionState,
    taps: u64,
}

impl<S: SqueezeSource> Session<S> {
    /// Creates a session in its initial state.
    #[instrument(skip(machine))]
    pub fn new(mut machine: LemonadeStateMachine<S>) -> Self {
        let state = machine.initialize();
        Self {
            machine,
            state,
            taps: 0,
        }
    }

    /// Handles one tap and returns the new state.
    #[instrument(skip(self), fields(taps = self.taps))]
    pub fn tap(&mut self) -> &SessionState {
        self.state = self.machine.advance(self.state);
        self.taps += 1;
        &self.state
    }

    /// Re-initializes as if the screen were recreated.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!(taps = self.taps, "Resetting session");
        self.state = self.machine.initialize();
        self.taps = 0;
    }

    /// The current state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// The current state projected for rendering.
    pub fn view(&self) -> ViewModel {
        ViewModel::project(&self.state)
    }

    /// Taps handled since the session was created or reset.
    pub fn taps(&self) -> u64 {
        self.taps
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(LemonadeStateMachine::default())
    }
}
