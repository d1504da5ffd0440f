//! The lemonade state machine.
//!
//! One input, the tap, and four steps. Only picking a lemon consumes
//! randomness: the new lemon's squeeze target.

use super::{RandomSqueeze, SessionState, SqueezeProgress, SqueezeSource, Step};
use tracing::{debug, instrument};

#[cfg(debug_assertions)]
use super::{InvariantSet, LemonadeInvariants};

/// Translates taps into session states.
///
/// The machine holds no session state of its own, only the source of
/// squeeze targets. `advance` is total over every `SessionState`.
#[derive(Debug, Clone, Default)]
pub struct LemonadeStateMachine<S = RandomSqueeze> {
    squeeze: S,
}

impl<S: SqueezeSource> LemonadeStateMachine<S> {
    /// Creates a machine drawing squeeze targets from `squeeze`.
    pub fn new(squeeze: S) -> Self {
        Self { squeeze }
    }

    /// Produces the state of a freshly created screen.
    ///
    /// Draws a target so the progress is well-formed, even though it is
    /// redrawn when the first lemon is picked.
    #[instrument(skip(self))]
    pub fn initialize(&mut self) -> SessionState {
        let state = SessionState::new(
            Step::SelectLemon,
            SqueezeProgress::fresh(self.squeeze.draw_target()),
        );
        debug!(squeeze_target = state.progress().target(), "Session initialized");
        state
    }

    /// Applies one tap.
    ///
    /// | from        | condition            | to          |
    /// |-------------|----------------------|-------------|
    /// | SelectLemon |                      | Squeeze (count 0, new target) |
    /// | Squeeze     | `count + 1 < target` | Squeeze (count + 1) |
    /// | Squeeze     | `count + 1 >= target`| Drink (count + 1) |
    /// | Drink       |                      | EmptyGlass  |
    /// | EmptyGlass  |                      | SelectLemon |
    #[instrument(skip(self), fields(step = %state.step(), progress = %state.progress()))]
    pub fn advance(&mut self, state: SessionState) -> SessionState {
        let next = match state.step() {
            Step::SelectLemon => SessionState::new(
                Step::Squeeze,
                SqueezeProgress::fresh(self.squeeze.draw_target()),
            ),
            Step::Squeeze => {
                let progress = state.progress().squeezed();
                let step = if progress.is_complete() {
                    Step::Drink
                } else {
                    Step::Squeeze
                };
                SessionState::new(step, progress)
            }
            Step::Drink | Step::EmptyGlass => {
                SessionState::new(state.step().successor(), state.progress())
            }
        };

        debug!(
            from = %state.step(),
            to = %next.step(),
            count = next.progress().count(),
            squeeze_target = next.progress().target(),
            "Advanced"
        );

        #[cfg(debug_assertions)]
        if let Err(violations) = LemonadeInvariants::check_all(&next) {
            tracing::warn!(?violations, "Invariant violation after advance");
        }

        next
    }

    /// Returns the squeeze source.
    pub fn squeeze_source(&self) -> &S {
        &self.squeeze
    }
}
