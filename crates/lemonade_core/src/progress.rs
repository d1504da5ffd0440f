//! Session state: the current step and the squeeze gate.

use super::Step;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// Squeezes performed versus squeezes required.
///
/// `count` only means something while the step is [`Step::Squeeze`]. After
/// leaving Squeeze it holds a stale value until the next lemon is picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct SqueezeProgress {
    count: u32,
    target: u32,
}

impl SqueezeProgress {
    /// Fresh progress for a newly picked lemon.
    pub fn fresh(target: u32) -> Self {
        Self { count: 0, target }
    }

    /// Squeezes performed in the current Squeeze stage.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Squeezes required to leave the Squeeze stage.
    pub fn target(&self) -> u32 {
        self.target
    }

    /// Progress after one more squeeze.
    pub(crate) fn squeezed(self) -> Self {
        Self {
            count: self.count.saturating_add(1),
            target: self.target,
        }
    }

    /// True once enough squeezes have been made.
    pub fn is_complete(&self) -> bool {
        self.count >= self.target
    }
}

impl std::fmt::Display for SqueezeProgress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.count, self.target)
    }
}

/// The entire mutable state of a lemonade session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct SessionState {
    step: Step,
    progress: SqueezeProgress,
}

impl SessionState {
    /// The active step.
    pub fn step(&self) -> Step {
        self.step
    }

    /// The squeeze gate.
    pub fn progress(&self) -> SqueezeProgress {
        self.progress
    }

    /// Squeeze progress if currently squeezing.
    ///
    /// This is what a renderer should show as a readout; outside Squeeze
    /// the counter is stale.
    pub fn squeeze_readout(&self) -> Option<SqueezeProgress> {
        (self.step == Step::Squeeze).then_some(self.progress)
    }
}
