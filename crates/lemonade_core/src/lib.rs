//! Lemonade core - the four-step lemonade state machine.
//!
//! The whole application state is a [`SessionState`]: the current [`Step`]
//! and the [`SqueezeProgress`] gate that decides when squeezing is done.
//! A single input, the tap, drives every transition.
//!
//! # Architecture
//!
//! - **Machine**: [`LemonadeStateMachine`] maps a state to its successor
//! - **Session**: [`Session`] owns one state and applies taps in place
//! - **View**: [`ViewModel`] projects a state onto opaque resource keys
//! - **Invariants**: checkable properties of a [`SessionState`]
//!
//! # Example
//!
//! ```
//! use lemonade_core::{LemonadeStateMachine, RandomSqueeze, Session, Step};
//!
//! let mut session = Session::new(LemonadeStateMachine::new(RandomSqueeze::seeded(7)));
//! assert_eq!(session.state().step(), Step::SelectLemon);
//!
//! session.tap();
//! assert_eq!(session.state().step(), Step::Squeeze);
//! assert_eq!(session.state().progress().count(), 0);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod invariants;
mod machine;
mod progress;
mod session;
mod squeeze;
mod step;
mod view;

pub use invariants::{
    Invariant, InvariantSet, InvariantViolation, LemonadeInvariants, SqueezeCountBelowTarget,
    SqueezeTargetInRange,
};
pub use machine::LemonadeStateMachine;
pub use progress::{SessionState, SqueezeProgress};
pub use session::Session;
pub use squeeze::{RandomSqueeze, SQUEEZE_TARGET_RANGE, SqueezeSource};
pub use step::Step;
pub use view::{
    AccessibilityDescriptionKey, ImageKey, InstructionTextKey, StepResources, ViewModel,
    description_key, image_key, instruction_key, resources,
};
