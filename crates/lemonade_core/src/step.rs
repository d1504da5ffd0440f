//! The four steps of the lemonade cycle.

use serde::{Deserialize, Serialize};

/// A stage of the lemonade cycle.
///
/// Steps form a ring: `SelectLemon → Squeeze → Drink → EmptyGlass → SelectLemon`.
/// There is no terminal step.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::Display,
)]
pub enum Step {
    /// Pick a lemon from the tree.
    #[default]
    SelectLemon,
    /// Squeeze the lemon until the squeeze target is reached.
    Squeeze,
    /// Drink the lemonade.
    Drink,
    /// Stare at the empty glass, then start over.
    EmptyGlass,
}

impl Step {
    /// All steps in cycle order.
    pub const ALL: [Step; 4] = [
        Step::SelectLemon,
        Step::Squeeze,
        Step::Drink,
        Step::EmptyGlass,
    ];

    /// Returns the step that follows this one in the cycle.
    ///
    /// This is the unconditional successor. `Squeeze` only moves on to
    /// `Drink` once its gate is satisfied; see
    /// [`LemonadeStateMachine::advance`](crate::LemonadeStateMachine::advance).
    pub fn successor(self) -> Self {
        match self {
            Step::SelectLemon => Step::Squeeze,
            Step::Squeeze => Step::Drink,
            Step::Drink => Step::EmptyGlass,
            Step::EmptyGlass => Step::SelectLemon,
        }
    }

    /// Position of this step in the cycle (0-3).
    pub fn index(self) -> usize {
        match self {
            Step::SelectLemon => 0,
            Step::Squeeze => 1,
            Step::Drink => 2,
            Step::EmptyGlass => 3,
        }
    }
}
