//! View projection: which resources each step displays.
//!
//! The keys are opaque to the core. A renderer resolves them by their
//! snake_case resource name (`ImageKey::LemonTree` is `"lemon_tree"`).

use super::{SessionState, SqueezeProgress, Step};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Image shown for a step.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::IntoStaticStr,
    strum::Display,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ImageKey {
    /// A lemon tree.
    LemonTree,
    /// A lemon being squeezed.
    LemonSqueeze,
    /// A full glass of lemonade.
    LemonDrink,
    /// An empty glass.
    LemonRestart,
}

/// Instruction text shown under the image.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::IntoStaticStr,
    strum::Display,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum InstructionTextKey {
    /// Tap the tree to pick a lemon.
    LemonadeSelect,
    /// Keep tapping to squeeze.
    LemonadeSqueeze,
    /// Tap to drink.
    LemonadeDrink,
    /// Tap the empty glass to start again.
    EmptyGlassRestart,
}

/// Accessibility description of the image.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::IntoStaticStr,
    strum::Display,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum AccessibilityDescriptionKey {
    /// Describes the lemon tree.
    LemonTreeContentDescription,
    /// Describes the lemon.
    LemonContentDescription,
    /// Describes the glass of lemonade.
    GlassOfLemonadeContentDescription,
    /// Describes the empty glass.
    EmptyGlassContentDescription,
}

/// The three resource keys displayed for one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StepResources {
    /// Image key.
    pub image: ImageKey,
    /// Instruction text key.
    pub instruction: InstructionTextKey,
    /// Accessibility description key.
    pub description: AccessibilityDescriptionKey,
}

/// Resources per step, indexed by [`Step::index`].
const RESOURCE_TABLE: [StepResources; 4] = [
    StepResources {
        image: ImageKey::LemonTree,
        instruction: InstructionTextKey::LemonadeSelect,
        description: AccessibilityDescriptionKey::LemonTreeContentDescription,
    },
    StepResources {
        image: ImageKey::LemonSqueeze,
        instruction: InstructionTextKey::LemonadeSqueeze,
        description: AccessibilityDescriptionKey::LemonContentDescription,
    },
    StepResources {
        image: ImageKey::LemonDrink,
        instruction: InstructionTextKey::LemonadeDrink,
        description: AccessibilityDescriptionKey::GlassOfLemonadeContentDescription,
    },
    StepResources {
        image: ImageKey::LemonRestart,
        instruction: InstructionTextKey::EmptyGlassRestart,
        description: AccessibilityDescriptionKey::EmptyGlassContentDescription,
    },
];

/// All resource keys for a step.
pub fn resources(step: Step) -> StepResources {
    RESOURCE_TABLE[step.index()]
}

/// Image key for a step.
pub fn image_key(step: Step) -> ImageKey {
    resources(step).image
}

/// Instruction text key for a step.
pub fn instruction_key(step: Step) -> InstructionTextKey {
    resources(step).instruction
}

/// Accessibility description key for a step.
pub fn description_key(step: Step) -> AccessibilityDescriptionKey {
    resources(step).description
}

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewModel {
    /// Current step.
    pub step: Step,
    /// Image to show.
    pub image: ImageKey,
    /// Instruction text to show.
    pub instruction: InstructionTextKey,
    /// Accessibility text for the image.
    pub description: AccessibilityDescriptionKey,
    /// `count/target` readout, present only while squeezing.
    pub squeeze_readout: Option<SqueezeProgress>,
}

impl ViewModel {
    /// Projects a session state onto display keys.
    #[instrument]
    pub fn project(state: &SessionState) -> Self {
        let StepResources {
            image,
            instruction,
            description,
        } = resources(state.step());
        Self {
            step: state.step(),
            image,
            instruction,
            description,
            squeeze_readout: state.squeeze_readout(),
        }
    }
}

impl From<&SessionState> for ViewModel {
    fn from(state: &SessionState) -> Self {
        Self::project(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use strum::IntoEnumIterator;

    #[test]
    fn test_each_key_kind_is_one_to_one() {
        let images: HashSet<_> = Step::iter().map(image_key).collect();
        let texts: HashSet<_> = Step::iter().map(instruction_key).collect();
        let descriptions: HashSet<_> = Step::iter().map(description_key).collect();
        assert_eq!(images.len(), 4);
        assert_eq!(texts.len(), 4);
        assert_eq!(descriptions.len(), 4);
        assert_eq!(images, ImageKey::iter().collect());
        assert_eq!(texts, InstructionTextKey::iter().collect());
        assert_eq!(descriptions, AccessibilityDescriptionKey::iter().collect());
    }

    #[test]
    fn test_resource_names() {
        assert_eq!(image_key(Step::SelectLemon).to_string(), "lemon_tree");
        assert_eq!(
            <&'static str>::from(instruction_key(Step::EmptyGlass)),
            "empty_glass_restart"
        );
        assert_eq!(
            description_key(Step::Drink).to_string(),
            "glass_of_lemonade_content_description"
        );
    }

    #[test]
    fn test_table_matches_steps() {
        assert_eq!(image_key(Step::SelectLemon), ImageKey::LemonTree);
        assert_eq!(image_key(Step::Squeeze), ImageKey::LemonSqueeze);
        assert_eq!(image_key(Step::Drink), ImageKey::LemonDrink);
        assert_eq!(image_key(Step::EmptyGlass), ImageKey::LemonRestart);
    }
}
