//! Tests for projecting session state onto display keys.

use lemonade_core::{
    AccessibilityDescriptionKey, ImageKey, InstructionTextKey, Session, SessionState,
    SqueezeProgress, Step, ViewModel, resources,
};

#[test]
fn test_projection_follows_step() {
    let progress = SqueezeProgress::new(1, 3);
    let view = ViewModel::project(&SessionState::new(Step::Drink, progress));
    assert_eq!(view.step, Step::Drink);
    assert_eq!(view.image, ImageKey::LemonDrink);
    assert_eq!(view.instruction, InstructionTextKey::LemonadeDrink);
    assert_eq!(
        view.description,
        AccessibilityDescriptionKey::GlassOfLemonadeContentDescription
    );
    assert_eq!(view.squeeze_readout, None);
}

#[test]
fn test_readout_only_while_squeezing() {
    let progress = SqueezeProgress::new(1, 3);
    for step in Step::ALL {
        let view = ViewModel::from(&SessionState::new(step, progress));
        assert_eq!(view.squeeze_readout.is_some(), step == Step::Squeeze);
        assert_eq!(view.image, resources(step).image);
    }
}

#[test]
fn test_session_view_tracks_taps() {
    let mut session = Session::default();
    assert_eq!(session.view().image, ImageKey::LemonTree);

    session.tap();
    let view = session.view();
    assert_eq!(view.image, ImageKey::LemonSqueeze);
    assert_eq!(view.squeeze_readout.map(|p| p.count()), Some(0));
}
