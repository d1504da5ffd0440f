//! Application state for the lemonade screen.

use crate::assets::{AssetCatalog, AssetError, RenderedView};
use lemonade_core::{LemonadeStateMachine, RandomSqueeze, Session};
use ratatui::layout::Rect;
use tracing::{debug, info, instrument};

use super::input::Action;

/// Main application state.
pub struct App {
    session: Session,
    catalog: AssetCatalog,
    show_readout: bool,
    image_area: Rect,
    quit: bool,
}

impl App {
    /// Creates the screen with a fresh session.
    #[instrument(skip(catalog))]
    pub fn new(seed: Option<u64>, catalog: AssetCatalog, show_readout: bool) -> Self {
        Self {
            session: Session::new(LemonadeStateMachine::new(RandomSqueeze::new(seed))),
            catalog,
            show_readout,
            image_area: Rect::default(),
            quit: false,
        }
    }

    /// Applies a user action.
    #[instrument(skip(self))]
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Tap => {
                let state = self.session.tap();
                debug!(step = %state.step(), progress = %state.progress(), "Tapped");
            }
            Action::Reset => self.session.reset(),
            Action::Quit => {
                info!(taps = self.session.taps(), "User quit");
                self.quit = true;
            }
        }
    }

    /// Resolves the current view against the catalog.
    pub fn rendered(&self) -> Result<RenderedView, AssetError> {
        let mut view = self.catalog.render(&self.session.view())?;
        if !self.show_readout {
            view.readout = None;
        }
        Ok(view)
    }

    /// The session being displayed.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Where the image was last drawn.
    pub fn image_area(&self) -> Rect {
        self.image_area
    }

    /// Records where the image was drawn, for mouse hit-testing.
    pub fn set_image_area(&mut self, area: Rect) {
        self.image_area = area;
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.quit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lemonade_core::Step;

    #[test]
    fn test_taps_walk_the_cycle() {
        let mut app = App::new(Some(3), AssetCatalog::builtin(), true);
        assert_eq!(app.session().state().step(), Step::SelectLemon);

        app.apply(Action::Tap);
        assert_eq!(app.session().state().step(), Step::Squeeze);
        let target = app.session().state().progress().target();
        let view = app.rendered().expect("render");
        assert_eq!(view.readout.as_deref(), Some(format!("Squeezes: 0/{target}").as_str()));

        for _ in 0..target {
            app.apply(Action::Tap);
        }
        assert_eq!(app.session().state().step(), Step::Drink);
        assert_eq!(app.rendered().expect("render").readout, None);
    }

    #[test]
    fn test_readout_can_be_hidden() {
        let mut app = App::new(None, AssetCatalog::builtin(), false);
        app.apply(Action::Tap);
        assert_eq!(app.session().state().step(), Step::Squeeze);
        assert_eq!(app.rendered().expect("render").readout, None);
    }

    #[test]
    fn test_reset_and_quit() {
        let mut app = App::new(None, AssetCatalog::builtin(), true);
        app.apply(Action::Tap);
        app.apply(Action::Reset);
        assert_eq!(app.session().state().step(), Step::SelectLemon);
        assert_eq!(app.session().taps(), 0);
        assert!(!app.should_quit());

        app.apply(Action::Quit);
        assert!(app.should_quit());
    }

    #[test]
    fn test_missing_asset_surfaces_in_renderer() {
        let app = App::new(None, AssetCatalog::default(), true);
        assert!(app.rendered().is_err());
    }
}
