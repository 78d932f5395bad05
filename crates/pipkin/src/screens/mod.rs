//! Screen lifecycle.
//!
//! Each screen implements [`Screen`]: `show` on entry, `update` and `draw`
//! every frame, `hide` on exit. Transitions requested during a frame are
//! queued on the [`ScreenManager`] and applied between frames.

pub mod creation;
pub mod main_game;
pub mod splash;

use rand::rngs::ThreadRng;

use pipkin_core::CareSession;

use crate::assets::{Assets, TextureStore};
use crate::config::GameConfig;
use crate::input::GestureFrame;
use crate::persist::{Catalog, Store};
use crate::ui::theme::GameColors;

/// Everything a screen can reach: configuration, persistence, assets, the
/// live care session, and the RNG driving sickness rolls.
pub struct GameContext {
    pub config: GameConfig,
    pub store: Store,
    pub catalog: Catalog,
    pub assets: Assets,
    pub textures: TextureStore,
    pub colors: GameColors,
    pub session: Option<CareSession>,
    pub rng: ThreadRng,
}

/// A requested screen change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    CreatureCreation,
    MainGame,
}

pub trait Screen {
    /// Called once when the screen becomes active.
    fn show(&mut self, _ctx: &mut GameContext) {}

    /// Advance screen logic by `dt` seconds.
    fn update(
        &mut self,
        dt: f32,
        gestures: &GestureFrame,
        ctx: &mut GameContext,
    ) -> Option<Transition>;

    /// Build this frame's UI.
    fn draw(&mut self, egui_ctx: &egui::Context, ctx: &mut GameContext) -> Option<Transition>;

    /// Called once when the screen is replaced.
    fn hide(&mut self, _ctx: &mut GameContext) {}
}

/// Owns the active screen and the pending transition.
pub struct ScreenManager {
    current: Box<dyn Screen>,
    pending: Option<Transition>,
}

impl ScreenManager {
    /// Start on the splash screen.
    pub fn new(ctx: &mut GameContext) -> Self {
        let mut current: Box<dyn Screen> = Box::new(splash::SplashScreen::new(
            ctx.config.stage.splash_duration_secs,
        ));
        current.show(ctx);
        ScreenManager {
            current,
            pending: None,
        }
    }

    /// Apply a queued transition, if any: hide the old screen, build and
    /// show the new one.
    pub fn apply_pending(&mut self, ctx: &mut GameContext) {
        let Some(transition) = self.pending.take() else {
            return;
        };
        log::info!("Screen transition: {:?}", transition);
        self.current.hide(ctx);
        let mut next: Box<dyn Screen> = match transition {
            Transition::CreatureCreation => Box::new(creation::CreationScreen::new()),
            Transition::MainGame => Box::new(main_game::MainGameScreen::new(
                ctx.config.care.autosave_interval_secs,
            )),
        };
        next.show(ctx);
        self.current = next;
    }

    pub fn update(&mut self, dt: f32, gestures: &GestureFrame, ctx: &mut GameContext) {
        if let Some(transition) = self.current.update(dt, gestures, ctx) {
            self.pending = Some(transition);
        }
    }

    pub fn draw(&mut self, egui_ctx: &egui::Context, ctx: &mut GameContext) {
        if let Some(transition) = self.current.draw(egui_ctx, ctx) {
            self.pending = Some(transition);
        }
    }
}
