//! Splash screen shown at startup. After the configured duration it hands
//! off to the main game when a living creature can be resumed, otherwise
//! to creature creation.

use egui::{Align2, Vec2};

use super::{GameContext, Screen, Transition};
use crate::input::GestureFrame;

/// Pure timer so the handoff logic is testable without a window.
#[derive(Debug, Clone)]
pub struct SplashTimer {
    elapsed: f32,
    duration: f32,
}

impl SplashTimer {
    pub fn new(duration: f32) -> Self {
        SplashTimer {
            elapsed: 0.0,
            duration,
        }
    }

    /// Advance the timer; true once the splash has run its course.
    pub fn tick(&mut self, dt: f32) -> bool {
        // delta is the time since the last update; summed it is the time
        // since the screen appeared
        if self.elapsed < self.duration {
            self.elapsed += dt;
        }
        self.elapsed >= self.duration
    }
}

pub struct SplashScreen {
    timer: SplashTimer,
}

impl SplashScreen {
    pub fn new(duration: f32) -> Self {
        SplashScreen {
            timer: SplashTimer::new(duration),
        }
    }
}

impl Screen for SplashScreen {
    fn update(
        &mut self,
        dt: f32,
        _gestures: &GestureFrame,
        ctx: &mut GameContext,
    ) -> Option<Transition> {
        if !self.timer.tick(dt) {
            return None;
        }

        // Resume the last living creature if there is one.
        match ctx.store.resume_session() {
            Ok(Some(session)) => {
                ctx.session = Some(session);
                Some(Transition::MainGame)
            }
            Ok(None) => Some(Transition::CreatureCreation),
            Err(e) => {
                log::error!("Failed to resume creature: {e:#}");
                Some(Transition::CreatureCreation)
            }
        }
    }

    fn draw(&mut self, egui_ctx: &egui::Context, ctx: &mut GameContext) -> Option<Transition> {
        let logo = ctx.textures.get(egui_ctx, &ctx.assets, "sprites.logo");
        let logo_size = logo.size_vec2();

        egui::Area::new("splash_logo".into())
            .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
            .show(egui_ctx, |ui| {
                ui.add(egui::Image::new(&logo).fit_to_exact_size(logo_size * 2.0));
            });
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_fires_after_duration() {
        let mut timer = SplashTimer::new(3.0);
        assert!(!timer.tick(1.0));
        assert!(!timer.tick(1.5));
        assert!(timer.tick(0.6));
        // Stays fired.
        assert!(timer.tick(0.1));
    }

    #[test]
    fn test_zero_duration_fires_immediately() {
        let mut timer = SplashTimer::new(0.0);
        assert!(timer.tick(0.0));
    }
}
