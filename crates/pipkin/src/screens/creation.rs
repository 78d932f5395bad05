//! Creature creation screen: a swipeable carousel of candidate pets, then
//! a name-and-gender form for the chosen one.

use egui::{Align2, Color32, RichText, Vec2};

use pipkin_core::model::Gender;

use super::{GameContext, Screen, Transition};
use crate::input::GestureFrame;

/// Sprite ids of the selectable pets.
const CANDIDATES: [&str; 5] = [
    "sprites.pet_mint",
    "sprites.pet_peach",
    "sprites.pet_sky",
    "sprites.pet_lilac",
    "sprites.pet_sun",
];

const PET_SIZE: f32 = 96.0;
const PET_SPACING: f32 = PET_SIZE * 1.25;

/// Horizontal padding that defines the flat center band of the carousel.
const MARK_PADDING: f32 = 250.0;

/// How fast off-center pets drift upward, per pixel off the band.
const SLOPE: f32 = 0.8;

/// How quickly a fling loses momentum.
const FLING_DAMPING: f32 = 4.0;

/// Vertical position for a pet at horizontal position `x`. Pets inside the
/// marked center band sit on the midline; outside it they drift upward
/// with the configured slope.
pub fn y_for_x(x: f32, left_mark: f32, right_mark: f32, center_y: f32) -> f32 {
    if x <= left_mark {
        center_y - SLOPE * (left_mark - x)
    } else if x >= right_mark {
        center_y - SLOPE * (x - right_mark)
    } else {
        center_y
    }
}

pub struct CreationScreen {
    /// Carousel scroll offset in pixels.
    offset: f32,
    /// Remaining fling velocity in px/s.
    velocity: f32,
    selected: Option<usize>,
    name_input: String,
    gender: Gender,
}

impl CreationScreen {
    pub fn new() -> Self {
        CreationScreen {
            offset: 0.0,
            velocity: 0.0,
            selected: None,
            name_input: String::new(),
            gender: Gender::Female,
        }
    }

    fn confirm(&mut self, ctx: &mut GameContext) -> Option<Transition> {
        let name = self.name_input.trim();
        if name.is_empty() {
            return None;
        }
        let kind = ctx.catalog.kinds.first()?.clone();
        let raise_type = ctx.catalog.raise_types.first()?.clone();

        match ctx
            .store
            .create_creature(kind, raise_type, name.to_string(), self.gender)
        {
            Ok(session) => {
                ctx.session = Some(session);
                Some(Transition::MainGame)
            }
            Err(e) => {
                log::error!("Failed to create creature: {e:#}");
                None
            }
        }
    }
}

impl Default for CreationScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for CreationScreen {
    fn show(&mut self, _ctx: &mut GameContext) {
        log::debug!("Creature creation: {} candidates", CANDIDATES.len());
    }

    fn update(
        &mut self,
        dt: f32,
        gestures: &GestureFrame,
        _ctx: &mut GameContext,
    ) -> Option<Transition> {
        // Pan follows the pointer directly; a release keeps the row coasting.
        if gestures.pressed {
            self.offset += gestures.drag_delta.0;
            self.velocity = 0.0;
        }
        if gestures.released {
            self.velocity = gestures.fling_x;
        }
        if self.velocity.abs() > 1.0 {
            self.offset += self.velocity * dt;
            self.velocity *= (1.0 - FLING_DAMPING * dt).max(0.0);
        } else {
            self.velocity = 0.0;
        }
        None
    }

    fn draw(&mut self, egui_ctx: &egui::Context, ctx: &mut GameContext) -> Option<Transition> {
        let screen = egui_ctx.content_rect();
        let center_x = screen.center().x;
        let center_y = screen.center().y - 40.0;
        let left_mark = MARK_PADDING - PET_SIZE / 2.0;
        let right_mark = screen.width() - MARK_PADDING - PET_SIZE / 2.0;

        // Carousel
        for (i, sprite_id) in CANDIDATES.iter().enumerate() {
            let texture = ctx.textures.get(egui_ctx, &ctx.assets, sprite_id);
            let x = center_x - PET_SIZE / 2.0 + self.offset + i as f32 * PET_SPACING;
            let y = y_for_x(x, left_mark, right_mark, center_y);

            let response = egui::Area::new(egui::Id::new(("candidate", i)))
                .fixed_pos(egui::pos2(x, y))
                .show(egui_ctx, |ui| {
                    ui.add(
                        egui::Button::image(
                            egui::Image::new(&texture).fit_to_exact_size(Vec2::splat(PET_SIZE)),
                        )
                        .sense(egui::Sense::click_and_drag()),
                    )
                });
            let response = response.inner;
            if response.clicked() {
                log::debug!("Hit on candidate {i} detected");
                self.selected = Some(i);
            }
            // Swipes that start on a pet still pan the carousel.
            if response.dragged() {
                self.offset += response.drag_delta().x;
            }
        }

        // Headline text
        egui::Area::new("creation_text".into())
            .anchor(Align2::CENTER_TOP, Vec2::new(0.0, 24.0))
            .show(egui_ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new("Choose a pet")
                            .size(40.0)
                            .color(ctx.colors.text),
                    );
                    ui.label(
                        RichText::new("Swipe either left or right to select a pet")
                            .size(18.0)
                            .color(ctx.colors.text),
                    );
                });
            });

        // Naming form, once a pet was tapped
        let mut transition = None;
        if let Some(selected) = self.selected {
            egui::Window::new("name_your_pet")
                .title_bar(false)
                .resizable(false)
                .anchor(Align2::CENTER_BOTTOM, Vec2::new(0.0, -24.0))
                .show(egui_ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.label(RichText::new(format!("Pet #{}", selected + 1)).size(20.0));
                        ui.add_space(6.0);
                        ui.add(
                            egui::TextEdit::singleline(&mut self.name_input)
                                .hint_text("Name your pet"),
                        );
                        ui.add_space(6.0);
                        ui.horizontal(|ui| {
                            ui.selectable_value(&mut self.gender, Gender::Female, "Girl");
                            ui.selectable_value(&mut self.gender, Gender::Male, "Boy");
                        });
                        ui.add_space(6.0);
                        let ready = !self.name_input.trim().is_empty();
                        let button = egui::Button::new(RichText::new("Start caring").size(16.0))
                            .min_size(Vec2::new(160.0, 32.0));
                        if ui.add_enabled(ready, button).clicked() {
                            transition = self.confirm(ctx);
                        }
                        if !ready {
                            ui.label(
                                RichText::new("Pick a name first")
                                    .size(12.0)
                                    .color(Color32::GRAY),
                            );
                        }
                    });
                });
        }
        transition
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_band_is_flat() {
        let y = y_for_x(400.0, 200.0, 600.0, 240.0);
        assert_eq!(y, 240.0);
    }

    #[test]
    fn test_pets_rise_outside_the_band() {
        let center_y = 240.0;
        let left = y_for_x(100.0, 200.0, 600.0, center_y);
        assert_eq!(left, center_y - SLOPE * 100.0);

        let right = y_for_x(700.0, 200.0, 600.0, center_y);
        assert_eq!(right, center_y - SLOPE * 100.0);

        // Further out is higher up.
        assert!(y_for_x(50.0, 200.0, 600.0, center_y) < left);
    }
}
