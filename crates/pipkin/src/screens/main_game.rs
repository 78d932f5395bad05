//! Main game screen: the creature lives here.
//!
//! Care buttons sit in the top-right corner, a draggable tray drops down
//! from the top edge with secondary actions, stat gauges sit top-left, and
//! the creature itself sits center stage.

use egui::{Align2, Color32, CornerRadius, RichText, Vec2};

use rand::seq::SliceRandom;

use super::{GameContext, Screen, Transition};
use crate::input::GestureFrame;
use crate::ui;

/// Margin between the top-row care buttons.
const BUTTON_MARGIN: f32 = 10.0;
const BUTTON_SIZE: f32 = 48.0;

/// How far the tray must be dragged before it stays open.
const TRAY_OPEN_THRESHOLD: f32 = 60.0;
const TRAY_HEIGHT: f32 = 120.0;

pub struct MainGameScreen {
    autosave_interval: f32,
    since_autosave: f32,
    /// Current tray drop distance in pixels.
    tray_offset: f32,
    tray_dragging: bool,
    /// Set once the creature has no further stage, so the stage lookup
    /// stops running every frame.
    evolution_capped: bool,
}

impl MainGameScreen {
    pub fn new(autosave_interval_secs: u64) -> Self {
        MainGameScreen {
            autosave_interval: autosave_interval_secs as f32,
            since_autosave: 0.0,
            tray_offset: 0.0,
            tray_dragging: false,
            evolution_capped: false,
        }
    }

    fn save(&mut self, ctx: &mut GameContext) {
        if let Some(session) = &ctx.session {
            match ctx.store.save_session(session) {
                Ok(()) => log::debug!("Saved {}", session.creature.name),
                Err(e) => log::error!("Save failed: {e:#}"),
            }
        }
        self.since_autosave = 0.0;
    }

    /// Run one simulation step and react to its outcome.
    fn step_session(&mut self, dt: f32, ctx: &mut GameContext) {
        let Some(session) = ctx.session.as_mut() else {
            return;
        };
        if !session.is_alive() {
            return;
        }

        let outcome = session.tick(dt, &mut ctx.rng);

        if outcome.fell_sick {
            if let Some(sickness) = ctx.catalog.sicknesses.choose(&mut ctx.rng) {
                session.contract(sickness.clone());
            }
        }

        if session.evolution_due() && !self.evolution_capped {
            let type_id = session.creature.kind.id;
            let experience = session.experience as i64;
            match ctx.store.next_stage(type_id, experience) {
                Ok(Some(next)) => session.apply_evolution(next),
                Ok(None) => {
                    log::debug!("{} is fully evolved", session.creature.name);
                    self.evolution_capped = true;
                }
                Err(e) => log::error!("Evolution lookup failed: {e:#}"),
            }
        }

        if outcome.died {
            // Persist the death right away so a crash cannot resurrect it.
            self.save(ctx);
        }
    }

    fn draw_care_buttons(&mut self, egui_ctx: &egui::Context, ctx: &mut GameContext) {
        let Some(session) = ctx.session.as_mut() else {
            return;
        };
        if !session.is_alive() {
            return;
        }

        let buttons = [
            ("sprites.button_food", "food"),
            ("sprites.button_toilet", "toilet"),
            ("sprites.button_shower", "shower"),
            ("sprites.button_light", "light"),
        ];

        egui::Area::new("top_buttons".into())
            .anchor(Align2::RIGHT_TOP, Vec2::new(-BUTTON_MARGIN, BUTTON_MARGIN))
            .show(egui_ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.spacing_mut().item_spacing.x = BUTTON_MARGIN;
                    for (sprite_id, action) in buttons {
                        let texture = ctx.textures.get(egui_ctx, &ctx.assets, sprite_id);
                        let clicked = ui
                            .add(egui::Button::image(
                                egui::Image::new(&texture)
                                    .fit_to_exact_size(Vec2::splat(BUTTON_SIZE)),
                            ))
                            .clicked();
                        if clicked {
                            log::debug!("Touch on {action} button");
                            match action {
                                "food" => session.feed(),
                                "toilet" => session.toilet(),
                                "shower" => session.shower(),
                                "light" => session.toggle_light(),
                                _ => unreachable!(),
                            }
                        }
                    }
                });
            });
    }

    fn draw_tray(&mut self, egui_ctx: &egui::Context, ctx: &mut GameContext) {
        let screen = egui_ctx.content_rect();
        let open = self.tray_offset >= TRAY_OPEN_THRESHOLD;

        // Tray body slides down with the arrow.
        if self.tray_offset > 0.0 {
            let height = self.tray_offset.min(TRAY_HEIGHT);
            egui::Area::new("tray_body".into())
                .fixed_pos(egui::pos2(0.0, height - TRAY_HEIGHT))
                .show(egui_ctx, |ui| {
                    ui.set_width(screen.width());
                    egui::Frame::new()
                        .fill(Color32::from_black_alpha(160))
                        .corner_radius(CornerRadius::same(6))
                        .inner_margin(egui::Margin::same(10))
                        .show(ui, |ui| {
                            ui.set_min_height(TRAY_HEIGHT - 20.0);
                            if open {
                                self.draw_tray_contents(ui, ctx);
                            }
                        });
                });
        }

        // The drag handle itself.
        let arrow = ctx.textures.get(egui_ctx, &ctx.assets, "sprites.arrow");
        let arrow_y = self.tray_offset.min(TRAY_HEIGHT);
        let response = egui::Area::new("tray_arrow".into())
            .fixed_pos(egui::pos2(screen.center().x - 16.0, arrow_y))
            .show(egui_ctx, |ui| {
                ui.add(
                    egui::Image::new(&arrow)
                        .fit_to_exact_size(Vec2::new(32.0, 24.0))
                        .sense(egui::Sense::click_and_drag()),
                )
            });

        let response = response.inner;
        if response.dragged() {
            self.tray_dragging = true;
            self.tray_offset = (self.tray_offset + response.drag_delta().y)
                .clamp(0.0, TRAY_HEIGHT);
        } else if self.tray_dragging && response.drag_stopped() {
            self.tray_dragging = false;
            // Snap open or shut based on where the drag ended.
            self.tray_offset = if self.tray_offset >= TRAY_OPEN_THRESHOLD {
                TRAY_HEIGHT
            } else {
                0.0
            };
        } else if response.clicked() {
            self.tray_offset = if open { 0.0 } else { TRAY_HEIGHT };
        }
    }

    fn draw_tray_contents(&mut self, ui: &mut egui::Ui, ctx: &mut GameContext) {
        let Some(session) = ctx.session.as_mut() else {
            return;
        };
        if !session.is_alive() {
            return;
        }

        ui.horizontal(|ui| {
            ui.label(RichText::new("Medicine:").color(Color32::WHITE));
            for medicine in &ctx.catalog.medicines {
                if ui.button(&medicine.name).clicked() {
                    if session.give_medicine(medicine) {
                        log::debug!("{} administered", medicine.name);
                    } else {
                        log::debug!("{} had no effect", medicine.name);
                    }
                }
            }
        });
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            if ui.button("Praise").clicked() {
                session.praise();
            }
            if ui.button("Scold").clicked() {
                session.scold();
            }
            ui.separator();
            let age_days = session.creature.age_seconds(chrono::Utc::now()) / 86_400;
            ui.label(
                RichText::new(format!(
                    "{} · {} · day {} · {} xp",
                    session.creature.name,
                    session.evolution.name,
                    age_days,
                    session.experience as i64
                ))
                .color(Color32::WHITE),
            );
        });
    }

    fn draw_hud(&self, egui_ctx: &egui::Context, ctx: &mut GameContext) {
        let Some(session) = &ctx.session else {
            return;
        };
        let colors = &ctx.colors;

        egui::Area::new("care_hud".into())
            .fixed_pos(egui::pos2(10.0, 10.0))
            .show(egui_ctx, |ui| {
                ui.set_width(260.0);

                ui::stat_bar(
                    ui,
                    "Health",
                    session.health.current,
                    session.health.max,
                    colors.health_full,
                    colors.health_bg,
                );
                let hunger_color = if session.hunger.is_empty() {
                    colors.hunger_starving
                } else {
                    colors.hunger_full
                };
                ui::stat_bar(
                    ui,
                    "Hunger",
                    session.hunger.current,
                    session.hunger.max,
                    hunger_color,
                    colors.hunger_bg,
                );
                ui::stat_bar(
                    ui,
                    "Happy",
                    session.happy.current,
                    session.happy.max,
                    colors.happy_full,
                    colors.happy_bg,
                );
                ui::stat_bar(
                    ui,
                    "Bowel",
                    session.bowel.current,
                    session.bowel.max,
                    colors.bowel_full,
                    colors.bowel_bg,
                );
                ui::stat_bar(
                    ui,
                    "Discipline",
                    session.discipline.current,
                    session.discipline.max,
                    colors.discipline_full,
                    colors.discipline_bg,
                );

                if let Some(sickness) = &session.sickness {
                    ui.label(
                        RichText::new(format!("Sick: {}", sickness.name))
                            .color(colors.sick)
                            .strong(),
                    );
                }
                if !session.lights_on {
                    ui.label(RichText::new("Zzz…").color(colors.text));
                }
            });
    }

    fn draw_creature(&self, egui_ctx: &egui::Context, ctx: &mut GameContext) {
        let Some(session) = &ctx.session else {
            return;
        };
        let texture = ctx
            .textures
            .get(egui_ctx, &ctx.assets, "sprites.pet_mint");

        let tint = if !session.is_alive() {
            Color32::from_gray(110)
        } else if session.is_sick() {
            Color32::from_rgb(210, 255, 210)
        } else {
            Color32::WHITE
        };

        egui::Area::new("creature".into())
            .anchor(Align2::CENTER_CENTER, Vec2::new(0.0, 30.0))
            .show(egui_ctx, |ui| {
                ui.add(
                    egui::Image::new(&texture)
                        .fit_to_exact_size(Vec2::splat(128.0))
                        .tint(tint),
                );
            });

        // Lights out: dim the stage.
        if session.is_alive() && !session.lights_on {
            let screen = egui_ctx.content_rect();
            egui_ctx
                .layer_painter(egui::LayerId::background())
                .rect_filled(screen, CornerRadius::ZERO, Color32::from_black_alpha(120));
        }
    }

    fn draw_death_overlay(
        &self,
        egui_ctx: &egui::Context,
        ctx: &mut GameContext,
    ) -> Option<Transition> {
        let session = ctx.session.as_ref()?;
        if session.is_alive() {
            return None;
        }

        let mut transition = None;
        let screen = egui_ctx.content_rect();
        egui::Area::new("death_overlay".into())
            .fixed_pos(egui::pos2(0.0, 0.0))
            .show(egui_ctx, |ui| {
                ui.painter()
                    .rect_filled(screen, CornerRadius::ZERO, Color32::from_black_alpha(200));
            });

        egui::Window::new("death_window")
            .title_bar(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
            .show(egui_ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(16.0);
                    ui.heading(
                        RichText::new(format!("{} passed away", session.creature.name))
                            .color(ctx.colors.error)
                            .size(32.0),
                    );
                    let lived = session
                        .creature
                        .death_date
                        .map(|d| (d - session.creature.birth_date).num_minutes())
                        .unwrap_or(0);
                    ui.label(format!("Together for {lived} minutes"));
                    ui.add_space(24.0);
                    let button = egui::Button::new(RichText::new("Hatch a new egg").size(18.0))
                        .min_size(Vec2::new(180.0, 44.0));
                    if ui.add(button).clicked() {
                        transition = Some(Transition::CreatureCreation);
                    }
                    ui.add_space(16.0);
                });
            });
        transition
    }
}

impl Screen for MainGameScreen {
    fn show(&mut self, ctx: &mut GameContext) {
        if let Some(session) = &ctx.session {
            log::info!(
                "Now caring for {} ({})",
                session.creature.name,
                session.evolution.name
            );
        }
    }

    fn update(
        &mut self,
        dt: f32,
        _gestures: &GestureFrame,
        ctx: &mut GameContext,
    ) -> Option<Transition> {
        self.step_session(dt, ctx);

        self.since_autosave += dt;
        if self.since_autosave >= self.autosave_interval {
            self.save(ctx);
            log::info!("Auto-saved creature state");
        }
        None
    }

    fn draw(&mut self, egui_ctx: &egui::Context, ctx: &mut GameContext) -> Option<Transition> {
        self.draw_creature(egui_ctx, ctx);
        self.draw_hud(egui_ctx, ctx);
        self.draw_care_buttons(egui_ctx, ctx);
        self.draw_tray(egui_ctx, ctx);
        if let Some(transition) = self.draw_death_overlay(egui_ctx, ctx) {
            // The dead creature stays in the database; only the session ends.
            ctx.session = None;
            return Some(transition);
        }
        None
    }

    fn hide(&mut self, ctx: &mut GameContext) {
        // Never leave this screen with unsaved progress.
        self.save(ctx);
    }
}
