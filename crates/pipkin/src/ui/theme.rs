//! Color theme for the game's gauges and overlays.

use egui::Color32;

#[derive(Debug, Clone)]
pub struct GameColors {
    pub health_full: Color32,
    pub health_bg: Color32,
    pub hunger_full: Color32,
    pub hunger_starving: Color32,
    pub hunger_bg: Color32,
    pub happy_full: Color32,
    pub happy_bg: Color32,
    pub bowel_full: Color32,
    pub bowel_bg: Color32,
    pub discipline_full: Color32,
    pub discipline_bg: Color32,
    pub sick: Color32,
    pub error: Color32,
    pub text: Color32,
}

impl Default for GameColors {
    fn default() -> Self {
        Self {
            health_full: Color32::from_rgb(96, 192, 96),
            health_bg: Color32::from_rgb(40, 72, 40),
            hunger_full: Color32::from_rgb(224, 160, 64),
            hunger_starving: Color32::from_rgb(224, 64, 48),
            hunger_bg: Color32::from_rgb(84, 60, 28),
            happy_full: Color32::from_rgb(240, 200, 80),
            happy_bg: Color32::from_rgb(90, 76, 34),
            bowel_full: Color32::from_rgb(150, 110, 70),
            bowel_bg: Color32::from_rgb(58, 44, 30),
            discipline_full: Color32::from_rgb(100, 140, 220),
            discipline_bg: Color32::from_rgb(40, 54, 84),
            sick: Color32::from_rgb(170, 110, 220),
            error: Color32::from_rgb(220, 60, 60),
            text: Color32::from_rgb(40, 40, 48),
        }
    }
}
