//! Shared UI helpers: theme colors and the stat-bar painter.

pub mod theme;

use egui::{Color32, CornerRadius, Rect, Stroke, StrokeKind, Vec2};

/// Paint one labelled gauge bar.
pub fn stat_bar(
    ui: &mut egui::Ui,
    label: &str,
    current: f32,
    max: f32,
    fill_color: Color32,
    bg_color: Color32,
) {
    let percentage = if max > 0.0 {
        (current / max).clamp(0.0, 1.0)
    } else {
        0.0
    };

    ui.horizontal(|ui| {
        ui.add_sized([80.0, 20.0], egui::Label::new(label));

        let bar_width = 160.0;
        let bar_height = 18.0;

        let (response, painter) =
            ui.allocate_painter(Vec2::new(bar_width, bar_height), egui::Sense::hover());

        let rect = response.rect;

        // Background
        painter.rect_filled(rect, CornerRadius::same(4), bg_color);

        // Fill
        let fill_width = bar_width * percentage;
        let fill_rect = Rect::from_min_size(rect.min, Vec2::new(fill_width, bar_height));
        painter.rect_filled(fill_rect, CornerRadius::same(4), fill_color);

        // Border
        painter.rect_stroke(
            rect,
            CornerRadius::same(4),
            Stroke::new(1.5, Color32::BLACK),
            StrokeKind::Outside, // egui 0.33+ requires StrokeKind
        );

        // Text overlay
        let text = format!("{:.0}/{:.0}", current, max);
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            &text,
            egui::FontId::proportional(12.0),
            Color32::WHITE,
        );
    });
}
