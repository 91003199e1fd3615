use crate::theme::*;
use eframe::egui;
use eframe::egui::Color32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    Primary,
    Outline,
    Slack,
}

pub fn section_label(ui: &mut egui::Ui, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .size(11.0)
            .color(COL_TEXT_DIM)
            .strong(),
    );
}

pub fn cmd_button(
    ui: &mut egui::Ui,
    label: &str,
    variant: ButtonVariant,
    enabled: bool,
) -> egui::Response {
    let (fill, stroke_col, text_col) = match variant {
        ButtonVariant::Primary => (COL_ACCENT, COL_ACCENT, COL_BG),
        ButtonVariant::Outline => (Color32::TRANSPARENT, COL_ACCENT, COL_ACCENT),
        ButtonVariant::Slack => (COL_SLACK, COL_SLACK, COL_BG),
    };

    let text = egui::RichText::new(label)
        .size(13.0)
        .color(if enabled { text_col } else { COL_TEXT_DIM });

    let btn = egui::Button::new(text)
        .min_size(egui::vec2(96.0, 28.0))
        .fill(if enabled { fill } else { Color32::TRANSPARENT })
        .stroke(egui::Stroke::new(
            1.0,
            if enabled { stroke_col } else { COL_BORDER },
        ));

    ui.add_enabled(enabled, btn)
}

/// List-item link styling.
pub fn list_link(ui: &mut egui::Ui, label: &str) -> egui::Response {
    ui.link(egui::RichText::new(label).size(15.0).color(COL_LINK))
}
