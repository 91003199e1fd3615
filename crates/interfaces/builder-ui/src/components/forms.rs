use crate::theme::*;
use crate::utils::section_label;
use eframe::egui;
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};

/// Labelled single-line input. `error` outlines the field and is shown
/// underneath it.
pub fn text_field<'a>(
    tui: impl TuiBuilderLogic<'a>,
    label: &str,
    value: &mut String,
    hint: &str,
    error: Option<&str>,
) {
    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        gap: length(4.0),
        size: taffy::Size {
            width: percent(1.),
            height: auto(),
        },
        ..Default::default()
    })
    .add(|tui| {
        tui.ui(|ui| section_label(ui, label));
        tui.ui(|ui| {
            if error.is_some() {
                let widgets = &mut ui.visuals_mut().widgets;
                widgets.inactive.bg_stroke = egui::Stroke::new(1.0, COL_DANGER);
                widgets.hovered.bg_stroke = egui::Stroke::new(1.0, COL_DANGER);
            }
            ui.add(
                egui::TextEdit::singleline(value)
                    .hint_text(hint)
                    .desired_width(f32::INFINITY)
                    .font(egui::FontId::monospace(13.0)),
            );
        });
        if let Some(message) = error {
            tui.label(egui::RichText::new(message).size(12.0).color(COL_DANGER));
        }
    });
}
