use crate::theme::*;
use eframe::egui;
use egui_taffy::bg::simple::{TuiBackground, TuiBuilderLogicWithBackground};
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};

pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>, code: &str) {
    tui.style(taffy::Style {
        padding: length(10.0),
        size: taffy::Size {
            width: percent(1.),
            height: auto(),
        },
        ..Default::default()
    })
    .bg_add(
        TuiBackground::new()
            .with_background_color(COL_CODE_BG)
            .with_corner_radius(3.0),
        |tui| {
            tui.label(
                egui::RichText::new(code)
                    .monospace()
                    .size(12.0)
                    .color(COL_CODE_TEXT),
            );
        },
    );
}
