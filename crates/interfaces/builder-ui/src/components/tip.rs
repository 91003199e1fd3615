use crate::theme::*;
use eframe::egui;
use egui_taffy::bg::simple::{TuiBackground, TuiBuilderLogicWithBackground};
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};

pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>, text: &str) {
    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Row,
        align_items: Some(taffy::AlignItems::Center),
        gap: length(8.0),
        padding: length(10.0),
        size: taffy::Size {
            width: percent(1.),
            height: auto(),
        },
        ..Default::default()
    })
    .bg_add(
        TuiBackground::new()
            .with_background_color(COL_TIP_BG)
            .with_border_color(COL_TIP_BORDER)
            .with_border_width(1.0)
            .with_corner_radius(4.0),
        |tui| {
            tui.label(
                egui::RichText::new("TIP")
                    .size(11.0)
                    .strong()
                    .color(COL_ACCENT),
            );
            tui.label(egui::RichText::new(text).size(13.0).color(COL_TEXT));
        },
    );
}
