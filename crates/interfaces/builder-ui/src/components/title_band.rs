use crate::theme::*;
use eframe::egui;
use egui_taffy::bg::simple::{TuiBackground, TuiBuilderLogicWithBackground};
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};

/// Full-width page title band.
pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>, title: &str, subtitle: Option<&str>) {
    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        justify_content: Some(taffy::JustifyContent::Center),
        padding: length(BODY_PADDING / 2.0),
        gap: length(2.0),
        flex_shrink: 0.0,
        size: taffy::Size {
            width: percent(1.),
            height: auto(),
        },
        min_size: taffy::Size {
            width: percent(1.),
            height: length(TITLE_BAND_HEIGHT),
        },
        ..Default::default()
    })
    .bg_add(
        TuiBackground::new().with_background_color(COL_TITLE_BAND),
        |tui| {
            tui.label(
                egui::RichText::new(title)
                    .size(22.0)
                    .strong()
                    .color(COL_TITLE_TEXT),
            );
            if let Some(sub) = subtitle {
                tui.label(
                    egui::RichText::new(sub)
                        .size(12.0)
                        .color(COL_TITLE_TEXT.linear_multiply(0.7)),
                );
            }
        },
    );
}
