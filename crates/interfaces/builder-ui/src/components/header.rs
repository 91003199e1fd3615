use crate::theme::*;
use crate::utils::{cmd_button, ButtonVariant};
use eframe::egui;
use egui_taffy::bg::simple::{TuiBackground, TuiBuilderLogicWithBackground};
use egui_taffy::taffy::prelude::{length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};

pub struct HeaderResponse {
    pub home_clicked: bool,
    pub slack_clicked: bool,
}

pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>) -> HeaderResponse {
    let mut resp = HeaderResponse {
        home_clicked: false,
        slack_clicked: false,
    };

    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Row,
        justify_content: Some(taffy::JustifyContent::SpaceBetween),
        align_items: Some(taffy::AlignItems::Center),
        padding: length(8.0),
        size: taffy::Size {
            width: percent(1.),
            height: percent(1.),
        },
        ..Default::default()
    })
    .bg_add(
        TuiBackground::new()
            .with_background_color(COL_BG)
            .with_border_color(COL_BORDER)
            .with_border_width(1.0),
        |tui| {
            let home = tui.ui(|ui| {
                ui.add(
                    egui::Label::new(
                        egui::RichText::new("BUILDER")
                            .size(16.0)
                            .extra_letter_spacing(2.0)
                            .strong()
                            .color(COL_ACCENT),
                    )
                    .sense(egui::Sense::click()),
                )
            });
            resp.home_clicked = home.clicked();

            if tui
                .ui(|ui| cmd_button(ui, "Join us on Slack", ButtonVariant::Slack, true))
                .clicked()
            {
                resp.slack_clicked = true;
            }
        },
    );

    resp
}
