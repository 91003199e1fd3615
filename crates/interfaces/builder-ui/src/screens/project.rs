use builder_app_core::{ProjectIdent, Route};
use crate::components::{code_block, title_band};
use crate::theme::*;
use crate::utils::{cmd_button, ButtonVariant};
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};

pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>, ident: &ProjectIdent) -> Option<Route> {
    let mut navigate = None;

    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        gap: length(12.0),
        size: percent(1.),
        ..Default::default()
    })
    .add(|tui| {
        title_band::draw(&mut *tui, &ident.name, Some(&ident.derivation));

        tui.style(taffy::Style {
            flex_direction: taffy::FlexDirection::Column,
            gap: length(8.0),
            padding: length(BODY_PADDING),
            size: taffy::Size {
                width: percent(1.),
                height: auto(),
            },
            ..Default::default()
        })
        .add(|tui| {
            code_block::draw(&mut *tui, &ident.to_string());

            if tui
                .ui(|ui| cmd_button(ui, "Back to projects", ButtonVariant::Outline, true))
                .clicked()
            {
                navigate = Some(Route::Projects);
            }
        });
    });

    navigate
}
