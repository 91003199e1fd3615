use builder_app_core::{ProjectIdent, Route};
use crate::components::{code_block, forms, tip, title_band};
use crate::theme::*;
use crate::utils::{cmd_button, ButtonVariant};
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};

/// Project creation form. Validates the identifier locally; the depot owns
/// the actual creation.
pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>, draft: &mut String) -> Option<Route> {
    let mut navigate = None;
    let parsed = draft.parse::<ProjectIdent>();
    let error = match &parsed {
        Err(e) if !draft.trim().is_empty() => Some(e.to_string()),
        _ => None,
    };

    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        gap: length(12.0),
        size: percent(1.),
        ..Default::default()
    })
    .add(|tui| {
        title_band::draw(&mut *tui, "Create Project", None);

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
            tip::draw(
                &mut *tui,
                "Projects are named derivation/name, for example core/redis.",
            );

            forms::text_field(
                &mut *tui,
                "PROJECT",
                draft,
                "derivation/name",
                error.as_deref(),
            );

            if let Ok(ident) = &parsed {
                code_block::draw(&mut *tui, &format!("project = \"{ident}\""));
            }

            tui.style(taffy::Style {
                flex_direction: taffy::FlexDirection::Row,
                gap: length(8.0),
                ..Default::default()
            })
            .add(|tui| {
                let valid = parsed.is_ok();
                if tui
                    .ui(|ui| cmd_button(ui, "Continue", ButtonVariant::Primary, valid))
                    .clicked()
                {
                    if let Ok(ident) = &parsed {
                        navigate = Some(Route::Project(ident.clone()));
                    }
                }
                if tui
                    .ui(|ui| cmd_button(ui, "Cancel", ButtonVariant::Outline, true))
                    .clicked()
                {
                    navigate = Some(Route::Projects);
                }
            });
        });
    });

    navigate
}
