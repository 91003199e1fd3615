use builder_app_core::viewmodel::{ProjectsBody, ProjectsViewVm};
use builder_app_core::Route;
use crate::components::{tip, title_band};
use crate::theme::*;
use crate::utils::{cmd_button, list_link, ButtonVariant};
use eframe::egui;
use egui_taffy::bg::simple::{TuiBackground, TuiBuilderLogicWithBackground};
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};

/// Draws one render pass of the projects view. Returns the route of any link
/// the user clicked.
pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>, vm: &ProjectsViewVm) -> Option<Route> {
    let mut navigate = None;

    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        gap: length(12.0),
        size: percent(1.),
        overflow: taffy::Point {
            x: taffy::Overflow::Hidden,
            y: taffy::Overflow::Scroll,
        },
        min_size: taffy::Size {
            width: length(0.0),
            height: length(0.0),
        },
        ..Default::default()
    })
    .add(|tui| {
        title_band::draw(&mut *tui, vm.title, None);

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
            tui.style(taffy::Style {
                flex_direction: taffy::FlexDirection::Row,
                justify_content: Some(taffy::JustifyContent::FlexEnd),
                size: taffy::Size {
                    width: percent(1.),
                    height: auto(),
                },
                ..Default::default()
            })
            .add(|tui| {
                if tui
                    .ui(|ui| cmd_button(ui, &vm.create_link.label, ButtonVariant::Primary, true))
                    .clicked()
                {
                    navigate = Some(vm.create_link.route.clone());
                }
            });

            match &vm.body {
                ProjectsBody::Empty(empty) => {
                    tui.style(taffy::Style {
                        flex_direction: taffy::FlexDirection::Row,
                        align_items: Some(taffy::AlignItems::Center),
                        gap: length(6.0),
                        ..Default::default()
                    })
                    .add(|tui| {
                        tui.label(egui::RichText::new(&empty.message).color(COL_TEXT_DIM));
                        if tui
                            .ui(|ui| list_link(ui, &empty.call_to_action.label))
                            .clicked()
                        {
                            navigate = Some(empty.call_to_action.route.clone());
                        }
                    });

                    tip::draw(
                        &mut *tui,
                        "A project connects a plan in your repository to the depot.",
                    );
                }
                ProjectsBody::List(items) => {
                    tui.style(taffy::Style {
                        flex_direction: taffy::FlexDirection::Column,
                        size: taffy::Size {
                            width: percent(1.),
                            height: auto(),
                        },
                        ..Default::default()
                    })
                    .bg_add(
                        TuiBackground::new()
                            .with_background_color(COL_BG)
                            .with_border_color(COL_BORDER)
                            .with_border_width(1.0),
                        |tui| {
                            for (ix, item) in items.iter().enumerate() {
                                tui.id(egui_taffy::tid(("project", ix)))
                                    .style(taffy::Style {
                                        flex_direction: taffy::FlexDirection::Row,
                                        align_items: Some(taffy::AlignItems::Center),
                                        padding: length(10.0),
                                        size: taffy::Size {
                                            width: percent(1.),
                                            height: auto(),
                                        },
                                        ..Default::default()
                                    })
                                    .add(|tui| {
                                        if tui.ui(|ui| list_link(ui, &item.label)).clicked() {
                                            navigate = Some(item.link.route.clone());
                                        }
                                    });
                                if ix + 1 < items.len() {
                                    tui.separator();
                                }
                            }
                        },
                    );
                }
            }
        });
    });

    navigate
}
