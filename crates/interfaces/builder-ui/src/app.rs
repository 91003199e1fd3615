use crate::components::header;
use crate::screens::{project, project_create, projects};
use eframe::egui;
use egui_taffy::taffy::prelude::{length, percent};
use egui_taffy::{taffy, tui, TuiBuilderLogic};

use builder_app_core::ports::ProjectsSource;
use builder_app_core::viewmodel::ProjectsViewVm;
use builder_app_core::{Action, AppKernel, ProjectsView, Route, StateStore};

pub struct BuilderUiApp {
    kernel: AppKernel<Box<dyn ProjectsSource>>,
    projects_view: ProjectsView,
    projects_vm: Option<ProjectsViewVm>,
    create_draft: String,
}

impl BuilderUiApp {
    pub fn new(kernel: AppKernel<Box<dyn ProjectsSource>>) -> Self {
        Self {
            kernel,
            projects_view: ProjectsView::new(),
            projects_vm: None,
            create_draft: String::new(),
        }
    }

    /// Keeps the projects view attached exactly while its route is shown.
    fn sync_mounts(&mut self, ctx: &egui::Context) {
        let on_projects = self.kernel.get_state().route == Route::Projects;
        if on_projects && !self.projects_view.is_mounted() {
            let ctx = ctx.clone();
            self.projects_view
                .mount_with(&self.kernel, move || ctx.request_repaint());
        } else if !on_projects && self.projects_view.is_mounted() {
            self.projects_view.unmount();
        }
    }
}

impl eframe::App for BuilderUiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.kernel.tick();
        self.sync_mounts(ctx);

        let route = self.kernel.get_state().route.clone();
        let mut navigate: Option<Route> = None;
        let mut open_slack = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            tui(ui, ui.id().with("root"))
                .reserve_available_space()
                .style(taffy::Style {
                    flex_direction: taffy::FlexDirection::Column,
                    size: percent(1.),
                    min_size: taffy::Size {
                        width: percent(1.),
                        height: length(0.0),
                    },
                    ..Default::default()
                })
                .show(|tui| {
                    tui.style(taffy::Style {
                        size: taffy::Size {
                            width: percent(1.),
                            height: length(44.0),
                        },
                        flex_shrink: 0.0,
                        ..Default::default()
                    })
                    .add(|tui| {
                        let resp = header::draw(tui);
                        if resp.home_clicked {
                            navigate = Some(Route::Projects);
                        }
                        open_slack |= resp.slack_clicked;
                    });

                    tui.style(taffy::Style {
                        flex_direction: taffy::FlexDirection::Column,
                        flex_grow: 1.0,
                        flex_basis: length(0.0),
                        min_size: taffy::Size {
                            width: percent(1.),
                            height: length(0.0),
                        },
                        overflow: taffy::Point {
                            x: taffy::Overflow::Hidden,
                            y: taffy::Overflow::Hidden,
                        },
                        ..Default::default()
                    })
                    .add(|tui| {
                        let clicked = match &route {
                            Route::Projects => {
                                // Rebuilt only after a store notification or a remount.
                                let vm = match self.projects_vm.take() {
                                    Some(vm) if !self.projects_view.needs_render() => vm,
                                    _ => self.projects_view.render(&self.kernel),
                                };
                                let clicked = projects::draw(tui, &vm);
                                self.projects_vm = Some(vm);
                                clicked
                            }
                            Route::ProjectCreate => {
                                project_create::draw(tui, &mut self.create_draft)
                            }
                            Route::Project(ident) => project::draw(tui, ident),
                        };
                        if clicked.is_some() {
                            navigate = clicked;
                        }
                    });
                });
        });

        if open_slack {
            ctx.open_url(egui::OpenUrl::new_tab(builder_config::COMMUNITY_SLACK_URL));
        }

        if let Some(r) = navigate {
            if r == Route::ProjectCreate {
                self.create_draft.clear();
            }
            self.kernel.dispatch(Action::Navigate(r));
        }
    }
}
