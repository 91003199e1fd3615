mod app;
mod components;
mod screens;
mod theme;
mod utils;

use builder_app_core::app_core::AppStore;
use builder_app_core::persistence::FilePersistence;
use builder_app_core::ports::ProjectsSource;
use builder_app_core::sources::HttpProjectsSource;
use builder_app_core::{AppKernel, ClientSettings};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn load_settings() -> ClientSettings {
    match FilePersistence::new().load_settings() {
        Ok(s) => s.with_env_override(),
        Err(e) => {
            tracing::error!("Failed to load settings: {e:#}");
            ClientSettings::default().with_env_override()
        }
    }
}

pub fn run() -> eframe::Result<()> {
    setup_logging();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([900.0, 640.0])
            .with_min_inner_size([600.0, 400.0])
            .with_title("Builder"),
        ..Default::default()
    };

    eframe::run_native(
        "Builder",
        options,
        Box::new(|cc| {
            theme::setup(&cc.egui_ctx);

            let settings = load_settings();
            tracing::info!("Using depot {}", settings.depot_url);
            let source: Box<dyn ProjectsSource> = Box::new(HttpProjectsSource::new(&settings)?);
            let repaint = cc.egui_ctx.clone();
            let kernel = AppKernel::new(AppStore::default(), source)
                .with_wake_hook(move || repaint.request_repaint());

            Ok(Box::new(app::BuilderUiApp::new(kernel)))
        }),
    )
}
