use std::path::PathBuf;
use std::time::Duration;

use builder_app_core::persistence::FilePersistence;
use builder_cli::{commands, ProjectsFrom};
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List projects the way the projects screen shows them
    Projects {
        #[arg(long, env = builder_config::DEPOT_URL_ENV, conflicts_with = "file")]
        depot_url: Option<String>,
        #[arg(long, help = "Read projects from a JSON file instead of the depot")]
        file: Option<PathBuf>,
        #[arg(long, help = "How long to wait for the fetch (defaults to the request timeout)")]
        timeout_secs: Option<u64>,
    },
    /// Show or change persisted client settings
    Settings {
        #[command(subcommand)]
        command: SettingsCommands,
    },
}

#[derive(Subcommand)]
enum SettingsCommands {
    Show,
    SetDepotUrl { url: String },
    SetTimeout { secs: u64 },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let persistence = FilePersistence::new();

    match cli.command {
        Commands::Projects {
            depot_url,
            file,
            timeout_secs,
        } => {
            let settings = commands::load_settings(&persistence);
            let from = match (file, depot_url) {
                (Some(path), _) => ProjectsFrom::File(path),
                (None, Some(url)) => ProjectsFrom::Depot(url),
                (None, None) => ProjectsFrom::Depot(settings.depot_url.clone()),
            };
            let wait = timeout_secs
                .map(|s| Duration::from_secs(builder_config::clamp_timeout_secs(s)))
                .unwrap_or_else(|| settings.request_timeout() + Duration::from_secs(1));

            let source = commands::projects_source(from, &settings)?;
            let vm = commands::cmd_projects(source, wait);
            print!("{}", vm.to_text());
        }
        Commands::Settings { command } => match command {
            SettingsCommands::Show => println!("{}", commands::cmd_settings_show(&persistence)?),
            SettingsCommands::SetDepotUrl { url } => {
                let s = commands::cmd_settings_set_depot_url(&persistence, &url)?;
                println!(":: Depot URL set to {}", s.depot_url);
            }
            SettingsCommands::SetTimeout { secs } => {
                let s = commands::cmd_settings_set_timeout(&persistence, secs)?;
                println!(":: Request timeout set to {}s", s.request_timeout_secs);
            }
        },
    }

    Ok(())
}
