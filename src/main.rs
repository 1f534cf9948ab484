use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use nimbus::config::ServerPaths;
use nimbus::mimetype::aliases::ConfigAliasSource;
use nimbus::mimetype::listgen::update_mimetype_list;
use nimbus::mimetype::themes::load_theme_descriptors;

/// Nimbus server administration tool.
#[derive(Parser)]
#[command(name = "nimbus", version, about)]
struct Cli {
    /// Platform installation root.
    #[arg(long, global = true, default_value = ".")]
    server_root: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Maintenance commands.
    #[command(subcommand)]
    Maintenance(MaintenanceCommand),
}

#[derive(Subcommand)]
enum MaintenanceCommand {
    /// Mimetype maintenance commands.
    #[command(subcommand)]
    Mimetype(MimetypeCommand),
}

#[derive(Subcommand)]
enum MimetypeCommand {
    /// Regenerate core/js/mimetypelist.js.
    UpdateJs,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let paths = ServerPaths::new(&cli.server_root);

    match cli.command {
        Command::Maintenance(MaintenanceCommand::Mimetype(MimetypeCommand::UpdateJs)) => {
            let aliases =
                ConfigAliasSource::new(paths.alias_dist_path(), paths.alias_custom_path());
            let app_themes = load_theme_descriptors(&paths.theme_apps_path(), paths.root())?;
            update_mimetype_list(&paths, &aliases, &app_themes)?;
            println!("core/js/mimetypelist.js is updated");
        }
    }

    Ok(())
}
