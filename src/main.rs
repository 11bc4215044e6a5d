use anyhow::Result;
use clap::{Parser, Subcommand};

use creatorlink::config::{paths::AppPaths, settings::Settings};
use creatorlink::services::Services;

#[derive(Parser)]
#[command(
    name = "creatorlink",
    version,
    about = "Terminal client for the creatorlink influencer/brand matching platform",
    long_about = "creatorlink connects content creators with the brands that want to \
                  work with them. This client runs the signup wizards, login, and \
                  password recovery against a stubbed backend."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI (default)
    #[command(alias = "ui")]
    Tui,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = AppPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Config) => {
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Default country:  {}", settings.default_country_code);
            if settings.last_email.is_empty() {
                println!("Remembered email: (none)");
            } else {
                println!("Remembered email: {}", settings.last_email);
            }
        }
        Some(Commands::Tui) | None => {
            let services = Services::mock();
            creatorlink::tui::run_tui(services, settings, paths)?;
        }
    }

    Ok(())
}
