mod catalog;
mod cli_messages;
mod config;
mod consts;
mod error;
mod events;
mod logging;
mod session;
mod ui;

use crate::catalog::Section;
use crate::config::{Config, get_config_path};
use crate::session::{SessionOverrides, run_headless_mode, run_tui_mode, setup_session};
use clap::{Parser, Subcommand};
use std::error::Error;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Config file to use instead of ~/.widget-showcase/config.json
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Open the interactive showcase
    Start {
        /// Paint a dark background behind the whole screen
        #[arg(long, default_value_t = false)]
        with_background: bool,

        /// Pause between steps of the progress demo, in milliseconds
        #[arg(long, value_name = "MS")]
        progress_step_ms: Option<u64>,

        /// Seed for the sample data, for reproducible charts and tables
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Render one section without the terminal UI and print it
    Render {
        /// Section label: Widgets, Media, Charts, Layout, DataFrames or Utilities
        #[arg(long, short, default_value_t = Section::default())]
        section: Section,

        /// Pause between steps of the progress demo, in milliseconds
        #[arg(long, value_name = "MS")]
        progress_step_ms: Option<u64>,

        /// Seed for the sample data
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Write the default configuration file
    InitConfig,
    /// Delete the configuration file
    ResetConfig,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    logging::apply_max_level();
    let config_path = match args.config {
        Some(path) => path,
        None => get_config_path()?,
    };

    match args.command {
        Command::Start {
            with_background,
            progress_step_ms,
            seed,
        } => {
            let session = setup_session(
                &config_path,
                SessionOverrides {
                    with_background,
                    progress_step_ms,
                    seed,
                },
            )?;
            run_tui_mode(session)
        }
        Command::Render {
            section,
            progress_step_ms,
            seed,
        } => {
            let session = setup_session(
                &config_path,
                SessionOverrides {
                    with_background: false,
                    progress_step_ms,
                    seed,
                },
            )?;
            run_headless_mode(session, section)
        }
        Command::InitConfig => {
            Config::default().save(&config_path).map_err(|e| {
                print_cmd_error!("Failed to write config", &e.to_string());
                e
            })?;
            print_cmd_success!("Config written", "{}", config_path.display());
            Ok(())
        }
        Command::ResetConfig => {
            print_cmd_info!("Removing config", "{}", config_path.display());
            Config::clear(&config_path)?;
            print_cmd_success!("Config removed", "");
            Ok(())
        }
    }
}
