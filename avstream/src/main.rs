mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};

use avstream_core::config::ProjectConfig;

fn main() -> Result<()> {
    avstream_core::observability::init_tracing();
    let cli = Cli::parse();

    let code = match cli.command {
        Commands::Setup {
            force,
            python,
            venv_dir,
            requirements,
        } => {
            let cfg = ProjectConfig::from_env().with_overrides(python, venv_dir, requirements, None);
            commands::setup::cmd_setup(&cfg, force)?
        }
        Commands::Run {
            venv_dir,
            entry_point,
            args,
        } => {
            let cfg = ProjectConfig::from_env().with_overrides(None, venv_dir, None, entry_point);
            commands::run::cmd_run(&cfg, &args)?
        }
        Commands::Status {
            json,
            python,
            venv_dir,
            requirements,
            entry_point,
        } => {
            let cfg = ProjectConfig::from_env()
                .with_overrides(python, venv_dir, requirements, entry_point);
            commands::status::cmd_status(&cfg, json)?;
            0
        }
        Commands::Clean {
            dry_run,
            force,
            venv_dir,
        } => {
            let cfg = ProjectConfig::from_env().with_overrides(None, venv_dir, None, None);
            commands::clean::cmd_clean(&cfg, dry_run, force)?;
            0
        }
    };

    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}
