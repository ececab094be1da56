use clap::{Parser, Subcommand};

/// avstream - bootstrap and launch the ai_avatars_stream application
#[derive(Parser, Debug)]
#[command(name = "avstream")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Verify the Python interpreter, create the virtual environment,
    /// and install requirements.txt into it
    ///
    /// Exits with status 1 when no usable Python >= 3.8 is found, before
    /// touching the filesystem. An existing environment is reused unless
    /// --force is given.
    Setup {
        /// Recreate the environment even if one is already present
        #[arg(long, short)]
        force: bool,

        /// Explicit Python interpreter path (skips PATH lookup)
        #[arg(long, env = "AVSTREAM_PYTHON", value_name = "PATH")]
        python: Option<String>,

        /// Virtual environment directory (default: venv)
        #[arg(long, value_name = "DIR")]
        venv_dir: Option<String>,

        /// Dependency manifest (default: requirements.txt)
        #[arg(long, value_name = "FILE")]
        requirements: Option<String>,
    },

    /// Launch the stream entry point inside the virtual environment
    ///
    /// Runs in the foreground with inherited stdio and terminates with the
    /// entry point's exit code. Requires a prior `avstream setup`.
    Run {
        /// Virtual environment directory (default: venv)
        #[arg(long, value_name = "DIR")]
        venv_dir: Option<String>,

        /// Program to launch (default: src/main.py)
        #[arg(long, value_name = "FILE")]
        entry_point: Option<String>,

        /// Arguments passed through to the entry point
        #[arg(value_name = "ARGS", trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Report the bootstrap state: interpreter, environment, manifest, entry point
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Explicit Python interpreter path (skips PATH lookup)
        #[arg(long, env = "AVSTREAM_PYTHON", value_name = "PATH")]
        python: Option<String>,

        /// Virtual environment directory (default: venv)
        #[arg(long, value_name = "DIR")]
        venv_dir: Option<String>,

        /// Dependency manifest (default: requirements.txt)
        #[arg(long, value_name = "FILE")]
        requirements: Option<String>,

        /// Program to launch (default: src/main.py)
        #[arg(long, value_name = "FILE")]
        entry_point: Option<String>,
    },

    /// Remove the virtual environment so setup can start fresh
    Clean {
        /// Show what would be removed without deleting
        #[arg(long)]
        dry_run: bool,

        /// Skip the confirmation prompt
        #[arg(long, short)]
        force: bool,

        /// Virtual environment directory (default: venv)
        #[arg(long, value_name = "DIR")]
        venv_dir: Option<String>,
    },
}
