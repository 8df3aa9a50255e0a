use clap::Parser;
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod domain;
mod services;

pub use cli::*;
pub use commands::*;
pub use domain::constants::*;
pub use domain::models::*;
pub use services::config::*;
pub use services::constraint::*;
pub use services::output::*;
pub use services::params::*;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let cfg = load_config(cli.config.as_deref())?;
    let paths = resolve_paths(&cfg, cli.params.as_deref(), cli.output.as_deref());
    tracing::debug!(
        params = %paths.params.display(),
        output = %paths.output.display(),
        "resolved paths"
    );

    handle_commands(&cli, &paths)
}
