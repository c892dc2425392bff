//! dash-cli - inspect the dashboard's route table and embedded datasets.

mod commands;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "dash-cli",
    version,
    about = "Admin dashboard route and dataset toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: commands::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    commands::run(cli.command, &mut std::io::stdout().lock())
}
