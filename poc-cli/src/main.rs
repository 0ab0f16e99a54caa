//! PoC CLI - build the report page's workflow sections from the shared text.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "poc-cli",
    version,
    about = "AI SEO workflow report toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: poc_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    poc_cmd::run(cli.command)
}
