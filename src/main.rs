use clap::Parser;
use folder_to_text::{cli::Cli, run};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run(cli.command)
}
