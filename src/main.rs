use std::process::ExitCode;

use anyhow::Context as _;
use clap::Parser as _;

fn main() -> ExitCode {
    if let Err(err) = try_main() {
        eprintln!("{err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn try_main() -> anyhow::Result<()> {
    notesite::logging::init().context("init logging")?;

    let cli = notesite::cli::Cli::parse();
    tracing::debug!(?cli, "parsed cli");

    match cli.command {
        notesite::cli::Command::Build(args) => {
            notesite::build::run(args).context("build")?;
        }
    }

    Ok(())
}
