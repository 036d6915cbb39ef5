use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    Build(BuildArgs),
}

#[derive(Debug, Args)]
pub struct BuildArgs {
    /// Path to the course configuration file.
    #[arg(long, default_value = "build-config.json")]
    pub config: String,

    /// Build only the course with this id (default: all configured courses).
    #[arg(long)]
    pub course: Option<String>,
}
