pub mod enrich;
pub mod generate;
pub mod menu;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::app::AppContext;

pub use enrich::EnrichCommand;
pub use generate::GenerateCommand;
pub use menu::MenuCommand;

pub trait CliCommand {
    fn execute(&self, ctx: &AppContext) -> Result<()>;
}

#[derive(Parser, Debug, Clone)]
#[command(name = "sockforge", version, about = "AI driven sock puppet generator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<RootCommand>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum RootCommand {
    /// Generate a profile, its avatar, and the extra content
    Generate(GenerateCommand),
    /// Generate social content for an already saved profile
    Enrich(EnrichCommand),
    /// Interactive menu (the default when no subcommand is given)
    Menu(MenuCommand),
}

impl Cli {
    pub fn execute(self, ctx: &AppContext) -> Result<()> {
        match self
            .command
            .unwrap_or(RootCommand::Menu(MenuCommand::default()))
        {
            RootCommand::Generate(cmd) => cmd.execute(ctx),
            RootCommand::Enrich(cmd) => cmd.execute(ctx),
            RootCommand::Menu(cmd) => cmd.execute(ctx),
        }
    }
}
