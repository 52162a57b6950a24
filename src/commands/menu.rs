use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::commands::enrich::{open_enricher, run_enrichment};
use crate::commands::generate::GenerateCommand;
use crate::commands::CliCommand;
use crate::llm::LlmClient;
use crate::support::io::prompt_line;
use crate::support::print;

/// Interactive menu, mirroring the tool's original front door.
#[derive(Args, Debug, Clone, Default)]
pub struct MenuCommand;

impl CliCommand for MenuCommand {
    fn execute(&self, ctx: &AppContext) -> Result<()> {
        print::banner();
        print::status("1. Generate new profile");
        print::status("2. Generate social media content");
        print::status("3. Exit");

        loop {
            // Closed stdin ends the menu the same way option 3 does.
            let selection = match prompt_line("> ") {
                Ok(selection) => selection,
                Err(_) => {
                    print::warn("Exiting...");
                    return Ok(());
                }
            };
            match selection.as_str() {
                "1" => {
                    let country = prompt_line("Country: ")?;
                    let language = prompt_line("Language: ")?;
                    let style = prompt_line("Style: ")?;

                    // Empty answers keep the defaults.
                    let cmd = GenerateCommand {
                        country: non_empty(country),
                        language: non_empty(language),
                        style: non_empty(style),
                        output_dir: None,
                        skip_extras: false,
                    };
                    return cmd.execute(ctx);
                }
                "2" => {
                    let path = PathBuf::from(prompt_line("Path to the saved profile JSON: ")?);
                    let cfg = ctx.config()?;
                    let llm = LlmClient::new_from_config(cfg)?;
                    let out_dir = cfg.output_dir.clone();
                    let enricher = open_enricher(&path, &out_dir, &llm, &cfg.chat_model)?;
                    return run_enrichment(&enricher, &llm, &cfg.fast_model, &cfg.chat_model);
                }
                "3" => {
                    print::warn("Exiting...");
                    return Ok(());
                }
                _ => print::warn("Invalid choice. Please select a valid option."),
            }
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
