use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::commands::CliCommand;
use crate::enrich::ContentEnricher;
use crate::error::Error;
use crate::llm::LlmClient;
use crate::profile::{GenParams, RngSampler, UserProfile};
use crate::support::fs::resolve_output_dir;
use crate::support::io::prompt_yes;
use crate::support::print;

/// Generate subreddit suggestions and a sample tweet for a saved profile.
#[derive(Args, Debug, Clone)]
pub struct EnrichCommand {
    /// Path to a previously saved profile JSON file
    #[arg(long)]
    pub profile: PathBuf,
    /// Output directory; defaults to the configured one
    #[arg(long)]
    pub output_dir: Option<PathBuf>,
}

impl CliCommand for EnrichCommand {
    fn execute(&self, ctx: &AppContext) -> Result<()> {
        let cfg = ctx.config()?;
        let out_dir = resolve_output_dir(self.output_dir.clone(), cfg);
        let llm = LlmClient::new_from_config(cfg)?;

        let enricher = open_enricher(&self.profile, &out_dir, &llm, &cfg.chat_model)?;
        run_enrichment(&enricher, &llm, &cfg.fast_model, &cfg.chat_model)
    }
}

/// Runs both enrichment operations. They are independent; a failure in one
/// still aborts the run, but nothing from the other is rolled back.
pub fn run_enrichment(
    enricher: &ContentEnricher,
    llm: &LlmClient,
    fast_model: &str,
    chat_model: &str,
) -> Result<()> {
    print::status("Suggesting subreddits for the generated profile");
    enricher.suggest_communities(llm, fast_model)?;
    print::status("Writing a tweet for the generated user");
    enricher.draft_post(llm, chat_model)?;
    Ok(())
}

/// Opens the enricher for `profile_path`. When the file is missing, offers to
/// synthesize a fresh profile in its place; declining propagates the original
/// not-found error.
pub fn open_enricher(
    profile_path: &Path,
    out_dir: &Path,
    llm: &LlmClient,
    chat_model: &str,
) -> Result<ContentEnricher> {
    match ContentEnricher::new(profile_path, out_dir) {
        Ok(enricher) => Ok(enricher),
        Err(Error::NotFound(path)) => {
            print::warn(&format!(
                "Could not find the specified profile JSON file: {}",
                path.display()
            ));
            if !prompt_yes("Would you like to generate a new profile? [Y/n] ")? {
                print::warn("Ok then, nothing for me to do here. Exiting...");
                return Err(Error::NotFound(path).into());
            }

            let mut profile = UserProfile::new(GenParams::default());
            let mut sampler = RngSampler;
            print::status("Generating basic bio");
            profile.generate(llm, chat_model, &mut sampler)?;
            let new_path = profile.persist(out_dir)?;
            print::status(&format!("Profile saved to {}", new_path.display()));

            Ok(ContentEnricher::new(&new_path, out_dir)?)
        }
        Err(err) => Err(err.into()),
    }
}
