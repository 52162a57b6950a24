use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use crate::app::AppContext;
use crate::avatar::AvatarGenerator;
use crate::commands::CliCommand;
use crate::enrich::ContentEnricher;
use crate::llm::LlmClient;
use crate::profile::{GenParams, RngSampler, UserProfile};
use crate::support::fs::resolve_output_dir;
use crate::support::print;

/// Full pipeline: generate a profile, persist it, generate and download its
/// avatar, then (unless skipped) produce the extra content.
#[derive(Args, Debug, Clone, Default)]
pub struct GenerateCommand {
    /// Country the persona is from
    #[arg(long)]
    pub country: Option<String>,
    /// Language the profile is written in
    #[arg(long)]
    pub language: Option<String>,
    /// Writing style for the bio
    #[arg(long)]
    pub style: Option<String>,
    /// Output directory; defaults to the configured one
    #[arg(long)]
    pub output_dir: Option<PathBuf>,
    /// Skip subreddit suggestions and the sample tweet
    #[arg(long)]
    pub skip_extras: bool,
}

impl GenerateCommand {
    fn params(&self) -> GenParams {
        let mut params = GenParams::default();
        if let Some(country) = &self.country {
            params.country = country.clone();
        }
        if let Some(language) = &self.language {
            params.language = language.clone();
        }
        if let Some(style) = &self.style {
            params.style = style.clone();
        }
        params
    }
}

impl CliCommand for GenerateCommand {
    fn execute(&self, ctx: &AppContext) -> Result<()> {
        let cfg = ctx.config()?;
        let out_dir = resolve_output_dir(self.output_dir.clone(), cfg);
        let llm = LlmClient::new_from_config(cfg)?;

        let mut profile = UserProfile::new(self.params());
        let mut sampler = RngSampler;
        print::status("Generating basic bio");
        profile
            .generate(&llm, &cfg.chat_model, &mut sampler)
            .context("Profile generation failed")?;
        let profile_path = profile.persist(&out_dir)?;
        print::status(&format!("Profile saved to {}", profile_path.display()));

        print::status("Generating social media avatar");
        let mut avatar = AvatarGenerator::new(profile.record().clone());
        avatar.generate(&llm).context("Avatar generation failed")?;
        let avatar_path = avatar.save(&out_dir).context("Avatar download failed")?;
        print::status(&format!("Avatar saved to {}", avatar_path.display()));

        if !self.skip_extras {
            let enricher = ContentEnricher::new(&profile_path, &out_dir)
                .context("Failed to reload the saved profile for enrichment")?;
            print::status("Suggesting subreddits for the generated profile");
            enricher.suggest_communities(&llm, &cfg.fast_model)?;
            print::status("Writing a tweet for the generated user");
            enricher.draft_post(&llm, &cfg.chat_model)?;
        }

        Ok(())
    }
}
