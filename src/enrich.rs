//! Follow-up content generation against a previously persisted profile.
//!
//! Re-reads the record from disk rather than taking the in-memory model, so
//! it can run standalone against any saved profile.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::llm::prompts;
use crate::llm::{ChatMessage, LlmClient};
use crate::profile::ProfileRecord;
use crate::support::fs::save_lines_to_file;

pub struct ContentEnricher {
    record: ProfileRecord,
    output_dir: PathBuf,
}

impl ContentEnricher {
    /// Loads the record at `profile_path`. A missing file is a not-found
    /// error; the command layer owns the recovery prompt.
    pub fn new(profile_path: &Path, output_dir: &Path) -> Result<Self> {
        let record = load_record(profile_path)?;
        Ok(Self {
            record,
            output_dir: output_dir.to_path_buf(),
        })
    }

    pub fn record(&self) -> &ProfileRecord {
        &self.record
    }

    /// Suggests discussion communities matching the persona's bio and
    /// persists them, one per line, as `<derived_name>_subreddits.txt`.
    pub fn suggest_communities(&self, llm: &LlmClient, model: &str) -> Result<PathBuf> {
        let messages = [
            ChatMessage::system(prompts::COMMUNITY_SYSTEM_PROMPT),
            ChatMessage::user(prompts::build_community_prompt(&self.record.bio)),
        ];
        let reply = llm.chat_completion(model, &messages)?;
        let lines: Vec<String> = reply.trim().lines().map(str::to_owned).collect();
        save_lines_to_file(
            &lines,
            &format!("{}_subreddits", self.record.full_name),
            &self.output_dir,
            "txt",
            "\n",
        )
    }

    /// Drafts a short in-character post (no hashtags, no links) and persists
    /// it as `<derived_name>_tweet.txt`.
    pub fn draft_post(&self, llm: &LlmClient, model: &str) -> Result<PathBuf> {
        let messages = [
            ChatMessage::system(prompts::POST_SYSTEM_PROMPT),
            ChatMessage::user(prompts::build_post_prompt(&self.record.bio)),
        ];
        let reply = llm.chat_completion(model, &messages)?;
        let lines: Vec<String> = reply.trim().lines().map(str::to_owned).collect();
        save_lines_to_file(
            &lines,
            &format!("{}_tweet", self.record.full_name),
            &self.output_dir,
            "txt",
            "\n",
        )
    }
}

/// Reads a persisted profile record back from disk as a fresh copy.
pub fn load_record(path: &Path) -> Result<ProfileRecord> {
    if !path.exists() {
        return Err(Error::NotFound(path.to_path_buf()));
    }
    let raw = fs::read_to_string(path).map_err(|err| Error::io(path, err))?;
    serde_json::from_str(&raw).map_err(|err| {
        Error::malformed(
            format!("{} is not a valid profile record: {err}", path.display()),
            &raw,
        )
    })
}
