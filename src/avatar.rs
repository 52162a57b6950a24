//! Avatar generation: request an image for a generated profile, then
//! download it next to the persisted record.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::blocking::Client as BlockingClient;
use tracing::debug;

use crate::error::{Error, Result};
use crate::llm::LlmClient;
use crate::profile::ProfileRecord;
use crate::support::fs::{derive_filename, ensure_directory};

pub const IMAGE_SIZE: &str = "512x512";

const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(10);

/// Two-step avatar flow: `generate` stores the remote reference, `save`
/// downloads it. Kept separate so a caller can inspect the reference before
/// committing to a download.
pub struct AvatarGenerator {
    record: ProfileRecord,
    image_url: Option<String>,
}

impl AvatarGenerator {
    pub fn new(record: ProfileRecord) -> Self {
        Self {
            record,
            image_url: None,
        }
    }

    /// Remote reference stored by the last successful `generate`.
    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    /// Requests one square image from the avatar prompt embedded in the
    /// record. Does not download.
    pub fn generate(&mut self, llm: &LlmClient) -> Result<()> {
        let prompt = self.record.avatar.trim();
        if prompt.is_empty() {
            return Err(Error::upstream("profile record has no avatar prompt"));
        }

        let url = llm.generate_image(prompt, IMAGE_SIZE)?;
        debug!(%url, "image endpoint returned remote reference");
        self.image_url = Some(url);
        Ok(())
    }

    /// Downloads the stored reference over a bounded fetch and writes
    /// `<derived_name>.png` under `out_dir`, returning the path written.
    pub fn save(&self, out_dir: &Path) -> Result<PathBuf> {
        let url = self
            .image_url
            .as_deref()
            .ok_or_else(|| Error::upstream("no image reference stored; call generate first"))?;

        let bytes = fetch_image_bytes(url)?;

        ensure_directory(out_dir)?;
        let filename = format!("{}.png", derive_filename(&self.record.full_name));
        let path = out_dir.join(filename);
        fs::write(&path, &bytes).map_err(|err| Error::io(&path, err))?;
        Ok(fs::canonicalize(&path).unwrap_or(path))
    }
}

fn fetch_image_bytes(url: &str) -> Result<Vec<u8>> {
    debug!(%url, "downloading avatar image");
    let http = BlockingClient::builder()
        .timeout(DOWNLOAD_TIMEOUT)
        .build()
        .map_err(|err| Error::Network(format!("failed to build download client: {err}")))?;

    let response = http
        .get(url)
        .send()
        .map_err(|err| Error::Network(format!("download from {url} failed: {err}")))?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::Network(format!(
            "image host returned status {status} for {url}"
        )));
    }

    let bytes = response
        .bytes()
        .map_err(|err| Error::Network(format!("reading image bytes from {url} failed: {err}")))?;
    Ok(bytes.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile;

    #[test]
    fn save_before_generate_is_a_defined_error() {
        let dir = tempfile::tempdir().unwrap();
        let generator = AvatarGenerator::new(profile::sample_record());
        let err = generator.save(dir.path()).unwrap_err();
        assert!(matches!(err, Error::Upstream(_)));
        assert!(std::fs::read_dir(dir.path()).unwrap().next().is_none());
    }

    #[test]
    fn no_reference_is_stored_initially() {
        let generator = AvatarGenerator::new(profile::sample_record());
        assert!(generator.image_url().is_none());
    }
}
