//! Profile model: generation parameters, the persisted record, and the
//! one-shot generation flow that populates it.

use std::path::{Path, PathBuf};

use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::llm::prompts;
use crate::llm::{ChatMessage, LlmClient};
use crate::support::fs::save_to_file;

/// Age brackets sampled into the generation prompt. Without the nudge the
/// upstream model skews hard toward one demographic.
pub const AGE_BRACKETS: [&str; 4] = ["18-25", "26-32", "33-40", "41-45"];

pub const OCCUPATIONS: [&str; 18] = [
    "techie",
    "artist",
    "entrepreneur",
    "student",
    "freelancer",
    "teacher",
    "volunteer",
    "engineer",
    "writer",
    "musician",
    "lawyer",
    "doctor",
    "scientist",
    "researcher",
    "government worker",
    "salesperson",
    "retail worker",
    "customer service rep",
];

/// Caller-supplied inputs shaping profile generation.
#[derive(Debug, Clone)]
pub struct GenParams {
    pub country: String,
    pub language: String,
    pub style: String,
}

impl Default for GenParams {
    fn default() -> Self {
        Self {
            country: "USA".to_string(),
            language: "English".to_string(),
            style: "casual".to_string(),
        }
    }
}

/// Picks one value from a closed enumeration. Seam so prompt randomization
/// stays deterministic under test.
pub trait Sampler {
    fn choose(&mut self, options: &[&'static str]) -> &'static str;
}

/// Uniform random sampler backed by the thread RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RngSampler;

impl Sampler for RngSampler {
    fn choose(&mut self, options: &[&'static str]) -> &'static str {
        let mut rng = rand::thread_rng();
        options.choose(&mut rng).copied().unwrap_or("")
    }
}

/// The eight-field persona record produced by one generation call.
///
/// Unknown keys in a reply are ignored; a missing key fails the parse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub full_name: String,
    pub age: String,
    pub country: String,
    pub city: String,
    pub bio: String,
    pub tagline: String,
    pub username: String,
    pub avatar: String,
}

/// In-memory profile: generation parameters plus the record they produce.
pub struct UserProfile {
    params: GenParams,
    record: ProfileRecord,
}

impl UserProfile {
    pub fn new(params: GenParams) -> Self {
        Self {
            params,
            record: ProfileRecord::default(),
        }
    }

    pub fn record(&self) -> &ProfileRecord {
        &self.record
    }

    /// Populates the record in one shot from a single chat-completion call,
    /// replacing whatever was previously held.
    ///
    /// Fails with a malformed-response error when the reply does not parse
    /// into the full record, and an upstream error when the call itself fails
    /// or returns no choices. On failure the previous record is untouched.
    pub fn generate(
        &mut self,
        llm: &LlmClient,
        model: &str,
        sampler: &mut dyn Sampler,
    ) -> Result<()> {
        let age_bracket = sampler.choose(&AGE_BRACKETS);
        let occupation = sampler.choose(&OCCUPATIONS);
        debug!(age_bracket, occupation, "sampled prompt inputs");

        let messages = [
            ChatMessage::system(prompts::PROFILE_SYSTEM_PROMPT),
            ChatMessage::user(prompts::build_profile_prompt(
                &self.params,
                age_bracket,
                occupation,
            )),
        ];

        let reply = llm.chat_completion(model, &messages)?;
        self.record = parse_record(&reply)?;
        Ok(())
    }

    /// Indented JSON serialization of the record, keys in schema order.
    pub fn to_text(&self) -> String {
        serde_json::to_string_pretty(&self.record).unwrap_or_default()
    }

    /// Writes the serialized record, deriving the filename from `full_name`,
    /// and returns the absolute path written.
    pub fn persist(&self, out_dir: &Path) -> Result<PathBuf> {
        if self.record.full_name.trim().is_empty() {
            return Err(Error::malformed(
                "profile record has an empty full_name",
                "",
            ));
        }
        save_to_file(&self.to_text(), &self.record.full_name, out_dir, "json")
    }
}

/// Parses a model reply into a full record. Any deviation from the
/// eight-field structure, including an empty `full_name`, is a
/// malformed-response error carrying a snippet of the reply.
pub fn parse_record(reply: &str) -> Result<ProfileRecord> {
    let record: ProfileRecord = serde_json::from_str(reply)
        .map_err(|err| Error::malformed(format!("reply is not a valid profile object: {err}"), reply))?;
    if record.full_name.trim().is_empty() {
        return Err(Error::malformed("profile reply has an empty full_name", reply));
    }
    Ok(record)
}

#[cfg(test)]
pub(crate) fn sample_record() -> ProfileRecord {
    ProfileRecord {
        full_name: "Jane Rivers".to_string(),
        age: "29".to_string(),
        country: "USA".to_string(),
        city: "Portland".to_string(),
        bio: "loves hiking".to_string(),
        tagline: "out there somewhere".to_string(),
        username: "trailjane".to_string(),
        avatar: "Stylized social media avatar of a hiker".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Always picks the first option.
    struct FirstSampler;

    impl Sampler for FirstSampler {
        fn choose(&mut self, options: &[&'static str]) -> &'static str {
            options.first().copied().unwrap_or("")
        }
    }

    #[test]
    fn params_default_to_casual_american_english() {
        let params = GenParams::default();
        assert_eq!(params.country, "USA");
        assert_eq!(params.language, "English");
        assert_eq!(params.style, "casual");
    }

    #[test]
    fn fixed_sampler_makes_selection_deterministic() {
        let mut sampler = FirstSampler;
        assert_eq!(sampler.choose(&AGE_BRACKETS), "18-25");
        assert_eq!(sampler.choose(&OCCUPATIONS), "techie");
    }

    #[test]
    fn rng_sampler_only_picks_listed_options() {
        let mut sampler = RngSampler;
        for _ in 0..50 {
            let picked = sampler.choose(&AGE_BRACKETS);
            assert!(AGE_BRACKETS.contains(&picked));
        }
    }

    #[test]
    fn parse_record_fills_every_field() {
        let reply = serde_json::to_string(&sample_record()).unwrap();
        let record = parse_record(&reply).unwrap();
        assert_eq!(record, sample_record());
    }

    #[test]
    fn parse_record_rejects_missing_fields() {
        let reply = r#"{"full_name": "Jane Rivers", "age": "29"}"#;
        let err = parse_record(reply).unwrap_err();
        assert!(matches!(err, Error::MalformedResponse(_)));
    }

    #[test]
    fn parse_record_rejects_empty_full_name() {
        let mut record = sample_record();
        record.full_name = "  ".to_string();
        let reply = serde_json::to_string(&record).unwrap();
        let err = parse_record(&reply).unwrap_err();
        assert!(matches!(err, Error::MalformedResponse(_)));
    }

    #[test]
    fn parse_record_rejects_prose_replies() {
        let err = parse_record("Sure! Here is the profile you asked for:").unwrap_err();
        assert!(matches!(err, Error::MalformedResponse(_)));
    }

    #[test]
    fn parse_record_ignores_unknown_keys() {
        let mut value = serde_json::to_value(sample_record()).unwrap();
        value["extra"] = serde_json::json!("ignored");
        let record = parse_record(&value.to_string()).unwrap();
        assert_eq!(record, sample_record());
    }

    #[test]
    fn to_text_keeps_schema_key_order() {
        let profile = UserProfile {
            params: GenParams::default(),
            record: sample_record(),
        };
        let text = profile.to_text();
        let positions: Vec<usize> = [
            "full_name", "age", "country", "city", "bio", "tagline", "username", "avatar",
        ]
        .iter()
        .map(|key| text.find(&format!("\"{key}\"")).unwrap())
        .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn persist_refuses_an_empty_record() {
        let dir = tempfile::tempdir().unwrap();
        let profile = UserProfile::new(GenParams::default());
        let err = profile.persist(dir.path()).unwrap_err();
        assert!(matches!(err, Error::MalformedResponse(_)));
        assert!(std::fs::read_dir(dir.path()).unwrap().next().is_none());
    }

    #[test]
    fn persist_then_enricher_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let profile = UserProfile {
            params: GenParams::default(),
            record: sample_record(),
        };
        let path = profile.persist(dir.path()).unwrap();
        let loaded = crate::enrich::load_record(&path).unwrap();
        assert_eq!(&loaded, profile.record());
    }

    #[test]
    fn persist_writes_under_the_derived_name() {
        let dir = tempfile::tempdir().unwrap();
        let profile = UserProfile {
            params: GenParams::default(),
            record: sample_record(),
        };
        let path = profile.persist(dir.path()).unwrap();
        assert!(path.ends_with("jane_rivers.json"));
        assert!(path.exists());
    }
}
