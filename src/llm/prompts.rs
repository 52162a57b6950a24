//! Prompt text for every generation call. The profile prompt demands a bare
//! JSON object so the reply can be parsed straight into the record.

use crate::profile::GenParams;

pub const PROFILE_SYSTEM_PROMPT: &str = "Respond with the requested info ONLY, do not include \
    the prompt or preface in the response and only provide a RFC8259 compliant JSON response \
    following this format without deviation.";

/// Empty skeleton of the record, embedded in the prompt so the model echoes
/// the exact key set back.
const PROFILE_SCHEMA_SKELETON: &str = r#"{"full_name": "", "age": "", "country": "", "city": "", "bio": "", "tagline": "", "username": "", "avatar": ""}"#;

pub fn build_profile_prompt(params: &GenParams, age_bracket: &str, occupation: &str) -> String {
    format!(
        "Create a realistic user profile in {language} for someone aged {age_bracket} from \
         {country}. This person works as a {occupation}. The bio should reflect their age, \
         country, and occupation. If English is chosen and the person isn't a native speaker, \
         the bio should reflect typical non-native English from that country. Write in a \
         {style} style. The user's last name shouldn't be Doe. Create the profile based on the \
         following schema: {schema}. The 'avatar' value should be a short simple prompt to \
         generate a social media avatar for the user with AI art following the format \
         'Stylized social media avatar of '. Lastly, be creative and unique with the value of \
         'username'.",
        language = params.language,
        country = params.country,
        style = params.style,
        schema = PROFILE_SCHEMA_SKELETON,
    )
}

pub const COMMUNITY_SYSTEM_PROMPT: &str =
    "You are chatting with a user who needs subreddit suggestions based on a bio.";

pub fn build_community_prompt(bio: &str) -> String {
    format!("Suggest subreddits for someone with this bio: {bio}")
}

pub const POST_SYSTEM_PROMPT: &str =
    "You are chatting with a user who needs you to write a short Twitter tweet.";

pub fn build_post_prompt(bio: &str) -> String {
    format!(
        "Write something that would be in character for someone with this bio: {bio}. Don't \
         just rephrase what's in the bio, simply use it as a basis for understanding their \
         personality. Do not use any hashtags or links in the tweet."
    )
}
