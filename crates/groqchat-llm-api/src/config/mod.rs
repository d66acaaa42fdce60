use std::env;

use anyhow::{Context, Result};

/// Default Groq API URL
pub const GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Default model requested from the completion service
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

/// Default sampling temperature for completion requests
pub const DEFAULT_TEMPERATURE: f64 = 0.2;

/// Environment variable holding the Groq API key
pub const GROQ_API_KEY_ENV: &str = "GROQ_API_KEY";

/// Read the Groq API key from the environment
///
/// The key is required at startup so a misconfigured deployment fails
/// immediately instead of on the first chat request.
pub fn api_key_from_env() -> Result<String> {
    env::var(GROQ_API_KEY_ENV).with_context(|| format!("{} is not set", GROQ_API_KEY_ENV))
}

/// Normalize API URL by ensuring it has the correct path for OpenAI-compatible endpoints
pub fn normalize_api_url(url: &str) -> String {
    // If URL already contains a path with "completions", use it as-is
    if url.contains("/completions") || url.contains("/chat") {
        return url.to_string();
    }

    // If URL ends with a slash, append path without leading slash
    if url.ends_with('/') {
        format!("{}v1/chat/completions", url)
    } else {
        // Append the standard OpenAI-compatible path
        format!("{}/v1/chat/completions", url)
    }
}
