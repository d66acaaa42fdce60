use clap::Parser;

use groqchat_llm_api::config::{DEFAULT_MODEL, DEFAULT_TEMPERATURE};

/// CLI arguments for the groqchat server
#[derive(Parser, Debug)]
#[command(name = "groqchat")]
#[command(about = "HTTP chat backend bridging browser sessions to the Groq completion API")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// Address to bind the HTTP server to
    #[arg(long, default_value = "127.0.0.1", env = "GROQCHAT_BIND")]
    pub bind: String,

    /// Port to serve HTTP on
    #[arg(long, default_value = "8000", env = "GROQCHAT_PORT")]
    pub port: u16,

    /// Model requested from the completion service
    #[arg(long, default_value = DEFAULT_MODEL, env = "GROQCHAT_MODEL")]
    pub model: String,

    /// Use a different OpenAI-compatible endpoint (e.g., http://localhost:8080)
    #[arg(long, value_name = "URL", env = "GROQCHAT_API_URL")]
    pub api_url: Option<String>,

    /// Sampling temperature for completion requests
    #[arg(long, default_value_t = DEFAULT_TEMPERATURE, env = "GROQCHAT_TEMPERATURE")]
    pub temperature: f64,

    /// Front-end origin allowed to make cross-origin requests
    #[arg(
        long,
        default_value = "http://localhost:5173",
        env = "GROQCHAT_FRONTEND_ORIGIN"
    )]
    pub frontend_origin: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["groqchat"]);
        assert_eq!(cli.bind, "127.0.0.1");
        assert_eq!(cli.port, 8000);
        assert_eq!(cli.model, DEFAULT_MODEL);
        assert!(cli.api_url.is_none());
        assert_eq!(cli.frontend_origin, "http://localhost:5173");
    }

    #[test]
    fn test_flag_overrides() {
        let cli = Cli::parse_from([
            "groqchat",
            "--port",
            "9000",
            "--model",
            "mixtral-8x7b-32768",
            "--api-url",
            "http://localhost:8080",
        ]);
        assert_eq!(cli.port, 9000);
        assert_eq!(cli.model, "mixtral-8x7b-32768");
        assert_eq!(cli.api_url.as_deref(), Some("http://localhost:8080"));
    }
}
