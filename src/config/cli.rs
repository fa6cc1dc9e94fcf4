use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, builder::BoolishValueParser};

/// Command-line arguments for the `vidz-share` binary.
#[derive(Debug, Parser)]
#[command(
    name = "vidz-share",
    version,
    about = "Share a video post with the vidz library"
)]
pub struct CliArgs {
    /// Optional path to a configuration file.
    #[arg(long = "config-file", env = "VIDZ_CONFIG_FILE", value_name = "PATH")]
    pub config_file: Option<PathBuf>,

    /// Base URL of the posts API.
    #[arg(long = "api-url", env = "VITE_API_URL", value_name = "URL")]
    pub api_url: Option<String>,

    /// Identifier of the logged-in user.
    #[arg(long = "user-id", env = "VIDZ_USER_ID", value_name = "ID")]
    pub user_id: Option<String>,

    /// Path to a file holding the bearer token (takes precedence over env).
    #[arg(long = "token-file", env = "VIDZ_TOKEN_FILE", value_name = "PATH")]
    pub token_file: Option<PathBuf>,

    /// Bearer token from env (no visible flag to keep it out of shell history).
    #[arg(
        long = "token-env",
        hide = true,
        env = "VIDZ_TOKEN",
        hide_env_values = true
    )]
    pub token_env: Option<String>,

    /// Override the base log level (trace|debug|info|warn|error).
    #[arg(long = "log-level", value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Toggle JSON logging.
    #[arg(
        long = "log-json",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new()
    )]
    pub log_json: Option<bool>,

    /// Override the pause before leaving the form after a successful submit.
    #[arg(long = "redirect-delay-ms", value_name = "MILLIS")]
    pub redirect_delay_ms: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Fill in the share form and submit it.
    Share(ShareArgs),
    /// Print the tag catalog as JSON.
    Tags,
}

#[derive(Debug, Args, Clone, Default)]
pub struct ShareArgs {
    /// Title of the post.
    #[arg(long)]
    pub title: Option<String>,

    /// Link to the video.
    #[arg(long = "video-url", value_name = "URL")]
    pub video_url: Option<String>,

    /// Optional description; only the first 200 characters are kept.
    #[arg(long)]
    pub description: Option<String>,

    /// Who teaches the video.
    #[arg(long = "instructor-name", value_name = "NAME")]
    pub instructor_name: Option<String>,

    /// Tag id to attach; repeat for several.
    #[arg(long = "tag", value_name = "ID")]
    pub tags: Vec<i64>,
}
