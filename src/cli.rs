use crate::config::DEFAULT_EMOJI;
use crate::duration::parse_duration;
use clap::{Parser, Subcommand};
use std::time::Duration;

#[derive(Parser)]
#[command(
    version = env!("CARGO_PKG_VERSION"),
    about = "user-status - set and show your GitHub status",
    long_about = "user-status reads and writes GitHub user statuses through the gh CLI."
)]
pub struct UserStatus {
    #[clap(subcommand)]
    pub commands: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Set your GitHub status
    Set {
        #[clap(help = "Status message; prompts interactively when omitted")]
        message: Option<String>,

        #[clap(long, short = 'e', default_value = DEFAULT_EMOJI, help = "Emoji for status")]
        emoji: String,

        #[clap(long, short = 'l', help = "Indicate limited availability")]
        limited: bool,

        #[clap(
            long,
            short = 'E',
            value_parser = parse_duration,
            help = "Expire status after this duration (e.g. 30m, 1h30m)"
        )]
        expiry: Option<Duration>,

        #[clap(long, short = 'o', help = "Limit status visibility to an organization")]
        org: Option<String>,
    },
    /// Get a GitHub user's status or your own
    Get {
        #[clap(help = "Login to look up; defaults to you")]
        login: Option<String>,
    },
}
