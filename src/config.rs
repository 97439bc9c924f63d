use std::env;
use std::path::PathBuf;

/// Delimiter that opens and closes an emoji shortcode, as in `:palm_tree:`.
pub const SPECIAL_CHAR: char = ':';

/// Emoji used by `set` when none is given, and preselected in the prompt.
pub const DEFAULT_EMOJI: &str = "thought_balloon";

pub const GH_BIN_ENV: &str = "USER_STATUS_GH";
pub const GH_BIN: &str = "gh";

/// Timestamp layout for the `expiresAt` mutation variable.
pub const EXPIRY_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

/// Get the gh binary to invoke
pub fn get_gh_binary() -> PathBuf {
    env::var_os(GH_BIN_ENV)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(GH_BIN))
}

/// Strip surrounding shortcode delimiters from a user supplied alias
pub fn trim_shortcode(value: &str) -> &str {
    value.trim().trim_matches(SPECIAL_CHAR)
}

/// Wrap an alias in shortcode delimiters
pub fn shortcode(alias: &str) -> String {
    format!("{}{}{}", SPECIAL_CHAR, alias, SPECIAL_CHAR)
}
