use crate::config::{shortcode, trim_shortcode, EXPIRY_FORMAT};
use crate::error::{Result, StatusError};
use crate::gh::Gh;
use crate::manager::EmojiManager;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const SET_MUTATION: &str = "mutation($emoji: String!, $message: String!, $limited: Boolean!, $expiry: DateTime) {
  changeUserStatus(input: {emoji: $emoji, message: $message, limitedAvailability: $limited, expiresAt: $expiry}) {
    status { message emoji }
  }
}";

const VIEWER_QUERY: &str =
    "query { viewer { status { indicatesLimitedAvailability message emoji } } }";

const USER_QUERY: &str = "query($login: String!) { user(login: $login) { status { indicatesLimitedAvailability message emoji } } }";

/// A user's status as returned by the GraphQL API.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Status {
    #[serde(default)]
    pub indicates_limited_availability: bool,
    pub message: Option<String>,
    pub emoji: Option<String>,
}

impl Status {
    /// Human readable line with shortcodes replaced by glyphs
    pub fn render(&self, em: &EmojiManager) -> String {
        let mut parts: Vec<&str> = Vec::new();
        if let Some(emoji) = self.emoji.as_deref().filter(|e| !e.is_empty()) {
            parts.push(emoji);
        }
        if let Some(message) = self.message.as_deref().filter(|m| !m.is_empty()) {
            parts.push(message);
        }
        if self.indicates_limited_availability {
            parts.push("(availability is limited)");
        }
        em.replace_all(&parts.join(" "))
    }
}

#[derive(Debug, Clone, Default)]
pub struct SetOptions {
    pub message: String,
    pub emoji: String,
    pub limited: bool,
    pub expiry: Option<Duration>,
    pub org: Option<String>,
}

#[derive(Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
}

#[derive(Deserialize)]
struct StatusHolder {
    status: Option<Status>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChangeUserStatusData {
    change_user_status: Option<StatusHolder>,
}

#[derive(Deserialize)]
struct ViewerData {
    viewer: Option<StatusHolder>,
}

#[derive(Deserialize)]
struct UserData {
    user: Option<StatusHolder>,
}

/// Canonical alias for `value`, or `value` itself when the catalog does not
/// know it and the service should decide.
pub fn canonical_emoji(em: &EmojiManager, value: &str) -> String {
    let alias = trim_shortcode(value);
    match em.resolve(alias) {
        Some(emoji) => emoji.canonical().to_string(),
        None => {
            log::debug!("Emoji '{}' is not in the catalog, forwarding as-is", alias);
            alias.to_string()
        }
    }
}

/// Field arguments for the `changeUserStatus` mutation
pub fn set_status_fields(
    opts: &SetOptions,
    emoji: &str,
    now: DateTime<Local>,
) -> Result<Vec<String>> {
    let expiry = match opts.expiry.filter(|d| !d.is_zero()) {
        Some(duration) => {
            let duration = chrono::Duration::from_std(duration)
                .map_err(|e| StatusError::InvalidDuration(e.to_string()))?;
            let expires_at = now.checked_add_signed(duration).ok_or_else(|| {
                StatusError::InvalidDuration(format!("expiry {} is out of range", duration))
            })?;
            expires_at.format(EXPIRY_FORMAT).to_string()
        }
        None => "null".to_string(),
    };

    Ok(vec![
        "-f".to_string(),
        format!("query={}", SET_MUTATION),
        "-f".to_string(),
        format!("message={}", opts.message),
        "-f".to_string(),
        format!("emoji={}", shortcode(emoji)),
        "-F".to_string(),
        format!("limited={}", opts.limited),
        "-F".to_string(),
        format!("expiry={}", expiry),
    ])
}

/// Set the viewer's status and return the confirmation line
pub fn set_status(gh: &Gh, em: &EmojiManager, opts: &SetOptions) -> Result<String> {
    if let Some(org) = &opts.org {
        log::warn!("Limiting status visibility to '{}' is not supported; ignoring", org);
    }

    let emoji = canonical_emoji(em, &opts.emoji);
    let fields = set_status_fields(opts, &emoji, Local::now())?;
    let out = gh.graphql(&fields)?;

    let sent = shortcode(&emoji);
    let status = parse_set_response(&out)?;
    if status.emoji.as_deref() != Some(sent.as_str()) {
        log::debug!("Service returned emoji {:?}, sent {}", status.emoji, sent);
        return Err(StatusError::StatusRejected);
    }

    Ok(em.replace_all(&format!("✓ Status set to {} {}", sent, opts.message)))
}

/// Fetch the status of `login`, or of the authenticated user when `None`
pub fn get_status(gh: &Gh, login: Option<&str>) -> Result<Status> {
    let out = match login {
        Some(login) => gh.graphql(&[
            "-f".to_string(),
            format!("query={}", USER_QUERY),
            "-f".to_string(),
            format!("login={}", login),
        ])?,
        None => gh.graphql(&["-f".to_string(), format!("query={}", VIEWER_QUERY)])?,
    };
    parse_get_response(&out, login.is_some())
}

pub fn parse_set_response(content: &str) -> Result<Status> {
    let response: GraphQlResponse<ChangeUserStatusData> = serde_json::from_str(content)?;
    response
        .data
        .and_then(|d| d.change_user_status)
        .and_then(|holder| holder.status)
        .ok_or(StatusError::UnexpectedResponse)
}

/// A missing status (none set) reads as the empty status.
pub fn parse_get_response(content: &str, for_user: bool) -> Result<Status> {
    let holder = if for_user {
        let response: GraphQlResponse<UserData> = serde_json::from_str(content)?;
        response.data.and_then(|d| d.user)
    } else {
        let response: GraphQlResponse<ViewerData> = serde_json::from_str(content)?;
        response.data.and_then(|d| d.viewer)
    };

    holder
        .map(|h| h.status.unwrap_or_default())
        .ok_or(StatusError::UnexpectedResponse)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn manager() -> EmojiManager {
        EmojiManager::new().unwrap()
    }

    #[test]
    fn parses_viewer_status() {
        let body = r#"{"data":{"viewer":{"status":{"indicatesLimitedAvailability":true,"message":"on leave","emoji":":palm_tree:"}}}}"#;
        let status = parse_get_response(body, false).unwrap();
        assert!(status.indicates_limited_availability);
        assert_eq!(status.message.as_deref(), Some("on leave"));
        assert_eq!(status.emoji.as_deref(), Some(":palm_tree:"));
    }

    #[test]
    fn unset_status_is_empty() {
        let body = r#"{"data":{"user":{"status":null}}}"#;
        assert_eq!(parse_get_response(body, true).unwrap(), Status::default());
    }

    #[test]
    fn unknown_user_is_unexpected() {
        let body = r#"{"data":{"user":null}}"#;
        assert!(matches!(
            parse_get_response(body, true),
            Err(StatusError::UnexpectedResponse)
        ));
        assert!(matches!(
            parse_get_response("nope", false),
            Err(StatusError::Json(_))
        ));
    }

    #[test]
    fn parses_set_response() {
        let body = r#"{"data":{"changeUserStatus":{"status":{"message":"hi","emoji":":+1:"}}}}"#;
        let status = parse_set_response(body).unwrap();
        assert_eq!(status.emoji.as_deref(), Some(":+1:"));
        assert!(matches!(
            parse_set_response(r#"{"data":null}"#),
            Err(StatusError::UnexpectedResponse)
        ));
    }

    #[test]
    fn renders_status_line() {
        let em = manager();
        let status = Status {
            indicates_limited_availability: true,
            message: Some("on leave".to_string()),
            emoji: Some(":palm_tree:".to_string()),
        };
        assert_eq!(status.render(&em), "🌴 on leave (availability is limited)");
        assert_eq!(Status::default().render(&em), "");
    }

    #[test]
    fn canonicalizes_known_aliases() {
        let em = manager();
        assert_eq!(canonical_emoji(&em, ":thumbsup:"), "+1");
        assert_eq!(canonical_emoji(&em, "palm_tree"), "palm_tree");
        assert_eq!(canonical_emoji(&em, "shipit"), "shipit");
    }

    #[test]
    fn builds_mutation_fields() {
        let now = Local.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let opts = SetOptions {
            message: "lunch".to_string(),
            emoji: "hamburger".to_string(),
            limited: true,
            expiry: Some(Duration::from_secs(3_600)),
            org: None,
        };

        let fields = set_status_fields(&opts, "hamburger", now).unwrap();
        let expected_expiry = Local
            .with_ymd_and_hms(2024, 5, 1, 13, 0, 0)
            .unwrap()
            .format(EXPIRY_FORMAT)
            .to_string();

        assert!(fields.contains(&"message=lunch".to_string()));
        assert!(fields.contains(&"emoji=:hamburger:".to_string()));
        assert!(fields.contains(&"limited=true".to_string()));
        assert!(fields.contains(&format!("expiry={}", expected_expiry)));
    }

    #[test]
    fn out_of_range_expiry_is_an_error() {
        let opts = SetOptions {
            message: "away".to_string(),
            emoji: "zzz".to_string(),
            expiry: Some(crate::duration::parse_duration("100000000d").unwrap()),
            ..Default::default()
        };
        assert!(matches!(
            set_status_fields(&opts, "zzz", Local::now()),
            Err(StatusError::InvalidDuration(_))
        ));
    }

    #[test]
    fn no_expiry_sends_null() {
        let opts = SetOptions {
            message: "x".to_string(),
            emoji: "thought_balloon".to_string(),
            ..Default::default()
        };
        let fields = set_status_fields(&opts, "thought_balloon", Local::now()).unwrap();
        assert!(fields.contains(&"expiry=null".to_string()));
        assert!(fields.contains(&"limited=false".to_string()));
    }
}
