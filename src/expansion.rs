use crate::config::SPECIAL_CHAR;

/// Replace every `:alias:` shortcode in `text` with the glyph `lookup` returns.
///
/// The scan runs once, left to right, and never overlaps tokens. A token body
/// is the text between two colons; it must be non-empty and free of
/// whitespace, otherwise the opening colon is emitted as-is and the next colon
/// is tried as an opener instead. Unknown aliases are copied through with both
/// colons and scanning resumes after the closing one. A colon with no partner
/// before the end of input is literal.
pub fn replace_shortcodes<'g, F>(text: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<&'g str>,
{
    let delim = SPECIAL_CHAR.len_utf8();
    let mut expanded = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find(SPECIAL_CHAR) {
        expanded.push_str(&rest[..open]);
        let after = &rest[open + delim..];

        let Some(close) = after.find(SPECIAL_CHAR) else {
            expanded.push_str(&rest[open..]);
            return expanded;
        };

        let body = &after[..close];
        if !is_token_body(body) {
            expanded.push(SPECIAL_CHAR);
            rest = after;
            continue;
        }

        match lookup(body) {
            Some(glyph) => expanded.push_str(glyph),
            None => expanded.push_str(&rest[open..open + close + 2 * delim]),
        }
        rest = &after[close + delim..];
    }

    expanded.push_str(rest);
    expanded
}

fn is_token_body(body: &str) -> bool {
    !body.is_empty() && !body.chars().any(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(alias: &str) -> Option<&'static str> {
        match alias {
            "palm_tree" => Some("🌴"),
            "+1" | "thumbsup" => Some("👍"),
            "x" => Some("❌"),
            _ => None,
        }
    }

    fn expand(text: &str) -> String {
        replace_shortcodes(text, lookup)
    }

    #[test]
    fn replaces_single_token() {
        assert_eq!(expand(":palm_tree:"), "🌴");
        assert_eq!(expand(":thumbsup:"), "👍");
    }

    #[test]
    fn replaces_every_occurrence() {
        assert_eq!(expand(":+1: great :+1:"), "👍 great 👍");
        assert_eq!(expand(":x::x:"), "❌❌");
    }

    #[test]
    fn leaves_surrounding_text_alone() {
        assert_eq!(
            expand("Status: :palm_tree: (on leave)"),
            "Status: 🌴 (on leave)"
        );
    }

    #[test]
    fn stray_colons_are_literal() {
        let text = "cost: $5 : not an emoji";
        assert_eq!(expand(text), text);
        assert_eq!(expand("trailing:"), "trailing:");
        assert_eq!(expand(":"), ":");
        assert_eq!(expand("::"), "::");
    }

    #[test]
    fn unknown_token_is_kept_and_its_closing_colon_not_reused() {
        // `:nope:` is consumed whole, so `palm_tree:` has no opener left.
        assert_eq!(expand(":nope:palm_tree:"), ":nope:palm_tree:");
        assert_eq!(expand(":nope: :x:"), ":nope: ❌");
    }

    #[test]
    fn empty_body_does_not_swallow_next_token() {
        assert_eq!(expand("::x:"), ":❌");
    }

    #[test]
    fn text_without_colons_is_unchanged() {
        let text = "Heads down on the release, back Monday";
        assert_eq!(expand(text), text);
        assert_eq!(expand(&expand(text)), text);
        assert_eq!(expand(""), "");
    }

    #[test]
    fn multibyte_text_around_tokens() {
        assert_eq!(expand("ünïcödé :x: 日本"), "ünïcödé ❌ 日本");
    }
}
