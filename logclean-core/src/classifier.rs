//! Line classification: the purge decision for a single log line.
//!
//! The heuristic is purely positional. Token 1 is conventionally the
//! nickname field of the `HH:MM <nick> message` layout, and channel-event
//! notices carry a `***` marker as their first or second token. Timestamps
//! are never parsed and the format is never validated beyond token
//! position; occasional misclassification is the accepted cost.

use crate::config::FilterConfig;

/// Marker token that introduces a channel-event notice line.
const NOTICE_MARKER: &str = "***";

/// Event-type tokens of the notices worth purging, colon included.
const NOTICE_EVENTS: [&str; 3] = ["Joins:", "Parts:", "Quits:"];

/// Decides whether `line` should be excluded from the cleaned output.
///
/// Blank lines and lines of fewer than two whitespace-separated tokens
/// always survive, regardless of configuration.
pub fn should_purge(line: &str, config: &FilterConfig) -> bool {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return false;
    }

    if config.purge_join_part && tokens.len() > 2 && is_notice(&tokens) {
        return true;
    }

    if config.purge_bots && tokens.len() > 1 && config.bots.contains(strip_nick(tokens[1])) {
        return true;
    }

    false
}

/// True for join/part/quit notice lines.
///
/// The marker sits first or right after a timestamp token, and the event
/// word follows it either immediately (`*** Joins: nick`) or after the
/// nick (`*** nick Joins: #chan`), depending on which logger wrote the
/// file. Both shapes occur in the wild, with and without timestamps.
fn is_notice(tokens: &[&str]) -> bool {
    tokens
        .iter()
        .take(2)
        .position(|t| *t == NOTICE_MARKER)
        .is_some_and(|marker| {
            tokens[marker + 1..]
                .iter()
                .take(2)
                .any(|t| NOTICE_EVENTS.contains(t))
        })
}

/// Strips the angle brackets IRC clients wrap around nicknames
/// (`<nick>` -> `nick`).
fn strip_nick(token: &str) -> &str {
    token.trim_matches(['<', '>'])
}
