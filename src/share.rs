//! Share text for a finished run.
//!
//! Reads the final score of an ended session and formats a brag message
//! plus a tweet-intent link. Never writes to the session.

use crate::game::GameSession;

/// Hashtag appended to every shared message.
pub const HASHTAG: &str = "#FlappyNano";

const TWEET_INTENT_URL: &str = "https://twitter.com/intent/tweet?text=";

/// A ready-to-post share message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareMessage {
    /// Human-readable text, hashtag included.
    pub text: String,
    /// Tweet-intent URL carrying `text`.
    pub intent_url: String,
}

/// Build the share message for an ended session. `None` unless ended.
///
/// `link` is where friends can play; it is placed before the hashtag.
pub fn share_message(session: &GameSession, link: Option<&str>) -> Option<ShareMessage> {
    if !session.is_ended() {
        return None;
    }
    Some(compose(session.score, link))
}

/// Message text for a given score.
pub fn compose(score: u32, link: Option<&str>) -> ShareMessage {
    let points = if score > 1 { "points" } else { "point" };
    let mut text = format!("I just scored {score} {points} on Flappy Nano! Try it here:");
    if let Some(link) = link.filter(|l| !l.is_empty()) {
        text.push(' ');
        text.push_str(link);
    }
    text.push(' ');
    text.push_str(HASHTAG);

    let intent_url = format!("{TWEET_INTENT_URL}{}", encode_uri_component(&text));
    ShareMessage { text, intent_url }
}

/// Percent-encode everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`,
/// byte-wise over UTF-8, matching `encodeURIComponent`.
pub fn encode_uri_component(input: &str) -> String {
    let mut out = String::with_capacity(input.len() * 3);
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(byte as char),
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}
