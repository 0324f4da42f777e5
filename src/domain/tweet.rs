//! Tweet composition rules: markup cleanup, composite length, formatting
//! tiers, hashtag suffix.
//!
//! Tier selection runs on the composite length `L` = title chars + fact
//! chars + 1 (the joining separator):
//! - `L <= 15`        not a sensible message, skip
//! - `16 <= L <= 101` body + `#movie #trivia` + page link
//! - `102 <= L <= 115` body + `#trivia` + page link
//! - `116 <= L <= 138` bare body
//! - `L > 138`        cannot fit the limit, skip
//!
//! The page title doubles as a closing hashtag (`#jamiefoxx`) whenever the
//! final message still fits. Links count as the platform's wrapped length
//! (23 chars), not their raw length.

use crate::domain::Tweet;
use regex::Regex;

/// Hard platform limit for one message.
pub const TWEET_LIMIT: usize = 140;

/// Every link is wrapped by the platform shortener to this many characters.
pub const SHORT_URL_LEN: usize = 23;

const TAG_MOVIE: &str = "#movie";
const TAG_TRIVIA: &str = "#trivia";

/// Outcome of composing a tweet from a page title and a cleaned fact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Composition {
    /// Within a publishable tier and under the limit.
    Ready(Tweet),
    /// Composite length <= 15: too short to be a sensible message.
    TooShort { len: usize },
    /// Composite length > 138: the bare body alone cannot fit.
    TooLong { len: usize },
    /// In a publishable tier, but the assembled text (links weighted at
    /// [`SHORT_URL_LEN`]) still exceeds [`TWEET_LIMIT`].
    OverLimit { weighted: usize },
}

impl Composition {
    /// Short reason string for the skip journal.
    pub fn skip_reason(&self) -> Option<String> {
        match self {
            Composition::Ready(_) => None,
            Composition::TooShort { len } => Some(format!("too short ({} chars)", len)),
            Composition::TooLong { len } => Some(format!("too long ({} chars)", len)),
            Composition::OverLimit { weighted } => {
                Some(format!("over limit ({} weighted chars)", weighted))
            }
        }
    }
}

/// Strip residual inline markup (anchors, line breaks) from a selected
/// candidate and collapse whitespace runs. Link text survives, tags do not.
pub fn clean_fact(raw: &str) -> String {
    let markup = Regex::new(r"(?i)</?[a-z][^>]*>").expect("markup regex is valid");
    let stripped = markup.replace_all(raw, " ");
    stripped
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Composite length that drives tier selection: title + fact + one
/// separator character.
pub fn composite_len(title: &str, fact: &str) -> usize {
    title.chars().count() + fact.chars().count() + 1
}

/// Turn a page title into a hashtag: whitespace removed, lowercased,
/// `#`-prefixed. `"Jamie Foxx"` becomes `"#jamiefoxx"`.
pub fn title_hashtag(title: &str) -> String {
    let compact: String = title.chars().filter(|c| !c.is_whitespace()).collect();
    format!("#{}", compact.to_lowercase())
}

/// Effective character count as the platform sees it: every link counts
/// as [`SHORT_URL_LEN`] regardless of its raw length.
pub fn weighted_len(text: &str) -> usize {
    let url = Regex::new(r"https?://\S+").expect("url regex is valid");
    let mut len = text.chars().count();
    for m in url.find_iter(text) {
        len = len - m.as_str().chars().count() + SHORT_URL_LEN;
    }
    len
}

/// Compose the final message for one (title, fact) pair.
///
/// `target_url` is the canonical page link appended in the two lower tiers.
/// The title hashtag is appended last, only when the result still fits.
pub fn compose(title: &str, fact: &str, target_url: &str) -> Composition {
    let len = composite_len(title, fact);
    let body = match len {
        0..=15 => return Composition::TooShort { len },
        16..=101 => format!(
            "{}: {} {} {} {}",
            title, fact, TAG_MOVIE, TAG_TRIVIA, target_url
        ),
        102..=115 => format!("{}: {} {} {}", title, fact, TAG_TRIVIA, target_url),
        116..=138 => format!("{}: {}", title, fact),
        _ => return Composition::TooLong { len },
    };

    let text = append_title_hashtag(body, title);
    let weighted = weighted_len(&text);
    if weighted > TWEET_LIMIT {
        return Composition::OverLimit { weighted };
    }
    Composition::Ready(Tweet { text })
}

/// Append the title hashtag when the message stays within the limit.
/// A bare `#` (empty title) is never appended.
fn append_title_hashtag(mut text: String, title: &str) -> String {
    let tag = title_hashtag(title);
    if tag.chars().count() > 1
        && weighted_len(&text) + 1 + tag.chars().count() <= TWEET_LIMIT
    {
        text.push(' ');
        text.push_str(&tag);
    }
    text
}
