//! Free-text description normalization.

use std::sync::LazyLock;

use feedlens_core::Result;
use regex::Regex;

use crate::bucket::{AgeBucket, bucket_age, bucket_time, parse_clock};

static AGE_PHRASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d+) years old\b").expect("age pattern is valid"));

static CLOCK_STAMP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{2}:\d{2}:\d{2}\.\d+\b").expect("clock pattern is valid"));

/// Replaces the first age mention and the first timestamp mention in a
/// description with their bucket labels, leaving the rest untouched.
///
/// The first match of each kind drives the label choice; the label is then
/// substituted for every occurrence of the matched literal text, not just
/// the first position. Identical substrings with different intended
/// meanings therefore receive the same label. Age substitution runs before
/// time substitution.
///
/// Empty input returns empty. Re-running on an already-normalized string
/// is a no-op, since bucket labels never match either pattern.
///
/// # Errors
///
/// A timestamp that matches the pattern but is not a valid clock time
/// (for example `25:00:00.0`) fails with a parse error.
pub fn normalize(description: &str) -> Result<String> {
    if description.is_empty() {
        return Ok(String::new());
    }

    let mut text = description.to_owned();

    if let Some(found) = AGE_PHRASE.captures(&text) {
        let phrase = found[0].to_owned();
        // Digit runs that overflow an integer count as no age at all.
        let bucket = found[1]
            .parse::<i64>()
            .map(bucket_age)
            .unwrap_or(AgeBucket::Unknown);
        text = text.replace(&phrase, bucket.as_str());
    }

    if let Some(found) = CLOCK_STAMP.find(&text) {
        let stamp = found.as_str().to_owned();
        let bucket = bucket_time(parse_clock(&stamp)?);
        text = text.replace(&stamp, bucket.as_str());
    }

    Ok(text)
}
