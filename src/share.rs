//! Share codec: score <-> URL query parameter, plus outbound share links.
//!
//! Decoding is deliberately forgiving: a missing, non-numeric, or
//! out-of-range `score` parameter is treated as absent, never as an error.
//! Encoding of dynamic URL segments matches JS `encodeURIComponent`
//! (everything percent-encoded except ASCII alphanumerics and
//! `- _ . ! ~ * ' ( )`).

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::constants::SCORE_PARAM;

/// `encodeURIComponent` equivalent encode set.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode one dynamic URL segment.
pub fn encode_component(segment: &str) -> String {
    utf8_percent_encode(segment, COMPONENT).to_string()
}

/// Build the shareable link for a committed (or absent) score.
///
/// `shareable_links` selects the profile: the shareable profile appends
/// `?score=N` once a score is committed; the live-page profile always
/// shares the base address verbatim (it relies on the live page, not a
/// parameterized one).
pub fn share_link(base_url: &str, score: Option<u32>, shareable_links: bool) -> String {
    match score {
        Some(s) if shareable_links => format!("{base_url}?{SCORE_PARAM}={s}"),
        _ => base_url.to_string(),
    }
}

/// Decode a shared score from a raw query string (`"?score=55"` or
/// `"score=55"`). Accepts only a finite numeric value within `[0, max]`
/// inclusive, judged before rounding; the accepted value is rounded to the
/// nearest integer (so `"55.6"` decodes to 56). Everything else is absent.
pub fn decode_score(query: Option<&str>, max: u32) -> Option<u32> {
    let raw = query_param(query?, SCORE_PARAM)?;
    if raw.is_empty() {
        return None;
    }
    let parsed: f64 = raw.parse().ok()?;
    if !parsed.is_finite() || parsed < 0.0 || parsed > max as f64 {
        return None;
    }
    Some(parsed.round() as u32)
}

/// Extract one parameter value from a query string, percent-decoded.
fn query_param(query: &str, name: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    for pair in query.split('&') {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        if key == name {
            return Some(percent_decode_str(value).decode_utf8_lossy().into_owned());
        }
    }
    None
}

/// Human-readable share sentence. `denominator` is the enabled-question
/// count (100 for the canonical catalog).
pub fn share_text(score: Option<u32>, denominator: u32) -> String {
    match score {
        Some(s) => format!("I scored {s}/{denominator} on this purity test."),
        None => "Check your score on this purity test.".to_string(),
    }
}

/// SMS deep link with a pre-filled body of text + link.
pub fn sms_href(text: &str, link: &str) -> String {
    let body = format!("{text} {link}");
    format!("sms:?&body={}", encode_component(body.trim()))
}

/// Social intent link with separate text and url parameters.
pub fn intent_href(text: &str, link: &str) -> String {
    format!(
        "https://twitter.com/intent/tweet?text={}&url={}",
        encode_component(text),
        encode_component(link)
    )
}
