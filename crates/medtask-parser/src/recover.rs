//! Best-effort recovery of a JSON document from raw model output
//!
//! The model is instructed to reply with pure JSON but may surround it with
//! prose, markdown fences, or truncation artifacts. Recovery cuts the text
//! down to the outermost delimiter pair and hands the remainder to the JSON
//! parser. It is a heuristic, not a guarantee; pathological input still
//! fails with a parse diagnostic.

use crate::config::RecoveryMode;
use crate::error::ParserError;
use serde_json::Value;

/// Recover a parseable JSON document from a raw text blob
///
/// Algorithm:
/// 1. Strip leading/trailing whitespace.
/// 2. If the opening delimiter first occurs past position 0, discard
///    everything before it.
/// 3. If the closing delimiter is not the last character, discard
///    everything after its last occurrence (everything, if it never
///    occurs).
/// 4. Parse the remainder.
///
/// With [`RecoveryMode::BraceOnly`] the delimiters are always `{`/`}`,
/// reproducing the historical behavior exactly: a top-level array reply
/// gets cut from its first `{` to its last `}`, which strips the array
/// brackets (see the pinning tests below). [`RecoveryMode::BraceOrBracket`]
/// picks whichever of `{` or `[` occurs first and cuts on the matching
/// pair, leaving array replies intact.
pub fn recover_json(raw: &str, mode: RecoveryMode) -> Result<Value, ParserError> {
    let mut text = raw.trim();

    let (open, close) = delimiters(text, mode);

    if let Some(start) = text.find(open) {
        if start > 0 {
            text = &text[start..];
        }
    }

    if !text.ends_with(close) {
        let end = text.rfind(close).map(|pos| pos + 1).unwrap_or(0);
        text = &text[..end];
    }

    serde_json::from_str(text).map_err(|e| ParserError::InvalidJson(e.to_string()))
}

fn delimiters(text: &str, mode: RecoveryMode) -> (char, char) {
    match mode {
        RecoveryMode::BraceOnly => ('{', '}'),
        RecoveryMode::BraceOrBracket => {
            let brace = text.find('{');
            let bracket = text.find('[');
            match (brace, bracket) {
                (Some(b), Some(k)) if k < b => ('[', ']'),
                (None, Some(_)) => ('[', ']'),
                _ => ('{', '}'),
            }
        }
    }
}
