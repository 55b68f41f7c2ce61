// src/readme/sanitize.rs
// =============================================================================
// This module turns a README paragraph into a short display description.
//
// Two steps:
// 1. Strip inline markdown so only plain text remains
//    (links reduced to their label, then bold, italic, inline code)
// 2. Trim and truncate to a bounded length at a word boundary, with an
//    ellipsis marker when anything was cut off
//
// Rust concepts:
// - Regex::replace_all: Single non-overlapping pass per pattern
// - char_indices: Finding a safe byte position in UTF-8 text
// =============================================================================

use once_cell::sync::Lazy;
use regex::Regex;

// Longest description we emit before cutting at a word boundary
const MAX_DESCRIPTION_LEN: usize = 150;

// [label](url) -> label
static LINK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\]]+)\]\([^)]*\)").unwrap());
// **bold** -> bold
static BOLD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*([^*]+)\*\*").unwrap());
// *italic* -> italic
static ITALIC_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*([^*]+)\*").unwrap());
// `code` -> code
static CODE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`([^`]+)`").unwrap());

// Cleans extracted paragraph text for display
//
// Order matters: links are unwrapped before emphasis so that bold link
// labels like **[x](y)** come out as plain text, and bold before italic
// so ** pairs aren't half-eaten by the single-star pattern.
pub fn clean(text: &str) -> String {
    let text = LINK_RE.replace_all(text, "$1");
    let text = BOLD_RE.replace_all(&text, "$1");
    let text = ITALIC_RE.replace_all(&text, "$1");
    let text = CODE_RE.replace_all(&text, "$1");

    let mut cleaned = text.trim().to_string();
    if cleaned.chars().count() <= MAX_DESCRIPTION_LEN {
        return cleaned;
    }

    // Cut after MAX_DESCRIPTION_LEN characters (not bytes - this text is
    // UTF-8 and a byte index could land mid-character)
    let cut = cleaned
        .char_indices()
        .nth(MAX_DESCRIPTION_LEN)
        .map(|(i, _)| i)
        .unwrap_or(cleaned.len());
    cleaned.truncate(cut);

    // Back up to the last space so we never split a word in half
    let trimmed_len = cleaned.trim_end().len();
    cleaned.truncate(trimmed_len);
    if let Some(last_space) = cleaned.rfind(' ') {
        cleaned.truncate(last_space);
    }

    let trimmed_len = cleaned.trim_end().len();
    cleaned.truncate(trimmed_len);
    cleaned.push_str("...");
    cleaned
}
