// src/readme/markdown.rs
// =============================================================================
// This module analyzes README markdown to find display content.
//
// We use the `pulldown-cmark` crate which:
// - Parses Markdown into events (heading, paragraph, html, etc.)
// - Follows the CommonMark specification
// - Is fast and memory-efficient (it's a streaming parser)
//
// We walk the README as a sequence of block-level tokens (paragraphs and
// raw HTML blocks, each with its source text) and extract two things:
// - the first prose paragraph, used for the project description
// - the first image or video reference, used as the project's hero media
//
// "Hero media" is a first-match policy on purpose: one representative
// image or video per README, not an inventory of everything embedded.
//
// Rust concepts:
// - Iterators: For processing sequences of parser events
// - Pattern matching: To identify paragraph and HTML events
// - Option<T>: "found media" vs "nothing usable in this README"
// =============================================================================

use once_cell::sync::Lazy;
use pulldown_cmark::{Event, Parser, Tag};
use regex::Regex;
use serde::Serialize;
use std::ops::Range;

// What kind of media a README reference points at
//
// Serializes lowercase ("image" / "video") for the JSON output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

// A media reference discovered in a README
//
// The URL is exactly as written in the markdown - it may still be
// relative and need absolutizing (see readme::absolutize)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Media {
    pub url: String,
    pub kind: MediaKind,
}

// Markdown image syntax or an <img> tag's src attribute
// One alternation so matches come back in source order, like a single scan
static IMAGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)!\[[^\]]*\]\(\s*([^)\s]+)|<img[^>]+src=["']([^"']+)["']"#).unwrap());

// A <video> tag's src attribute
static VIDEO_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)<video[^>]+src=["']([^"']+)["']"#).unwrap());

// An <iframe> tag's src attribute (filtered to known video hosts below)
static IFRAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)<iframe[^>]+src=["']([^"']+)["']"#).unwrap());

// The kind of block token we scan for content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockKind {
    Paragraph,
    Html,
}

// Splits markdown into top-level block tokens, each carrying the byte
// range of its source text
//
// We only keep the two kinds of block that can carry display content:
// prose paragraphs and raw HTML blocks. Paragraphs nested inside lists
// or blockquotes are container content, not top-level blocks, so they
// are skipped (matching how a block lexer tokenizes a README).
fn block_tokens(markdown: &str) -> Vec<(BlockKind, Range<usize>)> {
    let mut blocks: Vec<(BlockKind, Range<usize>)> = Vec::new();

    // Depth inside list/blockquote containers (0 = top level)
    let mut container_depth = 0usize;
    // Whether we're between Start(Paragraph) and End(Paragraph);
    // inline HTML inside a paragraph is covered by the paragraph's own
    // range and must not become a second token
    let mut in_paragraph = false;

    // into_offset_iter() gives us each event together with the byte range
    // of the source text that produced it
    for (event, range) in Parser::new(markdown).into_offset_iter() {
        match event {
            Event::Start(Tag::List(_)) | Event::Start(Tag::BlockQuote) => {
                container_depth += 1;
            }
            Event::End(Tag::List(_)) | Event::End(Tag::BlockQuote) => {
                container_depth = container_depth.saturating_sub(1);
            }
            Event::Start(Tag::Paragraph) => {
                in_paragraph = true;
                if container_depth == 0 {
                    blocks.push((BlockKind::Paragraph, range));
                }
            }
            Event::End(Tag::Paragraph) => {
                in_paragraph = false;
            }
            Event::Html(_) if container_depth == 0 && !in_paragraph => {
                // The parser emits one Html event per source line; merge
                // adjacent lines back into a single block token so a tag
                // split across lines can still be matched
                match blocks.last_mut() {
                    Some((BlockKind::Html, last)) if last.end == range.start => {
                        last.end = range.end;
                    }
                    _ => blocks.push((BlockKind::Html, range)),
                }
            }
            _ => {}
        }
    }

    blocks
}

// Returns the source text of the first top-level paragraph, or "" if the
// README has none
//
// The text still contains inline markdown (links, emphasis) - stripping
// happens later in readme::clean
pub fn first_paragraph(markdown: &str) -> String {
    block_tokens(markdown)
        .into_iter()
        .find(|(kind, _)| *kind == BlockKind::Paragraph)
        .map(|(_, range)| markdown[range].trim().to_string())
        .unwrap_or_default()
}

// Finds the first usable media reference in a README
//
// Scans block tokens in document order. Within one token, all image
// matches are tried first, then <video> tags, then <iframe> embeds.
// The scan stops at the first token that yields an accepted match.
//
// Returns: Some(Media) with the URL as written, or None if no token
// contains an acceptable reference
pub fn first_media(markdown: &str) -> Option<Media> {
    for (_, range) in block_tokens(markdown) {
        let raw = &markdown[range];

        for caps in IMAGE_RE.captures_iter(raw) {
            // Group 1 = markdown image, group 2 = <img> tag
            let url = caps.get(1).or_else(|| caps.get(2)).map(|m| m.as_str());
            if let Some(url) = url.filter(|u| is_displayable(u)) {
                return Some(Media {
                    url: url.to_string(),
                    kind: MediaKind::Image,
                });
            }
        }

        for caps in VIDEO_RE.captures_iter(raw) {
            if let Some(url) = caps.get(1).map(|m| m.as_str()).filter(|u| is_displayable(u)) {
                return Some(Media {
                    url: url.to_string(),
                    kind: MediaKind::Video,
                });
            }
        }

        for caps in IFRAME_RE.captures_iter(raw) {
            // Only embeds from known video hosts count as project media
            let url = caps.get(1).map(|m| m.as_str()).filter(|u| is_video_host(u));
            if let Some(url) = url {
                return Some(Media {
                    url: url.to_string(),
                    kind: MediaKind::Video,
                });
            }
        }
    }

    None
}

// A URL we can point the presentation layer at: absolute (http/https),
// root-relative (/...), or repo-relative (./...)
//
// Repo-relative and root-relative paths are rewritten against the
// repository's raw-content host before display
fn is_displayable(url: &str) -> bool {
    url.starts_with("http") || url.starts_with('/') || url.starts_with("./")
}

// Embed URLs we recognize as video players
fn is_video_host(url: &str) -> bool {
    url.contains("youtube") || url.contains("youtu.be") || url.contains("vimeo")
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is into_offset_iter()?
//    - The normal parser iterator gives you events only
//    - The offset iterator pairs each event with a Range<usize> telling
//      you which bytes of the input produced it
//    - That lets us recover the raw source of each block token
//
// 2. What is Lazy<Regex>?
//    - Compiling a regex costs time, so we do it once
//    - once_cell::sync::Lazy runs the closure on first access and caches
//      the result for the rest of the program
//
// 3. What does .filter() on an Option do?
//    - Some(value) stays Some only if the predicate returns true
//    - Lets us combine "did the regex capture?" and "is the URL usable?"
//      into one check
//
// 4. Why return Option<Media> instead of an empty URL?
//    - "No media found" is a real outcome that callers branch on
//      (a repository without media is excluded from the portfolio)
//    - An Option makes that outcome impossible to confuse with a
//      legitimate value
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_paragraph_skips_heading() {
        let markdown = "# Title\n\nThis is the intro paragraph.\n\nSecond paragraph.";
        assert_eq!(first_paragraph(markdown), "This is the intro paragraph.");
    }

    #[test]
    fn test_first_paragraph_empty_readme() {
        assert_eq!(first_paragraph(""), "");
        assert_eq!(first_paragraph("# Only a heading"), "");
    }

    #[test]
    fn test_first_media_relative_markdown_image() {
        let markdown = "# Demo\n\n![alt](./img/shot.png)\n";
        let media = first_media(markdown).unwrap();
        assert_eq!(media.url, "./img/shot.png");
        assert_eq!(media.kind, MediaKind::Image);
    }

    #[test]
    fn test_first_media_img_tag() {
        let markdown = "<img width=\"600\" src=\"https://example.com/shot.png\">\n";
        let media = first_media(markdown).unwrap();
        assert_eq!(media.url, "https://example.com/shot.png");
        assert_eq!(media.kind, MediaKind::Image);
    }

    #[test]
    fn test_first_media_video_in_later_paragraph() {
        let markdown = "Some intro text with no media.\n\n<video src=\"https://x/y.mp4\"></video>\n";
        let media = first_media(markdown).unwrap();
        assert_eq!(media.url, "https://x/y.mp4");
        assert_eq!(media.kind, MediaKind::Video);
    }

    #[test]
    fn test_first_media_image_beats_video_in_same_token() {
        // Within one token, image matches win even when a video appears first
        let markdown = "<video src=\"https://x/y.mp4\"></video> <img src=\"https://x/z.png\">\n";
        let media = first_media(markdown).unwrap();
        assert_eq!(media.kind, MediaKind::Image);
        assert_eq!(media.url, "https://x/z.png");
    }

    #[test]
    fn test_first_media_earlier_token_wins() {
        // The scan stops at the first token with an accepted match, so a
        // video in paragraph one beats an image in paragraph two
        let markdown = "<video src=\"/demo.mp4\"></video>\n\n![later](https://x/late.png)\n";
        let media = first_media(markdown).unwrap();
        assert_eq!(media.kind, MediaKind::Video);
        assert_eq!(media.url, "/demo.mp4");
    }

    #[test]
    fn test_first_media_skips_unacceptable_urls() {
        // "img/shot.png" has no ./ or / prefix and no scheme - rejected,
        // and the scan moves on to the next candidate in the same token
        let markdown = "![bad](img/shot.png) ![good](https://example.com/ok.png)\n";
        let media = first_media(markdown).unwrap();
        assert_eq!(media.url, "https://example.com/ok.png");
    }

    #[test]
    fn test_first_media_iframe_needs_video_host() {
        let markdown = "<iframe src=\"https://example.com/ad\"></iframe>\n";
        assert!(first_media(markdown).is_none());

        let markdown = "<iframe src=\"https://www.youtube.com/embed/abc123\"></iframe>\n";
        let media = first_media(markdown).unwrap();
        assert_eq!(media.kind, MediaKind::Video);
        assert_eq!(media.url, "https://www.youtube.com/embed/abc123");
    }

    #[test]
    fn test_first_media_multiline_html_block() {
        let markdown = "<p align=\"center\">\n  <img src=\"/assets/banner.png\">\n</p>\n";
        let media = first_media(markdown).unwrap();
        assert_eq!(media.url, "/assets/banner.png");
        assert_eq!(media.kind, MediaKind::Image);
    }

    #[test]
    fn test_first_media_none_in_plain_readme() {
        let markdown = "# Project\n\nJust text, no screenshots here.\n";
        assert!(first_media(markdown).is_none());
    }

    #[test]
    fn test_badge_images_in_list_are_ignored() {
        // Media inside list items is container content, not a block token
        let markdown = "- ![badge](https://img.shields.io/x.svg)\n\n![hero](https://x/hero.png)\n";
        let media = first_media(markdown).unwrap();
        assert_eq!(media.url, "https://x/hero.png");
    }
}
