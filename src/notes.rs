//! Text helpers for note pages.
//!
//! Escaping, Markdown rendering, random path generation and the relative
//! "last modified" timestamp.

use pulldown_cmark::{Options, Parser};
use rand::Rng;

use crate::models::Mode;

// ============================================================================
// Text Escaping
// ============================================================================

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Quote a string as a JavaScript literal safe to place inside `<script>`.
pub fn js_string(s: &str) -> String {
    serde_json::to_string(s)
        .unwrap_or_else(|_| "\"\"".to_string())
        .replace("</", "<\\/")
        .replace('\u{2028}', "\\u2028")
        .replace('\u{2029}', "\\u2029")
}

// ============================================================================
// Preview Rendering
// ============================================================================

pub fn render_markdown(content: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    let parser = Parser::new_ext(content, options);
    let mut html_output = String::new();
    pulldown_cmark::html::push_html(&mut html_output, parser);
    // Raw HTML inside Markdown is untrusted
    ammonia::clean(&html_output)
}

/// Plain notes keep their line breaks; everything else is escaped.
pub fn render_plain(content: &str) -> String {
    html_escape(content).replace('\n', "<br>")
}

pub fn render_preview(content: &str, mode: Mode) -> String {
    match mode {
        Mode::Md => render_markdown(content),
        Mode::Plain => render_plain(content),
    }
}

// ============================================================================
// Paths
// ============================================================================

const PATH_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Random lowercase alphanumeric note path. Collisions are not checked.
pub fn random_path(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len.max(1))
        .map(|_| PATH_CHARS[rng.gen_range(0..PATH_CHARS.len())] as char)
        .collect()
}

// ============================================================================
// Relative Time
// ============================================================================

/// Human-readable distance from `then` to `now`, e.g. "3 minutes ago".
pub fn relative_time(then: i64, now: i64) -> String {
    let secs = (now - then).max(0);
    let minutes = secs / 60;
    let hours = minutes / 60;
    let days = hours / 24;

    match secs {
        s if s < 45 => "a few seconds ago".to_string(),
        s if s < 90 => "a minute ago".to_string(),
        _ if minutes < 45 => format!("{} minutes ago", (secs + 30) / 60),
        _ if minutes < 90 => "an hour ago".to_string(),
        _ if hours < 22 => format!("{} hours ago", (minutes + 30) / 60),
        _ if hours < 36 => "a day ago".to_string(),
        _ if days < 26 => format!("{} days ago", (hours + 12) / 24),
        _ if days < 46 => "a month ago".to_string(),
        _ if days < 320 => format!("{} months ago", ((days + 15) / 30).max(2)),
        _ if days < 548 => "a year ago".to_string(),
        _ => format!("{} years ago", ((days + 182) / 365).max(2)),
    }
}
