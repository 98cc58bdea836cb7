// Transcript parser: chat export lines to ordered messages.
//
// Two header shapes are recognized:
//   Android: "1/1/25, 12:34 - John Doe: Hello there"
//   iOS:     "[01/01/2025, 12:34:56] John Doe: Hello there"
//
// Any other non-empty line continues the previous message. Parsing is
// best-effort and never fails: export formats vary too much between
// platforms, locales and app versions to reject input.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use tracing::debug;

use super::message::Message;

// `\d` and `\s` are Unicode classes: Arabic-locale exports use Eastern
// Arabic digits, and some exports separate fields with non-breaking spaces.

/// Android-style header: unbracketed date/time, hyphen before the sender.
static ANDROID_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2}/\d{1,2}/\d{2,4}),\s+(\d{1,2}:\d{2})\s+-\s+(.*?):\s+(.*)$")
        .expect("android header pattern is valid")
});

/// iOS-style header: bracketed date/time with optional seconds.
static IOS_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[(\d{1,2}/\d{1,2}/\d{2,4}),\s+(\d{1,2}:\d{2}(?::\d{2})?)\]\s+(.*?):\s+(.*)$")
        .expect("ios header pattern is valid")
});

/// Byte-order mark and bidi marks that exports prepend to RTL lines.
const LEADING_MARKS: [char; 3] = ['\u{feff}', '\u{200e}', '\u{200f}'];

/// Trim whitespace, then strip any leading BOM/bidi marks.
fn clean_line(raw: &str) -> &str {
    raw.trim().trim_start_matches(&LEADING_MARKS[..])
}

/// Match a cleaned line against the known header shapes, bracketed first.
fn match_header(line: &str) -> Option<Message> {
    let caps = IOS_HEADER
        .captures(line)
        .or_else(|| ANDROID_HEADER.captures(line))?;
    Some(message_from_captures(&caps))
}

fn message_from_captures(caps: &Captures<'_>) -> Message {
    let group = |i: usize| caps.get(i).map_or("", |m| m.as_str());
    Message::new(
        format!("{} {}", group(1), group(2)),
        group(3),
        group(4),
    )
}

/// Parse export lines into messages, preserving transcript order.
///
/// Lines that don't start a message are appended (space-joined) to the most
/// recent one. Continuation lines seen before any header are discarded.
pub fn parse_lines<I>(lines: I) -> Vec<Message>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut messages: Vec<Message> = Vec::new();
    let mut continuations = 0usize;
    let mut orphans = 0usize;

    for raw in lines {
        let line = clean_line(raw.as_ref());
        if line.is_empty() {
            continue;
        }

        if let Some(message) = match_header(line) {
            messages.push(message);
            continue;
        }

        match messages.last_mut() {
            Some(last) => {
                last.append_line(line);
                continuations += 1;
            }
            None => orphans += 1,
        }
    }

    debug!(
        messages = messages.len(),
        continuations, orphans, "Parsed transcript lines"
    );

    messages
}

/// Parse a whole export held in memory.
pub fn parse_text(raw: &str) -> Vec<Message> {
    parse_lines(raw.lines())
}
