// Message: a single chat message as it appears in an export.

use serde::Serialize;

/// One message from a group chat export.
///
/// Built by the parser from a header line, then extended with any
/// continuation lines that follow it. Nothing touches it after parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    /// Date and time joined by a space, exactly as matched (e.g. "1/1/25 12:34").
    /// Never parsed as a calendar date.
    pub timestamp: String,
    /// Display name or phone number, verbatim from the export
    pub sender: String,
    /// Message body, possibly joined from several physical lines
    pub text: String,
}

impl Message {
    pub fn new(
        timestamp: impl Into<String>,
        sender: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            sender: sender.into(),
            text: text.into(),
        }
    }

    /// Attach a continuation line to this message's text.
    pub(crate) fn append_line(&mut self, line: &str) {
        self.text.push(' ');
        self.text.push_str(line);
    }
}
