//! Append-only chat transcript.
//!
//! Entries are never edited or removed individually; `reset` is the only way
//! to shrink the log. Sending is split in two halves so the UI can release
//! its borrow while the request is in flight: `begin_send` appends the user
//! entry and hands back the request, `finish_send` appends the reply.

use crate::request::ChatRequest;
use crate::response::ChatResponse;
use crate::role::UserRole;
use chrono::{DateTime, Local};
use log::warn;
use std::fmt::Display;

pub const GREETING: &str = "Hello! I'm JALMITRA, your AI Assistant for groundwater resources. \
I can help you access groundwater data, historical assessments, and provide insights about \
India's dynamic groundwater resources. You can also explore our interactive data visualization \
feature. How can I assist you today?";

pub const CLEARED: &str = "Chat cleared. How can I help you with groundwater data today?";

pub const NO_ANSWER: &str = "Sorry, I couldn't find an answer.";

pub const CONNECTION_ERROR: &str = "⚠️ Error: Could not connect to server.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Author {
    User,
    Bot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Text,
    Error,
    Attachment,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub author: Author,
    pub kind: EntryKind,
    pub content: String,
    pub timestamp: DateTime<Local>,
}

impl Entry {
    /// Wall-clock time shown under the message bubble.
    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transcript {
    entries: Vec<Entry>,
}

impl Default for Transcript {
    fn default() -> Self {
        let mut transcript = Self {
            entries: Vec::new(),
        };
        transcript.push(Author::Bot, EntryKind::Text, GREETING);
        transcript
    }
}

impl Transcript {
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&Entry> {
        self.entries.last()
    }

    fn push(&mut self, author: Author, kind: EntryKind, content: impl Into<String>) {
        self.entries.push(Entry {
            author,
            kind,
            content: content.into(),
            timestamp: Local::now(),
        });
    }

    /// Drop every entry and start over with a single notice.
    pub fn reset(&mut self) {
        self.entries.clear();
        self.push(Author::Bot, EntryKind::Text, CLEARED);
    }

    pub fn announce_role(&mut self, role: UserRole) {
        let content = format!(
            "Great! I've set your role as {}. {}. How can I help you today?",
            role.title(),
            role.focus()
        );
        self.push(Author::Bot, EntryKind::Text, content);
    }

    pub fn push_attachment(&mut self, file_name: &str) {
        self.push(
            Author::User,
            EntryKind::Attachment,
            format!("Uploaded file: {file_name}"),
        );
    }

    /// Append the user entry and build the request, or do nothing at all
    /// for blank input.
    pub fn begin_send(&mut self, input: &str, role: Option<UserRole>) -> Option<ChatRequest> {
        if input.trim().is_empty() {
            return None;
        }
        self.push(Author::User, EntryKind::Text, input);
        Some(ChatRequest::new(input, role))
    }

    pub fn finish_send<E: Display>(&mut self, result: Result<ChatResponse, E>) {
        match result {
            Ok(response) => {
                let answer = response
                    .final_answer
                    .filter(|a| !a.trim().is_empty())
                    .unwrap_or_else(|| NO_ANSWER.to_string());
                self.push(Author::Bot, EntryKind::Text, answer);
            }
            Err(e) => {
                warn!("chat request failed: {e}");
                self.push(Author::Bot, EntryKind::Error, CONNECTION_ERROR);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_greeting() {
        let t = Transcript::default();
        assert_eq!(t.len(), 1);
        assert_eq!(t.entries()[0].author, Author::Bot);
        assert_eq!(t.entries()[0].content, GREETING);
    }

    #[test]
    fn blank_input_is_noop() {
        let mut t = Transcript::default();
        let before = t.clone();
        assert!(t.begin_send("", None).is_none());
        assert!(t.begin_send("   \n", Some(UserRole::Farmer)).is_none());
        assert_eq!(t, before);
    }

    #[test]
    fn send_round_trip_appends_in_order() {
        let mut t = Transcript::default();
        let request = t
            .begin_send("Over-exploited areas in Punjab", Some(UserRole::Policymaker))
            .unwrap();
        assert_eq!(request.role, "policymaker");
        assert_eq!(t.last().unwrap().author, Author::User);

        t.finish_send::<String>(Ok(ChatResponse {
            final_answer: Some("Several blocks in Sangrur are over-exploited.".to_string()),
        }));
        assert_eq!(t.len(), 3);
        let last = t.last().unwrap();
        assert_eq!(last.author, Author::Bot);
        assert_eq!(last.kind, EntryKind::Text);
        assert!(last.content.contains("Sangrur"));
        assert!(t.entries()[1].timestamp <= last.timestamp);
    }

    #[test]
    fn missing_answer_uses_fallback() {
        let mut t = Transcript::default();
        t.begin_send("hello", None);
        t.finish_send::<String>(Ok(ChatResponse { final_answer: None }));
        assert_eq!(t.last().unwrap().content, NO_ANSWER);
    }

    #[test]
    fn failure_appends_error_entry() {
        let mut t = Transcript::default();
        t.begin_send("hello", None);
        t.finish_send(Err("connection refused"));
        let last = t.last().unwrap();
        assert_eq!(last.kind, EntryKind::Error);
        assert_eq!(last.content, CONNECTION_ERROR);
    }

    #[test]
    fn reset_leaves_single_notice() {
        let mut t = Transcript::default();
        t.begin_send("one", None);
        t.push_attachment("wells.csv");
        t.reset();
        assert_eq!(t.len(), 1);
        assert_eq!(t.entries()[0].content, CLEARED);
    }

    #[test]
    fn role_announcement_mentions_focus() {
        let mut t = Transcript::default();
        t.announce_role(UserRole::Farmer);
        let content = &t.last().unwrap().content;
        assert!(content.starts_with("Great! I've set your role as Farmer."));
        assert!(content.contains("irrigation guidance"));
    }

    #[test]
    fn attachment_is_user_entry() {
        let mut t = Transcript::default();
        t.push_attachment("levels.xlsx");
        let last = t.last().unwrap();
        assert_eq!(last.author, Author::User);
        assert_eq!(last.kind, EntryKind::Attachment);
        assert_eq!(last.content, "Uploaded file: levels.xlsx");
        assert_eq!(last.time_label().len(), 8);
    }
}
