//! Keystroke buffering.
//!
//! # Responsibilities
//! - Keep the last few characters typed on a page
//! - Extract the text after the last marker as a shortcut candidate
//!
//! # Design Decisions
//! - Bounded: only the last `MAX_BUFFER_CHARS` characters are kept
//! - Enter and Escape end a word and clear the buffer
//! - A candidate is only emitted after a character is appended

use std::collections::VecDeque;

use crate::watcher::message::{MessageResponse, PageMessage};

/// Characters retained by the buffer.
pub const MAX_BUFFER_CHARS: usize = 20;

/// A key press as reported by the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Backspace,
    Enter,
    Escape,
    /// Function, modifier and navigation keys.
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_dom(name: &str) -> Self {
        match name {
            "Backspace" => Key::Backspace,
            "Enter" => Key::Enter,
            "Escape" => Key::Escape,
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Char(c),
                    _ => Key::Other,
                }
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct KeystrokeBuffer {
    marker: char,
    chars: VecDeque<char>,
}

impl KeystrokeBuffer {
    pub fn new(marker: char) -> Self {
        Self {
            marker,
            chars: VecDeque::with_capacity(MAX_BUFFER_CHARS + 1),
        }
    }

    /// Feed one key press; returns a message when a candidate token is present.
    pub fn push(&mut self, key: Key) -> Option<PageMessage> {
        match key {
            Key::Enter | Key::Escape => {
                self.chars.clear();
                None
            }
            Key::Backspace => {
                self.chars.pop_back();
                None
            }
            Key::Other => None,
            Key::Char(c) => {
                self.chars.push_back(c);
                while self.chars.len() > MAX_BUFFER_CHARS {
                    self.chars.pop_front();
                }
                self.candidate()
                    .map(|text| PageMessage::CheckShortcut { text })
            }
        }
    }

    /// Apply the engine's reply; a successful shortcut clears the buffer.
    pub fn acknowledge(&mut self, response: MessageResponse) {
        if response.success {
            self.chars.clear();
        }
    }

    /// Text after the last marker, if any.
    pub fn candidate(&self) -> Option<String> {
        let at = self.chars.iter().rposition(|&c| c == self.marker)?;
        let text: String = self.chars.iter().skip(at + 1).collect();
        (!text.is_empty()).then_some(text)
    }

    pub fn contents(&self) -> String {
        self.chars.iter().collect()
    }
}
