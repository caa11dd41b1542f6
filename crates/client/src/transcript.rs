//! Client-local chat transcript.
//!
//! Messages are kept in the order they were exchanged. The transcript is
//! bounded: once `capacity` messages are held, each append evicts the oldest.

use cdss_core::config;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

#[derive(Debug, Clone)]
pub struct Transcript {
    messages: VecDeque<Message>,
    capacity: usize,
}

impl Default for Transcript {
    fn default() -> Self {
        Self::with_capacity(config::TRANSCRIPT_CAPACITY)
    }
}

impl Transcript {
    /// A capacity of 0 is treated as 1.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            messages: VecDeque::with_capacity(capacity.min(config::TRANSCRIPT_CAPACITY)),
            capacity,
        }
    }

    pub fn push(&mut self, role: Role, content: impl Into<String>) {
        if self.messages.len() == self.capacity {
            self.messages.pop_front();
        }
        self.messages.push_back(Message {
            role,
            content: content.into(),
        });
    }

    pub fn iter(&self) -> impl Iterator<Item = &Message> + '_ {
        self.messages.iter()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
