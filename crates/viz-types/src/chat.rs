//! AI chat conversations attached to a viz.
//!
//! Chats are keyed by [`VizChatId`] the same way files are keyed by
//! `VizFileId`. Messages inside one chat are the exception: they form an
//! ordered sequence, and reordering them yields a different conversation.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::ids::{VizChatId, VizChatMessageId, generate_viz_chat_message_id};
use crate::timestamp::VizTimestamp;

/// Role of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum VizChatMessageRole {
    User,
    Assistant,
}

/// A single message in a chat conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VizChatMessage {
    pub role: VizChatMessageRole,
    pub content: String,
    pub timestamp: VizTimestamp,
    /// Absent on messages written before ids were assigned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub id: Option<VizChatMessageId>,
}

impl VizChatMessage {
    /// A new message with a freshly generated id.
    pub fn new(role: VizChatMessageRole, content: impl Into<String>, timestamp: VizTimestamp) -> Self {
        Self {
            role,
            content: content.into(),
            timestamp,
            id: Some(generate_viz_chat_message_id()),
        }
    }
}

/// A single AI chat conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct VizChat {
    pub id: VizChatId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub title: Option<String>,
    /// Conversation history, oldest first.
    pub messages: Vec<VizChatMessage>,
    pub created_at: VizTimestamp,
    pub updated_at: VizTimestamp,
    /// Working notes the assistant writes while it streams a reply.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub ai_scratchpad: Option<String>,
    /// Progress text shown while the assistant is working.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub ai_status: Option<String>,
}

impl VizChat {
    pub fn new(id: VizChatId, now: VizTimestamp) -> Self {
        Self {
            id,
            title: None,
            messages: Vec::new(),
            created_at: now,
            updated_at: now,
            ai_scratchpad: None,
            ai_status: None,
        }
    }

    /// Append a message. `updated_at` moves forward to the message's
    /// timestamp, never backward.
    pub fn push_message(&mut self, message: VizChatMessage) {
        if message.timestamp > self.updated_at {
            self.updated_at = message.timestamp;
        }
        self.messages.push(message);
    }

    pub fn last_message(&self) -> Option<&VizChatMessage> {
        self.messages.last()
    }

    /// Unset the streaming side channel once a reply is complete.
    pub fn clear_ai_progress(&mut self) {
        self.ai_scratchpad = None;
        self.ai_status = None;
    }
}

/// The AI chats of a viz, keyed by chat id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct VizChats(HashMap<VizChatId, VizChat>);

impl VizChats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, id: &VizChatId) -> Option<&VizChat> {
        self.0.get(id)
    }

    pub fn get_mut(&mut self, id: &VizChatId) -> Option<&mut VizChat> {
        self.0.get_mut(id)
    }

    /// Insert under the chat's own id, returning any chat it replaced.
    pub fn insert(&mut self, chat: VizChat) -> Option<VizChat> {
        self.0.insert(chat.id.clone(), chat)
    }

    pub fn remove(&mut self, id: &VizChatId) -> Option<VizChat> {
        self.0.remove(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&VizChatId, &VizChat)> {
        self.0.iter()
    }

    /// The chat updated last. Ties go to the lowest id.
    pub fn most_recently_updated(&self) -> Option<&VizChat> {
        self.0
            .values()
            .max_by(|a, b| a.updated_at.cmp(&b.updated_at).then_with(|| b.id.cmp(&a.id)))
    }
}

impl FromIterator<VizChat> for VizChats {
    fn from_iter<I: IntoIterator<Item = VizChat>>(iter: I) -> Self {
        Self(iter.into_iter().map(|chat| (chat.id.clone(), chat)).collect())
    }
}
