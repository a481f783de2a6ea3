//! Conversation data types.

use serde::{Deserialize, Serialize};

use crate::rag::chunker::{chunk, Segment};

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

/// One entry in the conversation history. Immutable once appended.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub text: String,
    pub created_at: String,
}

impl Message {
    pub(crate) fn user(text: impl Into<String>) -> Self {
        Self::new(Role::User, text)
    }

    pub(crate) fn model(text: impl Into<String>) -> Self {
        Self::new(Role::Model, text)
    }

    fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// The active document: raw text plus its fixed-size segments. Immutable
/// once chunked; replaced wholesale when a new file is loaded.
#[derive(Debug, Clone)]
pub struct Document {
    pub name: String,
    pub raw_text: String,
    pub segments: Vec<Segment>,
}

impl Document {
    pub fn new(name: impl Into<String>, raw_text: impl Into<String>, chunk_size: usize) -> Self {
        let raw_text = raw_text.into();
        let segments = chunk(&raw_text, chunk_size);
        Self {
            name: name.into(),
            raw_text,
            segments,
        }
    }
}
