//! Request and response types for the model endpoint.

use serde::{Deserialize, Serialize};

/// A fully assembled model request: grounding instruction plus the user's
/// question, kept in separate roles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelRequest {
    pub system_instruction: String,
    pub user_question: String,
}

/// Outcome of a single endpoint call. `answer_text` is `None` when the call
/// succeeded at the HTTP level but carried no usable candidate.
#[derive(Debug, Clone)]
pub struct ModelResponse {
    pub answer_text: Option<String>,
}

// Wire format of the generateContent endpoint.

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct GenerateRequest {
    pub contents: Vec<Content>,
    #[serde(rename = "systemInstruction")]
    pub system_instruction: Content,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct Part {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Candidate {
    pub content: Content,
}

impl GenerateRequest {
    pub fn from_model_request(request: &ModelRequest) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: request.user_question.clone(),
                }],
            }],
            system_instruction: Content {
                parts: vec![Part {
                    text: request.system_instruction.clone(),
                }],
            },
        }
    }
}

impl GenerateResponse {
    /// First non-blank candidate text, if any.
    pub fn answer_text(&self) -> Option<String> {
        self.candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.clone())
            .filter(|t| !t.trim().is_empty())
    }
}
