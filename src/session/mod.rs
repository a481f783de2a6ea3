//! Conversation state machine.
//!
//! [`ChatSession`] owns the per-session conversation state and funnels every
//! mutation through its transition methods: document loads and query
//! submissions. At most one model request is in flight at a time, enforced
//! by the pending-request gate; a document load while a request is pending
//! invalidates the eventual response via a generation counter.

pub mod types;

use std::path::Path;

use tokio::sync::Mutex;

use crate::config::ChatConfig;
use crate::error::ChatError;
use crate::ingest;
use crate::llm::gemini::GeminiProvider;
use crate::llm::invoker::ResilientInvoker;
use crate::llm::provider::LlmProvider;
use crate::rag::prompt::build_prompt;
use crate::rag::selector::{ContextSelector, FirstSegmentSelector};

pub use types::{Document, Message, Role};

/// Fixed apology appended to the conversation when the retry budget runs
/// out.
pub const APOLOGY_TEXT: &str = "Sorry, something went wrong while answering. Please try again.";

/// Primary session status, derived from the conversation state. An error
/// overlay (`last_error`) can coexist with any of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    NoDocument,
    DocumentReady,
    AwaitingResponse,
}

/// How an accepted query settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome {
    /// The model answered and the reply was appended to history.
    Answered(String),
    /// The response arrived after the document was replaced and was
    /// discarded without touching the new conversation.
    Superseded,
}

#[derive(Debug, Default)]
struct ConversationState {
    document: Option<Document>,
    history: Vec<Message>,
    pending_request: bool,
    last_error: Option<String>,
    generation: u64,
}

/// A single-user document chat session.
///
/// The state lock is held only for synchronous bookkeeping, never across
/// the network call or the backoff sleeps.
pub struct ChatSession<P> {
    invoker: ResilientInvoker<P>,
    selector: Box<dyn ContextSelector>,
    chunk_size: usize,
    state: Mutex<ConversationState>,
}

impl ChatSession<GeminiProvider> {
    /// Session wired to the HTTP endpoint described by `config`.
    pub fn from_config(config: &ChatConfig) -> Self {
        Self::new(GeminiProvider::new(&config.endpoint), config)
    }
}

impl<P: LlmProvider> ChatSession<P> {
    pub fn new(provider: P, config: &ChatConfig) -> Self {
        Self {
            invoker: ResilientInvoker::new(provider).with_policy(config.retry.clone()),
            selector: Box::new(FirstSegmentSelector),
            chunk_size: config.chunk_size,
            state: Mutex::new(ConversationState::default()),
        }
    }

    /// Replace the shipped first-segment policy with another selector.
    pub fn with_selector(mut self, selector: Box<dyn ContextSelector>) -> Self {
        self.selector = selector;
        self
    }

    /// Load a document from raw text.
    ///
    /// Rejects unsupported file names without touching existing state. On
    /// success the previous document, history, and any in-flight request
    /// are all superseded: history restarts with a confirmation message.
    pub async fn load_document(&self, name: &str, text: &str) -> Result<(), ChatError> {
        if !ingest::is_supported(name) {
            return Err(ChatError::UnsupportedFormat(ingest::extension(name)));
        }

        let document = Document::new(name, text, self.chunk_size);
        let confirmation = format!(
            "Loaded \"{}\" ({} segments). Ask me anything about it.",
            name,
            document.segments.len()
        );

        let mut state = self.state.lock().await;
        state.generation += 1;
        state.pending_request = false;
        state.last_error = None;
        state.history = vec![Message::model(confirmation)];
        tracing::info!(
            name,
            segments = document.segments.len(),
            chars = document.raw_text.chars().count(),
            "document loaded"
        );
        state.document = Some(document);
        Ok(())
    }

    /// Read a document from disk and load it.
    pub async fn load_document_from_path(&self, path: &Path) -> Result<(), ChatError> {
        let ingested = ingest::read_document(path)?;
        self.load_document(&ingested.name, &ingested.text).await
    }

    /// Submit a user question.
    ///
    /// Preconditions (non-blank question, a loaded document, no request in
    /// flight) are checked before any mutation. Once accepted, the user
    /// message is appended immediately and stays in history whatever the
    /// network outcome.
    pub async fn submit_query(&self, question: &str) -> Result<QueryOutcome, ChatError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(ChatError::EmptyQuestion);
        }

        let (request, generation) = {
            let mut state = self.state.lock().await;
            if state.pending_request {
                return Err(ChatError::RequestPending);
            }
            let document = state.document.as_ref().ok_or(ChatError::NoDocument)?;

            let context = self.selector.select_context(&document.segments, question);
            if context.is_empty() {
                tracing::debug!("no context available, prompt will be ungrounded");
            }
            let request = build_prompt(&context, question);

            state.history.push(Message::user(question));
            state.pending_request = true;
            state.last_error = None;
            (request, state.generation)
        };

        let result = self.invoker.invoke(&request).await;

        let mut state = self.state.lock().await;
        if state.generation != generation {
            tracing::info!("discarding response for a replaced document");
            return Ok(QueryOutcome::Superseded);
        }
        state.pending_request = false;

        match result {
            Ok(answer) => {
                state.history.push(Message::model(answer.clone()));
                Ok(QueryOutcome::Answered(answer))
            }
            Err(err) => {
                state.history.push(Message::model(APOLOGY_TEXT));
                state.last_error = Some(err.to_string());
                Err(err)
            }
        }
    }

    pub async fn status(&self) -> SessionStatus {
        let state = self.state.lock().await;
        match (&state.document, state.pending_request) {
            (None, _) => SessionStatus::NoDocument,
            (Some(_), true) => SessionStatus::AwaitingResponse,
            (Some(_), false) => SessionStatus::DocumentReady,
        }
    }

    /// Snapshot of the conversation so far.
    pub async fn history(&self) -> Vec<Message> {
        self.state.lock().await.history.clone()
    }

    /// Most recent user-facing diagnostic, if the last exchange failed.
    pub async fn last_error(&self) -> Option<String> {
        self.state.lock().await.last_error.clone()
    }

    pub async fn document_name(&self) -> Option<String> {
        self.state
            .lock()
            .await
            .document
            .as_ref()
            .map(|d| d.name.clone())
    }
}
