//! Document-grounded question answering over a single text document.
//!
//! Load a document and the session splits it into fixed-size segments,
//! grounds each question in a selected segment, and relays it to a
//! generateContent-style model endpoint with retry and backoff. The
//! conversation state (active document, history, in-flight request, last
//! error) lives in [`ChatSession`] and is mutated only through its
//! transition methods.
//!
//! ```no_run
//! use docchat::{ChatConfig, ChatSession};
//!
//! # async fn run() -> Result<(), docchat::ChatError> {
//! docchat::logging::init();
//! let session = ChatSession::from_config(&ChatConfig::from_env());
//! session.load_document("notes.txt", "The sky is blue.").await?;
//! session.submit_query("What color is the sky?").await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod ingest;
pub mod llm;
pub mod logging;
pub mod rag;
pub mod session;

pub use config::{ChatConfig, EndpointConfig, DEFAULT_CHUNK_SIZE};
pub use error::{ChatError, ProviderError};
pub use llm::{
    GeminiProvider, LlmProvider, ModelRequest, ModelResponse, ResilientInvoker, RetryPolicy,
    EMPTY_ANSWER_TEXT,
};
pub use rag::{chunk, ContextSelector, FirstSegmentSelector, Segment, REFUSAL_TEXT};
pub use session::{
    ChatSession, Document, Message, QueryOutcome, Role, SessionStatus, APOLOGY_TEXT,
};
