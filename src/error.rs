use thiserror::Error;

/// Failures surfaced by the chat session and the ingestion boundary.
///
/// Nothing here is fatal: every variant converts to a state update or a
/// caller-visible banner and the session stays interactive.
#[derive(Debug, Error)]
pub enum ChatError {
    /// The selected file is neither plain text nor Markdown.
    #[error("unsupported document format: .{0}")]
    UnsupportedFormat(String),

    /// The file could not be read from disk.
    #[error("failed to read document: {0}")]
    ReadFailure(String),

    /// The model endpoint kept failing until the retry budget ran out.
    #[error("model invocation failed after {attempts} attempts: {message}")]
    Invocation { attempts: usize, message: String },

    /// A previous query is still waiting on the model.
    #[error("a request is already in flight")]
    RequestPending,

    /// No document has been loaded yet.
    #[error("no document is loaded")]
    NoDocument,

    /// The submitted question was empty or whitespace-only.
    #[error("question is empty")]
    EmptyQuestion,
}

impl ChatError {
    /// Whether the user can fix this by picking another file or retyping.
    pub fn is_user_correctable(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedFormat(_) | Self::EmptyQuestion | Self::NoDocument
        )
    }
}

/// A single failed endpoint attempt. Every variant is transient and eligible
/// for retry by the invoker; none escape it.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("network error: {0}")]
    Network(String),

    #[error("endpoint returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed response body: {0}")]
    MalformedBody(String),
}

impl ProviderError {
    pub fn network<E: std::fmt::Display>(err: E) -> Self {
        Self::Network(err.to_string())
    }

    pub fn malformed<E: std::fmt::Display>(err: E) -> Self {
        Self::MalformedBody(err.to_string())
    }
}
