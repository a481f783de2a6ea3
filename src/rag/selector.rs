//! Context selection strategies.

use super::chunker::Segment;

/// Picks the grounding context for a query from the document's segments.
///
/// Implementations receive the query so a similarity ranker can be dropped
/// in without changing any caller.
pub trait ContextSelector: Send + Sync {
    /// Return the context text for `query`, or an empty string when the
    /// document has no segments. Callers must tolerate an empty context;
    /// the prompt is simply ungrounded in that case.
    fn select_context(&self, segments: &[Segment], query: &str) -> String;
}

/// Baseline selector: always the first segment, regardless of the query.
///
/// Known limitation: for documents longer than one segment, content past the
/// first segment is never surfaced to the model.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstSegmentSelector;

impl ContextSelector for FirstSegmentSelector {
    fn select_context(&self, segments: &[Segment], _query: &str) -> String {
        segments.first().map(|s| s.text.clone()).unwrap_or_default()
    }
}
