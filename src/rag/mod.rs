//! Retrieval side of the pipeline: chunking, context selection, and prompt
//! assembly.

pub mod chunker;
pub mod prompt;
pub mod selector;

pub use chunker::{chunk, Segment};
pub use prompt::{build_prompt, REFUSAL_TEXT};
pub use selector::{ContextSelector, FirstSegmentSelector};
