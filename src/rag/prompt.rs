//! Prompt assembly for context-grounded question answering.

use crate::llm::types::ModelRequest;

/// Verbatim refusal the model is instructed to emit when the context does
/// not contain the answer.
pub const REFUSAL_TEXT: &str = "The answer is not available in the document context.";

const CONTEXT_START: &str = "--- DOCUMENT CONTEXT START ---";
const CONTEXT_END: &str = "--- DOCUMENT CONTEXT END ---";

/// Compose the grounding instruction and question into a model request.
///
/// The context is fenced between explicit markers so the model cannot read
/// document text as instructions. The question travels in its own field and
/// is never merged into the instruction.
pub fn build_prompt(context: &str, question: &str) -> ModelRequest {
    let system_instruction = format!(
        "You are a question-answering assistant for a single document. \
         Answer using only the document context between the markers below. \
         Do not use outside knowledge.\n\
         {CONTEXT_START}\n\
         {context}\n\
         {CONTEXT_END}\n\
         If the answer cannot be derived from the context above, reply with \
         exactly this sentence: {REFUSAL_TEXT}"
    );

    ModelRequest {
        system_instruction,
        user_question: question.to_string(),
    }
}
