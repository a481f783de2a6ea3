//! Fixed-size document segmentation.
//!
//! Splits raw text into contiguous slices of at most `size` characters.
//! Slicing is purely positional: no attempt is made to respect word or
//! sentence boundaries, so a segment can start or end mid-word. In exchange
//! the segments partition the input exactly: concatenating them
//! reconstructs the original text.

use serde::{Deserialize, Serialize};

/// A contiguous slice of a document's text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// The slice content.
    pub text: String,
    /// Character offset of the slice within the source text.
    pub start_offset: usize,
    /// Position of this segment in reading order.
    pub index: usize,
}

/// Split `text` into segments of at most `size` characters.
///
/// Offsets count Unicode scalar values, so multi-byte text is never split
/// inside a character. An empty input yields no segments; the last segment
/// may be shorter than `size`.
pub fn chunk(text: &str, size: usize) -> Vec<Segment> {
    let size = size.max(1);
    let chars: Vec<char> = text.chars().collect();

    let mut segments = Vec::with_capacity(chars.len() / size + 1);
    let mut start = 0;
    while start < chars.len() {
        let end = (start + size).min(chars.len());
        segments.push(Segment {
            text: chars[start..end].iter().collect(),
            start_offset: start,
            index: segments.len(),
        });
        start = end;
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concatenation_reconstructs_input() {
        let text = "The quick brown fox jumps over the lazy dog. ".repeat(40);
        for size in [1, 7, 100, 1500] {
            let joined: String = chunk(&text, size).iter().map(|s| s.text.as_str()).collect();
            assert_eq!(joined, text, "size {size}");
        }
    }

    #[test]
    fn all_segments_full_except_last() {
        let text = "a".repeat(250);
        let segments = chunk(&text, 100);
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0].text.len(), 100);
        assert_eq!(segments[1].text.len(), 100);
        assert_eq!(segments[2].text.len(), 50);
        assert!(segments.iter().all(|s| s.text.chars().count() <= 100));
    }

    #[test]
    fn empty_input_yields_no_segments() {
        assert!(chunk("", 1500).is_empty());
    }

    #[test]
    fn short_input_is_a_single_segment() {
        let segments = chunk("Hello world. This is a test document.", 1500);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].text, "Hello world. This is a test document.");
        assert_eq!(segments[0].start_offset, 0);
    }

    #[test]
    fn offsets_and_indices_are_sequential() {
        let segments = chunk(&"x".repeat(10), 4);
        let offsets: Vec<usize> = segments.iter().map(|s| s.start_offset).collect();
        let indices: Vec<usize> = segments.iter().map(|s| s.index).collect();
        assert_eq!(offsets, vec![0, 4, 8]);
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn multibyte_text_is_not_split_inside_characters() {
        let text = "日本語のテキストを分割する".repeat(3);
        let segments = chunk(&text, 5);
        let joined: String = segments.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(joined, text);
        assert!(segments.iter().all(|s| s.text.chars().count() <= 5));
    }
}
