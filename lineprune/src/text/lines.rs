//! Line boundaries of a decoded text.
//!
//! A line is everything up to and including a `\n`; a trailing fragment with
//! no terminator is a line too. `\r\n` needs no special handling because the
//! `\r` simply stays part of the line it ends. This matches how the lines
//! were stored, so kept lines come back out unchanged.

use std::ops::Range;

use super::Edit;
use crate::range::Cut;

/// Byte offsets of every line start in a text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    starts: Vec<usize>,
    text_len: usize,
}

impl LineIndex {
    /// Index the lines of `text`.
    #[must_use]
    pub fn new(text: &str) -> Self {
        let mut starts = Vec::new();
        let mut offset = 0;
        for line in text.split_inclusive('\n') {
            starts.push(offset);
            offset += line.len();
        }
        Self {
            starts,
            text_len: text.len(),
        }
    }

    /// Number of lines, counting an unterminated last line.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.starts.len()
    }

    /// Byte offset where 0-based line `index` starts, or the text length past the last line.
    #[must_use]
    pub fn offset(&self, index: usize) -> usize {
        self.starts.get(index).copied().unwrap_or(self.text_len)
    }

    /// Byte span covering 0-based lines `lines.start..lines.end`.
    #[must_use]
    pub fn byte_range(&self, lines: Range<usize>) -> Range<usize> {
        self.offset(lines.start)..self.offset(lines.end)
    }

    /// Content of 0-based line `index`, terminator included.
    #[must_use]
    pub fn line<'a>(&self, text: &'a str, index: usize) -> Option<&'a str> {
        if index >= self.line_count() {
            return None;
        }
        text.get(self.byte_range(index..index + 1))
    }

    /// The single edit that turns `text` into `lines[..keep_before] ++ lines[resume_at..]`.
    ///
    /// When the halves overlap (`keep_before > resume_at`) the overlap is
    /// emitted twice, so the edit becomes an insertion of that span.
    #[must_use]
    pub fn edit_for(&self, text: &str, cut: Cut) -> Edit {
        let keep_end = self.offset(cut.keep_before);
        let resume = self.offset(cut.resume_at);
        if keep_end <= resume {
            Edit::delete(keep_end, resume)
        } else {
            Edit::insert(keep_end, &text[resume..keep_end])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_like_stored_lines() {
        assert_eq!(LineIndex::new("").line_count(), 0);
        assert_eq!(LineIndex::new("a").line_count(), 1);
        assert_eq!(LineIndex::new("a\n").line_count(), 1);
        assert_eq!(LineIndex::new("a\nb").line_count(), 2);
        assert_eq!(LineIndex::new("\n\n\n").line_count(), 3);
    }

    #[test]
    fn test_crlf_stays_with_its_line() {
        let text = "one\r\ntwo\r\nthree";
        let index = LineIndex::new(text);
        assert_eq!(index.line_count(), 3);
        assert_eq!(index.line(text, 0), Some("one\r\n"));
        assert_eq!(index.line(text, 2), Some("three"));
        assert_eq!(index.line(text, 3), None);
    }

    #[test]
    fn test_offsets_past_end_clamp_to_len() {
        let text = "ab\ncd\n";
        let index = LineIndex::new(text);
        assert_eq!(index.offset(1), 3);
        assert_eq!(index.offset(2), 6);
        assert_eq!(index.offset(99), 6);
        assert_eq!(index.byte_range(0..2), 0..6);
    }

    #[test]
    fn test_edit_for_deletion() {
        let text = "L1\nL2\nL3\nL4\n";
        let index = LineIndex::new(text);
        let edit = index.edit_for(
            text,
            Cut {
                keep_before: 1,
                resume_at: 3,
            },
        );
        assert_eq!(edit, Edit::delete(3, 9));
    }

    #[test]
    fn test_edit_for_overlap_reinserts() {
        let text = "L1\nL2\nL3\nL4\n";
        let index = LineIndex::new(text);
        let edit = index.edit_for(
            text,
            Cut {
                keep_before: 3,
                resume_at: 1,
            },
        );
        assert_eq!(edit, Edit::insert(9, "L2\nL3\n"));
    }

    #[test]
    fn test_multibyte_lines() {
        let text = "héllo\nwörld\n";
        let index = LineIndex::new(text);
        assert_eq!(index.line(text, 1), Some("wörld\n"));
    }
}
