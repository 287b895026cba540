//! Byte-range rewriter.
//!
//! Edits are expressed as byte ranges into the original text and applied
//! back to front, so earlier offsets stay valid while later spans change.
//!
//! ```
//! use lineprune::text::{ByteRangeRewriter, Edit};
//!
//! let mut rewriter = ByteRangeRewriter::new("keep\ndrop\nkeep\n");
//! rewriter.add_edit(Edit::delete(5, 10));
//! assert_eq!(rewriter.apply().unwrap(), "keep\nkeep\n");
//! ```

/// A single edit operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    /// Start byte offset (inclusive)
    pub start_byte: usize,
    /// End byte offset (exclusive)
    pub end_byte: usize,
    /// Replacement content
    pub replacement: String,
}

impl Edit {
    /// Create a new edit
    #[must_use]
    pub fn new(start_byte: usize, end_byte: usize, replacement: impl Into<String>) -> Self {
        Self {
            start_byte,
            end_byte,
            replacement: replacement.into(),
        }
    }

    /// Create a deletion edit
    #[must_use]
    pub fn delete(start_byte: usize, end_byte: usize) -> Self {
        Self::new(start_byte, end_byte, "")
    }

    /// Create an insertion edit (insert before position)
    #[must_use]
    pub fn insert(position: usize, content: impl Into<String>) -> Self {
        Self::new(position, position, content)
    }

    /// Check if this edit overlaps with another
    #[must_use]
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.start_byte < other.end_byte && other.start_byte < self.end_byte
    }
}

/// Error during rewriting
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RewriteError {
    /// Two edits touch the same bytes
    #[error("Overlapping edits at indices {edit_a} and {edit_b}")]
    OverlappingEdits {
        /// Index of first overlapping edit
        edit_a: usize,
        /// Index of second overlapping edit
        edit_b: usize,
    },
    /// Edit range is reversed or past the end of the source
    #[error("Edit {edit_index} out of bounds: {start_byte}..{end_byte} in source of length {source_len}")]
    OutOfBounds {
        /// Index of the bad edit
        edit_index: usize,
        /// Start byte of the edit
        start_byte: usize,
        /// End byte of the edit
        end_byte: usize,
        /// Length of the source
        source_len: usize,
    },
    /// Edit boundary falls inside a multi-byte character
    #[error("Edit {edit_index} splits a character at byte {byte}")]
    NotCharBoundary {
        /// Index of the bad edit
        edit_index: usize,
        /// Offending offset
        byte: usize,
    },
}

/// Applies non-overlapping byte-range edits to a source string.
#[derive(Debug, Clone)]
pub struct ByteRangeRewriter {
    source: String,
    edits: Vec<Edit>,
}

impl ByteRangeRewriter {
    /// Create a new rewriter for the given source
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            edits: Vec::new(),
        }
    }

    /// Add an edit to the pending list
    pub fn add_edit(&mut self, edit: Edit) {
        self.edits.push(edit);
    }

    /// Validate edits without applying them
    ///
    /// # Errors
    /// Returns error if edits overlap, are out of bounds or split a character
    pub fn validate(&self) -> Result<(), RewriteError> {
        for (i, edit) in self.edits.iter().enumerate() {
            if edit.start_byte > edit.end_byte || edit.end_byte > self.source.len() {
                return Err(RewriteError::OutOfBounds {
                    edit_index: i,
                    start_byte: edit.start_byte,
                    end_byte: edit.end_byte,
                    source_len: self.source.len(),
                });
            }
            for byte in [edit.start_byte, edit.end_byte] {
                if !self.source.is_char_boundary(byte) {
                    return Err(RewriteError::NotCharBoundary {
                        edit_index: i,
                        byte,
                    });
                }
            }
        }

        for i in 0..self.edits.len() {
            for j in (i + 1)..self.edits.len() {
                if self.edits[i].overlaps(&self.edits[j]) {
                    return Err(RewriteError::OverlappingEdits { edit_a: i, edit_b: j });
                }
            }
        }

        Ok(())
    }

    /// Apply all edits and return the modified source
    ///
    /// # Errors
    /// Returns error if validation fails
    pub fn apply(self) -> Result<String, RewriteError> {
        self.validate()?;

        let mut result = self.source;
        let mut sorted_edits = self.edits;

        // Back to front keeps the remaining offsets valid
        sorted_edits.sort_by(|a, b| b.start_byte.cmp(&a.start_byte));

        for edit in sorted_edits {
            result.replace_range(edit.start_byte..edit.end_byte, &edit.replacement);
        }

        Ok(result)
    }
}
