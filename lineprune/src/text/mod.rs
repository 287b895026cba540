//! Text plumbing shared by the remover.
//!
//! - [`LineIndex`] maps line numbers to byte offsets without copying lines.
//! - [`ByteRangeRewriter`] applies byte-range edits to a source string.

mod lines;
mod rewriter;

pub use lines::LineIndex;
pub use rewriter::{ByteRangeRewriter, Edit, RewriteError};
