//! Line ranges and how they resolve against a concrete file.
//!
//! A [`LineRange`] is what the user asks for (1-based, inclusive). A [`Cut`]
//! is what actually happens to the file: keep `lines[..keep_before]`, then
//! resume at `lines[resume_at..]`. The [`RangePolicy`] decides how the first
//! becomes the second when the request does not fit the file.

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ParseRangeError, RemoveError};

/// A 1-based inclusive range of lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LineRange {
    /// First line to remove (1-based).
    pub start: usize,
    /// Last line to remove (1-based, inclusive).
    pub end: usize,
}

impl LineRange {
    /// Create a new range. No validation happens until [`LineRange::resolve`].
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// A range covering exactly one line.
    #[must_use]
    pub const fn single(line: usize) -> Self {
        Self::new(line, line)
    }

    /// Number of lines the range names, zero when `start > end`.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.saturating_add(1).saturating_sub(self.start)
    }

    /// Whether the range names no lines at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resolve this range against a file of `total` lines.
    ///
    /// # Errors
    ///
    /// Under [`RangePolicy::Strict`], returns [`RemoveError::InvalidRange`]
    /// unless `1 <= start <= end <= total`. [`RangePolicy::Clamp`] never fails.
    pub fn resolve(self, total: usize, policy: RangePolicy) -> Result<Cut, RemoveError> {
        match policy {
            RangePolicy::Strict => {
                if self.start == 0 || self.start > self.end || self.end > total {
                    return Err(RemoveError::InvalidRange { range: self, total });
                }
                Ok(Cut {
                    keep_before: self.start - 1,
                    resume_at: self.end,
                })
            }
            RangePolicy::Clamp => {
                // `start - 1` is a slice stop; 0 becomes -1, i.e. "all but the last line".
                let keep_before = match self.start {
                    0 => total.saturating_sub(1),
                    start => (start - 1).min(total),
                };
                Ok(Cut {
                    keep_before,
                    resume_at: self.end.min(total),
                })
            }
        }
    }
}

impl fmt::Display for LineRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

impl FromStr for LineRange {
    type Err = ParseRangeError;

    /// Parses `START-END`, `START:END` or a single line `N`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseRangeError::Empty);
        }

        let parse = |part: &str| {
            let part = part.trim();
            part.parse::<usize>()
                .map_err(|_| ParseRangeError::InvalidNumber(part.to_owned()))
        };

        match s.split_once(['-', ':']) {
            Some((start, end)) => Ok(Self::new(parse(start)?, parse(end)?)),
            None => parse(s).map(Self::single),
        }
    }
}

/// How to treat a range that does not fit the file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RangePolicy {
    /// Reject anything outside `1 <= start <= end <= total`.
    #[default]
    Strict,
    /// Slice leniently: bounds clamp to the file and nothing is rejected.
    /// `start > end + 1` re-emits the overlapping lines, so the file can grow.
    Clamp,
}

impl fmt::Display for RangePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strict => write!(f, "strict"),
            Self::Clamp => write!(f, "clamp"),
        }
    }
}

/// A resolved removal, in 0-based line indices.
///
/// The rewritten file is `lines[..keep_before] ++ lines[resume_at..]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cut {
    /// Number of leading lines kept.
    pub keep_before: usize,
    /// Index of the first trailing line kept.
    pub resume_at: usize,
}

impl Cut {
    /// Number of lines in the rewritten file.
    #[must_use]
    pub const fn kept_lines(&self, total: usize) -> usize {
        self.keep_before + total.saturating_sub(self.resume_at)
    }

    /// 0-based indices of the lines that disappear. Empty when the halves overlap.
    #[must_use]
    pub fn removed(&self) -> Range<usize> {
        self.keep_before..self.resume_at.max(self.keep_before)
    }
}
