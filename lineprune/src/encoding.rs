//! Explicit text encodings.
//!
//! Files are decoded and re-encoded under one encoding chosen by WHATWG label
//! (`utf-8`, `latin1`, `windows-1252`, `shift_jis`, ...). Decoding is strict:
//! malformed input is an error, never silently replaced. A byte order mark is
//! treated as ordinary content so it survives the rewrite unchanged.

use std::borrow::Cow;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use encoding_rs::Encoding;

use crate::error::{EncodingFailure, RemoveError};

/// An encoding that can both decode and encode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextEncoding(&'static Encoding);

impl Default for TextEncoding {
    fn default() -> Self {
        Self(encoding_rs::UTF_8)
    }
}

impl TextEncoding {
    /// Look up an encoding by label, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`RemoveError::UnknownEncoding`] for unknown labels and for
    /// encodings that cannot be written back (UTF-16, `replacement`).
    pub fn for_label(label: &str) -> Result<Self, RemoveError> {
        let encoding = Encoding::for_label(label.trim().as_bytes())
            .ok_or_else(|| RemoveError::UnknownEncoding(label.to_owned()))?;
        if encoding.output_encoding() != encoding {
            return Err(RemoveError::UnknownEncoding(label.to_owned()));
        }
        Ok(Self(encoding))
    }

    /// Canonical name, e.g. `UTF-8` or `windows-1252`.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.0.name()
    }

    /// Decode the raw contents of `path`.
    ///
    /// # Errors
    ///
    /// Returns [`RemoveError::Encoding`] when `bytes` are malformed.
    pub fn decode<'a>(self, bytes: &'a [u8], path: &Path) -> Result<Cow<'a, str>, RemoveError> {
        self.0
            .decode_without_bom_handling_and_without_replacement(bytes)
            .ok_or_else(|| self.error(path, EncodingFailure::Malformed))
    }

    /// Encode `text` for writing back to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`RemoveError::Encoding`] when `text` has unmappable characters.
    pub fn encode<'a>(self, text: &'a str, path: &Path) -> Result<Cow<'a, [u8]>, RemoveError> {
        let (bytes, _, had_unmappable) = self.0.encode(text);
        if had_unmappable {
            return Err(self.error(path, EncodingFailure::Unmappable));
        }
        Ok(bytes)
    }

    fn error(self, path: &Path, failure: EncodingFailure) -> RemoveError {
        RemoveError::Encoding {
            path: path.to_path_buf(),
            encoding: self.name(),
            failure,
        }
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TextEncoding {
    type Err = RemoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::for_label(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_utf8() {
        assert_eq!(TextEncoding::default().name(), "UTF-8");
    }

    #[test]
    fn test_labels_are_case_insensitive() {
        assert_eq!(TextEncoding::for_label("UTF8").unwrap().name(), "UTF-8");
        assert_eq!(
            TextEncoding::for_label(" latin1 ").unwrap().name(),
            "windows-1252"
        );
    }

    #[test]
    fn test_rejects_unknown_and_unwritable() {
        assert!(matches!(
            TextEncoding::for_label("klingon"),
            Err(RemoveError::UnknownEncoding(_))
        ));
        assert!(matches!(
            TextEncoding::for_label("utf-16le"),
            Err(RemoveError::UnknownEncoding(_))
        ));
    }

    #[test]
    fn test_strict_utf8_decode() {
        let path = Path::new("bad.txt");
        let err = TextEncoding::default()
            .decode(b"ok\n\xff\xfe\n", path)
            .unwrap_err();
        assert!(matches!(
            err,
            RemoveError::Encoding {
                failure: EncodingFailure::Malformed,
                ..
            }
        ));
    }

    #[test]
    fn test_bom_is_preserved() {
        let path = Path::new("bom.txt");
        let bytes = b"\xef\xbb\xbfhello\n";
        let enc = TextEncoding::default();
        let text = enc.decode(bytes, path).unwrap();
        assert!(text.starts_with('\u{feff}'));
        assert_eq!(&*enc.encode(&text, path).unwrap(), bytes);
    }

    #[test]
    fn test_single_byte_round_trip() {
        let path = Path::new("legacy.txt");
        let enc = TextEncoding::for_label("windows-1252").unwrap();
        let bytes = b"caf\xe9\r\n";
        let text = enc.decode(bytes, path).unwrap();
        assert_eq!(text, "café\r\n");
        assert_eq!(&*enc.encode(&text, path).unwrap(), bytes);
    }

    #[test]
    fn test_unmappable_encode() {
        let path = Path::new("legacy.txt");
        let enc = TextEncoding::for_label("windows-1252").unwrap();
        assert!(matches!(
            enc.encode("snowman ☃", path),
            Err(RemoveError::Encoding {
                failure: EncodingFailure::Unmappable,
                ..
            })
        ));
    }
}
