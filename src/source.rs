use std::fs;
use std::path::Path;

use crate::Error;

const BOM: char = '\u{FEFF}';

/// A named Go source file, normalized for lexing.
///
/// Normalization happens once, here: invalid UTF-8 sequences become
/// U+FFFD (and later lex as invalid tokens), a leading byte-order mark
/// is dropped, and every carriage return is removed so the later stages
/// only ever see `\n` line breaks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    name: String,
    text: String,
}

impl Source {
    /// Normalize raw `bytes` under the display name `name`.
    #[must_use]
    pub fn new(name: impl Into<String>, bytes: &[u8]) -> Self {
        let decoded = String::from_utf8_lossy(bytes);
        let body = decoded.strip_prefix(BOM).unwrap_or(&decoded);
        let text = body.replace('\r', "");
        Self {
            name: name.into(),
            text,
        }
    }

    /// Read and normalize the file at `path`, displayed as the path
    /// was given.
    pub fn read(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let name = path.display().to_string();
        tracing::debug!(name = %name, bytes = bytes.len(), "read source file");
        Ok(Self::new(name, &bytes))
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The normalized text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of lines a line-oriented rendering of this source has:
    /// one per `\n`, plus the trailing (possibly empty) line.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.text.bytes().filter(|&b| b == b'\n').count() + 1
    }

    #[must_use]
    pub fn into_parts(self) -> (String, String) {
        (self.name, self.text)
    }
}
