// Dictionary: the exact-match membership set candidates are filtered
// against. Built once per process from an external word source, read-only
// afterwards, and freely shareable between concurrent lookups.

use std::path::{Path, PathBuf};

use hashbrown::HashSet;

/// Error type for dictionary construction from a file.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    /// The word list file could not be read.
    #[error("failed to read word list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Normalize a raw word the way dictionary entries and query words are
/// expected to arrive at the engine: surrounding whitespace trimmed,
/// everything lowercased.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// A set of known words supporting exact-match lookups.
///
/// Entries are normalized on insertion; lookups are verbatim, so callers
/// must hand in already-normalized words (the engine performs no
/// normalization of its own).
#[derive(Debug, Default, Clone)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize and insert one entry. Duplicates collapse silently.
    pub fn insert(&mut self, raw: &str) {
        let word = normalize(raw);
        if !word.is_empty() {
            self.words.insert(word);
        }
    }

    /// Build a dictionary from any word source, normalizing each entry.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = Self::new();
        for word in words {
            dictionary.insert(word.as_ref());
        }
        dictionary
    }

    /// Build a dictionary from a word list file, one word per line.
    pub fn from_path(path: &Path) -> Result<Self, DictionaryError> {
        let contents = std::fs::read_to_string(path).map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_words(contents.lines()))
    }

    /// Exact-match membership test.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
