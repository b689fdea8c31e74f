//! Synonym canonicalization table and its resource loader.
//!
//! The on-disk format is UTF-8 text, one `source,canonical` rule per line.
//! Empty lines and lines starting with `#` are skipped; only the first
//! comma splits key from value, so values may themselves contain commas.
//!
//! Load failures never abort normalization: the loader degrades to an
//! empty table and hands the caller a structured warning to log (or not)
//! as it sees fit.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// An immutable mapping from a raw token to its canonical form.
///
/// Lookups on absent keys fall back to the key unchanged. Each key maps to
/// exactly one value; there is no iteration-order guarantee.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SynonymTable {
    map: HashMap<String, String>,
}

impl SynonymTable {
    /// Builds a table from in-memory pairs (tests, checker re-initialization).
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            map: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// The canonical form of `token`, or `token` itself when no rule exists.
    pub fn canonical<'a>(&'a self, token: &'a str) -> &'a str {
        self.map.get(token).map(String::as_str).unwrap_or(token)
    }

    /// Direct lookup without the identity fallback.
    pub fn get(&self, token: &str) -> Option<&str> {
        self.map.get(token).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Diagnostic produced when a synonym resource could not be read.
#[derive(Debug, Error)]
#[error("synonym table {path:?} could not be loaded: {source}")]
pub struct SynonymLoadWarning {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Result of loading a synonym resource: the table (possibly empty) plus
/// an optional diagnostic. Never an error — the decision whether to log
/// belongs to the caller.
#[derive(Debug)]
pub struct SynonymLoad {
    pub table: SynonymTable,
    pub warning: Option<SynonymLoadWarning>,
}

/// Loads a synonym table from `path`.
///
/// A missing or unreadable file yields an empty table and a warning.
/// Individual lines with no comma are silently skipped.
pub fn load_synonyms(path: &Path) -> SynonymLoad {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(source) => {
            return SynonymLoad {
                table: SynonymTable::default(),
                warning: Some(SynonymLoadWarning {
                    path: path.to_path_buf(),
                    source,
                }),
            }
        }
    };

    let mut map = HashMap::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        // First comma only; the value keeps any further commas.
        if let Some((src, dst)) = line.split_once(',') {
            map.insert(src.trim().to_string(), dst.trim().to_string());
        }
    }

    SynonymLoad {
        table: SynonymTable { map },
        warning: None,
    }
}
