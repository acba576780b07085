//! Legacy and variant ideographs accepted alongside the unified kanji range

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;

static BUNDLED_SOURCE: &str = include_str!("../data/legacy_kanji.txt");

static BUNDLED: Lazy<LegacyCharset> =
    Lazy::new(|| LegacyCharset::parse(BUNDLED_SOURCE).expect("bundled legacy charset parses"));

#[derive(Debug, thiserror::Error)]
pub enum CharsetError {
    #[error("failed to read legacy charset file {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: `{token}` is not a valid codepoint")]
    InvalidCodepoint { line: usize, token: String },
}

/// Immutable set of extra ideographs admitted by name and address classes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LegacyCharset {
    chars: HashSet<char>,
}

impl LegacyCharset {
    /// The set shipped with this crate, parsed on first use
    pub fn bundled() -> &'static LegacyCharset {
        &BUNDLED
    }

    /// Parse the charset text format
    ///
    /// Lines starting with `#` are comments. Every other line holds
    /// whitespace-separated tokens: `U+XXXX` names one codepoint in hex,
    /// anything else contributes each of its characters.
    ///
    /// # Examples
    /// ```
    /// use entry_form_core::LegacyCharset;
    ///
    /// let set = LegacyCharset::parse("# compat\nU+FA11 髙").unwrap();
    /// assert!(set.contains('\u{FA11}'));
    /// assert!(set.contains('髙'));
    /// assert_eq!(set.len(), 2);
    /// ```
    pub fn parse(text: &str) -> Result<Self, CharsetError> {
        let mut chars = HashSet::new();

        for (idx, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            for token in line.split_whitespace() {
                match token.strip_prefix("U+").or_else(|| token.strip_prefix("u+")) {
                    Some(hex) => {
                        let c = u32::from_str_radix(hex, 16)
                            .ok()
                            .and_then(char::from_u32)
                            .ok_or_else(|| CharsetError::InvalidCodepoint {
                                line: idx + 1,
                                token: token.to_string(),
                            })?;
                        chars.insert(c);
                    }
                    None => chars.extend(token.chars()),
                }
            }
        }

        Ok(Self { chars })
    }

    /// Read and parse a charset file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CharsetError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| CharsetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().copied()
    }
}

impl FromIterator<char> for LegacyCharset {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self {
            chars: iter.into_iter().collect(),
        }
    }
}
