//! Devanagari to Roman transliteration
//!
//! A single left-to-right pass over the input. Every consonant carries an
//! inherent `a` unless it is followed by a dependent vowel sign (which
//! replaces it) or a virama (which suppresses it). A nukta directly after a
//! consonant selects the nukta form of that consonant. Characters outside the
//! Devanagari tables (Latin text, punctuation, whitespace) pass through
//! unchanged, so mixed-script input is safe.

mod tables;

use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;
use tables::{consonant, is_silent, nukta_form, symbol, vowel, vowel_sign, NUKTA, VIRAMA};

/// Target romanization scheme
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Scheme {
    /// ASCII-only ITRANS (`namaste`, `Apa`, `haiM`)
    #[default]
    Itrans,
    /// IAST with diacritics (`namaste`, `āpa`, `haiṃ`)
    Iast,
}

impl Scheme {
    /// Lowercase scheme name
    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Itrans => "itrans",
            Scheme::Iast => "iast",
        }
    }

    fn pick(&self, pair: (&'static str, &'static str)) -> &'static str {
        match self {
            Scheme::Itrans => pair.0,
            Scheme::Iast => pair.1,
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scheme {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "itrans" => Ok(Scheme::Itrans),
            "iast" => Ok(Scheme::Iast),
            other => Err(CoreError::invalid(format!(
                "unknown transliteration scheme '{other}', expected 'itrans' or 'iast'"
            ))),
        }
    }
}

/// Transliterate Devanagari in `text` to the given Roman `scheme`
pub fn transliterate(text: &str, scheme: Scheme) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if let Some(mut pair) = consonant(ch) {
            if chars.peek() == Some(&NUKTA) {
                chars.next();
                if let Some(nukta) = nukta_form(ch) {
                    pair = nukta;
                }
            }
            out.push_str(scheme.pick(pair));

            match chars.peek().copied() {
                Some(VIRAMA) => {
                    chars.next();
                }
                Some(next) => match vowel_sign(next) {
                    Some(sign) => {
                        chars.next();
                        out.push_str(scheme.pick(sign));
                    }
                    None => out.push('a'),
                },
                None => out.push('a'),
            }
            continue;
        }

        if let Some(pair) = vowel(ch).or_else(|| vowel_sign(ch)).or_else(|| symbol(ch)) {
            out.push_str(scheme.pick(pair));
        } else if !is_silent(ch) {
            out.push(ch);
        }
    }

    out
}

/// Reusable transliterator bound to one scheme
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Transliterator {
    scheme: Scheme,
}

impl Transliterator {
    /// Create a transliterator for `scheme`
    pub fn new(scheme: Scheme) -> Self {
        Self { scheme }
    }

    /// The target scheme
    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    /// Transliterate `text`
    pub fn transliterate(&self, text: &str) -> String {
        transliterate(text, self.scheme)
    }
}
