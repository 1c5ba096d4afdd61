//! Identifier generation options
//!
//! Only the options are configured here. Charset and case names are parsed
//! permissively: an unknown charset name is a literal pool of characters and
//! an unknown case falls back to lowercase.

use serde::{Serialize, Serializer};
use std::borrow::Cow;

const ALPHANUM: &str = "0123456789abcdefghijklmnopqrstuvwxyz";
const HEX: &str = "0123456789abcdef";
const LETTERS: &str = "abcdefghijklmnopqrstuvwxyz";
const NUMBERS: &str = "0123456789";

/// Pool of characters used to generate identifiers
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Charset {
    /// Digits and lowercase letters
    #[default]
    Alphanum,
    /// Hexadecimal digits
    Hex,
    /// Lowercase letters
    Letters,
    /// Digits
    Numbers,
    /// User-provided characters, taken verbatim
    Custom(Vec<char>),
}

impl Charset {
    /// Characters available for identifier generation
    #[must_use]
    pub fn chars(&self) -> Cow<'_, [char]> {
        match self {
            Self::Alphanum => Cow::Owned(ALPHANUM.chars().collect()),
            Self::Hex => Cow::Owned(HEX.chars().collect()),
            Self::Letters => Cow::Owned(LETTERS.chars().collect()),
            Self::Numbers => Cow::Owned(NUMBERS.chars().collect()),
            Self::Custom(chars) => Cow::Borrowed(chars),
        }
    }

    /// Preset name, or the literal characters of a custom charset
    #[must_use]
    pub fn name(&self) -> Cow<'_, str> {
        match self {
            Self::Alphanum => Cow::Borrowed("alphanum"),
            Self::Hex => Cow::Borrowed("hex"),
            Self::Letters => Cow::Borrowed("letters"),
            Self::Numbers => Cow::Borrowed("numbers"),
            Self::Custom(chars) => Cow::Owned(chars.iter().collect()),
        }
    }
}

impl From<&str> for Charset {
    fn from(name: &str) -> Self {
        parse_charset(name)
    }
}

impl Serialize for Charset {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.name())
    }
}

/// Letter casing applied to generated identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Case {
    #[default]
    Lower,
    Upper,
    Mixed,
}

impl Case {
    /// Name of the case, as written in the configuration
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lower => "lower",
            Self::Upper => "upper",
            Self::Mixed => "mixed",
        }
    }
}

impl From<&str> for Case {
    fn from(name: &str) -> Self {
        parse_case(name)
    }
}

/// Options for generating identifiers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdOptions {
    pub length: u32,
    pub charset: Charset,
    pub case: Case,
}

impl Default for IdOptions {
    fn default() -> Self {
        Self {
            length: 5,
            charset: Charset::default(),
            case: Case::default(),
        }
    }
}

/// Parse a charset name
///
/// Lookup of the presets is case-sensitive: `"HEX"` is the literal pool
/// `H`, `E`, `X`. Repeated characters of a literal pool are kept once.
#[must_use]
pub fn parse_charset(name: &str) -> Charset {
    match name {
        "alphanum" => Charset::Alphanum,
        "hex" => Charset::Hex,
        "letters" => Charset::Letters,
        "numbers" => Charset::Numbers,
        custom => {
            let mut chars: Vec<char> = Vec::new();
            for c in custom.chars() {
                if !chars.contains(&c) {
                    chars.push(c);
                }
            }
            Charset::Custom(chars)
        }
    }
}

/// Parse a letter case name, defaulting to lowercase
#[must_use]
pub fn parse_case(name: &str) -> Case {
    match name {
        "upper" => Case::Upper,
        "mixed" => Case::Mixed,
        _ => Case::Lower,
    }
}
