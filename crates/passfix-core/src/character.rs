// Character classification for password composition rules
//
// Only ASCII letters and digits count toward the required classes. Every
// other character (punctuation, whitespace, non-ASCII letters) is valid
// input but belongs to none of them.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Character class classification
// ---------------------------------------------------------------------------

/// Character class of a single password character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharClass {
    /// ASCII `a`-`z`.
    Lowercase,
    /// ASCII `A`-`Z`.
    Uppercase,
    /// ASCII `0`-`9`.
    Digit,
    /// Anything else.
    Other,
}

/// The classes a strong password must contain at least once, in reporting order.
pub const REQUIRED_CLASSES: [CharClass; 3] =
    [CharClass::Lowercase, CharClass::Uppercase, CharClass::Digit];

impl CharClass {
    /// Whether this class is one of [`REQUIRED_CLASSES`].
    pub fn is_required(self) -> bool {
        self != CharClass::Other
    }

    /// Short human-readable name, used by the CLI output.
    pub fn label(self) -> &'static str {
        match self {
            CharClass::Lowercase => "lowercase",
            CharClass::Uppercase => "uppercase",
            CharClass::Digit => "digit",
            CharClass::Other => "other",
        }
    }
}

/// Returns the character class for a given character.
///
/// Total over `char`: anything that is not an ASCII letter or digit is
/// [`CharClass::Other`].
pub fn get_char_class(c: char) -> CharClass {
    if c.is_ascii_lowercase() {
        return CharClass::Lowercase;
    }
    if c.is_ascii_uppercase() {
        return CharClass::Uppercase;
    }
    if c.is_ascii_digit() {
        return CharClass::Digit;
    }
    CharClass::Other
}

/// Check whether a character is an ASCII lowercase letter.
pub fn is_lower(c: char) -> bool {
    c.is_ascii_lowercase()
}

/// Check whether a character is an ASCII uppercase letter.
pub fn is_upper(c: char) -> bool {
    c.is_ascii_uppercase()
}

/// Check whether a character is an ASCII digit.
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}
