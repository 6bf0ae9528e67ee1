// Class analysis: which required character classes never occur

use passfix_core::CharClass;
use passfix_core::character::{REQUIRED_CLASSES, get_char_class};

/// Which required classes have been seen in a password.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassPresence {
    pub lowercase: bool,
    pub uppercase: bool,
    pub digit: bool,
}

impl ClassPresence {
    /// Scan a password once, stopping as soon as every class has been seen.
    pub fn scan(password: &[char]) -> Self {
        let mut presence = Self::default();
        for &c in password {
            match get_char_class(c) {
                CharClass::Lowercase => presence.lowercase = true,
                CharClass::Uppercase => presence.uppercase = true,
                CharClass::Digit => presence.digit = true,
                CharClass::Other => {}
            }
            if presence.is_complete() {
                break;
            }
        }
        presence
    }

    pub fn contains(&self, class: CharClass) -> bool {
        match class {
            CharClass::Lowercase => self.lowercase,
            CharClass::Uppercase => self.uppercase,
            CharClass::Digit => self.digit,
            CharClass::Other => false,
        }
    }

    /// All three required classes are present.
    pub fn is_complete(&self) -> bool {
        self.lowercase && self.uppercase && self.digit
    }

    /// Number of required classes that are absent, in `0..=3`.
    pub fn missing_count(&self) -> usize {
        REQUIRED_CLASSES
            .iter()
            .filter(|&&class| !self.contains(class))
            .count()
    }

    /// The absent required classes, in lowercase/uppercase/digit order.
    pub fn missing(&self) -> Vec<CharClass> {
        REQUIRED_CLASSES
            .into_iter()
            .filter(|&class| !self.contains(class))
            .collect()
    }
}

/// Number of required classes with zero occurrences in `password`.
pub fn missing_class_count(password: &[char]) -> usize {
    ClassPresence::scan(password).missing_count()
}
