//! Telephone keypad layouts: digit -> ordered candidate letters.
use std::collections::HashMap;

use crate::{PhonewordError, Result};

/// The ITU E.161 letter assignment found on most phone keypads.
static STANDARD_LAYOUT: phf::Map<char, &'static str> = phf::phf_map! {
    '2' => "ABC",
    '3' => "DEF",
    '4' => "GHI",
    '5' => "JKL",
    '6' => "MNO",
    '7' => "PQRS",
    '8' => "TUV",
    '9' => "WXYZ",
};

/// Maps digits to the letters they can stand for.
///
/// Letter order is significant: it fixes the order in which the engine
/// explores branches and therefore the order of emitted decompositions.
/// Digits without an entry (by default `0` and `1`) are unmapped and pass
/// through literally.
///
/// # Example
/// ```
/// use phoneword_core::KeypadMapping;
///
/// let keypad = KeypadMapping::standard();
/// assert_eq!(keypad.letters_for('7'), Some(&['P', 'Q', 'R', 'S'][..]));
/// assert_eq!(keypad.letters_for('0'), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeypadMapping {
    map: HashMap<char, Vec<char>>,
}

impl KeypadMapping {
    /// An empty mapping: every digit is unmapped.
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// The standard layout `2=ABC` .. `9=WXYZ`.
    pub fn standard() -> Self {
        let mut keypad = Self::new();
        for (&digit, letters) in STANDARD_LAYOUT.entries() {
            keypad.assign(digit, letters);
        }
        keypad
    }

    /// Build a mapping from textual rules like `"2=ABC"`.
    ///
    /// The key must be a single ASCII digit and the letter list must not be
    /// empty. Letters are upper-cased so they line up with normalized
    /// dictionary keys. A later rule for the same digit replaces an earlier one.
    pub fn from_rules<S: AsRef<str>>(rules: &[S]) -> Result<Self> {
        let mut keypad = Self::new();
        for rule in rules {
            let rule = rule.as_ref();
            let invalid = || PhonewordError::InvalidKeypadRule(rule.to_string());

            let (digit, letters) = rule.split_once('=').ok_or_else(invalid)?;
            let mut digit_chars = digit.trim().chars();
            let digit = match (digit_chars.next(), digit_chars.next()) {
                (Some(d), None) if d.is_ascii_digit() => d,
                _ => return Err(invalid()),
            };
            let letters = letters.trim();
            if letters.is_empty() || letters.chars().any(char::is_whitespace) {
                return Err(invalid());
            }
            keypad.assign(digit, letters);
        }
        Ok(keypad)
    }

    /// Assign the letters for one digit, replacing any previous assignment.
    pub fn assign(&mut self, digit: char, letters: &str) {
        let letters: Vec<char> = letters.chars().flat_map(char::to_uppercase).collect();
        self.map.insert(digit, letters);
    }

    /// Remove a digit's letters so it becomes unmapped.
    pub fn unassign(&mut self, digit: char) -> bool {
        self.map.remove(&digit).is_some()
    }

    /// Candidate letters for `digit`, or `None` when it is unmapped.
    pub fn letters_for(&self, digit: char) -> Option<&[char]> {
        self.map.get(&digit).map(Vec::as_slice)
    }

    /// True if `digit` has letters.
    pub fn is_mapped(&self, digit: char) -> bool {
        self.map.contains_key(&digit)
    }

    /// Render the mapping back to rules, sorted by digit.
    pub fn to_rules(&self) -> Vec<String> {
        let mut rules: Vec<String> = self
            .map
            .iter()
            .map(|(digit, letters)| format!("{}={}", digit, letters.iter().collect::<String>()))
            .collect();
        rules.sort();
        rules
    }
}

/// Rules for the standard layout, in digit order.
pub fn standard_layout_rules() -> Vec<String> {
    KeypadMapping::standard().to_rules()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_layout() {
        let keypad = KeypadMapping::standard();
        assert_eq!(keypad.letters_for('2'), Some(&['A', 'B', 'C'][..]));
        assert_eq!(keypad.letters_for('9'), Some(&['W', 'X', 'Y', 'Z'][..]));
        assert!(!keypad.is_mapped('0'));
        assert!(!keypad.is_mapped('1'));
        assert!(!keypad.is_mapped('.'));
    }

    #[test]
    fn standard_rules_roundtrip() {
        let rules = standard_layout_rules();
        assert_eq!(rules.len(), 8);
        assert_eq!(rules[0], "2=ABC");
        assert_eq!(rules[5], "7=PQRS");
        assert_eq!(KeypadMapping::from_rules(&rules).unwrap(), KeypadMapping::standard());
    }

    #[test]
    fn custom_rules_uppercase_and_override() {
        let keypad = KeypadMapping::from_rules(&["2=abc", " 1 = xy ", "2=cba"]).unwrap();
        assert_eq!(keypad.letters_for('2'), Some(&['C', 'B', 'A'][..]));
        assert_eq!(keypad.letters_for('1'), Some(&['X', 'Y'][..]));
        assert_eq!(keypad.letters_for('3'), None);
    }

    #[test]
    fn invalid_rules_are_rejected() {
        for bad in ["2", "22=AB", "x=AB", "2=", "=AB", "3=A B"] {
            let err = KeypadMapping::from_rules(&[bad]).unwrap_err();
            assert!(
                matches!(err, PhonewordError::InvalidKeypadRule(ref r) if r == bad),
                "rule {bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn unassign_makes_digit_unmapped() {
        let mut keypad = KeypadMapping::standard();
        assert!(keypad.unassign('7'));
        assert!(!keypad.unassign('7'));
        assert_eq!(keypad.letters_for('7'), None);
    }
}
