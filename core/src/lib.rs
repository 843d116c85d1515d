//! phoneword-core
//!
//! Dictionary trie, keypad layouts and the decomposition engine that turns a
//! phone number into every sequence of dictionary words its digits can spell.
//!
//! Public API:
//! - `WordTrie` - Ternary search trie over normalized words
//! - `KeypadMapping` - Digit -> candidate letters
//! - `Engine` - Enumerates decompositions of a phone number
//! - `Config` - Keypad layout configuration (TOML)
//! - `PhonewordError` - Load and configuration failures
use serde::{Deserialize, Serialize};

pub mod error;
pub use error::{PhonewordError, Result};

pub mod trie;
pub use trie::{NodeId, TrieNode, WordTrie};

pub mod keypad;
pub use keypad::{standard_layout_rules, KeypadMapping};

pub mod engine;
pub use engine::{Engine, WORD_SEPARATOR};

/// Engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Keypad layout rules such as `"2=ABC"`. Digits without a rule are
    /// unmapped and copied through literally.
    pub keypad: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            keypad: standard_layout_rules(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let content = self.to_toml_string()?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Build the keypad described by this configuration.
    pub fn keypad_mapping(&self) -> Result<KeypadMapping> {
        KeypadMapping::from_rules(&self.keypad)
    }
}

/// Utility helpers.
pub mod utils {
    use unicode_normalization::UnicodeNormalization;

    /// Normalize a dictionary word into a trie key.
    ///
    /// Decomposes accented letters (NFD), upper-cases, then drops combining
    /// diacritical marks, apostrophes, `|` and whitespace.
    ///
    /// ```
    /// use phoneword_core::utils::normalize_word;
    ///
    /// assert_eq!(normalize_word("Ação"), "ACAO");
    /// assert_eq!(normalize_word(" o'neil "), "ONEIL");
    /// ```
    pub fn normalize_word(s: &str) -> String {
        s.nfd()
            .flat_map(char::to_uppercase)
            .filter(|&c| !is_stripped(c))
            .collect()
    }

    fn is_stripped(c: char) -> bool {
        matches!(c, '\u{0300}'..='\u{036F}' | '\'' | '|') || c.is_whitespace()
    }

    /// Keep only ASCII digits and dots from a raw phone string.
    ///
    /// ```
    /// use phoneword_core::utils::clean_phone;
    ///
    /// assert_eq!(clean_phone("+1 (800) 555-0199"), "18005550199");
    /// assert_eq!(clean_phone("no digits"), "");
    /// ```
    pub fn clean_phone(s: &str) -> String {
        s.chars()
            .filter(|c| c.is_ascii_digit() || *c == '.')
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::utils::{clean_phone, normalize_word};
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn normalize_strips_marks_case_and_spaces() {
        assert_eq!(normalize_word("fala "), "FALA");
        assert_eq!(normalize_word("Crème brûlée"), "CREMEBRULEE");
        assert_eq!(normalize_word("rock'n|roll"), "ROCKNROLL");
        assert_eq!(normalize_word("   "), "");
    }

    #[test]
    fn normalize_variants_share_a_key() {
        let key = normalize_word("cafe");
        for variant in ["café", "CAFÉ", "Ca'fe", "c a f e"] {
            assert_eq!(normalize_word(variant), key);
        }
    }

    #[test]
    fn clean_phone_keeps_digits_and_dots() {
        assert_eq!(
            clean_phone("ad    f(3g   28)26d  fsjh  ´'  dfdf   38#as2$ +++k"),
            "32826382"
        );
        assert_eq!(clean_phone("0800.123"), "0800.123");
        assert_eq!(clean_phone("١٢٣"), "");
    }

    #[test]
    fn default_config_uses_standard_keypad() {
        let cfg = Config::default();
        assert_eq!(cfg.keypad_mapping().unwrap(), KeypadMapping::standard());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = Config {
            keypad: vec!["2=ABC".into(), "3=DEF".into()],
        };
        let text = cfg.to_toml_string().unwrap();
        assert_eq!(Config::from_toml_str(&text).unwrap(), cfg);

        let tmp = std::env::temp_dir().join(format!(
            "phoneword_config_test_{}.toml",
            std::process::id()
        ));
        cfg.save_toml(&tmp).unwrap();
        assert_eq!(Config::load_toml(&tmp).unwrap(), cfg);
        let _ = std::fs::remove_file(tmp);
    }

    #[test]
    fn config_missing_keys_fall_back_to_defaults() {
        let cfg = Config::from_toml_str("").unwrap();
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn config_bad_rule_surfaces_on_build() {
        let cfg = Config::from_toml_str("keypad = [\"2=ABC\", \"oops\"]").unwrap();
        assert!(matches!(
            cfg.keypad_mapping(),
            Err(PhonewordError::InvalidKeypadRule(_))
        ));
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent(word in "[a-zA-Zà-ÿ' |]{0,16}") {
            let once = normalize_word(&word);
            prop_assert_eq!(normalize_word(&once), once);
        }
    }
}
