//! Configuration file for the phoneword front end.

use std::path::{Path, PathBuf};

use phoneword_core::Result;
use serde::{Deserialize, Serialize};

/// Front-end configuration that extends the base `Config` from core.
///
/// This configuration includes:
/// - All engine options from `phoneword_core::Config` (flattened via serde)
/// - The dictionary file to load
/// - An upper bound on the digits of a single phone number
/// - Whether the interactive console greets the user
///
/// # Example
///
/// ```rust
/// use phoneword::PhonewordConfig;
///
/// let config = PhonewordConfig::from_toml_str("max_digits = 12").unwrap();
/// assert_eq!(config.max_digits, Some(12));
/// assert!(config.banner);
/// let base = config.into_base();
/// assert_eq!(base.keypad.len(), 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PhonewordConfig {
    /// Base configuration fields (keypad layout)
    #[serde(flatten)]
    pub base: phoneword_core::Config,

    /// Word list, one word per line. Searched for when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dictionary: Option<PathBuf>,

    /// Phone numbers with more digits than this are skipped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_digits: Option<usize>,

    pub banner: bool,
}

impl Default for PhonewordConfig {
    fn default() -> Self {
        Self {
            base: phoneword_core::Config::default(),
            dictionary: None,
            max_digits: None,
            banner: true,
        }
    }
}

impl PhonewordConfig {
    pub fn load_toml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn save_toml<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Convert into the base config used to build an `Engine`.
    pub fn into_base(self) -> phoneword_core::Config {
        self.base
    }

    pub fn base(&self) -> &phoneword_core::Config {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut phoneword_core::Config {
        &mut self.base
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phoneword_core::PhonewordError;

    #[test]
    fn defaults() {
        let cfg = PhonewordConfig::default();
        assert!(cfg.banner);
        assert_eq!(cfg.dictionary, None);
        assert_eq!(cfg.max_digits, None);
        assert_eq!(cfg.base, phoneword_core::Config::default());
    }

    #[test]
    fn flattened_keypad_and_front_end_options() {
        let text = r#"
            keypad = ["2=CBA", "1=XY"]
            dictionary = "/tmp/words.txt"
            banner = false
        "#;
        let cfg = PhonewordConfig::from_toml_str(text).unwrap();
        assert_eq!(cfg.base.keypad, vec!["2=CBA", "1=XY"]);
        assert_eq!(cfg.dictionary, Some(PathBuf::from("/tmp/words.txt")));
        assert_eq!(cfg.max_digits, None);
        assert!(!cfg.banner);

        let keypad = cfg.base().keypad_mapping().unwrap();
        assert_eq!(keypad.letters_for('1'), Some(&['X', 'Y'][..]));
        assert!(!keypad.is_mapped('3'));
    }

    #[test]
    fn toml_roundtrip_through_file() {
        let mut cfg = PhonewordConfig {
            max_digits: Some(20),
            ..Default::default()
        };
        cfg.base_mut().keypad.push("0=OQ".into());

        let tmp = std::env::temp_dir().join(format!(
            "phoneword_frontend_config_{}.toml",
            std::process::id()
        ));
        cfg.save_toml(&tmp).unwrap();
        let loaded = PhonewordConfig::load_toml(&tmp).unwrap();
        let _ = std::fs::remove_file(&tmp);

        assert_eq!(loaded, cfg);
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = PhonewordConfig::from_toml_str("max_digits = \"many\"").unwrap_err();
        assert!(matches!(err, PhonewordError::ConfigParse(_)));
    }
}
