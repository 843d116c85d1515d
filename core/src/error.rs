//! Error type shared by the dictionary loader, keypad layouts and config.
use std::io;
use std::path::PathBuf;

/// Errors raised while building an engine. Searching itself never fails;
/// only the caller's consumer can abort a search.
#[derive(Debug, thiserror::Error)]
pub enum PhonewordError {
    /// The dictionary file could not be opened.
    #[error("failed to open dictionary {}: {source}", .path.display())]
    DictionaryOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading the dictionary failed part way (I/O or invalid UTF-8).
    #[error("failed to read dictionary line {line}: {source}")]
    DictionaryRead {
        line: usize,
        #[source]
        source: io::Error,
    },

    /// A keypad layout rule is not of the form `<digit>=<letters>`.
    #[error("invalid keypad rule '{0}', expected e.g. \"2=ABC\"")]
    InvalidKeypadRule(String),

    #[error("failed to read config: {0}")]
    ConfigRead(#[from] io::Error),

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, PhonewordError>;
