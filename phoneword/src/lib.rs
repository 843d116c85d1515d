//! phoneword
//!
//! Front end for `phoneword-core`: configuration file, dictionary lookup,
//! the interactive console and batch processing of phone-number lists.

pub mod cli;
pub mod config;
pub mod console;
pub mod source;

pub use cli::{run, Cli};
pub use config::PhonewordConfig;
pub use console::{open_phone_lists, Console, PhoneList};
pub use source::{load_engine, resolve_dictionary, DICT_ENV};

pub use phoneword_core::{Engine, KeypadMapping, PhonewordError, WordTrie};
