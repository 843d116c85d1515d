//! Command-line arguments and the top-level run loop.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use crate::config::PhonewordConfig;
use crate::console::{open_phone_lists, Console};
use crate::source::load_engine;

/// Spell phone numbers as sequences of dictionary words.
///
/// Without phone-list files, numbers are read from standard input one per line.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "phoneword", version, about)]
pub struct Cli {
    /// Dictionary file, one word per line
    #[arg(short, long, value_name = "FILE")]
    pub dictionary: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Skip phone numbers with more digits than this
    #[arg(long, value_name = "N")]
    pub max_digits: Option<usize>,

    /// Do not print the banner in interactive mode
    #[arg(long)]
    pub no_banner: bool,

    /// Log debug output to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Files with one phone number per line
    #[arg(value_name = "PHONE_LIST")]
    pub phone_lists: Vec<PathBuf>,
}

impl Cli {
    /// Load the configuration file (if any) and apply command-line overrides.
    pub fn load_config(&self) -> anyhow::Result<PhonewordConfig> {
        let mut config = match &self.config {
            Some(path) => PhonewordConfig::load_toml(path)
                .with_context(|| format!("error loading config {}", path.display()))?,
            None => PhonewordConfig::default(),
        };
        if self.max_digits.is_some() {
            config.max_digits = self.max_digits;
        }
        if self.no_banner {
            config.banner = false;
        }
        Ok(config)
    }
}

/// Run the tool against the given input and output streams.
///
/// Readable phone lists are processed in batch; when none is given or none
/// can be opened the interactive console reads from `input`. Returns the
/// number of decompositions written.
pub fn run<R, W>(cli: &Cli, input: R, mut output: W) -> anyhow::Result<usize>
where
    R: BufRead,
    W: Write,
{
    let config = cli.load_config()?;
    let engine = load_engine(
        cli.dictionary.as_deref(),
        config.dictionary.as_deref(),
        config.base(),
    )?;
    let console = Console::new(engine).with_max_digits(config.max_digits);

    let lists = open_phone_lists(&cli.phone_lists);
    if lists.is_empty() {
        if !cli.phone_lists.is_empty() {
            tracing::warn!("no readable phone lists, reading from standard input");
        }
        console.run_interactive(input, &mut output, config.banner)
    } else {
        console.process_files(lists, output)
    }
}
