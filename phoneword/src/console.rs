//! Interactive and batch front ends over an [`Engine`].

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use phoneword_core::utils::clean_phone;
use phoneword_core::Engine;

const BANNER: &str = "\
 1-800-PHONEWORD
 ---------------
 Type a phone number and press enter to list every way its
 digits spell dictionary words. End input (Ctrl-D) to quit.

";

/// A readable phone-number list given on the command line.
#[derive(Debug)]
pub struct PhoneList<R> {
    pub path: PathBuf,
    pub reader: R,
}

/// Open every argument that names a readable file.
///
/// Arguments that cannot be opened are logged and skipped.
pub fn open_phone_lists<P: AsRef<Path>>(args: &[P]) -> Vec<PhoneList<BufReader<File>>> {
    args.iter()
        .filter_map(|arg| {
            let path = arg.as_ref();
            match File::open(path) {
                Ok(file) if path.is_file() => Some(PhoneList {
                    path: path.to_path_buf(),
                    reader: BufReader::new(file),
                }),
                Ok(_) => {
                    tracing::warn!(path = %path.display(), "not a phone list file, skipping");
                    None
                }
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "cannot open phone list, skipping"
                    );
                    None
                }
            }
        })
        .collect()
}

/// Writes decompositions of phone numbers, one per line.
#[derive(Debug, Clone)]
pub struct Console {
    engine: Engine,
    max_digits: Option<usize>,
}

impl Console {
    pub fn new(engine: Engine) -> Self {
        Self {
            engine,
            max_digits: None,
        }
    }

    /// Skip phone numbers with more than `max` digits.
    pub fn with_max_digits(mut self, max: Option<usize>) -> Self {
        self.max_digits = max;
        self
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Decompose one input line and write every result to `out`.
    ///
    /// Returns the number of lines written. A write failure stops the search.
    pub fn process_line<W: Write>(&self, line: &str, out: &mut W) -> io::Result<usize> {
        if let Some(max) = self.max_digits {
            let digits = clean_phone(line).len();
            if digits > max {
                tracing::warn!(digits, max, "phone number too long, skipping");
                return Ok(0);
            }
        }
        self.engine
            .matches(line, |decomposition| writeln!(out, "{decomposition}"))
    }

    /// Read phone numbers from `input` until end of input.
    ///
    /// Output is flushed after every line so results show up while typing.
    pub fn run_interactive<R, W>(
        &self,
        input: R,
        out: &mut W,
        banner: bool,
    ) -> anyhow::Result<usize>
    where
        R: BufRead,
        W: Write,
    {
        if banner {
            out.write_all(BANNER.as_bytes())
                .context("error writing the banner")?;
            out.flush()?;
        }

        let mut total = 0;
        for line in input.lines() {
            let line = line.context("error reading phone number")?;
            total += self
                .process_line(&line, out)
                .context("error writing decompositions")?;
            out.flush()?;
        }
        Ok(total)
    }

    /// Decompose every line of every list through one buffered writer.
    ///
    /// Lists are processed in order; nothing is deduplicated.
    pub fn process_files<R, W>(&self, lists: Vec<PhoneList<R>>, out: W) -> anyhow::Result<usize>
    where
        R: BufRead,
        W: Write,
    {
        let mut out = BufWriter::new(out);
        let mut total = 0;
        for list in lists {
            tracing::info!(path = %list.path.display(), "processing phone list");
            for (idx, line) in list.reader.lines().enumerate() {
                let line = line.with_context(|| {
                    format!("error reading line {} of {}", idx + 1, list.path.display())
                })?;
                total += self
                    .process_line(&line, &mut out)
                    .context("error writing decompositions")?;
            }
        }
        out.flush().context("error flushing output")?;
        Ok(total)
    }
}
