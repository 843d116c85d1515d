//! Locating and loading the word list.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use phoneword_core::{Config, Engine};

/// Environment variable naming a dictionary file.
pub const DICT_ENV: &str = "PHONEWORD_DICT";

/// Word lists shipped by most Unix systems.
const SYSTEM_WORD_LISTS: &[&str] = &["/usr/share/dict/words", "/usr/dict/words"];

/// Find the dictionary file to load.
///
/// A path named on the command line or in the configuration must exist.
/// Otherwise the candidates are searched in order:
/// 1. `PHONEWORD_DICT` environment variable
/// 2. `/usr/share/dict/words`
/// 3. `/usr/dict/words`
pub fn resolve_dictionary(
    explicit: Option<&Path>,
    configured: Option<&Path>,
) -> anyhow::Result<PathBuf> {
    let env_path = std::env::var_os(DICT_ENV).map(PathBuf::from);
    resolve_with(explicit, configured, build_search_paths(env_path))
}

fn resolve_with(
    explicit: Option<&Path>,
    configured: Option<&Path>,
    search_paths: Vec<PathBuf>,
) -> anyhow::Result<PathBuf> {
    if let Some(path) = explicit.or(configured) {
        if !path.is_file() {
            bail!("custom dictionary file not found: {}", path.display());
        }
        return Ok(path.to_path_buf());
    }

    if let Some(found) = search_paths.iter().find(|p| p.is_file()) {
        tracing::debug!(path = %found.display(), "using dictionary from search path");
        return Ok(found.clone());
    }

    bail!(
        "could not find a dictionary in any of the search paths:\n{}",
        search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    )
}

/// Build the list of files to search for a dictionary.
fn build_search_paths(env_path: Option<PathBuf>) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(p) = env_path {
        paths.push(p);
    }
    paths.extend(SYSTEM_WORD_LISTS.iter().map(PathBuf::from));
    paths
}

/// Resolve the dictionary and build an engine over it.
pub fn load_engine(
    explicit: Option<&Path>,
    configured: Option<&Path>,
    config: &Config,
) -> anyhow::Result<Engine> {
    let path = resolve_dictionary(explicit, configured)?;
    Engine::from_path(&path, config)
        .with_context(|| format!("error trying to load the dictionary file {}", path.display()))
}
