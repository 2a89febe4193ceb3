//! Runtime properties loading and version lookup.

use crate::bundler::error::{Error, Result};
use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

/// Key holding the JavaFX runtime version.
pub const VERSION_KEY: &str = "javafx.runtime.version";

/// Key/value pairs loaded from a properties file. Read-only after load.
#[derive(Debug, Clone, Default)]
pub struct RuntimeProperties {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl RuntimeProperties {
    /// Loads and parses a UTF-8 properties file.
    ///
    /// The file is read in one scoped call, so the handle is released on every
    /// exit path.
    ///
    /// # Errors
    ///
    /// [`Error::PropertiesLoad`] on any I/O or decoding failure.
    pub async fn load(path: &Path) -> Result<Self> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| Error::PropertiesLoad {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(Self {
            path: path.to_path_buf(),
            entries: parse(&content),
        })
    }

    #[cfg(test)]
    fn from_str_at(path: impl Into<PathBuf>, content: &str) -> Self {
        Self {
            path: path.into(),
            entries: parse(content),
        }
    }

    /// Looks up a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns the runtime version.
    ///
    /// # Errors
    ///
    /// [`Error::MissingVersionKey`] when the key is absent or blank.
    pub fn runtime_version(&self) -> Result<&str> {
        self.get(VERSION_KEY)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| Error::MissingVersionKey {
                path: self.path.clone(),
                key: VERSION_KEY.to_string(),
            })
    }
}

/// Reads the JavaFX runtime version from a properties file.
pub async fn read_version(path: &Path) -> Result<String> {
    let props = RuntimeProperties::load(path).await?;
    Ok(props.runtime_version()?.to_string())
}

/// Splits properties text into entries.
///
/// Comment lines start with `#` or `!`. A line ending in an unescaped `\`
/// continues on the next line. The key ends at the first `=`, `:` or
/// whitespace; whitespace may be followed by one `=` or `:`. The value keeps
/// everything after that, including further separators.
fn parse(content: &str) -> HashMap<String, String> {
    let mut entries = HashMap::new();
    let mut logical = String::new();

    for raw in content.lines() {
        let line = raw.trim_start();

        if logical.is_empty() && (line.is_empty() || line.starts_with('#') || line.starts_with('!')) {
            continue;
        }

        if continues(line) {
            logical.push_str(&line[..line.len() - 1]);
            continue;
        }

        logical.push_str(line);
        if let Some((key, value)) = split_entry(&logical) {
            entries.insert(key, value);
        }
        logical.clear();
    }

    // Continuation on the last line of the file
    if let Some((key, value)) = split_entry(&logical) {
        entries.insert(key, value);
    }

    entries
}

fn continues(line: &str) -> bool {
    let trailing = line.chars().rev().take_while(|c| *c == '\\').count();
    trailing % 2 == 1
}

fn split_entry(line: &str) -> Option<(String, String)> {
    let line = line.trim_start();
    let (key, rest) = match line.find(|c: char| c == '=' || c == ':' || c.is_whitespace()) {
        Some(idx) => line.split_at(idx),
        None => (line, ""),
    };
    if key.is_empty() {
        return None;
    }

    let rest = rest.trim_start();
    let value = rest
        .strip_prefix(['=', ':'])
        .unwrap_or(rest)
        .trim_start();
    Some((key.to_string(), value.to_string()))
}
