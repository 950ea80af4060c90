//! Registry of class names known to exist in the target SDK

use crate::{GeneratorError, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Membership test over known class names
///
/// The resolvers only ever read from a registry.
pub trait ClassRegistry {
    fn has(&self, name: &str) -> bool;
}

/// Set-backed [`ClassRegistry`]
#[derive(Debug, Clone, Default)]
pub struct KnownClasses {
    names: HashSet<String>,
}

impl KnownClasses {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load class names from a text file, one per line
    ///
    /// Blank lines and lines starting with `#` are ignored.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            GeneratorError::Config(format!(
                "Failed to read class list {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        Ok(Self::from_lines(&content))
    }

    pub fn from_lines(content: &str) -> Self {
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl ClassRegistry for KnownClasses {
    fn has(&self, name: &str) -> bool {
        self.names.contains(name)
    }
}

impl<S: Into<String>> FromIterator<S> for KnownClasses {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}
