//! Mapping category names to corpus files.

use std::path::{Path, PathBuf};

/// Default corpus file extension
pub const DEFAULT_EXTENSION: &str = "bin";

/// Resolves a category name (e.g. `"nouns"`) to a corpus file path.
///
/// Implementations must be deterministic for the lifetime of the value:
/// the same name always yields the same path.
pub trait CorpusLocator {
    fn locate(&self, category: &str) -> PathBuf;
}

impl<L: CorpusLocator + ?Sized> CorpusLocator for &L {
    fn locate(&self, category: &str) -> PathBuf {
        (**self).locate(category)
    }
}

/// Looks up `<dir>/<category>.<extension>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryLocator {
    dir: PathBuf,
    extension: String,
}

impl DirectoryLocator {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl CorpusLocator for DirectoryLocator {
    fn locate(&self, category: &str) -> PathBuf {
        if self.extension.is_empty() {
            self.dir.join(category)
        } else {
            self.dir.join(format!("{category}.{}", self.extension))
        }
    }
}
