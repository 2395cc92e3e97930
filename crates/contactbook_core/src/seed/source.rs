//! Seed document sources.

use crate::model::contact::Contact;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// File name of the seed document, relative to the data root.
pub const DEFAULT_SEED_FILE: &str = "contacts.json";

/// Failure to obtain or decode the seed document.
///
/// Never surfaced past [`super::initialize`]; it is logged and recovered.
#[derive(Debug)]
pub enum SeedLoadError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        source_name: String,
        source: serde_json::Error,
    },
}

impl Display for SeedLoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read seed `{}`: {source}", path.display())
            }
            Self::Parse {
                source_name,
                source,
            } => write!(f, "seed `{source_name}` is not a contact list: {source}"),
        }
    }
}

impl Error for SeedLoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
        }
    }
}

/// Provider of the static initial-data document.
pub trait SeedSource {
    /// Fetches and parses the ordered seed contacts.
    fn fetch(&self) -> Result<Vec<Contact>, SeedLoadError>;
    /// Short label for log events.
    fn describe(&self) -> String;
}

/// Seed document read from a JSON file on disk.
#[derive(Debug, Clone)]
pub struct FileSeedSource {
    path: PathBuf,
}

impl FileSeedSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Uses [`DEFAULT_SEED_FILE`] inside `root`.
    pub fn in_dir(root: impl AsRef<Path>) -> Self {
        Self::new(root.as_ref().join(DEFAULT_SEED_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SeedSource for FileSeedSource {
    fn fetch(&self) -> Result<Vec<Contact>, SeedLoadError> {
        let raw = std::fs::read_to_string(&self.path).map_err(|source| SeedLoadError::Io {
            path: self.path.clone(),
            source,
        })?;
        parse_seed(&raw, &self.describe())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Seed document held in memory, e.g. compiled in with `include_str!`.
#[derive(Debug, Clone)]
pub struct StaticSeedSource {
    document: String,
}

impl StaticSeedSource {
    pub fn new(document: impl Into<String>) -> Self {
        Self {
            document: document.into(),
        }
    }
}

impl SeedSource for StaticSeedSource {
    fn fetch(&self) -> Result<Vec<Contact>, SeedLoadError> {
        parse_seed(&self.document, "static")
    }

    fn describe(&self) -> String {
        "static".to_string()
    }
}

fn parse_seed(raw: &str, source_name: &str) -> Result<Vec<Contact>, SeedLoadError> {
    serde_json::from_str(raw).map_err(|source| SeedLoadError::Parse {
        source_name: source_name.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::{FileSeedSource, SeedLoadError, SeedSource, StaticSeedSource};

    #[test]
    fn static_seed_ignores_unknown_fields_and_keeps_order() {
        let seed = StaticSeedSource::new(
            r#"[{"id":3,"name":"Cesc","email":"c@x.io","phone":"1","nickname":"C"},
                {"id":1,"name":"Anna","email":"a@x.io","phone":"2"}]"#,
        );
        let contacts = seed.fetch().unwrap();
        assert_eq!(
            contacts.iter().map(|c| c.id).collect::<Vec<_>>(),
            vec![3, 1]
        );
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let seed = FileSeedSource::in_dir(dir.path());
        assert!(matches!(seed.fetch(), Err(SeedLoadError::Io { .. })));
    }

    #[test]
    fn non_array_document_is_parse_error() {
        let seed = StaticSeedSource::new(r#"{"contacts":[]}"#);
        assert!(matches!(seed.fetch(), Err(SeedLoadError::Parse { .. })));
    }
}
