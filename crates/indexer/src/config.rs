use std::path::{Path, PathBuf};

/// Environment variable naming the default source root.
pub const SOURCE_ROOT_ENV: &str = "MOBILE_SEGMENT_SOURCE_ROOT";

/// Where segment data lives. Resolved once at startup and passed to every
/// listing or query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceConfig {
    pub source_root: PathBuf,
}

impl SourceConfig {
    pub fn new(source_root: impl Into<PathBuf>) -> Self {
        Self {
            source_root: source_root.into(),
        }
    }

    /// An explicit root wins over the environment. `None` when neither is
    /// set.
    pub fn resolve(explicit: Option<&Path>) -> Option<Self> {
        let raw = std::env::var(SOURCE_ROOT_ENV).ok();
        resolve_source_root(explicit, raw.as_deref()).map(Self::new)
    }
}

fn resolve_source_root(explicit: Option<&Path>, env_value: Option<&str>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    env_value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}
