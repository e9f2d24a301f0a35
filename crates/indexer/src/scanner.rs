use crate::error::{Result, SegmentError};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Every participating file name contains this.
pub const SEGMENT_FILE_MARKER: &str = "号段数据";
/// Every participating file name ends with this.
pub const MODIFIED_SUFFIX: &str = "_修改后.csv";
/// Stripped from the file name to leave the operator.
pub const OPERATOR_SUFFIX: &str = "号段数据_修改后.csv";

/// One immediate subdirectory of the source root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityFolder {
    pub name: String,
    pub path: PathBuf,
}

/// A CSV file inside a city folder that follows the naming convention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentFile {
    pub file_name: String,
    pub operator: String,
    pub path: PathBuf,
}

/// Walks `root/<city>/<operator>号段数据_修改后.csv`.
pub struct SourceScanner {
    root: PathBuf,
}

impl SourceScanner {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Immediate subdirectories of the root, sorted by name.
    pub fn city_folders(&self) -> Result<Vec<CityFolder>> {
        if !self.root.exists() {
            return Err(SegmentError::RootNotFound(self.root.clone()));
        }
        if !self.root.is_dir() {
            return Err(SegmentError::NotADirectory(self.root.clone()));
        }

        let mut cities = Vec::new();
        for result in one_level(&self.root) {
            match result {
                Ok(entry) => {
                    if !entry.file_type().is_dir() {
                        continue;
                    }
                    cities.push(CityFolder {
                        name: entry.file_name().to_string_lossy().into_owned(),
                        path: entry.into_path(),
                    });
                }
                // Depth 0 means the root itself could not be listed.
                Err(e) if e.depth() == 0 => return Err(SegmentError::IoError(e.into())),
                Err(e) => log::warn!("Failed to read entry: {e}"),
            }
        }

        log::debug!(
            "Found {} city folders under {}",
            cities.len(),
            self.root.display()
        );
        Ok(cities)
    }

    /// Participating files of one city, sorted by file name.
    pub fn segment_files(&self, city: &CityFolder) -> std::io::Result<Vec<SegmentFile>> {
        let mut files = Vec::new();
        for result in one_level(&city.path) {
            match result {
                Ok(entry) => {
                    let file_name = entry.file_name().to_string_lossy().into_owned();
                    let Some(operator) = operator_from_file_name(&file_name) else {
                        continue;
                    };
                    files.push(SegmentFile {
                        file_name,
                        operator,
                        path: entry.into_path(),
                    });
                }
                Err(e) if e.depth() == 0 => return Err(e.into()),
                Err(e) => log::warn!("Failed to read entry: {e}"),
            }
        }
        Ok(files)
    }
}

fn one_level(dir: &Path) -> walkdir::IntoIter {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
}

/// Operator for a participating file name, `None` if the name does not
/// follow the convention.
pub fn operator_from_file_name(file_name: &str) -> Option<String> {
    if !file_name.contains(SEGMENT_FILE_MARKER) || !file_name.ends_with(MODIFIED_SUFFIX) {
        return None;
    }
    Some(file_name.replace(OPERATOR_SUFFIX, "").trim().to_string())
}
