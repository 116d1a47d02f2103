use crate::Dictionary;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

/// Load every `*.json` file in `dir` into a single `Dictionary`.
///
/// Files are merged in sorted-filename order so that "later files override earlier ones" is
/// reproducible across platforms and filesystems, rather than depending on raw directory-listing
/// order (see DESIGN.md). A file that fails to parse is logged and skipped; the rest of the
/// directory still loads. A directory with no usable dictionary files yields an empty
/// `Dictionary`, whose `outline_cap()` is zero.
pub fn load_dir(dir: &Path) -> Result<Dictionary, LoadError> {
    let mut paths: Vec<_> = std::fs::read_dir(dir)
        .map_err(|e| LoadError::Directory(dir.to_path_buf(), e.to_string()))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|p| p.extension().and_then(|e| e.to_str()) == Some("json"))
        .collect();
    paths.sort();

    let mut dict = Dictionary::new();
    for path in paths {
        match load_file(&path) {
            Ok(entries) => dict.merge(entries),
            Err(e) => log::warn!("skipping dictionary file {:?}: {}", path, e),
        }
    }

    Ok(dict)
}

fn load_file(path: &Path) -> Result<HashMap<String, String>, LoadError> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| LoadError::Read(path.to_path_buf(), e.to_string()))?;
    serde_json::from_str(&contents).map_err(|e| LoadError::Parse(path.to_path_buf(), e.to_string()))
}

#[derive(Debug)]
pub enum LoadError {
    Directory(std::path::PathBuf, String),
    Read(std::path::PathBuf, String),
    Parse(std::path::PathBuf, String),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Directory(p, e) => write!(f, "cannot read dictionary directory {:?}: {}", p, e),
            LoadError::Read(p, e) => write!(f, "cannot read {:?}: {}", p, e),
            LoadError::Parse(p, e) => write!(f, "cannot parse {:?}: {}", p, e),
        }
    }
}

impl std::error::Error for LoadError {}
