use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

use crate::model::memo::MemoList;

/// Error type for data file operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not keep a copy of unreadable {path}: {source}")]
    Backup {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not serialize tasks: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Default data file: `<data_dir>/memo/memo_data.json`, or the working
/// directory when the platform has no data dir.
pub fn default_data_file() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join("memo"))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("memo_data.json")
}

/// Render the list in the on-disk format (pretty JSON array, UTF-8)
pub fn to_json(list: &MemoList) -> Result<String, StoreError> {
    let mut out = serde_json::to_string_pretty(list)?;
    out.push('\n');
    Ok(out)
}

/// Parse raw file bytes. Bytes that aren't UTF-8 are a parse error.
pub fn from_json(bytes: &[u8]) -> Result<MemoList, serde_json::Error> {
    serde_json::from_slice(bytes)
}

/// Read the task list. A missing file is an empty list.
pub fn load_tasks(path: &Path) -> Result<MemoList, StoreError> {
    if !path.exists() {
        debug!(path = %path.display(), "no data file yet");
        return Ok(MemoList::new());
    }
    let bytes = fs::read(path).map_err(|e| StoreError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    from_json(&bytes).map_err(|e| StoreError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Load for interactive use: any failure is logged and yields an empty list.
/// The flag is set when a file exists but couldn't be loaded; its owner must
/// keep a copy with [`back_up_unreadable`] before the first save replaces it.
pub fn load_or_empty(path: &Path) -> (MemoList, bool) {
    match load_tasks(path) {
        Ok(list) => {
            info!(path = %path.display(), tasks = list.len(), "loaded tasks");
            (list, false)
        }
        Err(e) => {
            warn!("{}; starting with an empty list", e);
            (MemoList::new(), true)
        }
    }
}

/// Copy `path` to `<path>.corrupt-<timestamp>` and return the copy's path
pub fn back_up_unreadable(path: &Path) -> std::io::Result<PathBuf> {
    let stamp = chrono::Local::now().format("%Y%m%d%H%M%S");
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(format!(".corrupt-{}", stamp));
    let backup = path.with_file_name(name);
    fs::copy(path, &backup)?;
    Ok(backup)
}

/// Write the whole list, replacing the file atomically
pub fn save_tasks(path: &Path, list: &MemoList) -> Result<(), StoreError> {
    let content = to_json(list)?;
    let write_err = |e: std::io::Error| StoreError::Write {
        path: path.to_path_buf(),
        source: e,
    };
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(write_err)?;
    }
    atomic_write(path, content.as_bytes()).map_err(write_err)?;
    debug!(path = %path.display(), tasks = list.len(), "saved tasks");
    Ok(())
}

/// Write to a temp file in the target's directory, then rename over it
pub fn atomic_write(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(d) if !d.as_os_str().is_empty() => d,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
