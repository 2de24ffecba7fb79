use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Get the taskpad directory - checks for a local .taskpad first, then falls
/// back to the global ~/.taskpad
pub fn get_data_dir() -> Result<PathBuf> {
    let current_dir = env::current_dir().context("Could not determine current directory")?;
    if let Some(local_dir) = find_local_dir(&current_dir) {
        return Ok(local_dir);
    }

    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".taskpad"))
}

/// Find a local .taskpad directory by walking up the directory tree
fn find_local_dir(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir;

    loop {
        let data_dir = current.join(".taskpad");
        if data_dir.exists() && data_dir.is_dir() {
            return Some(data_dir);
        }
        current = current.parent()?;
    }
}

/// Ensure the taskpad directory exists
pub fn ensure_data_dir() -> Result<PathBuf> {
    let dir = get_data_dir()?;
    if !dir.exists() {
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    }
    Ok(dir)
}

/// Initialize a local .taskpad directory in the current directory
pub fn init_local_dir() -> Result<PathBuf> {
    let current_dir = env::current_dir().context("Could not determine current directory")?;
    let data_dir = current_dir.join(".taskpad");

    if data_dir.exists() {
        anyhow::bail!("Taskpad directory already exists: {}", data_dir.display());
    }

    fs::create_dir_all(&data_dir)
        .with_context(|| format!("Failed to create directory: {}", data_dir.display()))?;

    Ok(data_dir)
}

/// Path of the blob store file
pub fn store_file() -> Result<PathBuf> {
    Ok(ensure_data_dir()?.join("store.json"))
}

/// Atomically write content to a file using temp file + rename
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    let dir = path.parent().context("File path has no parent directory")?;

    let mut temp_file =
        NamedTempFile::new_in(dir).context("Failed to create temporary file")?;

    temp_file
        .write_all(content.as_bytes())
        .context("Failed to write to temporary file")?;

    temp_file
        .as_file()
        .sync_all()
        .context("Failed to sync temporary file")?;

    temp_file
        .persist(path)
        .with_context(|| format!("Failed to persist file: {}", path.display()))?;

    Ok(())
}

/// A flat string-key to string-blob store, read once at startup and flushed
/// once at session end. On disk it is a single JSON object; each value is an
/// opaque blob the gateway encodes and decodes itself.
#[derive(Debug)]
pub struct KvStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl KvStore {
    /// Open the store at `path`, reading existing entries if the file is
    /// there. A malformed file is an error rather than silent data loss.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = if path.exists() {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read store: {}", path.display()))?;
            if content.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&content)
                    .with_context(|| format!("Malformed store file: {}", path.display()))?
            }
        } else {
            BTreeMap::new()
        };

        Ok(Self { path, entries })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }

    pub fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }

    /// Drop every entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write the current entries back to disk
    pub fn flush(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.entries)?;
        atomic_write(&self.path, &json)
    }
}
