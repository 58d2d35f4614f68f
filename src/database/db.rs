//! Database implementation
//!
//! File-backed store with an RwLock guarding the backing file.

use std::fs::{self, File};
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};

use parking_lot::RwLock;

use crate::error::{ChirpyError, Result};

use super::{Chirp, Document};

/// Single-file JSON database
///
/// ## Concurrency:
/// - `create_chirp`: exclusive lock across load → assign id → rewrite,
///   so two concurrent inserts can never compute the same id
/// - `list_chirps`: shared lock, only loads
/// - Single process only; nothing coordinates two processes on one file
pub struct Database {
    /// Backing JSON file
    path: PathBuf,

    /// Serializes access to the backing file
    lock: RwLock<()>,
}

impl Database {
    /// Open the database at `path`, creating it if absent
    ///
    /// A missing file (and any missing parent directories) is created with
    /// the empty document. An existing file is left untouched and only
    /// validated when first loaded. Any other stat failure (e.g. a parent
    /// that is not a directory) is only logged here and surfaces as a
    /// `Load` error on first use.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        match fs::metadata(&path) {
            Ok(_) => {
                tracing::debug!("Using existing database at {}", path.display());
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Self::initialize(&path).map_err(|e| {
                    ChirpyError::Initialization(format!("{}: {}", path.display(), e))
                })?;
                tracing::info!("Created empty database at {}", path.display());
            }
            Err(e) => {
                // Surfaces as a load error on first use
                tracing::warn!("Could not stat database {}: {}", path.display(), e);
            }
        }

        Ok(Self {
            path,
            lock: RwLock::new(()),
        })
    }

    /// Create a chirp with the next free id
    ///
    /// Steps:
    /// 1. Acquire exclusive lock
    /// 2. Load the full document
    /// 3. Assign id = max + 1 (or 1)
    /// 4. Rewrite the full document
    pub fn create_chirp(&self, body: &str) -> Result<Chirp> {
        let _guard = self.lock.write();

        let mut document = self.load()?;
        let chirp = Chirp::new(document.next_id()?, body);
        document.insert(chirp.clone());

        Self::persist(&self.path, &document)
            .map_err(|e| ChirpyError::Write(format!("{}: {}", self.path.display(), e)))?;

        tracing::debug!(id = chirp.id, total = document.len(), "Created chirp");
        Ok(chirp)
    }

    /// List every chirp (order unspecified)
    pub fn list_chirps(&self) -> Result<Vec<Chirp>> {
        let _guard = self.lock.read();

        let document = self.load()?;
        tracing::trace!(count = document.len(), "Listed chirps");
        Ok(document.into_chirps())
    }

    /// Get the backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// Read and parse the whole document (caller holds the lock)
    fn load(&self) -> Result<Document> {
        let bytes = fs::read(&self.path)
            .map_err(|e| ChirpyError::Load(format!("{}: {}", self.path.display(), e)))?;

        Document::from_slice(&bytes)
    }

    /// Write the empty document, creating parent directories first
    fn initialize(path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        Self::persist(path, &Document::default())
    }

    /// Replace the backing file with `document`
    ///
    /// Writes a sibling temp file, syncs it, then renames over the target so
    /// a failed write never leaves a truncated document behind.
    fn persist(path: &Path, document: &Document) -> io::Result<()> {
        let bytes = document
            .to_vec()
            .map_err(|e| io::Error::new(ErrorKind::InvalidData, e.to_string()))?;
        let tmp_path = Self::temp_path(path);

        {
            let mut file = File::create(&tmp_path)?;
            file.write_all(&bytes)?;
            file.sync_all()?;
        }

        if let Err(e) = fs::rename(&tmp_path, path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e);
        }

        Ok(())
    }

    /// "database.json" → "database.json.tmp"
    fn temp_path(path: &Path) -> PathBuf {
        let mut name = path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        path.with_file_name(name)
    }
}
