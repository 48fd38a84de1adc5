use super::types::ResumeDocument;
use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

/// File name of the stored document inside the config directory
pub const DOCUMENT_FILE_NAME: &str = "resume.json";

/// Where resume documents come from and go to.
///
/// The scorer never touches a repository; callers load a snapshot, score it,
/// and save edits back.
pub trait DocumentRepository {
    fn load(&self) -> Result<ResumeDocument>;
    fn save(&self, document: &ResumeDocument) -> Result<()>;
}

/// Get the default document path (~/.config/resume-ats/resume.json)
pub fn get_document_path() -> Result<PathBuf> {
    Ok(crate::config::get_config_dir()?.join(DOCUMENT_FILE_NAME))
}

/// A document stored as pretty-printed JSON on disk
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DocumentRepository for JsonFileRepository {
    /// Load the document. A missing file is the empty document.
    fn load(&self) -> Result<ResumeDocument> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no stored document, starting empty");
            return Ok(ResumeDocument::default());
        }

        let file = File::open(&self.path)
            .with_context(|| format!("Failed to open resume document at {}", self.path.display()))?;

        let document: ResumeDocument = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse resume document at {}", self.path.display()))?;

        tracing::debug!(path = %self.path.display(), "loaded resume document");
        Ok(document)
    }

    /// Save the document atomically, creating the parent directory if needed
    fn save(&self, document: &ResumeDocument) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory at {}", parent.display()))?;
        }

        let mut file = AtomicWriteFile::open(&self.path)
            .with_context(|| format!("Failed to open atomic write file at {}", self.path.display()))?;

        serde_json::to_writer_pretty(&mut file, document)
            .context("Failed to serialize resume document")?;

        file.commit()
            .with_context(|| format!("Failed to save resume document to {}", self.path.display()))?;

        tracing::debug!(path = %self.path.display(), "saved resume document");
        Ok(())
    }
}

/// An in-process repository holding a single document
#[derive(Debug, Default)]
pub struct MemoryRepository {
    document: Mutex<ResumeDocument>,
}

impl MemoryRepository {
    pub fn new(document: ResumeDocument) -> Self {
        Self {
            document: Mutex::new(document),
        }
    }
}

impl DocumentRepository for MemoryRepository {
    fn load(&self) -> Result<ResumeDocument> {
        Ok(self
            .document
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    fn save(&self, document: &ResumeDocument) -> Result<()> {
        *self.document.lock().unwrap_or_else(PoisonError::into_inner) = document.clone();
        Ok(())
    }
}
