//! Persistence for question sets - load/save JSON files and history snapshots.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::error::{AnswerKeyError, Result};
use crate::model::QuestionSet;

impl QuestionSet {
    /// Load a question set from a JSON file.
    ///
    /// The file is read as UTF-8 regardless of the host locale.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use answerkey::QuestionSet;
    /// let set = QuestionSet::load("src/data/questions.json").unwrap();
    /// println!("Questions: {}", set.len());
    /// ```
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let bytes = fs::read(path).map_err(|source| AnswerKeyError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_slice(&bytes).map_err(|source| AnswerKeyError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Encode the set as pretty-printed JSON.
    ///
    /// Two-space indentation, non-ASCII text written literally, no trailing newline.
    pub fn to_pretty_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Save the question set to a JSON file, replacing its contents.
    ///
    /// The set is encoded before the file is opened, so encoding failures leave
    /// the file alone. The write itself truncates in place and is not atomic.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = self.to_pretty_json()?;

        // Create parent directory if needed
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|source| AnswerKeyError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        fs::write(path, json).map_err(|source| AnswerKeyError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Copy the current contents of `path` into its history directory.
///
/// Returns the path of the snapshot. The snapshot is a byte-for-byte copy.
///
/// ```text
/// src/data/
/// ├── questions.json                      # Rewritten in place
/// └── questions.history/
///     └── 2024-12-30T10-00-00.json        # Contents before the rewrite
/// ```
pub fn backup(path: impl AsRef<Path>) -> Result<PathBuf> {
    let path = path.as_ref();
    let history_dir = history_directory(path);

    if !history_dir.exists() {
        fs::create_dir_all(&history_dir).map_err(|e| AnswerKeyError::Backup {
            path: history_dir.clone(),
            message: format!("failed to create history directory: {}", e),
        })?;
    }

    let timestamp = Utc::now().format("%Y-%m-%dT%H-%M-%S").to_string();
    let mut snapshot = history_dir.join(format!("{}.json", timestamp));
    let mut attempt = 1;
    while snapshot.exists() {
        snapshot = history_dir.join(format!("{}-{}.json", timestamp, attempt));
        attempt += 1;
    }

    fs::copy(path, &snapshot).map_err(|e| AnswerKeyError::Backup {
        path: path.to_path_buf(),
        message: format!("failed to copy to '{}': {}", snapshot.display(), e),
    })?;

    Ok(snapshot)
}

/// List snapshots of a question file, newest first.
pub fn list_history(path: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let history_dir = history_directory(path.as_ref());

    if !history_dir.exists() {
        return Ok(Vec::new());
    }

    let mut entries: Vec<PathBuf> = fs::read_dir(&history_dir)
        .map_err(|source| AnswerKeyError::Io {
            path: history_dir.clone(),
            source,
        })?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();

    // Sort by filename (timestamp) descending
    entries.sort_by(|a, b| b.cmp(a));

    Ok(entries)
}

/// Get the history directory for a question file.
///
/// ```
/// use answerkey::persistence::history_directory;
///
/// let dir = history_directory("src/data/questions.json");
/// assert_eq!(dir.to_string_lossy(), "src/data/questions.history");
/// ```
pub fn history_directory(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    let stem = path.file_stem().unwrap_or_default().to_string_lossy();
    let parent = path.parent().unwrap_or(Path::new("."));

    parent.join(format!("{}.history", stem))
}
