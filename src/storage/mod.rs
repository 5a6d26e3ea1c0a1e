//! Persistent storage
//!
//! App-shell persistence for conversation summaries. The hero itself owns no
//! persisted state; it only reads what the app loads from here.

use std::path::PathBuf;
use thiserror::Error;

pub mod summaries;

/// Storage-related errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to access data directory: {0}")]
    DataDirError(String),
    #[error("Failed to read file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Failed to serialize/deserialize JSON: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Conversation not found: {0}")]
    ConversationNotFound(String),
}

/// Get the application data directory
///
/// Platform-specific:
/// - Windows: `C:\Users\{user}\AppData\Roaming\Perch\Perch`
/// - macOS: `/Users/{user}/Library/Application Support/com.Perch.Perch`
/// - Linux: `/home/{user}/.local/share/perch`
pub fn get_data_dir() -> Result<PathBuf, StorageError> {
    directories::ProjectDirs::from("com", "Perch", "Perch")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| StorageError::DataDirError("Could not determine data directory".to_string()))
}

/// Initialize the storage directory structure
///
/// Creates `{data_dir}/conversations/` for the summary JSON files.
pub fn init_storage() -> Result<(), StorageError> {
    let data_dir = get_data_dir()?;

    let conversations_dir = data_dir.join("conversations");
    std::fs::create_dir_all(&conversations_dir)?;

    tracing::info!("Initialized storage at: {}", data_dir.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_dir_retrieval() {
        let result = get_data_dir();
        assert!(result.is_ok());
        let path = result.unwrap();
        assert!(path.to_string_lossy().to_lowercase().contains("perch"));
    }
}
