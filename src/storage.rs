use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AppError;

pub const DEFAULT_DESTINATION: &str = "outputs";
pub const DEFAULT_FILE_NAME: &str = "table";

/// What to persist and where. Destination and name default to
/// `outputs/table.txt`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveOptions {
    pub file_content: String,
    pub file_destination: PathBuf,
    pub file_name: String,
}

impl SaveOptions {
    pub fn new(file_content: impl Into<String>) -> Self {
        SaveOptions {
            file_content: file_content.into(),
            file_destination: PathBuf::from(DEFAULT_DESTINATION),
            file_name: DEFAULT_FILE_NAME.to_string(),
        }
    }

    pub fn destination(mut self, dir: impl Into<PathBuf>) -> Self {
        self.file_destination = dir.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.file_name = name.into();
        self
    }

    /// `<destination>/<name>.txt`
    pub fn file_path(&self) -> PathBuf {
        self.file_destination.join(format!("{}.txt", self.file_name))
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SaveFile;

impl SaveFile {
    pub fn new() -> Self {
        SaveFile
    }

    /// Write the file, reporting only whether it worked. The cause of a
    /// failure is logged, not returned.
    pub fn execute(&self, options: &SaveOptions) -> bool {
        match self.save(options) {
            Ok(path) => {
                tracing::debug!(path = %path.display(), "file saved");
                true
            }
            Err(err) => {
                tracing::debug!(
                    kind = err.error_type(),
                    path = %err.path().display(),
                    "{err}"
                );
                false
            }
        }
    }

    /// Create the destination directory if needed and write the content,
    /// replacing any existing file. Returns the written path.
    pub fn save(&self, options: &SaveOptions) -> Result<PathBuf, AppError> {
        ensure_dir(&options.file_destination)?;

        let path = options.file_path();
        fs::write(&path, &options.file_content).map_err(|source| AppError::Write {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }
}

fn ensure_dir(dir: &Path) -> Result<(), AppError> {
    fs::create_dir_all(dir).map_err(|source| AppError::DirectoryCreate {
        path: dir.to_path_buf(),
        source,
    })
}
