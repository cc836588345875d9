use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Could not create directory {}: {source}", path.display())]
    DirectoryCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Could not write file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl AppError {
    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::DirectoryCreate { .. } => "directory_create",
            AppError::Write { .. } => "write",
        }
    }

    /// Path the failed operation was targeting.
    pub fn path(&self) -> &std::path::Path {
        match self {
            AppError::DirectoryCreate { path, .. } | AppError::Write { path, .. } => path,
        }
    }
}
