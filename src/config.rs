use std::path::PathBuf;

pub const DEFAULT_BASE: i64 = 10;
pub const DEFAULT_LIMIT: i64 = 10;
pub const DEFAULT_FILE_NAME: &str = "multiplication-table";
pub const DEFAULT_DESTINATION: &str = crate::storage::DEFAULT_DESTINATION;

/// Resolved configuration for a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub base: i64,
    pub limit: i64,
    pub show_table: bool,
    pub file_destination: PathBuf,
    pub file_name: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            base: DEFAULT_BASE,
            limit: DEFAULT_LIMIT,
            show_table: false,
            file_destination: PathBuf::from(DEFAULT_DESTINATION),
            file_name: DEFAULT_FILE_NAME.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RunConfig::default();
        assert_eq!(config.base, 10);
        assert_eq!(config.limit, 10);
        assert!(!config.show_table);
        assert_eq!(config.file_destination, PathBuf::from("outputs"));
        assert_eq!(config.file_name, "multiplication-table");
    }
}
