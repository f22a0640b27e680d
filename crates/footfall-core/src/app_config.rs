use std::path::PathBuf;

use crate::categories::{load_categories, CategoriesFile};
use crate::ConfigError;

/// Runtime settings shared by the scoring engine and its callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// YAML file holding the location categories and search topics.
    pub categories_path: PathBuf,
    /// Keywords per search-interest request. The upstream source caps this at 5.
    pub trends_batch_size: usize,
}

impl AppConfig {
    /// Load and validate the categories file named by `categories_path`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
    pub fn load_categories(&self) -> Result<CategoriesFile, ConfigError> {
        load_categories(&self.categories_path)
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::categories::default_categories;

    #[test]
    fn load_categories_reads_configured_path() {
        let config = AppConfig {
            categories_path: Path::new(env!("CARGO_MANIFEST_DIR"))
                .join("../../config/categories.yaml"),
            trends_batch_size: 5,
        };
        let file = config.load_categories().unwrap();
        assert_eq!(file.categories, default_categories());
        assert_eq!(file.queries.len(), 6);
    }

    #[test]
    fn load_categories_reports_missing_file() {
        let config = AppConfig {
            categories_path: PathBuf::from("/nonexistent/footfall/categories.yaml"),
            trends_batch_size: 5,
        };
        let err = config.load_categories().unwrap_err();
        assert!(
            matches!(err, ConfigError::CategoriesFileIo { ref path, .. } if path.contains("nonexistent")),
            "got: {err:?}"
        );
    }
}
