use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Search topics used when a categories file does not list its own.
pub const DEFAULT_QUERY_TERMS: &[&str] = &[
    "sneakers",
    "running shoes",
    "basketball shoes",
    "sportswear",
    "streetwear",
    "athleisure",
];

/// A named group of real-world places, represented only by the keywords
/// used to recognise it in free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationCategory {
    pub name: String,
    pub keywords: Vec<String>,
}

impl LocationCategory {
    pub fn new<N, I, K>(name: N, keywords: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        Self {
            name: name.into(),
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CategoriesFile {
    /// Kept in file order; aggregation output breaks ties by this order.
    pub categories: Vec<LocationCategory>,
    #[serde(default = "default_queries")]
    pub queries: Vec<String>,
}

fn default_queries() -> Vec<String> {
    DEFAULT_QUERY_TERMS.iter().map(|q| (*q).to_string()).collect()
}

/// Built-in Chennai categories: malls vs. high-street districts.
#[must_use]
pub fn default_categories() -> Vec<LocationCategory> {
    vec![
        LocationCategory::new(
            "Malls",
            [
                "Phoenix Marketcity Chennai",
                "VR Chennai",
                "Express Avenue",
                "Forum Vijaya Mall",
            ],
        ),
        LocationCategory::new(
            "High Streets",
            [
                "T Nagar",
                "Nungambakkam",
                "Khader Nawaz Khan Road",
                "Anna Nagar",
            ],
        ),
    ]
}

/// Load and validate the location categories from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_categories(path: &Path) -> Result<CategoriesFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::CategoriesFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let file: CategoriesFile = serde_yaml::from_str(&content)?;

    validate_categories(&file)?;

    Ok(file)
}

fn validate_categories(file: &CategoriesFile) -> Result<(), ConfigError> {
    if file.categories.is_empty() {
        return Err(ConfigError::Validation(
            "at least one category is required".to_string(),
        ));
    }

    let mut seen_names = HashSet::new();

    for category in &file.categories {
        if category.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "category name must be non-empty".to_string(),
            ));
        }

        if !seen_names.insert(category.name.to_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "duplicate category name: '{}'",
                category.name
            )));
        }

        if category.keywords.is_empty() {
            return Err(ConfigError::Validation(format!(
                "category '{}' has no keywords",
                category.name
            )));
        }

        // A blank keyword is a substring of every text and would match everything.
        if category.keywords.iter().any(|k| k.trim().is_empty()) {
            return Err(ConfigError::Validation(format!(
                "category '{}' has a blank keyword",
                category.name
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "categories_test.rs"]
mod tests;
