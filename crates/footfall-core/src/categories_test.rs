use std::path::Path;

use super::*;

fn file_with(categories: Vec<LocationCategory>) -> CategoriesFile {
    CategoriesFile {
        categories,
        queries: default_queries(),
    }
}

#[test]
fn validate_accepts_default_categories() {
    assert!(validate_categories(&file_with(default_categories())).is_ok());
}

#[test]
fn validate_rejects_empty_category_list() {
    let err = validate_categories(&file_with(vec![])).unwrap_err();
    assert!(err.to_string().contains("at least one category"));
}

#[test]
fn validate_rejects_blank_name() {
    let err =
        validate_categories(&file_with(vec![LocationCategory::new("  ", ["mall"])])).unwrap_err();
    assert!(err.to_string().contains("non-empty"));
}

#[test]
fn validate_rejects_duplicate_name_case_insensitive() {
    let err = validate_categories(&file_with(vec![
        LocationCategory::new("Malls", ["Express Avenue"]),
        LocationCategory::new("malls", ["VR Chennai"]),
    ]))
    .unwrap_err();
    assert!(err.to_string().contains("duplicate category name"));
}

#[test]
fn validate_rejects_missing_keywords() {
    let err = validate_categories(&file_with(vec![LocationCategory::new(
        "Malls",
        Vec::<String>::new(),
    )]))
    .unwrap_err();
    assert!(err.to_string().contains("has no keywords"));
}

#[test]
fn validate_rejects_blank_keyword() {
    let err = validate_categories(&file_with(vec![LocationCategory::new(
        "High Streets",
        ["T Nagar", " "],
    )]))
    .unwrap_err();
    assert!(err.to_string().contains("blank keyword"));
}

#[test]
fn queries_default_when_absent_from_yaml() {
    let yaml = "categories:\n  - name: Malls\n    keywords: [\"Express Avenue\"]\n";
    let file: CategoriesFile = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(file.queries.len(), DEFAULT_QUERY_TERMS.len());
    assert_eq!(file.queries[0], "sneakers");
}

#[test]
fn yaml_preserves_category_order() {
    let yaml = "categories:\n  - name: Zeta\n    keywords: [z]\n  - name: Alpha\n    keywords: [a]\n";
    let file: CategoriesFile = serde_yaml::from_str(yaml).unwrap();
    let names: Vec<&str> = file.categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Zeta", "Alpha"]);
}

#[test]
fn load_categories_reports_missing_file() {
    let err = load_categories(Path::new("/nonexistent/categories.yaml")).unwrap_err();
    assert!(matches!(err, ConfigError::CategoriesFileIo { .. }));
}

#[test]
fn load_categories_from_real_file() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("config")
        .join("categories.yaml");
    assert!(
        path.exists(),
        "categories.yaml missing at {path:?}; required for this test"
    );
    let file = load_categories(&path).unwrap();
    assert_eq!(file.categories, default_categories());
    assert!(!file.queries.is_empty());
}

#[test]
fn category_serializes_name_and_keywords() {
    let json = serde_json::to_value(LocationCategory::new("Malls", ["VR Chennai"])).unwrap();
    assert_eq!(json["name"], "Malls");
    assert_eq!(json["keywords"][0], "VR Chennai");
}
