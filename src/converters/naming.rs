//! Name normalization shared by scenario names and feature file names

use crate::error::{BddError, Result};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static NON_WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\W+").expect("valid regex"));

/// Collapse every run of non-word characters to one space and trim.
pub fn normalize_name(name: &str) -> String {
    NON_WORD_RE.replace_all(name, " ").trim().to_string()
}

/// Filename-safe stem for a feature title: the normalized name with spaces
/// turned into underscores.
pub fn title_stem(title: &str) -> Result<String> {
    let normalized = normalize_name(title);
    if normalized.is_empty() {
        return Err(BddError::InvalidTitle(format!(
            "'{}' has no word characters to build a file name from",
            title
        )));
    }
    Ok(normalized.replace(' ', "_"))
}

/// `<dir>/<stem>.feature` for a title
pub fn feature_path(dir: &Path, title: &str) -> Result<PathBuf> {
    Ok(dir.join(format!("{}.feature", title_stem(title)?)))
}

/// Fail if `existing_text` was generated for a different title that maps to
/// the same file. Text without a `Feature:` header is never claimed by a title.
pub fn check_title_collision(existing_text: &str, title: &str, path: &Path) -> Result<()> {
    let existing = existing_text
        .lines()
        .find_map(|line| line.trim().strip_prefix("Feature:"))
        .map(str::trim);

    match existing {
        Some(existing) if existing != title.trim() => Err(BddError::TitleCollision {
            title: title.to_string(),
            existing: existing.to_string(),
            path: path.to_path_buf(),
        }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("Finds Pets by status"), "Finds Pets by status");
        assert_eq!(normalize_name("  Update an existing pet!! "), "Update an existing pet");
        assert_eq!(normalize_name("GET /pet/{petId}"), "GET pet petId");
        assert_eq!(normalize_name("user_name (v2)"), "user_name v2");
        assert_eq!(normalize_name("Crème brûlée"), "Crème brûlée");
    }

    #[test]
    fn test_titles_differing_in_punctuation_share_a_stem() {
        assert_eq!(title_stem("Pet API!").unwrap(), "Pet_API");
        assert_eq!(title_stem("Pet API").unwrap(), "Pet_API");
        assert_eq!(title_stem("Petstore API Testing").unwrap(), "Petstore_API_Testing");
    }

    #[test]
    fn test_empty_title_stem() {
        assert!(matches!(title_stem("?!"), Err(BddError::InvalidTitle(_))));
    }

    #[test]
    fn test_feature_path() {
        let path = feature_path(Path::new("features"), "Pet API").unwrap();
        assert_eq!(path, PathBuf::from("features/Pet_API.feature"));
    }

    #[test]
    fn test_collision_detection() {
        let path = Path::new("features/Pet_API.feature");
        let existing = "Feature: Pet API!\n\n  Scenario: x\n";

        assert!(matches!(
            check_title_collision(existing, "Pet API", path),
            Err(BddError::TitleCollision { .. })
        ));
        assert!(check_title_collision(existing, "Pet API!", path).is_ok());
        assert!(check_title_collision("", "Pet API", path).is_ok());
    }
}
