use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use usersearch_core::User;

/// Record is one row of the server's own data set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub age: i64,
    #[serde(default)]
    pub about: String,
    #[serde(default)]
    pub gender: String,
}

impl Record {
    /// Wire shape of this record
    pub fn to_user(&self) -> User {
        User {
            id: self.id,
            name: format!("{} {}", self.first_name, self.last_name),
            age: self.age,
            about: self.about.clone(),
            gender: self.gender.clone(),
        }
    }

    /// Case-sensitive substring match on first name, last name or about text
    pub fn matches(&self, query: &str) -> bool {
        self.first_name.contains(query)
            || self.last_name.contains(query)
            || self.about.contains(query)
    }
}

/// Parse a JSON array of records
pub fn parse(json: &str) -> Result<Vec<Record>> {
    serde_json::from_str(json).context("Failed to parse dataset")
}

/// Load a JSON array of records from disk
pub fn load(path: impl AsRef<Path>) -> Result<Vec<Record>> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read dataset {}", path.display()))?;
    let records = parse(&contents)?;
    tracing::info!(path = %path.display(), records = records.len(), "Dataset loaded");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> Record {
        Record {
            id: 1,
            first_name: "Hilda".to_string(),
            last_name: "Mayer".to_string(),
            age: 21,
            about: "Sit commodo".to_string(),
            gender: "female".to_string(),
        }
    }

    #[test]
    fn test_to_user_joins_names() {
        let user = record().to_user();
        assert_eq!(user.name, "Hilda Mayer");
        assert_eq!(user.id, 1);
        assert_eq!(user.age, 21);
    }

    #[test]
    fn test_matches_is_case_sensitive() {
        let r = record();
        assert!(r.matches("May"));
        assert!(r.matches("Hil"));
        assert!(r.matches("commodo"));
        assert!(!r.matches("may"));
        assert!(!r.matches("Hilda Mayer")); // names are matched separately
    }

    #[test]
    fn test_fixture_parses() {
        let records = parse(include_str!("../fixtures/dataset.json")).unwrap();
        assert_eq!(records.len(), 35);
        assert_eq!(records[1].to_user().name, "Hilda Mayer");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse(r#"{"}"#).is_err());
    }
}
