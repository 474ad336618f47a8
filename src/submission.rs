use crate::errors::Error;
use serde_yaml::{Mapping, Value};
use std::collections::BTreeMap;
use std::path::Path;

const REQUIRED_KEYS: [&str; 3] = ["rollno", "username", "score"];

/// A validated submission. The three required fields are typed; extra
/// top-level fields of the document are carried along untouched.
#[derive(Clone, Debug, PartialEq)]
pub struct Submission {
    pub rollno: i64,
    pub username: String,
    pub score: i64,
    pub extra: BTreeMap<String, Value>,
}

/// Reads and validates the submission document at `path`. Key presence is
/// checked before field types, so a document missing keys is reported by
/// the missing keys alone.
pub fn validate(path: &Path) -> Result<Submission, Error> {
    if !path.exists() {
        return Err(Error::NotFound(format!(
            "{} does not exist.",
            path.display()
        )));
    }

    let text = std::fs::read_to_string(path)
        .map_err(|e| Error::Io(format!("Failed to read {}: {e}", path.display())))?;

    let document: Mapping = serde_yaml::from_str(&text).map_err(|e| {
        Error::Schema(format!(
            "File {} is not a top-level mapping: {e}",
            path.display()
        ))
    })?;

    let missing: Vec<&str> = REQUIRED_KEYS
        .iter()
        .copied()
        .filter(|key| !document.contains_key(&Value::from(*key)))
        .collect();
    if !missing.is_empty() {
        return Err(Error::Schema(format!(
            "File {} is missing required keys: {}",
            path.display(),
            missing.join(", ")
        )));
    }

    let rollno = document.get(&Value::from("rollno")).and_then(Value::as_i64);
    let username = document
        .get(&Value::from("username"))
        .and_then(Value::as_str);
    let score = document.get(&Value::from("score")).and_then(Value::as_i64);

    let (rollno, username, score) = match (rollno, username, score) {
        (Some(rollno), Some(username), Some(score)) => (rollno, username, score),
        _ => {
            return Err(Error::Schema(format!(
                "Invalid data format in {}. Check rollno, username, and score.",
                path.display()
            )))
        }
    };

    let mut extra = BTreeMap::new();
    for (key, value) in &document {
        if let Some(name) = key.as_str() {
            if !REQUIRED_KEYS.contains(&name) {
                extra.insert(name.to_owned(), value.clone());
            }
        }
    }

    Ok(Submission {
        rollno,
        username: username.to_owned(),
        score,
        extra,
    })
}
