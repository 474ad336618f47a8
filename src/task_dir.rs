use crate::errors::Error;
use std::fs;
use std::path::PathBuf;

/// Per-submitter task directories under a single base path.
pub struct TaskDirs {
    base: PathBuf,
}

impl TaskDirs {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// Creates `<base>/<rollno>`, parents included. An already existing
    /// directory is not an error.
    pub fn provision(&self, rollno: i64) -> Result<PathBuf, Error> {
        let dir = self.base.join(rollno.to_string());
        fs::create_dir_all(&dir).map_err(|e| {
            Error::Io(format!("Failed to create task folder {}: {e}", dir.display()))
        })?;
        Ok(dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn provision_creates_the_directory() {
        let dir = TempDir::new().unwrap();
        let dirs = TaskDirs::new(dir.path().join("task1"));

        let created = dirs.provision(7).unwrap();
        assert!(created.is_dir());
        assert!(created.ends_with("task1/7"));
    }

    #[test]
    fn provision_twice_is_a_no_op() {
        let dir = TempDir::new().unwrap();
        let dirs = TaskDirs::new(dir.path().join("task1"));

        let first = dirs.provision(7).unwrap();
        let second = dirs.provision(7).unwrap();
        assert_eq!(first, second);
        assert!(second.is_dir());
    }

    #[test]
    fn provision_fails_when_the_target_is_a_file() {
        let dir = TempDir::new().unwrap();
        let base = dir.path().join("task1");
        fs::create_dir_all(&base).unwrap();
        fs::write(base.join("7"), b"").unwrap();

        match TaskDirs::new(&base).provision(7).unwrap_err() {
            Error::Io(message) => assert!(message.contains("7")),
            other => panic!("expected an io error, got {other:?}"),
        }
    }
}
