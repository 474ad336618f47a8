use crate::errors::Error;
use crate::submission::Submission;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// One scored row, unique by rollno within a leaderboard.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Entry {
    pub rollno: i64,
    pub username: String,
    pub score: i64,
}

impl From<&Submission> for Entry {
    // Only the three scored fields survive; extra submission fields are
    // dropped at this boundary.
    fn from(submission: &Submission) -> Self {
        Self {
            rollno: submission.rollno,
            username: submission.username.clone(),
            score: submission.score,
        }
    }
}

#[derive(Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Leaderboard {
    pub leaderboard: Vec<Entry>,
}

impl Leaderboard {
    /// Drops any entry sharing the rollno and appends the new one at the
    /// end. Relative order of the untouched entries is preserved.
    pub fn upsert(&mut self, entry: Entry) {
        self.leaderboard
            .retain(|existing| existing.rollno != entry.rollno);
        self.leaderboard.push(entry);
    }
}

/// Leaderboard persistence at an explicit path. Plain read-then-write with
/// no locking: concurrent runs against the same file race, last writer wins.
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Reads the backing file, seeding an empty leaderboard first if the
    /// file does not exist yet.
    pub fn load(&self) -> Result<Leaderboard, Error> {
        if !self.path.exists() {
            self.save(&Leaderboard::default())?;
        }

        let text = fs::read_to_string(&self.path)
            .map_err(|e| Error::Io(format!("Failed to read {}: {e}", self.path.display())))?;

        serde_yaml::from_str(&text).map_err(|e| {
            Error::Parse(format!(
                "Leaderboard file {} is malformed: {e}",
                self.path.display()
            ))
        })
    }

    /// Fully overwrites the backing file.
    pub fn save(&self, board: &Leaderboard) -> Result<(), Error> {
        let text = serde_yaml::to_string(board).map_err(|e| {
            Error::Parse(format!(
                "Failed to serialize leaderboard for {}: {e}",
                self.path.display()
            ))
        })?;

        fs::write(&self.path, text)
            .map_err(|e| Error::Io(format!("Failed to write {}: {e}", self.path.display())))
    }

    /// Records the submission: load, replace any entry with the same rollno,
    /// append, write back.
    pub fn record(&self, submission: &Submission) -> Result<(), Error> {
        let mut board = self.load()?;
        board.upsert(Entry::from(submission));
        self.save(&board)
    }
}
