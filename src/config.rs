use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,
}

#[derive(Debug, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_leaderboard")]
    pub leaderboard: PathBuf,

    #[serde(default = "default_task_base")]
    pub task_base: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            leaderboard: default_leaderboard(),
            task_base: default_task_base(),
        }
    }
}

fn default_leaderboard() -> PathBuf {
    PathBuf::from("leaderboard.yaml")
}

fn default_task_base() -> PathBuf {
    PathBuf::from("task1")
}
