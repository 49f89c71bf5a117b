use std::collections::BTreeMap;
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::GameConfig;

const APP_DIR_NAME: &str = "hebi";
const SCORES_FILE_NAME: &str = "scores.json";
const LOG_FILE_NAME: &str = "hebi.log";

/// Per-user data directory, falling back to the working directory.
#[must_use]
pub fn data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
}

#[must_use]
pub fn scores_path() -> PathBuf {
    data_dir().join(SCORES_FILE_NAME)
}

#[must_use]
pub fn log_path() -> PathBuf {
    data_dir().join(LOG_FILE_NAME)
}

/// Opens `path` for appending log lines, creating its directory first.
pub fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Identifies the board a score was earned on.
///
/// Grid extents and apple count change how hard a game is, so scores are
/// only compared between games that share both. Tick speed and seed do not
/// enter the key.
#[must_use]
pub fn board_key(config: &GameConfig) -> String {
    format!("{}x{}/{}", config.cols, config.rows, config.max_apples)
}

/// Best score per board, as stored in `scores.json`.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct HighScores {
    #[serde(default)]
    boards: BTreeMap<String, u32>,
}

impl HighScores {
    /// Reads the table from the default location.
    pub fn load() -> io::Result<Self> {
        Self::load_from(&scores_path())
    }

    /// Writes the table to the default location.
    pub fn save(&self) -> io::Result<()> {
        self.save_to(&scores_path())
    }

    /// Reads the table from `path`; a file that does not exist yet is an
    /// empty table.
    pub fn load_from(path: &Path) -> io::Result<Self> {
        match fs::read_to_string(path) {
            Ok(raw) => serde_json::from_str(&raw)
                .map_err(|error| io::Error::new(io::ErrorKind::InvalidData, error)),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(error) => Err(error),
        }
    }

    /// Writes the table to `path`, creating its directory when needed.
    pub fn save_to(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)
            .map_err(|error| io::Error::new(io::ErrorKind::InvalidData, error))?;
        fs::write(path, json)
    }

    /// Best score recorded on the board `config` describes, zero if none.
    #[must_use]
    pub fn best_for(&self, config: &GameConfig) -> u32 {
        self.boards.get(&board_key(config)).copied().unwrap_or(0)
    }

    /// Records a finished game's score. Returns true when it beats the
    /// board's previous best.
    pub fn record(&mut self, config: &GameConfig, score: u32) -> bool {
        let best = self.boards.entry(board_key(config)).or_insert(0);
        if score > *best {
            *best = score;
            true
        } else {
            false
        }
    }
}
