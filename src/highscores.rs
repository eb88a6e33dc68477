//! High score persistence
//!
//! A single best score, stored as a decimal integer in a plain-text file.
//! Only touched at round boundaries, never mid-frame.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Default high score file name
pub const DEFAULT_HIGH_SCORE_PATH: &str = "high-score.txt";

/// Where the best score lives between sessions
pub trait HighScoreStore {
    /// Stored best score; 0 when nothing usable is stored
    fn load(&self) -> u32;
    fn save(&mut self, score: u32) -> io::Result<()>;
}

/// File-backed store
#[derive(Debug, Clone)]
pub struct FileHighScore {
    path: PathBuf,
}

impl FileHighScore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HighScoreStore for FileHighScore {
    fn load(&self) -> u32 {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("No high score at {}, starting fresh", self.path.display());
                return 0;
            }
            Err(e) => {
                log::warn!("Could not read high score from {}: {}", self.path.display(), e);
                return 0;
            }
        };

        // Only the first line counts
        let first = text.lines().next().unwrap_or("").trim();
        match first.parse::<u32>() {
            Ok(score) => {
                log::info!("Loaded high score {}", score);
                score
            }
            Err(e) => {
                log::warn!("Ignoring corrupt high score {:?}: {}", first, e);
                0
            }
        }
    }

    fn save(&mut self, score: u32) -> io::Result<()> {
        fs::write(&self.path, score.to_string())?;
        log::info!("High score {} saved to {}", score, self.path.display());
        Ok(())
    }
}

/// In-memory store for tests and sessions without a writable disk
#[derive(Debug, Clone, Default)]
pub struct MemoryHighScore {
    pub score: Option<u32>,
    /// Make every save fail (simulates a read-only disk)
    pub fail_saves: bool,
}

impl HighScoreStore for MemoryHighScore {
    fn load(&self) -> u32 {
        self.score.unwrap_or(0)
    }

    fn save(&mut self, score: u32) -> io::Result<()> {
        if self.fail_saves {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only store"));
        }
        self.score = Some(score);
        Ok(())
    }
}
