//! Persistence collaborators.
//!
//! The core never touches storage directly; it hands a [`GameState`] to a
//! [`SaveStore`] and gets one back. Whatever a store returns has been checked
//! against the data-model invariants.

use crate::core::constants::SAVE_MAGIC;
use crate::core::error::SaveError;
use crate::core::game_state::GameState;
use crate::utils::persistence::APP_NAME;
use chrono::{DateTime, Utc};
use directories::ProjectDirs;
use sha2::{Digest, Sha256};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Opaque load/save of one game.
pub trait SaveStore {
    fn load(&self) -> Result<GameState, SaveError>;
    fn save(&mut self, state: &GameState) -> Result<(), SaveError>;
}

const HEADER_LEN: usize = 8 + 8 + 4;
const CHECKSUM_LEN: usize = 32;

/// Manages saving and loading game state with checksummed binary format
pub struct SaveManager {
    save_path: PathBuf,
}

impl SaveManager {
    /// Creates a new SaveManager instance
    ///
    /// Sets up the save directory at the appropriate location for the platform
    /// using the `directories` crate.
    pub fn new() -> io::Result<Self> {
        let project_dirs = ProjectDirs::from("", "", APP_NAME).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "Could not determine config directory",
            )
        })?;

        let config_dir = project_dirs.config_dir();
        fs::create_dir_all(config_dir)?;

        Ok(Self {
            save_path: config_dir.join("save.dat"),
        })
    }

    /// Use an explicit file instead of the platform location.
    pub fn at_path(save_path: impl Into<PathBuf>) -> Self {
        Self {
            save_path: save_path.into(),
        }
    }

    pub fn save_path(&self) -> &Path {
        &self.save_path
    }

    /// Checks if a save file exists
    pub fn save_exists(&self) -> bool {
        self.save_path.exists()
    }

    /// Remove the save file. Missing files are not an error.
    pub fn delete(&self) -> Result<(), SaveError> {
        match fs::remove_file(&self.save_path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    /// Saves the game state to disk with checksum verification
    ///
    /// File format:
    /// - Magic (8 bytes)
    /// - Saved-at unix timestamp (8 bytes)
    /// - Data length (4 bytes)
    /// - Serialized game state (variable length)
    /// - SHA256 checksum over everything above (32 bytes)
    pub fn write(&self, state: &GameState) -> Result<(), SaveError> {
        let bytes = encode(state, Utc::now().timestamp())?;
        fs::write(&self.save_path, bytes)?;
        tracing::info!(path = %self.save_path.display(), day = state.day, "game saved");
        Ok(())
    }

    /// Loads the game state and the time it was saved.
    pub fn load_with_meta(&self) -> Result<(GameState, Option<DateTime<Utc>>), SaveError> {
        let bytes = match fs::read(&self.save_path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Err(SaveError::NotFound),
            Err(err) => return Err(err.into()),
        };
        let (state, saved_at) = decode(&bytes).map_err(|err| {
            tracing::warn!(path = %self.save_path.display(), %err, "save file rejected");
            err
        })?;
        tracing::info!(path = %self.save_path.display(), day = state.day, "game loaded");
        Ok((state, DateTime::from_timestamp(saved_at, 0)))
    }

    /// Creates a SaveManager for testing with a unique temporary directory
    #[cfg(test)]
    fn new_for_test() -> io::Result<Self> {
        use std::sync::atomic::{AtomicU64, Ordering};
        static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

        let test_id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        let temp_dir = std::env::temp_dir().join(format!(
            "baeksu-test-{}-{}",
            std::process::id(),
            test_id
        ));
        fs::create_dir_all(&temp_dir)?;

        Ok(Self::at_path(temp_dir.join("save.dat")))
    }
}

impl SaveStore for SaveManager {
    fn load(&self) -> Result<GameState, SaveError> {
        self.load_with_meta().map(|(state, _)| state)
    }

    fn save(&mut self, state: &GameState) -> Result<(), SaveError> {
        self.write(state)
    }
}

fn encode(state: &GameState, saved_at: i64) -> Result<Vec<u8>, SaveError> {
    let data = bincode::serialize(state)?;
    let data_len = u32::try_from(data.len())
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidData, "save data too large"))?;

    let mut bytes = Vec::with_capacity(HEADER_LEN + data.len() + CHECKSUM_LEN);
    bytes.extend_from_slice(&SAVE_MAGIC.to_le_bytes());
    bytes.extend_from_slice(&saved_at.to_le_bytes());
    bytes.extend_from_slice(&data_len.to_le_bytes());
    bytes.extend_from_slice(&data);

    let checksum = Sha256::digest(&bytes);
    bytes.extend_from_slice(&checksum);
    Ok(bytes)
}

fn decode(bytes: &[u8]) -> Result<(GameState, i64), SaveError> {
    let truncated = || io::Error::new(io::ErrorKind::UnexpectedEof, "save file truncated");

    let magic = read_u64(bytes, 0).ok_or_else(truncated)?;
    if magic != SAVE_MAGIC {
        return Err(SaveError::BadMagic { found: magic });
    }
    let saved_at = read_u64(bytes, 8).ok_or_else(truncated)? as i64;
    let data_len = bytes
        .get(16..HEADER_LEN)
        .and_then(|b| b.try_into().ok())
        .map(u32::from_le_bytes)
        .ok_or_else(truncated)? as usize;

    let body_end = HEADER_LEN + data_len;
    let body = bytes.get(..body_end).ok_or_else(truncated)?;
    let stored_checksum = bytes
        .get(body_end..body_end + CHECKSUM_LEN)
        .ok_or_else(truncated)?;
    if Sha256::digest(body).as_slice() != stored_checksum {
        return Err(SaveError::ChecksumMismatch);
    }

    let state: GameState = bincode::deserialize(&body[HEADER_LEN..])?;
    state.validate()?;
    Ok((state, saved_at))
}

fn read_u64(bytes: &[u8], offset: usize) -> Option<u64> {
    bytes
        .get(offset..offset + 8)
        .and_then(|b| b.try_into().ok())
        .map(u64::from_le_bytes)
}

/// A single JSON blob slot, like a browser's local storage.
///
/// Uses the camelCase field names of the browser version of the game, so
/// its saves can be imported as-is.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    blob: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds a saved blob.
    pub fn with_blob(json: impl Into<String>) -> Self {
        Self {
            blob: Some(json.into()),
        }
    }

    pub fn blob(&self) -> Option<&str> {
        self.blob.as_deref()
    }

    pub fn clear(&mut self) {
        self.blob = None;
    }
}

impl SaveStore for MemoryStore {
    fn load(&self) -> Result<GameState, SaveError> {
        let json = self.blob.as_deref().ok_or(SaveError::NotFound)?;
        let state = GameState::from_json(json)?;
        state.validate()?;
        Ok(state)
    }

    fn save(&mut self, state: &GameState) -> Result<(), SaveError> {
        self.blob = Some(state.to_json()?);
        Ok(())
    }
}
