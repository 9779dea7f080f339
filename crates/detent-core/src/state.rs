//! Persisted seek bar state.
//!
//! Exactly three integers survive a save: progress, max and min, in that
//! order. The binary form is three big-endian `i32`s.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Size of the binary encoding in bytes.
pub const ENCODED_LEN: usize = 12;

/// Errors produced when decoding a saved state blob.
#[derive(Debug, Error)]
pub enum StateError {
    /// The blob is not exactly [`ENCODED_LEN`] bytes.
    #[error("saved state must be {expected} bytes, got {actual}")]
    Length {
        /// Required length
        expected: usize,
        /// Length received
        actual: usize,
    },
    /// The JSON form could not be decoded.
    #[error("invalid saved state JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Snapshot of the three integers a seek bar persists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SavedState {
    /// Current value
    pub progress: i32,
    /// Upper bound
    pub max: i32,
    /// Lower bound
    pub min: i32,
}

impl SavedState {
    /// Create a snapshot.
    #[must_use]
    pub const fn new(progress: i32, max: i32, min: i32) -> Self {
        Self { progress, max, min }
    }

    /// Encode as progress, max, min.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; ENCODED_LEN] {
        let mut out = [0u8; ENCODED_LEN];
        out[0..4].copy_from_slice(&self.progress.to_be_bytes());
        out[4..8].copy_from_slice(&self.max.to_be_bytes());
        out[8..12].copy_from_slice(&self.min.to_be_bytes());
        out
    }

    /// Decode a blob written by [`Self::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, StateError> {
        let bytes: &[u8; ENCODED_LEN] = bytes.try_into().map_err(|_| StateError::Length {
            expected: ENCODED_LEN,
            actual: bytes.len(),
        })?;
        let word = |i: usize| i32::from_be_bytes([bytes[i], bytes[i + 1], bytes[i + 2], bytes[i + 3]]);
        Ok(Self::new(word(0), word(4), word(8)))
    }

    /// Encode as a JSON object.
    pub fn to_json(&self) -> Result<String, StateError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode the JSON form. Missing or unknown fields are errors.
    pub fn from_json(json: &str) -> Result<Self, StateError> {
        Ok(serde_json::from_str(json)?)
    }
}
