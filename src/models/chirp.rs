use serde::{Deserialize, Serialize};

use crate::filter::clean_message;

/// Longest chirp accepted, counted in bytes of the UTF-8 body.
pub const MAX_CHIRP_LENGTH: usize = 140;

/// Payload accepted by `POST /api/validate_chirp`.
#[derive(Debug, Deserialize)]
pub struct ValidateChirpRequest {
    #[serde(default)]
    pub body: String,
}

/// Successful validation result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanedChirp {
    pub cleaned_body: String,
}

impl ValidateChirpRequest {
    /// Check the length limit. Multi-byte characters count once per byte.
    pub fn validate(&self) -> Result<(), String> {
        if self.body.len() > MAX_CHIRP_LENGTH {
            return Err("Chirp is too long".to_string());
        }

        Ok(())
    }

    /// Run the body through the word filter.
    pub fn into_cleaned(self) -> CleanedChirp {
        CleanedChirp {
            cleaned_body: clean_message(&self.body),
        }
    }
}
