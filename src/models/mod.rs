// Models module

pub mod chirp;
pub mod user;

// Re-export commonly used types
pub use chirp::{CleanedChirp, ValidateChirpRequest, MAX_CHIRP_LENGTH};
pub use user::{CreateUserRequest, User};
