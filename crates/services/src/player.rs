use async_trait::async_trait;
use thiserror::Error;

/// Errors from the embedded video player.
///
/// Callers treat every variant as non-fatal: a command that fails is logged
/// and the screen keeps working without playback.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PlayerError {
    #[error("player unavailable: {0}")]
    Unavailable(String),

    #[error("player command failed: {0}")]
    Command(String),
}

/// Commands the offer screen issues to the embedded player.
///
/// The unmute gesture must run `play`, `set_muted(false)`, `set_volume(1.0)`
/// in that order; some embedded browsers reject volume changes before
/// playback.
#[async_trait(?Send)]
pub trait VideoPlayer {
    /// Nudge the underlying player to initialize. Adapters may resolve as
    /// soon as the command is issued, before the player acknowledges it.
    async fn ready(&self) -> Result<(), PlayerError>;

    async fn play(&self) -> Result<(), PlayerError>;

    async fn set_muted(&self, muted: bool) -> Result<(), PlayerError>;

    async fn set_volume(&self, volume: f64) -> Result<(), PlayerError>;
}
