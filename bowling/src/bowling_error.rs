use thiserror::Error;

/// Reasons a throw can be rejected by the scorer.
///
/// Neither is fatal: the game is left exactly as it was and the caller decides what to do.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BowlingError {
    /// The pin count is more than the pins that were standing for this throw
    #[error("Cannot knock down {pins} pins when only {standing} are standing")]
    InvalidThrow {
        /// Pins reported by the detector
        pins: u8,
        /// Pins that were standing before the throw
        standing: u8,
    },
    /// A throw arrived after the game was over
    #[error("The game is over, start a new game before throwing again")]
    InvalidState,
}
