use crate::scoring::{LaneResetter, ResetMode};

/// Wrapper around the pinsetter
#[derive(Clone, Debug, Default)]
pub struct LaneContext {
    /// Reset that should be applied to the deck before the next ball
    pub pending_reset: Option<ResetMode>,
}

impl LaneResetter for LaneContext {
    /// Request a reset be applied before the next ball. A full reset always wins over a partial one.
    fn request_reset(&mut self, mode: ResetMode) {
        let mode = match (self.pending_reset, mode) {
            (Some(ResetMode::Full), _) => ResetMode::Full,
            (_, mode) => mode,
        };
        self.pending_reset = Some(mode);
    }
}
