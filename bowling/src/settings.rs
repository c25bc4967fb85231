use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Score the player needs to "win" a game
pub const DEFAULT_TARGET_SCORE: u16 = 100;

/// Everything about a game that can be tuned without touching the rules.
///
/// Any field missing when deserializing falls back to its default, so a settings file only has to
/// mention what it changes:
///
/// ```
/// # use bowling::settings::GameSettings;
/// let settings: GameSettings = serde_json::from_str(r#"{ "target_score": 150 }"#).unwrap();
/// assert_eq!(settings.target_score, 150);
/// assert_eq!(settings.knockdown_angle_degrees, 45.0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// Final total needed for the "you win" message
    pub target_score: u16,
    /// A pin leaning further than this from upright counts as knocked down
    pub knockdown_angle_degrees: f32,
    /// Distance between neighbouring pins in a row, in metres
    pub pin_spacing: f32,
    /// Distance between rows of the rack, in metres
    pub row_spacing: f32,
    /// How long to let the pins settle after the ball stops before counting them
    pub settle_delay_secs: f32,
    /// How long the pinsetter takes between balls
    pub reset_delay_secs: f32,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            target_score: DEFAULT_TARGET_SCORE,
            knockdown_angle_degrees: 45.,
            pin_spacing: 0.3,
            row_spacing: 0.26,
            settle_delay_secs: 3.,
            reset_delay_secs: 2.,
        }
    }
}

impl GameSettings {
    /// Knockdown threshold in radians
    pub fn knockdown_angle(&self) -> f32 {
        self.knockdown_angle_degrees.to_radians()
    }

    /// [`GameSettings::settle_delay_secs`] as a `Duration`
    pub fn settle_delay(&self) -> Duration {
        seconds(self.settle_delay_secs)
    }

    /// [`GameSettings::reset_delay_secs`] as a `Duration`
    pub fn reset_delay(&self) -> Duration {
        seconds(self.reset_delay_secs)
    }
}

/// Negative or NaN is no delay; anything too big for a `Duration` is forever.
fn seconds(secs: f32) -> Duration {
    Duration::try_from_secs_f32(secs.max(0.)).unwrap_or(Duration::MAX)
}
