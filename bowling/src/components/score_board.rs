use crate::{
    scoring::{running_totals, Frame, FrameResult, ScoreDisplay},
    settings::DEFAULT_TARGET_SCORE,
    FRAME_COUNT, PIN_COUNT,
};

const CELL_WIDTH: usize = 5;

/// The score sheet hanging above the lane.
///
/// Implements [`ScoreDisplay`], so hand it to a [`crate::scoring::BowlingScorer`] and it will keep
/// itself up to date. [`ScoreBoard::text`] renders it for a panel or a terminal.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBoard {
    /// Frame table as of the last ball
    pub frames: [Frame; FRAME_COUNT],
    /// Game total as of the last ball
    pub total: u16,
    /// 1-based frame being bowled
    pub current_frame: u8,
    /// Short message about the last ball, eg. "STRIKE!"
    pub status: String,
    /// Set once the game is over
    pub game_over_message: Option<String>,
    /// Final total needed to win
    pub target_score: u16,
}

impl Default for ScoreBoard {
    fn default() -> Self {
        Self::new(DEFAULT_TARGET_SCORE)
    }
}

impl ScoreBoard {
    /// A blank board for a game played to `target_score`
    pub fn new(target_score: u16) -> Self {
        Self {
            frames: Default::default(),
            total: 0,
            current_frame: 1,
            status: String::new(),
            game_over_message: None,
            target_score,
        }
    }

    /// Did the finished game reach the target?
    pub fn has_won(&self) -> bool {
        self.game_over_message.is_some() && self.total >= self.target_score
    }

    /// Render the board as text:
    ///
    /// ```text
    /// Frame: 4/10
    ///   X  | 7 / | 9 - |     |     |     |     |     |     |
    ///  20  | 39  | 48  |     |     |     |     |     |     |
    /// Total: 48
    /// ```
    pub fn text(&self) -> String {
        let marks = self
            .frames
            .iter()
            .map(|frame| {
                let marks = frame
                    .marks()
                    .iter()
                    .flatten()
                    .map(char::to_string)
                    .collect::<Vec<_>>()
                    .join(" ");
                format!("{marks:^width$}", width = CELL_WIDTH)
            })
            .collect::<Vec<_>>()
            .join("|");

        let totals = running_totals(&self.frames)
            .iter()
            .map(|total| match total {
                Some(total) => format!("{total:^width$}", width = CELL_WIDTH),
                None => " ".repeat(CELL_WIDTH),
            })
            .collect::<Vec<_>>()
            .join("|");

        let mut text = format!(
            "Frame: {}/{}\n{marks}\n{totals}\nTotal: {}",
            self.current_frame, FRAME_COUNT, self.total
        );

        if !self.status.is_empty() {
            text.push('\n');
            text.push_str(&self.status);
        }

        if let Some(message) = &self.game_over_message {
            text.push('\n');
            text.push_str(message);
        }

        text
    }
}

impl ScoreDisplay for ScoreBoard {
    fn on_frame_result(&mut self, result: FrameResult, pins: u8) {
        self.status = match result {
            FrameResult::Strike => "STRIKE!".to_string(),
            FrameResult::Spare => "SPARE!".to_string(),
            FrameResult::Gutter => "Gutter Ball!".to_string(),
            FrameResult::Open => format!("Pins: {pins}/{PIN_COUNT}"),
        };
    }

    fn on_score_updated(&mut self, frames: &[Frame; FRAME_COUNT], total: u16, current_frame: u8) {
        self.frames = *frames;
        self.total = total;
        self.current_frame = current_frame;
    }

    fn on_game_over(&mut self, final_total: u16) {
        self.total = final_total;
        let message = if final_total >= self.target_score {
            format!("YOU WIN! Score: {final_total}")
        } else {
            format!(
                "Game Over. Score: {final_total} (Target: {})",
                self.target_score
            )
        };
        self.game_over_message = Some(message);
    }

    fn on_game_reset(&mut self) {
        *self = Self::new(self.target_score);
    }
}
