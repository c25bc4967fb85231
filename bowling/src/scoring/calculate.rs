use super::Frame;
use crate::FRAME_COUNT;

/// Value of each frame under ten-pin rules, given whatever has been thrown so far.
///
/// Bonus balls that haven't been bowled yet count as zero, so strike and spare frames are
/// provisional until the balls after them exist. This never mutates anything and can be called
/// as often as you like.
pub fn score_frames(frames: &[Frame; FRAME_COUNT]) -> [u16; FRAME_COUNT] {
    let mut scores = [0; FRAME_COUNT];

    for (index, (frame, score)) in frames.iter().zip(scores.iter_mut()).enumerate() {
        *score = match frames.get(index + 1) {
            // The tenth frame carries its own bonus balls
            None => frame.first() + frame.second() + frame.third(),
            Some(next) if frame.is_strike => {
                10 + next.first() + strike_second_bonus(frames, index + 1)
            }
            Some(next) if frame.is_spare => 10 + next.first(),
            Some(_) => frame.first() + frame.second(),
        };
    }

    scores
}

/// The second ball after a strike: either the next frame's second ball, or if the next frame was
/// also a strike, the first ball of the frame after that. The tenth frame holds both balls itself.
fn strike_second_bonus(frames: &[Frame; FRAME_COUNT], next_index: usize) -> u16 {
    let next = &frames[next_index];
    match frames.get(next_index + 1) {
        Some(after) if next.is_strike => after.first(),
        _ => next.second(),
    }
}

/// Cumulative score through each frame, for the score sheet. Frames that haven't been started
/// are `None`.
pub fn running_totals(frames: &[Frame; FRAME_COUNT]) -> [Option<u16>; FRAME_COUNT] {
    let mut totals = [None; FRAME_COUNT];
    let mut running_total = 0;

    for (frame, total) in frames.iter().zip(totals.iter_mut()) {
        if !frame.is_started() {
            break;
        }
        running_total += frame.score;
        total.replace(running_total);
    }

    totals
}
