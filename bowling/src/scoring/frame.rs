use serde::{Deserialize, Serialize};

use super::ThrowNumber;
use crate::PIN_COUNT;

/// One of the ten scoring slots in a game.
///
/// Throws are `None` until they have been bowled. Only the tenth frame ever records a
/// `third_throw`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    /// Pins knocked down by the first ball
    pub first_throw: Option<u8>,
    /// Pins knocked down by the second ball
    pub second_throw: Option<u8>,
    /// Pins knocked down by the bonus ball of the tenth frame
    pub third_throw: Option<u8>,
    /// All ten pins fell to the first ball
    pub is_strike: bool,
    /// All ten pins fell across the first two balls, without a strike
    pub is_spare: bool,
    /// Best known value of this frame, including any bonus balls thrown so far
    pub score: u16,
}

impl Frame {
    /// Pins from the first ball, or zero if it hasn't been thrown
    pub fn first(&self) -> u16 {
        self.first_throw.unwrap_or(0).into()
    }

    /// Pins from the second ball, or zero if it hasn't been thrown
    pub fn second(&self) -> u16 {
        self.second_throw.unwrap_or(0).into()
    }

    /// Pins from the third ball, or zero if it hasn't been thrown
    pub fn third(&self) -> u16 {
        self.third_throw.unwrap_or(0).into()
    }

    /// Has at least one ball been thrown in this frame?
    pub fn is_started(&self) -> bool {
        self.first_throw.is_some()
    }

    /// The balls thrown in this frame, in order
    pub fn throws(&self) -> impl Iterator<Item = u8> {
        [self.first_throw, self.second_throw, self.third_throw]
            .into_iter()
            .flatten()
    }

    /// Score sheet marks for each ball thrown: `X` for a strike, `/` for a spare, `-` for a miss,
    /// otherwise the pin count.
    pub fn marks(&self) -> [Option<char>; 3] {
        let mut marks = [None; 3];
        let mut standing = PIN_COUNT;
        let mut fresh_rack = true;

        for (mark, pins) in marks.iter_mut().zip(self.throws()) {
            let symbol = if fresh_rack && pins == PIN_COUNT {
                'X'
            } else if !fresh_rack && pins == standing {
                '/'
            } else if pins == 0 {
                '-'
            } else {
                char::from(b'0' + pins)
            };
            mark.replace(symbol);

            // A cleared deck is always re-racked
            if pins >= standing {
                standing = PIN_COUNT;
                fresh_rack = true;
            } else {
                standing -= pins;
                fresh_rack = false;
            }
        }

        marks
    }

    pub(crate) fn record(&mut self, throw: ThrowNumber, pins: u8) {
        match throw {
            ThrowNumber::First => {
                self.first_throw = Some(pins);
                self.is_strike = pins == PIN_COUNT;
            }
            ThrowNumber::Second => {
                self.second_throw = Some(pins);
                self.is_spare = !self.is_strike && self.first() + u16::from(pins) == 10;
            }
            ThrowNumber::Third => {
                self.third_throw = Some(pins);
            }
        }
    }
}
