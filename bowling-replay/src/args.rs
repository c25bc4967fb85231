use std::{fmt, path::PathBuf, str::FromStr};

use anyhow::{bail, Context, Result};
use clap::Parser;

const BALLS_HELP: &str = "Each ball is a pin count (0-10) or a score sheet mark:
  X  a strike, only on a fresh rack
  /  a spare, every pin still standing after an earlier ball
  -  no pins";

/// Replay a game of ten-pin bowling through the lane and print the score board
#[derive(Parser, Debug, PartialEq)]
#[command(name = "bowling-replay")]
#[command(long_about = None, after_help = BALLS_HELP)]
pub struct Args {
    /// JSON file with game settings; anything it leaves out keeps its default
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// Wait out the settle and reset delays between balls
    #[arg(long)]
    pub realtime: bool,

    /// Print the frames as JSON instead of the score board
    #[arg(long)]
    pub json: bool,

    /// Balls to bowl, in order
    #[arg(required = true)]
    pub balls: Vec<Ball>,
}

/// A ball as written on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ball {
    Pins(u8),
    Strike,
    Spare,
}

impl Ball {
    /// How many pins to knock over, given what's on the deck
    pub fn pins(self, standing: u8, fresh_rack: bool) -> Result<u8> {
        match self {
            Ball::Pins(pins) => Ok(pins),
            Ball::Strike if fresh_rack => Ok(standing),
            Ball::Strike => bail!("a strike needs a fresh rack, {standing} pins are standing"),
            Ball::Spare if !fresh_rack => Ok(standing),
            Ball::Spare => bail!("a spare needs an earlier ball in the frame"),
        }
    }
}

impl FromStr for Ball {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "X" | "x" => Ok(Ball::Strike),
            "/" => Ok(Ball::Spare),
            "-" => Ok(Ball::Pins(0)),
            _ => {
                let pins = s
                    .parse::<u8>()
                    .with_context(|| format!("'{s}' is not a pin count or a mark"))?;
                Ok(Ball::Pins(pins))
            }
        }
    }
}

impl fmt::Display for Ball {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ball::Pins(0) => write!(f, "-"),
            Ball::Pins(pins) => write!(f, "{pins}"),
            Ball::Strike => write!(f, "X"),
            Ball::Spare => write!(f, "/"),
        }
    }
}
