mod args;

use std::{fs, path::Path, thread::sleep};

use anyhow::{Context, Result};
use bowling::{
    scoring::{Frame, ThrowOutcome},
    settings::GameSettings,
    util::topple_pins,
    BowlingError, Lane, FRAME_COUNT,
};
use clap::Parser;
use log::{info, warn};
use serde::Serialize;

use crate::args::{Args, Ball};

#[derive(Serialize)]
struct Report<'a> {
    frames: &'a [Frame; FRAME_COUNT],
    running_totals: [Option<u16>; FRAME_COUNT],
    total_score: u16,
    game_over: bool,
}

pub fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = Args::parse();
    let settings = match &args.settings {
        Some(path) => load_settings(path)?,
        None => GameSettings::default(),
    };

    let mut lane = Lane::new(settings);
    info!("Replaying {} balls", args.balls.len());

    for ball in &args.balls {
        if args.realtime {
            sleep(lane.settings.settle_delay());
        }

        match replay_ball(&mut lane, *ball) {
            Ok(outcome) => {
                info!(
                    "Frame {} ball {}: {} -> {:?}, total {}",
                    outcome.frame,
                    outcome.throw.number(),
                    ball,
                    outcome.result,
                    outcome.total_score
                );
                if outcome.game_over {
                    info!("Game over! Final score: {}", outcome.total_score);
                } else if args.realtime {
                    sleep(lane.settings.reset_delay());
                }
            }
            Err(error) => warn!("Ignoring ball {ball}: {error:#}"),
        }
    }

    if args.json {
        let game = lane.scorer.game();
        let report = Report {
            frames: game.frames(),
            running_totals: game.running_totals(),
            total_score: game.total_score(),
            game_over: game.is_game_over(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", lane.score_board().text());
    }

    Ok(())
}

/// Knock over the pins for `ball` and score it. A ball that couldn't have happened on the current
/// deck is rejected before any pin moves.
fn replay_ball(lane: &mut Lane, ball: Ball) -> Result<ThrowOutcome> {
    let game = lane.scorer.game();
    if game.is_game_over() {
        return Err(BowlingError::InvalidState.into());
    }

    let standing = game.standing_pins();
    let pins = ball.pins(standing, game.is_fresh_rack())?;
    if pins > standing {
        return Err(BowlingError::InvalidThrow { pins, standing }.into());
    }

    topple_pins(&mut lane.world, pins);
    Ok(lane.throw_completed()?)
}

fn load_settings(path: &Path) -> Result<GameSettings> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Unable to read settings from {}", path.display()))?;
    let settings = serde_json::from_str(&contents)
        .with_context(|| format!("Invalid settings in {}", path.display()))?;
    info!("Loaded settings from {}", path.display());
    Ok(settings)
}
