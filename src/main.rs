//! Pipe Dash entry point
//!
//! Native headless runner: an autopilot plays a few rounds against the real
//! simulation, high score file and settings. Graphics and sound are left to
//! a host that plugs into `renderer` and `audio`.

use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::Serialize;

use pipe_dash::audio::{AudioManager, LogAudioSink};
use pipe_dash::game::FrameOutcome;
use pipe_dash::platform::{Autopilot, FrameClock, InputSource};
use pipe_dash::renderer::{SpriteInstance, instance_bytes};
use pipe_dash::settings::DEFAULT_SETTINGS_PATH;
use pipe_dash::{FileHighScore, Game, Settings};

/// Nominal frame length for headless runs
const HEADLESS_DT: f32 = 1.0 / 60.0;
/// Safety net so a perfect autopilot cannot run forever
const MAX_FRAMES: u64 = 60 * 60 * 10;

struct Args {
    config: PathBuf,
    rounds: u32,
    realtime: bool,
}

impl Args {
    fn parse() -> Self {
        let mut args = Args {
            config: PathBuf::from(DEFAULT_SETTINGS_PATH),
            rounds: 3,
            realtime: false,
        };
        let mut iter = std::env::args().skip(1);
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--config" => {
                    if let Some(path) = iter.next() {
                        args.config = PathBuf::from(path);
                    }
                }
                "--rounds" => match iter.next().map(|n| n.parse()) {
                    Some(Ok(n)) => args.rounds = n,
                    _ => log::warn!("--rounds expects a number, keeping {}", args.rounds),
                },
                "--realtime" => args.realtime = true,
                other => log::warn!("Ignoring unknown argument {:?}", other),
            }
        }
        args
    }
}

#[derive(Serialize)]
struct RunSummary {
    seed: u64,
    frames: u64,
    rounds: u32,
    high_score: u32,
    last_frame_bytes: usize,
}

fn main() {
    env_logger::init();
    log::info!("Pipe Dash (headless) starting...");

    let args = Args::parse();
    let settings = Settings::load(&args.config);

    // Seeded once per process from the wall clock
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);

    let store = FileHighScore::new(&settings.high_score_path);
    let mut game = Game::new(seed, store, AudioManager::new(LogAudioSink));
    game.apply_settings(&settings);
    let mut pilot = Autopilot::new(args.rounds);
    // The game caps stalls itself
    let mut clock = FrameClock::new(None);

    let mut frames = 0;
    let mut last_frame_bytes = 0;
    while frames < MAX_FRAMES {
        let dt = if args.realtime {
            std::thread::sleep(Duration::from_millis(16));
            clock.tick()
        } else {
            HEADLESS_DT
        };

        let events = pilot.poll(game.state());
        if game.frame(&events, dt) == FrameOutcome::Quit {
            break;
        }

        let instances: Vec<SpriteInstance> =
            game.draw_commands().iter().map(SpriteInstance::from).collect();
        last_frame_bytes = instance_bytes(&instances).len();
        frames += 1;
    }

    let summary = RunSummary {
        seed,
        frames,
        rounds: pilot.rounds_played(),
        high_score: game.state().high_score,
        last_frame_bytes,
    };
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Could not encode run summary: {}", e),
    }
}
