//! Runs a few deterministic sessions without any rendering backend and
//! prints what the HUD would show. Useful for eyeballing tuning changes.

use dash_engine::{keys, BreedCatalog, BreedId, InputEvent, RunnerConfig, Session, SessionStatus};
use dash_host::{MemoryScoreSink, NullAudioSink, SessionRunner};

const SEED: u64 = 7;
const RUNS: u32 = 3;
const MAX_FRAMES: u32 = 20_000;
const DT: f32 = 1.0 / 60.0;

fn main() {
    let catalog = BreedCatalog::builtin();
    let breed = catalog.get(BreedId(0)).expect("builtin catalog").clone();
    println!("breed: {} (speed {}, jump {})", breed.name, breed.speed_stat, breed.jump_stat);

    let session = Session::new(RunnerConfig::default(), breed, SEED);
    let mut runner = SessionRunner::with_sinks(session, MemoryScoreSink::default(), NullAudioSink);

    runner.push_input(InputEvent::Custom {
        kind: dash_engine::CMD_START,
        a: 0.0,
        b: 0.0,
    });

    let mut frames = 0u32;
    while runner.score_sink().runs < RUNS && frames < MAX_FRAMES {
        // A blunt autopilot: hop on a fixed cadence.
        if frames % 31 == 0 {
            runner.push_input(InputEvent::KeyDown { key_code: keys::SPACE });
        }
        runner.tick(DT);
        frames += 1;

        if runner.snapshot().status == SessionStatus::GameOver {
            let snap = runner.snapshot();
            println!(
                "run {} over at frame {}: score {}, draw instances {}",
                runner.score_sink().runs,
                snap.frame,
                snap.score,
                runner.draw_list().len()
            );
            if runner.score_sink().runs < RUNS {
                runner.push_input(InputEvent::Custom {
                    kind: dash_engine::CMD_RESTART,
                    a: 0.0,
                    b: 0.0,
                });
            }
        }
    }

    println!(
        "lifetime points after {} runs: {}",
        runner.score_sink().runs,
        runner.score_sink().lifetime_points
    );
}
