use anyhow::{Result, bail};
use clap::Parser;
use maze_core::{Direction, Game, GameConfig, Intent, Phase};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const FRAME_MS: u64 = 16;

/// Drives random input through many seeds and checks the game's invariants after every frame.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    /// Number of consecutive seeds to run, starting at `seed`.
    #[arg(short, long, default_value_t = 16)]
    runs: u64,
    #[arg(short, long, default_value_t = 5000)]
    frames: u32,
}

fn choose<T: Clone>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    let p = rng.next_u64() as usize % slice.len();
    slice[p].clone()
}

fn random_intent(rng: &mut ChaCha8Rng, game: &Game) -> Intent {
    match game.phase() {
        Phase::QuizActive => {
            let Some(quiz) = game.quiz() else {
                return Intent::QuizSubmit;
            };
            if !quiz.input.is_empty() {
                return choose(rng, &[Intent::QuizSubmit, Intent::QuizBackspace]);
            }
            // Bias towards the right answer so runs keep making progress.
            let answer = if rng.next_u64() % 3 == 0 { "wrong" } else { quiz.question.answer };
            choose(
                rng,
                &[
                    Intent::QuizAppendText(answer.to_owned()),
                    Intent::QuizAppendText(answer.to_owned()),
                    Intent::ToggleQuizFocus,
                    Intent::SetQuizFocus(true),
                ],
            )
        }
        Phase::Victory => choose(rng, &[Intent::Regenerate, Intent::DismissMessage]),
        Phase::Playing => {
            if rng.next_u64() % 500 == 0 {
                return Intent::Regenerate;
            }
            if game.message().is_some() && rng.next_u64() % 8 == 0 {
                return Intent::DismissMessage;
            }
            Intent::Move(choose(rng, &Direction::ALL))
        }
    }
}

fn fuzz_seed(seed: u64, frames: u32) -> Result<()> {
    let mut game = Game::new(seed, GameConfig::default(), 0)?;
    let mut rng = ChaCha8Rng::seed_from_u64(seed ^ 0x5eed);
    let mut now = 0;

    for frame in 0..frames {
        now += FRAME_MS;
        let intent = random_intent(&mut rng, &game);
        if let Err(err) = game.apply_intent(intent.clone(), now) {
            debug!(seed, frame, ?intent, %err, "intent rejected");
        }
        game.tick(now);

        if let Err(violation) = game.check_invariants() {
            bail!("seed {seed} frame {frame}: invariant violated after {intent:?}: {violation}");
        }
    }

    info!(seed, level = game.level(), generation = game.generation(), "run finished");
    Ok(())
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
    let args = Args::parse();

    println!(
        "Starting fuzz harness on seeds {}..{} for {} frames each...",
        args.seed,
        args.seed + args.runs,
        args.frames
    );
    for seed in args.seed..args.seed + args.runs {
        fuzz_seed(seed, args.frames)?;
    }

    println!("Fuzzing completed successfully.");
    Ok(())
}
