use std::collections::{HashMap, VecDeque};

use maze_core::{
    Direction, EscortEvent, Game, GameConfig, Intent, IntentOutcome, LogEvent, Map, Phase, Pos,
    TileKind,
};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

const FRAME_MS: u64 = 40;

fn pick<T: Clone>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    slice[rng.next_u64() as usize % slice.len()].clone()
}

fn bot_intent(game: &Game, rng: &mut ChaCha8Rng) -> Intent {
    if let Some(quiz) = game.quiz() {
        return match rng.next_u64() % 4 {
            0 => Intent::QuizAppendText(quiz.question.answer.to_uppercase()),
            1 => Intent::QuizAppendChar('?'),
            2 => Intent::ToggleQuizFocus,
            _ => Intent::QuizSubmit,
        };
    }
    match rng.next_u64() % 50 {
        0 => Intent::DismissMessage,
        _ => Intent::Move(pick(rng, &Direction::ALL)),
    }
}

fn run_bot(seed: u64, frames: u64) -> Game {
    let mut game = Game::new(seed, GameConfig::default(), 0).expect("default config is valid");
    let mut rng = ChaCha8Rng::seed_from_u64(seed ^ 0xb07);
    let mut explored_floor = 0;

    for frame in 0..frames {
        let now = frame * FRAME_MS;
        let generation = game.generation();
        let outcome = game.apply_intent(bot_intent(&game, &mut rng), now);

        if let Ok(IntentOutcome::Moved(report)) = &outcome
            && let Some(EscortEvent::Followed { to }) = report.escort
        {
            assert_eq!(
                Some(to),
                game.state().path_history.back(2),
                "seed {seed}: escort lags two moves behind"
            );
        }

        game.tick(now);
        if let Err(violation) = game.check_invariants() {
            panic!("seed {seed} frame {frame}: {violation}");
        }

        let explored = game.state().explored.as_ref().map_or(0, |map| map.explored_count());
        if game.generation() == generation {
            assert!(explored >= explored_floor, "seed {seed}: explored memory never shrinks");
        }
        explored_floor = explored;
    }
    game
}

#[test]
fn random_bot_keeps_every_invariant() {
    for seed in 0..12 {
        run_bot(seed, 3_000);
    }
}

#[test]
fn random_bot_eventually_answers_and_moves_on() {
    let answered = (0..12)
        .map(|seed| run_bot(seed, 3_000))
        .filter(|game| {
            game.log()
                .iter()
                .any(|event| matches!(event, LogEvent::QuizAnswered { correct: true, .. }))
        })
        .count();
    assert!(answered > 0, "some bot run should meet and answer a quiz npc");
}

fn first_step_toward(map: &Map, from: Pos, goal: Pos) -> Option<Direction> {
    let mut came_from: HashMap<Pos, (Pos, Direction)> = HashMap::new();
    let mut queue = VecDeque::from([from]);
    while let Some(pos) = queue.pop_front() {
        if pos == goal {
            let mut cursor = pos;
            while let Some(&(prev, direction)) = came_from.get(&cursor) {
                if prev == from {
                    return Some(direction);
                }
                cursor = prev;
            }
            return None;
        }
        for direction in Direction::ALL {
            let next = pos.step(direction);
            if map.is_floor(next) && next != from && !came_from.contains_key(&next) {
                came_from.insert(next, (pos, direction));
                queue.push_back(next);
            }
        }
    }
    None
}

#[test]
fn walking_the_shortest_route_clears_every_level_and_restarts() {
    let mut game = Game::new(2024, GameConfig::default(), 0).expect("default config is valid");
    let mut now = 0;

    while !game.log().contains(&LogEvent::RunRestarted) && now < 600_000 {
        now += FRAME_MS;
        match game.phase() {
            Phase::QuizActive => {
                let answer = game.quiz().map(|quiz| quiz.question.answer.to_owned());
                game.apply_intent(Intent::QuizAppendText(answer.unwrap_or_default()), now).ok();
                game.apply_intent(Intent::QuizSubmit, now).ok();
            }
            Phase::Playing => {
                let state = game.state();
                let mut map = state.map.clone();
                for cell in state.hazard.iter().flat_map(|hazard| hazard.cells) {
                    map.set_tile(cell, TileKind::Wall);
                }
                let mut trapless = map.clone();
                for trap in &state.traps {
                    trapless.set_tile(*trap, TileKind::Wall);
                }
                let route = |goal: Pos| {
                    first_step_toward(&trapless, state.player, goal)
                        .or_else(|| first_step_toward(&map, state.player, goal))
                };

                // Fetch the escort home first when it can be reached, then head for the exit.
                let direction = match state.escort {
                    Some(escort) if escort.activated => route(state.start),
                    Some(escort) => route(escort.pos).or_else(|| route(state.exit)),
                    None => route(state.exit),
                };
                if let Some(direction) = direction {
                    game.apply_intent(Intent::Move(direction), now).ok();
                }
            }
            Phase::Victory => {}
        }
        game.tick(now);
        if let Err(violation) = game.check_invariants() {
            panic!("frame at {now}ms: {violation}");
        }
    }

    for level in 1..=3 {
        assert!(game.log().contains(&LogEvent::LevelCleared { level }), "level {level} cleared");
    }
    assert!(game.log().contains(&LogEvent::EscortDelivered));
    assert_eq!(game.level(), 1);
}
