use maze_core::journal::InputJournal;
use maze_core::replay::{ReplayError, replay_to_end};
use maze_core::{Direction, Game, GameConfig, GameError, Intent};

fn record(seed: u64, config: GameConfig) -> (InputJournal, Game) {
    let mut game = Game::new(seed, config.clone(), 0).expect("config is valid");
    let mut journal = InputJournal::new(seed, config);
    let moves =
        [Direction::Right, Direction::Right, Direction::Down, Direction::Up, Direction::Down];

    for frame in 0..600_u64 {
        let now = frame * 33;
        let intent = match game.quiz() {
            Some(quiz) if frame % 5 == 0 => {
                Intent::QuizAppendText(quiz.question.answer.to_owned())
            }
            Some(_) => Intent::QuizSubmit,
            None if frame == 300 => Intent::Regenerate,
            None => Intent::Move(moves[frame as usize % moves.len()]),
        };
        if game.apply_intent(intent.clone(), now).is_ok() {
            journal.append_intent(now, intent);
        }
        game.tick(now);
        journal.append_tick(now);
    }
    (journal, game)
}

#[test]
fn journaled_run_replays_to_the_same_state() {
    let (journal, live) = record(4242, GameConfig::default());
    let result = replay_to_end(&journal).expect("journal replays");

    assert_eq!(result.snapshot_hash, live.snapshot_hash());
    assert_eq!(result.level, live.level());
    assert_eq!(result.phase, live.phase());
    assert_eq!(result.generation, live.generation());
}

#[test]
fn journal_on_a_small_custom_grid_replays_from_json() {
    let config = GameConfig {
        world_width: 275,
        world_height: 225,
        extra_paths: 20,
        ..GameConfig::default()
    };
    let (journal, live) = record(7, config);

    let raw = journal.to_json().expect("journal serializes");
    let parsed = InputJournal::from_json_str(&raw).expect("journal parses");
    let result = replay_to_end(&parsed).expect("journal replays");
    assert_eq!(result.snapshot_hash, live.snapshot_hash());
}

#[test]
fn tampered_journal_fails_at_the_offending_record() {
    let (mut journal, live) = record(4242, GameConfig::default());
    let at_ms = journal.records.last().map_or(0, |record| record.at_ms);
    let (intent, expected) = if live.quiz().is_some() {
        (Intent::Regenerate, GameError::QuizInProgress)
    } else {
        (Intent::QuizBackspace, GameError::NoActiveQuiz)
    };
    journal.append_intent(at_ms, intent);
    let seq = journal.records.len() as u64 - 1;

    match replay_to_end(&journal) {
        Err(ReplayError::RejectedIntent { seq: failed, source }) => {
            assert_eq!(failed, seq);
            assert_eq!(source, expected);
        }
        other => panic!("expected a rejected intent, got {other:?}"),
    }
}
