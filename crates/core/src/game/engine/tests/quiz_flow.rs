use super::support::*;

fn quiz_corridor() -> Game {
    scripted_game(
        1,
        &[
            "#######",
            "#S.Q..#",
            "#.....#",
            "#....E#",
            "#######",
        ],
    )
}

#[test]
fn walking_into_a_quiz_npc_opens_the_quiz_and_freezes_everything() {
    let mut game = quiz_corridor();
    let npc = only_quiz_npc(&game);

    step(&mut game, Direction::Right, 0);
    let report = step(&mut game, Direction::Right, 0);
    assert_eq!(report.quiz_started, Some(npc));
    assert_eq!(game.phase(), Phase::QuizActive);

    assert_eq!(
        game.apply_intent(Intent::Move(Direction::Right), 0),
        Err(GameError::QuizInProgress)
    );
    assert_eq!(game.apply_intent(Intent::Regenerate, 0), Err(GameError::QuizInProgress));
    assert_eq!(game.apply_intent(Intent::DismissMessage, 0), Err(GameError::QuizInProgress));

    let before = game.state.quiz_npcs[npc].pos;
    game.tick(500);
    game.tick(1_000);
    assert_eq!(game.state.quiz_npcs[npc].pos, before, "roaming pauses during a quiz");
}

#[test]
fn typed_answer_resolves_through_intents() {
    let mut game = quiz_corridor();
    let npc = only_quiz_npc(&game);
    step(&mut game, Direction::Right, 0);
    step(&mut game, Direction::Right, 0);

    let answer = game.quiz().map(|quiz| quiz.question.answer).expect("quiz open");
    for ch in answer.chars() {
        assert_eq!(
            game.apply_intent(Intent::QuizAppendChar(ch), 0),
            Ok(IntentOutcome::QuizInputChanged)
        );
    }
    assert_eq!(
        game.apply_intent(Intent::QuizSubmit, 0),
        Ok(IntentOutcome::QuizResolved { correct: true })
    );
    assert!(game.state.quiz_npcs.get(npc).is_none());
    assert_eq!(game.state.player, Pos { y: 1, x: 3 }, "a right answer keeps the player in place");
    assert!(game.log().contains(&LogEvent::QuizAnswered { npc, correct: true }));
}

#[test]
fn wrong_answer_costs_the_trip_and_redraws_next_time() {
    let mut game = quiz_corridor();
    let npc = only_quiz_npc(&game);
    step(&mut game, Direction::Right, 0);
    step(&mut game, Direction::Right, 0);

    game.apply_intent(Intent::QuizAppendText("not even close".to_owned()), 0).ok();
    assert_eq!(
        game.apply_intent(Intent::QuizSubmit, 0),
        Ok(IntentOutcome::QuizResolved { correct: false })
    );
    assert_eq!(game.state.player, game.state.start);
    assert_eq!(game.state.quiz_npcs[npc].question, None);

    // The NPC is still there; walking back into it starts a fresh quiz.
    step(&mut game, Direction::Right, 0);
    let report = step(&mut game, Direction::Right, 0);
    assert_eq!(report.quiz_started, Some(npc));
}

#[test]
fn unfocused_input_ignores_text_but_not_backspace_or_submit() {
    let mut game = quiz_corridor();
    step(&mut game, Direction::Right, 0);
    step(&mut game, Direction::Right, 0);

    game.apply_intent(Intent::QuizAppendText("ab".to_owned()), 0).ok();
    assert_eq!(
        game.apply_intent(Intent::SetQuizFocus(false), 0),
        Ok(IntentOutcome::QuizFocusChanged(false))
    );
    assert_eq!(
        game.apply_intent(Intent::QuizAppendChar('c'), 0),
        Ok(IntentOutcome::QuizInputRejected)
    );
    assert_eq!(game.apply_intent(Intent::QuizBackspace, 0), Ok(IntentOutcome::QuizInputChanged));
    assert_eq!(game.quiz().map(|quiz| quiz.input.as_str()), Some("a"));
    assert_eq!(
        game.apply_intent(Intent::ToggleQuizFocus, 0),
        Ok(IntentOutcome::QuizFocusChanged(true))
    );
    assert!(matches!(
        game.apply_intent(Intent::QuizSubmit, 0),
        Ok(IntentOutcome::QuizResolved { .. })
    ));
}

#[test]
fn roaming_npc_can_walk_into_the_player() {
    let mut game = scripted_game(
        1,
        &[
            "#####",
            "#S###",
            "#E###",
            "#PQ##",
            "#####",
        ],
    );
    let npc = only_quiz_npc(&game);
    game.tick(499);
    assert_eq!(game.phase(), Phase::Playing);

    game.tick(500);
    assert_eq!(game.state.quiz_npcs[npc].pos, game.state.player);
    assert_eq!(game.phase(), Phase::QuizActive);
    assert_eq!(game.quiz().map(|quiz| quiz.npc), Some(npc));
}

#[test]
fn roaming_npc_never_enters_the_start_cell() {
    let mut game = scripted_game(
        1,
        &[
            "#####",
            "#SQ##",
            "#####",
            "#PE##",
            "#####",
        ],
    );
    let npc = only_quiz_npc(&game);
    for now in (500..=5_000).step_by(500) {
        game.tick(now);
        assert_eq!(game.state.quiz_npcs[npc].pos, Pos { y: 1, x: 2 });
    }
}

#[test]
fn quiz_intents_without_a_quiz_are_rejected() {
    let mut game = quiz_corridor();
    for intent in [
        Intent::QuizAppendChar('x'),
        Intent::QuizAppendText("x".to_owned()),
        Intent::QuizBackspace,
        Intent::QuizSubmit,
        Intent::ToggleQuizFocus,
        Intent::SetQuizFocus(true),
    ] {
        assert_eq!(game.apply_intent(intent, 0), Err(GameError::NoActiveQuiz));
    }
}
