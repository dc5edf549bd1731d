//! Quiz encounters: lazy question assignment, the input buffer and answer resolution.
//! This module exists to keep quiz phase bookkeeping apart from movement rules.
//! It does not own when an encounter happens; movement and roaming call `start_quiz`.

use super::*;
use crate::content::{QUESTION_BANK, QuizQuestion, answer_matches};
use crate::mapgen::seed::choose;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizSession {
    pub npc: QuizNpcId,
    pub question: QuizQuestion,
    pub input: String,
    /// Text is only accepted while the input box has focus.
    pub focused: bool,
}

impl QuizSession {
    fn new(npc: QuizNpcId, question: QuizQuestion) -> Self {
        Self { npc, question, input: String::new(), focused: true }
    }

    pub fn input_chars(&self) -> usize {
        self.input.chars().count()
    }
}

impl Game {
    /// Opens a quiz against `npc`, drawing its question first if it has none.
    pub(super) fn start_quiz(&mut self, npc: QuizNpcId) -> bool {
        if self.quiz.is_some() {
            return false;
        }
        let Some(entry) = self.state.quiz_npcs.get_mut(npc) else {
            return false;
        };
        let question = match entry.question {
            Some(question) => question,
            None => {
                let Some(question) = choose(&mut self.rng, &QUESTION_BANK) else {
                    return false;
                };
                entry.question = Some(question);
                question
            }
        };

        self.quiz = Some(QuizSession::new(npc, question));
        self.phase = Phase::QuizActive;
        self.log.push(LogEvent::QuizStarted { npc });
        true
    }

    pub(super) fn quiz_append(&mut self, text: &str) -> Result<IntentOutcome, GameError> {
        let cap = self.config.quiz_input_cap;
        let session = self.quiz.as_mut().ok_or(GameError::NoActiveQuiz)?;
        let remaining = cap.saturating_sub(session.input_chars());
        if !session.focused || remaining == 0 {
            return Ok(IntentOutcome::QuizInputRejected);
        }

        let accepted: String =
            text.chars().filter(|ch| !ch.is_control()).take(remaining).collect();
        if accepted.is_empty() {
            return Ok(IntentOutcome::QuizInputRejected);
        }
        session.input.push_str(&accepted);
        Ok(IntentOutcome::QuizInputChanged)
    }

    pub(super) fn quiz_backspace(&mut self) -> Result<IntentOutcome, GameError> {
        let session = self.quiz.as_mut().ok_or(GameError::NoActiveQuiz)?;
        if session.input.pop().is_none() {
            return Ok(IntentOutcome::QuizInputRejected);
        }
        Ok(IntentOutcome::QuizInputChanged)
    }

    pub(super) fn set_quiz_focus(&mut self, focused: bool) -> Result<IntentOutcome, GameError> {
        let session = self.quiz.as_mut().ok_or(GameError::NoActiveQuiz)?;
        session.focused = focused;
        Ok(IntentOutcome::QuizFocusChanged(focused))
    }

    pub(super) fn toggle_quiz_focus(&mut self) -> Result<IntentOutcome, GameError> {
        let focused = !self.quiz.as_ref().ok_or(GameError::NoActiveQuiz)?.focused;
        self.set_quiz_focus(focused)
    }

    /// A right answer removes the NPC for good. A wrong one sends the player back to the
    /// start and makes the NPC draw a fresh question next time.
    pub(super) fn quiz_submit(&mut self) -> Result<IntentOutcome, GameError> {
        let session = self.quiz.take().ok_or(GameError::NoActiveQuiz)?;
        let correct = answer_matches(session.question.answer, &session.input);

        if correct {
            self.state.quiz_npcs.remove(session.npc);
        } else {
            if let Some(npc) = self.state.quiz_npcs.get_mut(session.npc) {
                npc.question = None;
            }
            let start = self.state.start;
            self.state.player = start;
            self.state.path_history.push(start);
            self.mark_explored(start);
        }

        self.phase = Phase::Playing;
        self.log.push(LogEvent::QuizAnswered { npc: session.npc, correct });
        Ok(IntentOutcome::QuizResolved { correct })
    }
}
