//! Phase gate in front of every player-facing operation.

use super::*;

impl Game {
    pub fn apply_intent(
        &mut self,
        intent: Intent,
        now: Millis,
    ) -> Result<IntentOutcome, GameError> {
        match intent {
            Intent::Move(direction) => match self.phase {
                Phase::Playing => Ok(self.move_player(direction, now)),
                Phase::QuizActive => Err(GameError::QuizInProgress),
                Phase::Victory => Err(GameError::VictoryPending),
            },
            Intent::Regenerate => {
                self.ensure_no_quiz()?;
                self.restart_run(now);
                Ok(IntentOutcome::Regenerated)
            }
            Intent::DismissMessage => {
                self.ensure_no_quiz()?;
                if self.messages.dismiss() {
                    Ok(IntentOutcome::MessageDismissed)
                } else {
                    Ok(IntentOutcome::NoMessage)
                }
            }
            Intent::QuizAppendChar(ch) => self.quiz_append(ch.encode_utf8(&mut [0; 4])),
            Intent::QuizAppendText(text) => self.quiz_append(&text),
            Intent::QuizBackspace => self.quiz_backspace(),
            Intent::QuizSubmit => self.quiz_submit(),
            Intent::ToggleQuizFocus => self.toggle_quiz_focus(),
            Intent::SetQuizFocus(focused) => self.set_quiz_focus(focused),
        }
    }

    fn ensure_no_quiz(&self) -> Result<(), GameError> {
        if self.phase == Phase::QuizActive {
            return Err(GameError::QuizInProgress);
        }
        Ok(())
    }
}
