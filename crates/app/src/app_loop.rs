use macroquad::prelude::KeyCode;
use maze_core::journal::InputJournal;
use maze_core::{Direction, Game, Intent, IntentOutcome, Millis, Phase};
use tracing::{debug, info};

use crate::layout::quiz_overlay_layout;
use crate::ui_text::event_log_line;

/// Raw input gathered for one rendered frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameInput {
    pub keys_pressed: Vec<KeyCode>,
    /// Text typed this frame, IME composition included.
    pub chars: Vec<char>,
    /// Left click position in screen pixels.
    pub click: Option<(f32, f32)>,
}

impl FrameInput {
    pub fn keys(keys: &[KeyCode]) -> Self {
        FrameInput { keys_pressed: keys.to_vec(), ..Self::default() }
    }

    fn pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed.contains(&key)
    }
}

pub struct AppState {
    pub screen_width: f32,
    pub screen_height: f32,
    /// Every intent the game accepted plus every tick, stamped with the frame clock.
    pub journal: InputJournal,
    logged_events: usize,
}

impl AppState {
    pub fn new(game: &Game) -> Self {
        let config = game.config();
        AppState {
            screen_width: config.world_width as f32,
            screen_height: config.world_height as f32,
            journal: InputJournal::new(game.seed(), config.clone()),
            logged_events: 0,
        }
    }

    pub fn set_screen_size(&mut self, width: f32, height: f32) {
        self.screen_width = width;
        self.screen_height = height;
    }

    /// Translates this frame's input into intents for the phase the game is in.
    pub fn intents_for(&self, game: &Game, input: &FrameInput) -> Vec<Intent> {
        let mut intents = Vec::new();
        match game.phase() {
            Phase::QuizActive => {
                if let Some((x, y)) = input.click {
                    let layout = quiz_overlay_layout(self.screen_width, self.screen_height);
                    let input_box = layout.input;
                    intents.push(Intent::SetQuizFocus(input_box.contains(x, y)));
                }
                if input.pressed(KeyCode::Tab) {
                    intents.push(Intent::ToggleQuizFocus);
                }
                let typed: String = input.chars.iter().filter(|ch| !ch.is_control()).collect();
                if !typed.is_empty() {
                    intents.push(Intent::QuizAppendText(typed));
                }
                if input.pressed(KeyCode::Backspace) {
                    intents.push(Intent::QuizBackspace);
                }
                if input.pressed(KeyCode::Enter) || input.pressed(KeyCode::KpEnter) {
                    intents.push(Intent::QuizSubmit);
                }
            }
            Phase::Victory => {
                if input.pressed(KeyCode::Space) || input.pressed(KeyCode::R) {
                    intents.push(Intent::Regenerate);
                }
            }
            Phase::Playing => {
                for key in &input.keys_pressed {
                    let intent = match key {
                        KeyCode::Up => Intent::Move(Direction::Up),
                        KeyCode::Down => Intent::Move(Direction::Down),
                        KeyCode::Left => Intent::Move(Direction::Left),
                        KeyCode::Right => Intent::Move(Direction::Right),
                        KeyCode::Space if game.message().is_some() => Intent::DismissMessage,
                        KeyCode::Space | KeyCode::R => Intent::Regenerate,
                        _ => continue,
                    };
                    intents.push(intent);
                }
            }
        }
        intents
    }

    /// Applies this frame's input, then advances the game's deadlines to `now`.
    pub fn tick(
        &mut self,
        game: &mut Game,
        input: &FrameInput,
        now: Millis,
    ) -> Vec<IntentOutcome> {
        let mut outcomes = Vec::new();
        for intent in self.intents_for(game, input) {
            match game.apply_intent(intent.clone(), now) {
                Ok(outcome) => {
                    self.journal.append_intent(now, intent);
                    outcomes.push(outcome);
                }
                Err(err) => debug!(?intent, %err, "intent rejected"),
            }
        }
        game.tick(now);
        self.journal.append_tick(now);

        for event in &game.log()[self.logged_events..] {
            info!(now, "{}", event_log_line(event));
        }
        self.logged_events = game.log().len();
        outcomes
    }
}
