//! Text formatting for the HUD, banners and the diagnostic event trace.

use maze_core::content::messages;
use maze_core::mapgen::MAX_LEVEL;
use maze_core::{Banner, LogEvent, Phase, Pos, TeleportOutcome};

use crate::format_seed;

pub fn hud_line(level: u8, phase: Phase, seed: u64) -> String {
    let hint = match phase {
        Phase::Playing => "arrows move, R restarts",
        Phase::QuizActive => "Enter submits, Tab toggles focus",
        Phase::Victory => "Space restarts now",
    };
    format!("Level {level}/{MAX_LEVEL}  seed {}  ({hint})", format_seed(seed))
}

/// The line shown in the bottom message strip, if any.
pub fn banner_caption(banner: Option<&Banner<'_>>) -> Option<String> {
    match banner? {
        Banner::Victory => Some(messages::VICTORY.to_owned()),
        Banner::Message(text) => Some(format!("{text}  [Space]")),
        Banner::Quiz { .. } => None,
    }
}

fn pos_text(pos: Pos) -> String {
    format!("({}, {})", pos.y, pos.x)
}

pub fn event_log_line(event: &LogEvent) -> String {
    match event {
        LogEvent::MazeGenerated { level, generation } => {
            format!("maze #{generation} generated for level {level}")
        }
        LogEvent::HazardPlaced { cells } => {
            format!("hazard placed at {} {}", pos_text(cells[0]), pos_text(cells[1]))
        }
        LogEvent::HazardSkipped => "no hazard this maze".to_owned(),
        LogEvent::EscortPlaced { pos } => format!("escort waiting at {}", pos_text(*pos)),
        LogEvent::TrapSprung { at, outcome } => match outcome {
            TeleportOutcome::Teleported { to } => {
                format!("trap at {} teleported player to {}", pos_text(*at), pos_text(*to))
            }
            TeleportOutcome::StayedPut => format!("trap at {} fizzled", pos_text(*at)),
        },
        LogEvent::HazardTriggered { reveal_until } => {
            format!("hazard triggered, fog lifted until {reveal_until}ms")
        }
        LogEvent::EscortActivated { pos } => format!("escort following from {}", pos_text(*pos)),
        LogEvent::EscortDelivered => "escort delivered home".to_owned(),
        LogEvent::ExitBlocked { attempts } => format!("exit refused (attempt {attempts})"),
        LogEvent::LevelCleared { level } => format!("level {level} cleared"),
        LogEvent::QuizStarted { .. } => "quiz started".to_owned(),
        LogEvent::QuizAnswered { correct, .. } => {
            if *correct { "quiz answered correctly".to_owned() } else { "quiz failed".to_owned() }
        }
        LogEvent::RunRestarted => "run restarted".to_owned(),
    }
}
