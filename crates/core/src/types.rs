use serde::{Deserialize, Serialize};
use slotmap::new_key_type;
use thiserror::Error;

new_key_type! {
    pub struct QuizNpcId;
}

/// Milliseconds on the caller's monotonic clock.
pub type Millis = u64;

/// Grid coordinate; `y` is the row and `x` is the column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

impl Pos {
    pub fn step(self, direction: Direction) -> Pos {
        let (dy, dx) = direction.delta();
        Pos { y: self.y + dy, x: self.x + dx }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TileKind {
    Wall,
    Floor,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] =
        [Direction::Down, Direction::Up, Direction::Right, Direction::Left];

    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    Playing,
    QuizActive,
    Victory,
}

/// Player-facing operations consumed from the input collaborator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    Move(Direction),
    Regenerate,
    DismissMessage,
    QuizAppendChar(char),
    QuizAppendText(String),
    QuizBackspace,
    QuizSubmit,
    ToggleQuizFocus,
    SetQuizFocus(bool),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("a quiz is in progress and must be answered first")]
    QuizInProgress,
    #[error("no quiz is active")]
    NoActiveQuiz,
    #[error("the victory banner is still showing")]
    VictoryPending,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockReason {
    OutOfBounds,
    Wall,
    Hazard,
    DormantEscort,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExitOutcome {
    Victory { cleared_level: u8 },
    BlockedByEscort { attempts: u32 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TeleportOutcome {
    Teleported { to: Pos },
    StayedPut,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EscortEvent {
    Activated,
    Followed { to: Pos },
    Delivered,
}

/// Everything a successful step caused, in resolution order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveReport {
    pub to: Pos,
    pub exit: Option<ExitOutcome>,
    pub trap: Option<TeleportOutcome>,
    pub hazard_triggered: bool,
    pub escort: Option<EscortEvent>,
    pub quiz_started: Option<QuizNpcId>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IntentOutcome {
    Moved(MoveReport),
    Blocked(BlockReason),
    Regenerated,
    MessageDismissed,
    NoMessage,
    QuizInputChanged,
    QuizInputRejected,
    QuizResolved { correct: bool },
    QuizFocusChanged(bool),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogEvent {
    MazeGenerated { level: u8, generation: u64 },
    HazardPlaced { cells: [Pos; 2] },
    HazardSkipped,
    EscortPlaced { pos: Pos },
    TrapSprung { at: Pos, outcome: TeleportOutcome },
    HazardTriggered { reveal_until: Millis },
    EscortActivated { pos: Pos },
    EscortDelivered,
    ExitBlocked { attempts: u32 },
    LevelCleared { level: u8 },
    QuizStarted { npc: QuizNpcId },
    QuizAnswered { npc: QuizNpcId, correct: bool },
    RunRestarted,
}
