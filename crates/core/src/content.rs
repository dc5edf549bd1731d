//! Fixed text content: the quiz question bank and banner messages.

pub mod messages {
    pub const ESCORT_ACTIVATED: &str = "Is someone finally taking me home?!";
    pub const ESCORT_DELIVERED: &str = "Thank you for bringing me home.";
    pub const EXIT_FORGOT_ESCORT: &str = "Did you forget to walk someone home?";
    pub const EXIT_REFUSED_ESCORT: &str = "How could you leave the puppy behind?";
    pub const VICTORY: &str = "Victory!";
}

/// Exit attempts beyond this count switch to the sterner reminder.
pub const EXIT_NAG_THRESHOLD: u32 = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuizQuestion {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const QUESTION_BANK: [QuizQuestion; 6] = [
    QuizQuestion { question: "What is the chemical symbol for gold?", answer: "Au" },
    QuizQuestion { question: "How many sides does a hexagon have?", answer: "6" },
    QuizQuestion { question: "Which planet is known as the Red Planet?", answer: "Mars" },
    QuizQuestion { question: "What is 12 times 12?", answer: "144" },
    QuizQuestion { question: "What gas do plants absorb from the air?", answer: "CO2" },
    QuizQuestion { question: "At what time does a 24-hour clock show 9 pm?", answer: "21:00" },
];

pub fn exit_reminder(attempts: u32) -> &'static str {
    if attempts > EXIT_NAG_THRESHOLD {
        messages::EXIT_REFUSED_ESCORT
    } else {
        messages::EXIT_FORGOT_ESCORT
    }
}

/// Trimmed, case-insensitive answer comparison.
pub fn answer_matches(expected: &str, submitted: &str) -> bool {
    expected.trim().to_lowercase() == submitted.trim().to_lowercase()
}
