//! The fixed question catalog.
//!
//! Process-wide constant configuration: exactly six questions, never mutated
//! at runtime. Weights follow the ToMo methodology: play, purpose and
//! potential count positively with decreasing strength, emotional pressure,
//! economic pressure and inertia count negatively with increasing strength.

/// Whether a question contributes toward or against the total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    Positive,
    Negative,
}

/// A catalog entry. `weight` is signed; `polarity` is derived from its sign
/// and kept explicit for callers that render the two groups separately.
#[derive(Debug, Clone, Copy)]
pub struct Question {
    pub id: u32,
    pub text: &'static str,
    pub weight: f64,
    pub polarity: Polarity,
}

/// The six reference questions.
pub const QUESTIONS: [Question; 6] = [
    Question {
        id: 1,
        text: "今の仕事を続けているのは仕事そのものが楽しいから",
        weight: 10.0,
        polarity: Polarity::Positive,
    },
    Question {
        id: 2,
        text: "今の仕事を続けているのは重要な目的があると思うから",
        weight: 5.0,
        polarity: Polarity::Positive,
    },
    Question {
        id: 3,
        text: "今の仕事を続けているのは目標達成に有益だから",
        weight: 1.66,
        polarity: Polarity::Positive,
    },
    Question {
        id: 4,
        text: "今の仕事を続けているのは辞めたら人を落胆させるから",
        weight: -1.66,
        polarity: Polarity::Negative,
    },
    Question {
        id: 5,
        text: "今の仕事を続けているのは金銭上の目標を失うから",
        weight: -5.0,
        polarity: Polarity::Negative,
    },
    Question {
        id: 6,
        text: "今の仕事を続ける妥当な理由はない",
        weight: -10.0,
        polarity: Polarity::Negative,
    },
];

/// Look up a catalog entry by question id.
pub fn question_by_id(id: u32) -> Option<&'static Question> {
    QUESTIONS.iter().find(|q| q.id == id)
}
