//! インタビューの質問（固定 10 問・順序付き）

use serde::{Deserialize, Serialize};

/// 質問 ID。宣言順が質問順（Ord もこの順）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionId {
    Origin,
    Pivot,
    Struggle,
    Superpower,
    SoftHeart,
    Compliment,
    Friction,
    Customer,
    Forefront,
    Legacy,
}

impl QuestionId {
    /// 質問順の全 ID
    pub const ALL: [QuestionId; QUESTION_COUNT] = [
        Self::Origin,
        Self::Pivot,
        Self::Struggle,
        Self::Superpower,
        Self::SoftHeart,
        Self::Compliment,
        Self::Friction,
        Self::Customer,
        Self::Forefront,
        Self::Legacy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Origin => "origin",
            Self::Pivot => "pivot",
            Self::Struggle => "struggle",
            Self::Superpower => "superpower",
            Self::SoftHeart => "soft_heart",
            Self::Compliment => "compliment",
            Self::Friction => "friction",
            Self::Customer => "customer",
            Self::Forefront => "forefront",
            Self::Legacy => "legacy",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|id| id.as_str() == s)
    }

    /// 0 始まりの質問番号
    pub fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 1 問分
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub id: QuestionId,
    pub text: &'static str,
}

pub const QUESTION_COUNT: usize = 10;

pub const QUESTIONS: [Question; QUESTION_COUNT] = [
    // Chapter 1: the origin
    Question {
        id: QuestionId::Origin,
        text: "Let's start at the beginning. Where did you start in life (geographically or culturally), and what was the first 'world' you felt you truly belonged to?",
    },
    Question {
        id: QuestionId::Pivot,
        text: "Most careers have a strange turn. Tell me about a time you made a decision that seemed illogical to others but felt right to you.",
    },
    Question {
        id: QuestionId::Struggle,
        text: "Resilience is data. What is the hardest professional challenge you've overcome, and what specific skill did you build to survive it?",
    },
    // Chapter 2: the arsenal
    Question {
        id: QuestionId::Superpower,
        text: "Chapter 2: Your Arsenal. If we stripped away your job title, what is the one 'Hard Skill' you possess that you could perform in your sleep? (e.g. negotiation, system architecture, writing)",
    },
    Question {
        id: QuestionId::SoftHeart,
        text: "Now the 'Soft Heart'. What is a topic\u{2014}completely unrelated to work\u{2014}that you find yourself reading about, watching, or doing when nobody is paying you?",
    },
    Question {
        id: QuestionId::Compliment,
        text: "What is the specific thing people constantly compliment you on, which you tend to dismiss as 'easy' or 'nothing special'?",
    },
    // Chapter 3: the confluation
    Question {
        id: QuestionId::Friction,
        text: "Chapter 3: The Opportunity. In that area you love (your soft heart), what is something that is broken, frustrating, or archaic? What makes you angry?",
    },
    Question {
        id: QuestionId::Customer,
        text: "If you were to solve that problem, who exactly are you helping? Describe the specific person who would thank you with tears in their eyes.",
    },
    Question {
        id: QuestionId::Forefront,
        text: "Right now, today, what is at the absolute forefront of your mind? What idea or feeling is occupying your mental RAM?",
    },
    Question {
        id: QuestionId::Legacy,
        text: "Final question. Fast forward 10 years. You built something that combined your skill and your passion. What does the headline say?",
    },
];

/// 番号から質問を引く
pub fn question_at(index: usize) -> Option<&'static Question> {
    QUESTIONS.get(index)
}
