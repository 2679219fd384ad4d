//! インタビューの状態機械
//!
//! AwaitingAnswer(0) → … → AwaitingAnswer(9) → Complete。Complete から出る遷移は無い。
//! 遷移は同期的で、演出用の待機は呼び出し側（Pacer）が持つ。

use crate::domain::answers::InterviewAnswers;
use crate::domain::message::Message;
use crate::domain::question::{question_at, Question, QUESTIONS, QUESTION_COUNT};

pub const WELCOME_MESSAGE: &str =
    "Welcome to the deep dive. We have 10 questions to uncover your narrative arc. Take your time.";

/// 指定した質問に答えた直後に挟む励ましの一言
const ENCOURAGEMENTS: [(usize, &str); 2] = [
    (2, "Excellent context. Now, let's look at your capabilities."),
    (5, "I see the pattern forming. Now let's look for the market gap."),
];

fn encouragement_after(index: usize) -> Option<&'static str> {
    ENCOURAGEMENTS
        .iter()
        .find(|(i, _)| *i == index)
        .map(|(_, text)| *text)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterviewState {
    AwaitingAnswer(usize),
    Complete,
}

/// submit_answer の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// 空白のみの入力。状態もトランスクリプトも変わらない
    Rejected,
    /// Complete 後の入力
    Ignored,
    /// 次の質問へ進んだ
    Advanced {
        encouragement: Option<&'static str>,
        next: &'static Question,
    },
    /// 10 問目に答えて完了した
    Completed(InterviewAnswers),
}

type CompletionCallback = Box<dyn FnOnce(&InterviewAnswers) + Send>;

pub struct Interview {
    state: InterviewState,
    answers: InterviewAnswers,
    transcript: Vec<Message>,
    initialized: bool,
    on_complete: Option<CompletionCallback>,
}

impl Interview {
    pub fn new() -> Self {
        Self {
            state: InterviewState::AwaitingAnswer(0),
            answers: InterviewAnswers::new(),
            transcript: Vec::new(),
            initialized: false,
            on_complete: None,
        }
    }

    /// 完了時に一度だけ呼ばれるコールバックを登録する
    pub fn with_completion(on_complete: impl FnOnce(&InterviewAnswers) + Send + 'static) -> Self {
        let mut interview = Self::new();
        interview.on_complete = Some(Box::new(on_complete));
        interview
    }

    /// 歓迎メッセージと最初の質問を出す。2 回目以降は何もしない（空を返す）。
    pub fn initialize(&mut self) -> Vec<Message> {
        if self.initialized {
            return Vec::new();
        }
        self.initialized = true;
        let emitted = vec![Message::bot(WELCOME_MESSAGE), Message::bot(QUESTIONS[0].text)];
        self.transcript.extend(emitted.iter().cloned());
        emitted
    }

    pub fn submit_answer(&mut self, text: &str) -> Transition {
        let index = match self.state {
            InterviewState::Complete => return Transition::Ignored,
            InterviewState::AwaitingAnswer(i) => i,
        };
        if text.trim().is_empty() {
            return Transition::Rejected;
        }

        let current = &QUESTIONS[index];
        self.transcript.push(Message::user(text));
        self.answers.record(current.id, text);

        let next_index = index + 1;
        match question_at(next_index) {
            Some(next) => {
                self.state = InterviewState::AwaitingAnswer(next_index);
                let encouragement = encouragement_after(index);
                if let Some(e) = encouragement {
                    self.transcript.push(Message::bot(e));
                }
                self.transcript.push(Message::bot(next.text));
                Transition::Advanced {
                    encouragement,
                    next,
                }
            }
            None => {
                self.state = InterviewState::Complete;
                if let Some(cb) = self.on_complete.take() {
                    cb(&self.answers);
                }
                Transition::Completed(self.answers.clone())
            }
        }
    }

    pub fn state(&self) -> InterviewState {
        self.state
    }

    pub fn is_complete(&self) -> bool {
        self.state == InterviewState::Complete
    }

    /// 今答えるべき質問（完了後は None）
    pub fn current_question(&self) -> Option<&'static Question> {
        match self.state {
            InterviewState::AwaitingAnswer(i) => question_at(i),
            InterviewState::Complete => None,
        }
    }

    /// 回答済みの割合（0.0〜1.0）
    pub fn progress(&self) -> f64 {
        self.answers.len() as f64 / QUESTION_COUNT as f64
    }

    pub fn answers(&self) -> &InterviewAnswers {
        &self.answers
    }

    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }
}

impl Default for Interview {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Interview {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Interview")
            .field("state", &self.state)
            .field("answers", &self.answers.len())
            .field("transcript", &self.transcript.len())
            .finish()
    }
}
