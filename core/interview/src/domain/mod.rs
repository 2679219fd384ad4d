//! confluation 固有のドメイン型（型と不変条件）

pub mod answers;
pub mod command;
pub mod interview;
pub mod message;
pub mod next_steps;
pub mod question;
pub mod report;

pub use answers::InterviewAnswers;
pub use command::InterviewCommand;
pub use interview::{Interview, InterviewState, Transition, WELCOME_MESSAGE};
pub use message::{Message, Sender};
pub use next_steps::NextSteps;
pub use question::{QuestionId, QUESTIONS, QUESTION_COUNT};
pub use report::{GeneratedReport, ReportData, ReportSource, SavedSession};
