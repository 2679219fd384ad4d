//! 事前に用意した回答を読み込む Outbound ポート（--answers）

use crate::domain::InterviewAnswers;
use common::error::Error;
use std::path::Path;

pub trait AnswersSource: Send + Sync {
    fn load(&self, path: &Path) -> Result<InterviewAnswers, Error>;
}
