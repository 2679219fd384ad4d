//! 市場調査（ベンチャーキャピタリスト視点の短い分析）

use crate::domain::{InterviewAnswers, QuestionId};
use common::ports::outbound::{CompletionRequest, LlmCompletion, Log, LogLevel, LogRecord};
use std::sync::Arc;

pub const MOCK_RESEARCH_MESSAGE: &str = "API Key missing. Cannot run live analysis.";
pub const RESEARCH_ERROR_MESSAGE: &str =
    "An error occurred while communicating with the analysis engine.";
pub const EMPTY_RESEARCH_MESSAGE: &str = "Analysis failed.";

/// 市場調査のプロンプト。未回答のキーは空文字で埋める。
pub fn build_research_prompt(answers: &InterviewAnswers) -> String {
    let get = |id| answers.get(id).unwrap_or_default();
    format!(
        r#"Act as a Venture Capitalist and Market Researcher.

Business Thesis:
Combine deep expertise in "{superpower}" with the market of "{soft_heart}".
Problem identified: "{friction}".
Target Customer: "{customer}".

Task:
1. Perform a brief market sizing analysis (TAM/SAM/SOM estimates based on general knowledge).
2. Identify 3 potential competitor types who might be missing this specific "expert" angle.
3. Critique this idea brutally: what is the main failure mode?

Format: Markdown. Keep it concise (under 300 words)."#,
        superpower = get(QuestionId::Superpower),
        soft_heart = get(QuestionId::SoftHeart),
        friction = get(QuestionId::Friction),
        customer = get(QuestionId::Customer),
    )
}

pub struct MarketResearcher {
    completion: Arc<dyn LlmCompletion>,
    log: Arc<dyn Log>,
}

impl MarketResearcher {
    pub fn new(completion: Arc<dyn LlmCompletion>, log: Arc<dyn Log>) -> Self {
        Self { completion, log }
    }

    /// 分析結果（markdown）。失敗しても固定文言を返す。
    pub fn research(&self, answers: &InterviewAnswers) -> String {
        if !self.completion.is_live() {
            return MOCK_RESEARCH_MESSAGE.to_string();
        }
        match self.completion.complete(&CompletionRequest::text(&build_research_prompt(answers))) {
            Ok(text) if text.trim().is_empty() => EMPTY_RESEARCH_MESSAGE.to_string(),
            Ok(text) => text,
            Err(e) => {
                let _ = self.log.log(
                    &LogRecord::new(LogLevel::Warn, "usecase", "llm", "market research failed")
                        .with_field("error", e.to_string()),
                );
                RESEARCH_ERROR_MESSAGE.to_string()
            }
        }
    }
}
