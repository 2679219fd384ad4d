//! 回答から戦略レポートを生成する（モデル → 失敗時は決定的フォールバック）

use crate::domain::{GeneratedReport, InterviewAnswers, ReportData, ReportSource};
use common::error::Error;
use common::llm::decode_json;
use common::ports::outbound::{CompletionRequest, LlmCompletion, Log, LogLevel, LogRecord};
use std::sync::Arc;

const REPORT_SYSTEM_INSTRUCTION: &str = "You are \"The Confluation Engine\", a high-end career strategist and biographer.";

/// 設定ファイルに temperature が無いときの値
pub const REPORT_TEMPERATURE: f32 = 0.7;

/// レポート生成用のプロンプト
pub fn build_report_prompt(answers: &InterviewAnswers) -> Result<String, Error> {
    Ok(format!(
        r#"Analyze the following interview answers from a user to construct a "Confluation Strategy".

User Data:
{answers}

Tone: Professional, insightful, slightly philosophical, encouraging but grounded in reality.

Output: A single JSON object (no markdown, no commentary) with exactly these string fields, all required and non-empty:
- "title": A catchy, 3-5 word title for the user's new career strategy or business thesis.
- "narrative_thread": A 2-sentence summary connecting their origin and pivot to their current state.
- "unfair_advantage": Analysis of how their hard skill (superpower) and compliment create a unique edge.
- "confluation_thesis": The core opportunity statement: solving the friction for the customer using their specific skills.
- "immediate_vision": A directive on how to use their current mental fixation (forefront) to achieve their legacy."#,
        answers = answers.to_pretty_json()?
    ))
}

pub struct ReportGenerator {
    completion: Arc<dyn LlmCompletion>,
    log: Arc<dyn Log>,
}

impl ReportGenerator {
    pub fn new(completion: Arc<dyn LlmCompletion>, log: Arc<dyn Log>) -> Self {
        Self { completion, log }
    }

    fn query_model(&self, answers: &InterviewAnswers) -> Result<ReportData, Error> {
        let prompt = build_report_prompt(answers)?;
        let request = CompletionRequest::json(&prompt)
            .with_system(REPORT_SYSTEM_INSTRUCTION)
            .with_temperature(REPORT_TEMPERATURE);
        let text = self.completion.complete(&request)?;
        let mut report: ReportData = decode_json(&text)?;
        report.validate()?;
        // 市場調査は別の呼び出しで埋める
        report.market_analysis = None;
        Ok(report)
    }

    /// レポートを生成する。エラーは呼び出し側に返さず、ログに残してフォールバックする。
    pub fn generate(&self, answers: &InterviewAnswers) -> GeneratedReport {
        if !self.completion.is_live() {
            let _ = self.log.log(&LogRecord::new(
                LogLevel::Info,
                "usecase",
                "llm",
                "mock mode: using deterministic report",
            ));
            return GeneratedReport {
                data: ReportData::fallback(answers),
                source: ReportSource::Fallback,
            };
        }

        match self.query_model(answers) {
            Ok(data) => GeneratedReport {
                data,
                source: ReportSource::Model,
            },
            Err(e) => {
                let _ = self.log.log(
                    &LogRecord::new(
                        LogLevel::Warn,
                        "usecase",
                        "llm",
                        "report generation failed, using fallback",
                    )
                    .with_field("error", e.to_string()),
                );
                GeneratedReport {
                    data: ReportData::fallback(answers),
                    source: ReportSource::Fallback,
                }
            }
        }
    }
}
