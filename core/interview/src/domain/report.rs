//! 戦略レポート（ReportData）と、モデルに届かないときの決定的なフォールバック

use crate::domain::answers::InterviewAnswers;
use crate::domain::message::Message;
use crate::domain::question::QuestionId;
use common::error::Error;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportData {
    pub title: String,
    pub narrative_thread: String,
    pub unfair_advantage: String,
    pub confluation_thesis: String,
    pub immediate_vision: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_analysis: Option<String>,
}

/// レポートの出どころ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportSource {
    Model,
    Fallback,
}

impl ReportSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Model => "model",
            Self::Fallback => "fallback",
        }
    }
}

/// 生成結果（データ + 出どころ）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedReport {
    pub data: ReportData,
    pub source: ReportSource,
}

/// --save で書き出すセッション全体
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedSession {
    pub answers: InterviewAnswers,
    pub report: ReportData,
    pub source: ReportSource,
    pub transcript: Vec<Message>,
}

/// 未回答キーの代替文字列
fn placeholder(id: QuestionId) -> &'static str {
    match id {
        QuestionId::Origin => "an unexpected place",
        QuestionId::Pivot => "an unconventional turn",
        QuestionId::Struggle => "a hard-won lesson",
        QuestionId::Superpower => "Skill",
        QuestionId::SoftHeart => "Passion",
        QuestionId::Compliment => "a talent you take for granted",
        QuestionId::Friction => "a broken process",
        QuestionId::Customer => "the people you serve",
        QuestionId::Forefront => "your next move",
        QuestionId::Legacy => "a lasting legacy",
    }
}

impl ReportData {
    /// 必須 5 項目がすべて空でないことを確認する
    pub fn validate(&self) -> Result<(), Error> {
        let fields = [
            ("title", &self.title),
            ("narrative_thread", &self.narrative_thread),
            ("unfair_advantage", &self.unfair_advantage),
            ("confluation_thesis", &self.confluation_thesis),
            ("immediate_vision", &self.immediate_vision),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(Error::schema(format!("field `{}` is empty", name)));
            }
        }
        Ok(())
    }

    /// 回答から組み立てる決定的なレポート。失敗しない。
    pub fn fallback(answers: &InterviewAnswers) -> Self {
        let get = |id: QuestionId| {
            answers
                .get(id)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| placeholder(id))
        };
        let superpower = get(QuestionId::Superpower);
        Self {
            title: format!("{} for {}", superpower, get(QuestionId::SoftHeart)),
            narrative_thread: format!(
                "You started in {} and navigated through {}. This path built the context for your mission.",
                get(QuestionId::Origin),
                get(QuestionId::Pivot)
            ),
            unfair_advantage: format!(
                "Your arsenal combines {} with {}. This is your unique wedge in the market.",
                superpower,
                get(QuestionId::Compliment)
            ),
            confluation_thesis: format!(
                "The Opportunity: Solve the frustration of \"{}\" by applying professional-grade \"{}\" standards.",
                get(QuestionId::Friction),
                superpower
            ),
            immediate_vision: format!(
                "Your mind is fixated on \"{}\". Use this energy to build towards \"{}\".",
                get(QuestionId::Forefront),
                get(QuestionId::Legacy)
            ),
            market_analysis: None,
        }
    }
}
