//! インタビュー回答（既知 10 キー → 任意の文字列）
//!
//! 値は一度セットしたら変更できない。JSON では回答済みのキーだけを質問順に出力する。

use crate::domain::question::{QuestionId, QUESTION_COUNT};
use common::error::Error;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<QuestionId, String>",
    into = "BTreeMap<QuestionId, String>"
)]
pub struct InterviewAnswers {
    values: [Option<String>; QUESTION_COUNT],
}

impl InterviewAnswers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: QuestionId) -> Option<&str> {
        self.values[id.index()].as_deref()
    }

    /// 回答を記録する。既に値があれば何もせず false を返す。
    pub fn record(&mut self, id: QuestionId, text: impl Into<String>) -> bool {
        let slot = &mut self.values[id.index()];
        if slot.is_some() {
            return false;
        }
        *slot = Some(text.into());
        true
    }

    /// 回答済みの数
    pub fn len(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_complete(&self) -> bool {
        self.len() == QUESTION_COUNT
    }

    /// 回答済みのものを質問順に返す
    pub fn iter(&self) -> impl Iterator<Item = (QuestionId, &str)> + '_ {
        QuestionId::ALL
            .iter()
            .filter_map(move |id| self.get(*id).map(|v| (*id, v)))
    }

    /// プロンプト埋め込み用の整形 JSON（質問順）
    pub fn to_pretty_json(&self) -> Result<String, Error> {
        serde_json::to_string_pretty(self).map_err(Error::from)
    }
}

impl From<BTreeMap<QuestionId, String>> for InterviewAnswers {
    fn from(map: BTreeMap<QuestionId, String>) -> Self {
        let mut answers = Self::new();
        for (id, text) in map {
            answers.record(id, text);
        }
        answers
    }
}

impl From<InterviewAnswers> for BTreeMap<QuestionId, String> {
    fn from(answers: InterviewAnswers) -> Self {
        QuestionId::ALL
            .iter()
            .zip(answers.values)
            .filter_map(|(id, v)| v.map(|v| (*id, v)))
            .collect()
    }
}
