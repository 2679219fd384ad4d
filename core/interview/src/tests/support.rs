//! テスト用のスタブアダプタ

use crate::domain::{InterviewAnswers, Message, QuestionId, SavedSession};
use crate::ports::outbound::{AnswersSource, ChatIo, ReportExporter};
use crate::usecase::app::{InterviewDeps, InterviewUseCase, IoDeps, ModelDeps, ObsDeps};
use common::adapter::NoopLog;
use common::error::Error;
use common::ports::outbound::{CompletionRequest, LlmCompletion, Pacer};
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// 決まった入力を順に返し、出力を記録する ChatIo
pub struct ScriptedChat {
    inputs: Mutex<VecDeque<String>>,
    pub shown: Mutex<Vec<Message>>,
    pub statuses: Mutex<Vec<String>>,
}

impl ScriptedChat {
    pub fn new(inputs: &[&str]) -> Self {
        Self {
            inputs: Mutex::new(inputs.iter().map(|s| s.to_string()).collect()),
            shown: Mutex::new(Vec::new()),
            statuses: Mutex::new(Vec::new()),
        }
    }

    pub fn shown_texts(&self) -> Vec<String> {
        self.shown.lock().unwrap().iter().map(|m| m.text.clone()).collect()
    }
}

impl ChatIo for ScriptedChat {
    fn show_message(&self, message: &Message) -> Result<(), Error> {
        self.shown.lock().unwrap().push(message.clone());
        Ok(())
    }

    fn show_status(&self, status: &str) -> Result<(), Error> {
        self.statuses.lock().unwrap().push(status.to_string());
        Ok(())
    }

    fn read_answer(&self) -> Result<Option<String>, Error> {
        Ok(self.inputs.lock().unwrap().pop_front())
    }
}

/// StubCompletion が受け取ったリクエスト
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub system: Option<String>,
    pub user: String,
    pub json: bool,
    pub temperature: Option<f32>,
}

/// 固定の応答（または失敗）を返す LlmCompletion
pub struct StubCompletion {
    live: bool,
    response: Result<String, Error>,
    pub calls: Mutex<Vec<RecordedCall>>,
}

impl StubCompletion {
    pub fn text(response: &str) -> Self {
        Self {
            live: true,
            response: Ok(response.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(err: Error) -> Self {
        Self {
            live: true,
            response: Err(err),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn offline() -> Self {
        Self {
            live: false,
            response: Err(Error::env("offline")),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl LlmCompletion for StubCompletion {
    fn is_live(&self) -> bool {
        self.live
    }

    fn complete(&self, request: &CompletionRequest<'_>) -> Result<String, Error> {
        self.calls.lock().unwrap().push(RecordedCall {
            system: request.system_instruction.map(str::to_string),
            user: request.user_message.to_string(),
            json: request.options.json,
            temperature: request.options.temperature,
        });
        self.response.clone()
    }
}

/// 待機時間を記録するだけの Pacer
#[derive(Default)]
pub struct RecordingPacer {
    pub pauses: Mutex<Vec<Duration>>,
}

impl Pacer for RecordingPacer {
    fn pause(&self, duration: Duration) {
        self.pauses.lock().unwrap().push(duration);
    }
}

/// メモリに保持する ReportExporter
#[derive(Default)]
pub struct MemoryExporter {
    pub saved: Mutex<Vec<(PathBuf, SavedSession)>>,
}

impl ReportExporter for MemoryExporter {
    fn export(&self, path: &Path, session: &SavedSession) -> Result<(), Error> {
        self.saved
            .lock()
            .unwrap()
            .push((path.to_path_buf(), session.clone()));
        Ok(())
    }
}

/// 固定の回答を返す AnswersSource
pub struct FixedAnswers(pub InterviewAnswers);

impl AnswersSource for FixedAnswers {
    fn load(&self, _path: &Path) -> Result<InterviewAnswers, Error> {
        Ok(self.0.clone())
    }
}

/// 10 問分の回答（"<id> answer"）
pub fn sample_inputs() -> Vec<String> {
    QuestionId::ALL
        .iter()
        .map(|id| format!("{} answer", id.as_str()))
        .collect()
}

pub fn sample_answers() -> InterviewAnswers {
    let mut a = InterviewAnswers::new();
    for (id, text) in QuestionId::ALL.iter().zip(sample_inputs()) {
        a.record(*id, text);
    }
    a
}

pub struct Harness {
    pub chat: Arc<ScriptedChat>,
    pub completion: Arc<StubCompletion>,
    pub pacer: Arc<RecordingPacer>,
    pub exporter: Arc<MemoryExporter>,
    pub use_case: InterviewUseCase,
}

pub fn harness(inputs: &[&str], completion: StubCompletion, preset: InterviewAnswers) -> Harness {
    let chat = Arc::new(ScriptedChat::new(inputs));
    let completion = Arc::new(completion);
    let pacer = Arc::new(RecordingPacer::default());
    let exporter = Arc::new(MemoryExporter::default());
    let use_case = InterviewUseCase::new(InterviewDeps {
        io: IoDeps {
            chat: Arc::clone(&chat) as Arc<dyn ChatIo>,
            pacer: Arc::clone(&pacer) as Arc<dyn Pacer>,
            answers_source: Arc::new(FixedAnswers(preset)),
            exporter: Arc::clone(&exporter) as Arc<dyn ReportExporter>,
        },
        model: ModelDeps {
            completion: Arc::clone(&completion) as Arc<dyn LlmCompletion>,
        },
        obs: ObsDeps {
            log: Arc::new(NoopLog),
        },
    });
    Harness {
        chat,
        completion,
        pacer,
        exporter,
        use_case,
    }
}
