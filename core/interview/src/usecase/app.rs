//! インタビューの実行（初期化 → 回答の読み取り → 完了 → レポート → 任意で調査・保存）

use crate::domain::{
    GeneratedReport, Interview, InterviewAnswers, Message, QuestionId, SavedSession, Transition,
    QUESTIONS, QUESTION_COUNT,
};
use crate::ports::outbound::{AnswersSource, ChatIo, ReportExporter};
use crate::usecase::pacing;
use crate::usecase::report::ReportGenerator;
use crate::usecase::research::MarketResearcher;
use common::error::Error;
use common::ports::outbound::{LlmCompletion, Log, LogLevel, LogRecord, Pacer};
use std::path::{Path, PathBuf};
use std::sync::Arc;

// --- 責務別 Deps（usecase が定義を所有し、wiring は組み立てるだけ）

pub struct InterviewDeps {
    pub io: IoDeps,
    pub model: ModelDeps,
    pub obs: ObsDeps,
}

pub struct IoDeps {
    pub chat: Arc<dyn ChatIo>,
    pub pacer: Arc<dyn Pacer>,
    pub answers_source: Arc<dyn AnswersSource>,
    pub exporter: Arc<dyn ReportExporter>,
}

pub struct ModelDeps {
    pub completion: Arc<dyn LlmCompletion>,
}

pub struct ObsDeps {
    pub log: Arc<dyn Log>,
}

/// 1 回の実行オプション
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunOptions {
    pub answers_file: Option<PathBuf>,
    pub research: bool,
    pub save: Option<PathBuf>,
}

/// 完了したセッション
#[derive(Debug, Clone, PartialEq)]
pub struct SessionOutcome {
    pub answers: InterviewAnswers,
    pub report: GeneratedReport,
    pub transcript: Vec<Message>,
    pub saved_to: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    Finished(SessionOutcome),
    /// 完了前に入力が尽きた（状態は破棄）
    Abandoned { answered: usize },
}

/// confluation のユースケース（アダプター経由で I/O を行う）
pub struct InterviewUseCase {
    deps: InterviewDeps,
    reports: ReportGenerator,
    researcher: MarketResearcher,
}

impl InterviewUseCase {
    pub fn new(deps: InterviewDeps) -> Self {
        let reports = ReportGenerator::new(
            Arc::clone(&deps.model.completion),
            Arc::clone(&deps.obs.log),
        );
        let researcher = MarketResearcher::new(
            Arc::clone(&deps.model.completion),
            Arc::clone(&deps.obs.log),
        );
        Self {
            deps,
            reports,
            researcher,
        }
    }

    fn log(&self, record: LogRecord) {
        let _ = self.deps.obs.log.log(&record);
    }

    fn say(&self, message: &Message) -> Result<(), Error> {
        self.deps.io.pacer.pause(pacing::bot_message_delay(&message.text));
        self.deps.io.chat.show_message(message)
    }

    fn show_progress(&self, interview: &Interview) -> Result<(), Error> {
        if let Some(q) = interview.current_question() {
            self.deps.io.chat.show_status(&format!(
                "Question {} of {}",
                q.id.index() + 1,
                QUESTION_COUNT
            ))?;
        }
        Ok(())
    }

    /// 質問の出し方を Transition に合わせて演出する
    fn present(&self, transition: &Transition) -> Result<(), Error> {
        if let Transition::Advanced {
            encouragement,
            next,
        } = transition
        {
            self.deps.io.pacer.pause(pacing::AFTER_ANSWER_DELAY);
            if let Some(text) = encouragement {
                self.say(&Message::bot(*text))?;
                self.deps.io.pacer.pause(pacing::AFTER_ENCOURAGEMENT_DELAY);
            }
            self.say(&Message::bot(next.text))?;
        }
        Ok(())
    }

    fn start(&self, interview: &mut Interview) -> Result<(), Error> {
        let opening = interview.initialize();
        let mut iter = opening.iter();
        if let Some(welcome) = iter.next() {
            self.deps.io.pacer.pause(pacing::WELCOME_DELAY);
            self.deps.io.chat.show_message(welcome)?;
        }
        if let Some(first) = iter.next() {
            self.deps.io.pacer.pause(pacing::FIRST_QUESTION_DELAY);
            self.say(first)?;
        }
        self.show_progress(interview)
    }

    /// 対話モード: ChatIo から 10 問分読む。EOF なら None。
    fn collect_interactive(&self, interview: &mut Interview) -> Result<Option<InterviewAnswers>, Error> {
        self.start(interview)?;
        loop {
            let line = match self.deps.io.chat.read_answer()? {
                Some(line) => line,
                None => return Ok(None),
            };
            let transition = interview.submit_answer(&line);
            match &transition {
                Transition::Rejected => continue,
                Transition::Ignored => return Ok(Some(interview.answers().clone())),
                Transition::Advanced { .. } => {
                    self.log(
                        LogRecord::new(LogLevel::Debug, "usecase", "interview", "answer recorded")
                            .with_field("answered", interview.answers().len()),
                    );
                    self.present(&transition)?;
                    self.show_progress(interview)?;
                }
                Transition::Completed(answers) => {
                    self.deps.io.pacer.pause(pacing::BEFORE_COMPLETION_DELAY);
                    return Ok(Some(answers.clone()));
                }
            }
        }
    }

    /// 再生モード: ファイルの回答を質問順に状態機械へ流す
    fn collect_replay(&self, interview: &mut Interview, path: &Path) -> Result<InterviewAnswers, Error> {
        let loaded = self.deps.io.answers_source.load(path)?;
        let missing: Vec<&str> = QuestionId::ALL
            .iter()
            .filter(|id| loaded.get(**id).map_or(true, |v| v.trim().is_empty()))
            .map(|id| id.as_str())
            .collect();
        if !missing.is_empty() {
            return Err(Error::invalid_argument(format!(
                "{}: missing answers for {}",
                path.display(),
                missing.join(", ")
            )));
        }

        interview.initialize();
        for q in QUESTIONS.iter() {
            let text = loaded.get(q.id).unwrap_or_default();
            if let Transition::Completed(answers) = interview.submit_answer(text) {
                return Ok(answers);
            }
        }
        Err(Error::system("interview did not complete after all answers were replayed"))
    }

    pub fn run(&self, options: &RunOptions) -> Result<RunOutcome, Error> {
        let mut interview = Interview::with_completion({
            let log = Arc::clone(&self.deps.obs.log);
            move |answers: &InterviewAnswers| {
                let _ = log.log(
                    &LogRecord::new(LogLevel::Info, "usecase", "interview", "interview completed")
                        .with_field("answered", answers.len()),
                );
            }
        });

        let answers = match &options.answers_file {
            Some(path) => self.collect_replay(&mut interview, path)?,
            None => match self.collect_interactive(&mut interview)? {
                Some(answers) => answers,
                None => {
                    let answered = interview.answers().len();
                    self.log(
                        LogRecord::new(LogLevel::Warn, "usecase", "interview", "input ended before completion")
                            .with_field("answered", answered),
                    );
                    return Ok(RunOutcome::Abandoned { answered });
                }
            },
        };

        self.deps.io.chat.show_status(&format!(
            "Synthesizing Narrative... Connecting {} data points to identify your Confluation.",
            answers.len()
        ))?;
        let mut report = self.reports.generate(&answers);
        self.log(
            LogRecord::new(LogLevel::Info, "usecase", "report", "report generated")
                .with_field("source", report.source.as_str()),
        );

        if options.research {
            self.deps.io.chat.show_status("Running market analysis...")?;
            report.data.market_analysis = Some(self.researcher.research(&answers));
        }

        let transcript = interview.transcript().to_vec();
        if let Some(path) = &options.save {
            let session = SavedSession {
                answers: answers.clone(),
                report: report.data.clone(),
                source: report.source,
                transcript: transcript.clone(),
            };
            self.deps.io.exporter.export(path, &session)?;
            self.log(
                LogRecord::new(LogLevel::Info, "usecase", "export", "session saved")
                    .with_field("path", path.display().to_string()),
            );
        }

        Ok(RunOutcome::Finished(SessionOutcome {
            answers,
            report,
            transcript,
            saved_to: options.save.clone(),
        }))
    }

    /// 起動時に決まったプロバイダが実モデルか
    pub fn is_live(&self) -> bool {
        self.deps.model.completion.is_live()
    }
}
