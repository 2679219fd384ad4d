use crate::domain::{InterviewAnswers, QuestionId, ReportSource, Sender, QUESTIONS};
use crate::tests::support::{harness, sample_answers, sample_inputs, StubCompletion};
use crate::usecase::app::{RunOptions, RunOutcome};
use crate::usecase::pacing;
use common::error::Error;
use std::path::PathBuf;

fn inputs() -> Vec<String> {
    sample_inputs()
}

#[test]
fn test_interactive_run_produces_report() {
    let owned = inputs();
    let refs: Vec<&str> = owned.iter().map(String::as_str).collect();
    let h = harness(&refs, StubCompletion::offline(), InterviewAnswers::new());

    let outcome = match h.use_case.run(&RunOptions::default()).unwrap() {
        RunOutcome::Finished(o) => o,
        other => panic!("unexpected outcome: {:?}", other),
    };
    assert_eq!(outcome.answers, sample_answers());
    assert_eq!(outcome.report.source, ReportSource::Fallback);
    assert_eq!(outcome.report.data.title, "superpower answer for soft_heart answer");
    assert!(outcome.saved_to.is_none());

    // 表示されたのは bot のメッセージのみ: welcome + 10 問 + 励まし 2 件
    let shown = h.chat.shown_texts();
    assert_eq!(shown.len(), 13);
    assert_eq!(shown[1], QUESTIONS[0].text);
    assert_eq!(outcome.transcript.len(), 23);
    assert!(h.chat.statuses.lock().unwrap().iter().any(|s| s == "Question 10 of 10"));
}

#[test]
fn test_blank_lines_are_skipped() {
    let mut owned = inputs();
    owned.insert(0, "   ".to_string());
    owned.insert(4, String::new());
    let refs: Vec<&str> = owned.iter().map(String::as_str).collect();
    let h = harness(&refs, StubCompletion::offline(), InterviewAnswers::new());
    match h.use_case.run(&RunOptions::default()).unwrap() {
        RunOutcome::Finished(o) => {
            assert_eq!(o.answers, sample_answers());
            assert!(o.transcript.iter().all(|m| !m.text.trim().is_empty()));
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
}

#[test]
fn test_eof_abandons_session() {
    let h = harness(&["Lagos", "dropped out"], StubCompletion::offline(), InterviewAnswers::new());
    let outcome = h.use_case.run(&RunOptions::default()).unwrap();
    assert_eq!(outcome, RunOutcome::Abandoned { answered: 2 });
    assert_eq!(h.completion.call_count(), 0);
    assert!(h.exporter.saved.lock().unwrap().is_empty());
}

#[test]
fn test_pacing_sequence() {
    let owned = inputs();
    let refs: Vec<&str> = owned.iter().map(String::as_str).collect();
    let h = harness(&refs, StubCompletion::offline(), InterviewAnswers::new());
    h.use_case.run(&RunOptions::default()).unwrap();

    let pauses = h.pacer.pauses.lock().unwrap().clone();
    assert_eq!(pauses[0], pacing::WELCOME_DELAY);
    assert_eq!(pauses[1], pacing::FIRST_QUESTION_DELAY);
    assert_eq!(pauses[2], pacing::bot_message_delay(QUESTIONS[0].text));
    assert_eq!(*pauses.last().unwrap(), pacing::BEFORE_COMPLETION_DELAY);
    let encouragement_pauses = pauses
        .iter()
        .filter(|d| **d == pacing::AFTER_ENCOURAGEMENT_DELAY)
        .count();
    assert_eq!(encouragement_pauses, 2);
    let after_answer = pauses
        .iter()
        .filter(|d| **d == pacing::AFTER_ANSWER_DELAY)
        .count();
    assert_eq!(after_answer, 9);
}

#[test]
fn test_replay_with_research_and_save() {
    let h = harness(&[], StubCompletion::failing(Error::http("down")), sample_answers());
    let options = RunOptions {
        answers_file: Some(PathBuf::from("answers.json")),
        research: true,
        save: Some(PathBuf::from("out/session.json")),
    };
    let outcome = match h.use_case.run(&options).unwrap() {
        RunOutcome::Finished(o) => o,
        other => panic!("unexpected outcome: {:?}", other),
    };
    // レポートとリサーチで 2 回呼ばれ、どちらも失敗して劣化する
    assert_eq!(h.completion.call_count(), 2);
    assert_eq!(outcome.report.source, ReportSource::Fallback);
    assert_eq!(
        outcome.report.data.market_analysis.as_deref(),
        Some("An error occurred while communicating with the analysis engine.")
    );

    let saved = h.exporter.saved.lock().unwrap();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].0, PathBuf::from("out/session.json"));
    assert_eq!(saved[0].1.answers, sample_answers());
    assert_eq!(saved[0].1.report, outcome.report.data);
    assert_eq!(saved[0].1.transcript.first().map(|m| m.sender), Some(Sender::Bot));
    assert_eq!(outcome.saved_to, Some(PathBuf::from("out/session.json")));
}

#[test]
fn test_replay_with_missing_answers_is_usage_error() {
    let mut partial = InterviewAnswers::new();
    partial.record(QuestionId::Origin, "o");
    let h = harness(&[], StubCompletion::offline(), partial);
    let options = RunOptions {
        answers_file: Some(PathBuf::from("answers.json")),
        ..Default::default()
    };
    let err = h.use_case.run(&options).unwrap_err();
    assert!(err.is_usage());
    assert!(err.to_string().contains("pivot"));
    assert!(err.to_string().contains("legacy"));
    assert!(!err.to_string().contains("origin,"));
}
