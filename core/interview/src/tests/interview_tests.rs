use crate::domain::{
    Interview, InterviewAnswers, InterviewState, QuestionId, Sender, Transition, QUESTIONS,
    WELCOME_MESSAGE,
};
use crate::tests::support::sample_inputs;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

#[test]
fn test_initialize_emits_welcome_and_first_question_once() {
    let mut interview = Interview::new();
    let emitted = interview.initialize();
    assert_eq!(emitted.len(), 2);
    assert_eq!(emitted[0].text, WELCOME_MESSAGE);
    assert_eq!(emitted[1].text, QUESTIONS[0].text);
    assert!(emitted.iter().all(|m| m.sender == Sender::Bot));

    assert!(interview.initialize().is_empty());
    assert_eq!(interview.transcript().len(), 2);
}

#[test]
fn test_ten_answers_complete_and_invoke_callback_once() {
    let calls = Arc::new(AtomicUsize::new(0));
    let received = Arc::new(Mutex::new(None));
    let mut interview = Interview::with_completion({
        let calls = Arc::clone(&calls);
        let received = Arc::clone(&received);
        move |answers: &InterviewAnswers| {
            calls.fetch_add(1, Ordering::SeqCst);
            *received.lock().unwrap() = Some(answers.clone());
        }
    });
    interview.initialize();

    let inputs = sample_inputs();
    for (i, text) in inputs.iter().enumerate() {
        let t = interview.submit_answer(text);
        if i < 9 {
            assert!(matches!(t, Transition::Advanced { .. }), "answer {}", i);
            assert_eq!(interview.state(), InterviewState::AwaitingAnswer(i + 1));
        } else {
            match t {
                Transition::Completed(answers) => assert_eq!(answers.len(), 10),
                other => panic!("expected completion, got {:?}", other),
            }
        }
    }

    assert!(interview.is_complete());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    let answers = received.lock().unwrap().clone().unwrap();
    for (id, text) in QuestionId::ALL.iter().zip(inputs.iter()) {
        assert_eq!(answers.get(*id), Some(text.as_str()));
    }

    // 完了後の入力は無視され、コールバックも再度呼ばれない
    assert_eq!(interview.submit_answer("one more"), Transition::Ignored);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(interview.state(), InterviewState::Complete);
}

#[test]
fn test_blank_answers_are_rejected_without_side_effects() {
    let mut interview = Interview::new();
    interview.initialize();
    let before = interview.transcript().len();

    for blank in ["", "   ", "\n\t "] {
        assert_eq!(interview.submit_answer(blank), Transition::Rejected);
    }
    assert_eq!(interview.state(), InterviewState::AwaitingAnswer(0));
    assert_eq!(interview.transcript().len(), before);
    assert!(interview.answers().is_empty());
}

#[test]
fn test_answer_is_stored_untrimmed() {
    let mut interview = Interview::new();
    interview.initialize();
    interview.submit_answer("  Kyoto, a ceramics family  ");
    assert_eq!(
        interview.answers().get(QuestionId::Origin),
        Some("  Kyoto, a ceramics family  ")
    );
}

#[test]
fn test_encouragements_after_third_and_sixth_answers() {
    let mut interview = Interview::new();
    interview.initialize();
    let mut encouragements = Vec::new();
    for (i, text) in sample_inputs().iter().enumerate() {
        if let Transition::Advanced {
            encouragement: Some(e),
            next,
        } = interview.submit_answer(text)
        {
            encouragements.push((i, e, next.id));
        }
    }
    assert_eq!(encouragements.len(), 2);
    assert_eq!(encouragements[0].0, 2);
    assert_eq!(
        encouragements[0].1,
        "Excellent context. Now, let's look at your capabilities."
    );
    assert_eq!(encouragements[0].2, QuestionId::Superpower);
    assert_eq!(encouragements[1].0, 5);
    assert_eq!(
        encouragements[1].1,
        "I see the pattern forming. Now let's look for the market gap."
    );
    assert_eq!(encouragements[1].2, QuestionId::Friction);
}

#[test]
fn test_transcript_order_with_encouragements() {
    let mut interview = Interview::new();
    interview.initialize();
    for text in sample_inputs() {
        interview.submit_answer(&text);
    }
    let t = interview.transcript();
    // welcome + 10 質問 + 10 回答 + 励まし 2 件
    assert_eq!(t.len(), 23);
    assert_eq!(t[0].text, WELCOME_MESSAGE);
    assert_eq!(t[1].text, QUESTIONS[0].text);
    assert_eq!(t[2].sender, Sender::User);
    // 3 問目の回答の直後に励まし、その次に 4 問目
    let third_answer = t
        .iter()
        .position(|m| m.text == "struggle answer")
        .unwrap();
    assert_eq!(t[third_answer + 1].sender, Sender::Bot);
    assert!(t[third_answer + 1].text.starts_with("Excellent context"));
    assert_eq!(t[third_answer + 2].text, QUESTIONS[3].text);
    // 最後は 10 問目の回答
    assert_eq!(t.last().unwrap().text, "legacy answer");
}

#[test]
fn test_progress() {
    let mut interview = Interview::new();
    interview.initialize();
    assert_eq!(interview.progress(), 0.0);
    for text in sample_inputs().iter().take(5) {
        interview.submit_answer(text);
    }
    assert!((interview.progress() - 0.5).abs() < f64::EPSILON);
    assert_eq!(interview.current_question().unwrap().id, QuestionId::Compliment);
    for text in sample_inputs().iter().skip(5) {
        interview.submit_answer(text);
    }
    assert_eq!(interview.progress(), 1.0);
    assert!(interview.current_question().is_none());
}

#[test]
fn test_current_question_follows_script_order() {
    let mut interview = Interview::new();
    interview.initialize();
    for (i, text) in sample_inputs().iter().enumerate() {
        assert_eq!(interview.state(), InterviewState::AwaitingAnswer(i));
        let current = interview.current_question().unwrap();
        assert_eq!(current.id, QuestionId::ALL[i], "question {}", i);
        assert_eq!(current.id.index(), i);
        assert_eq!(current.text, QUESTIONS[i].text);
        interview.submit_answer(text);
        assert_eq!(interview.answers().get(QuestionId::ALL[i]), Some(text.as_str()));
    }
    assert_eq!(interview.state(), InterviewState::Complete);
}
