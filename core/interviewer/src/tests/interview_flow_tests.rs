use std::sync::Arc;

use common::adapter::NoopLog;
use common::error::Error;

use super::doubles::{evaluation, FixedNegatives, ScriptedEvaluator};
use crate::domain::{InterviewField, InterviewSession, Role};
use crate::usecase::interview::{InterviewFlow, COMPLETION_MESSAGE};

fn flow(evaluator: Arc<ScriptedEvaluator>) -> InterviewFlow {
    InterviewFlow::new(evaluator, Arc::new(FixedNegatives(&["no", "none"])), Arc::new(NoopLog))
}

#[test]
fn test_each_answer_adds_one_user_assistant_pair() {
    let evaluator = Arc::new(ScriptedEvaluator::new(vec![
        Ok(evaluation(4, "Could you also share your last name?")),
        Ok(evaluation(8, "unused")),
    ]));
    let flow = flow(Arc::clone(&evaluator));
    let mut session = InterviewSession::new();

    flow.submit_answer(&mut session, "Jane").unwrap();
    assert_eq!(session.transcript().len(), 3);
    flow.submit_answer(&mut session, "Doe").unwrap();
    assert_eq!(session.transcript().len(), 5);

    let roles: Vec<Role> = session.transcript().iter().map(|m| m.role).collect();
    assert_eq!(
        roles,
        vec![Role::Assistant, Role::User, Role::Assistant, Role::User, Role::Assistant]
    );
}

#[test]
fn test_low_score_asks_follow_up_and_stays() {
    let evaluator = Arc::new(ScriptedEvaluator::new(vec![Ok(evaluation(
        4,
        "Could you also share your last name?",
    ))]));
    let flow = flow(evaluator);
    let mut session = InterviewSession::new();

    let outcome = flow.submit_answer(&mut session, "Jane").unwrap();
    assert_eq!(outcome.reply, "Could you also share your last name?");
    assert!(!outcome.advanced);
    assert_eq!(outcome.current_field, Some(InterviewField::Name));
    assert_eq!(session.form().entry(InterviewField::Name).satisfaction, 4);
    assert_eq!(
        session.transcript().last().map(|m| m.content.as_str()),
        Some("Could you also share your last name?")
    );
}

#[test]
fn test_high_score_advances_to_next_field() {
    let evaluator = Arc::new(ScriptedEvaluator::new(vec![Ok(evaluation(9, "unused"))]));
    let flow = flow(evaluator);
    let mut session = InterviewSession::new();

    let outcome = flow.submit_answer(&mut session, "Jane Doe").unwrap();
    assert!(outcome.advanced);
    assert_eq!(outcome.current_field, Some(InterviewField::CurrentRole));
    assert_eq!(
        outcome.reply,
        format!(
            "Great! Let's move on to your current role. {}",
            InterviewField::CurrentRole.first_follow_up()
        )
    );
    let entry = session.form().entry(InterviewField::Name);
    assert_eq!(entry.value, "Jane Doe");
    assert_eq!(entry.satisfaction, 9);
}

#[test]
fn test_score_of_exactly_seven_advances() {
    let evaluator = Arc::new(ScriptedEvaluator::new(vec![Ok(evaluation(7, "unused"))]));
    let mut session = InterviewSession::new();
    let outcome = flow(evaluator).submit_answer(&mut session, "Jane Doe").unwrap();
    assert_eq!(outcome.current_field, Some(InterviewField::CurrentRole));
}

#[test]
fn test_evaluator_sees_combined_history() {
    let evaluator = Arc::new(ScriptedEvaluator::new(vec![
        Ok(evaluation(3, "Last name?")),
        Ok(evaluation(9, "unused")),
    ]));
    let flow = flow(Arc::clone(&evaluator));
    let mut session = InterviewSession::new();
    flow.submit_answer(&mut session, "Jane").unwrap();
    flow.submit_answer(&mut session, "Doe").unwrap();

    let seen = evaluator.seen.lock().unwrap();
    assert_eq!(seen[1], (InterviewField::Name, "Doe".to_string(), "Jane Doe".to_string()));
    assert_eq!(
        session.form().entry(InterviewField::Name).responses,
        vec!["Jane".to_string(), "Doe".to_string()]
    );
}

#[test]
fn test_negative_answer_skips_without_evaluating() {
    let evaluator = Arc::new(ScriptedEvaluator::new(vec![]));
    let flow = flow(Arc::clone(&evaluator));
    let mut session = InterviewSession::new();

    let outcome = flow.submit_answer(&mut session, "no").unwrap();
    assert!(outcome.advanced);
    assert_eq!(outcome.current_field, Some(InterviewField::CurrentRole));
    assert_eq!(
        outcome.reply,
        format!(
            "I understand. Let's move on to your current role. {}",
            InterviewField::CurrentRole.first_follow_up()
        )
    );
    assert!(evaluator.seen.lock().unwrap().is_empty());
    // フォームは更新しないが回答履歴には残る
    assert_eq!(session.form().entry(InterviewField::Name).satisfaction, 0);
    assert_eq!(session.memory().latest_response(InterviewField::Name), "no");
}

#[test]
fn test_last_field_finishes_interview() {
    let evaluator = Arc::new(ScriptedEvaluator::new(vec![Ok(evaluation(8, "unused"))]));
    let flow = flow(evaluator);
    let mut session = InterviewSession::new();
    while session.current_field() != Some(InterviewField::PreferredWorkEnvironment) {
        session.advance();
    }

    let outcome = flow.submit_answer(&mut session, "Remote, small team").unwrap();
    assert_eq!(outcome.reply, COMPLETION_MESSAGE);
    assert_eq!(outcome.current_field, None);
    assert!(session.is_finished());
}

#[test]
fn test_negative_on_last_field_finishes_interview() {
    let evaluator = Arc::new(ScriptedEvaluator::new(vec![]));
    let flow = flow(evaluator);
    let mut session = InterviewSession::new();
    while session.current_field() != Some(InterviewField::PreferredWorkEnvironment) {
        session.advance();
    }

    let outcome = flow.submit_answer(&mut session, "none").unwrap();
    assert_eq!(outcome.reply, COMPLETION_MESSAGE);
    assert!(session.is_finished());
}

#[test]
fn test_submit_to_finished_session_is_invalid_argument() {
    let evaluator = Arc::new(ScriptedEvaluator::new(vec![]));
    let flow = flow(evaluator);
    let mut session = InterviewSession::new();
    while session.advance().is_some() {}
    let before = session.transcript().len();

    let err = flow.submit_answer(&mut session, "hello").unwrap_err();
    assert!(err.is_usage());
    assert_eq!(session.transcript().len(), before);
}

#[test]
fn test_evaluation_error_keeps_answer_and_field() {
    let evaluator = Arc::new(ScriptedEvaluator::new(vec![Err(Error::system("boom"))]));
    let flow = flow(evaluator);
    let mut session = InterviewSession::new();

    assert!(flow.submit_answer(&mut session, "Jane").is_err());
    assert_eq!(session.current_field(), Some(InterviewField::Name));
    assert_eq!(session.transcript().len(), 2);
    assert_eq!(session.memory().latest_response(InterviewField::Name), "Jane");
    assert_eq!(session.form().entry(InterviewField::Name).satisfaction, 0);
}
