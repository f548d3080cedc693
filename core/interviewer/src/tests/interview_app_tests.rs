use std::sync::Arc;

use common::adapter::NoopLog;
use common::error::Error;

use super::doubles::{
    evaluation, FailingLlm, FixedNegatives, MemoryHistoryStore, RecordingReporter,
    ScriptedConsole, ScriptedEvaluator,
};
use crate::adapter::{LlmAnswerEvaluator, LlmNegativeDetector};
use crate::domain::session::OPENING_QUESTION;
use crate::domain::{InterviewField, InterviewSession, Role};
use crate::ports::outbound::LlmCompletion;
use crate::usecase::interview::COMPLETION_MESSAGE;
use crate::usecase::{
    InterviewApp, InterviewDeps, ModelDeps, ObsDeps, RunOptions, StorageDeps, UiDeps,
};

struct Harness {
    evaluator: Arc<ScriptedEvaluator>,
    history: Arc<MemoryHistoryStore>,
    reporter: Arc<RecordingReporter>,
    console: Arc<ScriptedConsole>,
}

impl Harness {
    fn new(evaluations: Vec<Result<crate::domain::Evaluation, Error>>, inputs: &[&str]) -> Self {
        Self::with_history(evaluations, inputs, MemoryHistoryStore::default())
    }

    fn with_history(
        evaluations: Vec<Result<crate::domain::Evaluation, Error>>,
        inputs: &[&str],
        history: MemoryHistoryStore,
    ) -> Self {
        Self {
            evaluator: Arc::new(ScriptedEvaluator::new(evaluations)),
            history: Arc::new(history),
            reporter: Arc::new(RecordingReporter::default()),
            console: Arc::new(ScriptedConsole::new(inputs)),
        }
    }

    fn app(&self) -> InterviewApp {
        InterviewApp::new(InterviewDeps {
            model: ModelDeps {
                evaluator: self.evaluator.clone(),
                detector: Arc::new(FixedNegatives(&["no"])),
            },
            storage: StorageDeps {
                history: self.history.clone(),
                reporter: Some(self.reporter.clone()),
            },
            ui: UiDeps {
                console: self.console.clone(),
            },
            obs: ObsDeps {
                log: Arc::new(NoopLog),
            },
        })
    }

    fn saved(&self) -> InterviewSession {
        self.history.saved.lock().unwrap().clone().unwrap()
    }
}

const DEFAULT_RUN: RunOptions = RunOptions {
    fresh: false,
    show_summary: true,
};

#[test]
fn test_new_session_shows_opening_question_and_saves() {
    let h = Harness::new(vec![], &[]);
    assert_eq!(h.app().run(DEFAULT_RUN).unwrap(), 0);

    let out = h.console.output_text();
    assert!(out.contains("Topic: Name"));
    assert!(out.contains(&format!("Assistant: {}", OPENING_QUESTION)));
    assert_eq!(h.saved().transcript().len(), 1);
    assert_eq!(h.reporter.reports.lock().unwrap().len(), 1);
}

#[test]
fn test_answers_are_saved_after_each_turn() {
    let h = Harness::new(
        vec![Ok(evaluation(9, "unused")), Ok(evaluation(5, "Which team are you on?"))],
        &["Jane Doe", "Backend developer", "exit"],
    );
    h.app().run(DEFAULT_RUN).unwrap();

    let saved = h.saved();
    assert_eq!(saved.transcript().len(), 5);
    assert_eq!(saved.current_field(), Some(InterviewField::CurrentRole));
    assert_eq!(
        saved.transcript().last().map(|m| m.content.as_str()),
        Some("Which team are you on?")
    );
    // 開始時 + 2 ターン
    assert_eq!(*h.history.saves.lock().unwrap(), 3);
    assert_eq!(h.reporter.reports.lock().unwrap().len(), 3);

    let out = h.console.output_text();
    assert!(out.contains("Topic: Current Role"));
    assert!(out.contains("Assistant: Which team are you on?"));
}

#[test]
fn test_blank_lines_and_summary_do_not_submit() {
    let h = Harness::new(vec![], &["", "   ", "/summary", "quit"]);
    h.app().run(RunOptions {
        fresh: false,
        show_summary: false,
    })
    .unwrap();

    assert!(h.evaluator.seen.lock().unwrap().is_empty());
    assert_eq!(h.saved().transcript().len(), 1);
    let out = h.console.output_text();
    assert_eq!(out.matches("0/7 topics completed").count(), 1);
}

#[test]
fn test_summary_printed_at_end() {
    let h = Harness::new(vec![Ok(evaluation(8, "unused"))], &["Jane Doe"]);
    h.app().run(DEFAULT_RUN).unwrap();
    let out = h.console.output_text();
    assert!(out.contains("1/7 topics completed"));
    assert!(out.contains("[x] Name (8/10)"));
}

#[test]
fn test_no_summary_option() {
    let h = Harness::new(vec![], &[]);
    h.app()
        .run(RunOptions {
            fresh: false,
            show_summary: false,
        })
        .unwrap();
    assert!(!h.console.output_text().contains("topics completed"));
}

#[test]
fn test_evaluation_error_is_shown_and_session_continues() {
    let h = Harness::new(
        vec![Err(Error::provider("OpenAI API error: rate limited")), Ok(evaluation(9, "unused"))],
        &["Jane", "Jane Doe"],
    );
    assert_eq!(h.app().run(DEFAULT_RUN).unwrap(), 0);

    let errors = h.console.errors.lock().unwrap();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].starts_with("Error processing response: "));
    assert!(errors[0].contains("rate limited"));

    let saved = h.saved();
    assert_eq!(saved.current_field(), Some(InterviewField::CurrentRole));
    assert_eq!(
        saved.form().entry(InterviewField::Name).responses,
        vec!["Jane".to_string(), "Jane Doe".to_string()]
    );
}

#[test]
fn test_api_error_from_llm_is_shown_to_user() {
    let llm: Arc<dyn LlmCompletion> = Arc::new(FailingLlm(|| {
        Error::provider("OpenAI API error: Incorrect API key provided")
    }));
    let history = Arc::new(MemoryHistoryStore::default());
    let console = Arc::new(ScriptedConsole::new(&["Jane Doe", "Jane"]));
    let app = InterviewApp::new(InterviewDeps {
        model: ModelDeps {
            evaluator: Arc::new(LlmAnswerEvaluator::new(Arc::clone(&llm), 0.7, Arc::new(NoopLog))),
            detector: Arc::new(LlmNegativeDetector::new(llm, Arc::new(NoopLog))),
        },
        storage: StorageDeps {
            history: history.clone(),
            reporter: None,
        },
        ui: UiDeps {
            console: console.clone(),
        },
        obs: ObsDeps {
            log: Arc::new(NoopLog),
        },
    });
    assert_eq!(app.run(DEFAULT_RUN).unwrap(), 0);

    let errors = console.errors.lock().unwrap();
    assert_eq!(errors.len(), 2);
    for e in errors.iter() {
        assert!(e.starts_with("Error processing response: "));
        assert!(e.contains("Incorrect API key provided"));
    }

    // 評価できなかったので項目は進まず、返答も追加されない
    let saved = history.saved.lock().unwrap().clone().unwrap();
    assert_eq!(saved.current_field(), Some(InterviewField::Name));
    let assistant = saved
        .transcript()
        .iter()
        .filter(|m| m.role == Role::Assistant)
        .count();
    assert_eq!(assistant, 1);
    assert_eq!(saved.form().entry(InterviewField::Name).satisfaction, 0);
}

#[test]
fn test_resumes_saved_session() {
    let mut session = InterviewSession::new();
    session.record_answer(InterviewField::Name, "Jane Doe");
    session.apply_satisfaction(InterviewField::Name, 9);
    session.advance();
    session.push_assistant("Great! Let's move on to your current role.");
    let h = Harness::with_history(
        vec![Ok(evaluation(3, "How big is your team?"))],
        &["Developer"],
        MemoryHistoryStore::with(session),
    );
    h.app().run(DEFAULT_RUN).unwrap();

    let seen = h.evaluator.seen.lock().unwrap();
    assert_eq!(seen[0].0, InterviewField::CurrentRole);
    assert!(h.console.output_text().contains("User: Jane Doe"));
    assert_eq!(h.saved().transcript().len(), 5);
}

#[test]
fn test_fresh_ignores_saved_session() {
    let mut session = InterviewSession::new();
    session.advance();
    let h = Harness::with_history(vec![], &[], MemoryHistoryStore::with(session));
    h.app()
        .run(RunOptions {
            fresh: true,
            show_summary: false,
        })
        .unwrap();
    assert_eq!(h.saved().current_field(), Some(InterviewField::Name));
}

#[test]
fn test_finished_session_does_not_read_input() {
    let mut session = InterviewSession::new();
    while session.advance().is_some() {}
    session.push_assistant(COMPLETION_MESSAGE);
    let h = Harness::with_history(vec![], &["hello"], MemoryHistoryStore::with(session));
    h.app().run(DEFAULT_RUN).unwrap();

    assert!(h
        .console
        .output_text()
        .contains("The interview is already complete."));
    assert!(h.evaluator.seen.lock().unwrap().is_empty());
}

#[test]
fn test_corrupt_history_is_error() {
    let h = Harness::with_history(
        vec![],
        &[],
        MemoryHistoryStore {
            fail_load: true,
            ..Default::default()
        },
    );
    let err = h.app().run(DEFAULT_RUN).err().unwrap();
    assert_eq!(err.exit_code(), 65);
}
