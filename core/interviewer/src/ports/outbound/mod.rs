//! Outbound ポート: アプリが外界（LLM・保存先・端末）を使うための trait

pub mod answer_evaluator;
pub mod history_store;
pub mod interview_console;
pub mod llm_completion;
pub mod negative_detector;
pub mod state_reporter;

pub use answer_evaluator::AnswerEvaluator;
pub use history_store::HistoryStore;
pub use interview_console::InterviewConsole;
pub use llm_completion::LlmCompletion;
pub use negative_detector::NegativeDetector;
pub use state_reporter::StateReporter;
