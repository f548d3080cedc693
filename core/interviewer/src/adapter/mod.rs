//! アダプター（Outbound ポートの実装）

pub mod cli_console;
pub mod driver_llm_completion;
pub mod json_history_store;
pub mod json_state_reporter;
pub mod llm_evaluator;
pub mod llm_negative_detector;

pub use cli_console::CliInterviewConsole;
pub use driver_llm_completion::DriverLlmCompletion;
pub use json_history_store::JsonHistoryStore;
pub use json_state_reporter::{timestamped_report_path, JsonStateReporter};
pub use llm_evaluator::LlmAnswerEvaluator;
pub use llm_negative_detector::LlmNegativeDetector;
