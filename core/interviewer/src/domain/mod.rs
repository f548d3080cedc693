//! interviewer 固有のドメイン型（型と不変条件）

pub mod command;
pub mod evaluation;
pub mod field;
pub mod form;
pub mod memory;
pub mod message;
pub mod session;

pub use command::{InterviewCommand, InterviewOptions, ReportTarget};
pub use evaluation::Evaluation;
pub use field::InterviewField;
pub use form::{FieldEntry, FieldStatus, InterviewForm, SATISFACTION_THRESHOLD};
pub use memory::InterviewMemory;
pub use message::{ChatMessage, Role};
pub use session::InterviewSession;
