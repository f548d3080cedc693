//! ユースケース層（ports の trait のみに依存する）

pub mod app;
pub mod interview;
pub mod summary;

pub use app::{InterviewApp, InterviewDeps, ModelDeps, ObsDeps, RunOptions, StorageDeps, UiDeps};
