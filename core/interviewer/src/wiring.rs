//! 配線: 標準アダプタで UseCase を組み立てる

use std::sync::Arc;

use common::adapter::{FileJsonLog, NoopLog, StderrMirrorLog, StdEnvResolver, StdFileSystem};
use common::error::Error;
use common::llm::{create_driver, ProviderType};
use common::ports::outbound::{EnvResolver, FileSystem, Log};

use crate::adapter::{
    timestamped_report_path, CliInterviewConsole, DriverLlmCompletion, JsonHistoryStore,
    JsonStateReporter, LlmAnswerEvaluator, LlmNegativeDetector,
};
use crate::domain::{InterviewOptions, ReportTarget};
use crate::ports::outbound::{LlmCompletion, StateReporter};
use crate::usecase::{InterviewApp, InterviewDeps, ModelDeps, ObsDeps, StorageDeps, UiDeps};

/// コマンドに依らない共通の依存
pub struct App {
    pub fs: Arc<dyn FileSystem>,
    pub env_resolver: Arc<dyn EnvResolver>,
    pub logger: Arc<dyn Log>,
}

/// 標準アダプタで App を組み立てる。
///
/// ホームが解決できなければログは捨てる（面接自体は続けられる）。
pub fn wire_app(verbose: bool) -> App {
    let fs: Arc<dyn FileSystem> = Arc::new(StdFileSystem);
    let env_resolver: Arc<dyn EnvResolver> = Arc::new(StdEnvResolver);
    let base: Arc<dyn Log> = match env_resolver.resolve_home_dir() {
        Ok(home) => Arc::new(FileJsonLog::new(Arc::clone(&fs), home.log_file())),
        Err(_) => Arc::new(NoopLog),
    };
    let logger: Arc<dyn Log> = if verbose {
        Arc::new(StderrMirrorLog::new(base))
    } else {
        base
    };
    App {
        fs,
        env_resolver,
        logger,
    }
}

/// 面接のユースケースを組み立てる。
///
/// LLM プロバイダはここで作るため、API キー未設定は対話の前にエラーになる。
pub fn wire_interview(app: &App, options: &InterviewOptions) -> Result<InterviewApp, Error> {
    let provider_type = ProviderType::from_str(&options.profile).ok_or_else(|| {
        Error::invalid_argument(format!(
            "Unknown profile '{}'. Available: gpt, echo",
            options.profile
        ))
    })?;
    let driver = create_driver(
        provider_type,
        options.model.as_ref().map(|m| m.to_string()),
        None,
        app.env_resolver.as_ref(),
    )?;
    let llm: Arc<dyn LlmCompletion> = Arc::new(DriverLlmCompletion::new(driver));

    let reporter: Option<Arc<dyn StateReporter>> = match &options.report {
        ReportTarget::Disabled => None,
        ReportTarget::Path(path) => Some(Arc::new(JsonStateReporter::new(Arc::clone(&app.fs), path))),
        ReportTarget::Timestamped => Some(Arc::new(JsonStateReporter::new(
            Arc::clone(&app.fs),
            timestamped_report_path(chrono::Local::now()),
        ))),
    };

    Ok(InterviewApp::new(InterviewDeps {
        model: ModelDeps {
            evaluator: Arc::new(LlmAnswerEvaluator::new(
                Arc::clone(&llm),
                options.temperature,
                Arc::clone(&app.logger),
            )),
            detector: Arc::new(LlmNegativeDetector::new(llm, Arc::clone(&app.logger))),
        },
        storage: StorageDeps {
            history: Arc::new(JsonHistoryStore::new(
                Arc::clone(&app.fs),
                options.history_dir.clone(),
            )),
            reporter,
        },
        ui: UiDeps {
            console: Arc::new(CliInterviewConsole::new()),
        },
        obs: ObsDeps {
            log: Arc::clone(&app.logger),
        },
    }))
}
