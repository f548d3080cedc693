use std::path::PathBuf;

use clap::builder::ArgAction;
use clap::value_parser;
use clap_complete::Shell;
use common::domain::{HistoryDir, ModelName, ProviderName};
use common::error::Error;

use crate::domain::{InterviewCommand, InterviewOptions, ReportTarget};

/// 既定のプロファイル
pub const DEFAULT_PROFILE: &str = "gpt";
/// 評価リクエストの既定温度
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub help: bool,
    /// -v / --verbose: ログを stderr にも出す
    pub verbose: bool,
    pub profile: Option<ProviderName>,
    pub model: Option<ModelName>,
    pub temperature: Option<f64>,
    pub history_dir: Option<PathBuf>,
    /// --fresh: 保存済みの履歴を無視して新しく始める
    pub fresh: bool,
    pub report: Option<PathBuf>,
    pub no_report: bool,
    pub no_summary: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            help: false,
            verbose: false,
            profile: None,
            model: None,
            temperature: None,
            history_dir: None,
            fresh: false,
            report: None,
            no_report: false,
            no_summary: false,
        }
    }
}

/// 解析結果: 通常の Config / 補完スクリプト生成
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    Config(Config),
    GenerateCompletion(Shell),
}

fn parse_temperature(s: &str) -> Result<f64, String> {
    let t: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a number", s))?;
    if !(0.0..=2.0).contains(&t) {
        return Err(format!("temperature must be between 0.0 and 2.0 (got {})", t));
    }
    Ok(t)
}

pub(crate) fn build_clap_command() -> clap::Command {
    clap::Command::new("interviewer")
        .about("Interview a candidate, one topic at a time, with an LLM judging each answer")
        .disable_help_flag(true)
        .arg(
            clap::Arg::new("help")
                .short('h')
                .long("help")
                .help("Show this help message")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Mirror log records to stderr (for troubleshooting)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("profile")
                .short('p')
                .long("profile")
                .value_name("profile")
                .help("Specify LLM profile (gpt, echo)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("model")
                .short('m')
                .long("model")
                .value_name("model")
                .help("Specify model name (e.g. gpt-4)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("temperature")
                .short('t')
                .long("temperature")
                .value_name("temperature")
                .help("Temperature for answer evaluation")
                .value_parser(parse_temperature)
                .num_args(1),
        )
        .arg(
            clap::Arg::new("history-dir")
                .long("history-dir")
                .value_name("dir")
                .help("Directory holding interview.json")
                .value_parser(value_parser!(PathBuf))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("fresh")
                .long("fresh")
                .help("Ignore the saved interview and start over")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("report")
                .long("report")
                .value_name("path")
                .help("Write the state report to this file")
                .value_parser(value_parser!(PathBuf))
                .conflicts_with("no-report")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("no-report")
                .long("no-report")
                .help("Do not write a state report")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("no-summary")
                .long("no-summary")
                .help("Do not print the summary when the session ends")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("generate")
                .long("generate")
                .value_name("shell")
                .help("Generate shell completion script")
                .value_parser(value_parser!(Shell))
                .num_args(1),
        )
}

fn matches_to_config(matches: &clap::ArgMatches) -> Config {
    Config {
        help: matches.get_flag("help"),
        verbose: matches.get_flag("verbose"),
        profile: matches
            .get_one::<String>("profile")
            .map(|s| ProviderName::new(s.clone())),
        model: matches
            .get_one::<String>("model")
            .map(|s| ModelName::new(s.clone())),
        temperature: matches.get_one::<f64>("temperature").copied(),
        history_dir: matches.get_one::<PathBuf>("history-dir").cloned(),
        fresh: matches.get_flag("fresh"),
        report: matches.get_one::<PathBuf>("report").cloned(),
        no_report: matches.get_flag("no-report"),
        no_summary: matches.get_flag("no-summary"),
    }
}

/// コマンドラインを解析する。補完生成が要求された場合は ParseOutcome::GenerateCompletion を返す。
pub fn parse_args() -> Result<ParseOutcome, Error> {
    let matches = build_clap_command()
        .try_get_matches()
        .map_err(|e| Error::invalid_argument(e.to_string()))?;

    if let Some(&shell) = matches.get_one::<Shell>("generate") {
        return Ok(ParseOutcome::GenerateCompletion(shell));
    }
    Ok(ParseOutcome::Config(matches_to_config(&matches)))
}

/// テスト用: 引数スライスから解析する
#[allow(dead_code)]
pub fn parse_args_from(args: &[&str]) -> Result<Config, Error> {
    let matches = build_clap_command()
        .try_get_matches_from(args)
        .map_err(|e| Error::invalid_argument(e.to_string()))?;
    Ok(matches_to_config(&matches))
}

/// 補完スクリプトを標準出力に出力する。
pub fn print_completion(shell: Shell) {
    let mut cmd = build_clap_command();
    clap_complete::generate(shell, &mut cmd, "interviewer", &mut std::io::stdout());
}

/// Config を InterviewCommand に変換する
pub fn config_to_command(config: Config) -> InterviewCommand {
    if config.help {
        return InterviewCommand::Help;
    }

    let report = if config.no_report {
        ReportTarget::Disabled
    } else {
        match config.report {
            Some(path) => ReportTarget::Path(path),
            None => ReportTarget::Timestamped,
        }
    };

    InterviewCommand::Interview(InterviewOptions {
        profile: config
            .profile
            .unwrap_or_else(|| ProviderName::new(DEFAULT_PROFILE)),
        model: config.model,
        temperature: config.temperature.unwrap_or(DEFAULT_TEMPERATURE),
        history_dir: config.history_dir.map(HistoryDir::new).unwrap_or_default(),
        fresh: config.fresh,
        report,
        show_summary: !config.no_summary,
    })
}
