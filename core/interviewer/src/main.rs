mod adapter;
mod cli;
mod domain;
mod ports;
mod usecase;
mod wiring;

#[cfg(test)]
mod tests;

use std::process;

use cli::{config_to_command, parse_args, print_completion, Config, ParseOutcome};
use common::error::Error;
use common::ports::outbound::{LogLevel, LogRecord};
use domain::InterviewCommand;
use ports::inbound::UseCaseRunner;
use usecase::RunOptions;
use wiring::{wire_app, wire_interview, App};

/// Command をディスパッチする Runner（match は main レイヤーに集約）
struct Runner {
    app: App,
}

impl UseCaseRunner for Runner {
    fn run(&self, config: Config) -> Result<i32, Error> {
        let cmd = config_to_command(config);
        let command_name = cmd.name();
        let _ = self.app.logger.log(
            &LogRecord::new(LogLevel::Info, "command started")
                .layer("cli")
                .kind("lifecycle")
                .field("command", command_name),
        );

        let result = match cmd {
            InterviewCommand::Help => {
                print_help();
                Ok(0)
            }
            InterviewCommand::Interview(options) => {
                wire_interview(&self.app, &options).and_then(|interview| {
                    interview.run(RunOptions {
                        fresh: options.fresh,
                        show_summary: options.show_summary,
                    })
                })
            }
        };

        let code = match &result {
            Ok(code) => *code,
            Err(e) => e.exit_code(),
        };
        let _ = self.app.logger.log(
            &LogRecord::new(LogLevel::Info, "command finished")
                .layer("cli")
                .kind("lifecycle")
                .field("command", command_name)
                .field("exit_code", code),
        );
        if let Err(ref e) = result {
            let _ = self
                .app
                .logger
                .log(&LogRecord::new(LogLevel::Error, e.to_string()).layer("cli").kind("error"));
        }
        result
    }
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            if e.is_usage() {
                print_usage();
            }
            eprintln!("interviewer: {}", e);
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

pub fn run() -> Result<i32, Error> {
    // .env は任意。実際の環境変数が優先される。
    dotenvy::dotenv().ok();

    let config = match parse_args()? {
        ParseOutcome::Config(c) => c,
        ParseOutcome::GenerateCompletion(shell) => {
            print_completion(shell);
            return Ok(0);
        }
    };
    let app = wire_app(config.verbose);
    let runner = Runner { app };
    runner.run(config)
}

fn print_usage() {
    eprintln!("Usage: interviewer [options]");
}

/// ヘルプ本文
fn help_text() -> String {
    [
        "Usage: interviewer [options]",
        "Options:",
        "  -h, --help                     Show this help message",
        "  -p, --profile <profile>        LLM profile (gpt, echo). Default: gpt",
        "                                 echo makes no API call and scores nothing, so the interview stays on Name",
        "  -m, --model <model>            Model name. Default: gpt-4",
        "  -t, --temperature <t>          Temperature for answer evaluation. Default: 0.7",
        "  --history-dir <dir>            Directory holding interview.json. Default: chat_history",
        "  --fresh                        Ignore the saved interview and start over",
        "  --report <path>                State report file. Default: interview_state_<YYYYmmdd_HHMMSS>.json",
        "  --no-report                    Do not write a state report",
        "  --no-summary                   Do not print the summary when the session ends",
        "  -v, --verbose                  Mirror log records to stderr",
        "  --generate <shell>             Generate shell completion script (bash, zsh, fish)",
        "",
        "During the interview:",
        "  /summary                       Show progress for every topic",
        "  exit, quit (or Ctrl-D)         End the session; progress is already saved",
        "",
        "Environment:",
        "  OPENAI_API_KEY     API key for the gpt profile (also read from ./.env)",
        "  OPENAI_BASE_URL    Override the API base URL. Default: https://api.openai.com/v1",
        "  INTERVIEWER_HOME   Home directory. Log: $INTERVIEWER_HOME/state/log.jsonl",
        "                     If unset, $XDG_CONFIG_HOME/interviewer (e.g. ~/.config/interviewer) is used.",
        "",
        "Examples:",
        "  interviewer",
        "  interviewer --fresh --report report.json",
    ]
    .join("\n")
}

fn print_help() {
    println!("{}", help_text());
}
