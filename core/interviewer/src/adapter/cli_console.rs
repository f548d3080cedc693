//! 端末での面接 I/O（CLI 境界）
//!
//! stdin/stdout を用いた対話は adapter 層の責務。

use std::io::{self, BufRead, Write};

use common::error::Error;

use crate::domain::{ChatMessage, InterviewField, Role};
use crate::ports::outbound::InterviewConsole;

/// transcript の 1 行を表示用に整形する
pub fn format_message(message: &ChatMessage) -> String {
    match message.role {
        Role::Assistant => format!("Interviewer: {}", message.content),
        Role::User => format!("You: {}", message.content),
    }
}

/// 項目見出し
pub fn format_topic(field: InterviewField) -> String {
    let rule = "=".repeat(50);
    format!("{rule}\nTopic: {}\n{rule}", field.title())
}

/// stdin/stdout を使う InterviewConsole
#[derive(Debug, Default)]
pub struct CliInterviewConsole;

impl CliInterviewConsole {
    pub fn new() -> Self {
        Self
    }
}

fn out_err(e: io::Error) -> Error {
    Error::io_msg(format!("Failed to write to stdout: {}", e))
}

impl InterviewConsole for CliInterviewConsole {
    fn show_message(&self, message: &ChatMessage) -> Result<(), Error> {
        let mut out = io::stdout().lock();
        writeln!(out, "{}", format_message(message)).map_err(out_err)?;
        if message.role == Role::Assistant {
            writeln!(out).map_err(out_err)?;
        }
        Ok(())
    }

    fn show_topic(&self, field: InterviewField) -> Result<(), Error> {
        println!("\n{}", format_topic(field));
        Ok(())
    }

    fn show_notice(&self, text: &str) -> Result<(), Error> {
        println!("{}", text);
        Ok(())
    }

    fn show_error(&self, text: &str) -> Result<(), Error> {
        eprintln!("{}", text);
        Ok(())
    }

    fn read_answer(&self) -> Result<Option<String>, Error> {
        print!("You: ");
        io::stdout().flush().map_err(out_err)?;

        let mut line = String::new();
        let n = io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(|e| Error::io_msg(format!("Failed to read from stdin: {}", e)))?;
        if n == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
