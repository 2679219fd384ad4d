//! 標準入出力でインタビューを行う ChatIo 実装

use crate::domain::{Message, Sender};
use crate::ports::outbound::ChatIo;
use common::error::Error;
use std::io::{self, BufRead, Write};

/// bot は「AI」、ユーザーは「>」で始める
pub struct StdioChat;

impl StdioChat {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdioChat {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatIo for StdioChat {
    fn show_message(&self, message: &Message) -> Result<(), Error> {
        // ユーザー入力は端末にエコー済みなので bot だけ出す
        if message.sender == Sender::Bot {
            println!("\nAI: {}\n", message.text);
        }
        Ok(())
    }

    fn show_status(&self, status: &str) -> Result<(), Error> {
        eprintln!("{}", status);
        Ok(())
    }

    fn read_answer(&self) -> Result<Option<String>, Error> {
        print!("> ");
        io::stdout()
            .flush()
            .map_err(|e| Error::io_msg(format!("Failed to flush stdout: {}", e)))?;
        let mut line = String::new();
        let n = io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(|e| Error::io_msg(format!("Failed to read stdin: {}", e)))?;
        if n == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']);
        Ok(Some(trimmed.to_string()))
    }
}
