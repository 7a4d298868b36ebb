use serde::Serialize;

use crate::error::AppResult;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum OutputMode {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy)]
pub struct Output {
    mode: OutputMode,
}

impl Output {
    pub fn new(json: bool) -> Self {
        let mode = if json {
            OutputMode::Json
        } else {
            OutputMode::Text
        };
        Self { mode }
    }

    /// Prints `lines` in text mode, or `value` as pretty JSON.
    pub fn emit<T: Serialize>(&self, lines: &[String], value: &T) -> AppResult<()> {
        println!("{}", self.render(lines, value)?);
        Ok(())
    }

    pub fn render<T: Serialize>(&self, lines: &[String], value: &T) -> AppResult<String> {
        match self.mode {
            OutputMode::Text => Ok(lines.join("\n")),
            OutputMode::Json => Ok(serde_json::to_string_pretty(value)?),
        }
    }
}
