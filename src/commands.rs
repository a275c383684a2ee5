use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::copilot::Copilot;
use crate::error::CopilotError;

/// User-invocable commands a host registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    SelectModel,
    ExplainSelection,
}

impl Command {
    pub const ALL: [Command; 2] = [Command::SelectModel, Command::ExplainSelection];

    /// Stable identifier used for registration.
    pub fn id(self) -> &'static str {
        match self {
            Command::SelectModel => "personal-copilot.selectModel",
            Command::ExplainSelection => "personal-copilot.explainSelection",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Command::SelectModel => "Select Model",
            Command::ExplainSelection => "Explain Selection",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, PartialEq, Eq, Error)]
#[error("unknown command: {0}")]
pub struct UnknownCommand(pub String);

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Command::ALL
            .into_iter()
            .find(|c| c.id() == s)
            .ok_or_else(|| UnknownCommand(s.to_string()))
    }
}

impl Copilot {
    /// Run one command handler.
    pub async fn execute(&mut self, command: Command) -> Result<(), CopilotError> {
        tracing::debug!(%command, "executing command");
        match command {
            Command::SelectModel => self.select_model().await,
            Command::ExplainSelection => self.explain_selection().await,
        }
    }
}
