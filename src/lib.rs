pub mod commands;
pub mod config;
pub mod conversation;
pub mod copilot;
pub mod error;
pub mod filter;
pub mod hf_llm;
pub mod host;
pub mod llm;
pub mod models;
pub mod prompt;
pub mod render;
pub mod terminal;
pub mod view;

pub use commands::Command;
pub use config::{Config, Settings};
pub use conversation::{ConversationEntry, ConversationStore};
pub use copilot::{Copilot, start};
pub use error::CopilotError;
pub use host::Host;
pub use llm::{EchoLLM, LLMClient, TextGeneration};
pub use view::{PanelView, RequestState};
