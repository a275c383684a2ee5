use clap::{Parser, ValueEnum};
use personal_copilot::{
    Command, Config, Copilot, EchoLLM, Settings, copilot, terminal::TerminalHost,
};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

#[derive(Copy, Clone, Debug, Default, ValueEnum)]
enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for tracing_subscriber::filter::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => tracing_subscriber::filter::LevelFilter::ERROR,
            LogLevel::Warn => tracing_subscriber::filter::LevelFilter::WARN,
            LogLevel::Info => tracing_subscriber::filter::LevelFilter::INFO,
            LogLevel::Debug => tracing_subscriber::filter::LevelFilter::DEBUG,
            LogLevel::Trace => tracing_subscriber::filter::LevelFilter::TRACE,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "copilot", about = "Send code to a hosted model and keep the answers in a panel")]
struct Cli {
    /// TOML settings file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Where the panel HTML is written
    #[arg(long, default_value = "copilot-panel.html")]
    out: PathBuf,

    /// Explain this file once and exit
    #[arg(long)]
    file: Option<PathBuf>,

    /// Answer locally instead of calling the inference API
    #[arg(long)]
    offline: bool,

    /// Logging verbosity level
    #[arg(long, default_value = "warn")]
    log_level: LogLevel,
}

const HELP: &str = "Type or paste code, then an empty line to send it.
  :model        pick a model
  :file <path>  explain a file
  :quit         exit";

async fn explain(copilot: &mut Copilot, host: &TerminalHost, text: String) {
    host.set_selection(text);
    if copilot.execute(Command::ExplainSelection).await.is_ok() {
        if let Some(last) = copilot.history().last() {
            println!("{}\n", last.ai_response);
        }
    }
}

async fn repl(copilot: &mut Copilot, host: &TerminalHost) -> anyhow::Result<()> {
    eprintln!("{HELP}");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut buffer: Vec<String> = Vec::new();
    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            ":quit" => break,
            ":model" => {
                let _ = copilot.execute(Command::SelectModel).await;
            }
            cmd if cmd.starts_with(":file ") => {
                let path = cmd.trim_start_matches(":file ").trim();
                match tokio::fs::read_to_string(path).await {
                    Ok(text) => explain(copilot, host, text).await,
                    Err(e) => eprintln!("[error] cannot read {path}: {e}"),
                }
            }
            "" if !buffer.is_empty() => {
                let text = buffer.join("\n");
                buffer.clear();
                explain(copilot, host, text).await;
            }
            "" => {}
            _ => buffer.push(line.clone()),
        }
    }
    if !buffer.is_empty() {
        explain(copilot, host, buffer.join("\n")).await;
    }
    Ok(())
}

/// `--offline` swaps in the echo backend and skips the token check.
fn open_session(host: Arc<TerminalHost>, settings: Settings, offline: bool) -> Option<Copilot> {
    if offline {
        Some(Copilot::with_client(host, Config::offline(settings), Arc::new(EchoLLM)))
    } else {
        copilot::start(host, Config::from_env(settings))
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(tracing_subscriber::filter::LevelFilter::from(cli.log_level))
        .with_writer(std::io::stderr)
        .init();

    let settings = match &cli.config {
        Some(path) => Settings::load(path).await?,
        None => Settings::default(),
    };

    let host = Arc::new(TerminalHost::new(cli.out.clone()));
    let Some(mut session) = open_session(host.clone(), settings, cli.offline) else {
        std::process::exit(1);
    };

    match cli.file {
        Some(path) => {
            let text = tokio::fs::read_to_string(&path).await?;
            explain(&mut session, &host, text).await;
        }
        None => repl(&mut session, &host).await?,
    }

    tracing::info!(panel = %host.panel_path().display(), "panel written");
    session.stop();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_defaults() {
        let cli = Cli::try_parse_from(["copilot"]).unwrap();
        assert!(matches!(cli.log_level, LogLevel::Warn));
        assert_eq!(cli.out, PathBuf::from("copilot-panel.html"));
        assert!(!cli.offline);
        assert!(cli.file.is_none());
    }

    #[test]
    fn cli_accepts_file_and_offline() {
        let cli =
            Cli::try_parse_from(["copilot", "--file", "a.py", "--offline", "--log-level", "debug"])
                .unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("a.py")));
        assert!(cli.offline);
        assert!(matches!(cli.log_level, LogLevel::Debug));
    }

    #[test]
    fn offline_session_opens_without_token() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("panel.html");
        let host = Arc::new(TerminalHost::new(&path));
        let session = open_session(host, Settings::default(), true);
        assert!(session.is_some());
        assert!(path.exists());
    }
}
