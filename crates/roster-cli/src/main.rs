mod cli;
mod handlers;
mod output;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use roster_api::HttpCharacterSource;
use roster_core::AppConfig;
use roster_tui::App;
use std::sync::Arc;

/// Where log output goes for one invocation.
#[derive(Debug, PartialEq, Eq)]
enum LogTarget {
    /// `ROSTER_DEBUG_LOG` is set: DEBUG with file/line, appended to that path.
    File(String),
    /// One-shot subcommands: WARN and above on stderr.
    Stderr,
    /// The TUI owns the terminal, so nothing may be written to it.
    Off,
}

fn log_target(debug_log: Option<String>, command: &Option<Commands>) -> LogTarget {
    match (debug_log, command) {
        (Some(path), _) => LogTarget::File(path),
        (None, None) => LogTarget::Off,
        (None, Some(_)) => LogTarget::Stderr,
    }
}

fn init_tracing(target: LogTarget) -> anyhow::Result<()> {
    match target {
        LogTarget::File(log_path) => {
            let log_file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&log_path)?;

            tracing_subscriber::fmt()
                .with_writer(log_file)
                .with_max_level(tracing::Level::DEBUG)
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true)
                .with_ansi(false)
                .init();
        }
        LogTarget::Stderr => {
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_max_level(tracing::Level::WARN)
                .init();
        }
        LogTarget::Off => {}
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(log_target(
        std::env::var("ROSTER_DEBUG_LOG").ok(),
        &cli.command,
    ))?;

    let file_config = match cli.config {
        Some(ref path) => AppConfig::load_from(path)?,
        None => AppConfig::load(),
    };
    let config = cli.apply_overrides(file_config);
    config.validate()?;

    match cli.command {
        None => {
            tracing::info!("Browsing characters from {}", config.effective_base_url());
            let source = Arc::new(HttpCharacterSource::from_config(&config)?);
            let mut app = App::new(&config, source, cli.query);
            app.run().await?;
        }
        Some(Commands::List(args)) => {
            let source = HttpCharacterSource::from_config(&config)?;
            handlers::list::handle(&source, args).await?;
        }
        Some(Commands::Completions { shell }) => {
            clap_complete::generate(shell, &mut Cli::command(), "roster", &mut std::io::stdout());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tui_session_logs_nowhere_without_debug_file() {
        assert_eq!(log_target(None, &None), LogTarget::Off);
    }

    #[test]
    fn test_subcommands_log_to_stderr() {
        let cli = Cli::parse_from(["roster", "list"]);
        assert_eq!(log_target(None, &cli.command), LogTarget::Stderr);
    }

    #[test]
    fn test_debug_log_file_wins() {
        let path = "/tmp/roster.log".to_string();
        assert_eq!(
            log_target(Some(path.clone()), &None),
            LogTarget::File(path.clone())
        );
        let cli = Cli::parse_from(["roster", "completions", "bash"]);
        assert_eq!(log_target(Some(path.clone()), &cli.command), LogTarget::File(path));
    }
}
