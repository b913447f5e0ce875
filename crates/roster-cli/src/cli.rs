use clap::{Args, Parser, Subcommand};
use roster_core::AppConfig;
use std::path::PathBuf;

pub const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_COMMIT_HASH"), ")");

#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Browse Rick and Morty characters in the terminal", long_about = None)]
#[command(version = VERSION)]
pub struct Cli {
    /// Character API base URL (or set ROSTER_BASE_URL env var)
    #[arg(long, value_name = "URL", env = "ROSTER_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Search text to start with
    #[arg(long, value_name = "TEXT")]
    pub query: Option<String>,

    /// Quiet period after the last keystroke before searching
    #[arg(long, value_name = "MS")]
    pub debounce_ms: Option<u64>,

    /// Config file (defaults to $XDG_CONFIG_HOME/roster/config.toml)
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch one page of characters and print it as JSON
    List(ListArgs),
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Args)]
pub struct ListArgs {
    /// Page number, starting at 1
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub page: u32,
    /// Name filter; empty matches everyone
    #[arg(long, default_value = "")]
    pub name: String,
}

impl Cli {
    /// Layer command-line overrides on top of the config file.
    pub fn apply_overrides(&self, mut config: AppConfig) -> AppConfig {
        if let Some(ref base_url) = self.base_url {
            config.base_url = Some(base_url.clone());
        }
        if let Some(debounce_ms) = self.debounce_ms {
            config.debounce_ms = Some(debounce_ms);
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::parse_from([
            "roster",
            "--base-url",
            "http://localhost:8080/api",
            "--debounce-ms",
            "250",
        ]);
        let config = cli.apply_overrides(AppConfig {
            debounce_ms: Some(900),
            cell_width_px: Some(10),
            ..AppConfig::default()
        });
        assert_eq!(config.effective_base_url(), "http://localhost:8080/api");
        assert_eq!(config.debounce_ms, Some(250));
        assert_eq!(config.cell_width_px, Some(10));
    }

    #[test]
    fn test_list_defaults() {
        let cli = Cli::parse_from(["roster", "list"]);
        match cli.command {
            Some(Commands::List(args)) => {
                assert_eq!(args.page, 1);
                assert_eq!(args.name, "");
            }
            _ => panic!("expected list"),
        }
    }
}
