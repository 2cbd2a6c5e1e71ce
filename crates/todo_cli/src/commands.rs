//! Command-line surface for the `todo` binary.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use todo_core::{TodoConfig, DEFAULT_STORE_PATH};

#[derive(Parser, Debug)]
#[command(name = "todo")]
#[command(about = "A small todo list kept in a JSON file.")]
pub struct CommandLine {
    /// Store file to load from and save to
    #[arg(long, short, global = true, default_value = DEFAULT_STORE_PATH)]
    pub file: PathBuf,
    /// Log level (trace|debug|info|warn|error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,
    /// Absolute directory for rolling log files; logging is off when omitted
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Add a pending todo
    #[command(alias = "a")]
    Add {
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },
    /// Mark the todo at a 1-based position as completed
    #[command(alias = "c")]
    Complete { position: usize },
    /// Delete the todo at a 1-based position
    #[command(alias = "d")]
    Delete { position: usize },
    /// Print even-numbered todos up to a limit
    #[command(alias = "l")]
    List {
        #[arg(long)]
        limit: Option<usize>,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn to_config(&self) -> TodoConfig {
        let mut config = TodoConfig::with_store_path(self.file.clone());
        if let Some(level) = &self.log_level {
            config.log_level = level.clone();
        }
        config.log_dir = self.log_dir.clone();
        if let Commands::List { limit: Some(limit) } = self.command {
            config.report_limit = limit;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::{CommandLine, Commands};
    use clap::Parser;

    #[test]
    fn add_collects_title_words() {
        let cli = CommandLine::try_parse_from(["todo", "add", "buy", "milk"]).unwrap();
        assert_eq!(
            cli.command,
            Commands::Add {
                title: vec!["buy".to_string(), "milk".to_string()]
            }
        );
    }

    #[test]
    fn list_limit_flows_into_config() {
        let cli =
            CommandLine::try_parse_from(["todo", "--file", "x.json", "list", "--limit", "6"])
                .unwrap();
        let config = cli.to_config();
        assert_eq!(config.report_limit, 6);
        assert_eq!(config.store_path.to_str(), Some("x.json"));
    }

    #[test]
    fn negative_position_is_rejected_by_parser() {
        assert!(CommandLine::try_parse_from(["todo", "complete", "-1"]).is_err());
    }
}
