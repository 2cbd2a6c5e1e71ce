//! `todo` binary: a thin shell over `todo_core`.
//!
//! # Responsibility
//! - Parse arguments, open one session, run one command, save when it mutated.
//! - Surface any core error on stderr with a non-zero exit.

mod commands;

use commands::{CommandLine, Commands};
use log::info;
use std::error::Error;
use std::io;
use todo_core::{init_logging, TodoService};

fn main() -> Result<(), Box<dyn Error>> {
    let cli = CommandLine::parse_args();
    let config = cli.to_config();

    if let Some(log_dir) = &config.log_dir {
        init_logging(&config.log_level, log_dir)?;
    }

    let mut session = TodoService::open(&config)?;
    info!(
        "event=cli_command module=cli status=start items={}",
        session.list().len()
    );

    match cli.command {
        Commands::Add { title } => {
            session.add(title.join(" "));
            session.save()?;
        }
        Commands::Complete { position } => {
            session.complete(position)?;
            session.save()?;
        }
        Commands::Delete { position } => {
            session.delete(position)?;
            session.save()?;
        }
        Commands::List { .. } => {
            let stdout = io::stdout();
            session.report(&mut stdout.lock())?;
        }
    }

    Ok(())
}
