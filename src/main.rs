//! Mark - priority-ordered todo list kept in flat text files

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;

use mark::cli::{self, Cli, Commands};
use mark::store::{self, StoreError};

fn main() {
    if std::env::var("MARK_DEBUG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter("mark=debug")
            .init();
    }

    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("Error: {err:#}");
        std::process::exit(exit_code(&err));
    }
}

fn run(cli: Cli) -> Result<()> {
    let command = match cli.command {
        Some(command) => command,
        None => {
            Cli::command().print_help()?;
            return Ok(());
        }
    };

    // Completions don't need a store directory.
    if let Commands::Completion { shell } = command {
        generate(shell, &mut Cli::command(), "mark", &mut std::io::stdout());
        return Ok(());
    }

    let dir = cli.dir.unwrap_or_else(store::default_dir);

    match command {
        Commands::Ls(args) => cli::ls::run(&dir, args),
        Commands::Report(args) => cli::report::run(&dir, args),
        Commands::Add(args) => cli::add::run(&dir, args),
        Commands::Del(args) => cli::del::run(&dir, args),
        Commands::Done(args) => cli::done::run(&dir, args),
        Commands::Update(args) => cli::update::run(&dir, args),
        Commands::Completion { .. } => unreachable!(),
    }
}

/// Validation failures exit 1; storage failures exit 2.
fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<StoreError>() {
        Some(store_err) if store_err.is_validation() => 1,
        _ => 2,
    }
}
