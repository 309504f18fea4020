//! CLI entry point - the composition root.
//!
//! Providers are wired together in `bootstrap`; command dispatch routes to
//! handlers which only see the resulting `CliContext`.

use std::io;
use std::process::ExitCode;

use clap::Parser;

use rescope_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers, logging};

fn run(cli: &Cli) -> anyhow::Result<()> {
    let ctx = bootstrap(&CliConfig::from(cli))?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Commands::Locate { name } => handlers::locate::execute(&ctx, name, &mut out),
        Commands::LocateAll { name } => handlers::locate::execute_all(&ctx, name, &mut out),
        Commands::Cat { name } => handlers::cat::execute(&ctx, name, &mut out),
        Commands::LoadType { qualified_name } => {
            handlers::load_type::execute(&ctx, qualified_name, &mut out)
        }
        Commands::Root => handlers::root::execute(&ctx, &mut out),
        Commands::Describe => handlers::describe::execute(&ctx, &mut out),
    }
}

fn main() -> ExitCode {
    // Load environment variables before clap reads its env fallbacks
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("rescope: {err:#}");
            let code = err.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
            ExitCode::from(code)
        }
    }
}
