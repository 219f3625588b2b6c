//! Emissions CLI - greenhouse-gas emissions reports on the console.

mod cli;
mod commands;
mod render;

use clap::Parser;
use cli::{Cli, Commands};
use commands::report::ReportArgs;

/// Disable colors when `NO_COLOR` is set.
pub fn init_color() {
    if std::env::var_os("NO_COLOR").is_some() {
        colored::control::set_override(false);
    }
}

fn main() {
    let cli = Cli::parse();

    let env = env_logger::Env::default().default_filter_or(if cli.verbose { "debug" } else { "warn" });
    env_logger::Builder::from_env(env).init();
    init_color();

    let policy = cli.unparsable_years.into();

    let result = match cli.command {
        None => commands::menu::run(cli.data, policy, None),

        Some(Commands::Menu { years }) => commands::menu::run(cli.data, policy, years),

        Some(Commands::Regions { json }) => commands::list::regions(cli.data, policy, json),

        Some(Commands::Sources { json }) => commands::list::sources(cli.data, policy, json),

        Some(Commands::Range { json }) => commands::list::range(cli.data, policy, json),

        Some(Commands::Report {
            region,
            source,
            years,
            format,
            output,
        }) => commands::report::run(
            cli.data,
            policy,
            ReportArgs {
                region,
                source,
                years,
                format,
                output,
            },
            cli.verbose,
        ),

        Some(Commands::Info { json }) => commands::info::run(cli.data, policy, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
