//! pydev - development workflow runner for a Python project.
//!
//! Sequences the external packaging tools (venv, pip, pip-compile, build,
//! twine, pex) behind a fixed set of subcommands. The subcommand list is
//! derived from the command registry at startup.

use anyhow::{bail, Result};
use clap::{value_parser, Arg};
use std::path::PathBuf;

use pydev::commands;
use pydev::config::Config;
use pydev::registry::Registry;

fn main() -> Result<()> {
    // Pick up VIRTUAL_ENV / WORKON_HOME / TWINE_* from a local .env if present.
    dotenvy::dotenv().ok();

    let registry = commands::builtin();
    let matches = cli(&registry).get_matches();

    let (name, _) = matches
        .subcommand()
        .expect("parser requires a subcommand");
    let explicit = matches.get_one::<PathBuf>("venv").map(PathBuf::as_path);
    let config = Config::resolve(explicit)?;

    match registry.get(name) {
        Some(command) => command.invoke(&config),
        None => bail!("unknown command: {}", name),
    }
}

/// Build the CLI from the registry: one subcommand per registered command,
/// plus the shared `--venv` override.
fn cli(registry: &Registry) -> clap::Command {
    let mut cli = clap::Command::new("pydev")
        .about("Development workflow runner for a Python project")
        .after_help(
            "QUICK START:\n  pydev lock       Pin dependencies\n  pydev init       Create the environment\n  pydev build      Build distributions\n  pydev preflight  Check the workspace",
        )
        .arg(
            Arg::new("venv")
                .long("venv")
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf))
                .global(true)
                .help("Virtual environment directory (overrides discovery)"),
        )
        .subcommand_required(true)
        .arg_required_else_help(true);

    for command in registry.iter() {
        cli = cli.subcommand(
            clap::Command::new(command.name().to_string()).about(command.description().to_string()),
        );
    }
    cli
}
