//! CLI command handlers.
//!
//! Each submodule implements one subcommand:
//! - `clean` - Remove the environment and build artifacts
//! - `init` - Create the environment and install dependencies
//! - `lock` - Pin dependencies with pip-compile
//! - `build` - Build sdist and wheel artifacts
//! - `upload` - Upload built artifacts to the package index
//! - `bundle` - Build a standalone executable with pex
//! - `show` - Print the resolved configuration
//! - `preflight` - Check the workspace before running
//!
//! [`builtin`] assembles the command registry; handler names become CLI
//! names with underscores replaced by hyphens.

pub mod build;
pub mod bundle;
pub mod clean;
pub mod init;
pub mod lock;
pub mod preflight;
pub mod show;
pub mod upload;

pub use self::build::build;
pub use self::bundle::bundle;
pub use self::clean::clean;
pub use self::init::init;
pub use self::lock::lock;
pub use self::preflight::preflight;
pub use self::show::show_config;
pub use self::upload::upload;

use crate::registry::{Command, Registry};

/// Register `$handler` under a name derived from its identifier.
macro_rules! command {
    ($handler:ident, $desc:expr) => {
        Command::from_ident(stringify!($handler), $desc, $handler)
    };
}

/// Build the registry of builtin commands, in help-output order.
pub fn builtin() -> Registry {
    let mut registry = Registry::new();
    registry.register(command!(
        clean,
        "Remove the virtual environment, coverage data, and dist output"
    ));
    registry.register(command!(
        init,
        "Create the virtual environment and install pinned dependencies"
    ));
    registry.register(command!(lock, "Pin dependencies with pip-compile"));
    registry.register(command!(build, "Build sdist and wheel artifacts into dist/"));
    registry.register(command!(upload, "Upload built artifacts to the package index"));
    registry.register(command!(bundle, "Build a standalone executable with pex"));
    registry.register(command!(show_config, "Print the resolved environment configuration"));
    registry.register(command!(preflight, "Check interpreter, environment, and project files"));
    registry
}
